use anyhow::Context;
use clap::Parser;
use lootcase_simulator::{run, RunConfig};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for a reproducible run; omitted means OS entropy.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of container opens to attempt.
    #[arg(short, long, default_value_t = 6)]
    opens: u32,

    /// Skip the real-time spin wait.
    #[arg(long)]
    fast: bool,

    /// Print the final read-model snapshot as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse args
    let args = Args::parse();

    // Create logger
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let snapshot = run(RunConfig {
        seed: args.seed,
        opens: args.opens,
        fast: args.fast,
    })
    .await
    .context("scripted run failed")?;

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&snapshot).context("failed to render snapshot")?;
        println!("{rendered}");
    } else {
        info!(
            balance = snapshot.balance,
            items = snapshot.inventory.len(),
            "final state"
        );
    }

    Ok(())
}
