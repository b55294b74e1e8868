//! Scripted driver for the lootcase engine.
//!
//! Plays the role of the presentation layer: cycles through the catalog,
//! waits out spin timers, dismisses reveals, sells surplus items, and renders
//! every engine event as a log line. The engine never knows it is being
//! driven by a script.

use std::time::Duration;

use anyhow::Result;
use lootcase_engine::{CaseSession, RewardRng};
use lootcase_types::{Event, Rarity, SessionError, Snapshot, CATALOG, SPIN_DURATION_MS};
use tracing::{debug, info, warn};

/// Items the runner keeps before selling the cheapest ones back.
const INVENTORY_SOFT_CAP: usize = 8;

pub struct RunConfig {
    /// Fixed seed for reproducible runs; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Container opens to attempt.
    pub opens: u32,
    /// Skip the real-time spin wait (tests, CI).
    pub fast: bool,
}

/// Run a scripted session and return its final read-model snapshot.
pub async fn run(config: RunConfig) -> Result<Snapshot> {
    let rng = match config.seed {
        Some(seed) => RewardRng::from_seed(seed),
        None => RewardRng::from_entropy(),
    };
    let mut session = CaseSession::new(rng);
    info!(balance = session.balance(), "session started");

    for round in 0..config.opens {
        let container = &CATALOG[round as usize % CATALOG.len()];

        match session.open_container(container.id) {
            Ok(events) => render_events(&events),
            Err(error @ SessionError::InsufficientFunds { .. }) => {
                warn!(container = container.name, %error, "skipping container");
                continue;
            }
            Err(error) => return Err(error.into()),
        }

        if !config.fast {
            tokio::time::sleep(Duration::from_millis(SPIN_DURATION_MS)).await;
        }

        render_events(&session.finish_spin()?);
        render_events(&session.dismiss_reveal()?);

        sell_surplus(&mut session)?;
    }

    let snapshot = session.snapshot();
    info!(
        balance = snapshot.balance,
        items = snapshot.inventory.len(),
        "run complete"
    );
    Ok(snapshot)
}

/// Sell the cheapest items until the inventory fits under the soft cap.
fn sell_surplus(session: &mut CaseSession) -> Result<()> {
    while session.inventory().len() > INVENTORY_SOFT_CAP {
        let Some(cheapest) = session
            .inventory()
            .iter()
            .min_by_key(|item| item.value)
            .map(|item| item.id)
        else {
            break;
        };
        render_events(&session.sell_item(cheapest)?);
    }
    Ok(())
}

fn render_events(events: &[Event]) {
    for event in events {
        match event {
            Event::CaseOpened {
                name,
                price,
                balance,
                ..
            } => {
                info!(
                    "📦 CASE OPENED: {} for {} coins, balance {}",
                    name, price, balance
                );
            }
            Event::ItemWon { item, balance } => {
                info!(
                    "🎉 ITEM WON: {} ({}) worth {} coins, balance {}",
                    item.name, item.rarity, item.value, balance
                );
            }
            Event::FeedbackCue { rarity } => {
                // Fire-and-forget: a broken cue must never fail the run.
                if let Err(error) = play_feedback(*rarity) {
                    debug!(%error, "feedback cue dropped");
                }
            }
            Event::RevealDismissed => {
                debug!("reveal dismissed");
            }
            Event::ItemSold {
                name,
                credited,
                balance,
                ..
            } => {
                info!("💰 SOLD: {} for {} coins, balance {}", name, credited, balance);
            }
        }
    }
}

/// Render the rarity cue a real client would play as a sound.
fn play_feedback(rarity: Rarity) -> Result<()> {
    let cue = match rarity {
        Rarity::Common => "🔈",
        Rarity::Rare => "🔉",
        Rarity::Epic => "✨",
        Rarity::Legendary => "🏆",
    };
    info!("{} reveal cue: {}", cue, rarity);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lootcase_types::SessionPhase;

    #[tokio::test]
    async fn test_scripted_run_is_deterministic() {
        let config = || RunConfig {
            seed: Some(42),
            opens: 6,
            fast: true,
        };

        let a = run(config()).await.unwrap();
        let b = run(config()).await.unwrap();

        assert_eq!(a.balance, b.balance);
        assert_eq!(a.inventory, b.inventory);
    }

    #[tokio::test]
    async fn test_run_ends_idle_with_capped_inventory() {
        let snapshot = run(RunConfig {
            seed: Some(7),
            opens: 12,
            fast: true,
        })
        .await
        .unwrap();

        assert_eq!(snapshot.phase, SessionPhase::Idle);
        assert!(snapshot.inventory.len() <= INVENTORY_SOFT_CAP);
    }
}
