/// Coins a fresh session starts with.
pub const STARTING_BALANCE: u64 = 15_000;

/// Number of display slots in a roulette reveal sequence.
pub const SEQUENCE_LENGTH: usize = 50;

/// Zero-indexed slot the reveal animation settles on. Always holds the real
/// reward, so the animation layer can use a constant translation distance.
pub const LANDING_SLOT: usize = 25;

/// Spin animation duration in milliseconds. The host schedules `finish_spin`
/// this long after a successful open.
pub const SPIN_DURATION_MS: u64 = 3_000;

/// Sell-back rate in basis points: selling credits floor(value * 0.8).
pub const SELL_RATE_BPS: u64 = 8_000;

/// Basis-point denominator.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Cumulative rarity roll thresholds over a uniform value in [0, 1).
/// roll < 0.50 => Common, < 0.80 => Rare, < 0.95 => Epic, else Legendary.
pub const COMMON_THRESHOLD: f64 = 0.50;
pub const RARE_THRESHOLD: f64 = 0.80;
pub const EPIC_THRESHOLD: f64 = 0.95;

/// Item value roll: floor(price * (u * VALUE_ROLL_SPAN + VALUE_ROLL_FLOOR))
/// for u uniform in [0, 1), i.e. 80%..130% of the container price.
pub const VALUE_ROLL_FLOOR: f64 = 0.8;
pub const VALUE_ROLL_SPAN: f64 = 0.5;

/// Decoy value perturbation window applied per sampled reel slot.
pub const DECOY_JITTER_MIN: f64 = 0.85;
pub const DECOY_JITTER_MAX: f64 = 1.15;

/// Icon tokens a generated item can carry, picked uniformly per reward.
pub const ITEM_ICONS: [&str; 4] = ["🔫", "🔪", "🎯", "🛡️"];

/// Maximum entries kept in the recent-drops feed.
pub const RECENT_DROPS_CAP: usize = 10;

/// Display name for the local player in the recent-drops feed.
pub const SESSION_PLAYER_NAME: &str = "Player";
