use serde::Serialize;

use crate::{Item, LeaderboardEntry, RecentDrop};

/// Observable session phase, exposed to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    Idle,
    Spinning,
    Revealed,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Spinning => "spinning",
            SessionPhase::Revealed => "revealed",
        }
    }
}

/// Read model for the presentation layer: everything needed to render the
/// session, produced on demand and safe to serialize.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub balance: u64,
    pub phase: SessionPhase,
    /// Most-recent-first.
    pub inventory: Vec<Item>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub recent_drops: Vec<RecentDrop>,
}
