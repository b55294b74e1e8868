use serde::Serialize;

use crate::Rarity;

/// Leaderboard display row. Static mock data, never mutated by any session
/// operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub name: &'static str,
    pub avatar: &'static str,
    pub total_won: u64,
    pub cases_opened: u32,
}

/// The fixed top-players table shown in the read model.
pub const LEADERBOARD: [LeaderboardEntry; 3] = [
    LeaderboardEntry {
        name: "ProGamer",
        avatar: "🎮",
        total_won: 50_000,
        cases_opened: 120,
    },
    LeaderboardEntry {
        name: "LuckyOne",
        avatar: "🍀",
        total_won: 45_000,
        cases_opened: 95,
    },
    LeaderboardEntry {
        name: "CaseHunter",
        avatar: "🎯",
        total_won: 38_000,
        cases_opened: 150,
    },
];

/// One row of the recent-drops feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecentDrop {
    pub player: String,
    pub item: String,
    pub rarity: Rarity,
}

/// Rows the feed starts with before any real win lands.
pub fn seed_recent_drops() -> Vec<RecentDrop> {
    vec![
        RecentDrop {
            player: "Player1".to_string(),
            item: "Golden AWP".to_string(),
            rarity: Rarity::Legendary,
        },
        RecentDrop {
            player: "Player2".to_string(),
            item: "AK-47".to_string(),
            rarity: Rarity::Rare,
        },
        RecentDrop {
            player: "Player3".to_string(),
            item: "Knife".to_string(),
            rarity: Rarity::Epic,
        },
    ]
}
