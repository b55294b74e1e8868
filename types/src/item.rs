use serde::Serialize;

use crate::Rarity;

/// An owned inventory item produced by opening a container.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Unique per instance for the lifetime of a session.
    pub id: u64,
    pub name: String,
    pub rarity: Rarity,
    /// Value in coins, floored at generation time.
    pub value: u64,
    pub icon: &'static str,
}

/// Allocates strictly increasing item ids.
///
/// Ids only need to be unique within one session, but they must stay unique
/// under arbitrarily rapid generation, which a wall-clock timestamp cannot
/// guarantee.
#[derive(Clone, Debug)]
pub struct ItemIdAllocator {
    next: u64,
}

impl ItemIdAllocator {
    pub fn new(start: u64) -> Self {
        Self { next: start }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// A decoy template the roulette reel samples from.
#[derive(Clone, Copy, Debug)]
pub struct DecoyTemplate {
    pub name: &'static str,
    pub rarity: Rarity,
    /// Base value before the per-slot jitter is applied.
    pub base_value: u64,
    pub icon: &'static str,
}

/// Fixed decoy pool spanning all four rarities. Reel slots sample from this
/// pool with replacement; decoys are display-only and never enter inventory.
pub const DECOY_POOL: [DecoyTemplate; 8] = [
    DecoyTemplate {
        name: "P250 Sidearm",
        rarity: Rarity::Common,
        base_value: 300,
        icon: "🔫",
    },
    DecoyTemplate {
        name: "Field Knife",
        rarity: Rarity::Common,
        base_value: 450,
        icon: "🔪",
    },
    DecoyTemplate {
        name: "Desert Eagle",
        rarity: Rarity::Rare,
        base_value: 1_200,
        icon: "🔫",
    },
    DecoyTemplate {
        name: "AK-47 Redline",
        rarity: Rarity::Rare,
        base_value: 1_500,
        icon: "🎯",
    },
    DecoyTemplate {
        name: "M4A4 Howl",
        rarity: Rarity::Epic,
        base_value: 2_600,
        icon: "🎯",
    },
    DecoyTemplate {
        name: "Karambit Fade",
        rarity: Rarity::Epic,
        base_value: 3_100,
        icon: "🔪",
    },
    DecoyTemplate {
        name: "Butterfly Knife",
        rarity: Rarity::Legendary,
        base_value: 4_800,
        icon: "🔪",
    },
    DecoyTemplate {
        name: "AWP Dragon Lore",
        rarity: Rarity::Legendary,
        base_value: 5_200,
        icon: "🛡️",
    },
];

/// Items a fresh session's inventory is seeded with.
pub const STARTER_ITEMS: [(&str, Rarity, u64, &str); 3] = [
    ("Golden AWP", Rarity::Legendary, 5_000, "🔫"),
    ("Rare Knife", Rarity::Epic, 3_000, "🔪"),
    ("AK-47", Rarity::Rare, 1_500, "🎯"),
];
