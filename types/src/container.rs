use serde::Serialize;

use crate::Rarity;

/// A purchasable randomized-reward container ("case").
///
/// The rarity tag is informational for display; the awarded rarity is rolled
/// independently when the container is opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Container {
    pub id: u32,
    pub name: &'static str,
    /// Cost in coins. Zero means free to open.
    pub price: u64,
    pub rarity: Rarity,
    pub icon: &'static str,
}

/// The fixed container catalog, defined at process start and never mutated.
pub const CATALOG: [Container; 6] = [
    Container {
        id: 1,
        name: "Legendary Case",
        price: 5_000,
        rarity: Rarity::Legendary,
        icon: "💎",
    },
    Container {
        id: 2,
        name: "Epic Case",
        price: 3_000,
        rarity: Rarity::Epic,
        icon: "🎁",
    },
    Container {
        id: 3,
        name: "Rare Case",
        price: 1_500,
        rarity: Rarity::Rare,
        icon: "📦",
    },
    Container {
        id: 4,
        name: "Common Case",
        price: 500,
        rarity: Rarity::Common,
        icon: "🎲",
    },
    Container {
        id: 5,
        name: "VIP Case",
        price: 10_000,
        rarity: Rarity::Legendary,
        icon: "👑",
    },
    Container {
        id: 6,
        name: "Daily Case",
        price: 0,
        rarity: Rarity::Common,
        icon: "🎯",
    },
];

/// Look up a catalog container by id.
pub fn find_container(id: u32) -> Option<&'static Container> {
    CATALOG.iter().find(|c| c.id == id)
}
