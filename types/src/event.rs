use serde::Serialize;

use crate::{Item, Rarity};

/// Structured notifications emitted by session operations.
///
/// The engine never calls into display code; the presentation layer maps
/// these to toasts, sounds, and animation triggers as it sees fit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Event {
    /// A container was paid for and the reveal spin started.
    CaseOpened {
        container_id: u32,
        name: String,
        price: u64,
        balance: u64,
    },

    /// The spin resolved and the won item entered the inventory.
    ItemWon { item: Item, balance: u64 },

    /// Fire-and-forget reveal cue keyed by rarity. Producing the cue must
    /// never block or fail the underlying transition.
    FeedbackCue { rarity: Rarity },

    /// The reveal dialog was dismissed and the session returned to idle.
    RevealDismissed,

    /// An inventory item was sold back for coins.
    ItemSold {
        item_id: u64,
        name: String,
        credited: u64,
        balance: u64,
    },
}
