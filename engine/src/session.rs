//! Session state machine: open, spin, reveal, sell.
//!
//! Phases: Idle -> Spinning -> Revealed -> Idle. Opening is atomic: guard,
//! debit, reward roll, and sequence build happen in one call before the
//! session is observably spinning. The Spinning -> Revealed transition is an
//! explicit message (`finish_spin`) the host schedules after the spin
//! duration, so tests can drive it synchronously.

use std::mem;

use lootcase_types::{
    find_container, seed_recent_drops, Event, Item, ItemIdAllocator, RecentDrop, SessionError,
    SessionPhase, Snapshot, BPS_DENOMINATOR, LEADERBOARD, RECENT_DROPS_CAP, SELL_RATE_BPS,
    SESSION_PLAYER_NAME, STARTER_ITEMS, STARTING_BALANCE,
};
use tracing::debug;

use crate::reward::roll_reward;
use crate::rng::RewardRng;
use crate::sequence::build_sequence;

enum Phase {
    Idle,
    Spinning {
        container_id: u32,
        pending: Item,
        sequence: Vec<Item>,
    },
    Revealed {
        item_id: u64,
    },
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Spinning { .. } => "spinning",
            Phase::Revealed { .. } => "revealed",
        }
    }
}

/// A single player's in-memory session: balance, inventory, and the
/// open/spin/reveal workflow. All state resets on restart.
pub struct CaseSession {
    balance: u64,
    /// Most-recent-first.
    inventory: Vec<Item>,
    recent_drops: Vec<RecentDrop>,
    phase: Phase,
    rng: RewardRng,
    ids: ItemIdAllocator,
}

impl CaseSession {
    /// Fresh session with the default starting balance and starter items.
    pub fn new(rng: RewardRng) -> Self {
        let mut ids = ItemIdAllocator::new(1);
        let inventory = STARTER_ITEMS
            .iter()
            .map(|&(name, rarity, value, icon)| Item {
                id: ids.next_id(),
                name: name.to_string(),
                rarity,
                value,
                icon,
            })
            .collect();

        Self {
            balance: STARTING_BALANCE,
            inventory,
            recent_drops: seed_recent_drops(),
            phase: Phase::Idle,
            rng,
            ids,
        }
    }

    /// Session with a custom bankroll and an empty inventory.
    pub fn with_balance(rng: RewardRng, balance: u64) -> Self {
        Self {
            balance,
            inventory: Vec::new(),
            recent_drops: seed_recent_drops(),
            phase: Phase::Idle,
            rng,
            ids: ItemIdAllocator::new(1),
        }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    pub fn phase(&self) -> SessionPhase {
        match self.phase {
            Phase::Idle => SessionPhase::Idle,
            Phase::Spinning { .. } => SessionPhase::Spinning,
            Phase::Revealed { .. } => SessionPhase::Revealed,
        }
    }

    /// The current reveal sequence, if a spin is in flight. The animation
    /// layer reads this; it never feeds back into the outcome.
    pub fn sequence(&self) -> Option<&[Item]> {
        match &self.phase {
            Phase::Spinning { sequence, .. } => Some(sequence),
            _ => None,
        }
    }

    /// Open a container: debit its price, fix the reward, build the reveal
    /// sequence, and enter Spinning. All-or-nothing; an underfunded or
    /// mis-phased open changes nothing.
    ///
    /// The host is expected to deliver `finish_spin` after `SPIN_DURATION_MS`.
    pub fn open_container(&mut self, container_id: u32) -> Result<Vec<Event>, SessionError> {
        if !matches!(self.phase, Phase::Idle) {
            return Err(SessionError::InvalidOperation {
                action: "open a container",
                phase: self.phase.name(),
            });
        }

        let container =
            find_container(container_id).ok_or(SessionError::UnknownContainer { id: container_id })?;

        if self.balance < container.price {
            return Err(SessionError::InsufficientFunds {
                needed: container.price,
                available: self.balance,
            });
        }

        // Point of no return: debit and outcome are committed together.
        self.balance -= container.price;
        let pending = roll_reward(container, &mut self.rng, &mut self.ids);
        let sequence = build_sequence(&pending, &mut self.rng, &mut self.ids);

        debug!(
            container = container.name,
            price = container.price,
            rarity = %pending.rarity,
            "container opened, spin started"
        );

        self.phase = Phase::Spinning {
            container_id,
            pending,
            sequence,
        };

        Ok(vec![Event::CaseOpened {
            container_id,
            name: container.name.to_string(),
            price: container.price,
            balance: self.balance,
        }])
    }

    /// Resolve the spin: commit the pending item to the inventory and enter
    /// Revealed. Valid only while Spinning.
    pub fn finish_spin(&mut self) -> Result<Vec<Event>, SessionError> {
        match mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Spinning { pending, .. } => Ok(self.commit_pending(pending)),
            other => {
                let phase = other.name();
                self.phase = other;
                Err(SessionError::InvalidOperation {
                    action: "finish a spin",
                    phase,
                })
            }
        }
    }

    /// Dismiss the reveal dialog and return to Idle.
    ///
    /// Dismissed mid-spin (early teardown), the pending item is committed
    /// first — flush policy: the reward was fixed at roll time and cosmetic
    /// dismissal must never lose or duplicate it.
    pub fn dismiss_reveal(&mut self) -> Result<Vec<Event>, SessionError> {
        match mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Revealed { .. } => Ok(vec![Event::RevealDismissed]),
            Phase::Spinning { pending, .. } => {
                let mut events = self.commit_pending(pending);
                self.phase = Phase::Idle;
                events.push(Event::RevealDismissed);
                Ok(events)
            }
            Phase::Idle => Err(SessionError::InvalidOperation {
                action: "dismiss the reveal",
                phase: "idle",
            }),
        }
    }

    /// Sell an owned item: credit floor(value * 0.8) and remove it from the
    /// inventory. Valid in Idle or Revealed, but never for the item still on
    /// display in the reveal dialog.
    pub fn sell_item(&mut self, item_id: u64) -> Result<Vec<Event>, SessionError> {
        match &self.phase {
            Phase::Spinning { .. } => {
                return Err(SessionError::InvalidOperation {
                    action: "sell an item",
                    phase: "spinning",
                });
            }
            Phase::Revealed { item_id: pending } if *pending == item_id => {
                return Err(SessionError::InvalidOperation {
                    action: "sell the pending reward",
                    phase: "revealed",
                });
            }
            _ => {}
        }

        let index = self
            .inventory
            .iter()
            .position(|item| item.id == item_id)
            .ok_or(SessionError::ItemNotOwned { id: item_id })?;

        let item = self.inventory.remove(index);
        let credited = item.value.saturating_mul(SELL_RATE_BPS) / BPS_DENOMINATOR;
        self.balance = self.balance.saturating_add(credited);

        debug!(item = item.name, credited, "item sold");

        Ok(vec![Event::ItemSold {
            item_id,
            name: item.name,
            credited,
            balance: self.balance,
        }])
    }

    /// Read model for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            balance: self.balance,
            phase: self.phase(),
            inventory: self.inventory.clone(),
            leaderboard: LEADERBOARD.to_vec(),
            recent_drops: self.recent_drops.clone(),
        }
    }

    fn commit_pending(&mut self, item: Item) -> Vec<Event> {
        self.inventory.insert(0, item.clone());

        self.recent_drops.insert(
            0,
            RecentDrop {
                player: SESSION_PLAYER_NAME.to_string(),
                item: item.name.clone(),
                rarity: item.rarity,
            },
        );
        self.recent_drops.truncate(RECENT_DROPS_CAP);

        self.phase = Phase::Revealed { item_id: item.id };

        vec![
            Event::ItemWon {
                item: item.clone(),
                balance: self.balance,
            },
            Event::FeedbackCue {
                rarity: item.rarity,
            },
        ]
    }
}
