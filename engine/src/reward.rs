//! Reward generation for container opens.
//!
//! The outcome of an open is fixed here, at roll time. The roulette reveal
//! built afterwards is purely cosmetic and can never change which item the
//! session ultimately receives.

use lootcase_types::{Container, Item, ItemIdAllocator, Rarity, ITEM_ICONS};

use crate::rng::RewardRng;

/// Roll the reward for an opened container.
///
/// Roll order is fixed (rarity, then value, then icon) so a seeded RNG
/// reproduces rewards exactly. The container's own rarity tag does not
/// influence the roll; it is display metadata only.
///
/// A free container (price 0) always awards a value-0 item under the value
/// formula. This is documented product behavior, kept as-is.
pub fn roll_reward(container: &Container, rng: &mut RewardRng, ids: &mut ItemIdAllocator) -> Item {
    let rarity = Rarity::from_roll(rng.unit());
    let value = (container.price as f64 * rng.value_factor()).floor() as u64;
    let icon = *rng.pick(&ITEM_ICONS);

    Item {
        id: ids.next_id(),
        name: format!("Item from {}", container.name),
        rarity,
        value,
        icon,
    }
}
