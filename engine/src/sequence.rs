//! Roulette reveal sequence construction.
//!
//! A sequence is a disposable list of 50 display items. Slot 25 holds the
//! real reward; every other slot is a decoy sampled from the fixed pool.
//! Pinning the landing slot lets the animation layer translate by a constant
//! distance regardless of what was won.

use lootcase_types::{Item, ItemIdAllocator, DECOY_POOL, LANDING_SLOT, SEQUENCE_LENGTH};

use crate::rng::RewardRng;

/// Build a fresh reveal sequence around the won item.
///
/// Slots are sampled with replacement from the decoy pool, each with its base
/// value perturbed by the per-slot jitter. The won item is placed at the
/// landing slot verbatim.
pub fn build_sequence(won: &Item, rng: &mut RewardRng, ids: &mut ItemIdAllocator) -> Vec<Item> {
    let mut slots = Vec::with_capacity(SEQUENCE_LENGTH);
    for _ in 0..SEQUENCE_LENGTH {
        let decoy = rng.pick(&DECOY_POOL);
        let value = (decoy.base_value as f64 * rng.decoy_jitter()).floor() as u64;
        slots.push(Item {
            id: ids.next_id(),
            name: decoy.name.to_string(),
            rarity: decoy.rarity,
            value,
            icon: decoy.icon,
        });
    }

    slots[LANDING_SLOT] = won.clone();
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use lootcase_types::Rarity;

    fn won_item() -> Item {
        Item {
            id: 777,
            name: "Item from VIP Case".to_string(),
            rarity: Rarity::Legendary,
            value: 12_345,
            icon: "👑",
        }
    }

    #[test]
    fn test_sequence_length_and_landing_slot() {
        let won = won_item();
        let mut rng = RewardRng::from_seed(1);
        let mut ids = ItemIdAllocator::new(1);

        for _ in 0..50 {
            let sequence = build_sequence(&won, &mut rng, &mut ids);
            assert_eq!(sequence.len(), SEQUENCE_LENGTH);
            assert_eq!(sequence[LANDING_SLOT], won);
        }
    }

    #[test]
    fn test_decoys_come_from_pool() {
        let won = won_item();
        let mut rng = RewardRng::from_seed(2);
        let mut ids = ItemIdAllocator::new(1);
        let sequence = build_sequence(&won, &mut rng, &mut ids);

        for (slot, item) in sequence.iter().enumerate() {
            if slot == LANDING_SLOT {
                continue;
            }
            let template = DECOY_POOL
                .iter()
                .find(|d| d.name == item.name)
                .unwrap_or_else(|| panic!("slot {slot} not from decoy pool: {}", item.name));
            assert_eq!(item.rarity, template.rarity);

            // floor(base * [0.85, 1.15))
            let min = (template.base_value as f64 * 0.85).floor() as u64;
            let max = (template.base_value as f64 * 1.15).ceil() as u64;
            assert!(
                item.value >= min && item.value <= max,
                "slot {slot} value {} outside jitter window [{min}, {max}]",
                item.value
            );
        }
    }

    #[test]
    fn test_sequences_are_fresh_per_call() {
        let won = won_item();
        let mut rng = RewardRng::from_seed(3);
        let mut ids = ItemIdAllocator::new(1);

        let first = build_sequence(&won, &mut rng, &mut ids);
        let second = build_sequence(&won, &mut rng, &mut ids);
        // Decoy ids always advance, so two sequences can never be identical.
        assert_ne!(first, second);
    }

    #[test]
    fn test_fixed_seed_reproduces_sequence() {
        let won = won_item();

        let mut rng_a = RewardRng::from_seed(4);
        let mut ids_a = ItemIdAllocator::new(1);
        let a = build_sequence(&won, &mut rng_a, &mut ids_a);

        let mut rng_b = RewardRng::from_seed(4);
        let mut ids_b = ItemIdAllocator::new(1);
        let b = build_sequence(&won, &mut rng_b, &mut ids_b);

        assert_eq!(a, b);
    }
}
