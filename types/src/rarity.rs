use std::fmt;

use serde::Serialize;

use crate::{COMMON_THRESHOLD, EPIC_THRESHOLD, RARE_THRESHOLD};

/// Rarity tiers, ordered from most to least frequent.
///
/// Rarity governs drop probability (see the cumulative thresholds in
/// `constants`) and drives the presentation layer's reveal feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Rarity {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
}

impl Rarity {
    /// Map a uniform roll in [0, 1) to a rarity tier via the fixed cumulative
    /// threshold table. The table is policy and must not drift: 50/30/15/5%.
    pub fn from_roll(roll: f64) -> Self {
        if roll < COMMON_THRESHOLD {
            Rarity::Common
        } else if roll < RARE_THRESHOLD {
            Rarity::Rare
        } else if roll < EPIC_THRESHOLD {
            Rarity::Epic
        } else {
            Rarity::Legendary
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(Rarity::from_roll(0.0), Rarity::Common);
        assert_eq!(Rarity::from_roll(0.4999), Rarity::Common);
        assert_eq!(Rarity::from_roll(0.50), Rarity::Rare);
        assert_eq!(Rarity::from_roll(0.7999), Rarity::Rare);
        assert_eq!(Rarity::from_roll(0.80), Rarity::Epic);
        assert_eq!(Rarity::from_roll(0.9499), Rarity::Epic);
        assert_eq!(Rarity::from_roll(0.95), Rarity::Legendary);
        assert_eq!(Rarity::from_roll(0.9999), Rarity::Legendary);
    }

    #[test]
    fn test_ordering() {
        assert!(Rarity::Common < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Epic);
        assert!(Rarity::Epic < Rarity::Legendary);
    }
}
