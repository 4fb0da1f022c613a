//! Layout unit tiers.
//!
//! Tier `t` stands for 100^t. Each tier has a legend label and a color.
//! The table stops at 100^34 = 10^68; higher tiers are still valid and get
//! a generated label and a recycled color.

use std::borrow::Cow;

use num_bigint::BigUint;

use crate::types::Rgba;

/// Static entry of the tier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitTier {
    pub label: &'static str,
    pub color: Rgba,
}

const fn tier(label: &'static str, rgb: u32) -> UnitTier {
    UnitTier {
        label,
        color: Rgba::from_rgb_int(rgb),
    }
}

/// Tier table, index = power of 100.
pub const UNIT_TIERS: [UnitTier; 35] = [
    tier("1", 0xe23636),
    tier("100", 0x62e889),
    tier("1万", 0x9a36e2),
    tier("100万", 0xe8d862),
    tier("1億", 0x36c5e2),
    tier("100億", 0xe862ab),
    tier("1兆", 0x61e236),
    tier("100兆", 0x6862e8),
    tier("1京", 0xe26f36),
    tier("100京", 0x62e8b6),
    tier("1垓", 0xd436e2),
    tier("100垓", 0xcce862),
    tier("1𥝱", 0x368be2),
    tier("100𥝱", 0xe8627e),
    tier("1穣", 0x36e244),
    tier("100穣", 0x9562e8),
    tier("1溝", 0xe2a936),
    tier("100溝", 0x62e8e3),
    tier("1澗", 0xe236b6),
    tier("100澗", 0x9fe862),
    tier("1正", 0x3652e2),
    tier("100正", 0xe87362),
    tier("1載", 0x36e27e),
    tier("100載", 0xc262e8),
    tier("1極", 0xe1e236),
    tier("100極", 0x62c1e8),
    tier("1恒河沙", 0xe2367d),
    tier("100恒河沙", 0x73e862),
    tier("1阿僧祇", 0x5336e2),
    tier("100阿僧祇", 0xe8a062),
    tier("1那由他", 0x36e2b7),
    tier("100那由他", 0xe862e2),
    tier("1不可思議", 0xa8e236),
    tier("100不可思議", 0x6294e8),
    tier("1無量大数", 0xe23643),
];

/// Ratio between neighboring tiers.
pub const TIER_BASE: u32 = 100;

/// A resolved tier, valid for any index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub tier: usize,
    pub label: Cow<'static, str>,
    pub color: Rgba,
}

impl Unit {
    /// Resolve a tier index against [`UNIT_TIERS`].
    pub fn for_tier(tier: usize) -> Self {
        match UNIT_TIERS.get(tier) {
            Some(entry) => Self {
                tier,
                label: Cow::Borrowed(entry.label),
                color: entry.color,
            },
            None => {
                log::warn!("layout tier {tier} is past the unit table; extending 100^{tier}");
                Self {
                    tier,
                    label: Cow::Owned(format!("100^{tier}")),
                    color: UNIT_TIERS[tier % UNIT_TIERS.len()].color,
                }
            }
        }
    }

    /// 100^tier as a big integer.
    pub fn scale(&self) -> BigUint {
        BigUint::from(TIER_BASE).pow(self.tier as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_tops_out_at_ten_to_sixty_eight() {
        let top = Unit::for_tier(UNIT_TIERS.len() - 1);
        assert_eq!(top.scale(), BigUint::from(10u32).pow(68));
        assert_eq!(top.label, "1無量大数");
    }

    #[test]
    fn test_colors_are_distinct() {
        for (i, a) in UNIT_TIERS.iter().enumerate() {
            for b in &UNIT_TIERS[i + 1..] {
                assert_ne!(a.color, b.color, "{} and {} share a color", a.label, b.label);
            }
        }
    }

    #[test]
    fn test_tier_past_table_extends() {
        let unit = Unit::for_tier(36);
        assert_eq!(unit.label, "100^36");
        assert_eq!(unit.scale(), BigUint::from(10u32).pow(72));
    }
}
