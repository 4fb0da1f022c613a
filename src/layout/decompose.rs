//! Decomposition - split a magnitude into (unit, count) sections.
//!
//! The top section absorbs as many base-100 digits as fit under the display
//! threshold; every lower tier keeps its own digit (0..100). Work is linear in
//! the number of base-100 digits, never in the magnitude.

use num_bigint::BigUint;
use num_traits::Zero;

use super::config::LayoutConfig;
use super::units::Unit;

/// One section: `count` instances of `unit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub unit: Unit,
    pub count: u32,
}

/// Sections largest unit first, zero counts dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decomposition {
    pub sections: Vec<Section>,
}

impl Decomposition {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Sum of all section counts.
    pub fn total_instances(&self) -> u32 {
        self.sections.iter().map(|s| s.count).sum()
    }

    /// Σ count × scale. Equals the decomposed magnitude.
    pub fn reconstruct(&self) -> BigUint {
        self.sections
            .iter()
            .fold(BigUint::zero(), |acc, s| acc + s.unit.scale() * s.count)
    }
}

/// Decompose with the default threshold.
pub fn compute_decomposition(value: &BigUint) -> Decomposition {
    decompose(value, &LayoutConfig::default())
}

/// Decompose with an explicit config.
pub fn decompose(value: &BigUint, config: &LayoutConfig) -> Decomposition {
    if value.is_zero() {
        return Decomposition::default();
    }

    let threshold = u64::from(config.effective_threshold());
    let digits = value.to_radix_le(100);

    // Fold base-100 digits from the top while the running quotient stays
    // under the threshold. `top` never exceeds the threshold, so it fits u32.
    let mut top = 0u64;
    let mut base = digits.len();
    for tier in (0..digits.len()).rev() {
        let next = top * 100 + u64::from(digits[tier]);
        if next > threshold {
            break;
        }
        top = next;
        base = tier;
    }

    let mut sections = Vec::with_capacity(base + 1);
    if top > 0 {
        sections.push(Section {
            unit: Unit::for_tier(base),
            count: u32::try_from(top).unwrap_or(u32::MAX),
        });
    }
    for tier in (0..base).rev() {
        if digits[tier] > 0 {
            sections.push(Section {
                unit: Unit::for_tier(tier),
                count: u32::from(digits[tier]),
            });
        }
    }

    log::trace!(
        "decomposed {} base-100 digits into {} sections (base tier {base})",
        digits.len(),
        sections.len()
    );

    Decomposition { sections }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(value: u64) -> Vec<(usize, u32)> {
        compute_decomposition(&BigUint::from(value))
            .sections
            .iter()
            .map(|s| (s.unit.tier, s.count))
            .collect()
    }

    #[test]
    fn test_zero_is_empty() {
        assert!(compute_decomposition(&BigUint::zero()).is_empty());
    }

    #[test]
    fn test_under_threshold_is_single_section() {
        assert_eq!(counts(10), vec![(0, 10)]);
        assert_eq!(counts(2_000), vec![(0, 2_000)]);
    }

    #[test]
    fn test_moves_up_a_tier() {
        assert_eq!(counts(2_001), vec![(1, 20), (0, 1)]);
        assert_eq!(counts(10_000), vec![(1, 100)]);
        assert_eq!(counts(123_456), vec![(1, 1_234), (0, 56)]);
    }

    #[test]
    fn test_zero_digits_are_dropped() {
        assert_eq!(counts(50_000_007), vec![(3, 50), (0, 7)]);
        assert_eq!(counts(300_000_000), vec![(3, 300)]);
    }

    #[test]
    fn test_tight_threshold_walks_digits() {
        let config = LayoutConfig::default().with_display_threshold(99);
        let decomp = decompose(&BigUint::from(10_000u32), &config);
        let got: Vec<_> = decomp.sections.iter().map(|s| (s.unit.tier, s.count)).collect();
        assert_eq!(got, vec![(2, 1)]);
    }

    #[test]
    fn test_maximum_magnitude() {
        let max = BigUint::from(10u32).pow(69) - 1u32;
        let decomp = compute_decomposition(&max);
        // 69 nines: the top base-100 digit is 9, so 999 lands in tier 33.
        assert_eq!(decomp.sections.first().map(|s| (s.unit.tier, s.count)), Some((33, 999)));
        assert_eq!(decomp.len(), 34);
        assert_eq!(decomp.total_instances(), 999 + 33 * 99);
        assert_eq!(decomp.reconstruct(), max);
    }

    #[test]
    fn test_reconstruct_matches_input() {
        for value in [1u64, 99, 2_001, 987_654_321, 10_000_000_000_000_001] {
            let big = BigUint::from(value);
            assert_eq!(compute_decomposition(&big).reconstruct(), big);
        }
    }
}
