//! Bounded magnitude input.
//!
//! The core accepts any `BigUint`; this is where values get clamped to the
//! digit ceiling before they reach it. Operations mirror a digit-reel
//! widget: bump one decimal place up or down, shift by a factor of ten.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{KazuError, Result};

/// 69 digits: up to 10^69 - 1, one past the last named period (10^68).
pub const DEFAULT_MAX_DIGITS: u32 = 69;

/// A magnitude kept within `0..=10^max_digits - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagnitudeSource {
    value: BigUint,
    max_value: BigUint,
    max_digits: u32,
}

impl Default for MagnitudeSource {
    fn default() -> Self {
        Self::with_max_digits(DEFAULT_MAX_DIGITS)
    }
}

impl MagnitudeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source with a custom ceiling (at least one digit).
    pub fn with_max_digits(max_digits: u32) -> Self {
        let max_digits = max_digits.max(1);
        Self {
            value: BigUint::zero(),
            max_value: pow10(max_digits) - 1u32,
            max_digits,
        }
    }

    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    #[inline]
    pub fn max_value(&self) -> &BigUint {
        &self.max_value
    }

    #[inline]
    pub fn max_digits(&self) -> u32 {
        self.max_digits
    }

    /// Replace the value, clamping to the ceiling.
    pub fn set(&mut self, value: BigUint) -> &BigUint {
        if value > self.max_value {
            log::debug!(
                "clamping {}-digit input to {} digits",
                value.to_string().len(),
                self.max_digits
            );
            self.value = self.max_value.clone();
        } else {
            self.value = value;
        }
        &self.value
    }

    /// Parse a plain decimal string (surrounding whitespace ignored).
    ///
    /// An empty string reads as zero. Any other non-digit is rejected and the
    /// current value is kept.
    pub fn set_from_str(&mut self, text: &str) -> Result<&BigUint> {
        let text = text.trim();
        if let Some((position, found)) = text.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(KazuError::InvalidDigit { position, found });
        }
        let value = if text.is_empty() {
            BigUint::zero()
        } else {
            BigUint::parse_bytes(text.as_bytes(), 10).unwrap_or_default()
        };
        Ok(self.set(value))
    }

    /// Add 10^power, clamping at the ceiling.
    pub fn increment_digit(&mut self, power: u32) -> &BigUint {
        let next = &self.value + pow10(power);
        self.set(next)
    }

    /// Subtract 10^power, stopping at zero.
    pub fn decrement_digit(&mut self, power: u32) -> &BigUint {
        let step = pow10(power);
        if self.value <= step {
            self.value = BigUint::zero();
        } else {
            self.value -= step;
        }
        &self.value
    }

    /// Shift one place left. Zero becomes ten so the press is visible.
    pub fn multiply_by_ten(&mut self) -> &BigUint {
        let next = if self.value.is_zero() {
            BigUint::from(10u32)
        } else {
            &self.value * 10u32
        };
        self.set(next)
    }

    /// Shift one place right, dropping the ones digit.
    pub fn divide_by_ten(&mut self) -> &BigUint {
        self.value /= 10u32;
        &self.value
    }

    /// Decimal digits, most significant first. Zero is `[0]`.
    pub fn digits(&self) -> Vec<u8> {
        self.value.to_radix_be(10)
    }

    /// True when another digit would exceed the ceiling.
    pub fn is_full(&self) -> bool {
        self.digits().len() as u32 >= self.max_digits
    }
}

fn pow10(exp: u32) -> BigUint {
    BigUint::from(10u32).pow(exp)
}
