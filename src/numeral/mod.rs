//! Numeral Formatter - magnitude to spoken reading.
//!
//! Splits the magnitude into base-10,000 chunks ("periods"), reads each chunk
//! with the 4-digit reader and attaches the period name (まん, おく, ...) to the
//! chunk's last syllable group.
//!
//! ```
//! use kazu::numeral::format_magnitude;
//! use num_bigint::BigUint;
//!
//! assert_eq!(format_magnitude(&BigUint::from(0u32)), "ぜろ");
//! assert_eq!(format_magnitude(&BigUint::from(10_000u32)), "いちまん");
//! assert_eq!(format_magnitude(&BigUint::from(300u32)), "さんびゃく");
//! ```

pub mod reader;
pub mod table;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

pub use reader::read_chunk;
pub use table::{Contraction, JAPANESE, NumeralTable, Place, ROMAJI};

/// Chunk radix: one period per myriad.
pub const MYRIAD: u32 = 10_000;

/// Read a magnitude aloud using the Japanese table.
pub fn format_magnitude(value: &BigUint) -> String {
    format_magnitude_with(value, &JAPANESE)
}

/// Read a magnitude aloud using any table.
///
/// Total over every `BigUint`: periods beyond the table read as the table's
/// fallback token.
pub fn format_magnitude_with(value: &BigUint, table: &NumeralTable) -> String {
    if value.is_zero() {
        return table.zero.to_string();
    }

    let myriad = BigUint::from(MYRIAD);
    let mut rest = value.clone();
    let mut period = 0usize;
    let mut segments: Vec<String> = Vec::new();

    while !rest.is_zero() {
        let chunk = (&rest % &myriad).to_u16().unwrap_or_default();
        rest /= &myriad;

        if chunk != 0 {
            let mut words = read_chunk(chunk, table);
            if period > 0 {
                let name = table.period(period).unwrap_or_else(|| {
                    log::warn!(
                        "period {period} is past the {} table (max {}); using placeholder",
                        table.name,
                        table.max_period()
                    );
                    table.fallback
                });
                if let Some(last) = words.last_mut() {
                    last.push_str(name);
                }
            }
            segments.push(words.join(" "));
        }
        period += 1;
    }

    segments.reverse();
    segments.join(" ").trim().to_string()
}

// =============================================================================
// Tests
// =============================================================================
