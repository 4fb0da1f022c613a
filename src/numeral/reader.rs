//! 4-digit chunk reader.

use super::table::{NumeralTable, Place};

/// Read a chunk in `0..=9999` as a list of syllable groups.
///
/// Zero reads as nothing. A leading 1 is dropped in every suffixed place
/// (せん, ひゃく, じゅう) and the table's contractions replace the regular
/// digit + suffix spelling.
pub fn read_chunk(chunk: u16, table: &NumeralTable) -> Vec<String> {
    debug_assert!(chunk < 10_000, "chunk {chunk} is wider than four digits");

    let thousands = (chunk / 1000 % 10) as u8;
    let hundreds = (chunk / 100 % 10) as u8;
    let tens = (chunk / 10 % 10) as u8;
    let ones = (chunk % 10) as u8;

    let mut words = Vec::with_capacity(4);
    for (place, digit) in [
        (Place::Thousands, thousands),
        (Place::Hundreds, hundreds),
        (Place::Tens, tens),
    ] {
        if let Some(word) = read_place(place, digit, table) {
            words.push(word);
        }
    }
    if ones > 0 {
        words.push(table.digit(ones).to_string());
    }
    words
}

fn read_place(place: Place, digit: u8, table: &NumeralTable) -> Option<String> {
    if digit == 0 {
        return None;
    }
    if let Some(irregular) = table.contraction(place, digit) {
        return Some(irregular.to_string());
    }
    let suffix = table.suffix(place);
    if digit == 1 {
        return Some(suffix.to_string());
    }
    Some(format!("{}{}", table.digit(digit), suffix))
}
