//! Reading tables for the numeral formatter.
//!
//! A table carries every word the formatter emits: digit names, the three
//! position suffixes, irregular sound-change spellings and the myriad period
//! names. Tables are plain `const` data; swap one in through
//! [`format_magnitude_with`](super::format_magnitude_with).

/// A position inside a 4-digit chunk that takes a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Place {
    Thousands,
    Hundreds,
    Tens,
}

/// Irregular spelling for one digit in one place (さんびゃく, not さんひゃく).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contraction {
    pub place: Place,
    pub digit: u8,
    pub reading: &'static str,
}

/// Complete word set for one way of reading numbers aloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralTable {
    /// Short identifier, used in log output.
    pub name: &'static str,
    /// Reading for the value zero.
    pub zero: &'static str,
    /// Digit names, index 0 unused.
    pub digits: [&'static str; 10],
    pub thousand: &'static str,
    pub hundred: &'static str,
    pub ten: &'static str,
    pub contractions: &'static [Contraction],
    /// Period names by myriad index; index 0 (units) is empty.
    pub periods: &'static [&'static str],
    /// Emitted in place of a period name past the end of `periods`.
    pub fallback: &'static str,
}

impl NumeralTable {
    /// Name of a single digit (1-9). Zero and out-of-range digits read as empty.
    #[inline]
    pub fn digit(&self, digit: u8) -> &'static str {
        self.digits.get(digit as usize).copied().unwrap_or("")
    }

    /// Suffix for a place.
    #[inline]
    pub fn suffix(&self, place: Place) -> &'static str {
        match place {
            Place::Thousands => self.thousand,
            Place::Hundreds => self.hundred,
            Place::Tens => self.ten,
        }
    }

    /// Irregular spelling for `digit` in `place`, if the table has one.
    pub fn contraction(&self, place: Place, digit: u8) -> Option<&'static str> {
        self.contractions
            .iter()
            .find(|c| c.place == place && c.digit == digit)
            .map(|c| c.reading)
    }

    /// Period name for a myriad index, `None` past the table.
    #[inline]
    pub fn period(&self, index: usize) -> Option<&'static str> {
        self.periods.get(index).copied()
    }

    /// Largest period index the table can name.
    #[inline]
    pub fn max_period(&self) -> usize {
        self.periods.len().saturating_sub(1)
    }
}

// =============================================================================
// Japanese (hiragana)
// =============================================================================

const JAPANESE_CONTRACTIONS: &[Contraction] = &[
    Contraction {
        place: Place::Thousands,
        digit: 3,
        reading: "さんぜん",
    },
    Contraction {
        place: Place::Thousands,
        digit: 8,
        reading: "はっせん",
    },
    Contraction {
        place: Place::Hundreds,
        digit: 3,
        reading: "さんびゃく",
    },
    Contraction {
        place: Place::Hundreds,
        digit: 6,
        reading: "ろっぴゃく",
    },
    Contraction {
        place: Place::Hundreds,
        digit: 8,
        reading: "はっぴゃく",
    },
];

const JAPANESE_DIGITS: [&str; 10] = [
    "", "いち", "に", "さん", "よん", "ご", "ろく", "なな", "はち", "きゅう",
];

const JAPANESE_PERIODS: &[&str] = &[
    "",
    "まん",             // 10^4
    "おく",             // 10^8
    "ちょう",           // 10^12
    "けい",             // 10^16
    "がい",             // 10^20
    "じょ",             // 10^24
    "じょう",           // 10^28
    "こう",             // 10^32
    "かん",             // 10^36
    "せい",             // 10^40
    "さい",             // 10^44
    "ごく",             // 10^48
    "ごうがしゃ",       // 10^52
    "あそうぎ",         // 10^56
    "なゆた",           // 10^60
    "ふかしぎ",         // 10^64
    "むりょうたいすう", // 10^68
];

/// Standard counting reading in hiragana. よん and なな are used for 4 and 7.
pub const JAPANESE: NumeralTable = NumeralTable {
    name: "japanese",
    zero: "ぜろ",
    digits: JAPANESE_DIGITS,
    thousand: "せん",
    hundred: "ひゃく",
    ten: "じゅう",
    contractions: JAPANESE_CONTRACTIONS,
    periods: JAPANESE_PERIODS,
    fallback: "？",
};

// =============================================================================
// Romaji
// =============================================================================

const ROMAJI_CONTRACTIONS: &[Contraction] = &[
    Contraction {
        place: Place::Thousands,
        digit: 3,
        reading: "sanzen",
    },
    Contraction {
        place: Place::Thousands,
        digit: 8,
        reading: "hassen",
    },
    Contraction {
        place: Place::Hundreds,
        digit: 3,
        reading: "sanbyaku",
    },
    Contraction {
        place: Place::Hundreds,
        digit: 6,
        reading: "roppyaku",
    },
    Contraction {
        place: Place::Hundreds,
        digit: 8,
        reading: "happyaku",
    },
];

const ROMAJI_PERIODS: &[&str] = &[
    "", "man", "oku", "chou", "kei", "gai", "jo", "jou", "kou", "kan", "sei", "sai", "goku",
    "gougasha", "asougi", "nayuta", "fukashigi", "muryoutaisuu",
];

/// The same reading rules, romanized.
pub const ROMAJI: NumeralTable = NumeralTable {
    name: "romaji",
    zero: "zero",
    digits: ["", "ichi", "ni", "san", "yon", "go", "roku", "nana", "hachi", "kyuu"],
    thousand: "sen",
    hundred: "hyaku",
    ten: "juu",
    contractions: ROMAJI_CONTRACTIONS,
    periods: ROMAJI_PERIODS,
    fallback: "?",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_name_seventeen_periods() {
        assert_eq!(JAPANESE.max_period(), 17);
        assert_eq!(ROMAJI.max_period(), 17);
        assert_eq!(JAPANESE.period(17), Some("むりょうたいすう"));
        assert_eq!(JAPANESE.period(18), None);
    }

    #[test]
    fn test_contraction_lookup() {
        assert_eq!(JAPANESE.contraction(Place::Hundreds, 6), Some("ろっぴゃく"));
        assert_eq!(JAPANESE.contraction(Place::Thousands, 6), None);
        assert_eq!(JAPANESE.contraction(Place::Tens, 3), None);
    }

    #[test]
    fn test_digit_out_of_range_is_empty() {
        assert_eq!(JAPANESE.digit(0), "");
        assert_eq!(JAPANESE.digit(12), "");
        assert_eq!(JAPANESE.digit(9), "きゅう");
    }
}
