//! Roman numeral table for chapter identifiers.
//!
//! Saga editions number their chapters I through L. The table is generated
//! once, lazily, and is the only process-wide state in the crate.

use std::sync::LazyLock;

/// Highest chapter number that can appear in a saga edition.
pub const MAX_CHAPTER: u32 = 50;

static NUMERALS: LazyLock<Vec<String>> =
    LazyLock::new(|| (1..=MAX_CHAPTER).map(to_roman).collect());

/// Canonical Roman numeral in standard subtractive notation.
fn to_roman(mut n: u32) -> String {
    const TABLE: [(u32, &str); 9] = [
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut out = String::new();
    for (value, digits) in TABLE {
        while n >= value {
            out.push_str(digits);
            n -= value;
        }
    }
    out
}

/// The numeral for a chapter number, or `None` outside 1..=[`MAX_CHAPTER`].
pub fn numeral(n: u32) -> Option<&'static str> {
    if n == 0 {
        return None;
    }
    NUMERALS.get(n as usize - 1).map(|s| s.as_str())
}

/// The chapter number for a numeral, or `None` if it is not one of the
/// generated values.
pub fn value(numeral: &str) -> Option<u32> {
    NUMERALS
        .iter()
        .position(|s| s == numeral)
        .map(|i| i as u32 + 1)
}

/// Exact membership test against the generated numerals "I".."L".
///
/// Case-sensitive, no partial matching: `"IV"` passes, `"iv"`, `"IIII"` and
/// `"LI"` do not.
pub fn is_valid_chapter_numeral(s: &str) -> bool {
    value(s).is_some()
}
