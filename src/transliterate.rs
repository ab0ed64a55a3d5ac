//! Latin approximations of option labels used as sort keys.
//!
//! Accented Latin letters collapse to their base form (`Å` sorts as `a`), so
//! "Åland Islands" lands between "Afghanistan" and "Albania". Characters from
//! scripts without a Latin mapping become [`UNMAPPED`]; labels containing it
//! sort by their original code points instead, which keeps CJK and Cyrillic
//! lists in a stable, deterministic order.

use std::ops::RangeInclusive;
use unidecode::unidecode_char;

/// Replacement for characters without a Latin approximation.
pub const UNMAPPED: char = '?';

/// Blocks approximated character by character: Latin-1 Supplement
/// (symbols and letters) through Latin Extended-B, Latin Extended Additional,
/// and General Punctuation.
const APPROXIMATED: [RangeInclusive<char>; 3] = [
    '\u{00A0}'..='\u{024F}',
    '\u{1E00}'..='\u{1EFF}',
    '\u{2000}'..='\u{206F}',
];

/// Replace every non-ASCII character with its Latin approximation, or with
/// [`UNMAPPED`] when none exists.
///
/// # Examples
///
/// ```rust
/// use country_select::transliterate::transliterate;
///
/// assert_eq!(transliterate("Åland Islands"), "Aland Islands");
/// assert_eq!(transliterate("Côte d’Ivoire"), "Cote d'Ivoire");
/// assert_eq!(transliterate("日本"), "??");
/// ```
#[must_use]
pub fn transliterate(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for ch in label.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else if APPROXIMATED.iter().any(|block| block.contains(&ch)) {
            match unidecode_char(ch) {
                "" => out.push(UNMAPPED),
                approximation => out.push_str(approximation),
            }
        } else {
            out.push(UNMAPPED);
        }
    }
    out
}

/// Ordering key for a label: the lower-cased transliteration, or the label
/// itself when transliteration loses information, with the original label
/// as tie-breaker.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    primary: String,
    label: String,
}

impl SortKey {
    /// Compute the key for `label`.
    #[must_use]
    pub fn new(label: &str) -> Self {
        let approximated = transliterate(label);
        let primary = if approximated.contains(UNMAPPED) {
            label.to_owned()
        } else {
            approximated.to_lowercase()
        };
        Self {
            primary,
            label: label.to_owned(),
        }
    }
}
