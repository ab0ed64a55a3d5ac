//! Fluent localization test utilities.

/// Remove the bidi isolate marks (`\u{2068}`, `\u{2069}`) Fluent wraps
/// around placeables, so rendered messages can be compared as plain text.
///
/// # Examples
///
/// ```
/// use test_support::fluent::strip_isolates;
///
/// let raw = "Could not find Country with string '\u{2068}Atlantis\u{2069}'";
/// assert_eq!(strip_isolates(raw), "Could not find Country with string 'Atlantis'");
/// ```
#[must_use]
pub fn strip_isolates(text: &str) -> String {
    text.chars()
        .filter(|ch| !matches!(ch, '\u{2068}' | '\u{2069}'))
        .collect()
}
