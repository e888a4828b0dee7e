// Character-level case folding helpers

/// Convert a character to its simple lowercase equivalent.
///
/// Uses the standard library's Unicode case mapping. For characters
/// with multi-character lowercase expansions, returns only the first
/// character (one-to-one mapping, which is all that suffix comparison
/// needs).
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Check whether `text` ends with `suffix`, ignoring character case.
pub fn ends_with_ignore_case(text: &[char], suffix: &[char]) -> bool {
    if suffix.len() > text.len() {
        return false;
    }
    text[text.len() - suffix.len()..]
        .iter()
        .zip(suffix.iter())
        .all(|(&a, &b)| simple_lower(a) == simple_lower(b))
}
