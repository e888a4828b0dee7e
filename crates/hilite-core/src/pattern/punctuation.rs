// Trailing punctuation relaxation stage

/// Optional trailing punctuation class: one of `, ; : . ! ?`.
///
/// The quantifier is the lazy `??`, so trailing punctuation is only
/// pulled into a match when the surrounding context requires it. The
/// set is fixed and language-independent.
pub const TRAILING_PUNCTUATION: &str = "[,;:\\.\\!\\?]??";

/// Allow one trailing punctuation character after `fragment`.
pub fn relax_punctuation(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len() + TRAILING_PUNCTUATION.len());
    out.push_str(fragment);
    out.push_str(TRAILING_PUNCTUATION);
    out
}
