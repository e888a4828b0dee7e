// Regex-source escaping

/// Characters with special meaning in regular-expression source.
const METACHARACTERS: &[char] = &[
    '\\', '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']',
];

/// Check whether a character needs escaping when emitted as a literal.
pub fn is_metacharacter(c: char) -> bool {
    METACHARACTERS.contains(&c)
}

/// Append `c` to `out`, backslash-escaped if it is a metacharacter.
pub fn push_escaped(out: &mut String, c: char) {
    if is_metacharacter(c) {
        out.push('\\');
    }
    out.push(c);
}

/// Escape every regex metacharacter in `text`.
///
/// The compiler calls this once on the raw token before any stage runs,
/// so all later stages operate on regex-safe text and a token such as
/// `a.b` matches the literal dot rather than any character.
pub fn escape_regex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        push_escaped(&mut out, c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape_regex("hello"), "hello");
        assert_eq!(escape_regex("caf\u{00E9}"), "caf\u{00E9}");
    }

    #[test]
    fn dot_escaped() {
        assert_eq!(escape_regex("a.b"), "a\\.b");
    }

    #[test]
    fn all_metacharacters_escaped() {
        assert_eq!(
            escape_regex(r"\.*+?^${}()|[]"),
            r"\\\.\*\+\?\^\$\{\}\(\)\|\[\]"
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(escape_regex(""), "");
    }

    #[test]
    fn is_metacharacter_classification() {
        assert!(is_metacharacter('.'));
        assert!(is_metacharacter('\\'));
        assert!(is_metacharacter('?'));
        assert!(!is_metacharacter('a'));
        assert!(!is_metacharacter(','));
        assert!(!is_metacharacter('!'));
    }
}
