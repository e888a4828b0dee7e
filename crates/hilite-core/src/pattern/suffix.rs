// Suffix relaxation stage

use crate::character::ends_with_ignore_case;
use crate::escape::escape_regex;

/// Make the profile's trailing suffixes optional at the end of `fragment`.
///
/// If the fragment already ends with one of the suffixes (compared
/// case-insensitively, first suffix in list order wins), that trailing
/// occurrence is stripped first so the stem is not left with a
/// mandatory suffix. The full suffix set is then appended as an
/// optional non-capturing alternation, e.g. `cat(?:s|es)?`.
///
/// The fragment arrives already regex-escaped, so the comparison is
/// made against the escaped rendition of each suffix; an escape
/// sequence is never split in the middle.
///
/// An empty suffix list leaves the fragment untouched: appending an
/// empty alternation such as `(?:)?` would be at best ambiguous regex
/// source, so the stage is a no-op instead.
pub fn relax_suffix(fragment: &str, suffixes: &[String]) -> String {
    if suffixes.is_empty() {
        return fragment.to_string();
    }

    let escaped: Vec<String> = suffixes.iter().map(|s| escape_regex(s)).collect();

    // Strip an existing trailing suffix, list order, first match wins.
    let chars: Vec<char> = fragment.chars().collect();
    let mut stem_len = chars.len();
    for suffix in &escaped {
        let suffix_chars: Vec<char> = suffix.chars().collect();
        if ends_with_ignore_case(&chars, &suffix_chars) {
            stem_len = chars.len() - suffix_chars.len();
            break;
        }
    }

    let mut out: String = chars[..stem_len].iter().collect();
    out.push_str("(?:");
    for (i, suffix) in escaped.iter().enumerate() {
        if i > 0 {
            out.push('|');
        }
        out.push_str(suffix);
    }
    out.push_str(")?");
    out
}
