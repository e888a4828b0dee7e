// Pattern compilation pipeline

pub mod equivalence;
pub mod punctuation;
pub mod suffix;

use crate::ProfileError;
use crate::escape::escape_regex;
use crate::profile::LanguageProfile;

use self::equivalence::EquivalenceTable;

/// Compiles search tokens into fuzzy regex fragments for one language
/// profile.
///
/// The profile is validated once at construction and the equivalence
/// groups are precomputed (they depend only on the profile), so
/// compiling a batch of tokens pays the table cost a single time.
/// Compilation itself is a pure function of the token: no I/O, no
/// shared mutable state, safe to call from any number of threads.
pub struct PatternCompiler<'a> {
    profile: &'a LanguageProfile,
    equivalences: EquivalenceTable,
}

impl<'a> PatternCompiler<'a> {
    /// Validate `profile` and precompute its equivalence table.
    pub fn new(profile: &'a LanguageProfile) -> Result<Self, ProfileError> {
        profile.validate()?;
        Ok(Self {
            profile,
            equivalences: EquivalenceTable::build(&profile.variants),
        })
    }

    /// Compile one token into a regex fragment.
    ///
    /// The token is escaped first, then the stages run in fixed order:
    /// suffix relaxation, trailing punctuation, equivalence expansion.
    /// Expansion runs last on purpose: the letters introduced by the
    /// suffix alternation are themselves subject to variant expansion
    /// (an accented suffix letter should be relaxed too), while the
    /// reverse order would break suffix stripping, which compares
    /// literal text rather than regex syntax.
    ///
    /// The returned fragment is valid regex source (balanced groups,
    /// escaped literals) meant to be embedded in a larger
    /// case-insensitive pattern by the caller.
    pub fn compile(&self, token: &str) -> String {
        let fragment = escape_regex(token);
        let fragment = suffix::relax_suffix(&fragment, &self.profile.suffixes);
        let fragment = punctuation::relax_punctuation(&fragment);
        self.equivalences.expand(&fragment)
    }

    /// The profile this compiler was built from.
    pub fn profile(&self) -> &LanguageProfile {
        self.profile
    }
}

/// One-shot convenience: validate `profile` and compile a single token.
///
/// Callers compiling many tokens against the same profile should build
/// a [`PatternCompiler`] instead and reuse it.
pub fn compile(token: &str, profile: &LanguageProfile) -> Result<String, ProfileError> {
    Ok(PatternCompiler::new(profile)?.compile(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::VariantEntry;

    fn profile(suffixes: &[&str], variants: &[(char, &[char])]) -> LanguageProfile {
        LanguageProfile {
            suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
            variants: variants
                .iter()
                .map(|&(base, vs)| VariantEntry::new(base, vs.iter().copied()))
                .collect(),
        }
    }

    #[test]
    fn empty_profile_still_relaxes_punctuation() {
        let p = LanguageProfile::new();
        assert_eq!(compile("hello", &p).unwrap(), "hello[,;:\\.\\!\\?]??");
    }

    #[test]
    fn stages_compose_in_order() {
        let p = profile(&["s"], &[('e', &['\u{00E9}'])]);
        assert_eq!(
            compile("walk", &p).unwrap(),
            "walk(?:s)?[,;:\\.\\!\\?]??"
        );
    }

    #[test]
    fn suffix_letters_are_expanded_too() {
        // The 'e' introduced by the "es" suffix alternation is itself
        // subject to equivalence expansion.
        let p = profile(&["es"], &[('e', &['\u{00E9}'])]);
        assert_eq!(
            compile("walk", &p).unwrap(),
            "walk(?:(?:e|\u{00E9})s)?[,;:\\.\\!\\?]??"
        );
    }

    #[test]
    fn token_metacharacters_escaped_before_everything() {
        let p = LanguageProfile::new();
        assert_eq!(compile("a.b", &p).unwrap(), "a\\.b[,;:\\.\\!\\?]??");
    }

    #[test]
    fn invalid_profile_reported_at_boundary() {
        let p = profile(&[""], &[]);
        assert!(compile("walk", &p).is_err());
        assert!(PatternCompiler::new(&p).is_err());
    }

    #[test]
    fn compiler_reuse_is_pure() {
        let p = profile(&["s"], &[('e', &['\u{00E9}'])]);
        let compiler = PatternCompiler::new(&p).unwrap();
        let first = compiler.compile("hello");
        let second = compiler.compile("hello");
        assert_eq!(first, second);
        assert_eq!(compiler.compile("there"), compiler.compile("there"));
    }

    #[test]
    fn accented_token_full_pipeline() {
        // "wélcôme" with French-style tables: every accented letter
        // becomes its group alternation.
        let p = profile(
            &["s"],
            &[
                ('e', &['\u{00E9}', '\u{00E8}', '\u{00EA}']),
                ('o', &['\u{00F4}']),
            ],
        );
        let pattern = compile("w\u{00E9}lc\u{00F4}me", &p).unwrap();
        assert_eq!(
            pattern,
            "w(?:e|\u{00E9}|\u{00E8}|\u{00EA})lc(?:o|\u{00F4})m(?:e|\u{00E9}|\u{00E8}|\u{00EA})(?:s)?[,;:\\.\\!\\?]??"
        );
    }
}
