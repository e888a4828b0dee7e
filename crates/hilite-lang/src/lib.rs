//! Built-in language profiles for the pattern compiler.
//!
//! Profiles carry the per-language data the compiler in `hilite-core`
//! consumes: morphological suffixes to relax and letter-variant
//! equivalences to expand. They are plain data; callers with their own
//! language tables can build a [`LanguageProfile`] directly and skip
//! this crate entirely.

mod tables;

use hilite_core::{LanguageProfile, VariantEntry};

/// Language codes with a built-in profile, alphabetical.
const LANGUAGES: &[&str] = &["de", "en", "es", "fr", "tr"];

/// The language codes this crate ships profiles for.
pub fn available() -> &'static [&'static str] {
    LANGUAGES
}

/// Look up the built-in profile for a language code.
///
/// Returns `None` for unknown codes; the caller decides whether that
/// is an error or a cue to fall back to the empty profile.
pub fn profile(code: &str) -> Option<LanguageProfile> {
    let (suffixes, variants) = match code {
        "de" => (tables::GERMAN_SUFFIXES, tables::GERMAN_VARIANTS),
        "en" => (tables::ENGLISH_SUFFIXES, tables::ENGLISH_VARIANTS),
        "es" => (tables::SPANISH_SUFFIXES, tables::SPANISH_VARIANTS),
        "fr" => (tables::FRENCH_SUFFIXES, tables::FRENCH_VARIANTS),
        "tr" => (tables::TURKISH_SUFFIXES, tables::TURKISH_VARIANTS),
        _ => return None,
    };
    Some(build_profile(suffixes, variants))
}

fn build_profile(suffixes: &[&str], variants: &[(char, &[char])]) -> LanguageProfile {
    LanguageProfile {
        suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
        variants: variants
            .iter()
            .map(|&(base, vs)| VariantEntry::new(base, vs.iter().copied()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilite_core::{PatternCompiler, compile};
    use regex::RegexBuilder;

    fn matcher(token: &str, code: &str) -> regex::Regex {
        let p = profile(code).expect("built-in profile");
        let fragment = compile(token, &p).expect("built-in profiles are valid");
        RegexBuilder::new(&format!("^(?:{fragment})$"))
            .case_insensitive(true)
            .build()
            .expect("built-in profiles compile to valid fragments")
    }

    #[test]
    fn every_listed_code_resolves() {
        for code in available() {
            assert!(profile(code).is_some(), "missing profile for {code}");
        }
    }

    #[test]
    fn listed_codes_are_sorted_and_unique() {
        let mut sorted = available().to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, available());
    }

    #[test]
    fn unknown_code_is_none() {
        assert!(profile("fi").is_none());
        assert!(profile("").is_none());
        assert!(profile("FR").is_none()); // codes are lowercase
    }

    #[test]
    fn every_profile_validates() {
        for code in available() {
            let p = profile(code).expect("built-in profile");
            assert!(
                PatternCompiler::new(&p).is_ok(),
                "profile {code} failed validation"
            );
        }
    }

    // -- Per-language spot checks --

    #[test]
    fn french_accents_and_plural() {
        let re = matcher("cafes", "fr");
        assert!(re.is_match("caf\u{00E9}s"));
        assert!(re.is_match("cafe"));
        assert!(re.is_match("caf\u{00E9}"));
    }

    #[test]
    fn french_unaccented_query_matches_accented_text() {
        let re = matcher("welcome", "fr");
        assert!(re.is_match("w\u{00E9}lc\u{00F4}me"));
        assert!(re.is_match("welcomes"));
    }

    #[test]
    fn turkish_ascii_query_matches_turkish_text() {
        assert!(matcher("ogrenci", "tr").is_match("\u{00F6}\u{011F}renci"));
        assert!(matcher("utu", "tr").is_match("\u{00FC}t\u{00FC}"));
        assert!(matcher("dagcilik", "tr").is_match("da\u{011F}c\u{0131}l\u{0131}k"));
        assert!(matcher("sehir", "tr").is_match("\u{015F}ehir"));
        assert!(matcher("cocuk", "tr").is_match("\u{00E7}ocuk"));
    }

    #[test]
    fn turkish_plural_suffixes_optional() {
        let re = matcher("kitap", "tr");
        assert!(re.is_match("kitap"));
        assert!(re.is_match("kitaplar"));
        assert!(re.is_match("kitapler"));
    }

    #[test]
    fn german_umlauts() {
        assert!(matcher("uber", "de").is_match("\u{00FC}ber"));
        assert!(matcher("schon", "de").is_match("sch\u{00F6}n"));
        assert!(matcher("hauser", "de").is_match("h\u{00E4}user"));
    }

    #[test]
    fn spanish_tilde() {
        assert!(matcher("manana", "es").is_match("ma\u{00F1}ana"));
    }

    #[test]
    fn english_has_no_variants() {
        let p = profile("en").expect("built-in profile");
        assert!(p.variants.is_empty());
        let re = matcher("word", "en");
        assert!(re.is_match("words"));
        assert!(re.is_match("word"));
    }
}
