//! Fuzzy token-to-regex pattern compiler.
//!
//! Given a single search token and a [`LanguageProfile`] (a set of
//! optional morphological suffixes plus letter-to-variant equivalences
//! such as accented forms), this crate emits a regular-expression
//! fragment that matches the token and all of its language-aware
//! variants. The caller embeds the fragment in a larger
//! case-insensitive regex and owns matching, tag insertion and
//! tokenization; this crate never performs matching itself.
//!
//! # Architecture
//!
//! - [`profile`] -- Language profile types and boundary validation
//! - [`character`] -- Simple case-folding helpers
//! - [`escape`] -- Regex-source escaping
//! - [`pattern`] -- The three compilation stages (suffix relaxation,
//!   trailing punctuation, equivalence expansion) and their orchestrator

pub mod character;
pub mod escape;
pub mod pattern;
pub mod profile;

pub use pattern::{PatternCompiler, compile};
pub use profile::{LanguageProfile, VariantEntry};

/// Error type for contract-violating language profiles.
///
/// Well-shaped profiles never fail: absent or empty fields are treated
/// as empty sets and any token compiles to some valid fragment. These
/// variants cover data that cannot be given a meaning, rejected at the
/// boundary instead of silently producing a broken pattern.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// A suffix entry is the empty string.
    #[error("suffix at index {index} is empty")]
    EmptySuffix { index: usize },

    /// The same base character has two variant entries.
    #[error("variant base {base:?} appears more than once")]
    DuplicateBase { base: char },
}
