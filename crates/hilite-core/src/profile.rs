// Language profile types and boundary validation

use hashbrown::HashSet;

use crate::ProfileError;

/// One base character together with the variant characters considered
/// equivalent to it (accents, script variants, case variants the host
/// regex does not already fold).
///
/// The mapping is not required to be symmetric or transitive: a variant
/// may itself appear as the base of another entry, and the compiler
/// unifies such chains with a bounded closure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantEntry {
    /// The canonical base character.
    pub base: char,
    /// Characters interchangeable with the base.
    #[cfg_attr(feature = "serde", serde(default))]
    pub variants: Vec<char>,
}

impl VariantEntry {
    /// Create an entry from a base character and its variants.
    pub fn new(base: char, variants: impl IntoIterator<Item = char>) -> Self {
        Self {
            base,
            variants: variants.into_iter().collect(),
        }
    }
}

/// Per-language configuration consumed by the pattern compiler.
///
/// Both fields are ordered: suffix stripping tries suffixes in list
/// order, and equivalence groups claim characters in entry order, so
/// the same profile always compiles the same pattern. Absent fields
/// mean empty sets; the empty profile is valid and compiles every token
/// to a pattern that still matches the token itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LanguageProfile {
    /// Morphological suffixes to treat as optional word endings
    /// (e.g. plural markers). Literal text, not regex.
    #[cfg_attr(feature = "serde", serde(default))]
    pub suffixes: Vec<String>,

    /// Base-character to variant-characters equivalences.
    #[cfg_attr(feature = "serde", serde(default))]
    pub variants: Vec<VariantEntry>,
}

impl LanguageProfile {
    /// The empty profile: no suffixes, no variants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the profile at the compiler boundary.
    ///
    /// An empty suffix string and a repeated base character carry no
    /// meaning and are rejected with a descriptive error instead of
    /// being woven into a pattern. A character appearing as a *variant*
    /// under several bases is legal; the compiler resolves it
    /// deterministically.
    pub fn validate(&self) -> Result<(), ProfileError> {
        for (index, suffix) in self.suffixes.iter().enumerate() {
            if suffix.is_empty() {
                return Err(ProfileError::EmptySuffix { index });
            }
        }

        let mut seen: HashSet<char> = HashSet::with_capacity(self.variants.len());
        for entry in &self.variants {
            if !seen.insert(entry.base) {
                return Err(ProfileError::DuplicateBase { base: entry.base });
            }
        }

        Ok(())
    }
}
