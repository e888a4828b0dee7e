// Equivalence-group expansion stage

use hashbrown::HashMap;

use crate::character::simple_lower;
use crate::escape::push_escaped;
use crate::profile::VariantEntry;

/// Delimiter for the placeholder tokens used during substitution.
/// A control byte that cannot occur in textual search input.
const PLACEHOLDER_DELIMITER: char = '\u{0}';

/// A set of characters treated as interchangeable within one compile,
/// together with the alternation fragment that covers all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceGroup {
    /// Member characters, in discovery order.
    pub members: Vec<char>,
    /// Non-capturing alternation over the members, e.g. `(?:e|é|è)`.
    pub alternation: String,
}

/// Equivalence groups for one profile, plus the claim map recording
/// which group owns each character.
///
/// Built once per profile; expansion over any number of fragments
/// reuses it without mutation.
#[derive(Debug)]
pub struct EquivalenceTable {
    groups: Vec<EquivalenceGroup>,
    claims: HashMap<char, usize>,
}

impl EquivalenceTable {
    /// Build the groups from an ordered variant entry list.
    ///
    /// For each base character not yet claimed by an earlier group, the
    /// member set starts as the base plus its direct variants, then
    /// takes one more hop: the variant list of every character
    /// discovered so far is unioned in. The closure deliberately stops
    /// after that second hop rather than running to a fixed point, so a
    /// chain `a -> b -> c -> d` unifies `{a, b, c}` and leaves `d`
    /// untouched.
    ///
    /// Claims are first-come-first-served over the ordered entry list:
    /// a character already owned by an earlier group keeps that
    /// assignment, and a base that is itself already claimed produces
    /// no new group (its variant list has already been folded in, or it
    /// belongs to an unrelated earlier group).
    pub fn build(entries: &[VariantEntry]) -> Self {
        let index: HashMap<char, &[char]> = entries
            .iter()
            .map(|entry| (entry.base, entry.variants.as_slice()))
            .collect();

        let mut groups: Vec<EquivalenceGroup> = Vec::new();
        let mut claims: HashMap<char, usize> = HashMap::new();

        for entry in entries {
            if claims.contains_key(&entry.base) {
                continue;
            }

            // First hop: base plus its direct variants.
            let mut members = vec![entry.base];
            for &v in &entry.variants {
                if !members.contains(&v) {
                    members.push(v);
                }
            }

            // Second hop: variants of everything discovered so far.
            // Iterates a snapshot, so members added here are not
            // themselves expanded.
            let snapshot = members.clone();
            for m in snapshot {
                if let Some(variants) = index.get(&m) {
                    for &v in *variants {
                        if !members.contains(&v) {
                            members.push(v);
                        }
                    }
                }
            }

            let alternation = build_alternation(&members);
            let id = groups.len();
            for &m in &members {
                claims.entry(m).or_insert(id);
            }
            groups.push(EquivalenceGroup {
                members,
                alternation,
            });
        }

        EquivalenceTable { groups, claims }
    }

    /// The constructed groups, in entry order.
    pub fn groups(&self) -> &[EquivalenceGroup] {
        &self.groups
    }

    /// The group that owns `c`, if any.
    pub fn group_of(&self, c: char) -> Option<&EquivalenceGroup> {
        self.claims.get(&c).map(|&id| &self.groups[id])
    }

    /// Replace every claimed character in `fragment` with its group's
    /// alternation.
    ///
    /// Substitution runs in two phases so alternation text (which
    /// contains literal member characters) can never be re-matched by a
    /// later replacement:
    ///
    /// - Phase A walks the fragment once, left to right, treating a
    ///   backslash plus its follower as one unit. Every unit whose
    ///   literal character is claimed becomes a placeholder
    ///   (`NUL index NUL`); everything else is copied through. Only the
    ///   input is ever scanned, so after this phase the text contains
    ///   no occurrence of any claimed character and the result does not
    ///   depend on any per-group ordering. An uppercase character whose
    ///   lowercase form is claimed expands to that group as well; the
    ///   case-insensitive host regex then folds the alternation back
    ///   over both cases.
    /// - Phase B walks the masked text and splices each group's
    ///   alternation over its placeholder.
    pub fn expand(&self, fragment: &str) -> String {
        if self.groups.is_empty() {
            return fragment.to_string();
        }

        let chars: Vec<char> = fragment.chars().collect();

        // Phase A: mask claimed units.
        let mut masked = String::with_capacity(fragment.len());
        let mut i = 0;
        while i < chars.len() {
            let (literal, width) = if chars[i] == '\\' && i + 1 < chars.len() {
                (chars[i + 1], 2)
            } else {
                (chars[i], 1)
            };

            let claim = self
                .claims
                .get(&literal)
                .or_else(|| self.claims.get(&simple_lower(literal)));
            match claim {
                Some(&id) => {
                    masked.push(PLACEHOLDER_DELIMITER);
                    masked.push_str(&id.to_string());
                    masked.push(PLACEHOLDER_DELIMITER);
                }
                None => {
                    for k in 0..width {
                        // A stray control delimiter in the input would
                        // desynchronize phase B; drop it.
                        if chars[i + k] != PLACEHOLDER_DELIMITER {
                            masked.push(chars[i + k]);
                        }
                    }
                }
            }
            i += width;
        }

        // Phase B: splice alternations over the placeholders.
        let mut out = String::with_capacity(masked.len());
        let mut digits = String::new();
        let mut in_placeholder = false;
        for c in masked.chars() {
            if c == PLACEHOLDER_DELIMITER {
                if in_placeholder {
                    if let Ok(id) = digits.parse::<usize>() {
                        if let Some(group) = self.groups.get(id) {
                            out.push_str(&group.alternation);
                        }
                    }
                    digits.clear();
                }
                in_placeholder = !in_placeholder;
            } else if in_placeholder {
                digits.push(c);
            } else {
                out.push(c);
            }
        }
        out
    }
}

/// Build `(?:m1|m2|...)` over the members. Members are escaped so a
/// metacharacter smuggled in through a variant list stays a literal
/// branch instead of widening the match.
fn build_alternation(members: &[char]) -> String {
    let mut out = String::from("(?:");
    for (i, &m) in members.iter().enumerate() {
        if i > 0 {
            out.push('|');
        }
        push_escaped(&mut out, m);
    }
    out.push(')');
    out
}

/// Expand all variant equivalences in `fragment` in one shot.
///
/// Convenience over [`EquivalenceTable::build`] + [`EquivalenceTable::expand`]
/// for callers that compile a single fragment per profile.
pub fn expand_equivalences(fragment: &str, entries: &[VariantEntry]) -> String {
    EquivalenceTable::build(entries).expand(fragment)
}
