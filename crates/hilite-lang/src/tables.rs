// Built-in per-language suffix and variant tables.
//
// Suffixes are ordered: stripping tries them in list order, so shorter
// common markers come first where the original corpora expect that.
// Variant lists map an unaccented base to the accented or script
// variants a searcher is likely to omit.

pub(crate) const ENGLISH_SUFFIXES: &[&str] = &["s", "es"];
pub(crate) const ENGLISH_VARIANTS: &[(char, &[char])] = &[];

pub(crate) const FRENCH_SUFFIXES: &[&str] = &["s", "es", "x"];
pub(crate) const FRENCH_VARIANTS: &[(char, &[char])] = &[
    ('a', &['\u{00E0}', '\u{00E2}']), // à â
    ('c', &['\u{00E7}']),             // ç
    (
        'e',
        &['\u{00E9}', '\u{00E8}', '\u{00EA}', '\u{00EB}'], // é è ê ë
    ),
    ('i', &['\u{00EE}', '\u{00EF}']), // î ï
    ('o', &['\u{00F4}']),             // ô
    ('u', &['\u{00F9}', '\u{00FB}', '\u{00FC}']), // ù û ü
];

// The ss/\u{00DF} equivalence is two-to-one and cannot be expressed as
// a single-character variant, so German carries umlauts only.
pub(crate) const GERMAN_SUFFIXES: &[&str] = &["e", "en", "er", "n", "s"];
pub(crate) const GERMAN_VARIANTS: &[(char, &[char])] = &[
    ('a', &['\u{00E4}']), // ä
    ('o', &['\u{00F6}']), // ö
    ('u', &['\u{00FC}']), // ü
];

pub(crate) const SPANISH_SUFFIXES: &[&str] = &["s", "es"];
pub(crate) const SPANISH_VARIANTS: &[(char, &[char])] = &[
    ('a', &['\u{00E1}']), // á
    ('e', &['\u{00E9}']), // é
    ('i', &['\u{00ED}']), // í
    ('n', &['\u{00F1}']), // ñ
    ('o', &['\u{00F3}']), // ó
    ('u', &['\u{00FA}', '\u{00FC}']), // ú ü
];

pub(crate) const TURKISH_SUFFIXES: &[&str] = &["lar", "ler"];
pub(crate) const TURKISH_VARIANTS: &[(char, &[char])] = &[
    ('c', &['\u{00E7}']),             // ç
    ('g', &['\u{011F}']),             // ğ
    ('i', &['\u{0131}', '\u{00EE}']), // ı î
    ('o', &['\u{00F6}']),             // ö
    ('s', &['\u{015F}']),             // ş
    ('u', &['\u{00FC}', '\u{00FB}']), // ü û
];
