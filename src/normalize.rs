//! Normalization of free-form style, gender and element input
//!
//! Every function here resolves to a value instead of failing. The fallback
//! arm of each match is the documented default for unrecognized input.

use crate::types::{ElementKey, Gender, NameStyle};

/// Bilingual element synonyms. English keys are matched case-insensitively.
const ELEMENT_SYNONYMS: &[(&str, ElementKey)] = &[
    ("불", ElementKey::Fire),
    ("화염", ElementKey::Fire),
    ("fire", ElementKey::Fire),
    ("물", ElementKey::Water),
    ("water", ElementKey::Water),
    ("바람", ElementKey::Air),
    ("air", ElementKey::Air),
    ("wind", ElementKey::Air),
    ("대지", ElementKey::Earth),
    ("땅", ElementKey::Earth),
    ("earth", ElementKey::Earth),
    ("빛", ElementKey::Light),
    ("light", ElementKey::Light),
    ("어둠", ElementKey::Dark),
    ("dark", ElementKey::Dark),
    ("번개", ElementKey::Lightning),
    ("lightning", ElementKey::Lightning),
    ("얼음", ElementKey::Ice),
    ("ice", ElementKey::Ice),
    ("강철", ElementKey::Steel),
    ("steel", ElementKey::Steel),
    ("metal", ElementKey::Steel),
    ("자연", ElementKey::Nature),
    ("nature", ElementKey::Nature),
];

/// Exactly `"male"` in any letter case is male; everything else, including
/// typos, padded input and the empty string, is female.
pub fn normalize_gender(value: &str) -> Gender {
    if value.eq_ignore_ascii_case("male") {
        Gender::Male
    } else {
        Gender::Female
    }
}

/// Case-insensitive style lookup. Unknown styles fall back to `Isekai`.
pub fn normalize_style(value: &str) -> NameStyle {
    match value.trim().to_lowercase().as_str() {
        "isekai" => NameStyle::Isekai,
        "western" => NameStyle::Western,
        "composed" | "combined" => NameStyle::Composed,
        "class" => NameStyle::Class,
        "elemental" => NameStyle::Elemental,
        "noble" => NameStyle::Noble,
        "mixed" => NameStyle::Mixed,
        unknown => {
            tracing::warn!(style = %unknown, "Unknown name style, using isekai");
            NameStyle::Isekai
        }
    }
}

/// Map an English or Korean element name onto its canonical key.
/// Absent or unrecognized input means "no element".
pub fn normalize_element(value: &str) -> Option<ElementKey> {
    let key = value.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    ELEMENT_SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == key)
        .map(|(_, element)| *element)
}

impl From<&str> for NameStyle {
    fn from(value: &str) -> Self {
        normalize_style(value)
    }
}

impl From<&str> for Gender {
    fn from(value: &str) -> Self {
        normalize_gender(value)
    }
}
