//! Core types and structures for name-forge

use crate::error::{NameForgeError, Result};
use crate::normalize;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Sentinel written into records whose class or element was never assigned
pub const UNSPECIFIED: &str = "미정";

/// Requested naming style, including the `Mixed` meta-style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    Isekai,
    Western,
    Composed,
    Class,
    Elemental,
    Noble,
    Mixed,
}

impl NameStyle {
    /// Resolve to a concrete style. `Mixed` picks uniformly among the six
    /// concrete styles and can never resolve to itself.
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> ConcreteStyle {
        match self {
            NameStyle::Isekai => ConcreteStyle::Isekai,
            NameStyle::Western => ConcreteStyle::Western,
            NameStyle::Composed => ConcreteStyle::Composed,
            NameStyle::Class => ConcreteStyle::Class,
            NameStyle::Elemental => ConcreteStyle::Elemental,
            NameStyle::Noble => ConcreteStyle::Noble,
            NameStyle::Mixed => *ConcreteStyle::ALL
                .choose(rng)
                .unwrap_or(&ConcreteStyle::Isekai),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NameStyle::Isekai => "isekai",
            NameStyle::Western => "western",
            NameStyle::Composed => "composed",
            NameStyle::Class => "class",
            NameStyle::Elemental => "elemental",
            NameStyle::Noble => "noble",
            NameStyle::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for NameStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ConcreteStyle> for NameStyle {
    fn from(style: ConcreteStyle) -> Self {
        match style {
            ConcreteStyle::Isekai => NameStyle::Isekai,
            ConcreteStyle::Western => NameStyle::Western,
            ConcreteStyle::Composed => NameStyle::Composed,
            ConcreteStyle::Class => NameStyle::Class,
            ConcreteStyle::Elemental => NameStyle::Elemental,
            ConcreteStyle::Noble => NameStyle::Noble,
        }
    }
}

/// A style that maps to exactly one strategy module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcreteStyle {
    Isekai,
    Western,
    Composed,
    Class,
    Elemental,
    Noble,
}

impl ConcreteStyle {
    pub const ALL: [ConcreteStyle; 6] = [
        ConcreteStyle::Isekai,
        ConcreteStyle::Western,
        ConcreteStyle::Composed,
        ConcreteStyle::Class,
        ConcreteStyle::Elemental,
        ConcreteStyle::Noble,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConcreteStyle::Isekai => "isekai",
            ConcreteStyle::Western => "western",
            ConcreteStyle::Composed => "composed",
            ConcreteStyle::Class => "class",
            ConcreteStyle::Elemental => "elemental",
            ConcreteStyle::Noble => "noble",
        }
    }
}

impl std::fmt::Display for ConcreteStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Character gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Pick male or female with equal probability
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical element / attribute key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKey {
    Fire,
    Water,
    Air,
    Earth,
    Light,
    Dark,
    Lightning,
    Ice,
    Steel,
    Nature,
}

impl ElementKey {
    pub const ALL: [ElementKey; 10] = [
        ElementKey::Fire,
        ElementKey::Water,
        ElementKey::Air,
        ElementKey::Earth,
        ElementKey::Light,
        ElementKey::Dark,
        ElementKey::Lightning,
        ElementKey::Ice,
        ElementKey::Steel,
        ElementKey::Nature,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKey::Fire => "fire",
            ElementKey::Water => "water",
            ElementKey::Air => "air",
            ElementKey::Earth => "earth",
            ElementKey::Light => "light",
            ElementKey::Dark => "dark",
            ElementKey::Lightning => "lightning",
            ElementKey::Ice => "ice",
            ElementKey::Steel => "steel",
            ElementKey::Nature => "nature",
        }
    }

    /// Korean display name
    pub fn korean_name(&self) -> &'static str {
        match self {
            ElementKey::Fire => "불",
            ElementKey::Water => "물",
            ElementKey::Air => "바람",
            ElementKey::Earth => "대지",
            ElementKey::Light => "빛",
            ElementKey::Dark => "어둠",
            ElementKey::Lightning => "번개",
            ElementKey::Ice => "얼음",
            ElementKey::Steel => "강철",
            ElementKey::Nature => "자연",
        }
    }
}

impl std::fmt::Display for ElementKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output of a single strategy call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedName {
    Single(String),
    Noble { first_name: String, surname: String },
}

impl GeneratedName {
    /// Display string; nobles are joined first name first
    pub fn into_display(self) -> String {
        match self {
            GeneratedName::Single(name) => name,
            GeneratedName::Noble { first_name, surname } => {
                crate::styles::noble::format_noble_name(&first_name, &surname)
            }
        }
    }
}

impl std::fmt::Display for GeneratedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratedName::Single(name) => write!(f, "{}", name),
            GeneratedName::Noble { first_name, surname } => {
                write!(f, "{}", crate::styles::noble::format_noble_name(first_name, surname))
            }
        }
    }
}

/// Generated character with its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDetail {
    pub name: String,
    pub gender: Gender,
    pub style: ConcreteStyle,
    pub character_class: String,
    pub element: String,
    pub personality: String,
}

/// One entry of the isekai or western category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchNameEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub origin: String,
}

/// Lord and lady sharing one family surname
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NobleFamily {
    pub family_name: String,
    pub lord: String,
    pub lady: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Category-partitioned batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchCategoryResult {
    pub isekai_names: Vec<BatchNameEntry>,
    pub western_fantasy_names: Vec<BatchNameEntry>,
    pub noble_families: Vec<NobleFamily>,
}

impl BatchCategoryResult {
    /// Total number of entries over all categories
    pub fn len(&self) -> usize {
        self.isekai_names.len() + self.western_fantasy_names.len() + self.noble_families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Configuration for the name generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub default_style: NameStyle,
    pub default_gender: Gender,
    pub default_count: usize,
    pub default_batch_per_category: usize,
    pub max_batch_size: usize,
    pub personalities: Vec<String>,
}

/// Descriptors attached to generated characters
pub const DEFAULT_PERSONALITIES: &[&str] = &[
    "용감한", "지혜로운", "신비로운", "우아한", "강인한", "온화한",
    "냉정한", "열정적인", "순수한", "교활한", "매력적인", "카리스마 있는",
    "고독한", "자유로운", "창의적인", "충성스러운", "호기심 많은", "결단력 있는",
];

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_style: NameStyle::Isekai,
            default_gender: Gender::Female,
            default_count: 10,
            default_batch_per_category: 5,
            max_batch_size: 50,
            personalities: DEFAULT_PERSONALITIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GeneratorConfig {
    /// Build a configuration from `NAME_FORGE_*` environment variables,
    /// falling back to defaults for unset ones
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GeneratorConfig::from_env`] with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(style) = lookup("NAME_FORGE_DEFAULT_STYLE") {
            config.default_style = normalize::normalize_style(&style);
        }
        if let Some(gender) = lookup("NAME_FORGE_DEFAULT_GENDER") {
            config.default_gender = normalize::normalize_gender(&gender);
        }
        if let Some(count) = lookup("NAME_FORGE_DEFAULT_COUNT") {
            config.default_count = parse_count("NAME_FORGE_DEFAULT_COUNT", &count)?;
        }
        if let Some(max) = lookup("NAME_FORGE_MAX_BATCH_SIZE") {
            config.max_batch_size = parse_count("NAME_FORGE_MAX_BATCH_SIZE", &max)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the generator cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.max_batch_size == 0 {
            return Err(NameForgeError::config("max_batch_size must be at least 1"));
        }
        if self.default_count == 0 || self.default_batch_per_category == 0 {
            return Err(NameForgeError::config("default counts must be at least 1"));
        }
        if self.personalities.iter().all(|p| p.trim().is_empty()) {
            return Err(NameForgeError::config("personality list must not be empty"));
        }
        Ok(())
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|e| crate::config_error!("invalid value '{}' for {}: {}", value, key, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_mixed_resolves_to_concrete_styles() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(NameStyle::Mixed.resolve(&mut rng));
        }
        assert!(seen.len() > 1);
        assert_eq!(NameStyle::Noble.resolve(&mut rng), ConcreteStyle::Noble);
    }

    #[test]
    fn test_style_strings() {
        assert_eq!(NameStyle::Mixed.to_string(), "mixed");
        assert_eq!(NameStyle::Elemental.to_string(), "elemental");
        assert_eq!(NameStyle::from(ConcreteStyle::Class), NameStyle::Class);
    }

    #[test]
    fn test_character_detail_serializes_lowercase() {
        let detail = CharacterDetail {
            name: "에밀리아".to_string(),
            gender: Gender::Female,
            style: ConcreteStyle::Isekai,
            character_class: UNSPECIFIED.to_string(),
            element: UNSPECIFIED.to_string(),
            personality: "우아한".to_string(),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["gender"], "female");
        assert_eq!(json["style"], "isekai");
        assert_eq!(json["element"], "미정");
    }

    #[test]
    fn test_batch_entry_uses_type_key() {
        let entry = BatchNameEntry {
            name: "아서".to_string(),
            kind: "western".to_string(),
            origin: "fantasy-classic".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "western");
    }

    #[test]
    fn test_generated_name_display() {
        let noble = GeneratedName::Noble {
            first_name: "아서".to_string(),
            surname: "펜드래곤".to_string(),
        };
        assert_eq!(noble.to_string(), "아서 펜드래곤");
        assert_eq!(noble.into_display(), "아서 펜드래곤");
    }

    #[test]
    fn test_config_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("NAME_FORGE_DEFAULT_STYLE", "Western"),
            ("NAME_FORGE_DEFAULT_GENDER", "MALE"),
            ("NAME_FORGE_MAX_BATCH_SIZE", "20"),
        ]
        .into_iter()
        .collect();

        let config = GeneratorConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.default_style, NameStyle::Western);
        assert_eq!(config.default_gender, Gender::Male);
        assert_eq!(config.max_batch_size, 20);
        assert_eq!(config.default_count, 10);
    }

    #[test]
    fn test_config_rejects_bad_numbers() {
        let err = GeneratorConfig::from_lookup(|k| {
            (k == "NAME_FORGE_MAX_BATCH_SIZE").then(|| "lots".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, NameForgeError::Config { .. }));

        let err = GeneratorConfig::from_lookup(|k| {
            (k == "NAME_FORGE_MAX_BATCH_SIZE").then(|| "0".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains("max_batch_size"));
    }

    #[test]
    fn test_config_requires_personalities() {
        let config = GeneratorConfig {
            personalities: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(GeneratorConfig::default().validate().is_ok());
    }
}
