//! Integration tests for name-forge

use name_forge::{
    normalize_element, normalize_gender, normalize_style,
    styles::{class, noble::NOBLE_SURNAMES, western},
    ConcreteStyle, ElementKey, Gender, GeneratedName, GeneratorConfig, NameForgeError,
    NameGenerator, NameRequest, NameStyle,
};
use std::collections::HashSet;

fn generator(seed: u64) -> NameGenerator {
    NameGenerator::with_seed(GeneratorConfig::default(), seed).unwrap()
}

#[test]
fn test_init() {
    assert!(name_forge::init().is_ok());
    assert!(!name_forge::VERSION.is_empty());
}

#[test]
fn test_western_male_name_comes_from_table() {
    let generator = generator(1);
    for _ in 0..30 {
        let name = generator.generate_name("western", "male", None, None);
        assert!(western::MALE_NAMES.contains(&name.as_str()), "{}", name);
    }
}

#[test]
fn test_noble_female_name_has_surname() {
    let generator = generator(2);
    for _ in 0..400 {
        let name = generator.generate_name("noble", "female", None, None);
        let parts: Vec<&str> = name.split(' ').collect();
        assert_eq!(parts.len(), 2, "{}", name);
        assert!(western::FEMALE_NAMES.contains(&parts[0]), "{}", name);
        assert!(NOBLE_SURNAMES.contains(&parts[1]), "{}", name);
    }
}

#[test]
fn test_noble_request_keeps_parts() {
    let generator = generator(3);
    let request = NameRequest::new().style(NameStyle::Noble).gender(Gender::Male);
    match generator.generate(&request) {
        GeneratedName::Noble { first_name, surname } => {
            assert!(western::MALE_NAMES.contains(&first_name.as_str()));
            assert!(NOBLE_SURNAMES.contains(&surname.as_str()));
        }
        other => panic!("expected a noble name, got {:?}", other),
    }
}

#[test]
fn test_batch_by_categories() {
    let generator = generator(4);
    let batch = generator.batch_generate_by_categories(3).unwrap();

    assert_eq!(batch.isekai_names.len(), 3);
    assert_eq!(batch.western_fantasy_names.len(), 3);
    assert_eq!(batch.noble_families.len(), 3);
    assert_eq!(batch.len(), 9);

    for family in &batch.noble_families {
        assert!(family.lord.ends_with(&family.family_name));
        assert!(family.lady.ends_with(&family.family_name));
        assert_eq!(family.lord.split(' ').count(), 2, "{}", family.lord);
        assert_eq!(family.lady.split(' ').count(), 2, "{}", family.lady);
        assert_eq!(family.kind, "noble");
    }
    assert!(batch.isekai_names.iter().all(|e| e.kind == "isekai"));
    assert!(batch.western_fantasy_names.iter().all(|e| e.kind == "western"));
}

#[test]
fn test_batch_serializes_type_field() {
    let generator = generator(5);
    let batch = generator.batch_generate_by_categories(1).unwrap();
    let json = serde_json::to_value(&batch).unwrap();

    assert_eq!(json["isekai_names"][0]["type"], "isekai");
    assert_eq!(json["western_fantasy_names"][0]["origin"], "fantasy-classic");
    assert_eq!(json["noble_families"][0]["type"], "noble");
}

#[test]
fn test_large_request_is_clamped() {
    let generator = generator(6);
    let details = generator.generate_multiple_names(60, "female", "mixed").unwrap();
    assert_eq!(details.len(), 50);
}

#[test]
fn test_zero_count_is_validation_error() {
    let generator = generator(7);
    let err = generator.generate_multiple_names(0, "male", "isekai").unwrap_err();
    assert!(matches!(err, NameForgeError::Validation { .. }));
    assert!(err.is_user_error());
}

#[test]
fn test_normalization() {
    assert_eq!(normalize_gender("MALE"), Gender::Male);
    assert_eq!(normalize_gender("unknown"), Gender::Female);
    assert_eq!(normalize_gender(" male"), Gender::Female);
    assert_eq!(normalize_style("Western"), NameStyle::Western);
    assert_eq!(normalize_style("nonsense"), NameStyle::Isekai);
    assert_eq!(normalize_element("fire"), normalize_element("불"));
    assert_eq!(normalize_element("번개"), Some(ElementKey::Lightning));
    assert_eq!(normalize_element("plasma"), None);
}

#[test]
fn test_mixed_style_covers_strategies() {
    let generator = generator(8);
    let mut seen = HashSet::new();
    for _ in 0..4 {
        for detail in generator.generate_multiple_names(50, "male", "mixed").unwrap() {
            seen.insert(detail.style);
        }
    }
    assert!(seen.len() >= 4, "only saw {:?}", seen);
    assert!(seen.iter().all(|style| ConcreteStyle::ALL.contains(style)));
}

#[test]
fn test_class_hint_overrides_style() {
    let generator = generator(9);
    let request = NameRequest::new()
        .style("western")
        .gender("male")
        .character_class("마법사");
    let patterns = class::patterns_for("마법사").unwrap();
    for _ in 0..20 {
        let name = generator.generate(&request).to_string();
        let prefix: String = name.chars().take(2).collect();
        assert!(
            patterns.iter().any(|pattern| pattern.starts_with(&prefix)),
            "{}",
            name
        );
    }
}

#[test]
fn test_config_from_lookup() {
    let config = GeneratorConfig::from_lookup(|key| match key {
        "NAME_FORGE_DEFAULT_STYLE" => Some("noble".to_string()),
        "NAME_FORGE_MAX_BATCH_SIZE" => Some("5".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.default_style, NameStyle::Noble);

    let generator = NameGenerator::with_seed(config, 10).unwrap();
    assert_eq!(generator.generate_multiple_names(9, "male", "isekai").unwrap().len(), 5);
    let name = generator.generate(&NameRequest::new()).to_string();
    assert!(name.contains(' '));
}

#[test]
fn test_element_characters() {
    let generator = generator(11);
    let details = generator.generate_element_characters(5, "얼음", "female").unwrap();
    assert_eq!(details.len(), 5);
    assert!(details.iter().all(|d| d.element == "ice" && d.style == ConcreteStyle::Elemental));
}
