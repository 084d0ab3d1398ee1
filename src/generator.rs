//! Name generator dispatcher
//!
//! Resolves a style / gender / class / element request to one strategy and
//! builds batch results. The random source is injected and guarded by a
//! mutex, so one generator can be shared between threads.

use crate::error::Result;
use crate::normalize::normalize_element;
use crate::styles::{self, class, elemental, isekai, noble, western, AnimeFlavor, StrategyHints};
use crate::types::{
    BatchCategoryResult, BatchNameEntry, CharacterDetail, ConcreteStyle, Gender, GeneratedName,
    GeneratorConfig, NameStyle, NobleFamily, UNSPECIFIED,
};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::Instant;

/// A single name request. Unset fields fall back to the generator defaults.
#[derive(Debug, Clone, Default)]
pub struct NameRequest {
    pub style: Option<NameStyle>,
    pub gender: Option<Gender>,
    pub character_class: Option<String>,
    pub element: Option<String>,
}

impl NameRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: impl Into<NameStyle>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn gender(mut self, gender: impl Into<Gender>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn character_class(mut self, character_class: impl Into<String>) -> Self {
        self.character_class = Some(character_class.into());
        self
    }

    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }
}

/// Multi-strategy fantasy name generator
pub struct NameGenerator<R = StdRng> {
    config: GeneratorConfig,
    rng: Mutex<R>,
}

impl NameGenerator<StdRng> {
    /// Create a generator seeded from OS entropy
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a generator with a fixed seed for reproducible output
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl Default for NameGenerator<StdRng> {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

impl<R: Rng> NameGenerator<R> {
    /// Create a generator around any random source
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: Mutex::new(rng),
        })
    }

    /// Active configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one display name.
    ///
    /// A non-empty class routes to the class strategy and a recognized
    /// element to the elemental strategy; otherwise the style decides, with
    /// `mixed` resolved to one concrete style.
    pub fn generate_name(
        &self,
        style: impl Into<NameStyle>,
        gender: impl Into<Gender>,
        character_class: Option<&str>,
        element: Option<&str>,
    ) -> String {
        let request = NameRequest {
            style: Some(style.into()),
            gender: Some(gender.into()),
            character_class: character_class.map(str::to_string),
            element: element.map(str::to_string),
        };
        self.generate(&request).into_display()
    }

    /// Generate one name, keeping noble names as a first name / surname pair
    pub fn generate(&self, request: &NameRequest) -> GeneratedName {
        let gender = request.gender.unwrap_or(self.config.default_gender);
        let style = request.style.unwrap_or(self.config.default_style);
        let element = request.element.as_deref().and_then(normalize_element);
        let character_class = request
            .character_class
            .as_deref()
            .map(str::trim)
            .filter(|class| !class.is_empty());

        let mut rng = self.rng.lock();
        let concrete = match (character_class, element) {
            (Some(_), _) => ConcreteStyle::Class,
            (None, Some(_)) => ConcreteStyle::Elemental,
            (None, None) => style.resolve(&mut *rng),
        };

        tracing::debug!(
            requested = %style,
            resolved = %concrete,
            gender = %gender,
            "Resolved naming strategy"
        );

        let hints = StrategyHints {
            character_class,
            element,
        };
        styles::generate(concrete, gender, hints, &mut *rng)
    }

    /// Generate a name of a specific class. Unknown classes get an isekai name.
    pub fn generate_for_class(&self, character_class: &str, gender: impl Into<Gender>) -> String {
        let mut rng = self.rng.lock();
        class::generate(character_class, gender.into(), &mut *rng)
    }

    /// Generate a name for an element given in English or Korean.
    /// Unrecognized elements get an isekai name.
    pub fn generate_for_element(&self, element: &str, gender: impl Into<Gender>) -> String {
        let element = normalize_element(element);
        let mut rng = self.rng.lock();
        elemental::generate(element, gender.into(), &mut *rng)
    }

    /// Generate an isekai name from one anime sub-genre
    pub fn generate_anime_flavored(&self, flavor: AnimeFlavor, gender: impl Into<Gender>) -> String {
        let mut rng = self.rng.lock();
        isekai::generate_flavored(flavor, gender.into(), &mut *rng)
    }

    /// Generate `count` characters with metadata.
    ///
    /// `count` is clamped to `max_batch_size`; zero is rejected. A `mixed`
    /// style is resolved independently for every record.
    pub fn generate_multiple_names(
        &self,
        count: usize,
        gender: impl Into<Gender>,
        style: impl Into<NameStyle>,
    ) -> Result<Vec<CharacterDetail>> {
        let count = self.clamp_count(count, "count")?;
        let gender = gender.into();
        let style = style.into();
        let start_time = Instant::now();

        let mut rng = self.rng.lock();
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            let concrete = style.resolve(&mut *rng);
            let hints = match concrete {
                ConcreteStyle::Class => StrategyHints {
                    character_class: Some(class::random_class(&mut *rng)),
                    element: None,
                },
                ConcreteStyle::Elemental => StrategyHints {
                    character_class: None,
                    element: Some(elemental::random_element(&mut *rng)),
                },
                _ => StrategyHints::default(),
            };

            let name = styles::generate(concrete, gender, hints, &mut *rng).into_display();
            results.push(CharacterDetail {
                name,
                gender,
                style: concrete,
                character_class: hints.character_class.unwrap_or(UNSPECIFIED).to_string(),
                element: hints.element.map_or(UNSPECIFIED, |e| e.as_str()).to_string(),
                personality: self.pick_personality(&mut *rng),
            });
        }

        tracing::info!(
            count = results.len(),
            style = %style,
            gender = %gender,
            duration_us = %start_time.elapsed().as_micros(),
            "Generated character batch"
        );
        Ok(results)
    }

    /// Generate `count` characters of one class
    pub fn generate_class_characters(
        &self,
        count: usize,
        character_class: &str,
        gender: impl Into<Gender>,
    ) -> Result<Vec<CharacterDetail>> {
        let count = self.clamp_count(count, "count")?;
        let gender = gender.into();

        let mut rng = self.rng.lock();
        let results = (0..count)
            .map(|_| CharacterDetail {
                name: class::generate(character_class, gender, &mut *rng),
                gender,
                style: ConcreteStyle::Class,
                character_class: character_class.to_string(),
                element: UNSPECIFIED.to_string(),
                personality: self.pick_personality(&mut *rng),
            })
            .collect();
        Ok(results)
    }

    /// Generate `count` characters of one element
    pub fn generate_element_characters(
        &self,
        count: usize,
        element: &str,
        gender: impl Into<Gender>,
    ) -> Result<Vec<CharacterDetail>> {
        let count = self.clamp_count(count, "count")?;
        let gender = gender.into();
        let element = normalize_element(element);
        if element.is_none() {
            tracing::warn!("Unrecognized element, falling back to isekai names");
        }

        let mut rng = self.rng.lock();
        let results = (0..count)
            .map(|_| CharacterDetail {
                name: elemental::generate(element, gender, &mut *rng),
                gender,
                style: ConcreteStyle::Elemental,
                character_class: UNSPECIFIED.to_string(),
                element: element.map_or(UNSPECIFIED, |e| e.as_str()).to_string(),
                personality: self.pick_personality(&mut *rng),
            })
            .collect();
        Ok(results)
    }

    /// Generate `count` isekai names drawn from one sub-genre of the table
    pub fn generate_flavored_names(
        &self,
        count: usize,
        flavor: AnimeFlavor,
        gender: impl Into<Gender>,
    ) -> Result<Vec<String>> {
        let count = self.clamp_count(count, "count")?;
        let gender = gender.into();
        let mut rng = self.rng.lock();
        Ok((0..count)
            .map(|_| isekai::generate_flavored(flavor, gender, &mut *rng))
            .collect())
    }

    /// Generate isekai names, western names and noble families, `count_per_category` of each.
    ///
    /// Every noble family draws one surname shared by its lord and lady.
    pub fn batch_generate_by_categories(&self, count_per_category: usize) -> Result<BatchCategoryResult> {
        let count = self.clamp_count(count_per_category, "count_per_category")?;
        let mut rng = self.rng.lock();
        let mut result = BatchCategoryResult::default();

        for _ in 0..count {
            let gender = Gender::random(&mut *rng);
            result.isekai_names.push(BatchNameEntry {
                name: isekai::generate(gender, &mut *rng),
                kind: "isekai".to_string(),
                origin: "anime-style".to_string(),
            });
        }

        for _ in 0..count {
            let gender = Gender::random(&mut *rng);
            result.western_fantasy_names.push(BatchNameEntry {
                name: western::generate(gender, &mut *rng),
                kind: "western".to_string(),
                origin: "fantasy-classic".to_string(),
            });
        }

        for _ in 0..count {
            let surname = noble::random_surname(&mut *rng);
            let lord = western::generate(Gender::Male, &mut *rng);
            let lady = western::generate(Gender::Female, &mut *rng);
            result.noble_families.push(NobleFamily {
                family_name: surname.to_string(),
                lord: noble::format_noble_name(&lord, surname),
                lady: noble::format_noble_name(&lady, surname),
                kind: "noble".to_string(),
            });
        }

        tracing::info!(count_per_category = count, total = result.len(), "Generated category batch");
        Ok(result)
    }

    /// Reject zero and clamp to `max_batch_size`
    fn clamp_count(&self, requested: usize, what: &str) -> Result<usize> {
        if requested == 0 {
            return Err(crate::validation_error!("{} must be at least 1", what));
        }
        let max = self.config.max_batch_size;
        if requested > max {
            tracing::warn!(requested, max, "{} clamped to max_batch_size", what);
            return Ok(max);
        }
        Ok(requested)
    }

    fn pick_personality(&self, rng: &mut R) -> String {
        self.config
            .personalities
            .choose(rng)
            .cloned()
            .unwrap_or_default()
    }
}
