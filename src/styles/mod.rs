//! Naming strategies
//!
//! Each strategy lives in its own module and only ever sees a
//! [`ConcreteStyle`]; `mixed` is resolved by the caller beforehand.

pub mod class;
pub mod composed;
pub mod elemental;
pub mod isekai;
pub mod noble;
pub mod western;

pub use isekai::AnimeFlavor;

use crate::types::{ConcreteStyle, ElementKey, Gender, GeneratedName};
use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform pick from a static table. Tables are never empty.
pub(crate) fn pick<R: Rng + ?Sized>(table: &'static [&'static str], rng: &mut R) -> &'static str {
    table.choose(rng).copied().unwrap_or_default()
}

/// Inputs a strategy may use besides gender
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyHints<'a> {
    pub character_class: Option<&'a str>,
    pub element: Option<ElementKey>,
}

/// Run the strategy for a concrete style. Class and elemental styles without
/// a hint pick a random class or element.
pub fn generate<R: Rng + ?Sized>(
    style: ConcreteStyle,
    gender: Gender,
    hints: StrategyHints<'_>,
    rng: &mut R,
) -> GeneratedName {
    match style {
        ConcreteStyle::Isekai => GeneratedName::Single(isekai::generate(gender, rng)),
        ConcreteStyle::Western => GeneratedName::Single(western::generate(gender, rng)),
        ConcreteStyle::Composed => GeneratedName::Single(composed::generate(gender, rng)),
        ConcreteStyle::Class => {
            let character_class = match hints.character_class {
                Some(class) => class,
                None => class::random_class(rng),
            };
            GeneratedName::Single(class::generate(character_class, gender, rng))
        }
        ConcreteStyle::Elemental => {
            let element = hints.element.unwrap_or_else(|| elemental::random_element(rng));
            GeneratedName::Single(elemental::generate(Some(element), gender, rng))
        }
        ConcreteStyle::Noble => {
            let (first_name, surname) = noble::generate(gender, rng);
            GeneratedName::Noble { first_name, surname }
        }
    }
}
