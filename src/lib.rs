//! Name Forge - procedural fantasy and isekai character name generation
//!
//! A small library and CLI that generates character names in several styles
//! (isekai, western fantasy, syllable-composed, class, elemental, noble),
//! with batch and category generation for populating character lists.

pub mod error;
pub mod generator;
pub mod normalize;
pub mod styles;
pub mod types;

// Re-export commonly used types
pub use error::{NameForgeError, Result};
pub use types::{
    BatchCategoryResult, BatchNameEntry, CharacterDetail, ConcreteStyle, ElementKey, Gender,
    GeneratedName, GeneratorConfig, NameStyle, NobleFamily,
};

// Re-export main functionality
pub use generator::{NameGenerator, NameRequest};
pub use normalize::{normalize_element, normalize_gender, normalize_style};
pub use styles::AnimeFlavor;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
