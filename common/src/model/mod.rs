//! Wire model of the terpene REST API.
//!
//! Field names follow the remote API (`TerpeneID`, `arySmell`, ...) and are
//! mapped onto snake_case Rust fields with serde renames.

pub mod attribute;
pub mod kind;
pub mod terpene;
pub mod vocabulary;

pub use attribute::{Attribute, PropertyWithCitation, SmellWithCitation, TasteWithCitation};
pub use kind::AttributeKind;
pub use terpene::{Synonym, Terpene, TerpeneObject};
pub use vocabulary::{BasicProperty, Property, Smell, Taste, Vocabulary, VocabularyEntry};

/// Numeric identifier used by every record of the API.
pub type Id = i64;
