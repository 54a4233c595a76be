//! Built-in lint rules.
//!
//! This module contains the rules readme-lint ships with.

pub mod h1_title;
pub mod license_file;
pub mod placeholder_text;
pub mod required_sections;

pub use h1_title::H1TitleRule;
pub use license_file::LicenseFileRule;
pub use placeholder_text::PlaceholderTextRule;
pub use required_sections::RequiredSectionsRule;
