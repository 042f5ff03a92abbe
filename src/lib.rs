//! Keyword search over a static catalog of services and projects.
//!
//! A catalog is loaded once and never changes. On first use a keyword index is
//! built over it, mapping each normalized keyword to the services that carry
//! it. Queries hit that index first and fall back to a substring scan of the
//! catalog when it has nothing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ catalog.rs  │────▶│  index.rs    │────▶│  search.rs   │
//! │ (Catalog,   │     │ (KeywordIndex│     │ (SearchEngine│
//! │  Service)   │     │  build once) │     │  exact+scan) │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │
//!        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    verify/                           │
//! │  (Validator: errors + warnings, never touches index) │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use tagdex::{Catalog, SearchEngine};
//!
//! let catalog = Catalog::from_json(
//!     r#"[{"id": "web-dev", "title": "Web Development", "keywords": ["React"]}]"#,
//! ).unwrap();
//! let engine = SearchEngine::new(catalog);
//!
//! let results = engine.search("react");
//! assert_eq!(results[0].id, "web-dev");
//! ```

// Module declarations
mod catalog;
pub mod contracts;
mod error;
mod index;
mod search;
mod types;
mod utils;
pub mod verify;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use index::{KeywordIndex, DEFAULT_SUGGESTION_LIMIT};
pub use search::SearchEngine;
pub use types::{CatalogStats, Project, Service};
pub use utils::normalize;
pub use verify::{ValidationConfig, ValidationResult, Validator};
