//! # Panel Catalog
//!
//! Immutable, validated collection of expert records that the panel engine ranks and
//! selects from.
//!
//! ## Contract
//!
//! ```text
//! JSON (array or {"entities": [...]})
//!     │
//!     ├──> serde parse → Vec<Entity>
//!     │
//!     ├──> Validation (rejects, never repairs)
//!     │      ├─ non-blank ids
//!     │      ├─ globally unique ids
//!     │      └─ performance_score finite and within 0..=100
//!     │
//!     └──> Catalog (read-only from here on)
//! ```
//!
//! Downstream code assumes a `Catalog` upholds these invariants and does not re-check them.
//!
//! ## Example
//!
//! ```rust
//! use panel_catalog::{Catalog, Category};
//!
//! let json = br#"[
//!   {"id": "ada", "category": "Technology & Innovation", "specialty": "compilers",
//!    "bio": "", "performance_score": 91, "status": "active"}
//! ]"#;
//!
//! let catalog = Catalog::from_json_slice(json).unwrap();
//! assert_eq!(catalog.get("ada").unwrap().category, Category::TechnologyAndInnovation);
//! ```

mod catalog;
mod error;
mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use types::{Category, Entity, EntityStatus, MAX_PERFORMANCE_SCORE, MIN_PERFORMANCE_SCORE};
