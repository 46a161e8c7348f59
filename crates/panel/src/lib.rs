//! # Panel Engine
//!
//! Selects expert panels from an immutable catalog for a consultation topic.
//!
//! ## Architecture
//!
//! ```text
//! PanelRequest (topic, panel type, size, required categories, exclusions)
//!     │
//!     ├──> Eligible pool
//!     │      ├─ Blue / Left-Field: classifier memberships
//!     │      └─ Red Team: profile allowlist ∪ Red Team categories
//!     │
//!     ├──> Relevance scoring (performance prior + additive boosts)
//!     │
//!     ├──> Canonical order (score desc, id asc)
//!     │
//!     └──> Diversity-aware selection (one per category, then fill by score)
//! ```
//!
//! `compose_three_panel_team` chains three assemblies (Blue → Left-Field → Red Team),
//! carrying every seated id forward as an exclusion.
//!
//! All operations are synchronous and side-effect free; an engine only borrows the catalog
//! and profile.
//!
//! ## Example
//!
//! ```rust
//! use panel_catalog::{Catalog, Category, Entity};
//! use panel_engine::{PanelEngine, PanelProfile, PanelRequest, PanelType};
//!
//! let catalog = Catalog::new(vec![
//!     Entity::new("cfo", Category::FinanceAndInvestment, "Risk management", 80.0),
//!     Entity::new("cmo", Category::MarketingAndBrand, "Brand", 85.0),
//! ])
//! .unwrap();
//! let profile = PanelProfile::default();
//! let engine = PanelEngine::new(&catalog, &profile);
//!
//! let panel = engine.assemble_panel(&PanelRequest::new("risk", PanelType::Blue).size(1));
//! assert_eq!(panel[0].id, "cfo");
//! ```

mod assembler;
pub mod classifier;
mod composer;
mod error;
pub mod phase;
mod profile;
mod scorer;
pub mod selector;
pub mod stats;
mod types;

pub use assembler::{PanelEngine, PanelRequest};
pub use classifier::{primary_panel_type, Classifier};
pub use composer::secondary_panel_size;
pub use error::{PanelError, Result};
pub use phase::{recommend_panels_for_phase, PhaseRecommendation};
pub use profile::{PanelProfile, RedTeamRules, ScoreBoosts};
pub use scorer::{normalize_topic, RelevanceScorer};
pub use stats::{panel_stats, PanelStats};
pub use types::{PanelType, ScoredCandidate, ThreePanelTeam};
