use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Lowest valid `performance_score`
pub const MIN_PERFORMANCE_SCORE: f64 = 0.0;

/// Highest valid `performance_score`
pub const MAX_PERFORMANCE_SCORE: f64 = 100.0;

/// One expert persona in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entity {
    /// Globally unique, stable identifier
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Domain the expert belongs to
    pub category: Category,

    /// Short description of the area of expertise
    #[serde(default)]
    pub specialty: String,

    /// Free-text biography
    #[serde(default)]
    pub bio: String,

    /// Historical quality prior (0..=100)
    pub performance_score: f64,

    /// Lifecycle status
    #[serde(default)]
    pub status: EntityStatus,
}

impl Entity {
    /// Create an active entity with an empty name and bio
    pub fn new(
        id: impl Into<String>,
        category: Category,
        specialty: impl Into<String>,
        performance_score: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            category,
            specialty: specialty.into(),
            bio: String::new(),
            performance_score,
            status: EntityStatus::Active,
        }
    }

    /// Builder: set display name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder: set biography
    #[must_use]
    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    /// Builder: set status
    #[must_use]
    pub const fn status(mut self, status: EntityStatus) -> Self {
        self.status = status;
        self
    }
}

/// Lifecycle status of an entity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    #[default]
    Active,
    Training,
    Review,
    Inactive,
}

/// Closed set of expert categories.
///
/// Category strings the loader does not recognise deserialize to [`Category::Unclassified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Strategy & Leadership")]
    StrategyAndLeadership,
    #[serde(rename = "Finance & Investment")]
    FinanceAndInvestment,
    #[serde(rename = "Marketing & Brand")]
    MarketingAndBrand,
    #[serde(rename = "Sales & Growth")]
    SalesAndGrowth,
    #[serde(rename = "Operations & Supply Chain")]
    OperationsAndSupplyChain,
    #[serde(rename = "Technology & Innovation")]
    TechnologyAndInnovation,
    #[serde(rename = "Legal & Compliance")]
    LegalAndCompliance,
    #[serde(rename = "People & Culture")]
    PeopleAndCulture,
    #[serde(rename = "Entrepreneurship")]
    Entrepreneurship,
    #[serde(rename = "Government & Policy")]
    GovernmentAndPolicy,
    #[serde(rename = "Left Field", alias = "LeftField")]
    LeftField,
    #[serde(rename = "Celebrity Crossover", alias = "CelebrityCrossover")]
    CelebrityCrossover,
    #[serde(rename = "Unclassified", other)]
    Unclassified,
}

impl Category {
    pub const ALL: [Self; 13] = [
        Self::StrategyAndLeadership,
        Self::FinanceAndInvestment,
        Self::MarketingAndBrand,
        Self::SalesAndGrowth,
        Self::OperationsAndSupplyChain,
        Self::TechnologyAndInnovation,
        Self::LegalAndCompliance,
        Self::PeopleAndCulture,
        Self::Entrepreneurship,
        Self::GovernmentAndPolicy,
        Self::LeftField,
        Self::CelebrityCrossover,
        Self::Unclassified,
    ];

    /// Wire name, as it appears in catalog files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StrategyAndLeadership => "Strategy & Leadership",
            Self::FinanceAndInvestment => "Finance & Investment",
            Self::MarketingAndBrand => "Marketing & Brand",
            Self::SalesAndGrowth => "Sales & Growth",
            Self::OperationsAndSupplyChain => "Operations & Supply Chain",
            Self::TechnologyAndInnovation => "Technology & Innovation",
            Self::LegalAndCompliance => "Legal & Compliance",
            Self::PeopleAndCulture => "People & Culture",
            Self::Entrepreneurship => "Entrepreneurship",
            Self::GovernmentAndPolicy => "Government & Policy",
            Self::LeftField => "Left Field",
            Self::CelebrityCrossover => "Celebrity Crossover",
            Self::Unclassified => "Unclassified",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Case-insensitive; accepts the wire name or the variant name
    /// (`"government & policy"`, `"GovernmentAndPolicy"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| {
                category.as_str().eq_ignore_ascii_case(needle)
                    || format!("{category:?}").eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| CatalogError::UnknownCategory(needle.to_string()))
    }
}
