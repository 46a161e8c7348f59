//! Category → panel affinity.

use panel_catalog::{Category, Entity};

use crate::profile::PanelProfile;
use crate::types::PanelType;

/// Primary panel of a category.
///
/// `Unclassified` (any category string the loader did not recognise) falls back to Blue.
#[must_use]
pub const fn primary_panel_type(category: Category) -> PanelType {
    match category {
        Category::StrategyAndLeadership
        | Category::FinanceAndInvestment
        | Category::MarketingAndBrand
        | Category::SalesAndGrowth
        | Category::OperationsAndSupplyChain
        | Category::TechnologyAndInnovation
        | Category::LegalAndCompliance
        | Category::PeopleAndCulture
        | Category::Entrepreneurship
        | Category::CelebrityCrossover
        | Category::Unclassified => PanelType::Blue,
        Category::GovernmentAndPolicy => PanelType::RedTeam,
        Category::LeftField => PanelType::LeftField,
    }
}

const fn has_left_field_affinity(category: Category) -> bool {
    matches!(category, Category::LeftField | Category::CelebrityCrossover)
}

/// Resolves every panel an entity can sit on, using the profile's Red Team allowlist
#[derive(Clone, Copy, Debug)]
pub struct Classifier<'p> {
    profile: &'p PanelProfile,
}

impl<'p> Classifier<'p> {
    #[must_use]
    pub const fn new(profile: &'p PanelProfile) -> Self {
        Self { profile }
    }

    #[must_use]
    pub const fn primary_panel_type(&self, entity: &Entity) -> PanelType {
        primary_panel_type(entity.category)
    }

    /// Primary type first, then secondary memberships; never contains duplicates
    #[must_use]
    pub fn all_panel_types(&self, entity: &Entity) -> Vec<PanelType> {
        let mut types = vec![primary_panel_type(entity.category)];
        if self.profile.is_red_team_allowlisted(&entity.id) && !types.contains(&PanelType::RedTeam)
        {
            types.push(PanelType::RedTeam);
        }
        if has_left_field_affinity(entity.category) && !types.contains(&PanelType::LeftField) {
            types.push(PanelType::LeftField);
        }
        types
    }

    #[must_use]
    pub fn belongs_to(&self, entity: &Entity, panel_type: PanelType) -> bool {
        self.all_panel_types(entity).contains(&panel_type)
    }

    /// Red Team eligibility ignores the category table: allowlisted ids plus members of the
    /// profile's Red Team categories.
    #[must_use]
    pub fn is_red_team_eligible(&self, entity: &Entity) -> bool {
        self.profile.is_red_team_allowlisted(&entity.id)
            || self.profile.red_team().categories.contains(&entity.category)
    }
}
