use std::collections::HashSet;

use panel_catalog::{Catalog, Category, Entity};

use crate::classifier::Classifier;
use crate::profile::PanelProfile;
use crate::scorer::{normalize_topic, RelevanceScorer};
use crate::selector::{select, sort_candidates};
use crate::types::{PanelType, ScoredCandidate};

/// Parameters of a single panel assembly
#[derive(Debug, Clone)]
pub struct PanelRequest {
    pub topic: String,
    pub panel_type: PanelType,
    pub size: usize,
    pub required_categories: Vec<Category>,
    pub exclude_ids: HashSet<String>,
}

impl PanelRequest {
    /// Request with size 0, no category hints and no exclusions
    pub fn new(topic: impl Into<String>, panel_type: PanelType) -> Self {
        Self {
            topic: topic.into(),
            panel_type,
            size: 0,
            required_categories: Vec::new(),
            exclude_ids: HashSet::new(),
        }
    }

    /// Builder: set panel size
    #[must_use]
    pub const fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Builder: categories that earn the required-category boost
    #[must_use]
    pub fn required_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.required_categories = categories.into_iter().collect();
        self
    }

    /// Builder: ids barred from selection
    #[must_use]
    pub fn exclude_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_ids = ids.into_iter().map(Into::into).collect();
        self
    }
}

/// Panel assembly over an immutable catalog.
///
/// Holds only shared borrows, so one engine can serve concurrent callers; every call
/// allocates its own candidate list.
#[derive(Clone, Copy, Debug)]
pub struct PanelEngine<'a> {
    catalog: &'a Catalog,
    profile: &'a PanelProfile,
    classifier: Classifier<'a>,
    scorer: RelevanceScorer,
}

impl<'a> PanelEngine<'a> {
    pub fn new(catalog: &'a Catalog, profile: &'a PanelProfile) -> Self {
        let missing: Vec<&str> = profile
            .red_team()
            .allowlist
            .iter()
            .map(String::as_str)
            .filter(|id| !catalog.contains(id))
            .collect();
        if !missing.is_empty() {
            log::warn!(
                "Profile '{}' allowlists {} red team id(s) absent from the catalog: {}",
                profile.name(),
                missing.len(),
                missing.join(", ")
            );
        }

        Self {
            catalog,
            profile,
            classifier: Classifier::new(profile),
            scorer: RelevanceScorer::new(*profile.boosts()),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[must_use]
    pub const fn profile(&self) -> &'a PanelProfile {
        self.profile
    }

    #[must_use]
    pub const fn classifier(&self) -> &Classifier<'a> {
        &self.classifier
    }

    #[must_use]
    pub fn score_entity(&self, entity: &Entity, topic: &str, required: &[Category]) -> f64 {
        self.scorer.score(entity, topic, required)
    }

    #[must_use]
    pub const fn primary_panel_type(&self, entity: &Entity) -> PanelType {
        self.classifier.primary_panel_type(entity)
    }

    #[must_use]
    pub fn all_panel_types(&self, entity: &Entity) -> Vec<PanelType> {
        self.classifier.all_panel_types(entity)
    }

    /// Entities that may sit on `panel_type`, minus exclusions, in catalog order
    #[must_use]
    pub fn eligible_pool(
        &self,
        panel_type: PanelType,
        exclude_ids: &HashSet<String>,
    ) -> Vec<&'a Entity> {
        self.catalog
            .iter()
            .filter(|entity| !exclude_ids.contains(&entity.id))
            .filter(|entity| match panel_type {
                PanelType::RedTeam => self.classifier.is_red_team_eligible(entity),
                PanelType::Blue | PanelType::LeftField => {
                    self.classifier.belongs_to(entity, panel_type)
                }
            })
            .collect()
    }

    /// Selected members with the scores that ranked them
    #[must_use]
    pub fn assemble_scored(&self, request: &PanelRequest) -> Vec<ScoredCandidate<'a>> {
        if request.size == 0 {
            return Vec::new();
        }

        let pool = self.eligible_pool(request.panel_type, &request.exclude_ids);
        let topic = normalize_topic(&request.topic);
        let mut candidates: Vec<ScoredCandidate<'a>> = pool
            .into_iter()
            .map(|entity| {
                let score =
                    self.scorer
                        .score_normalized(entity, &topic, &request.required_categories);
                ScoredCandidate::new(entity, score)
            })
            .collect();
        sort_candidates(&mut candidates);

        log::debug!(
            "Assembling {} panel: topic='{}', size={}, eligible={}, excluded={}",
            request.panel_type,
            request.topic,
            request.size,
            candidates.len(),
            request.exclude_ids.len()
        );

        select(&candidates, request.size)
    }

    #[must_use]
    pub fn assemble_panel(&self, request: &PanelRequest) -> Vec<&'a Entity> {
        self.assemble_scored(request)
            .into_iter()
            .map(|candidate| candidate.entity)
            .collect()
    }
}
