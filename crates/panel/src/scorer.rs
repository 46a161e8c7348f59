use panel_catalog::{Category, Entity};

use crate::profile::ScoreBoosts;

/// Topic-biased relevance score: `performance_score` plus independent additive boosts.
///
/// Boosts:
/// - `specialty` when the topic is a case-insensitive substring of the specialty
/// - `bio` when the topic is a case-insensitive substring of the bio
/// - `required_category` when the entity's category was requested by the caller
///
/// An empty topic applies no boosts at all, so the ranking is the plain
/// `performance_score` order.
#[derive(Clone, Copy, Debug)]
pub struct RelevanceScorer {
    boosts: ScoreBoosts,
}

impl RelevanceScorer {
    #[must_use]
    pub const fn new(boosts: ScoreBoosts) -> Self {
        Self { boosts }
    }

    #[must_use]
    pub fn score(&self, entity: &Entity, topic: &str, required_categories: &[Category]) -> f64 {
        self.score_normalized(entity, &normalize_topic(topic), required_categories)
    }

    /// Same as [`RelevanceScorer::score`] with a topic already passed through
    /// [`normalize_topic`]; lets callers scoring a whole pool lowercase the topic once.
    #[must_use]
    pub fn score_normalized(
        &self,
        entity: &Entity,
        topic: &str,
        required_categories: &[Category],
    ) -> f64 {
        let mut score = entity.performance_score;
        if topic.is_empty() {
            return score;
        }
        if contains_ignore_case(&entity.specialty, topic) {
            score += self.boosts.specialty;
        }
        if contains_ignore_case(&entity.bio, topic) {
            score += self.boosts.bio;
        }
        if required_categories.contains(&entity.category) {
            score += self.boosts.required_category;
        }
        score
    }
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new(ScoreBoosts::default())
    }
}

/// Lowercased topic; surrounding whitespace is part of the match text
#[must_use]
pub fn normalize_topic(topic: &str) -> String {
    topic.to_lowercase()
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
