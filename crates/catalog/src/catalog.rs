use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::types::{Entity, MAX_PERFORMANCE_SCORE, MIN_PERFORMANCE_SCORE};

/// Immutable, validated collection of entities.
///
/// Entity order is preserved from the source; lookups by id go through an index built once
/// at construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    entities: Vec<Entity>,
    by_id: HashMap<String, usize>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCatalog {
    List(Vec<Entity>),
    Wrapped { entities: Vec<Entity> },
}

impl Catalog {
    /// Validate and freeze a list of entities
    pub fn new(entities: Vec<Entity>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(entities.len());
        for (index, entity) in entities.iter().enumerate() {
            if entity.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            let score = entity.performance_score;
            if !score.is_finite() || !(MIN_PERFORMANCE_SCORE..=MAX_PERFORMANCE_SCORE).contains(&score)
            {
                return Err(CatalogError::ScoreOutOfRange {
                    id: entity.id.clone(),
                    score,
                });
            }
            if by_id.insert(entity.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(entity.id.clone()));
            }
        }

        log::debug!("Catalog validated: {} entities", entities.len());
        Ok(Self { entities, by_id })
    }

    /// Parse a JSON array of entities, or an object with an `entities` array
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let entities = match serde_json::from_slice::<RawCatalog>(bytes)? {
            RawCatalog::List(entities) | RawCatalog::Wrapped { entities } => entities,
        };
        Self::new(entities)
    }

    /// Load a catalog file from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let catalog = Self::from_json_slice(&bytes)?;
        log::info!(
            "Loaded catalog {} ({} entities)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.by_id.get(id).map(|&idx| &self.entities[idx])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Set of all ids
    #[must_use]
    pub fn ids(&self) -> HashSet<&str> {
        self.entities.iter().map(|e| e.id.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use pretty_assertions::assert_eq;

    fn entity(id: &str, score: f64) -> Entity {
        Entity::new(id, Category::Entrepreneurship, "founding", score)
    }

    #[test]
    fn preserves_source_order_and_indexes_ids() {
        let catalog = Catalog::new(vec![entity("b", 10.0), entity("a", 20.0)]).unwrap();
        let ids: Vec<&str> = catalog.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(catalog.get("a").unwrap().performance_score, 20.0);
        assert!(catalog.contains("b"));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn accepts_score_bounds_inclusive() {
        let catalog = Catalog::new(vec![entity("lo", 0.0), entity("hi", 100.0)]).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.ids().is_empty());
    }

    #[test]
    fn parses_wrapped_object_form() {
        let catalog = Catalog::from_json_slice(
            br#"{"entities": [{"id": "a", "category": "Left Field", "performance_score": 1}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.get("a").unwrap().category, Category::LeftField);
    }
}
