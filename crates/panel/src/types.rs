use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use panel_catalog::Entity;
use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// Role a panel plays in a consultation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelType {
    /// Primary expertise
    Blue,
    /// Diverse, unconventional perspective
    LeftField,
    /// Adversarial critique
    RedTeam,
}

impl PanelType {
    pub const ALL: [Self; 3] = [Self::Blue, Self::LeftField, Self::RedTeam];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::LeftField => "left_field",
            Self::RedTeam => "red_team",
        }
    }
}

impl fmt::Display for PanelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelType {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blue" => Ok(Self::Blue),
            "left_field" | "left-field" | "leftfield" => Ok(Self::LeftField),
            "red_team" | "red-team" | "redteam" => Ok(Self::RedTeam),
            _ => Err(PanelError::UnknownPanelType(s.to_string())),
        }
    }
}

/// An entity paired with the score that ranks it for one request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredCandidate<'a> {
    pub entity: &'a Entity,
    pub score: f64,
}

impl<'a> ScoredCandidate<'a> {
    #[must_use]
    pub const fn new(entity: &'a Entity, score: f64) -> Self {
        Self { entity, score }
    }
}

/// Blue, Left-Field and Red Team panels drawn from one catalog.
///
/// The three lists never share an id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThreePanelTeam<'a> {
    pub blue_team: Vec<&'a Entity>,
    pub left_field: Vec<&'a Entity>,
    pub red_team: Vec<&'a Entity>,
}

impl<'a> ThreePanelTeam<'a> {
    #[must_use]
    pub fn panel(&self, panel_type: PanelType) -> &[&'a Entity] {
        match panel_type {
            PanelType::Blue => &self.blue_team,
            PanelType::LeftField => &self.left_field,
            PanelType::RedTeam => &self.red_team,
        }
    }

    /// Ids of every member across all three panels
    #[must_use]
    pub fn all_ids(&self) -> HashSet<&'a str> {
        self.blue_team
            .iter()
            .chain(&self.left_field)
            .chain(&self.red_team)
            .map(|e| e.id.as_str())
            .collect()
    }

    /// Total number of members
    #[must_use]
    pub fn len(&self) -> usize {
        self.blue_team.len() + self.left_field.len() + self.red_team.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
