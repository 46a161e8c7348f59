use serde::Serialize;

use crate::types::PanelType;

/// Which panels to convene for a workflow phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseRecommendation {
    pub label: Option<&'static str>,
    pub primary: PanelType,
    pub secondary: &'static [PanelType],
}

const DEFAULT_RECOMMENDATION: PhaseRecommendation = PhaseRecommendation {
    label: None,
    primary: PanelType::Blue,
    secondary: &[],
};

/// Phases 1..=7 of the consultation workflow; anything else gets Blue alone.
#[must_use]
pub const fn recommend_panels_for_phase(phase: i64) -> PhaseRecommendation {
    use PanelType::{Blue, LeftField, RedTeam};

    let (label, primary, secondary): (&'static str, PanelType, &'static [PanelType]) = match phase
    {
        1 => ("Discovery", Blue, &[]),
        2 => ("Research", Blue, &[LeftField]),
        3 => ("Ideation", LeftField, &[Blue]),
        4 => ("Strategy", Blue, &[RedTeam]),
        5 => ("Stress Test", RedTeam, &[Blue]),
        6 => ("Planning", Blue, &[LeftField, RedTeam]),
        7 => ("Review", RedTeam, &[Blue, LeftField]),
        _ => return DEFAULT_RECOMMENDATION,
    };
    PhaseRecommendation {
        label: Some(label),
        primary,
        secondary,
    }
}
