use std::collections::HashSet;

use crate::assembler::{PanelEngine, PanelRequest};
use crate::types::{PanelType, ThreePanelTeam};

/// Left-Field and Red Team panels get half the Blue Team size, never fewer than two seats
#[must_use]
pub const fn secondary_panel_size(team_size: usize) -> usize {
    let half = team_size / 2;
    if half > 2 {
        half
    } else {
        2
    }
}

impl<'a> PanelEngine<'a> {
    /// Blue Team first, then Left-Field, then Red Team; each later panel draws only from
    /// entities not already seated, so the three panels are disjoint by construction.
    #[must_use]
    pub fn compose_three_panel_team(&self, topic: &str, team_size: usize) -> ThreePanelTeam<'a> {
        let secondary_size = secondary_panel_size(team_size);

        let blue_team =
            self.assemble_panel(&PanelRequest::new(topic, PanelType::Blue).size(team_size));
        let mut excluded: HashSet<String> = blue_team.iter().map(|e| e.id.clone()).collect();

        let left_field = self.assemble_panel(
            &PanelRequest::new(topic, PanelType::LeftField)
                .size(secondary_size)
                .exclude_ids(excluded.iter().cloned()),
        );
        excluded.extend(left_field.iter().map(|e| e.id.clone()));

        let red_team = self.assemble_panel(
            &PanelRequest::new(topic, PanelType::RedTeam)
                .size(secondary_size)
                .exclude_ids(excluded),
        );

        log::debug!(
            "Composed three-panel team for '{}': blue={}, left_field={}, red_team={}",
            topic,
            blue_team.len(),
            left_field.len(),
            red_team.len()
        );

        ThreePanelTeam {
            blue_team,
            left_field,
            red_team,
        }
    }
}
