use std::collections::BTreeMap;

use panel_catalog::Catalog;
use serde::Serialize;

use crate::classifier::primary_panel_type;
use crate::types::PanelType;

/// Size and mean `performance_score` of one panel bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PanelStats {
    pub count: usize,
    pub avg_score: f64,
}

/// Per-panel summary, counting each entity under its primary panel only.
///
/// Every panel type has an entry; empty buckets report `avg_score` 0.
#[must_use]
pub fn panel_stats(catalog: &Catalog) -> BTreeMap<PanelType, PanelStats> {
    let mut totals: BTreeMap<PanelType, (usize, f64)> =
        PanelType::ALL.into_iter().map(|t| (t, (0, 0.0))).collect();

    for entity in catalog {
        let bucket = totals
            .entry(primary_panel_type(entity.category))
            .or_default();
        bucket.0 += 1;
        bucket.1 += entity.performance_score;
    }

    totals
        .into_iter()
        .map(|(panel_type, (count, sum))| {
            let avg_score = if count == 0 { 0.0 } else { sum / count as f64 };
            (panel_type, PanelStats { count, avg_score })
        })
        .collect()
}
