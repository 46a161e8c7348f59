//! Two-pass, category-diverse selection over a ranked candidate list.
//!
//! ```text
//! sorted candidates ──> diversity pass (first of each category, in rank order)
//!                   └─> fill pass      (remaining slots, in rank order, any category)
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::types::ScoredCandidate;

/// Canonical ranking: score descending, ties broken by ascending id
pub fn sort_candidates(candidates: &mut [ScoredCandidate<'_>]) {
    candidates.sort_by(compare_candidates);
}

fn compare_candidates(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.entity.id.cmp(&b.entity.id))
}

/// Pick up to `size` candidates from `sorted` (already in canonical order).
///
/// The first representative of every category is admitted before any category gets a
/// second seat. Output order is admission order, so diversity picks precede fill picks.
#[must_use]
pub fn select<'a>(sorted: &[ScoredCandidate<'a>], size: usize) -> Vec<ScoredCandidate<'a>> {
    if size == 0 || sorted.is_empty() {
        return Vec::new();
    }
    debug_assert!(
        sorted
            .windows(2)
            .all(|w| compare_candidates(&w[0], &w[1]) != Ordering::Greater),
        "candidates must be in canonical order"
    );

    let mut selected = Vec::with_capacity(size.min(sorted.len()));
    let mut admitted_ids: HashSet<&str> = HashSet::new();
    let mut seen_categories = HashSet::new();

    for candidate in sorted {
        if selected.len() >= size {
            break;
        }
        if seen_categories.insert(candidate.entity.category) {
            admitted_ids.insert(candidate.entity.id.as_str());
            selected.push(*candidate);
        }
    }
    let diverse = selected.len();

    for candidate in sorted {
        if selected.len() >= size {
            break;
        }
        if admitted_ids.insert(candidate.entity.id.as_str()) {
            selected.push(*candidate);
        }
    }

    log::debug!(
        "Selected {} of {} candidates ({} by diversity, {} by fill)",
        selected.len(),
        sorted.len(),
        diverse,
        selected.len() - diverse
    );
    selected
}
