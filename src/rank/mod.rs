//! Per-category ranking views.
//!
//! Absent real benchmark data, total price serves as the capability
//! proxy: the heuristic rank is the 1-based position in a descending
//! total-price ordering. All views are pure recomputed transforms over
//! a category's member list; an empty member list produces empty views,
//! which the renderer skips.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::ModelRecord;

/// Default cap on the free-tier shortlist.
pub const DEFAULT_FREE_CAP: usize = 25;

/// One view entry: a record plus its heuristic rank.
///
/// The rank is looked up by id from the heuristic ordering; `None`
/// means the record was absent from that map, reported as unknown
/// rather than treated as an error.
#[derive(Debug, Clone, Serialize)]
pub struct RankedModel {
    /// The model.
    pub record: ModelRecord,
    /// 1-based position in the heuristic ordering, if known.
    pub rank: Option<u32>,
}

/// The three orderings plus free shortlist for one category.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryViews {
    /// Descending by total price; rank source for the other views.
    pub heuristic: Vec<RankedModel>,
    /// Descending by total price (re-derived, same order as heuristic).
    pub by_price_desc: Vec<RankedModel>,
    /// Ascending by total price.
    pub by_price_asc: Vec<RankedModel>,
    /// Free-tier members in original order, capped.
    pub free: Vec<RankedModel>,
}

impl CategoryViews {
    /// Whether every view is empty (zero-member category).
    pub fn is_empty(&self) -> bool {
        self.heuristic.is_empty()
    }
}

/// Produces ranking views over category member lists.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    free_cap: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self {
            free_cap: DEFAULT_FREE_CAP,
        }
    }
}

impl Ranker {
    /// Create a ranker with the given free-shortlist cap.
    pub fn new(free_cap: usize) -> Self {
        Self { free_cap }
    }

    /// Compute all views for one category's members.
    pub fn views(&self, members: &[ModelRecord]) -> CategoryViews {
        // Stable descending sort; equal-price runs keep input order.
        let mut by_desc = members.to_vec();
        by_desc.sort_by(|a, b| b.total_price().total_cmp(&a.total_price()));

        let ranks: HashMap<&str, u32> = by_desc
            .iter()
            .enumerate()
            .map(|(idx, m)| (m.id.as_str(), idx as u32 + 1))
            .collect();
        let rank_of = |m: &ModelRecord| ranks.get(m.id.as_str()).copied();

        let heuristic: Vec<RankedModel> = by_desc
            .iter()
            .map(|m| RankedModel {
                rank: rank_of(m),
                record: m.clone(),
            })
            .collect();

        // Re-derived rather than aliased: membership could differ
        // between calls even though the ordering rule is the same.
        let by_price_desc = heuristic.clone();

        let mut by_asc = members.to_vec();
        by_asc.sort_by(|a, b| a.total_price().total_cmp(&b.total_price()));
        let by_price_asc = by_asc
            .into_iter()
            .map(|m| RankedModel {
                rank: rank_of(&m),
                record: m,
            })
            .collect();

        let free = members
            .iter()
            .filter(|m| m.is_free())
            .take(self.free_cap)
            .map(|m| RankedModel {
                rank: rank_of(m),
                record: m.clone(),
            })
            .collect();

        CategoryViews {
            heuristic,
            by_price_desc,
            by_price_asc,
            free,
        }
    }
}
