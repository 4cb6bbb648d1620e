// src/evaluate.rs
//! Exact distance evaluation over candidate deck pairs.
//!
//! The evaluator builds each deck's count-map feature once, then scores
//! candidate pairs in parallel and keeps those within threshold as graph
//! edges. Chunk results are merged only after all parallel work completes;
//! a panicking worker propagates and aborts the run, since a silently
//! dropped chunk would under-merge clusters with no visible error.

use rayon::prelude::*;

use crate::buckets::{self, BucketIndex};
use crate::distance::{self, CountMap};
use crate::types::CardEntry;

/// Accepted edges plus how many candidate pairs were actually scored.
#[derive(Debug)]
pub struct EdgeSet {
    pub candidates: usize,
    pub edges: Vec<(usize, usize)>,
}

/// Read-only per-deck feature data shared by every worker.
pub struct Evaluator {
    features: Vec<CountMap>,
    threshold: f64,
}

impl Evaluator {
    #[must_use]
    pub fn new(decks: &[&[CardEntry]], threshold: f64) -> Self {
        let features = decks.par_iter().map(|c| distance::count_map(c)).collect();
        Self {
            features,
            threshold,
        }
    }

    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.features.len()
    }

    /// Scores only the pairs surfaced by the bucketer: all pairs within a
    /// bucket, plus all cross pairs between registered neighbor buckets.
    #[must_use]
    pub fn edges_pruned(&self, index: &BucketIndex, radius: u32) -> EdgeSet {
        let neighbors = buckets::neighbor_pairs(&index.masks, radius);

        let mut candidates: Vec<(usize, usize)> = Vec::new();
        for members in &index.members {
            for (a, &x) in members.iter().enumerate() {
                for &y in &members[a + 1..] {
                    candidates.push((x, y));
                }
            }
        }
        for &(bi, bj) in &neighbors {
            for &x in &index.members[bi] {
                for &y in &index.members[bj] {
                    candidates.push((x.min(y), x.max(y)));
                }
            }
        }

        let total = candidates.len();
        let edges = candidates
            .into_par_iter()
            .filter(|&(i, j)| self.accepts(i, j))
            .collect();
        EdgeSet {
            candidates: total,
            edges,
        }
    }

    /// Scores every deck pair. Used when pruning is disabled and as the
    /// regression oracle for the bucketed path.
    #[must_use]
    pub fn edges_exhaustive(&self) -> EdgeSet {
        let n = self.features.len();
        let edges = (0..n)
            .into_par_iter()
            .flat_map_iter(|i| ((i + 1)..n).filter(move |&j| self.accepts(i, j)).map(move |j| (i, j)))
            .collect();
        EdgeSet {
            candidates: n * n.saturating_sub(1) / 2,
            edges,
        }
    }

    /// Exact distance for one pair, from the prebuilt features.
    #[must_use]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        distance::distance_between(&self.features[i], &self.features[j])
    }

    fn accepts(&self, i: usize, j: usize) -> bool {
        distance::within_threshold(self.distance(i, j), self.threshold)
    }
}
