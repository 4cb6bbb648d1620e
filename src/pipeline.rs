// src/pipeline.rs
//! End-to-end clustering pipeline.
//!
//! Load snapshot -> bucket -> evaluate candidate pairs -> connected
//! components -> rank -> atomic write. One batch pass over the entire
//! known deck population; clusters are fully recomputed every run.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use crate::buckets;
use crate::cache;
use crate::cluster::{self, RankedCluster};
use crate::evaluate::Evaluator;
use crate::types::{CardEntry, Cluster, DeckRecord};

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub cache_path: PathBuf,
    pub output_path: PathBuf,
    pub threshold: f64,
    /// Skip presence bucketing and score every pair.
    pub exhaustive: bool,
}

/// What the run did, for the CLI summary.
#[derive(Debug)]
pub struct RunReport {
    pub decks: usize,
    pub buckets: Option<usize>,
    pub pruning_radius: Option<u32>,
    pub candidates: usize,
    pub edges: usize,
    pub clusters: Vec<RankedCluster>,
    pub duration_ms: u128,
}

/// Runs the full pipeline and writes the cluster file.
///
/// # Errors
/// Returns error if the cache is missing or empty, or the output write
/// fails. No partial output is ever left in place.
pub fn run(opts: &RunOptions) -> Result<RunReport> {
    let start = Instant::now();

    let records = cache::load_snapshot(&opts.cache_path)?;
    let mut report = cluster_records(&records, opts.threshold, opts.exhaustive);

    let output: Vec<Cluster> = report.clusters.iter().map(|rc| rc.cluster.clone()).collect();
    cache::write_clusters(&opts.output_path, &output)?;

    report.duration_ms = start.elapsed().as_millis();
    Ok(report)
}

/// The in-memory pipeline: everything except file IO.
#[must_use]
pub fn cluster_records(
    records: &[(String, DeckRecord)],
    threshold: f64,
    exhaustive: bool,
) -> RunReport {
    let start = Instant::now();
    let decks: Vec<&[CardEntry]> = records.iter().map(|(_, r)| r.cards.as_slice()).collect();

    let evaluator = Evaluator::new(&decks, threshold);
    let (bucket_count, radius, edge_set) = if exhaustive {
        (None, None, evaluator.edges_exhaustive())
    } else {
        let index = buckets::build(&decks);
        let radius = buckets::pruning_radius(threshold);
        let edge_set = evaluator.edges_pruned(&index, radius);
        (Some(index.bucket_count()), Some(radius), edge_set)
    };

    let components = cluster::connected_components(records.len(), &edge_set.edges);
    let clusters = cluster::build_clusters(records, &components);

    RunReport {
        decks: records.len(),
        buckets: bucket_count,
        pruning_radius: radius,
        candidates: edge_set.candidates,
        edges: edge_set.edges.len(),
        clusters,
        duration_ms: start.elapsed().as_millis(),
    }
}
