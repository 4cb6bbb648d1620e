// src/cluster.rs
//! Connected-components clustering, representative selection, ranking.
//!
//! Edges are undirected; archetype membership is transitive through the
//! graph, not through pairwise distance, so two decks further apart than
//! the threshold still share a cluster when a chain connects them.

use std::collections::HashMap;

use crate::types::{Cluster, DeckRecord};

/// A cluster paired with its summed player count, which drives ranking
/// and the console summary but is not part of the output schema.
#[derive(Debug)]
pub struct RankedCluster {
    pub cluster: Cluster,
    pub players: u64,
}

struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[rb] = ra;
        }
    }
}

/// Partitions deck indices `0..n` into connected components.
///
/// Every deck untouched by an edge becomes its own singleton component.
/// Components are ordered by smallest member and members ascend, so the
/// partition is deterministic regardless of edge order.
#[must_use]
pub fn connected_components(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut dsu = DisjointSet::new(n);
    for &(a, b) in edges {
        dsu.union(a, b);
    }

    let mut slot_of: HashMap<usize, usize> = HashMap::new();
    let mut components: Vec<Vec<usize>> = Vec::new();
    for deck in 0..n {
        let root = dsu.find(deck);
        let next = components.len();
        let slot = *slot_of.entry(root).or_insert(next);
        if slot == next {
            components.push(Vec::new());
        }
        components[slot].push(deck);
    }
    components
}

/// Builds ranked clusters from a component partition.
///
/// Within a cluster, members sort by players descending with ties broken
/// by ascending signature (the pipeline's fixed iteration order); the top
/// member is the representative. Clusters then rank by summed players
/// descending, same tie rule on the representative signature, and dense
/// ids are assigned in that order so id 0 is always the most played.
#[must_use]
pub fn build_clusters(
    records: &[(String, DeckRecord)],
    components: &[Vec<usize>],
) -> Vec<RankedCluster> {
    let mut ranked: Vec<RankedCluster> = components
        .iter()
        .map(|members| {
            let mut ordered = members.clone();
            ordered.sort_by(|&a, &b| {
                records[b]
                    .1
                    .stats
                    .players
                    .cmp(&records[a].1.stats.players)
                    .then_with(|| records[a].0.cmp(&records[b].0))
            });
            let players = ordered.iter().map(|&i| records[i].1.stats.players).sum();
            let rep = ordered[0];
            RankedCluster {
                cluster: Cluster {
                    id: 0,
                    representative_name: records[rep].1.name.clone(),
                    representative_sig: records[rep].0.clone(),
                    signatures: ordered.iter().map(|&i| records[i].0.clone()).collect(),
                    count: ordered.len(),
                },
                players,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.players
            .cmp(&a.players)
            .then_with(|| a.cluster.representative_sig.cmp(&b.cluster.representative_sig))
    });
    for (id, rc) in ranked.iter_mut().enumerate() {
        rc.cluster.id = id;
    }
    ranked
}
