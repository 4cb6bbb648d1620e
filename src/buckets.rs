// src/buckets.rs
//! Pokemon-presence bucketing to prune the candidate pair space.
//!
//! Every deck reduces to the set of distinct Pokemon names it plays
//! (counts and trainer cards ignored), encoded as a bitmask over a global
//! sorted enumeration of all Pokemon names in the dataset. Decks with the
//! same set collapse into one bucket. Two buckets can only hold deck
//! pairs within threshold if their masks differ by at most `radius` bits,
//! since each toggled Pokemon identity contributes at least
//! [`MIN_POKEMON_TOGGLE_COST`] to the distance.

use std::collections::{BTreeSet, HashMap};

use rayon::prelude::*;

use crate::distance::{EPSILON, MIN_POKEMON_TOGGLE_COST};
use crate::types::CardEntry;

/// Fixed-width presence bitmask over the global Pokemon enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bitmask(Vec<u64>);

impl Bitmask {
    fn zeroed(words: usize) -> Self {
        Self(vec![0; words])
    }

    fn set(&mut self, bit: usize) {
        self.0[bit / 64] |= 1 << (bit % 64);
    }

    /// Number of Pokemon identities present in exactly one of the two sets.
    #[must_use]
    pub fn hamming(&self, other: &Self) -> u32 {
        self.0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| (a ^ b).count_ones())
            .sum()
    }
}

/// Ephemeral grouping of decks by identical Pokemon-presence sets.
#[derive(Debug)]
pub struct BucketIndex {
    /// Sorted enumeration of every Pokemon name seen in the dataset;
    /// bit `i` of each mask corresponds to `identities[i]`.
    pub identities: Vec<String>,
    /// One mask per bucket, in first-seen deck order.
    pub masks: Vec<Bitmask>,
    /// Deck indices per bucket.
    pub members: Vec<Vec<usize>>,
    /// Deck index -> bucket index.
    pub deck_bucket: Vec<usize>,
}

impl BucketIndex {
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.masks.len()
    }
}

/// Groups decks by their exact Pokemon-presence set.
#[must_use]
pub fn build(decks: &[&[CardEntry]]) -> BucketIndex {
    let mut names: BTreeSet<&str> = BTreeSet::new();
    for cards in decks {
        for card in *cards {
            if card.card_type.is_pokemon() {
                names.insert(card.name.as_str());
            }
        }
    }
    let identities: Vec<String> = names.iter().map(|n| (*n).to_string()).collect();
    let bit_of: HashMap<&str, usize> = identities
        .iter()
        .enumerate()
        .map(|(i, n)| (n.as_str(), i))
        .collect();
    let words = (identities.len() + 63) / 64;

    let mut masks: Vec<Bitmask> = Vec::new();
    let mut members: Vec<Vec<usize>> = Vec::new();
    let mut deck_bucket = Vec::with_capacity(decks.len());
    let mut slot_of: HashMap<Bitmask, usize> = HashMap::new();

    for (deck, cards) in decks.iter().enumerate() {
        let mut mask = Bitmask::zeroed(words);
        for card in *cards {
            if card.card_type.is_pokemon() {
                mask.set(bit_of[card.name.as_str()]);
            }
        }
        let slot = if let Some(&slot) = slot_of.get(&mask) {
            slot
        } else {
            let slot = masks.len();
            slot_of.insert(mask.clone(), slot);
            masks.push(mask);
            members.push(Vec::new());
            slot
        };
        members[slot].push(deck);
        deck_bucket.push(slot);
    }

    BucketIndex {
        identities,
        masks,
        members,
        deck_bucket,
    }
}

/// Derives the Hamming pruning radius for a threshold.
///
/// Decks whose presence sets differ by `k` toggles are at distance >= `k`
/// times [`MIN_POKEMON_TOGGLE_COST`], so toggle counts beyond
/// `threshold / MIN_POKEMON_TOGGLE_COST` cannot yield an edge. The floor
/// of 2 keeps the historical default behavior (a superset of the needed
/// candidates, still sound); larger thresholds widen the radius instead
/// of silently discarding valid pairs.
#[must_use]
pub fn pruning_radius(threshold: f64) -> u32 {
    let derived = ((threshold + EPSILON) / MIN_POKEMON_TOGGLE_COST).floor();
    if derived <= 2.0 {
        2
    } else if derived >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        derived as u32
    }
}

/// Registers every bucket pair whose masks differ by at most `radius`
/// bits. Scanned in parallel over the bucket-index range; each range
/// chunk is independent and the results are merged afterwards.
#[must_use]
pub fn neighbor_pairs(masks: &[Bitmask], radius: u32) -> Vec<(usize, usize)> {
    (0..masks.len())
        .into_par_iter()
        .flat_map_iter(|i| {
            ((i + 1)..masks.len())
                .filter(move |&j| masks[i].hamming(&masks[j]) <= radius)
                .map(move |j| (i, j))
        })
        .collect()
}
