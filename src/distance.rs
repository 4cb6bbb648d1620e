// src/distance.rs
//! Weighted deck-distance metric.
//!
//! Decks compare as `(name, type) -> count` multisets. A card present on
//! both sides costs the count difference times its weight; a card present
//! on only one side costs its count times double the weight, so replacing
//! card X with card Y costs the same as two independent one-sided
//! penalties. Creature (Pokemon) cards weigh four times trainer cards:
//! creature choice defines an archetype far more than support counts.

use std::collections::HashMap;

use crate::types::{CardEntry, CardType};

pub const POKEMON_WEIGHT: f64 = 0.5;
pub const TRAINER_WEIGHT: f64 = 0.125;

/// Cheapest possible cost of one Pokemon identity present on only one
/// side (count 1). The bucketer's pruning bound is derived from this.
pub const MIN_POKEMON_TOGGLE_COST: f64 = 2.0 * POKEMON_WEIGHT;

/// Tolerance for the inclusive threshold comparison.
pub const EPSILON: f64 = 1e-9;

pub type CardKey = (String, CardType);
pub type CountMap = HashMap<CardKey, u32>;

/// Collapses a card list into a count map, summing repeated keys.
#[must_use]
pub fn count_map(cards: &[CardEntry]) -> CountMap {
    let mut map = CountMap::with_capacity(cards.len());
    for card in cards {
        *map.entry((card.name.clone(), card.card_type)).or_insert(0) += card.count;
    }
    map
}

/// Distance between two prebuilt count maps.
///
/// Symmetric, non-negative, and zero iff the maps are equal. Every term
/// is a multiple of 0.125, so f64 sums are exact and the result does not
/// depend on map iteration order.
#[must_use]
pub fn distance_between(a: &CountMap, b: &CountMap) -> f64 {
    let mut total = 0.0;
    for (key, &count_a) in a {
        let w = weight(key.1);
        match b.get(key) {
            Some(&count_b) => total += f64::from(count_a.abs_diff(count_b)) * w,
            None => total += f64::from(count_a) * 2.0 * w,
        }
    }
    for (key, &count_b) in b {
        if !a.contains_key(key) {
            total += f64::from(count_b) * 2.0 * weight(key.1);
        }
    }
    total
}

/// Distance between two raw card lists.
#[must_use]
pub fn distance(a: &[CardEntry], b: &[CardEntry]) -> f64 {
    distance_between(&count_map(a), &count_map(b))
}

/// Inclusive threshold test with a small float tolerance.
#[must_use]
pub fn within_threshold(dist: f64, threshold: f64) -> bool {
    dist <= threshold + EPSILON
}

const fn weight(card_type: CardType) -> f64 {
    if card_type.is_pokemon() {
        POKEMON_WEIGHT
    } else {
        TRAINER_WEIGHT
    }
}
