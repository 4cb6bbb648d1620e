// tests/unit_buckets.rs
//! Presence bucketing: collapse, bitmask Hamming, radius derivation.

use decklens_core::buckets::{build, neighbor_pairs, pruning_radius};
use decklens_core::types::CardEntry;
use serde_json::json;

fn card(name: &str, card_type: &str, count: u32) -> CardEntry {
    serde_json::from_value(json!({ "name": name, "type": card_type, "count": count })).unwrap()
}

fn pokemon_deck(names: &[&str]) -> Vec<CardEntry> {
    names.iter().map(|n| card(n, "Pokemon", 1)).collect()
}

#[test]
fn test_same_presence_set_collapses_into_one_bucket() {
    // Counts and trainer cards must not split the bucket
    let a = vec![card("Pikachu", "Pokemon", 2), card("Research", "Support", 2)];
    let b = vec![card("Pikachu", "Pokemon", 1), card("Shrine", "Stadium", 1)];
    let c = vec![card("Zacian", "Pokemon", 1)];

    let decks: Vec<&[CardEntry]> = vec![&a, &b, &c];
    let index = build(&decks);

    assert_eq!(index.bucket_count(), 2);
    assert_eq!(index.deck_bucket[0], index.deck_bucket[1]);
    assert_ne!(index.deck_bucket[0], index.deck_bucket[2]);
    assert_eq!(index.members[index.deck_bucket[0]], vec![0, 1]);
}

#[test]
fn test_identity_enumeration_is_sorted() {
    let a = pokemon_deck(&["Zacian", "Pikachu"]);
    let b = pokemon_deck(&["Mewtwo"]);
    let decks: Vec<&[CardEntry]> = vec![&a, &b];
    let index = build(&decks);
    assert_eq!(index.identities, vec!["Mewtwo", "Pikachu", "Zacian"]);
}

#[test]
fn test_neighbor_registration_by_toggle_count() {
    let a = pokemon_deck(&["P1", "P2", "P3"]);
    let b = pokemon_deck(&["P1", "P2", "P4"]); // 2 toggles from a
    let c = pokemon_deck(&["P4", "P5", "P6"]); // 6 toggles from a
    let decks: Vec<&[CardEntry]> = vec![&a, &b, &c];
    let index = build(&decks);

    assert_eq!(index.masks[0].hamming(&index.masks[1]), 2);
    assert_eq!(index.masks[0].hamming(&index.masks[2]), 6);

    let neighbors = neighbor_pairs(&index.masks, 2);
    assert!(neighbors.contains(&(0, 1)), "2-toggle buckets are neighbors");
    assert!(!neighbors.contains(&(0, 2)), "6-toggle buckets are not");
}

#[test]
fn test_three_toggles_excluded_at_default_radius() {
    let a = pokemon_deck(&["P1", "P2", "P3", "P4"]);
    let b = pokemon_deck(&["P1"]);
    let decks: Vec<&[CardEntry]> = vec![&a, &b];
    let index = build(&decks);

    assert_eq!(index.masks[0].hamming(&index.masks[1]), 3);
    assert!(neighbor_pairs(&index.masks, 2).is_empty());
    assert_eq!(neighbor_pairs(&index.masks, 3), vec![(0, 1)]);
}

#[test]
fn test_masks_span_multiple_words() {
    // More than 64 distinct Pokemon forces multi-word bitmasks
    let names: Vec<String> = (0..70).map(|i| format!("Pokemon {i:03}")).collect();
    let all: Vec<&str> = names.iter().map(String::as_str).collect();
    let a = pokemon_deck(&all);
    let b = pokemon_deck(&all[..69]);
    let decks: Vec<&[CardEntry]> = vec![&a, &b];
    let index = build(&decks);

    assert_eq!(index.identities.len(), 70);
    assert_eq!(index.masks[0].hamming(&index.masks[1]), 1);
    assert_eq!(neighbor_pairs(&index.masks, 2), vec![(0, 1)]);
}

#[test]
fn test_decks_without_pokemon_share_the_empty_bucket() {
    let a = vec![card("Research", "Support", 2)];
    let b = vec![card("Shrine", "Stadium", 1)];
    let decks: Vec<&[CardEntry]> = vec![&a, &b];
    let index = build(&decks);
    assert_eq!(index.bucket_count(), 1);
}

#[test]
fn test_pruning_radius_derivation() {
    // One toggled Pokemon identity costs at least 1.0, and the radius
    // never drops below the historical default of 2.
    assert_eq!(pruning_radius(0.5), 2);
    assert_eq!(pruning_radius(1.0), 2);
    assert_eq!(pruning_radius(2.9), 2);
    assert_eq!(pruning_radius(3.0), 3);
    assert_eq!(pruning_radius(3.5), 3);
    assert_eq!(pruning_radius(5.0), 5);
}
