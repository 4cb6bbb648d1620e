// tests/unit_distance.rs
//! Worked examples and algebraic properties of the deck distance.

use decklens_core::distance::{count_map, distance, distance_between, within_threshold};
use decklens_core::types::CardEntry;
use serde_json::json;

fn card(name: &str, card_type: &str, count: u32) -> CardEntry {
    serde_json::from_value(json!({ "name": name, "type": card_type, "count": count })).unwrap()
}

#[test]
fn test_identical_decks_are_zero() {
    let deck = vec![card("Pikachu", "Pokemon", 2)];
    assert_eq!(distance(&deck, &deck), 0.0);
}

#[test]
fn test_pokemon_count_difference() {
    let two = vec![card("Pikachu", "Pokemon", 2)];
    let one = vec![card("Pikachu", "Pokemon", 1)];
    assert_eq!(distance(&two, &one), 0.5);
}

#[test]
fn test_pokemon_count_swap() {
    // Pikachu diff 1 * 0.5 + Zacian diff 1 * 0.5
    let a = vec![card("Pikachu", "Pokemon", 2), card("Zacian", "Pokemon", 1)];
    let b = vec![card("Pikachu", "Pokemon", 1), card("Zacian", "Pokemon", 2)];
    assert_eq!(distance(&a, &b), 1.0);
}

#[test]
fn test_full_pokemon_swap() {
    // Each side's unique card costs count * 1.0
    let a = vec![card("Pikachu", "Pokemon", 1)];
    let b = vec![card("Zacian", "Pokemon", 1)];
    assert_eq!(distance(&a, &b), 2.0);
}

#[test]
fn test_trainer_weights() {
    // Research diff 1 * 0.125, Shrine unique 1 * 0.25
    let a = vec![card("Research", "Support", 2)];
    let b = vec![card("Research", "Support", 1), card("Shrine", "Stadium", 1)];
    assert_eq!(distance(&a, &b), 0.375);
}

#[test]
fn test_symmetry() {
    let a = vec![
        card("Pikachu", "Pokemon", 2),
        card("Poke Ball", "Item", 2),
        card("Research", "Support", 1),
    ];
    let b = vec![
        card("Zacian", "Pokemon", 2),
        card("Poke Ball", "Item", 1),
        card("Shrine", "Stadium", 2),
    ];
    assert_eq!(distance(&a, &b), distance(&b, &a));
}

#[test]
fn test_repeated_entries_sum_counts() {
    // Two x1 lines of the same card equal one x2 line
    let split = vec![card("Pikachu", "Pokemon", 1), card("Pikachu", "Pokemon", 1)];
    let merged = vec![card("Pikachu", "Pokemon", 2)];
    assert_eq!(distance(&split, &merged), 0.0);
}

#[test]
fn test_same_name_different_type_is_distinct() {
    // A name colliding across types counts as two one-sided cards
    let a = vec![card("Mew", "Pokemon", 1)];
    let b = vec![card("Mew", "Item", 1)];
    assert_eq!(distance(&a, &b), 1.0 + 0.25);
}

#[test]
fn test_unknown_type_weighs_as_trainer() {
    let a = vec![card("Mystery", "Unknown", 2)];
    let b: Vec<CardEntry> = Vec::new();
    assert_eq!(distance(&a, &b), 0.5);
}

#[test]
fn test_prebuilt_maps_match_direct_distance() {
    let a = vec![card("Pikachu", "Pokemon", 2), card("Research", "Support", 2)];
    let b = vec![card("Pikachu", "Pokemon", 1), card("Shrine", "Stadium", 1)];
    assert_eq!(
        distance_between(&count_map(&a), &count_map(&b)),
        distance(&a, &b)
    );
}

#[test]
fn test_threshold_is_inclusive() {
    assert!(within_threshold(1.0, 1.0));
    assert!(within_threshold(0.999_999_999_9, 1.0));
    assert!(!within_threshold(1.001, 1.0));
}
