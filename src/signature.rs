// src/signature.rs
//! Order-independent deck canonicalization and signature hashing.
//!
//! A signature is the first 8 hex chars of the SHA-256 of the deck's
//! canonical serialization: entries normalized to `{name, set, number,
//! count}` and sorted by `(name, set, number)`, so any permutation of the
//! same list hashes identically. Truncation collisions are accepted in
//! this domain (small identity space) and not specially handled.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::types::CardEntry;

/// A card entry reduced to the fields that participate in the signature.
/// Field order matters: the canonical serialization is compact JSON with
/// fields in exactly this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedCard {
    pub name: String,
    pub set: String,
    pub number: String,
    pub count: u32,
}

/// Computes the deck signature from raw card-like values.
///
/// A bare string is a basic energy card (`set="Energy"`, `number="000"`,
/// `count=1`); an object takes `name`/`set`/`number`/`count` with defaults;
/// anything else is skipped.
#[must_use]
pub fn compute_deck_signature(cards: &[Value]) -> (String, Vec<NormalizedCard>) {
    let mut normalized: Vec<NormalizedCard> = cards.iter().filter_map(normalize_entry).collect();
    sort_canonical(&mut normalized);
    (hash_cards(&normalized), normalized)
}

/// Signature of an already-parsed card list (same canonical form).
#[must_use]
pub fn signature_of(cards: &[CardEntry]) -> String {
    let mut normalized: Vec<NormalizedCard> = cards
        .iter()
        .map(|c| NormalizedCard {
            name: c.name.clone(),
            set: c.set.clone(),
            number: c.number.clone(),
            count: c.count,
        })
        .collect();
    sort_canonical(&mut normalized);
    hash_cards(&normalized)
}

fn normalize_entry(raw: &Value) -> Option<NormalizedCard> {
    match raw {
        Value::String(name) => Some(NormalizedCard {
            name: name.clone(),
            set: "Energy".to_string(),
            number: "000".to_string(),
            count: 1,
        }),
        Value::Object(obj) => Some(NormalizedCard {
            name: obj
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("Unknown")
                .to_string(),
            set: obj
                .get("set")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
            number: number_field(obj.get("number")),
            count: obj
                .get("count")
                .and_then(Value::as_u64)
                .map_or(1, |c| u32::try_from(c).unwrap_or(1)),
        }),
        _ => None,
    }
}

// Cache files sometimes carry the collector number as a JSON number.
fn number_field(raw: Option<&Value>) -> String {
    match raw {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn sort_canonical(cards: &mut [NormalizedCard]) {
    cards.sort_by(|a, b| {
        (&a.name, &a.set, &a.number).cmp(&(&b.name, &b.set, &b.number))
    });
}

fn hash_cards(cards: &[NormalizedCard]) -> String {
    // Compact JSON of plain structs cannot fail to serialize.
    let json = serde_json::to_string(cards).expect("canonical card serialization is infallible");
    let canonical = escape_non_ascii(&json);
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let full = format!("{:x}", hasher.finalize());
    full[..8].to_string()
}

// Signatures key long-lived aggregation caches written by tools that emit
// ASCII-escaped JSON, so accented card names ("Poké Ball") must hash via
// their `\uXXXX` form (UTF-16 units, lowercase hex) to stay stable.
fn escape_non_ascii(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut buf = [0u16; 2];
    for c in s.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut buf) {
                out.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    out
}
