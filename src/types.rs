// src/types.rs
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Card category, used only to select the distance metric's weight class.
///
/// Cache files and the card database use free-form strings; anything we do
/// not recognize maps to `Unknown` rather than failing the load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CardType {
    Pokemon,
    Item,
    Stadium,
    Support,
    #[default]
    Unknown,
}

impl CardType {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "Pokemon" | "Pokémon" => Self::Pokemon,
            "Item" | "Goods" => Self::Item,
            "Stadium" => Self::Stadium,
            "Support" | "Supporter" => Self::Support,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pokemon => "Pokemon",
            Self::Item => "Item",
            Self::Stadium => "Stadium",
            Self::Support => "Support",
            Self::Unknown => "Unknown",
        }
    }

    #[must_use]
    pub const fn is_pokemon(self) -> bool {
        matches!(self, Self::Pokemon)
    }
}

impl Serialize for CardType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CardType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// One line of a deck list as stored in the aggregation cache.
///
/// `(set, number)` is the stable card identity; `name` and `type` are
/// descriptive enrichment from the card database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardEntry {
    pub name: String,
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub number: String,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(rename = "type", default)]
    pub card_type: CardType,
}

fn default_count() -> u32 {
    1
}

/// Win/loss record accumulated across all scanned tournaments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckStats {
    pub wins: u64,
    pub losses: u64,
    pub ties: u64,
    pub players: u64,
}

/// One tournament placement of a deck, carried through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceRef {
    pub t_id: Option<String>,
    pub player_id: Option<String>,
    pub record: Option<DeckStats>,
    pub date: Option<String>,
}

/// A unique deck list keyed by its signature in the aggregation cache.
/// `cards` is fixed at first observation; `stats` accumulates additively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckRecord {
    #[serde(default = "default_deck_name")]
    pub name: String,
    #[serde(default)]
    pub cards: Vec<CardEntry>,
    #[serde(default)]
    pub stats: DeckStats,
    #[serde(default)]
    pub appearances: Vec<AppearanceRef>,
}

fn default_deck_name() -> String {
    "Unknown".to_string()
}

/// One archetype: a set of deck signatures treated as the same deck.
///
/// `id` is dense rank order (0 = most played) and is recomputed on every
/// clustering run; consumers needing continuity across runs should
/// re-resolve by `representative_sig`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: usize,
    pub representative_name: String,
    pub representative_sig: String,
    pub signatures: Vec<String>,
    pub count: usize,
}
