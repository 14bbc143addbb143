// src/card.rs
//! Canonical card record as stored in the catalog document.
//!
//! Field order here is the key order in `card_data.json`. Optional fields are
//! left out of the document entirely when absent, never written as `null`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    #[serde(rename = "Monster Card")]
    Monster,
    #[serde(rename = "Spell Card")]
    Spell,
    #[serde(rename = "Trap Card")]
    Trap,
}

impl CardKind {
    /// Exact match on the upstream type label; anything that is not a spell or trap is a monster.
    pub fn classify(full_type: &str) -> Self {
        match full_type {
            "Spell Card" => CardKind::Spell,
            "Trap Card" => CardKind::Trap,
            _ => CardKind::Monster,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CardKind::Monster => "Monster Card",
            CardKind::Spell => "Spell Card",
            CardKind::Trap => "Trap Card",
        }
    }
}

/// Summon mechanism. `Normal` is only ever the fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Normal,
    Effect,
    Ritual,
    Fusion,
    Synchro,
    Xyz,
    Link,
    Pendulum,
}

impl Category {
    pub fn keyword(self) -> &'static str {
        match self {
            Category::Normal => "Normal",
            Category::Effect => "Effect",
            Category::Ritual => "Ritual",
            Category::Fusion => "Fusion",
            Category::Synchro => "Synchro",
            Category::Xyz => "Xyz",
            Category::Link => "Link",
            Category::Pendulum => "Pendulum",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    Flip,
    Gemini,
    Spirit,
    Toon,
    Tuner,
    Union,
}

impl Ability {
    pub fn keyword(self) -> &'static str {
        match self {
            Ability::Flip => "Flip",
            Ability::Gemini => "Gemini",
            Ability::Spirit => "Spirit",
            Ability::Toon => "Toon",
            Ability::Tuner => "Tuner",
            Ability::Union => "Union",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub full_type: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub frame_type: String,
    #[serde(default)]
    pub archetype: String,
    pub image_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atk: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub def: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkval: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_value: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abilities: Option<Vec<Ability>>,

    /// Fields this crate does not model (hand edits, overrides adding new keys).
    /// Carried through load/save untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CardRecord {
    /// Bare record with only the always-present fields filled.
    pub fn new(name: impl Into<String>, full_type: impl Into<String>, image_url: impl Into<String>) -> Self {
        let full_type = full_type.into();
        Self {
            name: name.into(),
            kind: CardKind::classify(&full_type),
            full_type,
            race: s!(),
            desc: s!(),
            frame_type: s!(),
            archetype: s!(),
            image_url: image_url.into(),
            attribute: None,
            atk: None,
            def: None,
            level: None,
            linkval: None,
            number_value: None,
            category: None,
            abilities: None,
            extra: Map::new(),
        }
    }

    pub fn is_monster(&self) -> bool {
        self.kind == CardKind::Monster
    }
}
