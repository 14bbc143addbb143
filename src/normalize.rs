// src/normalize.rs
//! Upstream record → canonical `CardRecord`.
//!
//! Monster sub-typing is a plain substring scan of the typeline against two
//! fixed keyword tables. Matches are emitted in *table* order, whatever order
//! the typeline lists them in, so rebuilds stay byte-stable.

use crate::card::{Ability, CardKind, CardRecord, Category};
use crate::error::{Error, Result};
use crate::specs::cards::RawCardRecord;

pub const CATEGORIES: [Category; 7] = [
    Category::Effect,
    Category::Ritual,
    Category::Fusion,
    Category::Synchro,
    Category::Xyz,
    Category::Link,
    Category::Pendulum,
];

pub const ABILITIES: [Ability; 6] = [
    Ability::Flip,
    Ability::Gemini,
    Ability::Spirit,
    Ability::Toon,
    Ability::Tuner,
    Ability::Union,
];

/// Ordered keyword tables used for the typeline scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordTables {
    pub categories: Vec<Category>,
    pub abilities: Vec<Ability>,
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self {
            categories: CATEGORIES.to_vec(),
            abilities: ABILITIES.to_vec(),
        }
    }
}

pub fn normalize_all(raws: &[RawCardRecord], tables: &KeywordTables) -> Result<Vec<CardRecord>> {
    raws.iter().map(|raw| normalize_card(raw, tables)).collect()
}

pub fn normalize_card(raw: &RawCardRecord, tables: &KeywordTables) -> Result<CardRecord> {
    let name = raw.name.clone().ok_or(Error::MissingRequiredField { field: "name", card: None })?;
    let full_type = raw.full_type.clone().ok_or_else(|| Error::MissingRequiredField {
        field: "type",
        card: Some(name.clone()),
    })?;
    let image_url = first_image_url(raw, &name)?;

    let mut card = CardRecord::new(name, full_type, image_url);
    card.race = raw.race.clone().unwrap_or_default();
    card.desc = raw.desc.clone().unwrap_or_default();
    card.frame_type = raw.frame_type.clone().unwrap_or_default();
    card.archetype = raw.archetype.clone().unwrap_or_default();

    card.attribute = truthy_str(&raw.attribute);
    card.atk = truthy_int(raw.atk);
    card.def = truthy_int(raw.def);

    // level wins; linkval only when level is absent or zero
    if let Some(level) = truthy_int(raw.level) {
        card.level = Some(level);
        card.number_value = Some(level);
    } else if let Some(link) = truthy_int(raw.linkval) {
        card.linkval = Some(link);
        card.number_value = Some(link);
    }

    if card.kind == CardKind::Monster {
        let typeline = raw.typeline.as_ref().map(|t| t.text()).unwrap_or_default();
        card.category = Some(derive_categories(&typeline, &tables.categories));
        card.abilities = derive_abilities(&typeline, &tables.abilities);
    }

    Ok(card)
}

/// Every table category found in the typeline, in table order. Never empty.
pub fn derive_categories(typeline: &str, table: &[Category]) -> Vec<Category> {
    let found: Vec<Category> = table
        .iter()
        .copied()
        .filter(|c| typeline.contains(c.keyword()))
        .collect();
    if found.is_empty() { vec![Category::Normal] } else { found }
}

/// Every table ability found in the typeline, in table order; `None` rather than empty.
pub fn derive_abilities(typeline: &str, table: &[Ability]) -> Option<Vec<Ability>> {
    let found: Vec<Ability> = table
        .iter()
        .copied()
        .filter(|a| typeline.contains(a.keyword()))
        .collect();
    (!found.is_empty()).then_some(found)
}

fn first_image_url(raw: &RawCardRecord, name: &str) -> Result<String> {
    let images = raw.card_images.as_ref().ok_or_else(|| Error::MissingRequiredField {
        field: "card_images",
        card: Some(s!(name)),
    })?;
    let first = images.first().ok_or_else(|| Error::MissingImage { card: s!(name) })?;
    first.image_url.clone().ok_or_else(|| Error::MissingRequiredField {
        field: "card_images[0].image_url",
        card: Some(s!(name)),
    })
}

fn truthy_int(v: Option<i64>) -> Option<i64> {
    v.filter(|n| *n != 0)
}

fn truthy_str(v: &Option<String>) -> Option<String> {
    v.as_ref().filter(|s| !s.is_empty()).cloned()
}
