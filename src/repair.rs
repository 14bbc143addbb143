// src/repair.rs
//! Hand-curated corrections for known upstream data errors.
//!
//! The table is data (`data/overrides.json`, or any file passed with
//! `--overrides`), not code:
//!
//! ```json
//! {
//!     "cards":         { "<card name>": { "<field>": <value> } },
//!     "substitutions": { "<field>": { "<from>": "<to>" } }
//! }
//! ```
//!
//! `cards` entries overwrite (or add) fields on the record with that exact
//! name, every time. A `null` value removes an optional field. `substitutions`
//! is a separate, opt-in pass over the raw document (see `substitute_values`).

use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::card::CardRecord;
use crate::config::options::RepairOptions;
use crate::error::{Error, Result};

const EMBEDDED_OVERRIDES: &str = include_str!("../data/overrides.json");

/// Field name → (old value → new value).
pub type Substitutions = BTreeMap<String, BTreeMap<String, String>>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Overrides {
    #[serde(default)]
    pub cards: BTreeMap<String, Map<String, Value>>,
    #[serde(default)]
    pub substitutions: Substitutions,
}

impl Overrides {
    /// The table shipped with the binary.
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_OVERRIDES, "embedded overrides")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text, &path.display().to_string())
    }

    pub fn from_options(opts: &RepairOptions) -> Result<Self> {
        match &opts.overrides_path {
            Some(path) => Self::load(path),
            None => Self::embedded(),
        }
    }

    fn parse(text: &str, what: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| Error::Decode { what: s!(what), source })
    }
}

/// Apply the per-card overrides in place. Returns how many records were touched.
pub fn apply_overrides(records: &mut [CardRecord], overrides: &Overrides) -> Result<usize> {
    let mut touched = 0;
    for record in records.iter_mut() {
        let Some(fields) = overrides.cards.get(&record.name) else { continue };
        *record = patched(record, fields)?;
        touched += 1;
        logf!("Override applied to {}: {}", record.name, describe(fields));
    }
    Ok(touched)
}

/// Round-trip through JSON so an override can reach any field, including ones
/// the record type does not model.
fn patched(record: &CardRecord, fields: &Map<String, Value>) -> Result<CardRecord> {
    let invalid = |source| Error::InvalidOverride { card: record.name.clone(), source };

    let mut doc = serde_json::to_value(record).map_err(invalid)?;
    if let Value::Object(obj) = &mut doc {
        for (key, value) in fields {
            obj.insert(key.clone(), value.clone());
        }
    }
    serde_json::from_value(doc).map_err(invalid)
}

fn describe(fields: &Map<String, Value>) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rewrite string field values through the substitution table, on raw catalog
/// documents before they are decoded into records. Returns the number of
/// values changed.
pub fn substitute_values(docs: &mut [Value], subs: &Substitutions) -> usize {
    let mut changed = 0;
    for doc in docs.iter_mut() {
        let Value::Object(obj) = doc else { continue };
        for (field, table) in subs {
            if let Some(Value::String(current)) = obj.get_mut(field) {
                if let Some(replacement) = table.get(current.as_str()) {
                    logd!("Substituted {field}: {current:?} → {replacement:?}");
                    *current = replacement.clone();
                    changed += 1;
                }
            }
        }
    }
    changed
}
