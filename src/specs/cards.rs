// src/specs/cards.rs
//! Card database API (`cardinfo.php`).
//!
//! Purpose:
//! - Ask for up to `batch_size` cards per request: `?name=A|B|C`.
//! - Decode the `{"data": [...]}` envelope into loosely-typed `RawCardRecord`s.
//!
//! Non-Responsibilities:
//! - No shaping into `CardRecord` (see `normalize`).
//! - No retries. Any non-success status aborts the whole lookup.
//! - No reordering or de-duplication across batches.

use serde::Deserialize;

use crate::config::consts::LOOKUP_NAME_SEP;
use crate::config::options::LookupOptions;
use crate::core::net::Fetch;
use crate::error::{Error, Result};
use crate::progress::Progress;

/// One card as the API returns it. Every field is optional here; the
/// normalizer decides which absences are fatal.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawCardRecord {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub full_type: Option<String>,
    pub race: Option<String>,
    pub desc: Option<String>,
    pub typeline: Option<Typeline>,
    pub attribute: Option<String>,
    pub atk: Option<i64>,
    pub def: Option<i64>,
    pub level: Option<i64>,
    pub linkval: Option<i64>,
    #[serde(rename = "frameType")]
    pub frame_type: Option<String>,
    pub archetype: Option<String>,
    pub card_images: Option<Vec<RawImage>>,
}

/// The API has served the typeline both as free text and as a token list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Typeline {
    Text(String),
    Tokens(Vec<String>),
}

impl Typeline {
    /// Text to run the keyword scan over.
    pub fn text(&self) -> String {
        match self {
            Typeline::Text(s) => s.clone(),
            Typeline::Tokens(tokens) => tokens.join(" / "),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawImage {
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
struct CardInfoResponse {
    data: Vec<RawCardRecord>,
}

/// Names grouped into `batch_size` chunks, each joined with `|`.
pub fn chunk_queries(names: &[String], batch_size: usize) -> Vec<String> {
    let sep = LOOKUP_NAME_SEP.to_string();
    names
        .chunks(batch_size.max(1))
        .map(|chunk| chunk.join(&sep))
        .collect()
}

pub fn parse_response(body: &str, query: &str) -> Result<Vec<RawCardRecord>> {
    serde_json::from_str::<CardInfoResponse>(body)
        .map(|r| r.data)
        .map_err(|source| Error::Decode {
            what: format!("card lookup response for `{}`", clip(query, 80)),
            source,
        })
}

/// One request per chunk, results concatenated in request order.
pub fn lookup_cards(
    fetch: &dyn Fetch,
    names: &[String],
    opts: &LookupOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<RawCardRecord>> {
    let queries = chunk_queries(names, opts.batch_size);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(queries.len());
    }

    let mut out = Vec::with_capacity(names.len());
    for (i, query) in queries.iter().enumerate() {
        let body = fetch.get_text(&opts.api_url, &[("name", query.as_str())])?;
        let batch = parse_response(&body, query)?;
        logd!("Lookup batch {}/{}: {} cards", i + 1, queries.len(), batch.len());
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i, &format!("batch {} ({} cards)", i + 1, batch.len()));
        }
        out.extend(batch);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("Lookup: {} names in {} requests → {} cards", names.len(), queries.len(), out.len());
    Ok(out)
}

fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max { return s!(s); }
    let head: String = s.chars().take(max).collect();
    join!(&head, "…")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Card {i}")).collect()
    }

    #[test]
    fn chunks_of_100_and_remainder() {
        let q = chunk_queries(&names(137), 100);
        assert_eq!(q.len(), 2);
        assert_eq!(q[0].split('|').count(), 100);
        assert_eq!(q[1].split('|').count(), 37);
        assert!(q[1].starts_with("Card 100|Card 101"));
        assert!(chunk_queries(&[], 100).is_empty());
    }

    #[test]
    fn response_envelope_is_required() {
        let ok = parse_response(r#"{"data":[{"name":"A","type":"Spell Card"}]}"#, "A").unwrap();
        assert_eq!(ok.len(), 1);
        assert_eq!(ok[0].full_type.as_deref(), Some("Spell Card"));

        let err = parse_response(r#"{"error":"No card matching your query was found"}"#, "Nope").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn typeline_text_from_either_shape() {
        let text: Typeline = serde_json::from_str(r#""Spellcaster / Effect""#).unwrap();
        let list: Typeline = serde_json::from_str(r#"["Spellcaster","Effect"]"#).unwrap();
        assert_eq!(text.text(), "Spellcaster / Effect");
        assert_eq!(list.text(), "Spellcaster / Effect");
    }

    #[test]
    fn nulls_and_unknown_fields_are_tolerated() {
        let raw: RawCardRecord = serde_json::from_str(
            r#"{"name":"A","type":"Link Monster","def":null,"linkval":2,"ygoprodeck_url":"x","card_sets":[]}"#,
        ).unwrap();
        assert_eq!(raw.def, None);
        assert_eq!(raw.linkval, Some(2));
    }
}
