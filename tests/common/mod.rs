// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::{Cursor, Read};
use std::path::PathBuf;

use plunder_cards::core::net::Fetch;
use plunder_cards::{Error, Result};
use serde_json::{Value, json};

pub const NAMES_URL: &str = "http://sheet.test/export?format=csv";
pub const API_URL: &str = "http://cards.test/cardinfo.php";

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("plunder_cards_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Canned upstream. Card lookups answer with every known name in the query,
/// in query order; unknown names are silently absent, like the real API.
#[derive(Default)]
pub struct FakeFetch {
    pub name_csv: String,
    pub cards: HashMap<String, Value>,
    pub images: HashMap<String, Vec<u8>>,
    pub fail_status: Option<u16>,
    pub requests: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl FakeFetch {
    pub fn with_card(mut self, card: Value) -> Self {
        let name = card["name"].as_str().unwrap().to_string();
        self.cards.insert(name, card);
        self
    }

    pub fn lookup_queries(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .filter(|(url, _)| url == API_URL)
            .map(|(_, q)| q.iter().find(|(k, _)| k == "name").unwrap().1.clone())
            .collect()
    }

    fn fail(&self, url: &str) -> Result<()> {
        match self.fail_status {
            Some(status) => Err(Error::UpstreamRequest {
                url: url.to_string(),
                status: Some(status),
                reason: format!("HTTP {status}"),
            }),
            None => Ok(()),
        }
    }
}

impl Fetch for FakeFetch {
    fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        self.requests.borrow_mut().push((
            url.to_string(),
            query.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        ));
        self.fail(url)?;
        match url {
            NAMES_URL => Ok(self.name_csv.clone()),
            API_URL => {
                let names = query.iter().find(|(k, _)| *k == "name").map(|(_, v)| *v).unwrap_or("");
                let data: Vec<Value> = names
                    .split('|')
                    .filter_map(|n| self.cards.get(n).cloned())
                    .collect();
                Ok(json!({ "data": data }).to_string())
            }
            other => Err(Error::UpstreamRequest {
                url: other.to_string(),
                status: Some(404),
                reason: "HTTP 404 Not Found".into(),
            }),
        }
    }

    fn open(&self, url: &str) -> Result<Box<dyn Read>> {
        self.requests.borrow_mut().push((url.to_string(), Vec::new()));
        match self.images.get(url) {
            Some(bytes) => Ok(Box::new(Cursor::new(bytes.clone()))),
            None => Err(Error::UpstreamRequest {
                url: url.to_string(),
                status: Some(404),
                reason: "HTTP 404 Not Found".into(),
            }),
        }
    }
}

pub fn spell(name: &str) -> Value {
    json!({
        "name": name, "type": "Spell Card", "frameType": "spell", "race": "Normal",
        "desc": format!("{name} text"),
        "card_images": [{"image_url": format!("http://img.test/{name}.jpg")}]
    })
}

pub fn monster(name: &str, full_type: &str, typeline: &str, level: i64) -> Value {
    json!({
        "name": name, "type": full_type, "frameType": "effect", "race": "Dragon",
        "desc": "", "typeline": typeline, "attribute": "DARK",
        "atk": 2000, "def": 1500, "level": level,
        "card_images": [{"image_url": format!("http://img.test/{name}.jpg")}]
    })
}
