// src/store.rs
//! The catalog document (`card_data.json`): the only persisted state.
//!
//! Written whole on every run. The byte layout matches what the site has been
//! served all along (4-space indent, `": "` key separator, non-ASCII escaped
//! as `\uXXXX`, no trailing newline) so a rebuild only diffs real changes.

use std::{fs, io::{self, Write}, path::Path};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

use crate::card::CardRecord;
use crate::config::consts::CATALOG_INDENT;
use crate::error::{Error, Result};
use crate::file::ensure_parent;

pub fn load_catalog(path: &Path) -> Result<Vec<CardRecord>> {
    let text = fs::read_to_string(path)?;
    let records: Vec<CardRecord> = serde_json::from_str(&text)
        .map_err(|source| Error::CatalogFormat { path: path.to_path_buf(), source })?;
    logd!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// The document as untyped JSON, for passes that run before decoding.
pub fn load_document(path: &Path) -> Result<Vec<Value>> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|source| Error::CatalogFormat { path: path.to_path_buf(), source })
}

pub fn decode_records(docs: Vec<Value>, path: &Path) -> Result<Vec<CardRecord>> {
    docs.into_iter()
        .map(|doc| {
            serde_json::from_value(doc)
                .map_err(|source| Error::CatalogFormat { path: path.to_path_buf(), source })
        })
        .collect()
}

/// Replace the document at `path` with `records`, in the order given.
pub fn save_catalog(path: &Path, records: &[CardRecord]) -> Result<()> {
    let bytes = to_catalog_bytes(records)
        .map_err(|source| Error::CatalogFormat { path: path.to_path_buf(), source })?;
    ensure_parent(path)?;
    fs::write(path, bytes)?;
    logf!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

pub fn to_catalog_bytes<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, AsciiPretty::new());
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Pretty printer that escapes everything outside printable ASCII.
struct AsciiPretty<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> AsciiPretty<'a> {
    fn new() -> Self {
        Self { inner: PrettyFormatter::with_indent(CATALOG_INDENT) }
    }
}

impl Formatter for AsciiPretty<'_> {
    fn write_string_fragment<W: ?Sized + io::Write>(&mut self, w: &mut W, fragment: &str) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            w.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(w, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        w.write_all(&fragment.as_bytes()[start..])
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.inner.begin_array(w)
    }
    fn end_array<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.inner.end_array(w)
    }
    fn begin_array_value<W: ?Sized + io::Write>(&mut self, w: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_array_value(w, first)
    }
    fn end_array_value<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.inner.end_array_value(w)
    }
    fn begin_object<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.inner.begin_object(w)
    }
    fn end_object<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.inner.end_object(w)
    }
    fn begin_object_key<W: ?Sized + io::Write>(&mut self, w: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_object_key(w, first)
    }
    fn begin_object_value<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(w)
    }
    fn end_object_value<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.inner.end_object_value(w)
    }
}
