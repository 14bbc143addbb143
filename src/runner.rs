// src/runner.rs
//! The three batch jobs. Each runs start to finish or stops at the first error;
//! nothing already written is rolled back.

use crate::{
    card::CardRecord,
    config::options::AppOptions,
    core::net::Fetch,
    error::Result,
    images::{self, ArtworkSummary},
    normalize::{normalize_all, KeywordTables},
    order::sort_catalog,
    progress::Progress,
    repair::{apply_overrides, substitute_values, Overrides},
    specs::{cards, cards::RawCardRecord, names},
    store,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub names: usize,
    pub records: usize,
    pub overridden: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepairSummary {
    pub records: usize,
    pub substituted: usize,
    pub overridden: usize,
}

/// Rebuild the catalog from scratch: names → lookup → normalize → repair → sort → save.
pub fn update(
    fetch: &dyn Fetch,
    opts: &AppOptions,
    overrides: &Overrides,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<UpdateSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching name list…");
    }
    let names = names::fetch_names(fetch, &opts.names)?;

    if let Some(p) = progress.as_deref_mut() {
        p.log("Looking up cards…");
    }
    let raws = cards::lookup_cards(fetch, &names, &opts.lookup, progress.as_deref_mut())?;

    let (records, overridden) = build_catalog(&raws, &KeywordTables::default(), overrides)?;
    store::save_catalog(&opts.catalog.path, &records)?;

    Ok(UpdateSummary { names: names.len(), records: records.len(), overridden })
}

/// The offline half of `update`, split out so it can run without a network.
pub fn build_catalog(
    raws: &[RawCardRecord],
    tables: &KeywordTables,
    overrides: &Overrides,
) -> Result<(Vec<CardRecord>, usize)> {
    let mut records = normalize_all(raws, tables)?;
    let overridden = apply_overrides(&mut records, overrides)?;
    sort_catalog(&mut records);
    Ok((records, overridden))
}

/// Re-apply overrides (and optionally value substitutions) to the saved catalog.
pub fn repair(opts: &AppOptions, overrides: &Overrides) -> Result<RepairSummary> {
    let path = &opts.catalog.path;

    let (mut records, substituted) = if opts.repair.substitute_values {
        let mut docs = store::load_document(path)?;
        let n = substitute_values(&mut docs, &overrides.substitutions);
        (store::decode_records(docs, path)?, n)
    } else {
        (store::load_catalog(path)?, 0)
    };

    let overridden = apply_overrides(&mut records, overrides)?;
    sort_catalog(&mut records);
    store::save_catalog(path, &records)?;

    Ok(RepairSummary { records: records.len(), substituted, overridden })
}

/// Download artwork and thumbnails for every record in the saved catalog.
pub fn images(
    fetch: &dyn Fetch,
    opts: &AppOptions,
    progress: Option<&mut (dyn Progress + '_)>,
) -> Result<ArtworkSummary> {
    let records = store::load_catalog(&opts.catalog.path)?;
    images::download_all(fetch, &records, &opts.images, progress)
}
