// src/specs/names.rs
//! Card name list from the spreadsheet export.
//!
//! One name per row, taken from a fixed column. Rows are read as-is: no header
//! detection and no de-duplication (duplicates are reported, then looked up twice).

use std::collections::HashMap;

use crate::config::consts::NAME_LIST_SEP;
use crate::config::options::NameListOptions;
use crate::core::net::Fetch;
use crate::csv::{SheetRow, sheet_rows};
use crate::error::{Error, Result};

pub fn fetch_names(fetch: &dyn Fetch, opts: &NameListOptions) -> Result<Vec<String>> {
    let text = fetch.get_text(&opts.url, &[])?;
    let names = parse_names(&text, opts)?;
    logf!("Name list: {} names from {}", names.len(), opts.url);

    let dupes = duplicate_names(&names);
    if !dupes.is_empty() {
        logw!("Name list has {} duplicated names (kept as-is): {}", dupes.len(), dupes.join(", "));
    }
    Ok(names)
}

pub fn parse_names(text: &str, opts: &NameListOptions) -> Result<Vec<String>> {
    sheet_rows(text, NAME_LIST_SEP)
        .into_iter()
        .skip(opts.skip_rows)
        .map(|SheetRow { line, mut cells }| {
            if opts.column < cells.len() {
                Ok(cells.swap_remove(opts.column))
            } else {
                Err(Error::MissingColumn { line, column: opts.column })
            }
        })
        .collect()
}

/// Names that appear more than once, in first-seen order.
pub fn duplicate_names(names: &[String]) -> Vec<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut out = Vec::new();
    for name in names {
        let n = counts.entry(name.as_str()).or_insert(0);
        *n += 1;
        if *n == 2 { out.push(name.as_str()); }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> NameListOptions {
        NameListOptions { url: s!("http://sheet"), ..NameListOptions::default() }
    }

    #[test]
    fn takes_second_column_including_first_row() {
        let text = "Qty,Name,Rarity\n3,Dark Magician,UR\n1,\"Armed Dragon, Thunder LV10\",SR\n";
        let names = parse_names(text, &opts()).unwrap();
        assert_eq!(names, vec!["Name", "Dark Magician", "Armed Dragon, Thunder LV10"]);
    }

    #[test]
    fn skip_rows_drops_leading_rows() {
        let mut o = opts();
        o.skip_rows = 1;
        let names = parse_names("Qty,Name\n1,Pot of Greed\n", &o).unwrap();
        assert_eq!(names, vec!["Pot of Greed"]);
    }

    #[test]
    fn short_row_is_an_error() {
        let err = parse_names("1,Pot of Greed\nlonely\n", &opts()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { line: 2, column: 1 }));
    }

    #[test]
    fn short_row_reports_its_line_in_the_export() {
        let err = parse_names("1,A\n\n\n2,B\nlonely\n", &opts()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { line: 5, column: 1 }));
        assert_eq!(err.to_string(), "name list line 5 has no column 1");
    }

    #[test]
    fn duplicates_reported_once_in_order() {
        let names: Vec<String> = ["A", "B", "A", "C", "B", "A"].iter().map(|s| s!(*s)).collect();
        assert_eq!(duplicate_names(&names), vec!["A", "B"]);
    }
}
