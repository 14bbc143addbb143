// src/csv.rs
//! Spreadsheet CSV export reader. Quotes and CRLF are handled; blank lines
//! are skipped but still counted, so every row knows the line it started on.

use std::mem::{replace, take};

/// One non-blank record of the export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetRow {
    /// 1-based line the record starts on.
    pub line: usize,
    pub cells: Vec<String>,
}

impl SheetRow {
    fn starting_at(line: usize) -> Self {
        Self { line, cells: Vec::new() }
    }

    fn is_blank(&self) -> bool {
        matches!(self.cells.as_slice(), [] | [_]) && self.cells.iter().all(String::is_empty)
    }
}

pub fn sheet_rows(text: &str, sep: char) -> Vec<SheetRow> {
    let mut rows = Vec::new();
    let mut line = 1;
    let mut current = SheetRow::starting_at(line);
    let mut cell = s!();
    let mut quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if quoted {
            match ch {
                '"' => {
                    if chars.next_if_eq(&'"').is_some() {
                        cell.push('"');
                    } else {
                        quoted = false;
                    }
                }
                '\n' => {
                    line += 1;
                    cell.push(ch);
                }
                _ => cell.push(ch),
            }
            continue;
        }

        match ch {
            '"' => quoted = true,
            '\r' | '\n' => {
                if ch == '\r' {
                    chars.next_if_eq(&'\n');
                }
                line += 1;
                current.cells.push(take(&mut cell));
                let finished = replace(&mut current, SheetRow::starting_at(line));
                if !finished.is_blank() {
                    rows.push(finished);
                }
            }
            c if c == sep => current.cells.push(take(&mut cell)),
            c => cell.push(c),
        }
    }

    // last record without a trailing newline (or with an unterminated quote)
    if !cell.is_empty() || !current.cells.is_empty() {
        current.cells.push(cell);
        rows.push(current);
    }
    rows
}
