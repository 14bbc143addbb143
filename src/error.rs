// src/error.rs
//! Error taxonomy for the catalog jobs.
//!
//! Nothing is recovered internally: every variant propagates to the binary,
//! which aborts the run with a non-zero exit code.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure or non-success status from any external call.
    #[error("upstream request failed for {url}: {reason}")]
    UpstreamRequest {
        url: String,
        status: Option<u16>,
        reason: String,
    },

    #[error("upstream card record is missing `{field}`{}", card_suffix(.card))]
    MissingRequiredField {
        field: &'static str,
        card: Option<String>,
    },

    #[error("card `{card}` has no images upstream")]
    MissingImage { card: String },

    /// `line` is the 1-based line of the export, blank lines included.
    #[error("name list line {line} has no column {column}")]
    MissingColumn { line: usize, column: usize },

    #[error("could not decode {what}: {source}")]
    Decode {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog document {} is malformed: {source}", .path.display())]
    CatalogFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("override for `{card}` does not fit the card record: {source}")]
    InvalidOverride {
        card: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("image I/O failed for {}: {source}", .path.display())]
    ImageIo {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn card_suffix(card: &Option<String>) -> String {
    match card {
        Some(name) => format!(" (card `{name}`)"),
        None => s!(),
    }
}

impl Error {
    pub(crate) fn image_io(path: impl Into<PathBuf>, source: impl Into<ImageSource>) -> Self {
        Error::ImageIo { path: path.into(), source: source.into().0 }
    }
}

/// Lets `Error::image_io` take either a decoder error or a plain filesystem error.
pub(crate) struct ImageSource(image::ImageError);

impl From<image::ImageError> for ImageSource {
    fn from(e: image::ImageError) -> Self { ImageSource(e) }
}

impl From<std::io::Error> for ImageSource {
    fn from(e: std::io::Error) -> Self { ImageSource(image::ImageError::IoError(e)) }
}

pub type Result<T> = std::result::Result<T, Error>;
