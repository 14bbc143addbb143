// src/images.rs
//! Card artwork: download each record's image, then derive a thumbnail.
//!
//! Layout (defaults):
//! ```text
//! card_images/<stem>.jpg        full size, re-encoded as JPEG
//! card_images/small/<stem>.jpg  fits inside 150×219, aspect preserved
//! ```
//! `<stem>` comes from `core::sanitize::image_file_stem`; the site derives
//! the same stem from the card name when it links images.
//!
//! Strictly one card at a time. The first failure stops the pass and files
//! already written stay where they are.

use std::{fs, io::Read, path::Path};

use image::{DynamicImage, ImageFormat, ImageReader};

use crate::card::CardRecord;
use crate::config::options::ImageOptions;
use crate::core::net::Fetch;
use crate::core::sanitize::image_file_stem;
use crate::error::{Error, Result};
use crate::file::{ensure_directory, ensure_parent};
use crate::progress::Progress;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArtworkSummary {
    pub images: usize,
    pub bytes: u64,
}

pub fn download_all(
    fetch: &dyn Fetch,
    records: &[CardRecord],
    opts: &ImageOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<ArtworkSummary> {
    ensure_directory(opts.dir())?;
    ensure_directory(opts.thumb_dir())?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(records.len());
    }

    let mut summary = ArtworkSummary::default();
    for (i, record) in records.iter().enumerate() {
        let stem = image_file_stem(&record.name);
        let full = opts.full_path(&stem);
        let thumb = opts.thumb_path(&stem);

        let bytes = fetch_image(fetch, &record.image_url, &full)?;
        let (w, h) = write_thumbnail(&full, &thumb, opts.thumbnail_box)?;
        logd!("Artwork {}: {} bytes, thumbnail {}x{}", record.name, bytes, w, h);

        summary.images += 1;
        summary.bytes += bytes;
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i, &record.name);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("Artwork: {} images, {} bytes", summary.images, summary.bytes);
    Ok(summary)
}

/// Download the body at `url` into `path`, replacing whatever was there.
/// A body cut off mid-transfer is an upstream failure and leaves `path` untouched.
pub fn fetch_image(fetch: &dyn Fetch, url: &str, path: &Path) -> Result<u64> {
    let mut body = Vec::new();
    fetch.open(url)?
        .read_to_end(&mut body)
        .map_err(|e| Error::UpstreamRequest { url: s!(url), status: None, reason: e.to_string() })?;

    ensure_parent(path)?;
    fs::write(path, &body).map_err(|e| Error::image_io(path, e))?;
    Ok(body.len() as u64)
}

/// Decode `full`, re-save it as JPEG in place, and write a copy bounded by
/// `bounds` to `thumb`. Images already inside the box are not enlarged.
/// Returns the thumbnail dimensions.
pub fn write_thumbnail(full: &Path, thumb: &Path, bounds: (u32, u32)) -> Result<(u32, u32)> {
    let decoded = ImageReader::open(full)
        .map_err(|e| Error::image_io(full, e))?
        .with_guessed_format()
        .map_err(|e| Error::image_io(full, e))?
        .decode()
        .map_err(|e| Error::image_io(full, e))?;

    // JPEG has no alpha channel
    let rgb = DynamicImage::ImageRgb8(decoded.to_rgb8());
    rgb.save_with_format(full, ImageFormat::Jpeg)
        .map_err(|e| Error::image_io(full, e))?;

    let small = fit_within(&rgb, bounds);
    ensure_parent(thumb)?;
    small.save_with_format(thumb, ImageFormat::Jpeg)
        .map_err(|e| Error::image_io(thumb, e))?;
    Ok((small.width(), small.height()))
}

fn fit_within(img: &DynamicImage, (max_w, max_h): (u32, u32)) -> DynamicImage {
    if img.width() <= max_w && img.height() <= max_h {
        img.clone()
    } else {
        img.thumbnail(max_w, max_h)
    }
}
