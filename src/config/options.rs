// src/config/options.rs
use std::path::{Path, PathBuf};
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub names: NameListOptions,
    pub lookup: LookupOptions,
    pub catalog: CatalogOptions,
    pub repair: RepairOptions,
    pub images: ImageOptions,
}

/// Where the card name list comes from and how to read it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameListOptions {
    pub url: String,
    pub column: usize,
    /// Leading rows to drop before reading names. The export is read raw by default.
    pub skip_rows: usize,
}

impl Default for NameListOptions {
    fn default() -> Self {
        Self {
            url: s!(NAME_LIST_URL),
            column: NAME_COLUMN,
            skip_rows: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupOptions {
    pub api_url: String,
    pub batch_size: usize,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            api_url: s!(CARD_API_URL),
            batch_size: LOOKUP_BATCH_SIZE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogOptions {
    pub path: PathBuf,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self { path: PathBuf::from(CATALOG_FILE) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RepairOptions {
    /// External override document; the embedded table is used when `None`.
    pub overrides_path: Option<PathBuf>,
    /// Run the field value-substitution table over the document before decoding.
    pub substitute_values: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageOptions {
    dir: PathBuf,
    thumb_dir: PathBuf,
    pub ext: String,
    pub thumbnail_box: (u32, u32),
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(IMAGE_DIR),
            thumb_dir: PathBuf::from(IMAGE_DIR).join(THUMB_SUBDIR),
            ext: s!(IMAGE_EXT),
            thumbnail_box: THUMBNAIL_BOX,
        }
    }
}

impl ImageOptions {
    pub fn dir(&self) -> &Path { &self.dir }
    pub fn thumb_dir(&self) -> &Path { &self.thumb_dir }

    /// Moving the image dir moves the thumbnails with it, unless they were placed explicitly.
    pub fn set_dir(&mut self, dir: impl Into<PathBuf>) {
        let dir = dir.into();
        if self.thumb_dir == self.dir.join(THUMB_SUBDIR) {
            self.thumb_dir = dir.join(THUMB_SUBDIR);
        }
        self.dir = dir;
    }

    pub fn set_thumb_dir(&mut self, dir: impl Into<PathBuf>) {
        self.thumb_dir = dir.into();
    }

    /// `<dir>/<stem>.<ext>`
    pub fn full_path(&self, stem: &str) -> PathBuf {
        self.dir.join(join!(stem, ".", &self.ext))
    }

    /// `<thumb_dir>/<stem>.<ext>`
    pub fn thumb_path(&self, stem: &str) -> PathBuf {
        self.thumb_dir.join(join!(stem, ".", &self.ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumb_dir_follows_image_dir_by_default() {
        let mut opts = ImageOptions::default();
        opts.set_dir("out/art");
        assert_eq!(opts.thumb_dir(), Path::new("out/art").join("small"));
        assert_eq!(opts.full_path("Dark Magician"), Path::new("out/art").join("Dark Magician.jpg"));
    }

    #[test]
    fn explicit_thumb_dir_is_kept() {
        let mut opts = ImageOptions::default();
        opts.set_thumb_dir("thumbs");
        opts.set_dir("art");
        assert_eq!(opts.thumb_path("X"), Path::new("thumbs").join("X.jpg"));
    }
}
