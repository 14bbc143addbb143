// src/config/consts.rs

// Upstream
pub const CARD_API_URL: &str = "https://db.ygoprodeck.com/api/v7/cardinfo.php";
pub const NAME_LIST_URL: &str =
    "https://docs.google.com/spreadsheets/d/1jpnQ0VkXkyV4AbT7q5NZYn2zB5_hh9g1MJFrm5jQn8g/export?format=csv";
pub const USER_AGENT: &str = concat!("plunder_cards/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Lookup
pub const LOOKUP_BATCH_SIZE: usize = 100;
pub const LOOKUP_NAME_SEP: char = '|';

// Name list
pub const NAME_COLUMN: usize = 1;
pub const NAME_LIST_SEP: char = ',';

// Catalog
pub const CATALOG_FILE: &str = "card_data.json";
pub const CATALOG_INDENT: &[u8] = b"    ";

// Images
pub const IMAGE_DIR: &str = "card_images";
pub const THUMB_SUBDIR: &str = "small";
pub const IMAGE_EXT: &str = "jpg";
pub const THUMBNAIL_BOX: (u32, u32) = (150, 219);
