// src/lib.rs
//! Card catalog pipeline: name list → card lookup → normalize → repair → sort
//! → `card_data.json`, plus artwork download and thumbnails.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod card;
pub mod csv;
pub mod error;
pub mod file;
pub mod images;
pub mod normalize;
pub mod order;
pub mod progress;
pub mod repair;
pub mod runner;
pub mod store;

pub use card::{Ability, CardKind, CardRecord, Category};
pub use error::{Error, Result};
