// src/specs/mod.rs
//! # Upstream source specs
//!
//! Each spec knows **how to read one upstream source** and nothing else:
//! - `names` – the spreadsheet CSV export listing the cards in the set.
//! - `cards` – the card database API (`cardinfo.php`), raw record shape and batching.
//!
//! ## What does **not** live here
//! - Normalization into `CardRecord` (`normalize`), overrides (`repair`),
//!   ordering (`order`) and persistence (`store`).
//! - Deciding *when* to fetch. That is `runner`.
//!
//! ## Typical call chain
//! ```text
//! runner::update → specs::names::fetch_names → specs::cards::lookup_cards
//!                                          ↘ normalize → repair → order → store
//! ```
//!
//! ## Conventions
//! - All network access goes through `core::net::Fetch`, so specs are testable
//!   offline against canned bodies.
//! - Parsing is split from fetching (`parse_*` vs `fetch_*` / `lookup_*`).
pub mod cards;
pub mod names;
