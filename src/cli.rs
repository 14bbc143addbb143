// src/cli.rs
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::options::AppOptions;
use crate::core::net::HttpClient;
use crate::progress::Progress;
use crate::repair::Overrides;
use crate::runner;

/// Build and maintain the card catalog (`card_data.json`) and its artwork.
#[derive(Debug, Parser)]
#[command(name = "plunder_cards", version, about)]
pub struct Cli {
    /// More log output (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Catalog document to write or read.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Override table to use instead of the built-in one.
    #[arg(long, global = true)]
    pub overrides: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rebuild the catalog from the name list and the card database.
    Update(UpdateArgs),
    /// Re-apply overrides to the saved catalog and re-sort it.
    Repair(RepairArgs),
    /// Download artwork and thumbnails for every card in the catalog.
    Images(ImagesArgs),
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Spreadsheet CSV export holding the card names.
    #[arg(long)]
    pub names_url: Option<String>,
    /// Card database endpoint.
    #[arg(long)]
    pub api_url: Option<String>,
    /// Names per lookup request.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub batch_size: Option<u64>,
    /// Leading rows of the name list to ignore.
    #[arg(long)]
    pub skip_rows: Option<usize>,
}

#[derive(Debug, Args)]
pub struct RepairArgs {
    /// Also run the field value-substitution table before decoding.
    #[arg(long)]
    pub substitute: bool,
}

#[derive(Debug, Args)]
pub struct ImagesArgs {
    /// Directory for full-size images.
    #[arg(long)]
    pub dir: Option<PathBuf>,
    /// Directory for thumbnails (defaults to `<dir>/small`).
    #[arg(long)]
    pub thumb_dir: Option<PathBuf>,
}

impl Cli {
    /// Defaults, with whatever the command line says layered on top.
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        if let Some(path) = &self.catalog {
            opts.catalog.path = path.clone();
        }
        opts.repair.overrides_path = self.overrides.clone();

        match &self.command {
            Command::Update(a) => {
                if let Some(url) = &a.names_url { opts.names.url = url.clone(); }
                if let Some(url) = &a.api_url { opts.lookup.api_url = url.clone(); }
                if let Some(n) = a.batch_size { opts.lookup.batch_size = n as usize; }
                if let Some(n) = a.skip_rows { opts.names.skip_rows = n; }
            }
            Command::Repair(a) => opts.repair.substitute_values = a.substitute,
            Command::Images(a) => {
                if let Some(dir) = &a.dir { opts.images.set_dir(dir); }
                if let Some(dir) = &a.thumb_dir { opts.images.set_thumb_dir(dir); }
            }
        }
        opts
    }
}

/// Prints progress lines to stderr.
#[derive(Default)]
struct ConsoleProgress {
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, index: usize, label: &str) {
        eprintln!("[{}/{}] {}", index + 1, self.total, label);
    }
}

pub fn run(cli: Cli) -> crate::Result<()> {
    let opts = cli.options();
    let mut progress = ConsoleProgress::default();

    match cli.command {
        Command::Update(_) => {
            let overrides = Overrides::from_options(&opts.repair)?;
            let fetch = HttpClient::new()?;
            let s = runner::update(&fetch, &opts, &overrides, Some(&mut progress))?;
            println!(
                "Wrote {} cards for {} names to {} ({} overridden)",
                s.records, s.names, opts.catalog.path.display(), s.overridden
            );
        }
        Command::Repair(_) => {
            let overrides = Overrides::from_options(&opts.repair)?;
            let s = runner::repair(&opts, &overrides)?;
            println!(
                "Repaired {}: {} cards, {} overridden, {} values substituted",
                opts.catalog.path.display(), s.records, s.overridden, s.substituted
            );
        }
        Command::Images(_) => {
            let fetch = HttpClient::new()?;
            let s = runner::images(&fetch, &opts, Some(&mut progress))?;
            println!("Wrote {} images under {}", s.images, opts.images.dir().display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn flags_layer_over_defaults() {
        let cli = Cli::parse_from([
            "plunder_cards", "--catalog", "site/card_data.json",
            "update", "--batch-size", "50", "--skip-rows", "1",
        ]);
        let opts = cli.options();
        assert_eq!(opts.catalog.path, Path::new("site/card_data.json"));
        assert_eq!(opts.lookup.batch_size, 50);
        assert_eq!(opts.names.skip_rows, 1);
        assert_eq!(opts.lookup.api_url, AppOptions::default().lookup.api_url);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["plunder_cards", "repair", "--substitute", "-vv", "--overrides", "o.json"]);
        assert_eq!(cli.verbose, 2);
        let opts = cli.options();
        assert!(opts.repair.substitute_values);
        assert_eq!(opts.repair.overrides_path.as_deref(), Some(Path::new("o.json")));
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        assert!(Cli::try_parse_from(["plunder_cards", "update", "--batch-size", "0"]).is_err());
    }

    #[test]
    fn failures_are_returned_to_the_caller() {
        let missing = std::env::temp_dir().join("plunder_cards_cli_missing").join("card_data.json");
        let cli = Cli::parse_from(["plunder_cards", "--catalog", missing.to_str().unwrap(), "repair"]);
        assert!(matches!(run(cli), Err(crate::Error::Io(_))));
    }

    #[test]
    fn images_dir_moves_thumbnails() {
        let cli = Cli::parse_from(["plunder_cards", "images", "--dir", "art"]);
        let opts = cli.options();
        assert_eq!(opts.images.thumb_dir(), Path::new("art").join("small"));
    }
}
