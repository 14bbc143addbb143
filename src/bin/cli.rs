// src/bin/cli.rs
use clap::Parser;
use plunder_cards::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Cli::parse();
    log::init(args.verbose);

    // color-eyre prints the report
    cli::run(args)?;
    Ok(())
}
