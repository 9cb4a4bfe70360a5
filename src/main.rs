// Entrypoint for the CLI application.
// - Keeps `main` small: load the catalog and hand it to the menu loop.
// - Returns `anyhow::Result` so a load failure prints its error chain
//   and exits non-zero; everything after a successful load exits zero.

use anyhow::Result;
use catalog_cli::{
    menu::{run_menu, TermPrompt},
    model::load_model,
    report::report,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Interactive menu walker over a hierarchical product catalog
#[derive(Parser, Debug)]
#[command(name = "catalog-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON catalog file
    #[arg(default_value = "./data/options.json")]
    catalog: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    // Diagnostics go to stderr so they never mix into the menu output.
    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    println!("START");

    let catalog = load_model(&cli.catalog)?;

    // Blocks until the user quits or reaches a leaf.
    let mut prompt = TermPrompt;
    let selections = run_menu(&catalog, &mut prompt)?;

    if selections.is_empty() {
        println!("No selections made");
        return Ok(());
    }

    report(&selections);

    println!("END");
    Ok(())
}
