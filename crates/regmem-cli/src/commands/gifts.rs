//! Gifts command - structured record extraction with JSON export.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use regmem_core::gifts;
use regmem_core::{GiftParser, OverrideTable};

use super::load_register;

/// Arguments for the gifts command.
#[derive(Args)]
pub struct GiftsArgs {
    /// Crawled corpus file (JSON)
    #[arg(required = true)]
    corpus: PathBuf,

    /// Output file for extracted records (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override table file (default: the table shipped with the crate)
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// File for unparsed entries needing curation
    #[arg(short, long)]
    unparsed: Option<PathBuf>,
}

pub fn run(args: GiftsArgs) -> anyhow::Result<()> {
    let register = load_register(&args.corpus)?;
    info!(members = register.members.len(), "corpus loaded");

    let parser = match &args.overrides {
        Some(path) => GiftParser::with_overrides(OverrideTable::from_path(path)?),
        None => GiftParser::new()?,
    };

    let report = gifts::run(&register, &parser);

    println!(
        "{} entries: {} records, {} non-monetary, {} unparsed, {} with unresolved values",
        report.total(),
        report.gifts.len(),
        report.non_monetary.len(),
        report.unparsed.len(),
        report.value_failures.len(),
    );

    let json = serde_json::to_string_pretty(&report.gifts)?;
    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            println!("{} {}", style("records written to").dim(), path.display());
        }
        None => println!("{json}"),
    }

    if let Some(path) = &args.unparsed {
        fs::write(path, report.unparsed.join("\n"))?;
        println!(
            "{} {}",
            style("unparsed entries written to").dim(),
            path.display()
        );
    }

    Ok(())
}
