//! Earnings command - grammar dispatch with success-rate accounting.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use regmem_core::earnings;
use regmem_core::Category;

use super::{format_rate, load_register};

/// Arguments for the earnings command.
#[derive(Args)]
pub struct EarningsArgs {
    /// Crawled corpus file (JSON)
    #[arg(required = true)]
    corpus: PathBuf,

    /// Directory for per-category failure exports
    #[arg(short, long, default_value = "failures")]
    failures_dir: PathBuf,

    /// Skip writing failure exports
    #[arg(long)]
    no_export: bool,
}

pub fn run(args: EarningsArgs) -> anyhow::Result<()> {
    let register = load_register(&args.corpus)?;
    info!(members = register.members.len(), "corpus loaded");

    let report = earnings::run(&register);

    for category in Category::ALL {
        let stats = report.stats(category);
        println!(
            "{category}: {} total, {} successful, {} ambiguous, {} failed, success rate {}",
            stats.total,
            stats.success,
            stats.ambiguous,
            stats.failed(),
            format_rate(stats.success_rate()),
        );
    }
    println!(
        "{} total, success rate {}",
        report.total(),
        format_rate(report.success_rate()),
    );
    println!("{} ambiguous parses across all categories", report.ambiguous());

    if !args.no_export {
        fs::create_dir_all(&args.failures_dir)?;
        for category in Category::ALL {
            let path = args.failures_dir.join(format!("{category}.txt"));
            fs::write(&path, report.stats(category).failures.join("\n"))?;
        }
        println!(
            "{} {}",
            style("failure lines exported to").dim(),
            args.failures_dir.display()
        );
    }

    Ok(())
}
