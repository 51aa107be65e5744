//! CLI application for Register of Members' Financial Interests extraction.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{earnings, gifts};

/// Extract structured records from a crawled register of interests
#[derive(Parser)]
#[command(name = "regmem")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse employment and earnings entries against the payment grammars
    Earnings(earnings::EarningsArgs),

    /// Extract structured gift and hospitality records
    Gifts(gifts::GiftsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Earnings(args) => earnings::run(args),
        Commands::Gifts(args) => gifts::run(args),
    }
}
