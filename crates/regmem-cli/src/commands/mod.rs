//! CLI subcommands.

pub mod earnings;
pub mod gifts;

use std::fs::File;
use std::path::Path;

use regmem_core::Register;

/// Load a crawled register corpus from disk.
pub fn load_register(path: &Path) -> anyhow::Result<Register> {
    if !path.exists() {
        anyhow::bail!("corpus file not found: {}", path.display());
    }
    let file = File::open(path)?;
    Ok(Register::from_reader(file)?)
}

/// Render a success rate, showing the degenerate empty-bucket case
/// explicitly instead of a bare NaN.
pub fn format_rate(rate: f64) -> String {
    if rate.is_nan() {
        "undefined (no lines)".to_string()
    } else {
        format!("{rate:.3}")
    }
}
