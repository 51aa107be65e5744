//! Layered heuristic field extractors for the gift domain.

pub mod dates;
pub mod money;
pub mod patterns;

pub use dates::extract_date;
pub use money::{extract_value, ValueOutcome};
