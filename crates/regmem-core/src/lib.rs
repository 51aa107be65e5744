//! Core library for extracting structured records from the Register of
//! Members' Financial Interests.
//!
//! This crate provides:
//! - the corpus model for crawled per-member disclosures
//! - entry preprocessing (registration annotations, late notices)
//! - the earnings pipeline: structural classification and per-category
//!   grammar dispatch with success-rate accounting
//! - the gift pipeline: fixed-schema parsing, layered money and date
//!   extraction heuristics, and a curated exact-text override table

pub mod earnings;
pub mod error;
pub mod gifts;
pub mod models;
pub mod preprocess;

pub use earnings::{Category, CategoryStats, EarningsReport, ParseOutcome};
pub use error::{CorpusError, ExtractionError, RegmemError, ResourceError, Result};
pub use gifts::{GiftParser, GiftReport, OverrideTable};
pub use models::{DateValue, Entry, Gift, MemberInterests, Register, Section};
