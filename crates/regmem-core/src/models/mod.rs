//! Data models for the register corpus and extracted records.

pub mod gift;
pub mod register;

pub use gift::{DateValue, Gift};
pub use register::{Entry, MemberInterests, Register, Section};
