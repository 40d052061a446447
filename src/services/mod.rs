//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `validate.rs` — coordinate text parsing and range checks.
//! - `classify.rs` — total classification-to-presentation lookup tables.
//! - `report.rs` — report state machine (pure transitions + effect list).
//! - `adapters.rs` — map widget adapter.
//! - `config.rs` — optional endpoint config file.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod adapters;
pub mod classify;
pub mod config;
pub mod output;
pub mod report;
pub mod validate;
