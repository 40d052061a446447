//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep request/response payload and report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — coordinate, service payloads, error bodies, JSON envelope.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.

pub mod models;
