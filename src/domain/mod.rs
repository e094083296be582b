//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep the export record and report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — export record, validation report, output envelope.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.

pub mod models;
