//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `payload.rs` — payload sourcing (file input or the built-in sample).
//! - `export.rs` — record construction, serialization, file sink.
//! - `unpack.rs` — materializing a component source back out of an export.
//! - `validate.rs` — shape checks for previously produced exports.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod export;
pub mod output;
pub mod payload;
pub mod unpack;
pub mod validate;
