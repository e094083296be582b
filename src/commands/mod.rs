//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `export.rs` — the export pipeline (build record, print, write file).
//! - `unpack.rs` — restoring a component source from an export file.
//! - `validate.rs` — export file shape checking.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod export;
pub mod unpack;
pub mod validate;

pub use export::handle_export;
pub use unpack::handle_unpack;
pub use validate::handle_validate;
