//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `source.rs` — picks the attestation source (endpoint, file or cache).
//! - `runtime.rs` — rank/fetch/decode/config.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `offerboard::services`.
//! - Keep behavior and output schema stable.

pub mod runtime;
pub mod source;

pub use runtime::handle_commands;
