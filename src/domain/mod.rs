//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep record/field/ranking structs in one place.
//! - Avoid cyclic imports between the fetcher and the core services.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — attestation records, decoded fields, ranking rows, output envelope.
//! - `constants.rs` — default registry endpoint, schema id, issuer and field name.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! `RankingEntry` is the `--json` contract of `offerboard rank`; renaming a
//! field is a breaking change for whatever renders the leaderboard.

pub mod constants;
pub mod models;
