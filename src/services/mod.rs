//! Service layer: the leaderboard core plus its side-effect helpers.
//!
//! ## Service map
//! - `registry.rs` — attestation sources (GraphQL endpoint, saved response file).
//! - `decoder.rs` — payload text -> ordered decoded fields.
//! - `aggregator.rs` — issuer filter + per-recipient distinct offering sets.
//! - `ranker.rs` — sets -> ordered, numbered leaderboard rows.
//! - `pipeline.rs` — one fetch/aggregate/rank run.
//! - `cache.rs` — last good registry response on disk.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - `decoder`, `aggregator` and `ranker` are pure; keep network and disk out of them.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod aggregator;
pub mod cache;
pub mod decoder;
pub mod output;
pub mod pipeline;
pub mod ranker;
pub mod registry;
