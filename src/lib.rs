//! Leaderboard of wallets ranked by how many distinct offerings one issuer
//! has attested for them on an attestation registry.
//!
//! Data flows strictly forward: registry records -> decoded payload fields ->
//! recipient -> distinct offering set -> ranked rows. See
//! [`services::pipeline::compute_leaderboard`] for the whole run.

pub mod config;
pub mod domain;
pub mod error;
pub mod services;

pub use domain::models::{AttestationRecord, DecodedField, FieldValue, RankingEntry};
pub use error::BoardError;
pub use services::aggregator::{aggregate, OfferingSets, RankingConfig};
pub use services::decoder::decode_payload;
pub use services::pipeline::compute_leaderboard;
pub use services::ranker::rank;
pub use services::registry::{AttestationSource, GraphqlRegistry, RegistryConfig, ResponseFile};
