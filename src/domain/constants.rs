/// Attestation registry GraphQL endpoint (Base mainnet).
pub const DEFAULT_ENDPOINT: &str = "https://base.easscan.org/graphql";

/// Schema whose attestations carry the `offering` field.
pub const DEFAULT_SCHEMA_ID: &str =
    "0x080a79410f9c625106db1bd1bd2b83cf2b04b42598d3ec338635c4827692f72f";

/// The only attester whose attestations are counted.
pub const DEFAULT_ISSUER: &str = "0xd5064bd244138fa4ff1b9048d165491889af5c15";

pub const OFFERING_FIELD: &str = "offering";

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
