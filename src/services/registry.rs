use crate::domain::constants::{DEFAULT_ENDPOINT, DEFAULT_SCHEMA_ID, DEFAULT_TIMEOUT_MS};
use crate::domain::models::AttestationRecord;
use crate::error::BoardError;
use crate::services::cache;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

const ATTESTATIONS_QUERY: &str = r#"query Attestations($id: String!) {
  schema(where: { id: $id }) {
    attestations {
      attester
      recipient
      decodedDataJson
    }
  }
}"#;

/// Anything that can hand the core a list of raw attestations.
pub trait AttestationSource {
    fn fetch(&self) -> Result<Vec<AttestationRecord>, BoardError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub endpoint: String,
    pub schema_id: String,
    pub timeout_ms: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            schema_id: DEFAULT_SCHEMA_ID.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Queries the registry's GraphQL endpoint for every attestation of one schema.
pub struct GraphqlRegistry {
    cfg: RegistryConfig,
    client: reqwest::blocking::Client,
    cache: Option<PathBuf>,
}

impl GraphqlRegistry {
    pub fn new(cfg: RegistryConfig) -> Result<Self, BoardError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .user_agent(concat!("offerboard/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            cfg,
            client,
            cache: None,
        })
    }

    /// Also keep the last good response body at `path`.
    pub fn with_cache(mut self, path: PathBuf) -> Self {
        self.cache = Some(path);
        self
    }

    fn fetch_body(&self) -> Result<String, BoardError> {
        let request = serde_json::json!({
            "query": ATTESTATIONS_QUERY,
            "variables": { "id": self.cfg.schema_id },
        });
        let resp = self
            .client
            .post(&self.cfg.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&request)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BoardError::Fetch(format!(
                "{} returned HTTP status {}",
                self.cfg.endpoint, status
            )));
        }
        Ok(resp.text()?)
    }
}

impl AttestationSource for GraphqlRegistry {
    fn fetch(&self) -> Result<Vec<AttestationRecord>, BoardError> {
        let body = self.fetch_body()?;
        let records = parse_response(&body)?;
        info!(
            endpoint = %self.cfg.endpoint,
            schema = %self.cfg.schema_id,
            count = records.len(),
            "fetched attestations"
        );

        if let Some(path) = &self.cache {
            if let Err(e) = cache::store(path, &body) {
                warn!(path = %path.display(), error = %e, "could not cache registry response");
            }
        }
        Ok(records)
    }
}

/// A registry response saved on disk, e.g. by an earlier online run.
pub struct ResponseFile {
    path: PathBuf,
}

impl ResponseFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AttestationSource for ResponseFile {
    fn fetch(&self) -> Result<Vec<AttestationRecord>, BoardError> {
        let body = std::fs::read_to_string(&self.path).map_err(|e| {
            BoardError::Fetch(format!("reading {}: {}", self.path.display(), e))
        })?;
        let records = parse_response(&body)?;
        info!(path = %self.path.display(), count = records.len(), "loaded attestations");
        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<EnvelopeData>,
    #[serde(default)]
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeData {
    schema: Option<SchemaNode>,
}

#[derive(Debug, Deserialize)]
struct SchemaNode {
    attestations: Option<Vec<AttestationRecord>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    #[serde(default)]
    message: String,
}

/// Unwraps `data.schema.attestations` from a GraphQL response body.
pub fn parse_response(body: &str) -> Result<Vec<AttestationRecord>, BoardError> {
    let envelope: Envelope = serde_json::from_str(body)
        .map_err(|e| BoardError::ResponseSchema(format!("invalid response body: {}", e)))?;

    let errors: Vec<String> = envelope
        .errors
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.message)
        .collect();
    let missing = |what: &str| {
        if errors.is_empty() {
            BoardError::ResponseSchema(format!("missing `{}`", what))
        } else {
            BoardError::ResponseSchema(format!("missing `{}` ({})", what, errors.join("; ")))
        }
    };

    let data = envelope.data.ok_or_else(|| missing("data"))?;
    let schema = data.schema.ok_or_else(|| missing("data.schema"))?;
    let attestations = schema
        .attestations
        .ok_or_else(|| missing("data.schema.attestations"))?;

    if !errors.is_empty() {
        warn!(errors = %errors.join("; "), "registry returned data with errors");
    }
    Ok(attestations)
}
