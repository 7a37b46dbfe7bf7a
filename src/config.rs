use crate::domain::constants::{
    DEFAULT_ENDPOINT, DEFAULT_ISSUER, DEFAULT_SCHEMA_ID, DEFAULT_TIMEOUT_MS, OFFERING_FIELD,
};
use crate::services::aggregator::RankingConfig;
use crate::services::registry::RegistryConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

pub const CONFIG_ENV: &str = "OFFERBOARD_CONFIG";
pub const ENDPOINT_ENV: &str = "OFFERBOARD_ENDPOINT";
pub const SCHEMA_ENV: &str = "OFFERBOARD_SCHEMA_ID";
pub const ISSUER_ENV: &str = "OFFERBOARD_ISSUER";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub registry: RegistrySection,
    pub ranking: RankingSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct RegistrySection {
    pub endpoint: String,
    pub schema_id: String,
    pub timeout_ms: u64,
}

impl Default for RegistrySection {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            schema_id: DEFAULT_SCHEMA_ID.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct RankingSection {
    pub issuer: String,
    pub field: String,
}

impl Default for RankingSection {
    fn default() -> Self {
        Self {
            issuer: DEFAULT_ISSUER.to_string(),
            field: OFFERING_FIELD.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    /// `text` or `json`.
    pub format: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Values given on the command line; they win over file and environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub schema_id: Option<String>,
    pub issuer: Option<String>,
}

impl AppConfig {
    /// Defaults, then the TOML file, then `OFFERBOARD_*` env vars, then `overrides`.
    pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => Self::from_toml(p)?,
            None => Self::default(),
        };
        cfg.apply_env(|k| env::var(k).ok());
        cfg.apply_overrides(overrides);
        cfg.resolve_env_refs()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_toml(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed reading config file: {}", path.display()))?;
        toml::from_str(&raw).context("failed parsing config toml")
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let set = |slot: &mut String, key: &str| {
            if let Some(v) = lookup(key) {
                if !v.trim().is_empty() {
                    *slot = v;
                }
            }
        };
        set(&mut self.registry.endpoint, ENDPOINT_ENV);
        set(&mut self.registry.schema_id, SCHEMA_ENV);
        set(&mut self.ranking.issuer, ISSUER_ENV);
    }

    fn apply_overrides(&mut self, o: &Overrides) {
        if let Some(v) = &o.endpoint {
            self.registry.endpoint = v.clone();
        }
        if let Some(v) = &o.schema_id {
            self.registry.schema_id = v.clone();
        }
        if let Some(v) = &o.issuer {
            self.ranking.issuer = v.clone();
        }
    }

    fn resolve_env_refs(&mut self) -> Result<()> {
        self.registry.endpoint = resolve_env_ref(&self.registry.endpoint)?;
        self.registry.schema_id = resolve_env_ref(&self.registry.schema_id)?;
        self.ranking.issuer = resolve_env_ref(&self.ranking.issuer)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("registry.endpoint", &self.registry.endpoint),
            ("registry.schema_id", &self.registry.schema_id),
            ("ranking.issuer", &self.ranking.issuer),
            ("ranking.field", &self.ranking.field),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(anyhow!("{key} must not be empty"));
            }
        }
        if self.registry.timeout_ms == 0 {
            return Err(anyhow!("registry.timeout_ms must be > 0"));
        }
        Ok(())
    }

    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig {
            endpoint: self.registry.endpoint.trim().to_string(),
            schema_id: self.registry.schema_id.trim().to_string(),
            timeout_ms: self.registry.timeout_ms,
        }
    }

    pub fn ranking_config(&self) -> RankingConfig {
        RankingConfig {
            issuer: self.ranking.issuer.trim().to_string(),
            field: self.ranking.field.clone(),
        }
    }
}

pub fn resolve_env_ref(value: &str) -> Result<String> {
    const PREFIX: &str = "env:";
    if let Some(var) = value.strip_prefix(PREFIX) {
        let var = var.trim();
        if var.is_empty() {
            return Err(anyhow!("invalid env ref: {value}"));
        }
        return env::var(var).with_context(|| format!("missing env var {var} for {value}"));
    }
    Ok(value.to_string())
}
