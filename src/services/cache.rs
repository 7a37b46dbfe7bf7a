use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// `$HOME/.cache/offerboard/responses`, or `None` when `HOME` is unset.
pub fn default_dir() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(
        PathBuf::from(home)
            .join(".cache")
            .join("offerboard")
            .join("responses"),
    )
}

/// One file per (endpoint, schema) pair.
pub fn response_path(dir: &Path, endpoint: &str, schema_id: &str) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(endpoint.trim_end_matches('/').as_bytes());
    hasher.update(b"\n");
    hasher.update(schema_id.to_ascii_lowercase().as_bytes());
    let id = hex::encode(hasher.finalize());
    dir.join(format!("{}.json", id))
}

pub fn store(path: &Path, body: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, body)
}
