use crate::cli::Cli;
use anyhow::Context;
use offerboard::config::AppConfig;
use offerboard::services::cache;
use offerboard::{AttestationSource, GraphqlRegistry, ResponseFile};
use tracing::debug;

pub fn attestation_source(cli: &Cli, cfg: &AppConfig) -> anyhow::Result<Box<dyn AttestationSource>> {
    let registry = cfg.registry_config();

    if let Some(path) = &cli.from_file {
        debug!(path = %path.display(), "reading saved registry response");
        return Ok(Box::new(ResponseFile::new(path)));
    }

    let cache_dir = cache::default_dir();
    if cli.offline {
        let dir = cache_dir.context("HOME is not set; no response cache available")?;
        let path = cache::response_path(&dir, &registry.endpoint, &registry.schema_id);
        debug!(path = %path.display(), "reading cached registry response");
        return Ok(Box::new(ResponseFile::new(path)));
    }

    let mut remote = GraphqlRegistry::new(registry.clone())?;
    if let Some(dir) = cache_dir {
        remote = remote.with_cache(cache::response_path(
            &dir,
            &registry.endpoint,
            &registry.schema_id,
        ));
    }
    Ok(Box::new(remote))
}
