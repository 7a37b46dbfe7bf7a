use clap::Parser;
use offerboard::config::{AppConfig, LoggingSection, Overrides, CONFIG_ENV};
use std::path::PathBuf;
use tracing::error;

mod cli;
mod commands;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = match load_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            init_logging(&LoggingSection::default());
            error!(error = %e, "invalid configuration");
            return Err(e);
        }
    };
    init_logging(&cfg.logging);

    if let Err(e) = commands::handle_commands(&cli, &cfg) {
        error!(error = %e, "command failed");
        return Err(e);
    }
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let path = cli
        .config
        .clone()
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));
    let overrides = Overrides {
        endpoint: cli.endpoint.clone(),
        schema_id: cli.schema.clone(),
        issuer: cli.issuer.clone(),
    };
    AppConfig::load(path.as_deref(), &overrides)
}

fn init_logging(cfg: &LoggingSection) {
    // RUST_LOG wins over the configured level.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.level));

    if cfg.format.eq_ignore_ascii_case("json") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
