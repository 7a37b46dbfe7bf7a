use crate::cli::{Cli, Commands};
use crate::commands::source::attestation_source;
use offerboard::config::AppConfig;
use offerboard::services::output::{print_one, print_out};
use offerboard::{compute_leaderboard, decode_payload, BoardError};
use std::io::Read;

pub fn handle_commands(cli: &Cli, cfg: &AppConfig) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Rank { limit } => {
            let source = attestation_source(cli, cfg)?;
            let mut entries = compute_leaderboard(source.as_ref(), &cfg.ranking_config())?;
            if let Some(n) = limit {
                entries.truncate(*n);
            }
            print_out(cli.json, &entries, "no ranked wallets", |e| {
                format!("Rank {}: {} ({} unique)", e.rank, e.wallet, e.unique_count)
            })?;
        }
        Commands::Fetch => {
            let source = attestation_source(cli, cfg)?;
            let records = source.fetch()?;
            print_out(cli.json, &records, "no attestations", |r| {
                format!("{}\t{}\t{}", r.attester, r.recipient, r.payload)
            })?;
        }
        Commands::Decode { payload } => {
            let text = if payload == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                payload.clone()
            };
            let fields = decode_payload(text.trim()).map_err(|e| BoardError::decode(0, e))?;
            print_out(cli.json, &fields, "no fields", |f| {
                format!("{}\t{}\t{}", f.name, f.kind, f.value)
            })?;
        }
        Commands::Config => {
            if cli.json {
                print_one(true, cfg, |_| String::new())?;
            } else {
                print!("{}", toml::to_string_pretty(cfg)?);
            }
        }
    }

    Ok(())
}
