use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "offerboard",
    version,
    about = "Rank wallets by distinct offerings attested by one issuer"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "TOML config file (defaults to $OFFERBOARD_CONFIG when set)"
    )]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Registry GraphQL endpoint")]
    pub endpoint: Option<String>,
    #[arg(long, global = true, help = "Registry schema id to query")]
    pub schema: Option<String>,
    #[arg(long, global = true, help = "Only count attestations from this address")]
    pub issuer: Option<String>,
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        conflicts_with = "offline",
        help = "Read a saved registry response instead of querying the endpoint"
    )]
    pub from_file: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Use the last cached registry response instead of the network"
    )]
    pub offline: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the leaderboard.
    Rank {
        #[arg(long, help = "Only show the first N rows")]
        limit: Option<usize>,
    },
    /// Print the raw attestation records.
    Fetch,
    /// Decode one attestation payload (`-` reads stdin).
    Decode { payload: String },
    /// Print the effective configuration.
    Config,
}
