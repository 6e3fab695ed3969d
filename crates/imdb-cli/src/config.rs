//! Command-line configuration

use std::path::PathBuf;

use clap::Parser;
use imdb_core::{ClientConfig, IMDB_BASE_URL};

#[derive(Debug, Clone, Parser)]
#[command(name = "imdb-search")]
#[command(about = "Look up a movie star on IMDb and list the movies they are in")]
pub struct CliConfig {
    /// Site root for search and profile requests
    #[arg(long, default_value = IMDB_BASE_URL)]
    pub base_url: String,

    /// Directory the JSON export is written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Give up on a request after this many seconds (default: wait forever)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// User-Agent header to send with requests
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            user_agent: self.user_agent.clone(),
        }
    }
}
