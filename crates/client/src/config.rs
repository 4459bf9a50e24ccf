//! Client Config

use std::{path::PathBuf, time::Duration};

use clap::Args;

/// Connection and storage settings shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct ClientConfig {
    /// Base URL of the ShopEase JSON API
    #[arg(long, env = "SHOPEASE_API_URL", default_value = "http://localhost:5000")]
    pub api_url: String,

    /// Directory holding the persisted cart
    #[arg(long, env = "SHOPEASE_DATA_DIR", default_value = ".shopease")]
    pub data_dir: PathBuf,

    /// Request timeout in seconds
    #[arg(long, env = "SHOPEASE_TIMEOUT_SECONDS", default_value_t = 10_u64)]
    pub timeout_seconds: u64,
}

impl ClientConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
