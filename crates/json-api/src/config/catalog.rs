//! Catalog Config

use std::path::PathBuf;

use clap::Args;

/// Catalog seed settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Path to the JSON catalog seed loaded at startup
    #[arg(long, env = "CATALOG_PATH", default_value = "data/products.json")]
    pub catalog_path: PathBuf,
}
