//! Catalog seed file loading.
//!
//! The seed file is a JSON object with a single `products` array, each entry shaped like a
//! [`Product`].

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use shopease::products::Product;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read catalog seed {path}")]
    Read {
        path: PathBuf,

        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog seed")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    products: Vec<Product>,
}

/// Parses a seed document.
///
/// # Errors
///
/// Returns an error when `json` is not a valid seed document.
pub fn parse_products(json: &str) -> Result<Vec<Product>, SeedError> {
    let seed: SeedFile = serde_json::from_str(json)?;

    Ok(seed.products)
}

/// Reads and parses the seed file at `path`.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed.
pub fn load_products(path: &Path) -> Result<Vec<Product>, SeedError> {
    let json = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let products = parse_products(&json)?;

    info!(path = %path.display(), count = products.len(), "loaded catalog seed");

    Ok(products)
}
