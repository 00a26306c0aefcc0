//! Catalog error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading listing catalogs.
///
/// Rendering itself never fails; these only cover getting the data in.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid TOML/JSON for a listing catalog.
    #[error("Failed to parse catalog {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// The file extension is not one we know how to read.
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    /// The catalog parsed but contains no shoes.
    #[error("Catalog {0} contains no shoes")]
    Empty(PathBuf),
}
