//! Listing catalogs loaded from TOML or JSON files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::card::ShoeCardInput;
use crate::error::CatalogError;

/// An ordered list of shoe listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub shoes: Vec<ShoeCardInput>,
}

/// JSON catalogs may be a bare array or an object with a `shoes` key.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    List(Vec<ShoeCardInput>),
    Table(Catalog),
}

impl Catalog {
    /// Load a catalog, picking the format from the file extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if ext != "json" && ext != "toml" {
            return Err(CatalogError::UnsupportedFormat(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = if ext == "json" {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };

        let catalog = parsed.map_err(|message| CatalogError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        if catalog.shoes.is_empty() {
            return Err(CatalogError::Empty(path.to_path_buf()));
        }
        Ok(catalog)
    }

    /// Parse a JSON catalog.
    pub fn from_json_str(s: &str) -> Result<Self, String> {
        match serde_json::from_str::<JsonCatalog>(s).map_err(|e| e.to_string())? {
            JsonCatalog::List(shoes) => Ok(Self { shoes }),
            JsonCatalog::Table(catalog) => Ok(catalog),
        }
    }

    /// Parse a TOML catalog made of `[[shoes]]` tables.
    pub fn from_toml_str(s: &str) -> Result<Self, String> {
        toml::from_str(s).map_err(|e| e.to_string())
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShoeCardInput> {
        self.shoes.iter()
    }
}
