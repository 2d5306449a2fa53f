//! The static list of mintable editions.
//!
//! Loaded once at startup from the bundled `assets/catalog.json` or a file
//! named in the config, and never mutated afterwards.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog has no items")]
    Empty,

    #[error("Catalog item #{index} has an empty edition")]
    EmptyEdition { index: usize },

    #[error("Catalog edition '{edition}' appears more than once")]
    DuplicateEdition { edition: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogItem {
    /// Token identifier; also names the `<edition>.json` metadata document.
    #[serde(deserialize_with = "edition_from_number_or_string")]
    pub edition: String,
    pub name: String,
    pub description: String,
    /// Image URI, displayed only.
    pub image: String,
}

/// Catalog files in the wild write editions as either `7` or `"7"`.
fn edition_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Edition {
        Number(u64),
        Text(String),
    }

    Ok(match Edition::deserialize(deserializer)? {
        Edition::Number(n) => n.to_string(),
        Edition::Text(s) => s.trim().to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Uses `path` when given, the bundled catalog otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::bundled(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<CatalogItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        {
            let mut seen = HashSet::new();
            for (index, item) in items.iter().enumerate() {
                if item.edition.is_empty() {
                    return Err(CatalogError::EmptyEdition { index });
                }
                if !seen.insert(item.edition.as_str()) {
                    return Err(CatalogError::DuplicateEdition {
                        edition: item.edition.clone(),
                    });
                }
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, edition: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.edition == edition)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
