use crate::models::{Grant, Investor};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

const BUNDLED_GRANTS: &str = include_str!("../../data/grants.json");
const BUNDLED_INVESTORS: &str = include_str!("../../data/investors.json");

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {kind} catalog: {source}")]
    Parse {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

/// Grant and investor listings, immutable once loaded
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub grants: Vec<Grant>,
    pub investors: Vec<Investor>,
}

impl Catalog {
    pub fn new(grants: Vec<Grant>, investors: Vec<Investor>) -> Result<Self, CatalogError> {
        ensure_unique("grant", grants.iter().map(|g| g.id.as_str()))?;
        ensure_unique("investor", investors.iter().map(|i| i.id.as_str()))?;
        Ok(Self { grants, investors })
    }

    /// Catalogs shipped in `data/`
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_GRANTS, BUNDLED_INVESTORS)
    }

    pub fn from_json(grants: &str, investors: &str) -> Result<Self, CatalogError> {
        let grants = parse::<Grant>("grant", grants)?;
        let investors = parse::<Investor>("investor", investors)?;
        Self::new(grants, investors)
    }

    /// Load catalogs from JSON files. A missing path falls back to the
    /// bundled listing for that catalog.
    pub async fn load(
        grants_path: Option<&Path>,
        investors_path: Option<&Path>,
    ) -> Result<Self, CatalogError> {
        let grants = match grants_path {
            Some(path) => read(path).await?,
            None => BUNDLED_GRANTS.to_string(),
        };
        let investors = match investors_path {
            Some(path) => read(path).await?,
            None => BUNDLED_INVESTORS.to_string(),
        };

        let catalog = Self::from_json(&grants, &investors)?;
        tracing::info!(
            grants = catalog.grants.len(),
            investors = catalog.investors.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }
}

async fn read(path: &Path) -> Result<String, CatalogError> {
    tracing::debug!("Reading catalog from {}", path.display());
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn parse<T: DeserializeOwned>(kind: &'static str, json: &str) -> Result<Vec<T>, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Parse { kind, source })
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
