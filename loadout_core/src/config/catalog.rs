//! Catalog loading

use super::ConfigError;
use crate::catalog::{Catalog, CatalogData};
use std::path::Path;
use tracing::info;

/// Load a catalog snapshot from a TOML file
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let data: CatalogData = super::load_toml(path)?;
    let catalog = Catalog::from_data(data)?;
    info!(target: "config", path = %path.display(), "catalog loaded");
    Ok(catalog)
}

/// Build a catalog snapshot from a TOML string
pub fn parse_catalog(content: &str) -> Result<Catalog, ConfigError> {
    let data: CatalogData = super::parse_toml(content)?;
    Ok(Catalog::from_data(data)?)
}

/// Build a catalog snapshot from a JSON string
pub fn parse_catalog_json(content: &str) -> Result<Catalog, ConfigError> {
    let data: CatalogData = serde_json::from_str(content)?;
    Ok(Catalog::from_data(data)?)
}

/// Get the bundled demo catalog
pub fn default_catalog() -> Result<Catalog, ConfigError> {
    parse_catalog(include_str!("../../config/catalog.toml"))
}
