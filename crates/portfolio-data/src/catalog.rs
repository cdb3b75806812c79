//! Selectable-asset catalog, loaded from a JSON file in the data directory.

use std::fs;
use std::path::Path;

use portfolio_core::{Asset, DataError};

pub struct FileCatalog {
    assets: Vec<Asset>,
}

impl FileCatalog {
    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| DataError::FileError(format!("{}: {e}", path.display())))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, DataError> {
        let assets: Vec<Asset> = serde_json::from_str(raw)?;
        Ok(FileCatalog { assets })
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn find(&self, asset_id: &str) -> Result<&Asset, DataError> {
        self.assets
            .iter()
            .find(|a| a.asset_id == asset_id)
            .ok_or_else(|| DataError::UnknownAsset {
                asset_id: asset_id.to_string(),
                available: self.assets.iter().map(|a| a.asset_id.clone()).collect(),
            })
    }
}
