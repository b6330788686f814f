use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use tracing::{debug, info};

use crate::{
    config::{ASSETS_FILE, get_config_dir},
    domain::asset::AssetWithOptionalAmount,
};

/// JSON-file backed source of the selectable asset list.
#[derive(Debug, Clone)]
pub struct AssetStore {
    path: PathBuf,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::with_path(get_config_dir().join(ASSETS_FILE))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all assets. A missing file is an empty list.
    pub fn load(&self) -> Result<Vec<AssetWithOptionalAmount>> {
        if !self.path.exists() {
            debug!("Asset file {} not found, using empty list", self.path.display());
            return Ok(Vec::new());
        }

        let bytes = std::fs::read(&self.path)
            .wrap_err_with(|| format!("Failed to read {}", self.path.display()))?;
        let assets: Vec<AssetWithOptionalAmount> = serde_json::from_slice(&bytes)
            .wrap_err_with(|| format!("Invalid asset list in {}", self.path.display()))?;

        info!("Loaded {} assets from {}", assets.len(), self.path.display());
        Ok(assets)
    }

    /// Replace the stored asset list.
    pub fn save(&self, assets: &[AssetWithOptionalAmount]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(assets)?;
        std::fs::write(&self.path, json)
            .wrap_err_with(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    /// Find an asset by symbol, ignoring case.
    pub fn find(&self, symbol: &str) -> Result<Option<AssetWithOptionalAmount>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|a| a.symbol().eq_ignore_ascii_case(symbol)))
    }
}

impl Default for AssetStore {
    fn default() -> Self {
        Self::new()
    }
}
