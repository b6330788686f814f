use std::path::PathBuf;

use directories::ProjectDirs;

use crate::domain::asset::DEFAULT_DISPLAY_DECIMALS;

/// File name of the asset list inside the config directory.
pub const ASSETS_FILE: &str = "assets.json";

/// Get the data directory for the application.
pub fn get_data_dir() -> PathBuf {
    if let Ok(s) = std::env::var("ASSET_PICKER_DATA") {
        PathBuf::from(s)
    } else if let Some(proj_dirs) = ProjectDirs::from("com", "asset-picker", "asset-picker") {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

/// Get the config directory for the application.
pub fn get_config_dir() -> PathBuf {
    if let Ok(s) = std::env::var("ASSET_PICKER_CONFIG") {
        PathBuf::from(s)
    } else if let Some(proj_dirs) = ProjectDirs::from("com", "asset-picker", "asset-picker") {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file holding the selectable assets and their balances.
    pub assets_path: PathBuf,
    /// Fraction digits shown for balances without a pre-rendered string.
    pub display_decimals: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_path: get_config_dir().join(ASSETS_FILE),
            display_decimals: DEFAULT_DISPLAY_DECIMALS,
        }
    }
}

impl Config {
    /// Create config from CLI args.
    pub fn new(assets_path: Option<&str>, display_decimals: Option<usize>) -> Self {
        let mut config = Self::default();
        if let Some(path) = assets_path {
            config.assets_path = PathBuf::from(path);
        }
        if let Some(decimals) = display_decimals {
            config.display_decimals = decimals;
        }
        config
    }
}
