//! Integration test module for asset-picker.
//!
//! Provides a shared test environment that manages:
//! - A realistic wallet asset list (native, contract, unknown-balance assets)
//! - An on-disk copy of that list in a temporary config directory

pub mod e2e_amount_flow;
pub mod e2e_rank_flow;

use std::{path::PathBuf, sync::OnceLock};

use asset_picker::{
    Asset, AssetWithOptionalAmount, FixedPointAmount, infra::store::AssetStore,
};
use tempfile::TempDir;

static TEST_ENV: OnceLock<TestEnv> = OnceLock::new();

pub const USDC_ADDRESS: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
pub const DAI_ADDRESS: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
pub const PEPE_ADDRESS: &str = "0x6982508145454Ce325dDbE47a25d4ec3d2311933";
/// Odd-length payload, as some explorers render short addresses.
pub const ODD_ADDRESS: &str = "0xabc1234";

/// Test environment for integration tests.
pub struct TestEnv {
    /// Keeps the config directory alive for the whole run.
    _dir: TempDir,
    /// Path of the written asset list.
    pub assets_path: PathBuf,
    /// The asset list as written.
    pub assets: Vec<AssetWithOptionalAmount>,
}

impl TestEnv {
    /// Get or initialize the test environment.
    pub fn get() -> &'static TestEnv {
        TEST_ENV.get_or_init(|| TestEnv::setup().expect("Failed to setup test environment"))
    }

    fn setup() -> Result<Self, String> {
        let dir = TempDir::new().map_err(|e| e.to_string())?;
        let assets_path = dir.path().join("assets.json");
        let assets = wallet_assets();

        AssetStore::with_path(&assets_path)
            .save(&assets)
            .map_err(|e| e.to_string())?;

        Ok(Self {
            _dir: dir,
            assets_path,
            assets,
        })
    }

    pub fn store(&self) -> AssetStore {
        AssetStore::with_path(&self.assets_path)
    }

    /// Look up a fixture asset by exact symbol.
    pub fn asset(&self, symbol: &str) -> &AssetWithOptionalAmount {
        self.assets
            .iter()
            .find(|a| a.symbol() == symbol)
            .unwrap_or_else(|| panic!("fixture asset {symbol} missing"))
    }
}

/// A wallet holding a mix of well-known and obscure assets.
pub fn wallet_assets() -> Vec<AssetWithOptionalAmount> {
    vec![
        AssetWithOptionalAmount::new(
            Asset::contract("PEPE", PEPE_ADDRESS, Some(18)),
            Some(FixedPointAmount::from_u128(42_000_000_000_000_000_000_000_000, 18)),
        ),
        AssetWithOptionalAmount::new(
            Asset::native("ETH", 18).with_price_feed_id("ethereum"),
            Some(FixedPointAmount::from_u128(1_234_500_000_000_000_000, 18)),
        ),
        AssetWithOptionalAmount::new(
            Asset::contract("USDC", USDC_ADDRESS, Some(6)).with_icon_url("https://icons/usdc.svg"),
            Some(FixedPointAmount::from_u128(5_000_000, 6)),
        )
        .with_display_amount("5.00"),
        AssetWithOptionalAmount::new(
            Asset::contract("DAI", DAI_ADDRESS, Some(18)),
            Some(FixedPointAmount::zero(18)),
        ),
        AssetWithOptionalAmount::without_amount(Asset::contract("ABC", ODD_ADDRESS, Some(8))),
        AssetWithOptionalAmount::without_amount(Asset::contract(
            "aUSDC",
            "0xBcca60bB61934080951369a648Fb03DF4F96263C",
            Some(6),
        )),
    ]
}

/// Macro for creating integration tests against the shared environment.
#[macro_export]
macro_rules! integration_test {
    ($name:ident, $body:expr) => {
        #[test]
        fn $name() {
            let env = $crate::TestEnv::get();
            $body(env)
        }
    };
}
