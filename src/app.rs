use std::io::Write;

use color_eyre::eyre::{Result, eyre};
use tracing::{debug, info};

use asset_picker::{
    config::Config,
    domain::{
        asset::AssetWithOptionalAmount,
        ranker::rank,
        validator::{max_amount_string, validate_selection},
    },
    infra::store::AssetStore,
};

use crate::cli::{Args, Command};

pub struct App {
    config: Config,
    store: AssetStore,
}

impl App {
    pub fn new(args: &Args) -> Result<Self> {
        let config = Config::new(args.assets.as_deref(), args.display_decimals);
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Self {
        let store = AssetStore::with_path(config.assets_path.clone());
        Self { config, store }
    }

    pub fn run(&self, command: &Command) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.execute(command, &mut out)
    }

    /// Run `command`, writing its report to `out`.
    pub fn execute(&self, command: &Command, out: &mut impl Write) -> Result<()> {
        debug!("Executing command: {:?}", command);
        match command {
            Command::Rank { term } => self.rank(term, out),
            Command::Validate { asset, amount } => self.validate(asset, amount, out),
            Command::Max { asset } => self.max(asset, out),
        }
    }

    fn rank(&self, term: &str, out: &mut impl Write) -> Result<()> {
        let assets = self.store.load()?;
        let ranked = rank(&assets, term);
        info!("Showing {} of {} assets", ranked.len(), assets.len());

        for asset in ranked {
            writeln!(out, "{}", self.format_row(asset))?;
        }
        Ok(())
    }

    fn validate(&self, symbol: &str, amount: &str, out: &mut impl Write) -> Result<()> {
        let selected = self.selected(symbol)?;
        let result = validate_selection(amount, Some(&selected));

        match result {
            Some(err) => writeln!(out, "error[{}]: {}", err.message_key(), err)?,
            None if selected.amount.is_none() || selected.asset.decimals().is_none() => {
                writeln!(out, "unchecked: balance of {} is unknown", selected.symbol())?
            }
            None => writeln!(out, "ok")?,
        }
        Ok(())
    }

    fn max(&self, symbol: &str, out: &mut impl Write) -> Result<()> {
        let selected = self.selected(symbol)?;
        match max_amount_string(selected.amount.as_ref()) {
            Some(max) => writeln!(out, "{max}")?,
            None => info!("No known balance for {}, max is a no-op", selected.symbol()),
        }
        Ok(())
    }

    fn selected(&self, symbol: &str) -> Result<AssetWithOptionalAmount> {
        self.store.find(symbol)?.ok_or_else(|| {
            eyre!(
                "Asset {} not found in {}",
                symbol,
                self.store.path().display()
            )
        })
    }

    fn format_row(&self, asset: &AssetWithOptionalAmount) -> String {
        let amount = match (&asset.display_amount, &asset.amount) {
            (Some(display), _) => display.clone(),
            (None, Some(amount)) => amount.to_display_string(self.config.display_decimals),
            (None, None) => "-".to_string(),
        };
        let address = asset
            .asset
            .contract_address()
            .map(|a| a.as_str())
            .unwrap_or("native");
        format!("{:<10} {:>24}  {}", asset.symbol(), amount, address)
    }
}
