use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "asset-picker")]
#[command(author = "quake")]
#[command(version)]
#[command(about = "Rank wallet assets and validate amounts against balances")]
pub struct Args {
    /// Asset list JSON file (defaults to assets.json in the config directory)
    #[arg(long, env = "ASSET_PICKER_ASSETS", global = true)]
    pub assets: Option<String>,

    /// Data directory path (log file location)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Fraction digits shown for balances without a display string
    #[arg(long, global = true)]
    pub display_decimals: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List assets in display order, optionally filtered by a search term
    Rank {
        /// Symbol fragment or 0x-prefixed partial contract address
        #[arg(default_value = "")]
        term: String,
    },
    /// Check an amount against the balance of an asset
    Validate {
        /// Symbol of the selected asset
        #[arg(short, long)]
        asset: String,
        /// Amount as typed, e.g. 12.5
        amount: String,
    },
    /// Print the full balance of an asset as an exact amount
    Max {
        /// Symbol of the selected asset
        #[arg(short, long)]
        asset: String,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
