//! Default-order bias for well-known tickers.

use std::{collections::HashMap, sync::LazyLock};

/// Curated tickers, most prominent first.
pub const PRIORITY_SYMBOLS: &[&str] = &[
    "ETH", "BTC", "WETH", "WBTC", "USDC", "USDT", "DAI", "BNB", "SOL", "MATIC", "POL", "AVAX",
    "ARB", "OP", "LINK", "UNI", "AAVE", "MKR", "CRV", "LDO", "stETH", "wstETH", "rETH", "ATOM",
    "DOT", "ADA", "XRP", "DOGE", "LTC", "SHIB",
];

static PRIORITY_TABLE: LazyLock<HashMap<&'static str, u32>> = LazyLock::new(|| {
    let len = PRIORITY_SYMBOLS.len() as u32;
    PRIORITY_SYMBOLS
        .iter()
        .enumerate()
        .map(|(index, symbol)| (*symbol, len - index as u32))
        .collect()
});

/// Rank of `symbol` in the priority table; higher sorts first, unlisted is 0.
///
/// Lookup is case-sensitive.
pub fn priority(symbol: &str) -> u32 {
    PRIORITY_TABLE.get(symbol).copied().unwrap_or(0)
}
