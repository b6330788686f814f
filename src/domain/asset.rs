use serde::{Deserialize, Serialize};

use super::amount::FixedPointAmount;

/// Fraction digits shown when an asset carries no pre-rendered amount string.
pub const DEFAULT_DISPLAY_DECIMALS: usize = 6;

/// A chain contract address as supplied by the caller.
///
/// Addresses compare case-insensitively; `canonical()` gives the normalized
/// form used for matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractAddress(String);

impl ContractAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// The address exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase `0x`-prefixed form, with an odd-length payload left-padded by
    /// one zero nibble. `None` if the payload is not hex.
    pub fn canonical(&self) -> Option<String> {
        canonicalize_hex(&self.0).map(|(canonical, _)| canonical)
    }
}

/// Canonical form of a partial-address search term.
///
/// Same as `ContractAddress::canonical`, but a zero nibble added to pad an
/// odd-length term is dropped again so the term can match inside an address.
pub fn canonical_query(term: &str) -> Option<String> {
    let (canonical, padded) = canonicalize_hex(term)?;
    if padded {
        Some(format!("0x{}", &canonical[3..]))
    } else {
        Some(canonical)
    }
}

fn canonicalize_hex(s: &str) -> Option<(String, bool)> {
    let payload = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let padded = payload.len() % 2 == 1;
    let bytes = if padded {
        hex::decode(format!("0{payload}")).ok()?
    } else {
        hex::decode(payload).ok()?
    };
    Some((format!("0x{}", hex::encode(bytes)), padded))
}

/// What kind of asset this is, and the capabilities that come with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssetKind {
    /// The chain's native currency.
    Native,
    /// A token issued by a contract.
    Contract { contract_address: ContractAddress },
}

/// A selectable asset. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    symbol: String,
    #[serde(flatten)]
    kind: AssetKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    decimals: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price_feed_id: Option<String>,
}

impl Asset {
    pub fn native(symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            symbol: symbol.into(),
            kind: AssetKind::Native,
            decimals: Some(decimals),
            icon_url: None,
            price_feed_id: None,
        }
    }

    pub fn contract(
        symbol: impl Into<String>,
        contract_address: impl Into<String>,
        decimals: Option<u8>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            kind: AssetKind::Contract {
                contract_address: ContractAddress::new(contract_address),
            },
            decimals,
            icon_url: None,
            price_feed_id: None,
        }
    }

    pub fn with_icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    pub fn with_price_feed_id(mut self, id: impl Into<String>) -> Self {
        self.price_feed_id = Some(id.into());
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn kind(&self) -> &AssetKind {
        &self.kind
    }

    pub fn contract_address(&self) -> Option<&ContractAddress> {
        match &self.kind {
            AssetKind::Native => None,
            AssetKind::Contract { contract_address } => Some(contract_address),
        }
    }

    pub fn decimals(&self) -> Option<u8> {
        self.decimals
    }

    pub fn icon_url(&self) -> Option<&str> {
        self.icon_url.as_deref()
    }

    pub fn price_feed_id(&self) -> Option<&str> {
        self.price_feed_id.as_deref()
    }
}

/// An asset together with the holder's balance of it, when known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetWithOptionalAmount {
    #[serde(flatten)]
    pub asset: Asset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<FixedPointAmount>,
    /// Pre-localized rendering of `amount`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_amount: Option<String>,
}

impl AssetWithOptionalAmount {
    pub fn new(asset: Asset, amount: Option<FixedPointAmount>) -> Self {
        Self {
            asset,
            amount,
            display_amount: None,
        }
    }

    pub fn without_amount(asset: Asset) -> Self {
        Self::new(asset, None)
    }

    pub fn with_display_amount(mut self, display: impl Into<String>) -> Self {
        self.display_amount = Some(display.into());
        self
    }

    pub fn symbol(&self) -> &str {
        self.asset.symbol()
    }

    /// The caller's localized amount string, or a default rendering of the
    /// amount. `None` when the balance is unknown.
    pub fn display_amount(&self) -> Option<String> {
        match (&self.display_amount, &self.amount) {
            (Some(display), _) => Some(display.clone()),
            (None, Some(amount)) => Some(amount.to_display_string(DEFAULT_DISPLAY_DECIMALS)),
            (None, None) => None,
        }
    }
}
