//! Checks a typed amount against the selected asset's balance.

use std::cmp::Ordering;

use tracing::debug;

use super::{
    amount::{FixedPointAmount, parse_amount},
    asset::AssetWithOptionalAmount,
};

/// Why an entered amount cannot be sent.
///
/// Both kinds are advisory: the caller shows them inline and keeps accepting
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid amount")]
    InvalidAmount,
    #[error("Insufficient balance")]
    InsufficientBalance,
}

impl ValidationError {
    /// Key for looking up the localized message.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "invalid_amount",
            Self::InsufficientBalance => "insufficient_balance",
        }
    }
}

/// Validate `input` against `balance`.
///
/// Returns `None` both when the amount is fine and when it cannot be checked:
/// empty input, no selected asset (`selected_asset_decimals` absent), or an
/// unknown balance.
///
/// A balance of zero rejects every request, including a request for zero.
pub fn validate(
    input: &str,
    selected_asset_decimals: Option<u8>,
    balance: Option<&FixedPointAmount>,
) -> Option<ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let (Some(asset_decimals), Some(balance)) = (selected_asset_decimals, balance) else {
        return None;
    };

    let requested = match parse_amount(input) {
        Ok(amount) => amount,
        Err(e) => {
            debug!("Rejecting amount {:?}: {}", input, e);
            return Some(ValidationError::InvalidAmount);
        }
    };

    // Express the request at the asset's scale when that is exact; otherwise
    // keep the finer scale so no digits are dropped before comparing.
    let requested = requested.rescale(asset_decimals).unwrap_or(requested);

    if balance.is_zero() || requested.cmp_exact(balance) == Ordering::Greater {
        debug!("Amount {} exceeds balance {}", requested, balance);
        return Some(ValidationError::InsufficientBalance);
    }

    None
}

/// Validate `input` against whatever asset is currently selected.
pub fn validate_selection(
    input: &str,
    selected: Option<&AssetWithOptionalAmount>,
) -> Option<ValidationError> {
    let selected = selected?;
    validate(input, selected.asset.decimals(), selected.amount.as_ref())
}

/// The full balance as an exact decimal string, for a "use max" action.
///
/// `None` when the balance is unknown; the caller should then leave the
/// amount field alone.
pub fn max_amount_string(balance: Option<&FixedPointAmount>) -> Option<String> {
    balance.map(FixedPointAmount::to_decimal_string)
}
