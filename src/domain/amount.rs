//! Fixed-point amounts: a raw integer scaled by a power of ten.
//!
//! Balances and user-entered amounts are never converted to floating point.
//! Comparisons across different scales rescale the raw integer instead.

use std::{cmp::Ordering, fmt};

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Largest fractional precision an amount can carry.
pub const MAX_DECIMALS: u8 = u8::MAX;

/// An exact quantity `raw / 10^decimals`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAmountRepr", into = "RawAmountRepr")]
pub struct FixedPointAmount {
    raw: U256,
    decimals: u8,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseAmountError {
    #[error("Amount is empty")]
    Empty,
    #[error("Invalid character {ch:?} at position {index}")]
    InvalidCharacter { ch: char, index: usize },
    #[error("Amount contains more than one decimal point")]
    MultipleDecimalPoints,
    #[error("Amount contains no digits")]
    NoDigits,
    #[error("Too many fractional digits: {decimals} (max {max})", max = MAX_DECIMALS)]
    TooManyDecimals { decimals: usize },
    #[error("Amount does not fit in 256 bits")]
    Overflow,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RescaleError {
    #[error("Rescaling {from} -> {to} decimals overflows 256 bits")]
    Overflow { from: u8, to: u8 },
    #[error("Rescaling {from} -> {to} decimals would drop non-zero digits")]
    PrecisionLoss { from: u8, to: u8 },
}

impl FixedPointAmount {
    pub const fn new(raw: U256, decimals: u8) -> Self {
        Self { raw, decimals }
    }

    pub fn from_u128(raw: u128, decimals: u8) -> Self {
        Self::new(U256::from(raw), decimals)
    }

    pub const fn zero(decimals: u8) -> Self {
        Self::new(U256::ZERO, decimals)
    }

    pub const fn raw(&self) -> U256 {
        self.raw
    }

    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Express the same value at another scale.
    ///
    /// # Errors
    ///
    /// Returns `RescaleError::PrecisionLoss` when scaling down would drop
    /// non-zero fractional digits, and `RescaleError::Overflow` when scaling
    /// up does not fit in 256 bits.
    pub fn rescale(&self, decimals: u8) -> Result<Self, RescaleError> {
        let (from, to) = (self.decimals, decimals);
        match to.cmp(&from) {
            Ordering::Equal => Ok(*self),
            Ordering::Greater => scale_up(self.raw, to - from)
                .map(|raw| Self::new(raw, to))
                .ok_or(RescaleError::Overflow { from, to }),
            Ordering::Less => {
                // 10^255 does not fit, but then any non-zero raw is lossy anyway.
                let Some(divisor) = pow10(from - to) else {
                    return if self.raw.is_zero() {
                        Ok(Self::zero(to))
                    } else {
                        Err(RescaleError::PrecisionLoss { from, to })
                    };
                };
                if !(self.raw % divisor).is_zero() {
                    return Err(RescaleError::PrecisionLoss { from, to });
                }
                Ok(Self::new(self.raw / divisor, to))
            }
        }
    }

    /// Compare two amounts exactly, whatever their scales.
    pub fn cmp_exact(&self, other: &Self) -> Ordering {
        match self.decimals.cmp(&other.decimals) {
            Ordering::Equal => self.raw.cmp(&other.raw),
            Ordering::Less => match scale_up(self.raw, other.decimals - self.decimals) {
                Some(scaled) => scaled.cmp(&other.raw),
                None => Ordering::Greater,
            },
            Ordering::Greater => match scale_up(other.raw, self.decimals - other.decimals) {
                Some(scaled) => self.raw.cmp(&scaled),
                None => Ordering::Less,
            },
        }
    }

    /// Exact decimal rendering with trailing fractional zeros removed.
    pub fn to_decimal_string(&self) -> String {
        let (int_part, frac_part) = self.split_digits();
        let frac_part = frac_part.trim_end_matches('0');
        if frac_part.is_empty() {
            int_part
        } else {
            format!("{int_part}.{frac_part}")
        }
    }

    /// Human-facing rendering: thousands separators in the integer part and
    /// the fraction truncated to `max_fraction_digits`.
    pub fn to_display_string(&self, max_fraction_digits: usize) -> String {
        let (int_part, frac_part) = self.split_digits();
        let frac_part = &frac_part[..frac_part.len().min(max_fraction_digits)];
        let frac_part = frac_part.trim_end_matches('0');
        let grouped = group_thousands(&int_part);
        if frac_part.is_empty() {
            grouped
        } else {
            format!("{grouped}.{frac_part}")
        }
    }

    fn split_digits(&self) -> (String, String) {
        let digits = self.raw.to_string();
        let decimals = self.decimals as usize;
        if decimals == 0 {
            return (digits, String::new());
        }
        let padded = format!("{digits:0>width$}", width = decimals + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
        (int_part.to_string(), frac_part.to_string())
    }
}

impl fmt::Display for FixedPointAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

/// Parse a non-negative decimal string at its own natural scale.
///
/// `"1.50"` parses to raw `150` at 2 decimals. Leading and trailing whitespace
/// is ignored. Either side of the point may be empty (`"5."`, `".5"`) but not
/// both.
///
/// # Errors
///
/// Returns a `ParseAmountError` describing the first problem found.
pub fn parse_amount(input: &str) -> Result<FixedPointAmount, ParseAmountError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let mut raw = U256::ZERO;
    let mut digit_count = 0usize;
    let mut frac_digits: Option<usize> = None;

    for (index, ch) in s.char_indices() {
        match ch {
            '.' if frac_digits.is_some() => return Err(ParseAmountError::MultipleDecimalPoints),
            '.' => frac_digits = Some(0),
            '0'..='9' => {
                let digit = U256::from(ch as u8 - b'0');
                raw = raw
                    .checked_mul(U256::from(10u8))
                    .and_then(|r| r.checked_add(digit))
                    .ok_or(ParseAmountError::Overflow)?;
                digit_count += 1;
                if let Some(n) = frac_digits.as_mut() {
                    *n += 1;
                }
            }
            _ => return Err(ParseAmountError::InvalidCharacter { ch, index }),
        }
    }

    if digit_count == 0 {
        return Err(ParseAmountError::NoDigits);
    }

    let decimals = frac_digits.unwrap_or(0);
    let decimals = u8::try_from(decimals)
        .map_err(|_| ParseAmountError::TooManyDecimals { decimals })?;

    Ok(FixedPointAmount::new(raw, decimals))
}

/// `10^exp`, or `None` when it does not fit in 256 bits.
pub(crate) fn pow10(exp: u8) -> Option<U256> {
    U256::from(10u8).checked_pow(U256::from(exp))
}

fn scale_up(raw: U256, delta: u8) -> Option<U256> {
    if raw.is_zero() {
        return Some(U256::ZERO);
    }
    pow10(delta).and_then(|factor| raw.checked_mul(factor))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Serialize, Deserialize)]
struct RawAmountRepr {
    raw: String,
    decimals: u8,
}

impl TryFrom<RawAmountRepr> for FixedPointAmount {
    type Error = String;

    fn try_from(repr: RawAmountRepr) -> Result<Self, Self::Error> {
        if repr.raw.is_empty() || !repr.raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("raw amount must be decimal digits, got {:?}", repr.raw));
        }
        let raw = U256::from_str_radix(&repr.raw, 10)
            .map_err(|e| format!("invalid raw amount {:?}: {e}", repr.raw))?;
        Ok(Self::new(raw, repr.decimals))
    }
}

impl From<FixedPointAmount> for RawAmountRepr {
    fn from(amount: FixedPointAmount) -> Self {
        Self {
            raw: amount.raw.to_string(),
            decimals: amount.decimals,
        }
    }
}
