//! Asset Picker - ranking and amount validation for wallet asset pickers.
//!
//! This library provides:
//! - Search filtering and display ordering of a selectable asset list
//! - Exact fixed-point parsing of user-typed amounts
//! - Balance validation and "use max" amounts without floating point
//! - A JSON file source for asset lists

pub mod config;
pub mod domain;
pub mod infra;

pub use domain::{
    amount::{FixedPointAmount, ParseAmountError, RescaleError, parse_amount},
    asset::{Asset, AssetKind, AssetWithOptionalAmount, ContractAddress},
    ranker::rank,
    validator::{ValidationError, max_amount_string, validate, validate_selection},
};
