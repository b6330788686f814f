//! Filtering and ordering of the selectable asset list.
//!
//! Without a search term the list is ordered by the priority table, then
//! alphabetically. With a search term the list is first filtered (symbol
//! substring, or partial contract address for `0x` terms), then symbols that
//! start with the term float to the top, each group alphabetical.

use std::cmp::Ordering;

use tracing::debug;

use super::{
    asset::{AssetWithOptionalAmount, canonical_query},
    priority::priority,
};

/// Filter and order `assets` for display against `search_term`.
///
/// The input is left untouched; the result borrows from it.
pub fn rank<'a>(
    assets: &'a [AssetWithOptionalAmount],
    search_term: &str,
) -> Vec<&'a AssetWithOptionalAmount> {
    let term = search_term.trim();

    if term.is_empty() {
        let mut ranked: Vec<_> = assets.iter().collect();
        ranked.sort_by(|a, b| {
            priority(b.symbol())
                .cmp(&priority(a.symbol()))
                .then_with(|| locale_cmp(a.symbol(), b.symbol()))
        });
        debug!("Ranked {} assets in default order", ranked.len());
        return ranked;
    }

    let query = SearchQuery::new(term);
    let mut ranked: Vec<_> = assets.iter().filter(|a| query.matches(a)).collect();
    ranked.sort_by(|a, b| {
        let a_starts = query.symbol_starts_with(a.symbol());
        let b_starts = query.symbol_starts_with(b.symbol());
        b_starts
            .cmp(&a_starts)
            .then_with(|| locale_cmp(a.symbol(), b.symbol()))
    });

    debug!(
        "Ranked {} of {} assets for search term {:?}",
        ranked.len(),
        assets.len(),
        term
    );
    ranked
}

/// Whether `asset` passes the filter for `search_term`.
///
/// An empty (after trimming) term matches everything.
pub fn matches_search(asset: &AssetWithOptionalAmount, search_term: &str) -> bool {
    let term = search_term.trim();
    term.is_empty() || SearchQuery::new(term).matches(asset)
}

/// A trimmed, non-empty search term with its derived match forms computed once.
struct SearchQuery<'t> {
    raw: &'t str,
    lowercase: String,
    /// Present only for `0x` terms that are valid hex.
    address: Option<String>,
}

impl<'t> SearchQuery<'t> {
    fn new(raw: &'t str) -> Self {
        let address = if raw.starts_with("0x") {
            canonical_query(raw)
        } else {
            None
        };
        Self {
            raw,
            lowercase: raw.to_lowercase(),
            address,
        }
    }

    fn matches(&self, asset: &AssetWithOptionalAmount) -> bool {
        if asset.symbol().to_lowercase().contains(&self.lowercase) {
            return true;
        }

        let (Some(query), Some(address)) = (&self.address, asset.asset.contract_address()) else {
            return false;
        };
        if address.as_str().len() < self.raw.len() {
            return false;
        }
        // Compare payloads so a term can match anywhere inside the address.
        address
            .canonical()
            .is_some_and(|canonical| canonical[2..].contains(&query[2..]))
    }

    fn symbol_starts_with(&self, symbol: &str) -> bool {
        symbol.to_lowercase().starts_with(&self.lowercase)
    }
}

/// Locale-style string ordering.
///
/// Strings compare case-insensitively first. When they are equal ignoring
/// case, the first position whose case differs decides, lowercase first.
/// Remaining ties fall back to code point order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if folded != Ordering::Equal {
        return folded;
    }

    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca == cb {
            continue;
        }
        match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }

    a.cmp(b)
}
