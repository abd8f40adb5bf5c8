use std::ops::RangeInclusive;

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::types::{CATALOG, Length, LengthQuantity};

/// Piece counts tried when building a suggestion.
const SUGGESTION_SIZES: RangeInclusive<usize> = 2..=4;

/// Suggests quantities over [`CATALOG`] for a high-efficiency single cut.
pub fn suggest(raw_length: Length) -> Result<LengthQuantity> {
    suggest_from(&CATALOG, raw_length)
}

/// Finds the 2 to 4 piece multiset of `catalog` lengths that uses the most of
/// `raw_length`, and returns its counts with every other catalog length at 0.
/// The first multiset reaching the best total wins.
pub fn suggest_from(catalog: &[Length], raw_length: Length) -> Result<LengthQuantity> {
    if raw_length == 0 {
        return Err(Error::InvalidInput(
            "raw length must be positive".to_string(),
        ));
    }
    if catalog.contains(&0) {
        return Err(Error::InvalidInput(
            "catalog lengths must be positive".to_string(),
        ));
    }

    let mut best: Option<(u64, Vec<Length>)> = None;
    for size in SUGGESTION_SIZES {
        for combo in catalog.iter().copied().combinations_with_replacement(size) {
            let total: u64 = combo.iter().map(|&l| l as u64).sum();
            if total > raw_length as u64 {
                continue;
            }
            if best.as_ref().is_none_or(|(best_total, _)| total > *best_total) {
                best = Some((total, combo));
            }
        }
    }

    let mut suggested: LengthQuantity = catalog.iter().map(|&length| (length, 0)).collect();
    match best {
        Some((total, combo)) => {
            tracing::debug!(
                raw_length,
                total,
                combination = ?combo,
                "suggested catalog combination"
            );
            for (length, count) in combo.into_iter().counts() {
                suggested.insert(length, count as u32);
            }
        }
        None => tracing::debug!(raw_length, "no catalog combination fits"),
    }

    Ok(suggested)
}
