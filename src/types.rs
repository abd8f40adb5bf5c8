use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Length in millimeters.
pub type Length = u32;

/// Desired quantity per piece length. Ascending key order is the candidate order.
pub type LengthQuantity = BTreeMap<Length, u32>;

/// Standard lengths offered by the suggester.
pub const CATALOG: [Length; 20] = [
    515, 1025, 1145, 1835, 2045, 2075, 2165, 2515, 2835, 3575, 3695, 3755, 3815, 4085, 4155, 4225,
    5015, 5375, 5515, 6000,
];

pub const MIN_RAW_LENGTH: Length = 100;
pub const MAX_RAW_LENGTH: Length = 10_000;
pub const DEFAULT_RAW_LENGTH: Length = 6000;
pub const MAX_QUANTITY: u32 = 20;

pub fn validate_raw_length(raw_length: Length) -> Result<Length> {
    if !(MIN_RAW_LENGTH..=MAX_RAW_LENGTH).contains(&raw_length) {
        return Err(Error::OutOfRange {
            what: "raw length",
            value: raw_length,
            min: MIN_RAW_LENGTH,
            max: MAX_RAW_LENGTH,
        });
    }
    Ok(raw_length)
}

pub fn validate_quantity(qty: u32) -> Result<u32> {
    if qty > MAX_QUANTITY {
        return Err(Error::OutOfRange {
            what: "quantity",
            value: qty,
            min: 0,
            max: MAX_QUANTITY,
        });
    }
    Ok(qty)
}

/// Only catalog lengths are accepted as cuts; this keeps the search small.
pub fn validate_cut_length(length: Length) -> Result<Length> {
    if CATALOG.binary_search(&length).is_err() {
        return Err(Error::UnknownLength(length));
    }
    Ok(length)
}

/// Validates requested cuts and collects them into a [`LengthQuantity`].
pub fn desired_from_cuts(cuts: impl IntoIterator<Item = CutQuantity>) -> Result<LengthQuantity> {
    let mut desired = LengthQuantity::new();
    for c in cuts {
        let length = validate_cut_length(c.length)?;
        let qty = validate_quantity(c.qty)?;
        if desired.insert(length, qty).is_some() {
            return Err(Error::DuplicateLength(length));
        }
    }
    Ok(desired)
}

/// A ranked way of cutting one raw bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult {
    pub combination: Vec<Length>,
    pub total_length: Length,
    pub waste: Length,
    pub efficiency: f64,
    pub pieces: usize,
}

impl ScoredResult {
    /// Scores `combination` against `raw_length`. The combination must fit.
    pub fn new(combination: Vec<Length>, raw_length: Length) -> Self {
        let total_length: Length = combination.iter().sum();
        debug_assert!(total_length <= raw_length);
        Self {
            pieces: combination.len(),
            waste: raw_length - total_length,
            efficiency: total_length as f64 / raw_length as f64 * 100.0,
            total_length,
            combination,
        }
    }
}

/// One `length: qty` entry as it travels over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CutQuantity {
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub length: Length,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub qty: u32,
}

pub fn to_cut_quantities(quantities: &LengthQuantity) -> Vec<CutQuantity> {
    quantities
        .iter()
        .map(|(&length, &qty)| CutQuantity { length, qty })
        .collect()
}

/// Accepts `3` as well as `3.0`; rejects fractions and negatives.
pub fn deserialize_u32_from_number<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        return Err(serde::de::Error::custom(format!(
            "expected a non-negative integer, got {value}"
        )));
    }
    Ok(value as u32)
}
