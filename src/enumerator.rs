use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::types::{Length, LengthQuantity, ScoredResult};

/// Number of ranked results handed back to callers.
pub const MAX_RESULTS: usize = 5;

/// Ranks the best single-bar cuts for `desired`. Shorthand for
/// `Enumerator::new(raw_length, desired)?.solve()`.
pub fn find_combinations(raw_length: Length, desired: &LengthQuantity) -> Result<Vec<ScoredResult>> {
    Ok(Enumerator::new(raw_length, desired)?.solve())
}

pub struct Enumerator {
    raw_length: Length,
    /// Lengths with a positive quantity, ascending.
    available: Vec<(Length, u32)>,
}

impl Enumerator {
    pub fn new(raw_length: Length, desired: &LengthQuantity) -> Result<Self> {
        if raw_length == 0 {
            return Err(Error::InvalidInput(
                "raw length must be positive".to_string(),
            ));
        }

        let available: Vec<(Length, u32)> = desired
            .iter()
            .filter(|&(_, &qty)| qty > 0)
            .map(|(&length, &qty)| (length, qty))
            .collect();

        if available.iter().any(|&(length, _)| length == 0) {
            return Err(Error::InvalidInput(
                "piece lengths must be positive".to_string(),
            ));
        }

        Ok(Self {
            raw_length,
            available,
        })
    }

    /// Best results first, at most [`MAX_RESULTS`].
    ///
    /// Ranked by efficiency descending, then waste ascending. Equal keys keep
    /// generation order, so this matches a stable sort of [`Self::enumerate`].
    pub fn solve(&self) -> Vec<ScoredResult> {
        let mut top: Vec<ScoredResult> = Vec::with_capacity(MAX_RESULTS + 1);
        let mut feasible = 0usize;

        self.walk(|combo| {
            feasible += 1;
            let candidate = ScoredResult::new(combo.to_vec(), self.raw_length);
            let pos = top.partition_point(|r| rank(r, &candidate) != Ordering::Greater);
            if pos < MAX_RESULTS {
                top.insert(pos, candidate);
                top.truncate(MAX_RESULTS);
            }
        });

        tracing::debug!(
            raw_length = self.raw_length,
            candidates = self.available.len(),
            feasible,
            returned = top.len(),
            "ranked combinations"
        );

        top
    }

    /// Every feasible combination, grouped by piece count and lexicographic
    /// (by candidate index) within a group.
    pub fn enumerate(&self) -> Vec<ScoredResult> {
        let mut results = Vec::new();
        self.walk(|combo| results.push(ScoredResult::new(combo.to_vec(), self.raw_length)));
        results
    }

    fn walk(&self, mut visit: impl FnMut(&[Length])) {
        let Some(&(smallest, _)) = self.available.first() else {
            return;
        };

        let max_pieces: u64 = self.available.iter().map(|&(_, qty)| qty as u64).sum();
        // No multiset of this many pieces fits once the smallest length alone overflows
        let max_fit = (self.raw_length / smallest) as u64;
        let max_size = max_pieces.min(max_fit) as usize;

        tracing::debug!(
            raw_length = self.raw_length,
            max_pieces,
            max_size,
            "walking combinations"
        );

        let mut used = vec![0u32; self.available.len()];
        let mut combo = Vec::with_capacity(max_size);
        for size in 1..=max_size {
            self.recurse(size, 0, 0, &mut used, &mut combo, &mut visit);
        }
    }

    fn recurse(
        &self,
        size: usize,
        start: usize,
        total: Length,
        used: &mut [u32],
        combo: &mut Vec<Length>,
        visit: &mut impl FnMut(&[Length]),
    ) {
        if combo.len() == size {
            visit(combo.as_slice());
            return;
        }

        let remaining = (self.raw_length - total) as u64;
        let slots = (size - combo.len()) as u64;

        for idx in start..self.available.len() {
            let (length, qty) = self.available[idx];

            // Remaining slots take lengths >= this one, and later candidates are longer
            if slots * length as u64 > remaining {
                break;
            }
            if used[idx] == qty {
                continue;
            }

            used[idx] += 1;
            combo.push(length);
            self.recurse(size, idx, total + length, used, combo, visit);
            combo.pop();
            used[idx] -= 1;
        }
    }
}

/// `Less` when `a` ranks ahead of `b`.
fn rank(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    b.efficiency
        .total_cmp(&a.efficiency)
        .then(a.waste.cmp(&b.waste))
}
