//! Weighted median over a version-count histogram.
//!
//! The histogram is treated as a multiset where each key occurs as many
//! times as its count. The policy is position-based on raw cumulative
//! counts, not true order statistics; it matches the dataset's historical
//! reports and must not be swapped for a textbook median.

use log::trace;
use std::collections::BTreeMap;

/// Result of the weighted-median scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightedMedian {
    /// Odd total: the single key at the median position
    Single(u32),

    /// Even total: the ascending and descending scan results
    Between(u32, u32),
}

impl WeightedMedian {
    /// Resolve to a single numeric value
    ///
    /// For `Between`, the arithmetic mean of the two keys.
    pub fn resolve(&self) -> f64 {
        match *self {
            WeightedMedian::Single(key) => key as f64,
            WeightedMedian::Between(lower, upper) => (lower as f64 + upper as f64) / 2.0,
        }
    }
}

/// Compute the weighted median of a histogram
///
/// **Public** - pure function, used by the aggregator's report derivation
///
/// # Arguments
/// * `histogram` - version count -> occurrence count
///
/// # Returns
/// `None` when the histogram holds no occurrences at all.
///
/// The policy, preserved verbatim from the dataset's historical analysis:
/// * `median_pos = total / 2` (integer division)
/// * odd total: first key (ascending) whose cumulative count strictly
///   exceeds `median_pos`
/// * even total: first key ascending with cumulative count >= `median_pos`
///   paired with first key descending with cumulative count >= `median_pos`
pub fn weighted_median(histogram: &BTreeMap<u32, u64>) -> Option<WeightedMedian> {
    let total: u64 = histogram.values().sum();
    if total == 0 {
        return None;
    }

    let median_pos = total / 2;
    trace!("weighted median: total={}, median_pos={}", total, median_pos);

    if total % 2 == 1 {
        scan_ascending(histogram, median_pos, true).map(WeightedMedian::Single)
    } else {
        let lower = scan_ascending(histogram, median_pos, false)?;
        let upper = scan_descending(histogram, median_pos)?;
        Some(WeightedMedian::Between(lower, upper))
    }
}

/// First key in ascending order whose cumulative count passes `pos`
///
/// **Private** - `strict` selects `> pos` over `>= pos`
fn scan_ascending(histogram: &BTreeMap<u32, u64>, pos: u64, strict: bool) -> Option<u32> {
    let mut cumulative = 0u64;
    for (&key, &count) in histogram.iter() {
        cumulative += count;
        let reached = if strict {
            cumulative > pos
        } else {
            cumulative >= pos
        };
        if reached {
            return Some(key);
        }
    }
    None
}

/// First key in descending order whose cumulative count reaches `pos`
///
/// **Private** - even-total upper bound scan
fn scan_descending(histogram: &BTreeMap<u32, u64>, pos: u64) -> Option<u32> {
    let mut cumulative = 0u64;
    for (&key, &count) in histogram.iter().rev() {
        cumulative += count;
        if cumulative >= pos {
            return Some(key);
        }
    }
    None
}
