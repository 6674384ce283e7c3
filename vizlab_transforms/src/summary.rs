// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-bin quantile summaries for box plots.
//!
//! Quartiles use inclusive slices of the sorted values:
//! - Q1 is the median of `sorted[0 ..= floor(n * 0.25)]`,
//! - Q3 is the median of `sorted[floor(n * 0.75) ..]`.
//!
//! This is not Tukey's hinges: both slices include the element at the split index, which
//! shifts the quartiles (and so the outlier fences) for small bins.

extern crate alloc;

use alloc::vec::Vec;

use crate::bin::{Bin, Grouping};

/// Multiplier applied to the IQR to place the outlier fences.
const FENCE_FACTOR: f64 = 1.5;

/// Errors returned by [`summarize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SummaryError {
    /// The grouping does not have exactly one bucket per bin.
    #[error("{bins} bins were given but the grouping has {groups} buckets")]
    BinCountMismatch {
        /// Number of bins passed in.
        bins: usize,
        /// Number of buckets in the grouping.
        groups: usize,
    },
    /// A grouped value was `NaN` or infinite.
    #[error("value {position} of bin {bin} is not finite")]
    NonFinite {
        /// Bin index holding the value.
        bin: usize,
        /// Position of the value within its bucket.
        position: usize,
    },
}

/// Median of an ascending slice.
///
/// Returns `None` for an empty slice.
pub fn median(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    if n % 2 == 0 {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Some(sorted[n / 2])
    }
}

/// First quartile: the median of `sorted[0 ..= floor(n * 0.25)]`.
pub fn first_quartile(sorted: &[f64]) -> Option<f64> {
    // `n / 4` is `floor(n * 0.25)` without a float round trip.
    let end = sorted.len() / 4;
    median(sorted.get(..=end)?)
}

/// Third quartile: the median of `sorted[floor(n * 0.75) ..]`.
pub fn third_quartile(sorted: &[f64]) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let start = sorted.len() * 3 / 4;
    median(&sorted[start..])
}

/// Box-plot statistics for a non-empty set of values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStats {
    /// Median value.
    pub median: f64,
    /// First quartile.
    pub first_quartile: f64,
    /// Third quartile.
    pub third_quartile: f64,
    /// Interquartile range, `Q3 - Q1`.
    pub iqr: f64,
    /// `Q1 - 1.5 * IQR`.
    pub lower_fence: f64,
    /// `Q3 + 1.5 * IQR`.
    pub upper_fence: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl BoxStats {
    /// Computes statistics for an ascending slice, or `None` if it is empty.
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        let median = median(sorted)?;
        let first_quartile = first_quartile(sorted)?;
        let third_quartile = third_quartile(sorted)?;
        let iqr = third_quartile - first_quartile;
        Some(Self {
            median,
            first_quartile,
            third_quartile,
            iqr,
            lower_fence: first_quartile - FENCE_FACTOR * iqr,
            upper_fence: third_quartile + FENCE_FACTOR * iqr,
            min: *sorted.first()?,
            max: *sorted.last()?,
        })
    }

    /// Returns `true` if `value` lies strictly outside the fences.
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower_fence || value > self.upper_fence
    }

    /// Lower whisker end: the lower fence, clamped to the smallest value.
    pub fn whisker_low(&self) -> f64 {
        self.lower_fence.max(self.min)
    }

    /// Upper whisker end: the upper fence, clamped to the largest value.
    pub fn whisker_high(&self) -> f64 {
        self.upper_fence.min(self.max)
    }
}

/// Summary of the items that fell into one bin.
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedSummary<T> {
    /// The bin being summarized.
    pub bin: Bin,
    /// x position of the bin (its midpoint).
    pub x: f64,
    /// The bin's values, ascending.
    pub values: Vec<f64>,
    /// Statistics, or `None` when the bin is empty.
    pub stats: Option<BoxStats>,
    /// Items outside the IQR fences, in input order.
    ///
    /// Always empty for bins with fewer than two values.
    pub outliers: Vec<T>,
}

impl<T> BinnedSummary<T> {
    /// Number of values in the bin.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Whether a quartile box (and whiskers) should be drawn for this bin.
    pub fn has_box(&self) -> bool {
        self.count() > 1
    }

    /// Whether a median mark should be drawn for this bin.
    pub fn has_median(&self) -> bool {
        self.count() > 0
    }
}

/// Summarizes each bin of `grouping`, reading values through `value`.
///
/// Produces one summary per bin, empty bins included.
pub fn summarize<T, F>(
    bins: &[Bin],
    grouping: &Grouping<T>,
    mut value: F,
) -> Result<Vec<BinnedSummary<T>>, SummaryError>
where
    T: Clone,
    F: FnMut(&T) -> f64,
{
    if bins.len() != grouping.len() {
        return Err(SummaryError::BinCountMismatch {
            bins: bins.len(),
            groups: grouping.len(),
        });
    }

    let mut out = Vec::with_capacity(bins.len());
    for (bin, (index, items)) in bins.iter().zip(grouping.iter()) {
        let mut values = Vec::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            let v = value(item);
            if !v.is_finite() {
                return Err(SummaryError::NonFinite {
                    bin: index,
                    position,
                });
            }
            values.push(v);
        }
        values.sort_by(f64::total_cmp);

        let stats = BoxStats::from_sorted(&values);
        let outliers = match stats {
            Some(stats) if values.len() > 1 => items
                .iter()
                .filter(|item| stats.is_outlier(value(*item)))
                .cloned()
                .collect(),
            _ => Vec::new(),
        };

        out.push(BinnedSummary {
            bin: *bin,
            x: bin.center(),
            values,
            stats,
            outliers,
        });
    }
    tracing::debug!(bins = out.len(), "summarized bins");
    Ok(out)
}

/// Summarizes plain samples grouped by bin.
pub fn summarize_values(
    bins: &[Bin],
    grouping: &Grouping<f64>,
) -> Result<Vec<BinnedSummary<f64>>, SummaryError> {
    summarize(bins, grouping, |v| *v)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::bin::NumberBins;

    #[test]
    fn median_of_odd_and_even_lengths() {
        assert_eq!(median(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
        assert_eq!(median(&[7.0]), Some(7.0));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn quartiles_use_inclusive_slices() {
        let sorted: Vec<f64> = (1..=10).map(f64::from).collect();
        // floor(10 * 0.25) = 2, so Q1 = median([1, 2, 3]).
        assert_eq!(first_quartile(&sorted), Some(2.0));
        // floor(10 * 0.75) = 7, so Q3 = median([8, 9, 10]).
        assert_eq!(third_quartile(&sorted), Some(9.0));

        let stats = BoxStats::from_sorted(&sorted).unwrap();
        assert_eq!(stats.iqr, 7.0);
        assert_eq!(stats.lower_fence, 2.0 - 1.5 * 7.0);
        assert_eq!(stats.upper_fence, 9.0 + 1.5 * 7.0);
        assert_eq!(stats.median, 5.5);
    }

    #[test]
    fn quartiles_of_tiny_slices() {
        assert_eq!(first_quartile(&[4.0]), Some(4.0));
        assert_eq!(third_quartile(&[4.0]), Some(4.0));
        // n = 2: Q1 = median([a]), Q3 = median([b]).
        assert_eq!(first_quartile(&[1.0, 3.0]), Some(1.0));
        assert_eq!(third_quartile(&[1.0, 3.0]), Some(3.0));
        assert_eq!(first_quartile(&[]), None);
        assert_eq!(third_quartile(&[]), None);
    }

    #[test]
    fn whiskers_clamp_to_observed_range() {
        let stats = BoxStats::from_sorted(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(stats.whisker_low(), 1.0);
        assert_eq!(stats.whisker_high(), 4.0);
    }

    #[test]
    fn outliers_are_flagged_beyond_the_fences() {
        let mut values: Vec<f64> = (1..=10).map(f64::from).collect();
        values.push(100.0);
        let number_bins = NumberBins::new(&[0.0, 1.0], 1).unwrap();
        let items: Vec<(f64, f64)> = values.iter().map(|&v| (0.5, v)).collect();
        let grouping = number_bins.group(items, |(x, _)| *x).unwrap();
        let bins = number_bins.bins();

        let summaries = summarize(&bins, &grouping, |(_, price)| *price).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].outliers, vec![(0.5, 100.0)]);
        assert_eq!(summaries[0].x, 0.5);
        assert!(summaries[0].has_box());
    }

    #[test]
    fn single_value_bin_has_no_outliers_and_empty_bin_has_no_stats() {
        let bins = NumberBins::new(&[0.0, 10.0], 2).unwrap();
        let grouping = bins.group_values(&[10.0]).unwrap();
        let summaries = summarize_values(&bins.bins(), &grouping).unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].count(), 0);
        assert_eq!(summaries[0].stats, None);
        assert!(!summaries[0].has_median());

        assert_eq!(summaries[1].count(), 1);
        assert!(summaries[1].outliers.is_empty());
        assert!(!summaries[1].has_box());
        assert!(summaries[1].has_median());
        assert_eq!(summaries[1].stats.map(|s| s.median), Some(10.0));
    }

    #[test]
    fn mismatched_grouping_is_rejected() {
        let bins = make_two_bins();
        let grouping: Grouping<f64> = Grouping::with_bins(3);
        assert_eq!(
            summarize_values(&bins, &grouping),
            Err(SummaryError::BinCountMismatch { bins: 2, groups: 3 })
        );
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let bins = make_two_bins();
        let grouping = NumberBins::new(&[0.0, 1.0], 2)
            .unwrap()
            .group(vec![(0.0, 1.0), (0.9, f64::INFINITY)], |(x, _)| *x)
            .unwrap();
        assert_eq!(
            summarize(&bins, &grouping, |(_, y)| *y),
            Err(SummaryError::NonFinite {
                bin: 1,
                position: 0
            })
        );
    }

    fn make_two_bins() -> Vec<Bin> {
        NumberBins::new(&[0.0, 1.0], 2).unwrap().bins()
    }
}
