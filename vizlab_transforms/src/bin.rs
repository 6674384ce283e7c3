// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Equal-width binning of continuous samples.
//!
//! Bins cover `[min(data), max(data)]` with no gaps. Every bin is half-open
//! `[lower, upper)` except the last, which is closed so the maximum sample lands in it.

extern crate alloc;

use alloc::vec::Vec;

/// Errors returned when building bins or assigning samples to them.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum BinError {
    /// No samples were provided.
    #[error("cannot bin an empty sample set")]
    EmptyInput,
    /// A bin count of zero was requested.
    #[error("desired bin count must be at least 1")]
    ZeroBinCount,
    /// A sample was `NaN` or infinite.
    #[error("sample at position {index} is not finite")]
    NonFinite {
        /// Position of the offending sample in the input.
        index: usize,
    },
    /// More bins were requested than [`NumberBins::MAX_BINS`].
    #[error("{requested} bins requested, at most {max} are supported")]
    TooManyBins {
        /// The requested bin count.
        requested: usize,
        /// The supported maximum.
        max: usize,
    },
    /// A value falls outside the binned extent.
    #[error("value {value} lies outside the binned extent [{lo}, {hi}]")]
    OutOfRange {
        /// The value that was looked up.
        value: f64,
        /// Lower end of the extent.
        lo: f64,
        /// Upper end of the extent.
        hi: f64,
    },
}

/// A single bin: a numeric interval plus its position in the bin sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Zero-based position of this bin.
    pub index: usize,
    /// Inclusive lower bound.
    pub lower: f64,
    /// Upper bound; exclusive, except for the last bin of a sequence.
    pub upper: f64,
}

impl Bin {
    /// Midpoint of the bin bounds.
    ///
    /// Box plots place each bin's box at this x position.
    pub fn center(&self) -> f64 {
        self.lower / 2.0 + self.upper / 2.0
    }

    /// Width of the bin in data units.
    ///
    /// Infinite for a single bin spanning more than `f64::MAX`.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Equal-width bins over the extent of a sample set.
///
/// When every sample is equal (`min == max`) there is no extent to divide. In that case a
/// single bin `[min, min + 1]` is produced and every sample maps to index 0. (At magnitudes
/// where `min + 1 == min` that bin has zero width.)
///
/// Bounds are materialized as `lo + i * width`, clamped to the extent. At large magnitudes
/// neighbouring bounds can round to the same value; such bins are empty and lookups skip
/// them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberBins {
    lo: f64,
    hi: f64,
    width: f64,
    count: usize,
}

impl NumberBins {
    /// Width used for the single bin of a degenerate (`min == max`) extent.
    pub const DEGENERATE_WIDTH: f64 = 1.0;

    /// Largest supported bin count.
    pub const MAX_BINS: usize = 1 << 24;

    /// Builds `desired_count` equal-width bins spanning `[min(data), max(data)]`.
    pub fn new(data: &[f64], desired_count: usize) -> Result<Self, BinError> {
        if data.is_empty() {
            return Err(BinError::EmptyInput);
        }
        if desired_count == 0 {
            return Err(BinError::ZeroBinCount);
        }
        if desired_count > Self::MAX_BINS {
            return Err(BinError::TooManyBins {
                requested: desired_count,
                max: Self::MAX_BINS,
            });
        }

        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for (index, &v) in data.iter().enumerate() {
            if !v.is_finite() {
                return Err(BinError::NonFinite { index });
            }
            lo = lo.min(v);
            hi = hi.max(v);
        }

        let bins = if lo == hi {
            tracing::debug!(value = lo, "degenerate extent, using a single bin");
            Self {
                lo,
                hi: lo + Self::DEGENERATE_WIDTH,
                width: Self::DEGENERATE_WIDTH,
                count: 1,
            }
        } else {
            // `hi - lo` can overflow for finite data; the scaled difference cannot once
            // there are two or more bins, and a single bin never reads `width`.
            let n = desired_count as f64;
            Self {
                lo,
                hi,
                width: hi / n - lo / n,
                count: desired_count,
            }
        };
        tracing::debug!(
            samples = data.len(),
            bins = bins.count,
            lo = bins.lo,
            hi = bins.hi,
            "built number bins"
        );
        Ok(bins)
    }

    /// Returns the number of bins.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Always `false`: a successfully built `NumberBins` has at least one bin.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `(lower, upper)` of the whole binned extent.
    pub fn extent(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }

    /// Returns the bin at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<Bin> {
        if index >= self.count {
            return None;
        }
        Some(Bin {
            index,
            lower: self.lower_bound(index),
            upper: self.upper_bound(index),
        })
    }

    /// Iterates the bins in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Bin> + '_ {
        (0..self.count).filter_map(|i| self.get(i))
    }

    /// Collects the bins in ascending order.
    pub fn bins(&self) -> Vec<Bin> {
        self.iter().collect()
    }

    fn lower_bound(&self, index: usize) -> f64 {
        if index == 0 {
            return self.lo;
        }
        // Halved so that `index * width` stays finite for extents wider than `f64::MAX`.
        let half = self.lo / 2.0 + index as f64 * (self.width / 2.0);
        (half * 2.0).clamp(self.lo, self.hi)
    }

    fn upper_bound(&self, index: usize) -> f64 {
        if index + 1 == self.count {
            self.hi
        } else {
            self.lower_bound(index + 1)
        }
    }

    /// Returns the index of the bin containing `value`.
    ///
    /// The upper end of the extent maps to the last bin. Values outside the extent are
    /// rejected rather than clamped.
    pub fn index_of(&self, value: f64) -> Result<usize, BinError> {
        if value.is_nan() || value < self.lo || value > self.hi {
            return Err(BinError::OutOfRange {
                value,
                lo: self.lo,
                hi: self.hi,
            });
        }
        // Bounds are non-decreasing, so the holding bin is the last one whose lower bound
        // is <= value. Bin 0 always qualifies.
        let (mut lo, mut hi) = (1, self.count);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.lower_bound(mid) <= value {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        Ok(lo - 1)
    }

    /// Groups `items` by the bin of `value(item)`.
    ///
    /// Every bin index has a bucket, so empty bins show up with a count of 0. Within a
    /// bucket, items keep their input order.
    pub fn group<T, I, F>(&self, items: I, mut value: F) -> Result<Grouping<T>, BinError>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> f64,
    {
        let mut grouping = Grouping::with_bins(self.count);
        for item in items {
            let index = self.index_of(value(&item))?;
            grouping.buckets[index].push(item);
        }
        Ok(grouping)
    }

    /// Groups plain samples by bin.
    pub fn group_values(&self, data: &[f64]) -> Result<Grouping<f64>, BinError> {
        self.group(data.iter().copied(), |v| *v)
    }
}

/// Builds `desired_count` equal-width bins over `data`.
///
/// See [`NumberBins::new`] for the degenerate-extent policy.
pub fn make_bins(data: &[f64], desired_count: usize) -> Result<Vec<Bin>, BinError> {
    Ok(NumberBins::new(data, desired_count)?.bins())
}

/// Items grouped by bin index.
///
/// This is an ordered mapping from bin index to the items assigned to that bin. It is
/// pre-populated for every bin, so empty bins are present with no items.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping<T> {
    buckets: Vec<Vec<T>>,
}

impl<T> Grouping<T> {
    /// Creates a grouping with `bin_count` empty buckets.
    ///
    /// # Panics
    ///
    /// Panics if the buckets cannot be allocated. Groupings made by [`NumberBins::group`]
    /// have at most [`NumberBins::MAX_BINS`] buckets.
    pub fn with_bins(bin_count: usize) -> Self {
        let mut buckets = Vec::with_capacity(bin_count);
        buckets.resize_with(bin_count, Vec::new);
        Self { buckets }
    }

    /// Returns the number of buckets (one per bin).
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `true` if there are no buckets at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Returns the items in bucket `index`, or an empty slice for an unknown index.
    pub fn get(&self, index: usize) -> &[T] {
        self.buckets.get(index).map_or(&[][..], Vec::as_slice)
    }

    /// Number of items in bucket `index`.
    pub fn count(&self, index: usize) -> usize {
        self.get(index).len()
    }

    /// Iterates `(bin index, items)` in ascending bin order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[T])> + '_ {
        self.buckets.iter().map(Vec::as_slice).enumerate()
    }

    /// Consumes the grouping, returning the buckets in bin order.
    pub fn into_buckets(self) -> Vec<Vec<T>> {
        self.buckets
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn bins_are_contiguous_and_end_exactly_at_max() {
        let data = [0.3, 0.1, 0.9, 0.5, 0.7];
        let bins = make_bins(&data, 4).unwrap();
        assert_eq!(bins.len(), 4);
        assert_eq!(bins[0].lower, 0.1);
        assert_eq!(bins[3].upper, 0.9);
        for pair in bins.windows(2) {
            assert_eq!(pair[0].upper, pair[1].lower, "gap between {pair:?}");
            assert!(pair[0].lower < pair[1].lower, "bins not ascending");
        }
        for (i, b) in bins.iter().enumerate() {
            assert_eq!(b.index, i);
        }
    }

    #[test]
    fn maximum_maps_to_last_bin() {
        let bins = NumberBins::new(&[0.0, 10.0], 5).unwrap();
        assert_eq!(bins.index_of(10.0).unwrap(), 4);
        assert_eq!(bins.index_of(0.0).unwrap(), 0);
        // Interior boundaries belong to the bin on their right.
        assert_eq!(bins.index_of(2.0).unwrap(), 1);
        assert_eq!(bins.index_of(7.999).unwrap(), 3);
    }

    #[test]
    fn extent_wider_than_f64_max_stays_finite() {
        let bins = NumberBins::new(&[-1e308, 1e308], 4).unwrap();
        let list = bins.bins();
        for b in &list {
            assert!(b.lower.is_finite() && b.upper.is_finite(), "{b:?}");
            assert!(b.center().is_finite(), "{b:?}");
        }
        for pair in list.windows(2) {
            assert_eq!(pair[0].upper, pair[1].lower);
            assert!(pair[0].lower < pair[1].lower);
        }
        assert_eq!(bins.index_of(-1e308).unwrap(), 0);
        assert_eq!(bins.index_of(0.0).unwrap(), 2);
        assert_eq!(bins.index_of(1e308).unwrap(), 3);
    }

    #[test]
    fn collapsed_bins_at_large_magnitude_are_skipped() {
        // Bounds are spaced below the f64 resolution at 1e15, so most bins have zero width.
        let lo = 1e15;
        let bins = NumberBins::new(&[lo, lo + 1.0], 1000).unwrap();
        for v in [lo, lo + 0.125, lo + 0.5, lo + 0.875, lo + 1.0] {
            let index = bins.index_of(v).unwrap();
            let b = bins.get(index).unwrap();
            assert!(b.lower <= v, "{v} below {b:?}");
            assert!(v < b.upper || index == bins.len() - 1, "{v} above {b:?}");
        }
        assert_eq!(bins.index_of(lo + 1.0).unwrap(), 999);
    }

    #[test]
    fn negative_extent_maps_boundaries_to_the_right() {
        let bins = NumberBins::new(&[-10.0, -2.0], 4).unwrap();
        assert_eq!(bins.index_of(-10.0).unwrap(), 0);
        assert_eq!(bins.index_of(-8.0).unwrap(), 1);
        assert_eq!(bins.index_of(-4.5).unwrap(), 2);
        assert_eq!(bins.index_of(-2.0).unwrap(), 3);
    }

    #[test]
    fn degenerate_extent_yields_single_unit_bin() {
        let bins = NumberBins::new(&[3.0, 3.0, 3.0], 20).unwrap();
        assert_eq!(bins.len(), 1);
        assert_eq!(
            bins.get(0),
            Some(Bin {
                index: 0,
                lower: 3.0,
                upper: 4.0
            })
        );
        assert_eq!(bins.index_of(3.0).unwrap(), 0);
    }

    #[test]
    fn rejects_empty_zero_count_and_non_finite_input() {
        assert_eq!(NumberBins::new(&[], 3), Err(BinError::EmptyInput));
        assert_eq!(NumberBins::new(&[1.0], 0), Err(BinError::ZeroBinCount));
        assert_eq!(
            NumberBins::new(&[1.0, f64::NAN], 3),
            Err(BinError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn rejects_bin_counts_above_the_cap() {
        assert_eq!(
            NumberBins::new(&[0.0, 1.0], usize::MAX),
            Err(BinError::TooManyBins {
                requested: usize::MAX,
                max: NumberBins::MAX_BINS,
            })
        );
        assert_eq!(
            make_bins(&[0.0, 1.0], NumberBins::MAX_BINS + 1),
            Err(BinError::TooManyBins {
                requested: NumberBins::MAX_BINS + 1,
                max: NumberBins::MAX_BINS,
            })
        );
    }

    #[test]
    fn out_of_range_lookup_is_an_error() {
        let bins = NumberBins::new(&[1.0, 2.0], 2).unwrap();
        assert!(matches!(
            bins.index_of(2.5),
            Err(BinError::OutOfRange { value, .. }) if value == 2.5
        ));
        assert!(bins.index_of(0.5).is_err());
        assert!(bins.index_of(f64::NAN).is_err());
    }

    #[test]
    fn grouping_keeps_empty_buckets_and_input_order() {
        let data = [0.0, 9.0, 1.0, 10.0, 0.5];
        let bins = NumberBins::new(&data, 5).unwrap();
        let grouping = bins.group_values(&data).unwrap();
        assert_eq!(grouping.len(), 5);
        assert_eq!(grouping.get(0), &[0.0, 1.0, 0.5]);
        assert_eq!(grouping.count(1), 0);
        assert_eq!(grouping.count(2), 0);
        assert_eq!(grouping.count(3), 0);
        assert_eq!(grouping.get(4), &[9.0, 10.0]);
        assert_eq!(grouping.get(99), &[] as &[f64]);
    }

    #[test]
    fn group_records_by_accessor() {
        #[derive(Debug, Clone, PartialEq)]
        struct Diamond {
            carat: f64,
            price: f64,
        }
        let rows = vec![
            Diamond {
                carat: 0.2,
                price: 300.0,
            },
            Diamond {
                carat: 1.2,
                price: 5000.0,
            },
        ];
        let carats: Vec<f64> = rows.iter().map(|d| d.carat).collect();
        let bins = NumberBins::new(&carats, 2).unwrap();
        let grouping = bins.group(rows.clone(), |d| d.carat).unwrap();
        assert_eq!(grouping.get(0), &rows[..1]);
        assert_eq!(grouping.get(1), &rows[1..]);
    }
}
