// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Histogram frequencies.

extern crate alloc;

use alloc::vec::Vec;

use crate::bin::{Bin, BinError, NumberBins};

/// Number of samples that fell into a bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frequency {
    /// The bin.
    pub bin: Bin,
    /// Samples assigned to it.
    pub count: usize,
}

/// Bins `data` into `desired_count` equal-width bins and counts each one.
///
/// Every bin is reported, in ascending order, including those with no samples.
pub fn histogram(data: &[f64], desired_count: usize) -> Result<Vec<Frequency>, BinError> {
    let bins = NumberBins::new(data, desired_count)?;
    let mut counts = Vec::new();
    counts.resize(bins.len(), 0_usize);
    for &v in data {
        counts[bins.index_of(v)?] += 1;
    }
    Ok(bins
        .iter()
        .zip(counts)
        .map(|(bin, count)| Frequency { bin, count })
        .collect())
}

/// Largest count in `frequencies`, or 0 if there are none.
///
/// Useful for sizing the y domain.
pub fn max_count(frequencies: &[Frequency]) -> usize {
    frequencies.iter().map(|f| f.count).max().unwrap_or(0)
}
