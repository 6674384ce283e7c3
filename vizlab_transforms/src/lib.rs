// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric chart transforms.
//!
//! This crate turns in-memory samples into chart-ready derived data:
//! - **Bins**: equal-width buckets over the sample extent, plus a grouping of
//!   samples by bin index.
//! - **Summaries**: per-bin median, quartiles, IQR fences and outliers for box plots.
//! - **Swarm**: greedy vertical offsets that keep nearby beeswarm points from overlapping.
//!
//! Smaller helpers cover histogram frequencies, diverging bar extents and the
//! bar orderings used by sorted-bar transitions.
//!
//! Everything here is a pure function of its inputs: there is no caching, and every
//! call recomputes from scratch. Rendering is out of scope; results are plain values
//! for a renderer to read.

#![no_std]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

mod bin;
mod diverging;
#[cfg(not(feature = "std"))]
mod float;
mod histogram;
mod ordering;
mod summary;
mod swarm;

pub use bin::{Bin, BinError, Grouping, NumberBins, make_bins};
pub use diverging::{Change, ChangeScale, sort_by_delta};
pub use histogram::{Frequency, histogram, max_count};
pub use ordering::{BarOrder, LabeledValue};
pub use summary::{
    BinnedSummary, BoxStats, SummaryError, first_quartile, median, summarize, summarize_values,
    third_quartile,
};
pub use swarm::{
    DEFAULT_PROXIMITY, SwarmError, SwarmLayout, SwarmSpec, WeightedItem, compute_offsets,
    sort_by_position,
};
