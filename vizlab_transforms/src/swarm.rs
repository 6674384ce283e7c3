// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy beeswarm (dodge) layout.
//!
//! Items are placed one at a time in input order. Each item is lifted by `radius / 2` for
//! every already-placed item whose position is closer than the proximity threshold. The
//! result depends on input order: this is a one-pass stacking, not a symmetric dodge.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Default distance (in data units) under which two items count as overlapping.
///
/// This is independent of the mark radius.
pub const DEFAULT_PROXIMITY: f64 = 24.0;

/// Errors returned by the swarm layout.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SwarmError {
    /// No items were provided.
    #[error("cannot lay out an empty set of items")]
    EmptyInput,
    /// An item position was `NaN` or infinite.
    #[error("item at position {index} has a non-finite position")]
    NonFinite {
        /// Position of the offending item in the input.
        index: usize,
    },
    /// The radius was negative or not finite.
    #[error("radius {0} must be finite and non-negative")]
    InvalidRadius(f64),
    /// The proximity threshold was not a finite positive number.
    #[error("proximity threshold {0} must be finite and positive")]
    InvalidProximity(f64),
}

/// A 1-D position with a stable identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedItem {
    /// Stable key for the item (for example a row key).
    pub key: u64,
    /// Position along the swarm axis.
    pub position: f64,
}

impl WeightedItem {
    /// Creates an item.
    pub fn new(key: u64, position: f64) -> Self {
        Self { key, position }
    }
}

/// Sorts items by ascending position, keeping the relative order of ties.
pub fn sort_by_position(items: &mut [WeightedItem]) {
    items.sort_by(|a, b| a.position.total_cmp(&b.position));
}

/// Computes a vertical offset per item, in input order.
///
/// Item `k` gets `n * radius / 2`, where `n` is the number of items before it whose
/// position differs from its own by less than `proximity`.
pub fn compute_offsets(
    items: &[WeightedItem],
    radius: f64,
    proximity: f64,
) -> Result<Vec<f64>, SwarmError> {
    if items.is_empty() {
        return Err(SwarmError::EmptyInput);
    }
    if !radius.is_finite() || radius < 0.0 {
        return Err(SwarmError::InvalidRadius(radius));
    }
    if !proximity.is_finite() || proximity <= 0.0 {
        return Err(SwarmError::InvalidProximity(proximity));
    }
    if let Some(index) = items.iter().position(|it| !it.position.is_finite()) {
        return Err(SwarmError::NonFinite { index });
    }

    let step = radius / 2.0;
    // Positions placed so far, ascending.
    let mut placed: Vec<f64> = Vec::with_capacity(items.len());
    let mut offsets = Vec::with_capacity(items.len());

    for item in items {
        let p = item.position;
        let near = |q: f64| (p - q).abs() < proximity;

        // `|p - q|` is monotone on each side of `p`, so the near items form one contiguous
        // run of `placed`. Both searches use the exact predicate.
        let start = placed.partition_point(|&q| q < p && !near(q));
        let end = placed.partition_point(|&q| q <= p || near(q));
        let count = end - start;

        offsets.push(count as f64 * step);
        let at = placed.partition_point(|&q| q <= p);
        placed.insert(at, p);
    }

    tracing::debug!(items = items.len(), radius, proximity, "computed swarm offsets");
    Ok(offsets)
}

/// Parameters for a beeswarm layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwarmSpec {
    /// Mark radius; each overlap lifts an item by half of it.
    pub radius: f64,
    /// Distance under which two items count as overlapping.
    pub proximity: f64,
}

impl SwarmSpec {
    /// Creates a spec with the given radius and [`DEFAULT_PROXIMITY`].
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            proximity: DEFAULT_PROXIMITY,
        }
    }

    /// Sets the proximity threshold.
    pub fn with_proximity(mut self, proximity: f64) -> Self {
        self.proximity = proximity;
        self
    }

    /// Lays out `items`.
    pub fn layout(&self, items: &[WeightedItem]) -> Result<SwarmLayout, SwarmError> {
        let offsets = compute_offsets(items, self.radius, self.proximity)?;
        let mut by_key = HashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if let Entry::Vacant(e) = by_key.entry(item.key) {
                e.insert(i);
            }
        }
        Ok(SwarmLayout {
            items: items.to_vec(),
            offsets,
            by_key,
        })
    }
}

/// The result of a beeswarm layout.
#[derive(Debug, Clone)]
pub struct SwarmLayout {
    items: Vec<WeightedItem>,
    offsets: Vec<f64>,
    by_key: HashMap<u64, usize>,
}

impl SwarmLayout {
    /// Offsets aligned with the input items.
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Offset for the item with `key`.
    ///
    /// If several items share a key, the first one wins.
    pub fn offset(&self, key: u64) -> Option<f64> {
        self.by_key.get(&key).map(|&i| self.offsets[i])
    }

    /// Iterates `(item, offset)` in input order.
    pub fn iter(&self) -> impl Iterator<Item = (WeightedItem, f64)> + '_ {
        self.items.iter().copied().zip(self.offsets.iter().copied())
    }

    /// Number of items laid out.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing was laid out.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
