// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar orderings for sorted bar charts.

extern crate alloc;

use alloc::string::String;

/// A labeled bar value, such as a letter and its frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledValue {
    /// Category label.
    pub label: String,
    /// Bar value.
    pub value: f64,
}

impl LabeledValue {
    /// Creates a labeled value.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// The order in which bars are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarOrder {
    /// By label, ascending.
    Alphabetical,
    /// By value, largest first.
    #[default]
    FrequencyDescending,
    /// By value, smallest first.
    FrequencyAscending,
}

impl BarOrder {
    /// Every ordering, in cycle order.
    pub const ALL: [Self; 3] = [
        Self::Alphabetical,
        Self::FrequencyDescending,
        Self::FrequencyAscending,
    ];

    /// Human-readable name.
    pub fn title(self) -> &'static str {
        match self {
            Self::Alphabetical => "Alphabetical",
            Self::FrequencyDescending => "Frequency, Descending",
            Self::FrequencyAscending => "Frequency, Ascending",
        }
    }

    /// The ordering that follows this one when cycling.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Alphabetical => Self::FrequencyDescending,
            Self::FrequencyDescending => Self::FrequencyAscending,
            Self::FrequencyAscending => Self::Alphabetical,
        }
    }

    /// Sorts `values` in place. Ties keep their relative order.
    ///
    /// Values are compared with `f64::total_cmp`, so `NaN` sorts after every number when
    /// ascending.
    pub fn sort(self, values: &mut [LabeledValue]) {
        match self {
            Self::Alphabetical => values.sort_by(|a, b| a.label.cmp(&b.label)),
            Self::FrequencyDescending => values.sort_by(|a, b| b.value.total_cmp(&a.value)),
            Self::FrequencyAscending => values.sort_by(|a, b| a.value.total_cmp(&b.value)),
        }
    }
}
