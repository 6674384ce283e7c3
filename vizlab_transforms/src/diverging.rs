// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Signed change extents for diverging bar charts.
//!
//! A diverging bar starts at 0 and extends right for an increase or left for a decrease.

/// How a change is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeScale {
    /// Change in data units.
    Absolute,
    /// Change as a percentage of the starting value.
    Relative,
}

/// A value measured at two points in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Change {
    /// Starting value.
    pub before: f64,
    /// Ending value.
    pub after: f64,
}

impl Change {
    /// Creates a change from `before` to `after`.
    pub fn new(before: f64, after: f64) -> Self {
        Self { before, after }
    }

    /// `after - before`.
    pub fn delta(&self) -> f64 {
        self.after - self.before
    }

    /// Returns `true` if the value went up.
    pub fn increased(&self) -> bool {
        self.delta() > 0.0
    }

    /// Change as a percentage of `before`, or `None` when `before` is 0.
    pub fn percent(&self) -> Option<f64> {
        if self.before == 0.0 {
            return None;
        }
        Some(self.delta() / self.before * 100.0)
    }

    /// Start and end of the bar along the value axis.
    ///
    /// Increases span `[0, delta]`, decreases span `[delta, 0]`. Returns `None` for a
    /// relative extent when `before` is 0.
    pub fn extent(&self, scale: ChangeScale) -> Option<(f64, f64)> {
        let delta = self.delta();
        let (start, end) = if self.increased() {
            (0.0, delta)
        } else {
            (delta, 0.0)
        };
        match scale {
            ChangeScale::Absolute => Some((start, end)),
            ChangeScale::Relative => {
                if self.before == 0.0 {
                    return None;
                }
                Some((start / self.before * 100.0, end / self.before * 100.0))
            }
        }
    }
}

/// Sorts rows by ascending change, keeping the relative order of ties.
pub fn sort_by_delta<T, F>(rows: &mut [T], mut change: F)
where
    F: FnMut(&T) -> Change,
{
    rows.sort_by(|a, b| change(a).delta().total_cmp(&change(b).delta()));
}
