//! Per-campaign metric aggregation.
//!
//! The database does the heavy lifting (`GROUP BY metric_name` with `SUM`),
//! but rows are still folded here so that a name appearing more than once is
//! summed rather than overwritten. The result is ordered by metric name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Mapping from metric name to the summed value across all of a campaign's
/// performance records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricTotals(BTreeMap<String, f64>);

impl MetricTotals {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to the running total for `name`.
    pub fn add(&mut self, name: impl Into<String>, value: f64) {
        *self.0.entry(name.into()).or_insert(0.0) += value;
    }

    /// Total for `name`, if any record carried that name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    /// Total for `name`, or `0.0` when absent.
    pub fn get_or_zero(&self, name: &str) -> f64 {
        self.get(name).unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate `(name, total)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<N: Into<String>> FromIterator<(N, f64)> for MetricTotals {
    fn from_iter<I: IntoIterator<Item = (N, f64)>>(iter: I) -> Self {
        let mut totals = Self::new();
        for (name, value) in iter {
            totals.add(name, value);
        }
        totals
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
