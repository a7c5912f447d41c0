//!
//! Comparison of several distributions by their Δ. Category labels are never
//! aligned across distributions: each one is reduced to its own Δ first.
//!
use crate::distribution::{Category, FrequencyDistribution};
use crate::engine::{compute, DispersionResult};
use crate::errors::CompareError;
use itertools::Itertools;
use ndarray::Array2;
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::cmp::{Ordering, Reverse};

/// How one distribution relates to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Higher Δ
    MoreConcentrated,
    /// Lower Δ
    MoreDispersed,
    /// Identical Δ
    Equal,
}

/// Outcome of comparing two or more distributions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult<K> {
    /// One result per input distribution, in input order
    pub results: Vec<DispersionResult<K>>,
    /// Input positions ordered by descending Δ. Ties keep input order.
    pub ranking: Vec<usize>,
    /// `differences[[i, j]] = |Δi - Δj|`. Symmetric with a zero diagonal.
    pub differences: Array2<f64>,
}

impl<K> ComparisonResult<K> {
    /// Δ of the distribution at position `i`.
    pub fn delta(&self, i: usize) -> f64 {
        self.results[i].delta
    }

    /// Absolute difference in Δ between positions `i` and `j`.
    pub fn difference(&self, i: usize, j: usize) -> f64 {
        self.differences[[i, j]]
    }

    /// Difference relative to the larger of the two Δ values. Zero when both
    /// are zero.
    pub fn effect_size(&self, i: usize, j: usize) -> f64 {
        let larger = self.delta(i).max(self.delta(j));
        if larger > 0.0 {
            self.difference(i, j) / larger
        } else {
            0.0
        }
    }

    /// Whether the distribution at `i` is more or less concentrated than the
    /// one at `j`.
    pub fn relation(&self, i: usize, j: usize) -> Relation {
        match self.delta(i).total_cmp(&self.delta(j)) {
            Ordering::Greater => Relation::MoreConcentrated,
            Ordering::Less => Relation::MoreDispersed,
            Ordering::Equal => Relation::Equal,
        }
    }

    /// Position of the distribution with the highest Δ.
    pub fn most_concentrated(&self) -> usize {
        self.ranking[0]
    }

    /// Position of the distribution with the lowest Δ. Among ties, the one
    /// ranked last.
    pub fn most_dispersed(&self) -> usize {
        self.ranking[self.ranking.len() - 1]
    }
}

/// Compute Δ for every distribution, rank them and tabulate the pairwise
/// differences.
///
/// # Errors
/// `TooFewDistributions` for fewer than two inputs, otherwise the first
/// invalid distribution as `InvalidDistribution` with its position.
///
/// # Example
/// ```rust
/// use brookes_delta::{compare, FrequencyDistribution};
/// let specialized = FrequencyDistribution::from_counts([("A", 90), ("B", 10)]).unwrap();
/// let general = FrequencyDistribution::from_counts([("X", 50), ("Y", 50)]).unwrap();
/// let cmp = compare(&[general, specialized]).unwrap();
/// assert_eq!(cmp.ranking, vec![1, 0]);
/// assert!((cmp.difference(0, 1) - 0.32).abs() < 1e-12);
/// ```
pub fn compare<K: Category>(
    distributions: &[FrequencyDistribution<K>],
) -> Result<ComparisonResult<K>, CompareError> {
    if distributions.len() < 2 {
        return Err(CompareError::TooFewDistributions {
            found: distributions.len(),
        });
    }

    let results = distributions
        .iter()
        .enumerate()
        .map(|(index, dist)| {
            compute(dist).map_err(|source| CompareError::InvalidDistribution { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let ranking = (0..results.len())
        .sorted_by_key(|&i| Reverse(OrderedFloat(results[i].delta)))
        .collect();

    let n = results.len();
    let differences = Array2::from_shape_fn((n, n), |(i, j)| {
        (results[i].delta - results[j].delta).abs()
    });

    Ok(ComparisonResult {
        results,
        ranking,
        differences,
    })
}
