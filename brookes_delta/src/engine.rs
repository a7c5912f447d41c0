//!
//! The dispersion engine. Turns a `FrequencyDistribution` into Brookes' Δ and
//! the descriptive statistics needed to read it.
//!
//! Δ is the Simpson concentration of the distribution,
//!
//! ```text
//! Δ = Σ pᵢ²,  pᵢ = cᵢ / N
//! ```
//!
//! which is the reciprocal of the effective number of categories (inverse
//! Simpson index). A single occupied category gives Δ = 1 and an even spread
//! over n categories gives Δ = 1/n.
//!
use crate::distribution::{Category, FrequencyDistribution};
use crate::errors::InvalidDistributionError;
use crate::interpret::{band, Label, Thresholds};
use itertools::Itertools;
use log::{debug, warn};
use serde::Serialize;
use std::borrow::Borrow;
use std::cmp::Reverse;

/// One category of a computed distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare<K> {
    /// Category label
    pub category: K,
    /// Number of observations in this category
    pub count: u64,
    /// Fraction of all observations, in [0, 1]
    pub proportion: f64,
    /// 1 for the largest category. Ties keep input order.
    pub rank: usize,
}

impl<K> CategoryShare<K> {
    /// The proportion expressed as a percentage.
    pub fn percentage(&self) -> f64 {
        100.0 * self.proportion
    }
}

/// Outcome of a single dispersion computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispersionResult<K> {
    /// Brookes' Δ, within [0, 1]
    pub delta: f64,
    /// Number of categories with a positive count
    pub categories: usize,
    /// Total number of observations
    pub total: u64,
    /// Every input category, ordered by rank
    pub proportions: Vec<CategoryShare<K>>,
    /// Effective number of categories, 1 / Δ
    pub effective_categories: f64,
    /// Count-weighted mean descending rank (the largest category has
    /// descending rank n). Lies in [(n + 1) / 2, n].
    pub rank_mean: f64,
}

impl<K: Category> DispersionResult<K> {
    /// The share for `category`, if it was part of the input.
    pub fn share<Q>(&self, category: &Q) -> Option<&CategoryShare<K>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.proportions
            .iter()
            .find(|s| s.category.borrow() == category)
    }

    /// Qualitative label of Δ under `thresholds`.
    pub fn label(&self, thresholds: &Thresholds) -> Label {
        band(self.delta, thresholds)
    }
}

/// Compute Brookes' Δ for `distribution`.
///
/// # Errors
/// An `InvalidDistributionError` if the distribution is empty, if any count is
/// negative, if every count is zero or if the total overflows 64 bits.
///
/// # Example
/// ```rust
/// use brookes_delta::{compute, FrequencyDistribution};
/// let dist = FrequencyDistribution::from_counts([("A", 90), ("B", 5), ("C", 5)]).unwrap();
/// let result = compute(&dist).unwrap();
/// assert!((result.delta - 0.815).abs() < 1e-12);
/// assert_eq!(result.categories, 3);
/// assert_eq!(result.total, 100);
/// ```
pub fn compute<K: Category>(
    distribution: &FrequencyDistribution<K>,
) -> Result<DispersionResult<K>, InvalidDistributionError> {
    let (counts, total) = validated_counts(distribution)?;

    // Stable, so equal counts keep their input order.
    let order = (0..counts.len())
        .sorted_by_key(|&i| Reverse(counts[i]))
        .collect::<Vec<_>>();
    let occupied = counts.iter().filter(|&&c| c > 0).count();

    let total_f = total as f64;
    let proportion = |i: usize| counts[i] as f64 / total_f;

    // Smallest terms first.
    let raw_delta = neumaier_sum(order.iter().rev().map(|&i| proportion(i).powi(2)));
    let delta = clamp_delta(raw_delta);

    // Occupied categories come first in `order`, so rank r maps to
    // descending rank n - r + 1.
    let weighted_rank: u128 = order
        .iter()
        .take(occupied)
        .enumerate()
        .map(|(r, &i)| u128::from(counts[i]) * (occupied - r) as u128)
        .sum();
    let rank_mean = weighted_rank as f64 / total_f;

    let labels = distribution.categories().collect::<Vec<_>>();
    let proportions = order
        .iter()
        .enumerate()
        .map(|(r, &i)| CategoryShare {
            category: labels[i].clone(),
            count: counts[i],
            proportion: proportion(i),
            rank: r + 1,
        })
        .collect();

    debug!("n = {occupied}, N = {total}, delta = {delta}");

    Ok(DispersionResult {
        delta,
        categories: occupied,
        total,
        proportions,
        effective_categories: 1.0 / delta,
        rank_mean,
    })
}

/// Check the counts and return them as `u64` along with their total.
fn validated_counts<K: Category>(
    distribution: &FrequencyDistribution<K>,
) -> Result<(Vec<u64>, u64), InvalidDistributionError> {
    if distribution.is_empty() {
        return Err(InvalidDistributionError::Empty);
    }
    let mut counts = Vec::with_capacity(distribution.len());
    let mut total = 0u64;
    for (category, count) in distribution.iter() {
        if count < 0 {
            return Err(InvalidDistributionError::NegativeCount {
                category: category.to_string(),
                count,
            });
        }
        let count = u64::try_from(count).map_err(|_| InvalidDistributionError::TotalOverflow)?;
        total = total
            .checked_add(count)
            .ok_or(InvalidDistributionError::TotalOverflow)?;
        counts.push(count);
    }
    if total == 0 {
        return Err(InvalidDistributionError::AllZero {
            categories: counts.len(),
        });
    }
    Ok((counts, total))
}

/// Pull a value that rounding pushed outside [0, 1] back to the boundary.
fn clamp_delta(delta: f64) -> f64 {
    if delta > 1.0 {
        warn!("delta {delta} exceeds 1 due to rounding, clamping to 1");
        1.0
    } else if delta < 0.0 {
        warn!("delta {delta} is below 0 due to rounding, clamping to 0");
        0.0
    } else {
        delta
    }
}

/// Compensated (Neumaier) summation.
fn neumaier_sum(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut sum = 0_f64;
    let mut compensation = 0_f64;
    for v in values {
        let t = sum + v;
        if sum.abs() >= v.abs() {
            compensation += (sum - t) + v;
        } else {
            compensation += (v - t) + sum;
        }
        sum = t;
    }
    sum + compensation
}
