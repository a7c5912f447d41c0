//! Error types raised by the dispersion engine, the interpretation layer and
//! the comparison utility.
#![deny(missing_docs)]

/// A frequency distribution that cannot be turned into a dispersion measure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDistributionError {
    /// No categories at all.
    #[error("The distribution is empty: at least one category with a positive count is required.")]
    Empty,

    /// Categories are present but none of them was observed.
    #[error(
        "All {categories} categories of the distribution have a count of zero: \
         at least one category with a positive count is required."
    )]
    AllZero {
        /// Number of (zero-count) categories in the distribution
        categories: usize,
    },

    /// A category carries a count below zero.
    #[error("Category '{category}' has a negative count ({count}). Counts cannot be negative.")]
    NegativeCount {
        /// Label of the offending category
        category: String,
        /// The negative count as supplied
        count: i128,
    },

    /// The same label was supplied twice in a pre-aggregated mapping.
    #[error("Category '{category}' appears more than once. Category labels must be unique.")]
    DuplicateCategory {
        /// Label of the repeated category
        category: String,
    },

    /// The total number of observations does not fit in 64 bits.
    #[error("The total number of observations overflows a 64-bit counter.")]
    TotalOverflow,
}

/// A dispersion value outside of the closed unit interval (or NaN).
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("Delta must lie within [0, 1], but got {delta}.")]
pub struct InvalidDeltaError {
    /// The rejected value
    pub delta: f64,
}

/// Interpretation thresholds that do not describe an ordered set of bands.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error(
    "Invalid interpretation thresholds: lower_bound = {lower_bound}, upper_bound = {upper_bound}. \
     The bounds must satisfy 0 <= lower_bound <= upper_bound <= 1."
)]
pub struct InvalidThresholdsError {
    /// Lower bound as supplied
    pub lower_bound: f64,
    /// Upper bound as supplied
    pub upper_bound: f64,
}

/// Failure while comparing several distributions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    /// Fewer than two distributions were supplied.
    #[error("A comparison requires at least two distributions, but got {found}.")]
    TooFewDistributions {
        /// Number of distributions supplied
        found: usize,
    },

    /// One of the inputs is invalid; `index` is its position in the input.
    #[error("Distribution at position {index} is invalid")]
    InvalidDistribution {
        /// Zero-based position of the first invalid distribution
        index: usize,
        /// Why it was rejected
        source: InvalidDistributionError,
    },
}
