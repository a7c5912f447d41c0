//! brookes_delta
//!
//! Brookes' measure of categorical dispersion (Δ). A categorical frequency
//! distribution, such as publications counted per subject classification, is
//! reduced to a single value in [0, 1]: 1 when every observation falls into a
//! single category and smaller the more evenly observations spread out.
//!
//! * [`compute`] turns a [`FrequencyDistribution`] into a [`DispersionResult`].
//! * [`interpret`] and [`interpret_with`] map Δ to a [`Label`].
//! * [`compare`] ranks two or more distributions by Δ.
//!
//! Every operation is a pure function of its input.
#![deny(missing_docs)]

mod compare;
mod distribution;
mod engine;
pub mod errors;
mod interpret;
pub mod parameters;

pub use compare::{compare, ComparisonResult, Relation};
pub use distribution::{Category, FrequencyDistribution};
pub use engine::{compute, CategoryShare, DispersionResult};
pub use errors::{CompareError, InvalidDeltaError, InvalidDistributionError, InvalidThresholdsError};
pub use interpret::{
    interpret, interpret_with, Label, Thresholds, DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND,
};
