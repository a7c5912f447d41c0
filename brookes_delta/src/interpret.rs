//!
//! Qualitative reading of Δ. The unit interval is split into three bands by
//! two thresholds; the thresholds are an explicit value, never global state.
//!
use crate::errors::{InvalidDeltaError, InvalidThresholdsError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default lower threshold: below it a distribution is highly dispersed.
pub const DEFAULT_LOWER_BOUND: f64 = 0.4;
/// Default upper threshold: at or above it a distribution is highly concentrated.
pub const DEFAULT_UPPER_BOUND: f64 = 0.7;

/// Qualitative concentration band, ordered from most dispersed to most
/// concentrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// Δ below `lower_bound`
    HighlyDispersed,
    /// Δ in `[lower_bound, upper_bound)`
    #[serde(rename = "moderately_concentrated")]
    Balanced,
    /// Δ at or above `upper_bound`
    HighlyConcentrated,
}

impl Label {
    /// A longer description of what the band means for a body of literature
    /// classified into subject categories.
    pub fn description(self) -> &'static str {
        match self {
            Label::HighlyDispersed => {
                "Mass is spread across many categories: an interdisciplinary or diverse field"
            }
            Label::Balanced => {
                "A few leading categories with a substantial tail: a moderately concentrated, balanced field"
            }
            Label::HighlyConcentrated => {
                "Most mass sits in a small subset of categories: a specialized field with clear paradigms"
            }
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Label::HighlyDispersed => "highly dispersed",
            Label::Balanced => "moderately concentrated",
            Label::HighlyConcentrated => "highly concentrated",
        };
        f.write_str(s)
    }
}

/// Band boundaries for [`interpret_with`]. Always satisfies
/// `0 <= lower_bound <= upper_bound <= 1`: every constructor, including
/// deserialization, validates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds")]
pub struct Thresholds {
    lower_bound: f64,
    upper_bound: f64,
}

/// Unchecked form read from configuration. Missing keys take their default.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawThresholds {
    lower_bound: f64,
    upper_bound: f64,
}

impl Default for RawThresholds {
    fn default() -> Self {
        RawThresholds {
            lower_bound: DEFAULT_LOWER_BOUND,
            upper_bound: DEFAULT_UPPER_BOUND,
        }
    }
}

impl TryFrom<RawThresholds> for Thresholds {
    type Error = InvalidThresholdsError;

    fn try_from(raw: RawThresholds) -> Result<Self, Self::Error> {
        Thresholds::new(raw.lower_bound, raw.upper_bound)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            lower_bound: DEFAULT_LOWER_BOUND,
            upper_bound: DEFAULT_UPPER_BOUND,
        }
    }
}

impl Thresholds {
    /// Validated thresholds. Requires `0 <= lower_bound <= upper_bound <= 1`.
    ///
    /// # Example
    /// ```rust
    /// use brookes_delta::Thresholds;
    /// assert!(Thresholds::new(0.3, 0.8).is_ok());
    /// assert!(Thresholds::new(0.8, 0.3).is_err());
    /// assert!(Thresholds::new(f64::NAN, 0.3).is_err());
    /// ```
    pub fn new(lower_bound: f64, upper_bound: f64) -> Result<Self, InvalidThresholdsError> {
        // NaN fails every comparison.
        let ordered = 0.0 <= lower_bound && lower_bound <= upper_bound && upper_bound <= 1.0;
        if ordered {
            Ok(Thresholds {
                lower_bound,
                upper_bound,
            })
        } else {
            Err(InvalidThresholdsError {
                lower_bound,
                upper_bound,
            })
        }
    }

    /// Δ below this value is highly dispersed.
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// Δ at or above this value is highly concentrated.
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }
}

/// Band of an in-range `delta`.
pub(crate) fn band(delta: f64, thresholds: &Thresholds) -> Label {
    if delta >= thresholds.upper_bound {
        Label::HighlyConcentrated
    } else if delta >= thresholds.lower_bound {
        Label::Balanced
    } else {
        Label::HighlyDispersed
    }
}

/// Label `delta` using the default thresholds.
///
/// # Example
/// ```rust
/// use brookes_delta::{interpret, Label};
/// assert_eq!(interpret(1.0).unwrap(), Label::HighlyConcentrated);
/// assert_eq!(interpret(0.5).unwrap(), Label::Balanced);
/// assert!(interpret(1.5).is_err());
/// ```
pub fn interpret(delta: f64) -> Result<Label, InvalidDeltaError> {
    interpret_with(delta, &Thresholds::default())
}

/// Label `delta` using caller supplied thresholds.
pub fn interpret_with(delta: f64, thresholds: &Thresholds) -> Result<Label, InvalidDeltaError> {
    if !(0.0..=1.0).contains(&delta) {
        return Err(InvalidDeltaError { delta });
    }
    Ok(band(delta, thresholds))
}
