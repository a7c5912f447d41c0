//!
//! Interpretation thresholds from TOML text such as
//!
//! ```toml
//! lower_bound = 0.35
//! upper_bound = 0.75
//! ```
//!
//! Missing keys take their default value. The parsed value is returned to the
//! caller; nothing is cached process-wide. Reading from a file is only
//! available with the `fs` feature.
//!
use crate::interpret::{Thresholds, DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND};
use anyhow::{Context, Result};
use log::warn;
#[cfg(feature = "fs")]
use std::path::Path;

/// Parse thresholds from TOML text. Out-of-order or out-of-range bounds are
/// rejected.
pub fn thresholds_from_str(s: &str) -> Result<Thresholds> {
    let thresholds: Thresholds = toml::from_str(s).context("parsing interpretation thresholds")?;
    warn_non_default(&thresholds);
    Ok(thresholds)
}

/// Read thresholds from `path`. A missing file is not an error: the defaults
/// are returned and a warning is logged.
#[cfg(feature = "fs")]
pub fn load_thresholds(path: &Path) -> Result<Thresholds> {
    if !path.exists() {
        warn!(
            "could not find thresholds file at {}, falling back to defaults",
            path.display()
        );
        return Ok(Thresholds::default());
    }
    let s = std::fs::read_to_string(path).with_context(|| path.display().to_string())?;
    thresholds_from_str(&s).with_context(|| path.display().to_string())
}

fn warn_non_default(thresholds: &Thresholds) {
    if thresholds.lower_bound() != DEFAULT_LOWER_BOUND {
        warn!("using non-default lower_bound = {}", thresholds.lower_bound());
    }
    if thresholds.upper_bound() != DEFAULT_UPPER_BOUND {
        warn!("using non-default upper_bound = {}", thresholds.upper_bound());
    }
}
