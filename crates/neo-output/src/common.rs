//! Shared helpers for the output writers.
//!
//! The display functions are pure: they compute the contract's textual form
//! from already-normalized values and never mutate the underlying entity.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Column order of the CSV output contract.
pub const CSV_FIELDS: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// Ensure the parent directory of an output path exists.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Display form of an optional NEO name.
///
/// The CSV contract renders the unset sentinel as literal `nan` text.
pub fn display_name(name: Option<&str>) -> &str {
    name.unwrap_or("nan")
}

/// Display form of a diameter; unknown (NaN) diameters render as `nan`.
pub fn display_diameter(diameter: f64) -> String {
    if diameter.is_nan() {
        "nan".to_string()
    } else {
        diameter.to_string()
    }
}

/// Display form of the hazardous flag: literal `True` / `False`.
pub fn display_hazardous(hazardous: bool) -> &'static str {
    if hazardous { "True" } else { "False" }
}
