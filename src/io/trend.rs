//! Saved trend files.
//!
//! A trend file is a self-contained JSON snapshot of one run: the model
//! parameters (when the fit succeeded), the axis range, the raw samples and
//! the discretized curve. `trend plot` re-renders one without refitting.

use std::fs;
use std::path::Path;

use crate::domain::TrendFile;
use crate::error::AppError;

/// Identifies files written by this tool.
pub const TREND_TOOL_TAG: &str = "trendline";

pub fn write_trend_file(path: &Path, trend: &TrendFile) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(trend)
        .map_err(|e| AppError::new(4, format!("Failed to serialize trend file: {e}")))?;
    fs::write(path, json)
        .map_err(|e| AppError::new(4, format!("Failed to write '{}': {e}", path.display())))?;
    Ok(())
}

pub fn read_trend_file(path: &Path) -> Result<TrendFile, AppError> {
    let json = fs::read_to_string(path)
        .map_err(|e| AppError::new(2, format!("Failed to read '{}': {e}", path.display())))?;
    let trend: TrendFile = serde_json::from_str(&json)
        .map_err(|e| AppError::new(2, format!("Invalid trend file '{}': {e}", path.display())))?;
    if trend.tool != TREND_TOOL_TAG {
        return Err(AppError::new(
            2,
            format!(
                "'{}' is not a trend file (tool tag '{}').",
                path.display(),
                trend.tool
            ),
        ));
    }
    Ok(trend)
}
