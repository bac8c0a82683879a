//! Parse raw x/y text fields into samples.
//!
//! The input format is whitespace-separated decimal values, one field per
//! observation. Counts must match and neither sequence may be empty; these
//! checks run here so the fitter never sees an unpaired sequence.

use crate::domain::Sample;
use crate::error::AppError;

/// Parse two whitespace-separated value lists into paired samples.
pub fn parse_pairs(x_text: &str, y_text: &str) -> Result<Vec<Sample>, AppError> {
    let xs = parse_fields(x_text, "X")?;
    let ys = parse_fields(y_text, "Y")?;

    if xs.is_empty() {
        return Err(AppError::new(2, "X values are empty."));
    }
    if ys.len() != xs.len() {
        return Err(AppError::new(
            2,
            "Number of Y values must match number of X values.",
        ));
    }

    Ok(xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| Sample::new(x, y))
        .collect())
}

fn parse_fields(text: &str, axis: &str) -> Result<Vec<f64>, AppError> {
    let mut out = Vec::new();
    for field in text.split_whitespace() {
        let value = field.parse::<f64>().map_err(|e| {
            AppError::new(2, format!("Invalid input for {axis} values: '{field}'. {e}"))
        })?;
        out.push(value);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_paired_values() {
        let samples = parse_pairs("1 2.5  -3", "4 5 6").unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[1], Sample::new(2.5, 5.0));
        assert_eq!(samples[2], Sample::new(-3.0, 6.0));
    }

    #[test]
    fn rejects_mismatched_counts() {
        let err = parse_pairs("1 2 3", "4 5").unwrap_err();
        assert!(err.to_string().contains("must match"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn rejects_empty_x() {
        let err = parse_pairs("   ", "").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn rejects_invalid_token_by_name() {
        let err = parse_pairs("1 two 3", "4 5 6").unwrap_err();
        assert!(err.to_string().contains("'two'"));
    }
}
