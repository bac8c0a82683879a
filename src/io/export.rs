//! Per-sample results export (CSV).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::Residual;
use crate::error::AppError;

/// Write one row per sample: the raw pair, its squared/cross terms, the
/// fitted value and the residual.
pub fn export_results_csv(path: &Path, residuals: &[Residual]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create '{}': {e}", path.display())))?;
    let mut w = BufWriter::new(file);

    write_results(&mut w, residuals)
        .map_err(|e| AppError::new(4, format!("Failed to write '{}': {e}", path.display())))
}

fn write_results<W: Write>(w: &mut W, residuals: &[Residual]) -> std::io::Result<()> {
    writeln!(w, "index,x,y,x2,y2,xy,y_fit,residual")?;
    for (i, r) in residuals.iter().enumerate() {
        let s = r.sample;
        writeln!(
            w,
            "{},{},{},{},{},{},{},{}",
            i + 1,
            s.x,
            s.y,
            s.x * s.x,
            s.y * s.y,
            s.x * s.y,
            r.y_fit,
            r.residual
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sample;

    #[test]
    fn results_csv_has_header_and_rows() {
        let residuals = vec![
            Residual { sample: Sample::new(2.0, 5.0), y_fit: 5.5, residual: -0.5 },
            Residual { sample: Sample::new(3.0, 7.0), y_fit: 7.0, residual: 0.0 },
        ];

        let mut buf = Vec::new();
        write_results(&mut buf, &residuals).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("index,x,y,x2,y2,xy,y_fit,residual"));
        assert_eq!(lines.next(), Some("1,2,5,4,25,10,5.5,-0.5"));
        assert_eq!(lines.next(), Some("2,3,7,9,49,21,7,0"));
        assert_eq!(lines.next(), None);
    }
}
