//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observed samples: `o`
//! - fitted trendline: `-` line
//!
//! Bounds come straight from the Axis Ranger, so the ASCII chart and the
//! TUI chart agree on what is visible.

use crate::domain::{AxisRange, Sample};

/// Render a scatter + trendline plot into a character grid.
///
/// An empty `curve` (degenerate fit) renders the scatter alone.
pub fn render_ascii_plot(
    samples: &[Sample],
    curve: &[(f64, f64)],
    range: &AxisRange,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let mut grid = vec![vec![' '; width]; height];

    // Draw the curve first (so sample markers can overlay).
    draw_curve(&mut grid, curve, range);

    for s in samples {
        let x = map_x(s.x, range, width);
        let y = map_y(s.y, range, height);
        grid[y][x] = 'o';
    }

    // Build final string. We include a small header with ranges.
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: x=[{:.3}, {:.3}] | y=[{:.2}, {:.2}]\n",
        range.min_x, range.max_x, range.min_y, range.max_y
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn map_x(x: f64, range: &AxisRange, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - range.min_x) / (range.max_x - range.min_x)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, range: &AxisRange, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - range.min_y) / (range.max_y - range.min_y)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], range: &AxisRange) {
    if curve.is_empty() {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        let cx = map_x(x, range, width);
        let cy = map_y(y, range, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, cx, cy, '-');
        } else {
            grid[cy][cx] = '-';
        }
        prev = Some((cx, cy));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_golden_snapshot_small() {
        let range = AxisRange {
            min_x: 0.0,
            max_x: 10.0,
            min_y: 100.0,
            max_y: 110.0,
        };
        let samples = vec![Sample::new(0.0, 100.0), Sample::new(10.0, 110.0)];
        let curve = vec![(0.0, 100.0), (10.0, 110.0)];

        let txt = render_ascii_plot(&samples, &curve, &range, 10, 5);
        let expected = concat!(
            "Plot: x=[0.000, 10.000] | y=[100.00, 110.00]\n",
            "        -o\n",
            "      --  \n",
            "    --    \n",
            "  --      \n",
            "o-        \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn empty_curve_renders_scatter_only() {
        let range = AxisRange {
            min_x: 0.0,
            max_x: 10.0,
            min_y: 0.0,
            max_y: 10.0,
        };
        let samples = vec![Sample::new(5.0, 5.0)];

        let txt = render_ascii_plot(&samples, &[], &range, 10, 5);
        assert!(txt.contains('o'));
        assert!(!txt.lines().skip(1).any(|l| l.contains('-')));
    }
}
