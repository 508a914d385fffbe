//! Text rendering of grids and path overlays.
//!
//! ```text
//! grid       overlay
//! 0 3 2      → → ↓
//! 6 5 1          ↓
//! 4 2 0          *
//! ```
//!
//! Each rendered line ends with `\n`. Overlay cells show the move taken out
//! of that cell; the end cell shows [`END_MARKER`]; untouched cells are blank.

use std::fmt::Write;

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::search::{ResultSet, Solution};

/// Overlay marker for the end cell
pub const END_MARKER: char = '*';

/// Overlay filler for cells off the path
pub const BLANK: char = ' ';

/// Render costs: one line per row, values separated by single spaces
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid.iter_rows() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Render one solution as a direction overlay on the grid.
///
/// Fails with `InvalidArgument` if the path leaves the grid.
pub fn render_path(grid: &Grid, solution: &Solution) -> Result<String> {
    let positions = solution.path.replay(grid).ok_or_else(|| {
        Error::InvalidArgument(format!(
            "path {} leaves the {}x{} grid",
            solution.path,
            grid.rows(),
            grid.cols()
        ))
    })?;

    let mut overlay = vec![BLANK; grid.cell_count()];
    for (pos, direction) in positions.iter().zip(solution.path.iter()) {
        if let Some(i) = grid.index_of(*pos) {
            overlay[i] = direction.glyph();
        }
    }
    if let Some(i) = grid.index_of(grid.end()) {
        overlay[i] = END_MARKER;
    }

    let mut out = String::new();
    for row in overlay.chunks_exact(grid.cols()) {
        let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    Ok(out)
}

/// One-line summary: `cost: 16  path: →→↓↓→↓→↓`
pub fn render_solution_summary(solution: &Solution) -> String {
    format!("cost: {}  path: {}", solution.cost, solution.path)
}

/// Full report: grid, solution count, then every summary and overlay
pub fn render_report(grid: &Grid, result: &ResultSet) -> Result<String> {
    let mut out = String::new();
    out.push_str(&render_grid(grid));
    out.push('\n');

    match result.min_cost() {
        Some(cost) => {
            let _ = writeln!(
                out,
                "{} minimum-cost path(s), cost {}",
                result.len(),
                cost
            );
        }
        None => out.push_str("no path\n"),
    }

    for (i, solution) in result.iter().enumerate() {
        let _ = writeln!(out, "\n#{} {}", i + 1, render_solution_summary(solution));
        out.push_str(&render_path(grid, solution)?);
    }
    Ok(out)
}
