use crate::domain::Grid;
use crate::error::RenderError;
use crate::render::{Renderer, Snapshot};
use std::io::prelude::*;
use std::path::{Path, PathBuf};

/// Write a grid as CSV. The first line holds the x axis, every following
/// line starts with its y value and then the row's values.
pub fn write_csv<W: Write>(grid: &Grid, output: &mut W) -> std::io::Result<()> {
    write!(output, "y\\x")?;
    for x in grid.xs() {
        write!(output, ", {x}")?;
    }
    writeln!(output)?;

    for row in 0..grid.rows() {
        write!(output, "{}", grid.ys()[row])?;
        for r in grid.row(row) {
            write!(output, ", {r}")?;
        }
        writeln!(output)?;
    }
    Ok(())
}

pub fn write_csv_file<P: AsRef<Path>>(grid: &Grid, path: &P) -> Result<(), RenderError> {
    log::debug!("Writing csv: {:?}", path.as_ref());
    let mut output = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_csv(grid, &mut output)?;
    output.flush()?;
    Ok(())
}

/// Writes the final grid only.
pub struct CsvRenderer {
    path: PathBuf,
}

impl CsvRenderer {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        CsvRenderer { path: path.into() }
    }
}

impl Renderer for CsvRenderer {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> Result<(), RenderError> {
        if snapshot.is_final() {
            write_csv_file(snapshot.grid, &self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn write_csv_test() {
        let mut grid = Grid::create(0.5, 1.0, 1.0, 1.0);
        grid.par_set_values(|c| (c[0] * 10 + c[1]) as f64, 2);
        let mut out = Vec::new();
        write_csv(&grid, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "y\\x, 0, 0.5, 1");
        assert_eq!(lines[1], "0, 0, 1, 2");
        assert_eq!(lines[2], "1, 10, 11, 12");
    }
}
