use crate::domain::Grid;
use crate::error::RenderError;
use crate::render::{normalize, Renderer, Snapshot};
use std::path::{Path, PathBuf};

/// Colour a grid with the turbo gradient over its own value range.
/// Columns map to image x and rows to image y, so row 0 is the top line.
pub fn grid_to_image(grid: &Grid) -> image::RgbImage {
    let gradient = colorous::TURBO;
    let (lo, hi) = grid.min_max();
    let mut img = image::RgbImage::new(grid.cols() as u32, grid.rows() as u32);
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let c = gradient.eval_continuous(normalize(grid.get(row, col), lo, hi));
            img.put_pixel(col as u32, row as u32, image::Rgb(c.as_array()));
        }
    }
    img
}

pub fn write_png<P: AsRef<Path>>(grid: &Grid, path: &P) -> Result<(), RenderError> {
    log::debug!("Writing png: {:?}", path.as_ref());
    grid_to_image(grid).save(path)?;
    Ok(())
}

/// Writes `frame_NNNN.png` for every intermediate snapshot and
/// `final.png` for the final one.
pub struct PngRenderer {
    output_dir: PathBuf,
    frame: u32,
}

impl PngRenderer {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        PngRenderer {
            output_dir: output_dir.into(),
            frame: 0,
        }
    }

    pub fn frame_name(&self, i: u32) -> PathBuf {
        let mut result = self.output_dir.clone();
        result.push(format!("frame_{:04}.png", i));
        result
    }

    pub fn final_name(&self) -> PathBuf {
        self.output_dir.join("final.png")
    }
}

impl Renderer for PngRenderer {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> Result<(), RenderError> {
        if snapshot.is_final() {
            write_png(snapshot.grid, &self.final_name())
        } else {
            let path = self.frame_name(self.frame);
            self.frame += 1;
            write_png(snapshot.grid, &path)
        }
    }
}

/// One grid column (fixed x) per snapshot, stacked top to bottom
/// into a single image: the evolution of a 1D slice over time.
pub struct SliceImageRenderer {
    column: usize,
    path: PathBuf,
    lines: Vec<Vec<f64>>,
}

impl SliceImageRenderer {
    pub fn new<P: Into<PathBuf>>(column: usize, path: P) -> Self {
        SliceImageRenderer {
            column,
            path: path.into(),
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[Vec<f64>] {
        &self.lines
    }

    /// Line `l` of the image holds snapshot `l`, pixel `x` holds row `x`.
    pub fn to_image(&self) -> image::RgbImage {
        let gradient = colorous::TURBO;
        let width = self.lines.first().map(|l| l.len()).unwrap_or(0);
        let (lo, hi) = self
            .lines
            .iter()
            .flatten()
            .filter(|v| !v.is_nan())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(*v), hi.max(*v))
            });
        let mut img = image::RgbImage::new(width as u32, self.lines.len() as u32);
        for (l, line) in self.lines.iter().enumerate() {
            for (x, v) in line.iter().enumerate() {
                let c = gradient.eval_continuous(normalize(*v, lo, hi));
                img.put_pixel(x as u32, l as u32, image::Rgb(c.as_array()));
            }
        }
        img
    }
}

impl Renderer for SliceImageRenderer {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> Result<(), RenderError> {
        let grid = snapshot.grid;
        if self.column >= grid.cols() {
            return Err(RenderError::ShapeMismatch {
                expected: (grid.rows(), self.column + 1),
                found: (grid.rows(), grid.cols()),
            });
        }
        self.lines.push(grid.column(self.column));
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        log::debug!("Writing slice image: {:?}", self.path);
        self.to_image().save(&self.path)?;
        Ok(())
    }
}
