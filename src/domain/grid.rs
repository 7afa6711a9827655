use crate::domain::DomainChunk;
use crate::util::indexing::*;
use crate::util::*;
use rayon::prelude::*;

/// A scalar field sampled on `ys.len()` rows by `xs.len()` columns.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    xs: Vec<f64>,
    ys: Vec<f64>,
    aabb: AABB<2>,
    buffer: Vec<f64>,
}

impl Grid {
    /// Sample both axes from `0` up to `length + 0.5 * step`
    /// and allocate a zeroed `ys.len() x xs.len()` buffer.
    /// Step sizes must be positive.
    pub fn create(
        x_step: f64,
        y_step: f64,
        x_length: f64,
        y_length: f64,
    ) -> Self {
        let xs = arange(0.0, x_length + 0.5 * x_step, x_step);
        let ys = arange(0.0, y_length + 0.5 * y_step, y_step);
        Self::from_axes(xs, ys)
    }

    pub fn from_axes(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        let aabb =
            AABB::from_exclusive_bounds(&vector![ys.len() as i32, xs.len() as i32]);
        let buffer = vec![0.0; xs.len() * ys.len()];
        Grid {
            xs,
            ys,
            aabb,
            buffer,
        }
    }

    /// Another grid on the same axes, values zeroed.
    pub fn zeroed_like(&self) -> Self {
        Self::from_axes(self.xs.clone(), self.ys.clone())
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Number of rows, `ny`.
    pub fn rows(&self) -> usize {
        self.ys.len()
    }

    /// Number of columns, `nx`.
    pub fn cols(&self) -> usize {
        self.xs.len()
    }

    pub fn aabb(&self) -> &AABB<2> {
        &self.aabb
    }

    pub fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [f64] {
        &mut self.buffer
    }

    pub fn same_shape(&self, other: &Grid) -> bool {
        self.rows() == other.rows() && self.cols() == other.cols()
    }

    #[track_caller]
    pub fn view(&self, coord: &Coord<2>) -> f64 {
        debug_assert!(
            self.aabb.contains(coord),
            "{:?} does not contain {:?}",
            self.aabb,
            coord
        );
        self.buffer[self.aabb.coord_to_linear(coord)]
    }

    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < self.rows() && col < self.cols());
        self.buffer[row * self.cols() + col]
    }

    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(row < self.rows() && col < self.cols());
        let cols = self.cols();
        self.buffer[row * cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let cols = self.cols();
        &self.buffer[row * cols..(row + 1) * cols]
    }

    /// Values of one column, top to bottom.
    pub fn column(&self, col: usize) -> Vec<f64> {
        (0..self.rows()).map(|row| self.get(row, col)).collect()
    }

    /// True when the cell lies in the grid but not on its outer layer.
    pub fn is_interior(&self, row: usize, col: usize) -> bool {
        let coord = cell(row, col);
        self.aabb.contains(&coord) && !self.aabb.on_edge(&coord)
    }

    /// Smallest and largest value, ignoring NaN.
    pub fn min_max(&self) -> (f64, f64) {
        self.buffer
            .iter()
            .filter(|v| !v.is_nan())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(*v), hi.max(*v))
            })
    }

    /// Copy the outer layer (all four edges) of `other` into self.
    pub fn copy_edges_from(&mut self, other: &Grid) {
        debug_assert!(self.same_shape(other));
        let rows = self.rows();
        let cols = self.cols();
        if rows == 0 || cols == 0 {
            return;
        }
        let last = (rows - 1) * cols;
        self.buffer[0..cols].copy_from_slice(&other.buffer[0..cols]);
        self.buffer[last..last + cols]
            .copy_from_slice(&other.buffer[last..last + cols]);
        for row in 1..rows - 1 {
            let first = row * cols;
            self.buffer[first] = other.buffer[first];
            self.buffer[first + cols - 1] = other.buffer[first + cols - 1];
        }
    }

    pub fn par_modify_access(
        &mut self,
        chunk_size: usize,
    ) -> impl IndexedParallelIterator<Item = DomainChunk<'_>> {
        let aabb = &self.aabb;
        self.buffer
            .par_chunks_mut(chunk_size.max(1))
            .enumerate()
            .map(move |(i, buffer_chunk): (usize, &mut [f64])| {
                DomainChunk::new(i * chunk_size.max(1), aabb, buffer_chunk)
            })
    }

    pub fn par_set_values<F: Fn(Coord<2>) -> f64 + Send + Sync>(
        &mut self,
        f: F,
        chunk_size: usize,
    ) {
        self.par_modify_access(chunk_size)
            .for_each(|mut d: DomainChunk<'_>| {
                d.coord_iter_mut().for_each(|(coord, value_mut)| {
                    *value_mut = f(coord);
                })
            });
    }

    pub fn fill(&mut self, value: f64) {
        self.buffer.fill(value);
    }
}
