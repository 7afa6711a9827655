//! Row-major linear indexing, the last dimension runs fastest.
//! For grids we use `[row, col]` coordinates, so a row is contiguous.

use crate::util::*;

/// Number of coordinates in a box with the given exclusive sizes.
pub fn real_buffer_size<const DIMENSION: usize>(
    exclusive_bound: &Coord<DIMENSION>,
) -> usize {
    exclusive_bound.iter().map(|d| *d as usize).product()
}

pub fn coord_to_linear<const GRID_DIMENSION: usize>(
    coord: &Coord<GRID_DIMENSION>,
    exclusive_bounds: &Coord<GRID_DIMENSION>,
) -> usize {
    (0..GRID_DIMENSION).fold(0, |accumulator, d| {
        debug_assert!(coord[d] >= 0 && coord[d] < exclusive_bounds[d]);
        accumulator * exclusive_bounds[d] as usize + coord[d] as usize
    })
}

pub fn linear_to_coord<const GRID_DIMENSION: usize>(
    linear_index: usize,
    exclusive_bounds: &Coord<GRID_DIMENSION>,
) -> Coord<GRID_DIMENSION> {
    let mut result = Coord::zero();
    let mut index_accumulator = linear_index;
    for d in (0..GRID_DIMENSION).rev() {
        let size = exclusive_bounds[d] as usize;
        result[d] = (index_accumulator % size) as i32;
        index_accumulator /= size;
    }
    result
}

/// Grid cell coordinate from a row (y index) and column (x index).
#[inline]
pub fn cell(row: usize, col: usize) -> Coord<2> {
    vector![row as i32, col as i32]
}

/// Inverse of `cell`.
#[inline]
pub fn row_col(coord: &Coord<2>) -> (usize, usize) {
    (coord[0] as usize, coord[1] as usize)
}
