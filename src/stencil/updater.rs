use crate::domain::*;
use crate::error::SolverError;
use crate::stencil::*;
use crate::util::indexing::*;
use crate::util::*;
use rayon::prelude::*;

/// Collect the stencil's neighbor values around `coord`.
/// Every neighbor must lie inside the grid.
pub fn gather_args<const NEIGHBORHOOD_SIZE: usize>(
    stencil: &Stencil<NEIGHBORHOOD_SIZE>,
    input: &Grid,
    coord: &Coord<2>,
) -> [f64; NEIGHBORHOOD_SIZE] {
    let mut result = [0.0; NEIGHBORHOOD_SIZE];
    for (i, n_i) in stencil.offsets().iter().enumerate() {
        result[i] = input.view(&(coord + n_i));
    }
    result
}

/// Computes the interior of the next state from the current one.
/// Reads only from `current`, so the sweep is Jacobi, not Gauss-Seidel,
/// and the cell visiting order does not matter.
#[derive(Clone, Debug)]
pub struct StencilUpdater {
    stencil: Stencil<4>,
    chunk_size: usize,
}

impl StencilUpdater {
    pub fn new(chunk_size: usize) -> Self {
        Self::with_stencil(standard_stencils::jacobi_average(), chunk_size)
    }

    pub fn with_stencil(stencil: Stencil<4>, chunk_size: usize) -> Self {
        debug_assert_eq!(stencil.reach(), 1);
        StencilUpdater {
            stencil,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Stencil value at one interior cell of `current`.
    pub fn apply_at(
        &self,
        current: &Grid,
        row: usize,
        col: usize,
    ) -> Result<f64, SolverError> {
        if !current.is_interior(row, col) {
            return Err(SolverError::OutOfDomain {
                row,
                col,
                rows: current.rows(),
                cols: current.cols(),
            });
        }
        let args = gather_args(&self.stencil, current, &cell(row, col));
        Ok(self.stencil.apply(&args))
    }

    /// Overwrite every interior cell of `next`.
    /// Edge cells of `next` are left as they are.
    #[profiling::function]
    pub fn sweep(&self, current: &Grid, next: &mut Grid) -> Result<(), SolverError> {
        if !current.same_shape(next) {
            return Err(SolverError::ShapeMismatch {
                expected: (current.rows(), current.cols()),
                found: (next.rows(), next.cols()),
            });
        }
        next.par_modify_access(self.chunk_size)
            .try_for_each(|mut d: DomainChunk<'_>| {
                d.coord_iter_mut().try_for_each(
                    |(coord, value_mut): (Coord<2>, &mut f64)| {
                        let (row, col) = row_col(&coord);
                        if current.is_interior(row, col) {
                            *value_mut = self.apply_at(current, row, col)?;
                        }
                        Ok(())
                    },
                )
            })
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn ramp(rows_len: f64, cols_len: f64) -> Grid {
        let mut grid = Grid::create(1.0, 1.0, cols_len, rows_len);
        grid.par_set_values(|c| (c[0] * c[0] + 3 * c[1]) as f64 * 0.1, 3);
        grid
    }

    #[test]
    fn apply_at_rejects_boundary() {
        let grid = ramp(4.0, 5.0);
        let updater = StencilUpdater::new(3);
        let last_row = grid.rows() - 1;
        let last_col = grid.cols() - 1;
        for (row, col) in [(0, 2), (last_row, 2), (2, 0), (2, last_col), (0, 0)] {
            match updater.apply_at(&grid, row, col) {
                Err(SolverError::OutOfDomain { row: r, col: c, .. }) => {
                    assert_eq!((r, c), (row, col));
                }
                other => panic!("expected OutOfDomain, got {:?}", other),
            }
        }
        assert!(updater.apply_at(&grid, 1, 1).is_ok());
    }

    #[test]
    fn sweep_is_neighbor_mean() {
        let current = ramp(6.0, 7.0);
        let mut next = current.zeroed_like();
        next.fill(-9.0);
        StencilUpdater::new(5).sweep(&current, &mut next).unwrap();
        for row in 0..current.rows() {
            for col in 0..current.cols() {
                let v = next.get(row, col);
                if current.is_interior(row, col) {
                    let e = (current.get(row + 1, col)
                        + current.get(row - 1, col)
                        + current.get(row, col - 1)
                        + current.get(row, col + 1))
                        / 4.0;
                    assert_eq!(v, e);
                } else {
                    assert_eq!(v, -9.0);
                }
            }
        }
    }

    #[test]
    fn sweep_independent_of_chunking() {
        let current = ramp(9.0, 5.0);
        let mut a = current.zeroed_like();
        let mut b = current.zeroed_like();
        StencilUpdater::new(1).sweep(&current, &mut a).unwrap();
        StencilUpdater::new(1000).sweep(&current, &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sweep_shape_mismatch() {
        let current = ramp(3.0, 3.0);
        let mut next = ramp(4.0, 3.0);
        let r = StencilUpdater::new(4).sweep(&current, &mut next);
        assert!(matches!(r, Err(SolverError::ShapeMismatch { .. })));
    }

    #[test]
    fn sweep_without_interior() {
        let current = Grid::create(1.0, 1.0, 1.0, 5.0);
        assert_eq!(current.cols(), 2);
        let mut next = current.zeroed_like();
        next.fill(3.0);
        StencilUpdater::new(2).sweep(&current, &mut next).unwrap();
        assert!(next.buffer().iter().all(|v| *v == 3.0));
    }
}
