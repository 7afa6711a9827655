pub use nalgebra::{matrix, vector};
pub use num_traits::{One, Zero};

mod aabb;
pub mod indexing;
pub use aabb::*;

pub type Coord<const GRID_DIMENSION: usize> =
    nalgebra::SVector<i32, { GRID_DIMENSION }>;

/// Per dimension `[min, max]`, both inclusive.
pub type Bounds<const GRID_DIMENSION: usize> =
    nalgebra::SMatrix<i32, { GRID_DIMENSION }, 2>;

pub type Values<const NEIGHBORHOOD_SIZE: usize> =
    nalgebra::SVector<f64, { NEIGHBORHOOD_SIZE }>;

/// Samples `start + i * step` for every `i` with a sample below `stop`.
/// The sample count is `ceil((stop - start) / step)`, and each sample is
/// computed from its index rather than accumulated, so a stop of
/// `length + 0.5 * step` includes the sample at `length`.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    debug_assert!(step > 0.0);
    let span = (stop - start) / step;
    if !span.is_finite() || span <= 0.0 {
        return Vec::new();
    }
    let n = span.ceil() as usize;
    (0..n).map(|i| start + i as f64 * step).collect()
}
