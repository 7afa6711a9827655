use crate::util::*;

/// For linear stencils, we can extract the weight for a neighbor
/// by passing in 1.0 for that neighbor and 0.0 for the others.
pub fn extract_weights<
    const NEIGHBORHOOD_SIZE: usize,
    F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64,
>(
    f: F,
) -> Values<NEIGHBORHOOD_SIZE> {
    let mut weights = Values::zero();
    let mut arg_buffer = [0.0; NEIGHBORHOOD_SIZE];
    for n in 0..NEIGHBORHOOD_SIZE {
        arg_buffer[n] = 1.0;
        weights[n] = f(&arg_buffer);
        arg_buffer[n] = 0.0;
    }
    weights
}

/// A linear stencil on a 2D grid: `[row, col]` neighbor offsets and weights.
#[derive(Clone, Debug, PartialEq)]
pub struct Stencil<const NEIGHBORHOOD_SIZE: usize> {
    weights: Values<NEIGHBORHOOD_SIZE>,
    offsets: [Coord<2>; NEIGHBORHOOD_SIZE],
}

impl<const NEIGHBORHOOD_SIZE: usize> Stencil<NEIGHBORHOOD_SIZE> {
    pub fn new<F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64>(
        offsets: [[i32; 2]; NEIGHBORHOOD_SIZE],
        operation: F,
    ) -> Self {
        let weights = extract_weights(operation);
        Stencil {
            offsets: std::array::from_fn(|i| {
                Coord::from_column_slice(&offsets[i])
            }),
            weights,
        }
    }

    pub fn weights(&self) -> &Values<NEIGHBORHOOD_SIZE> {
        &self.weights
    }

    pub fn offsets(&self) -> &[Coord<2>; NEIGHBORHOOD_SIZE] {
        &self.offsets
    }

    /// Largest absolute offset in any direction.
    pub fn reach(&self) -> i32 {
        self.offsets
            .iter()
            .flat_map(|o| o.iter().map(|c| c.abs()))
            .max()
            .unwrap_or(0)
    }

    /// Weighted sum, accumulated in neighbor order.
    pub fn apply(&self, args: &[f64; NEIGHBORHOOD_SIZE]) -> f64 {
        let mut result = 0.0;
        for n in 0..NEIGHBORHOOD_SIZE {
            result += self.weights[n] * args[n];
        }
        result
    }
}
