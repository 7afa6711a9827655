//! Error types for the solver and its renderers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    /// The stencil was evaluated on an edge cell. Edge cells belong to the
    /// boundary policy, so this is always a wiring bug.
    #[error("stencil applied at boundary cell (row {row}, col {col}) of a {rows}x{cols} grid")]
    OutOfDomain {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("unstable configuration: dt/dx^2 + dt/dy^2 = {ratio} must be below 0.5")]
    UnstableConfiguration { ratio: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("grid shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("mean absolute difference became {dif} at iteration {iteration}")]
    NumericalDivergence { iteration: usize, dif: f64 },

    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("image output failed")]
    Image(#[from] image::ImageError),

    #[error("i/o failed")]
    Io(#[from] std::io::Error),

    #[error("vtk export failed: {0}")]
    Vtk(String),

    #[error("snapshot has shape {found:?}, renderer expects {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn display_test() {
        let e = SolverError::OutOfDomain {
            row: 0,
            col: 3,
            rows: 41,
            cols: 41,
        };
        assert_eq!(
            e.to_string(),
            "stencil applied at boundary cell (row 0, col 3) of a 41x41 grid"
        );

        let e = SolverError::UnstableConfiguration { ratio: 0.5 };
        assert!(e.to_string().contains("0.5"));

        let e: SolverError = RenderError::Vtk("bad".to_string()).into();
        assert_eq!(e.to_string(), "vtk export failed: bad");
    }

    #[test]
    fn errors_are_send() {
        fn assert_send<T: Send + Sync>() {}
        assert_send::<SolverError>();
    }
}
