use clap::ValueEnum;
use std::f64::consts::PI;

/// Value every cell holds before the first sweep.
pub const INITIAL_VALUE: f64 = 1.0;

/// Sign applied to `sin(3 pi y)` on the right edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RightEdgeSign {
    #[default]
    Positive,
    Negative,
}

impl RightEdgeSign {
    pub fn factor(&self) -> f64 {
        match self {
            RightEdgeSign::Positive => 1.0,
            RightEdgeSign::Negative => -1.0,
        }
    }
}

/// du/dx = 0 at x = 0, stamped by copying the neighbouring edge sample.
#[inline]
pub fn neumann_copy(_y: f64, neighbour: f64) -> f64 {
    neighbour
}

/// u(x_max, y) = +-sin(3 pi y)
#[inline]
pub fn right_dirichlet(y: f64, sign: RightEdgeSign) -> f64 {
    sign.factor() * (3.0 * PI * y).sin()
}

/// u(x, 0) = 0
#[inline]
pub fn top_dirichlet(_x: f64) -> f64 {
    0.0
}

/// u(x, y_max) = -cos(7 pi x / 4)
#[inline]
pub fn bottom_dirichlet(x: f64) -> f64 {
    -(7.0 * PI * x / 4.0).cos()
}

#[inline]
pub fn constant_initial(_x: f64, _y: f64) -> f64 {
    INITIAL_VALUE
}

/// The four edge conditions and the initial condition of a problem.
/// Implementations must be pure functions of their arguments.
pub trait EdgeRules: Sync {
    /// Left edge value given the sample one row below on the same edge.
    fn left(&self, y: f64, neighbour: f64) -> f64;

    fn right(&self, y: f64) -> f64;

    fn top(&self, x: f64) -> f64;

    fn bottom(&self, x: f64) -> f64;

    fn initial(&self, x: f64, y: f64) -> f64;
}

/// Neumann on the left, Dirichlet on the right, top and bottom.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MixedEdges {
    pub right_sign: RightEdgeSign,
}

impl MixedEdges {
    pub fn new(right_sign: RightEdgeSign) -> Self {
        MixedEdges { right_sign }
    }
}

impl EdgeRules for MixedEdges {
    fn left(&self, y: f64, neighbour: f64) -> f64 {
        neumann_copy(y, neighbour)
    }

    fn right(&self, y: f64) -> f64 {
        right_dirichlet(y, self.right_sign)
    }

    fn top(&self, x: f64) -> f64 {
        top_dirichlet(x)
    }

    fn bottom(&self, x: f64) -> f64 {
        bottom_dirichlet(x)
    }

    fn initial(&self, x: f64, y: f64) -> f64 {
        constant_initial(x, y)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn neumann_copy_test() {
        assert_eq!(neumann_copy(0.3, -0.75), -0.75);
        assert_eq!(neumann_copy(0.0, 1.0), 1.0);
    }

    #[test]
    fn right_dirichlet_test() {
        assert_eq!(right_dirichlet(0.0, RightEdgeSign::Positive), 0.0);
        assert_eq!(right_dirichlet(0.5, RightEdgeSign::Positive), -1.0);
        assert_eq!(right_dirichlet(0.5, RightEdgeSign::Negative), 1.0);
        assert_approx_eq!(
            f64,
            right_dirichlet(1.0 / 6.0, RightEdgeSign::Positive),
            1.0,
            epsilon = 1e-15
        );
        for i in 0..=40 {
            let y = i as f64 * 0.025;
            assert_eq!(
                right_dirichlet(y, RightEdgeSign::Negative),
                -right_dirichlet(y, RightEdgeSign::Positive)
            );
        }
        assert_eq!(RightEdgeSign::Negative.factor(), -1.0);
    }

    #[test]
    fn top_dirichlet_test() {
        for i in 0..=40 {
            assert_eq!(top_dirichlet(i as f64 * 0.05), 0.0);
        }
    }

    #[test]
    fn bottom_dirichlet_test() {
        assert_eq!(bottom_dirichlet(0.0), -1.0);
        assert_eq!(bottom_dirichlet(0.05), -0.9624552364536473);
        assert_eq!(bottom_dirichlet(0.1), -0.8526401643540922);
        assert_approx_eq!(f64, bottom_dirichlet(4.0 / 7.0), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn mixed_edges_test() {
        let edges = MixedEdges::default();
        assert_eq!(edges.right_sign, RightEdgeSign::Positive);
        assert_eq!(edges.initial(0.3, 0.7), 1.0);
        assert_eq!(edges.left(0.2, 4.0), 4.0);
        assert_eq!(edges.top(1.3), 0.0);
        assert_eq!(edges.right(0.5), -1.0);
        assert_eq!(MixedEdges::new(RightEdgeSign::Negative).right(0.5), 1.0);
    }
}
