//! Change measurement between successive grid states.

use crate::domain::Grid;
use crate::error::SolverError;

/// `sum |a - b| / (rows * cols)` over every cell, edges included.
/// Summed sequentially in row-major order so the result does not
/// depend on the thread count. NaN and infinities propagate.
#[profiling::function]
pub fn mean_absolute_difference(a: &Grid, b: &Grid) -> f64 {
    debug_assert!(a.same_shape(b));
    let n = a.buffer().len();
    if n == 0 {
        return 0.0;
    }
    let total: f64 = a
        .buffer()
        .iter()
        .zip(b.buffer())
        .map(|(x, y)| (x - y).abs())
        .sum();
    total / n as f64
}

#[inline]
pub fn has_converged(dif: f64, precision: f64) -> bool {
    dif < precision
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Convergence {
    Converged { dif: f64 },
    Continue { dif: f64 },
}

impl Convergence {
    pub fn dif(&self) -> f64 {
        match self {
            Convergence::Converged { dif } | Convergence::Continue { dif } => *dif,
        }
    }
}

/// Decides, once per iteration, whether the solver has reached steady state.
#[derive(Clone, Debug)]
pub struct ConvergenceTracker {
    precision: f64,
    strict: bool,
    last: Option<f64>,
}

impl ConvergenceTracker {
    /// In strict mode a non-finite difference is an error instead of
    /// being carried along silently.
    pub fn new(precision: f64, strict: bool) -> Self {
        ConvergenceTracker {
            precision,
            strict,
            last: None,
        }
    }

    /// Difference measured by the most recent `check`.
    pub fn last(&self) -> Option<f64> {
        self.last
    }

    pub fn check(
        &mut self,
        current: &Grid,
        next: &Grid,
        iteration: usize,
    ) -> Result<Convergence, SolverError> {
        let dif = mean_absolute_difference(current, next);
        self.last = Some(dif);
        if self.strict && !dif.is_finite() {
            return Err(SolverError::NumericalDivergence { iteration, dif });
        }
        if has_converged(dif, self.precision) {
            Ok(Convergence::Converged { dif })
        } else {
            Ok(Convergence::Continue { dif })
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    fn pair() -> (Grid, Grid) {
        let mut a = Grid::create(1.0, 1.0, 3.0, 1.0);
        let mut b = a.zeroed_like();
        a.par_set_values(|c| c[1] as f64, 2);
        b.par_set_values(|c| -(c[0] as f64), 2);
        (a, b)
    }

    #[test]
    fn mean_absolute_difference_test() {
        let (a, b) = pair();
        // a = [0 1 2 3; 0 1 2 3], b = [0 0 0 0; -1 -1 -1 -1]
        let e = (0.0 + 1.0 + 2.0 + 3.0 + 1.0 + 2.0 + 3.0 + 4.0) / 8.0;
        assert_approx_eq!(f64, mean_absolute_difference(&a, &b), e);
        assert_eq!(
            mean_absolute_difference(&a, &b),
            mean_absolute_difference(&b, &a)
        );
        assert_eq!(mean_absolute_difference(&a, &a), 0.0);
    }

    #[test]
    fn has_converged_test() {
        assert!(has_converged(9.99e-7, 1e-6));
        assert!(!has_converged(1e-6, 1e-6));
        assert!(!has_converged(f64::NAN, 1e-6));
    }

    #[test]
    fn tracker_test() {
        let (a, b) = pair();
        let mut tracker = ConvergenceTracker::new(1e-6, false);
        assert_eq!(tracker.last(), None);
        let c = tracker.check(&a, &b, 1).unwrap();
        assert!(matches!(c, Convergence::Continue { .. }));
        assert_eq!(tracker.last(), Some(c.dif()));

        let c = tracker.check(&a, &a, 2).unwrap();
        assert_eq!(c, Convergence::Converged { dif: 0.0 });
    }

    #[test]
    fn strict_mode_test() {
        let (a, mut b) = pair();
        b.set(1, 1, f64::NAN);

        let mut lenient = ConvergenceTracker::new(1e-6, false);
        let c = lenient.check(&a, &b, 4).unwrap();
        assert!(c.dif().is_nan());
        assert!(matches!(c, Convergence::Continue { .. }));

        let mut strict = ConvergenceTracker::new(1e-6, true);
        match strict.check(&a, &b, 4) {
            Err(SolverError::NumericalDivergence { iteration, dif }) => {
                assert_eq!(iteration, 4);
                assert!(dif.is_nan());
            }
            other => panic!("expected divergence, got {:?}", other),
        }
    }
}
