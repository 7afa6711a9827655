use crate::boundary::RightEdgeSign;
use crate::domain::Grid;
use crate::error::SolverError;
use crate::util::arange;

/// Everything one solver run needs. Owned by the run, never global.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfiguration {
    /// Grid spacing in x.
    pub x_step: f64,

    /// Grid spacing in y.
    pub y_step: f64,

    /// Simulated time per iteration.
    pub time_step: f64,

    pub domain_length_x: f64,

    pub domain_length_y: f64,

    /// `None` runs to convergence, `Some(t)` also stops once the
    /// simulated time reaches `t`. `Some(0.0)` returns the initial grid.
    pub target_time: Option<f64>,

    pub convergence_precision: f64,

    pub right_edge_sign: RightEdgeSign,

    /// Reject `dt/dx^2 + dt/dy^2 >= 0.5` in `validate`.
    pub check_stability: bool,

    /// Fail with `NumericalDivergence` when the difference is not finite.
    pub strict: bool,

    /// Emit the initial grid and every n-th iteration as intermediate snapshots.
    pub snapshot_interval: Option<usize>,

    pub max_iterations: Option<usize>,

    /// Cells per parallel task in the sweep.
    pub chunk_size: usize,
}

impl Default for SolverConfiguration {
    fn default() -> Self {
        SolverConfiguration {
            x_step: 0.05,
            y_step: 0.025,
            time_step: 0.0001,
            domain_length_x: 2.0,
            domain_length_y: 1.0,
            target_time: None,
            convergence_precision: 1e-6,
            right_edge_sign: RightEdgeSign::Positive,
            check_stability: true,
            strict: false,
            snapshot_interval: None,
            max_iterations: None,
            chunk_size: 1024,
        }
    }
}

fn require_positive(name: &str, v: f64) -> Result<(), SolverError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(SolverError::InvalidConfiguration(format!(
            "{name} must be positive and finite, got {v}"
        )))
    }
}

impl SolverConfiguration {
    /// `dt/dx^2 + dt/dy^2`, must stay below 0.5 for the explicit scheme.
    pub fn stability_ratio(&self) -> f64 {
        self.time_step / (self.x_step * self.x_step)
            + self.time_step / (self.y_step * self.y_step)
    }

    /// Number of samples along x and y.
    pub fn grid_shape(&self) -> (usize, usize) {
        let nx = arange(0.0, self.domain_length_x + 0.5 * self.x_step, self.x_step).len();
        let ny = arange(0.0, self.domain_length_y + 0.5 * self.y_step, self.y_step).len();
        (nx, ny)
    }

    pub fn create_grid(&self) -> Grid {
        Grid::create(
            self.x_step,
            self.y_step,
            self.domain_length_x,
            self.domain_length_y,
        )
    }

    pub fn validate(&self) -> Result<(), SolverError> {
        require_positive("x_step", self.x_step)?;
        require_positive("y_step", self.y_step)?;
        require_positive("time_step", self.time_step)?;
        require_positive("domain_length_x", self.domain_length_x)?;
        require_positive("domain_length_y", self.domain_length_y)?;
        require_positive("convergence_precision", self.convergence_precision)?;

        if let Some(t) = self.target_time {
            if !t.is_finite() || t < 0.0 {
                return Err(SolverError::InvalidConfiguration(format!(
                    "target_time must be finite and not negative, got {t}"
                )));
            }
        }
        if self.snapshot_interval == Some(0) {
            return Err(SolverError::InvalidConfiguration(
                "snapshot_interval must be at least 1".to_string(),
            ));
        }
        if self.max_iterations == Some(0) {
            return Err(SolverError::InvalidConfiguration(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if self.chunk_size == 0 {
            return Err(SolverError::InvalidConfiguration(
                "chunk_size must be at least 1".to_string(),
            ));
        }

        let (nx, ny) = self.grid_shape();
        if nx < 3 || ny < 3 {
            return Err(SolverError::InvalidConfiguration(format!(
                "grid needs at least 3 samples per axis for an interior, got {nx}x{ny}"
            )));
        }

        if self.check_stability {
            let ratio = self.stability_ratio();
            if ratio >= 0.5 {
                return Err(SolverError::UnstableConfiguration { ratio });
            }
        }
        Ok(())
    }
}
