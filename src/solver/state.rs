use std::fmt;

/// Why a run stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    /// Mean absolute difference dropped below the precision.
    Converged,
    /// Simulated time reached the target time.
    TimeBound,
    /// The interrupt flag was raised.
    Interrupted,
    /// `max_iterations` promotions were performed.
    IterationLimit,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Termination::Converged => "converged",
            Termination::TimeBound => "time bound reached",
            Termination::Interrupted => "interrupted",
            Termination::IterationLimit => "iteration limit reached",
        };
        write!(f, "{}", s)
    }
}

/// Per-run bookkeeping.
/// `time` is the simulated time of the sweep in flight,
/// `grid_time` the simulated time of the current grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationState {
    pub time: f64,
    pub time_step: f64,
    pub iterations: usize,
    pub dif: Option<f64>,
    pub grid_time: f64,
}

impl SimulationState {
    pub fn new(time_step: f64) -> Self {
        SimulationState {
            time: time_step,
            time_step,
            iterations: 0,
            dif: None,
            grid_time: 0.0,
        }
    }

    /// The freshly swept grid became current.
    pub fn promote(&mut self) {
        self.iterations += 1;
        self.grid_time = self.time;
    }

    pub fn advance(&mut self) {
        self.time += self.time_step;
    }
}

/// Summary of a finished run, describing the returned grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolveReport {
    pub termination: Termination,
    pub iterations: usize,
    /// Simulated time of the returned grid.
    pub time: f64,
    /// Difference measured by the last sweep, `None` if none ran.
    pub dif: Option<f64>,
}

impl SolveReport {
    pub fn from_state(state: &SimulationState, termination: Termination) -> Self {
        SolveReport {
            termination,
            iterations: state.iterations,
            time: state.grid_time,
            dif: state.dif,
        }
    }
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} after {} iterations, t = {:.6}",
            self.termination, self.iterations, self.time
        )?;
        if let Some(dif) = self.dif {
            write!(f, ", dif = {:e}", dif)?;
        }
        Ok(())
    }
}
