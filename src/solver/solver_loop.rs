use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::boundary::{BoundaryPolicy, EdgeRules, MixedEdges};
use crate::convergence::{Convergence, ConvergenceTracker};
use crate::domain::Grid;
use crate::error::SolverError;
use crate::render::{NoOpRenderer, Renderer, Snapshot, SnapshotKind};
use crate::solver::{SimulationState, SolveReport, SolverConfiguration, Termination};
use crate::stencil::StencilUpdater;

/// Runs Jacobi sweeps on a ping-pong pair of grids until one of the
/// termination conditions holds.
///
/// Each run allocates its own buffers and tracker,
/// so one `SolverLoop` may be run any number of times.
pub struct SolverLoop<Edges: EdgeRules = MixedEdges> {
    config: SolverConfiguration,
    policy: BoundaryPolicy<Edges>,
    updater: StencilUpdater,
    interrupt: Option<Arc<AtomicBool>>,
}

impl SolverLoop<MixedEdges> {
    pub fn new(config: SolverConfiguration) -> Result<Self, SolverError> {
        let edges = MixedEdges::new(config.right_edge_sign);
        Self::with_edges(config, edges)
    }
}

impl<Edges: EdgeRules> SolverLoop<Edges> {
    /// Use custom edge rules, the configuration's `right_edge_sign` is then ignored.
    pub fn with_edges(
        config: SolverConfiguration,
        edges: Edges,
    ) -> Result<Self, SolverError> {
        config.validate()?;
        let updater = StencilUpdater::new(config.chunk_size);
        Ok(SolverLoop {
            config,
            policy: BoundaryPolicy::new(edges),
            updater,
            interrupt: None,
        })
    }

    /// The flag is polled once per iteration, after the convergence check.
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    pub fn config(&self) -> &SolverConfiguration {
        &self.config
    }

    fn interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .map(|flag| flag.load(Ordering::Relaxed))
            .unwrap_or(false)
    }

    /// The stamped grid the first sweep reads from.
    pub fn initial_grid(&self) -> Grid {
        let mut grid = self.config.create_grid();
        self.policy
            .apply_initial_condition(&mut grid, self.config.chunk_size);
        self.policy.apply_boundaries(&mut grid);
        grid
    }

    /// Run to termination, handing snapshots to `renderer`.
    pub fn run<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
    ) -> Result<SolveReport, SolverError> {
        let (_, report) = self.execute(renderer)?;
        Ok(report)
    }

    /// Run without a renderer and return the final grid.
    pub fn solve(&self) -> Result<(Grid, SolveReport), SolverError> {
        self.execute(&mut NoOpRenderer)
    }

    fn emit<R: Renderer + ?Sized>(
        renderer: &mut R,
        grid: &Grid,
        state: &SimulationState,
        kind: SnapshotKind,
    ) -> Result<(), SolverError> {
        let snapshot = Snapshot {
            grid,
            time: state.grid_time,
            iteration: state.iterations,
            dif: state.dif,
            kind,
        };
        renderer.render(&snapshot)?;
        Ok(())
    }

    fn finish<R: Renderer + ?Sized>(
        renderer: &mut R,
        grid: Grid,
        state: &SimulationState,
        termination: Termination,
    ) -> Result<(Grid, SolveReport), SolverError> {
        Self::emit(renderer, &grid, state, SnapshotKind::Final(termination))?;
        renderer.finish()?;
        let report = SolveReport::from_state(state, termination);
        log::info!("solver finished: {}", report);
        Ok((grid, report))
    }

    fn execute<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
    ) -> Result<(Grid, SolveReport), SolverError> {
        let config = &self.config;
        let mut current = self.initial_grid();
        let mut next = current.clone();
        let mut tracker = ConvergenceTracker::new(
            config.convergence_precision,
            config.strict,
        );
        let mut state = SimulationState::new(config.time_step);

        log::info!(
            "solver start: {}x{} grid, dx={} dy={} dt={} target_time={:?} precision={:e}",
            current.rows(),
            current.cols(),
            config.x_step,
            config.y_step,
            config.time_step,
            config.target_time,
            config.convergence_precision
        );

        if config.target_time == Some(0.0) {
            return Self::finish(renderer, current, &state, Termination::TimeBound);
        }

        if config.snapshot_interval.is_some() {
            Self::emit(renderer, &current, &state, SnapshotKind::Intermediate)?;
        }

        loop {
            next.copy_edges_from(&current);
            self.updater.sweep(&current, &mut next)?;
            self.policy.apply_boundaries(&mut next);

            let convergence = tracker.check(&current, &next, state.iterations + 1)?;
            state.dif = Some(convergence.dif());
            log::debug!("t = {:.6}, dif = {:e}", state.time, convergence.dif());

            if let Convergence::Converged { .. } = convergence {
                return Self::finish(renderer, current, &state, Termination::Converged);
            }

            std::mem::swap(&mut current, &mut next);
            state.promote();

            if let Some(target) = config.target_time {
                if state.time >= target {
                    return Self::finish(
                        renderer,
                        current,
                        &state,
                        Termination::TimeBound,
                    );
                }
            }

            if let Some(limit) = config.max_iterations {
                if state.iterations >= limit {
                    return Self::finish(
                        renderer,
                        current,
                        &state,
                        Termination::IterationLimit,
                    );
                }
            }

            if self.interrupted() {
                log::info!("interrupt requested at iteration {}", state.iterations);
                return Self::finish(renderer, current, &state, Termination::Interrupted);
            }

            if let Some(interval) = config.snapshot_interval {
                if state.iterations % interval == 0 {
                    Self::emit(renderer, &current, &state, SnapshotKind::Intermediate)?;
                }
            }

            state.advance();
            profiling::finish_frame!();
        }
    }
}
