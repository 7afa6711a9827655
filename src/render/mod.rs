//! The collaborator that receives grid snapshots from the solver:
//! image, csv and vtk writers, a log reporter, and helpers to combine
//! or record renderers.

mod csv;
mod png;
mod reporter;
mod vtk;

pub use self::csv::*;
pub use self::png::*;
pub use self::reporter::*;
pub use self::vtk::*;

use crate::domain::Grid;
use crate::error::RenderError;
use crate::solver::Termination;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SnapshotKind {
    Intermediate,
    Final(Termination),
}

/// A fully boundary-stamped grid at one moment of the run.
#[derive(Copy, Clone, Debug)]
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    /// Simulated time of `grid`.
    pub time: f64,
    /// Promotions performed before `grid` became current.
    pub iteration: usize,
    /// Most recent mean absolute difference, if any sweep has run.
    pub dif: Option<f64>,
    pub kind: SnapshotKind,
}

impl Snapshot<'_> {
    pub fn is_final(&self) -> bool {
        matches!(self.kind, SnapshotKind::Final(_))
    }
}

pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> Result<(), RenderError>;

    /// Called once, after the final snapshot.
    fn finish(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> Result<(), RenderError> {
        (**self).render(snapshot)
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        (**self).finish()
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> Result<(), RenderError> {
        (**self).render(snapshot)
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        (**self).finish()
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct NoOpRenderer;

impl Renderer for NoOpRenderer {
    fn render(&mut self, _snapshot: &Snapshot<'_>) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Fans every snapshot out to each renderer in insertion order.
/// Stops at the first error.
#[derive(Default)]
pub struct CompositeRenderer<'a> {
    renderers: Vec<Box<dyn Renderer + 'a>>,
}

impl<'a> CompositeRenderer<'a> {
    pub fn new() -> Self {
        CompositeRenderer {
            renderers: Vec::new(),
        }
    }

    pub fn push<R: Renderer + 'a>(&mut self, renderer: R) {
        self.renderers.push(Box::new(renderer));
    }

    pub fn with<R: Renderer + 'a>(mut self, renderer: R) -> Self {
        self.push(renderer);
        self
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl Renderer for CompositeRenderer<'_> {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> Result<(), RenderError> {
        for r in self.renderers.iter_mut() {
            r.render(snapshot)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        for r in self.renderers.iter_mut() {
            r.finish()?;
        }
        Ok(())
    }
}

/// Owned copy of a snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedSnapshot {
    pub grid: Grid,
    pub time: f64,
    pub iteration: usize,
    pub dif: Option<f64>,
    pub kind: SnapshotKind,
}

/// Keeps a copy of every snapshot it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    pub snapshots: Vec<RecordedSnapshot>,
    pub finished: bool,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn final_snapshot(&self) -> Option<&RecordedSnapshot> {
        self.snapshots
            .iter()
            .rev()
            .find(|s| matches!(s.kind, SnapshotKind::Final(_)))
    }

    pub fn intermediate_count(&self) -> usize {
        self.snapshots
            .iter()
            .filter(|s| s.kind == SnapshotKind::Intermediate)
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> Result<(), RenderError> {
        self.snapshots.push(RecordedSnapshot {
            grid: snapshot.grid.clone(),
            time: snapshot.time,
            iteration: snapshot.iteration,
            dif: snapshot.dif,
            kind: snapshot.kind,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        self.finished = true;
        Ok(())
    }
}

/// Map `v` into `[0, 1]` over `[lo, hi]`, for colour gradients.
pub(crate) fn normalize(v: f64, lo: f64, hi: f64) -> f64 {
    if !(hi > lo) || !v.is_finite() {
        return 0.5;
    }
    ((v - lo) / (hi - lo)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    struct Failing;

    impl Renderer for Failing {
        fn render(&mut self, _snapshot: &Snapshot<'_>) -> Result<(), RenderError> {
            Err(RenderError::Vtk("nope".to_string()))
        }
    }

    fn snapshot(grid: &Grid, kind: SnapshotKind) -> Snapshot<'_> {
        Snapshot {
            grid,
            time: 0.5,
            iteration: 3,
            dif: Some(1e-3),
            kind,
        }
    }

    #[test]
    fn recording_test() {
        let grid = Grid::create(0.5, 0.5, 1.0, 1.0);
        let mut recorder = RecordingRenderer::new();
        recorder
            .render(&snapshot(&grid, SnapshotKind::Intermediate))
            .unwrap();
        assert!(recorder.final_snapshot().is_none());
        recorder
            .render(&snapshot(&grid, SnapshotKind::Final(Termination::Converged)))
            .unwrap();
        recorder.finish().unwrap();
        assert!(recorder.finished);
        assert_eq!(recorder.intermediate_count(), 1);
        let f = recorder.final_snapshot().unwrap();
        assert_eq!(f.iteration, 3);
        assert_eq!(f.grid, grid);
    }

    #[test]
    fn composite_test() {
        let grid = Grid::create(0.5, 0.5, 1.0, 1.0);
        let mut a = RecordingRenderer::new();
        let mut b = RecordingRenderer::new();
        {
            let mut composite = CompositeRenderer::new().with(&mut a).with(&mut b);
            assert_eq!(composite.len(), 2);
            composite
                .render(&snapshot(&grid, SnapshotKind::Intermediate))
                .unwrap();
            composite.finish().unwrap();
        }
        assert_eq!(a.snapshots.len(), 1);
        assert_eq!(b.snapshots.len(), 1);
        assert!(a.finished && b.finished);
    }

    #[test]
    fn composite_stops_on_error() {
        let grid = Grid::create(0.5, 0.5, 1.0, 1.0);
        let mut after = RecordingRenderer::new();
        {
            let mut composite = CompositeRenderer::new();
            composite.push(Failing);
            composite.push(&mut after);
            assert!(composite
                .render(&snapshot(&grid, SnapshotKind::Intermediate))
                .is_err());
        }
        assert!(after.snapshots.is_empty());
    }

    #[test]
    fn normalize_test() {
        assert_eq!(normalize(0.0, -1.0, 1.0), 0.5);
        assert_eq!(normalize(1.0, -1.0, 1.0), 1.0);
        assert_eq!(normalize(-3.0, -1.0, 1.0), 0.0);
        assert_eq!(normalize(2.0, 2.0, 2.0), 0.5);
        assert_eq!(normalize(f64::NAN, 0.0, 1.0), 0.5);
    }
}
