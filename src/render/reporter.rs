use crate::error::RenderError;
use crate::render::{Renderer, Snapshot, SnapshotKind};

/// Reports snapshots through the `log` facade instead of drawing them.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogReporter;

impl Renderer for LogReporter {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> Result<(), RenderError> {
        let (lo, hi) = snapshot.grid.min_max();
        match snapshot.kind {
            SnapshotKind::Intermediate => log::info!(
                "snapshot: t={:.6} iteration={} dif={:?} min={:.6} max={:.6}",
                snapshot.time,
                snapshot.iteration,
                snapshot.dif,
                lo,
                hi
            ),
            SnapshotKind::Final(termination) => log::info!(
                "final ({}): {}x{} grid, t={:.6} iteration={} dif={:?} min={:.6} max={:.6}",
                termination,
                snapshot.grid.rows(),
                snapshot.grid.cols(),
                snapshot.time,
                snapshot.iteration,
                snapshot.dif,
                lo,
                hi
            ),
        }
        Ok(())
    }
}
