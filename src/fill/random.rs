use crate::color::ColorSpec;
use crate::fill::{ChosenSet, FillReport};
use crate::grid::{Cell, Grid};
use crate::random::RandomSource;
use crate::{Error, Result};

/// Paint `weight` random distinct cells for every color in the spec.
///
/// Positions count surviving cells in row-major order. Only positions chosen
/// by this call are tracked, so cells painted earlier may be painted over.
/// Asking for more distinct cells than the grid holds is rejected up front
/// with [`Error::OverAllocation`] and leaves the grid untouched.
pub fn draw_random(grid: &mut Grid, spec: &ColorSpec, rng: &mut dyn RandomSource) -> Result<FillReport> {
    let available = grid.len();
    let requested = usize::try_from(spec.total_weight()).unwrap_or(usize::MAX);
    if requested > available {
        return Err(Error::OverAllocation { requested, available });
    }

    let indices: Vec<usize> = grid.cells().map(Cell::index).collect();
    let mut chosen = ChosenSet::new(available);
    let mut report = FillReport { requested, painted: 0 };

    for entry in spec {
        for _ in 0..entry.weight {
            let Some(pos) = chosen.choose(rng) else { break };
            if grid.paint(indices[pos], &entry.color) {
                report.painted += 1;
            }
        }
    }

    log::debug!(
        "table '{}': randomly painted {} of {} cells",
        grid.id(),
        report.painted,
        available
    );
    Ok(report)
}
