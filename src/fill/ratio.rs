use crate::color::ColorSpec;
use crate::fill::{ChosenSet, FillReport};
use crate::grid::{Cell, Grid};
use crate::random::RandomSource;
use crate::{Error, Result};

/// Per-color cell targets when `cells` are shared by relative frequency.
///
/// Each target is `round(weight * cells / total)`, so the sum may miss
/// `cells` by a cell or two either way.
pub fn ratio_targets(spec: &ColorSpec, cells: usize) -> Result<Vec<usize>> {
    let total = spec.total_weight();
    if total == 0 {
        return Err(Error::EmptyColorSpec);
    }
    let scale = cells as f64 / total as f64;
    Ok(spec
        .iter()
        .map(|e| (f64::from(e.weight) * scale).round() as usize)
        .collect())
}

/// Fill the whole grid with the spec's colors in proportion to their weights.
///
/// Placement is the same random draw with forward stepping as
/// [`draw_random`](crate::fill::draw_random). When the rounded targets add up
/// to more than the grid holds, painting stops as soon as every cell has been
/// chosen, leaving the last colors short. When they add up to less, a few
/// cells stay unpainted.
pub fn draw_random_ratio(
    grid: &mut Grid,
    spec: &ColorSpec,
    rng: &mut dyn RandomSource,
) -> Result<FillReport> {
    let available = grid.len();
    let targets = ratio_targets(spec, available)?;
    let indices: Vec<usize> = grid.cells().map(Cell::index).collect();
    let mut chosen = ChosenSet::new(available);
    let mut report = FillReport { requested: targets.iter().sum(), painted: 0 };

    for (entry, target) in spec.iter().zip(targets) {
        let mut painted = 0;
        while painted < target {
            let Some(pos) = chosen.choose(rng) else { break };
            painted += 1;
            if grid.paint(indices[pos], &entry.color) {
                report.painted += 1;
            }
        }
        log::trace!("'{}': {} of {} cells", entry.color, painted, target);
    }

    if report.requested > available {
        log::debug!(
            "table '{}': rounding asked for {} cells, capped at {}",
            grid.id(),
            report.requested,
            available
        );
    }
    debug_assert_eq!(report.painted, chosen.len());
    Ok(report)
}
