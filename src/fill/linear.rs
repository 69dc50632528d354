use crate::color::ColorSpec;
use crate::fill::FillReport;
use crate::grid::Grid;

/// Paint consecutive cells starting right after `offset`, one color block
/// after another in spec order.
///
/// The position only advances when a cell was actually painted, so once it
/// runs past the last cell (or hits a removed one) every remaining paint is
/// dropped without error.
pub fn draw_linear(grid: &mut Grid, spec: &ColorSpec, offset: usize) -> FillReport {
    let mut position = offset.saturating_add(1);
    let mut report = FillReport {
        requested: usize::try_from(spec.total_weight()).unwrap_or(usize::MAX),
        painted: 0,
    };

    // a failed paint never moves the position, so nothing after it can land
    'fill: for entry in spec {
        for _ in 0..entry.weight {
            if !grid.paint(position, &entry.color) {
                break 'fill;
            }
            report.painted += 1;
            position += 1;
        }
    }

    if report.dropped() > 0 {
        log::warn!(
            "table '{}': {} of {} linear paints fell outside the grid",
            grid.id(),
            report.dropped(),
            report.requested
        );
    }
    report
}
