//! Cell painter

use crate::grid::{CellId, Grid};

/// Paint the cell named by a `cell_<table>_<index>` identifier.
///
/// Returns whether a cell was painted. Identifiers that do not parse, belong
/// to another table or name a removed cell are ignored.
pub fn paint_in(grid: &mut Grid, color: &str, id: &str) -> bool {
    let Ok(cell_id) = id.parse::<CellId>() else {
        log::trace!("ignoring unparseable cell id '{}'", id);
        return false;
    };
    paint_cell(grid, color, &cell_id)
}

/// Typed variant of [`paint_in`]
pub fn paint_cell(grid: &mut Grid, color: &str, id: &CellId) -> bool {
    match grid.lookup_mut(id) {
        Some(cell) => {
            cell.color = Some(color.to_string());
            true
        }
        None => {
            log::trace!("no cell {} in table '{}'", id, grid.id());
            false
        }
    }
}
