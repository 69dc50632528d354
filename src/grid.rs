//! Grid structure: tables of uniquely identified cells
//!
//! A [`Grid`] owns its cells keyed by their 1-based sequential index. Origins
//! never move once created, so ascending key order is the row-major order in
//! which a rendered table lists its cells, even after merges remove some.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Stable identifier of a cell: table identifier plus sequential index
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId {
    pub table: String,
    pub index: usize,
}

impl CellId {
    pub fn new(table: impl Into<String>, index: usize) -> Self {
        CellId { table: table.into(), index }
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell_{}_{}", self.table, self.index)
    }
}

impl FromStr for CellId {
    type Err = Error;

    /// Parses `cell_<table>_<index>`; the table part may contain underscores.
    fn from_str(s: &str) -> Result<Self> {
        let rest = s
            .strip_prefix("cell_")
            .ok_or_else(|| Error::InvalidCellId(s.to_string()))?;
        let (table, index) = rest
            .rsplit_once('_')
            .ok_or_else(|| Error::InvalidCellId(s.to_string()))?;
        let index = index
            .parse::<usize>()
            .map_err(|_| Error::InvalidCellId(s.to_string()))?;
        Ok(CellId::new(table, index))
    }
}

/// A rectangular region of the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub id: CellId,
    /// Origin row (0-based)
    pub row: usize,
    /// Origin column (0-based)
    pub column: usize,
    pub col_span: usize,
    pub row_span: usize,
    pub color: Option<String>,
}

impl Cell {
    fn new(table: &str, index: usize, row: usize, column: usize) -> Self {
        Cell {
            id: CellId::new(table, index),
            row,
            column,
            col_span: 1,
            row_span: 1,
            color: None,
        }
    }

    pub fn index(&self) -> usize {
        self.id.index
    }

    pub fn is_painted(&self) -> bool {
        self.color.is_some()
    }
}

/// A rows x columns table of cells
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    id: String,
    rows: usize,
    columns: usize,
    cells: BTreeMap<usize, Cell>,
    proportional_sizing: bool,
}

impl Grid {
    /// Build a fresh grid with `rows * columns` cells numbered `1..=rows*columns`
    pub fn new(id: impl Into<String>, rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(Error::InvalidDimension { rows, columns });
        }
        let id = id.into();
        let mut cells = BTreeMap::new();
        let mut index = 0;
        for row in 0..rows {
            for column in 0..columns {
                index += 1;
                cells.insert(index, Cell::new(&id, index, row, column));
            }
        }
        log::debug!("built table '{}' with {} cells", id, index);
        Ok(Grid { id, rows, columns, cells, proportional_sizing: false })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Original row count (unchanged by merging)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Original column count (unchanged by merging)
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of original positions, `rows * columns`
    pub fn area(&self) -> usize {
        self.rows * self.columns
    }

    /// Number of surviving cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(&index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(&index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains_key(&index)
    }

    /// Resolve a cell identifier; identifiers of other tables never resolve
    pub fn lookup(&self, id: &CellId) -> Option<&Cell> {
        if id.table != self.id {
            return None;
        }
        self.cells.get(&id.index)
    }

    pub fn lookup_mut(&mut self, id: &CellId) -> Option<&mut Cell> {
        if id.table != self.id {
            return None;
        }
        self.cells.get_mut(&id.index)
    }

    /// Remove a cell from the grid entirely
    pub fn remove(&mut self, index: usize) -> Option<Cell> {
        self.cells.remove(&index)
    }

    /// The `n`-th surviving cell in row-major order
    pub fn nth(&self, n: usize) -> Option<&Cell> {
        self.cells.values().nth(n)
    }

    /// Surviving cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// Surviving cells whose origin lies in `row`, left to right
    pub fn cells_in_row(&self, row: usize) -> impl Iterator<Item = &Cell> {
        let start = row * self.columns + 1;
        let end = start + self.columns;
        self.cells.range(start..end).map(|(_, c)| c)
    }

    /// Smallest surviving index within `range`
    pub fn first_index_in(&self, range: std::ops::Range<usize>) -> Option<usize> {
        self.cells.range(range).next().map(|(index, _)| *index)
    }

    /// Sequential index of the position at `(row, column)`
    pub fn index_of(&self, row: usize, column: usize) -> usize {
        row * self.columns + column + 1
    }

    pub fn painted_count(&self) -> usize {
        self.cells.values().filter(|c| c.is_painted()).count()
    }

    /// Reset every surviving cell to unpainted
    pub fn clear_colors(&mut self) {
        for cell in self.cells.values_mut() {
            cell.color = None;
        }
    }

    /// Set the color of the cell at `index`; missing cells are a no-op
    pub fn paint(&mut self, index: usize, color: &str) -> bool {
        match self.cells.get_mut(&index) {
            Some(cell) => {
                cell.color = Some(color.to_string());
                true
            }
            None => false,
        }
    }

    /// Whether cells render with widths/heights proportional to their spans
    pub fn proportional_sizing(&self) -> bool {
        self.proportional_sizing
    }

    pub fn set_proportional_sizing(&mut self, on: bool) {
        self.proportional_sizing = on;
    }

    /// Index of the surviving cell covering `(row, column)`, if any
    pub fn covering(&self, row: usize, column: usize) -> Option<usize> {
        self.cells
            .values()
            .find(|c| {
                (c.row..c.row + c.row_span).contains(&row)
                    && (c.column..c.column + c.col_span).contains(&column)
            })
            .map(Cell::index)
    }
}

/// An ordered collection of tables, like the body of a document
#[derive(Debug, Clone, Default)]
pub struct Page {
    grids: Vec<Grid>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table and add it to the page.
    ///
    /// A table already registered under the same identifier is replaced in
    /// place; otherwise the new one is appended.
    pub fn write_table(&mut self, id: &str, rows: usize, columns: usize) -> Result<&mut Grid> {
        let grid = Grid::new(id, rows, columns)?;
        Ok(self.insert(grid))
    }

    /// Add an already built grid, replacing any table with the same identifier
    pub fn insert(&mut self, grid: Grid) -> &mut Grid {
        let pos = match self.grids.iter().position(|g| g.id() == grid.id()) {
            Some(pos) => {
                log::debug!("replacing table '{}'", grid.id());
                self.grids[pos] = grid;
                pos
            }
            None => {
                self.grids.push(grid);
                self.grids.len() - 1
            }
        };
        &mut self.grids[pos]
    }

    pub fn grid(&self, id: &str) -> Option<&Grid> {
        self.grids.iter().find(|g| g.id() == id)
    }

    pub fn grid_mut(&mut self, id: &str) -> Option<&mut Grid> {
        self.grids.iter_mut().find(|g| g.id() == id)
    }

    pub fn grids(&self) -> impl Iterator<Item = &Grid> {
        self.grids.iter()
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}
