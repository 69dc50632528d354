//! Structural JSON snapshots of grids

use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Grid, Page};
use crate::Result;

/// Serializable view of a grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub id: String,
    pub rows: usize,
    pub columns: usize,
    pub proportional_sizing: bool,
    pub cells: Vec<Cell>,
}

impl GridSnapshot {
    pub fn capture(grid: &Grid) -> Self {
        GridSnapshot {
            id: grid.id().to_string(),
            rows: grid.rows(),
            columns: grid.columns(),
            proportional_sizing: grid.proportional_sizing(),
            cells: grid.cells().cloned().collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn painted(&self) -> usize {
        self.cells.iter().filter(|c| c.color.is_some()).count()
    }
}

/// Snapshot every table of the page as a JSON array
pub fn page_to_json(page: &Page) -> Result<String> {
    let snaps: Vec<GridSnapshot> = page.grids().map(GridSnapshot::capture).collect();
    Ok(serde_json::to_string_pretty(&snaps)?)
}
