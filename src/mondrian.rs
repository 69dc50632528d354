//! Mondrian layouts: merge neighboring cells into larger blocks, then fill
//! the irregular result by ratio.
//!
//! Every surviving cell is visited once in row-major order. It first grows to
//! the right, then downwards, each step succeeding while a uniform draw stays
//! below a threshold. After each successful step the threshold decays by
//! `(a - 1) / a` where `a = rows * columns / decay_area_unit`, so large grids
//! keep merging for a while and small ones (`a <= 1`) merge at most once per
//! direction. Absorbed cells are removed from the grid.

use crate::color::ColorSpec;
use crate::fill::{draw_random_ratio, FillReport};
use crate::grid::{Grid, Page};
use crate::random::RandomSource;
use crate::{Error, MondrianConfig, Result};

fn decay(threshold: f64, area_factor: f64) -> f64 {
    threshold / area_factor * (area_factor - 1.0)
}

/// Take a draw and report whether it lands under `threshold`; a NaN
/// threshold never merges.
fn merge_draw(rng: &mut dyn RandomSource, threshold: f64) -> bool {
    matches!(rng.next_unit().partial_cmp(&threshold), Some(std::cmp::Ordering::Less))
}

fn area_factor(grid: &Grid, decay_area_unit: f64) -> f64 {
    grid.area() as f64 / decay_area_unit
}

/// Grow the cell at `index` to the right. Returns the number of cells absorbed.
///
/// A draw is only taken while a right neighbor exists, i.e. the cell does not
/// touch the right edge and the next position has not been absorbed already.
pub fn extend_col_span(
    grid: &mut Grid,
    index: usize,
    threshold: f64,
    decay_area_unit: f64,
    rng: &mut dyn RandomSource,
) -> usize {
    let Some(cell) = grid.get(index) else { return 0 };
    let column = cell.column;
    let mut span = cell.col_span;
    let factor = area_factor(grid, decay_area_unit);
    let mut threshold = threshold;
    let mut absorbed = 0;

    while column + span < grid.columns() && grid.contains(index + span) {
        if !merge_draw(rng, threshold) {
            break;
        }
        grid.remove(index + span);
        span += 1;
        absorbed += 1;
        threshold = decay(threshold, factor);
    }

    if let Some(cell) = grid.get_mut(index) {
        cell.col_span = span;
    }
    absorbed
}

/// Grow the cell at `index` downwards, one full row of its width per step.
/// Returns the number of rows added.
pub fn extend_row_span(
    grid: &mut Grid,
    index: usize,
    threshold: f64,
    decay_area_unit: f64,
    rng: &mut dyn RandomSource,
) -> usize {
    let Some(cell) = grid.get(index) else { return 0 };
    let (row, column, col_span) = (cell.row, cell.column, cell.col_span);
    let mut span = cell.row_span;
    let factor = area_factor(grid, decay_area_unit);
    let mut threshold = threshold;
    let mut added = 0;

    while row + span < grid.rows() {
        if !merge_draw(rng, threshold) {
            break;
        }
        let below = row + span;
        for k in 0..col_span {
            let absorbed = grid.index_of(below, column + k);
            if grid.remove(absorbed).is_none() {
                log::debug!("cell {} under {} was already absorbed", absorbed, index);
            }
        }
        span += 1;
        added += 1;
        threshold = decay(threshold, factor);
    }

    if let Some(cell) = grid.get_mut(index) {
        cell.row_span = span;
    }
    added
}

/// Merge cells of a freshly built grid into rectangular blocks.
///
/// Marks the grid for proportional sizing so each block renders at
/// `span * 100 / count` percent of the table in both directions.
pub fn merge_regions(grid: &mut Grid, config: &MondrianConfig, rng: &mut dyn RandomSource) {
    let columns = grid.columns();
    for row in 0..grid.rows() {
        let mut cursor = grid.index_of(row, 0);
        let end = cursor + columns;
        while let Some(index) = grid.first_index_in(cursor..end) {
            extend_col_span(grid, index, config.horizontal_threshold, config.decay_area_unit, rng);
            extend_row_span(grid, index, config.vertical_threshold, config.decay_area_unit, rng);
            cursor = index + 1;
        }
    }
    grid.set_proportional_sizing(true);
    log::debug!(
        "table '{}': merged {} positions into {} blocks",
        grid.id(),
        grid.area(),
        grid.len()
    );
}

/// Build a table, merge it into blocks and fill it by ratio
pub fn draw_mondrian(
    id: &str,
    rows: usize,
    columns: usize,
    spec: &ColorSpec,
    config: &MondrianConfig,
    rng: &mut dyn RandomSource,
) -> Result<Grid> {
    config.validate()?;
    if spec.total_weight() == 0 {
        return Err(Error::EmptyColorSpec);
    }
    let mut grid = Grid::new(id, rows, columns)?;
    merge_regions(&mut grid, config, rng);
    let report: FillReport = draw_random_ratio(&mut grid, spec, rng)?;
    log::info!(
        "mondrian '{}': {} blocks, {} painted",
        grid.id(),
        grid.len(),
        report.painted
    );
    Ok(grid)
}

impl Page {
    /// [`draw_mondrian`] and register the result on the page
    pub fn draw_mondrian(
        &mut self,
        id: &str,
        rows: usize,
        columns: usize,
        spec: &ColorSpec,
        config: &MondrianConfig,
        rng: &mut dyn RandomSource,
    ) -> Result<&mut Grid> {
        let grid = draw_mondrian(id, rows, columns, spec, config, rng)?;
        Ok(self.insert(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, SeededRandom};

    fn assert_exact_cover(grid: &Grid) {
        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                let covering = grid
                    .cells()
                    .filter(|c| {
                        (c.row..c.row + c.row_span).contains(&row)
                            && (c.column..c.column + c.col_span).contains(&column)
                    })
                    .count();
                assert_eq!(covering, 1, "position ({}, {})", row, column);
            }
        }
    }

    #[test]
    fn horizontal_merge_stops_at_right_edge() {
        let mut grid = Grid::new("t", 2, 3).unwrap();
        // always merge; area factor 120/50 keeps the threshold positive
        let mut rng = ScriptedRandom::new(vec![0.0]);
        let absorbed = extend_col_span(&mut grid, 2, 1.0, 0.05, &mut rng);
        assert_eq!(absorbed, 1);
        assert_eq!(grid.get(2).unwrap().col_span, 2);
        assert!(!grid.contains(3));
        assert!(grid.contains(4));
    }

    #[test]
    fn small_grids_merge_at_most_once_per_direction() {
        // 5x5 = 25 positions -> factor 0.5, threshold turns negative after one step
        let mut grid = Grid::new("t", 5, 5).unwrap();
        let mut rng = ScriptedRandom::new(vec![0.0]);
        assert_eq!(extend_col_span(&mut grid, 1, 0.8, 50.0, &mut rng), 1);
        assert_eq!(extend_row_span(&mut grid, 1, 0.6, 50.0, &mut rng), 1);
        let c = grid.get(1).unwrap();
        assert_eq!((c.col_span, c.row_span), (2, 2));
        assert!(!grid.contains(6));
        assert!(!grid.contains(7));
        assert_eq!(grid.len(), 22);
    }

    #[test]
    fn nan_threshold_stops_merging() {
        // a zero decay unit turns the threshold into NaN after the first merge
        let mut grid = Grid::new("t", 1, 6).unwrap();
        let mut rng = ScriptedRandom::new(vec![0.0]);
        assert_eq!(extend_col_span(&mut grid, 1, 0.8, 0.0, &mut rng), 1);
        assert_eq!(grid.get(1).unwrap().col_span, 2);
        assert_eq!(grid.len(), 5);
        assert_eq!(rng.draws(), 2);

        let mut grid = Grid::new("t", 4, 1).unwrap();
        let mut rng = ScriptedRandom::new(vec![0.0]);
        assert_eq!(extend_row_span(&mut grid, 1, 0.6, 0.0, &mut rng), 1);
        assert_eq!(grid.get(1).unwrap().row_span, 2);
        assert_eq!(extend_row_span(&mut grid, 3, f64::NAN, 50.0, &mut rng), 0);
        assert_eq!(grid.len(), 3);
    }

    #[test]
    fn no_draw_without_a_neighbor() {
        let mut grid = Grid::new("t", 1, 2).unwrap();
        let mut rng = ScriptedRandom::new(vec![0.0]);
        assert_eq!(extend_col_span(&mut grid, 2, 0.8, 50.0, &mut rng), 0);
        assert_eq!(extend_row_span(&mut grid, 2, 0.8, 50.0, &mut rng), 0);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn vertical_merge_removes_full_width() {
        let mut grid = Grid::new("t", 3, 4).unwrap();
        let mut rng = ScriptedRandom::new(vec![0.0, 0.99]);
        // right: merge once, then 0.99 stops it
        assert_eq!(extend_col_span(&mut grid, 2, 1.0, 1.0, &mut rng), 1);
        // down: merge once, then stop
        assert_eq!(extend_row_span(&mut grid, 2, 1.0, 1.0, &mut rng), 1);
        assert!(!grid.contains(6));
        assert!(!grid.contains(7));
        assert!(grid.contains(5) && grid.contains(8));
        assert_exact_cover(&grid);
    }

    #[test]
    fn merged_grid_is_an_exact_cover() {
        for seed in 0..20 {
            let mut grid = Grid::new("m", 10, 12).unwrap();
            let mut rng = SeededRandom::new(seed);
            merge_regions(&mut grid, &MondrianConfig::default(), &mut rng);
            assert!(grid.proportional_sizing());
            assert!(grid.len() <= 120);
            for c in grid.cells() {
                assert!(c.column + c.col_span <= grid.columns());
                assert!(c.row + c.row_span <= grid.rows());
            }
            assert_exact_cover(&grid);
        }
    }

    #[test]
    fn always_merging_collapses_into_one_row_of_tall_blocks() {
        let mut grid = Grid::new("t", 2, 3).unwrap();
        let config = MondrianConfig {
            horizontal_threshold: 1.0,
            vertical_threshold: 1.0,
            decay_area_unit: 0.01,
        };
        let mut rng = ScriptedRandom::new(vec![0.0]);
        merge_regions(&mut grid, &config, &mut rng);
        assert_eq!(grid.len(), 1);
        let c = grid.get(1).unwrap();
        assert_eq!((c.col_span, c.row_span), (3, 2));
    }

    #[test]
    fn draw_mondrian_fills_blocks() {
        let spec = ColorSpec::new().with("white", 6).with("red", 1).with("blue", 1);
        let mut rng = SeededRandom::new(2024);
        let grid = draw_mondrian("m", 8, 8, &spec, &MondrianConfig::default(), &mut rng).unwrap();
        assert!(grid.painted_count() > 0);
        assert!(grid.painted_count() <= grid.len());
    }

    #[test]
    fn draw_mondrian_validates_inputs() {
        let mut rng = SeededRandom::new(1);
        let spec = ColorSpec::new().with("red", 1);
        assert!(matches!(
            draw_mondrian("m", 0, 4, &spec, &MondrianConfig::default(), &mut rng),
            Err(Error::InvalidDimension { .. })
        ));
        assert_eq!(
            draw_mondrian("m", 2, 2, &ColorSpec::new(), &MondrianConfig::default(), &mut rng).unwrap_err(),
            Error::EmptyColorSpec
        );
        let bad = MondrianConfig { horizontal_threshold: 1.5, ..Default::default() };
        assert!(matches!(
            draw_mondrian("m", 2, 2, &spec, &bad, &mut rng),
            Err(Error::ConfigError(_))
        ));
    }
}
