//! DOMondrian
//!
//! Builds grid tables of uniquely identified cells and fills them with colors
//! using one of several placement strategies, then renders the result as an
//! HTML table or a JSON snapshot.
//!
//! # Strategies
//!
//! - **Linear**: consecutive cells, one color block after another
//! - **Random**: a fixed number of random distinct cells per color
//! - **Ratio**: the whole grid, shared out by relative frequency
//! - **Mondrian**: neighboring cells merged into rectangular blocks, then
//!   filled by ratio
//!
//! # Example
//!
//! ```
//! use domondrian::{fill, ColorSpec, Grid};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut grid = Grid::new("hello", 5, 7)?;
//! let spec: ColorSpec = r#"[["red",3],["blue",3],["black",6]]"#.parse()?;
//! let report = fill::draw_linear(&mut grid, &spec, 0);
//! assert_eq!(report.painted, 12);
//! println!("{}", domondrian::rendering::html::render_table(&grid));
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod color;
pub mod demo;
pub mod fill;
pub mod grid;
pub mod mondrian;
pub mod paint;
pub mod random;
pub mod rendering;

pub use color::{ColorSpec, ColorWeight};
pub use fill::FillReport;
pub use grid::{Cell, CellId, Grid, Page};
pub use mondrian::draw_mondrian;
pub use paint::paint_in;
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};

/// Configuration for Mondrian layouts
///
/// The defaults merge sideways more eagerly than downwards, which favours
/// blocks that are wider than they are tall:
/// - `horizontal_threshold` starts at 0.8
/// - `vertical_threshold` starts at 0.6
/// - thresholds decay faster on grids under `decay_area_unit` positions
///
/// # Examples
///
/// ```
/// let cfg = domondrian::MondrianConfig::default();
/// assert!(cfg.horizontal_threshold > cfg.vertical_threshold);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MondrianConfig {
    /// Probability of the first merge to the right
    pub horizontal_threshold: f64,
    /// Probability of the first merge downwards
    pub vertical_threshold: f64,
    /// Grid area (rows x columns) per unit of the threshold decay factor
    pub decay_area_unit: f64,
}

impl Default for MondrianConfig {
    fn default() -> Self {
        Self {
            horizontal_threshold: 0.8,
            vertical_threshold: 0.6,
            decay_area_unit: 50.0,
        }
    }
}

impl MondrianConfig {
    /// Check thresholds are probabilities and the decay unit is positive
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("horizontal_threshold", self.horizontal_threshold),
            ("vertical_threshold", self.vertical_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::ConfigError(format!("{} must be within [0, 1], got {}", name, value)));
            }
        }
        if !(self.decay_area_unit.is_finite() && self.decay_area_unit > 0.0) {
            return Err(Error::ConfigError(format!(
                "decay_area_unit must be positive, got {}",
                self.decay_area_unit
            )));
        }
        Ok(())
    }

    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: MondrianConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
