//! The five-part demo page: a bare table, then one table per fill strategy

use crate::color::ColorSpec;
use crate::fill::{draw_linear, draw_random, draw_random_ratio};
use crate::grid::Page;
use crate::random::RandomSource;
use crate::{MondrianConfig, Result};

/// Palette used by the linear demo (3 red, 3 blue, 6 black)
pub fn line_palette() -> ColorSpec {
    ColorSpec::new().with("red", 3).with("blue", 3).with("black", 6)
}

/// Palette used by the random demo, 18 cells in total
pub fn random_palette() -> ColorSpec {
    ColorSpec::new()
        .with("red", 5)
        .with("blue", 5)
        .with("yellow", 5)
        .with("black", 3)
}

/// Relative frequencies used by the ratio and Mondrian demos
pub fn mondrian_palette() -> ColorSpec {
    ColorSpec::new()
        .with("white", 10)
        .with("red", 2)
        .with("blue", 2)
        .with("yellow", 2)
        .with("black", 1)
}

/// Build the demo page: `calendart`, `lineart`, `randomart`, `ratioart` and
/// `mondrian`, in that order
pub fn build_demo_page(config: &MondrianConfig, rng: &mut dyn RandomSource) -> Result<Page> {
    let mut page = Page::new();

    page.write_table("calendart", 5, 7)?;

    let grid = page.write_table("lineart", 5, 7)?;
    draw_linear(grid, &line_palette(), 0);

    let grid = page.write_table("randomart", 5, 7)?;
    draw_random(grid, &random_palette(), rng)?;

    let grid = page.write_table("ratioart", 10, 10)?;
    draw_random_ratio(grid, &mondrian_palette(), rng)?;

    page.draw_mondrian("mondrian", 12, 12, &mondrian_palette(), config, rng)?;

    log::info!("demo page built with {} tables", page.len());
    Ok(page)
}
