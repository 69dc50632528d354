//! HTML output for grids and pages
//!
//! Every original row becomes a `<tr>`, including rows whose cells were all
//! absorbed by merges above them, so `rowspan` values line up the same way
//! they do in a live document.

use std::fmt::Write as _;

use crate::grid::{Cell, Grid, Page};

const PAGE_STYLE: &str = "table { border-collapse: collapse; width: 100%; height: 24em; margin-bottom: 2em; }\n\
td { border: 2px solid #111; min-width: 1em; min-height: 1em; }";

/// Escape text for use inside a double-quoted attribute or element body
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn percent(span: usize, count: usize) -> String {
    format!("{}%", span as f64 * 100.0 / count as f64)
}

fn write_cell(out: &mut String, grid: &Grid, cell: &Cell) {
    let _ = write!(out, "    <td id=\"{}\"", escape(&cell.id.to_string()));
    if cell.col_span > 1 {
        let _ = write!(out, " colspan=\"{}\"", cell.col_span);
    }
    if cell.row_span > 1 {
        let _ = write!(out, " rowspan=\"{}\"", cell.row_span);
    }
    if grid.proportional_sizing() {
        let _ = write!(
            out,
            " width=\"{}\" height=\"{}\"",
            percent(cell.col_span, grid.columns()),
            percent(cell.row_span, grid.rows())
        );
    }
    if let Some(color) = &cell.color {
        let _ = write!(out, " style=\"background-color: {}\"", escape(color));
    }
    out.push_str("></td>\n");
}

/// Render one grid as a `<table>` element
pub fn render_table(grid: &Grid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<table id=\"{}\">", escape(grid.id()));
    for row in 0..grid.rows() {
        out.push_str("  <tr>\n");
        for cell in grid.cells_in_row(row) {
            write_cell(&mut out, grid, cell);
        }
        out.push_str("  </tr>\n");
    }
    out.push_str("</table>\n");
    out
}

/// Render every table of the page, in order, into a standalone document
pub fn render_page(page: &Page, title: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape(title));
    let _ = writeln!(out, "<style>\n{}\n</style>", PAGE_STYLE);
    out.push_str("</head>\n<body>\n");
    for grid in page.grids() {
        out.push_str(&render_table(grid));
    }
    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rows_and_colors() {
        let mut grid = Grid::new("hello", 2, 2).unwrap();
        grid.paint(2, "red");
        let html = render_table(&grid);
        assert!(html.starts_with("<table id=\"hello\">"));
        assert_eq!(html.matches("<tr>").count(), 2);
        assert_eq!(html.matches("<td ").count(), 4);
        assert!(html.contains("<td id=\"cell_hello_2\" style=\"background-color: red\"></td>"));
        assert!(!html.contains("colspan"));
        assert!(!html.contains("width="));
    }

    #[test]
    fn merged_cells_carry_spans_and_sizes() {
        let mut grid = Grid::new("m", 2, 4).unwrap();
        grid.remove(2);
        grid.remove(5);
        grid.remove(6);
        {
            let c = grid.get_mut(1).unwrap();
            c.col_span = 2;
            c.row_span = 2;
        }
        grid.set_proportional_sizing(true);
        let html = render_table(&grid);
        assert!(html.contains(
            "<td id=\"cell_m_1\" colspan=\"2\" rowspan=\"2\" width=\"50%\" height=\"100%\"></td>"
        ));
        assert!(html.contains("<td id=\"cell_m_3\" width=\"25%\" height=\"50%\"></td>"));
        assert!(!html.contains("cell_m_5"));
        assert_eq!(html.matches("<tr>").count(), 2);
    }

    #[test]
    fn escapes_attribute_values() {
        let mut grid = Grid::new("a\"b", 1, 1).unwrap();
        grid.paint(1, "<red>");
        let html = render_table(&grid);
        assert!(html.contains("id=\"a&quot;b\""));
        assert!(html.contains("background-color: &lt;red&gt;"));
    }

    #[test]
    fn page_lists_tables_in_order() {
        let mut page = Page::new();
        page.write_table("one", 1, 1).unwrap();
        page.write_table("two", 1, 1).unwrap();
        let html = render_page(&page, "Art & Grids");
        assert!(html.contains("<title>Art &amp; Grids</title>"));
        let one = html.find("id=\"one\"").unwrap();
        let two = html.find("id=\"two\"").unwrap();
        assert!(one < two);
    }
}
