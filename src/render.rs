use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{Clear, ClearType},
};

use crate::config::GridConfig;
use crate::simulation::field::CellGrid;

/// Terminal columns per grid cell; two give roughly square cells
const CELL_WIDTH: u16 = 2;
const CELL_BLOCK: &str = "  ";

/// Backdrop for unlit cells
const UNLIT: Color = Color::Rgb { r: 10, g: 10, b: 18 };

const HELP_LINE: &str =
    "[w] pattern  [t] theme  [+/-] speed  [,/.] intensity  [arrows] size  [space] pause  [r] restart  [q] quit";

/// Convert HSL to RGB color
/// H: hue (0-360), S: saturation (0-100), L: lightness (0-100)
pub(crate) fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Color::Rgb {
        r: ((r + m) * 255.0) as u8,
        g: ((g + m) * 255.0) as u8,
        b: ((b + m) * 255.0) as u8,
    }
}

/// Terminal position of a cell block
fn cell_origin(row: usize, col: usize) -> (u16, u16) {
    (col as u16 * CELL_WIDTH, row as u16)
}

/// Draw a full frame: the cell grid plus status and help lines. Cells that
/// fall outside the visible terminal area are skipped.
pub(crate) fn draw_frame(
    out: &mut impl Write,
    grid: &CellGrid,
    config: &GridConfig,
    paused: bool,
) -> std::io::Result<()> {
    let (term_cols, term_rows) = crossterm::terminal::size()?;

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let (x, y) = cell_origin(row, col);
            if x + CELL_WIDTH > term_cols || y >= term_rows {
                continue;
            }
            let color = match grid.cell(row, col) {
                Some(attribute) => hsl_to_rgb(attribute.hue, attribute.saturation, attribute.lightness),
                None => UNLIT,
            };
            queue!(out, MoveTo(x, y), SetBackgroundColor(color), Print(CELL_BLOCK))?;
        }
    }
    queue!(out, ResetColor)?;

    let status_row = grid.rows() as u16;
    if status_row + 1 < term_rows {
        let status = format!(
            "{}x{}  {:.1}x speed  {}% intensity  {}  {}{}",
            grid.cols(),
            grid.rows(),
            config.speed,
            config.intensity,
            config.wave_type,
            config.theme.name,
            if paused { "  [paused]" } else { "" },
        );
        queue!(out, MoveTo(0, status_row), Clear(ClearType::CurrentLine), Print(status))?;
    }
    if status_row + 2 < term_rows {
        queue!(out, MoveTo(0, status_row + 1), Clear(ClearType::CurrentLine), Print(HELP_LINE))?;
    }

    out.flush()
}
