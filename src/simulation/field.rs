use crate::config::GridConfig;
use crate::patterns::{get_pattern, CellAttribute, FieldContext};
use crate::simulation::driver::WaveState;

/// One evaluated frame of cell attributes, row-major; `None` cells are unlit
#[derive(Debug, PartialEq)]
pub(crate) struct CellGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<CellAttribute>>,
}

impl CellGrid {
    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    /// Attribute at (row, col); `None` when unlit or out of range
    pub(crate) fn cell(&self, row: usize, col: usize) -> Option<&CellAttribute> {
        if col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).and_then(|cell| cell.as_ref())
    }
}

/// Evaluate the full grid against the current driver state
pub(crate) fn evaluate(config: &GridConfig, state: &WaveState) -> CellGrid {
    let pattern = get_pattern(config.wave_type);
    let mut cells = Vec::with_capacity(config.rows * config.cols);

    for row in 0..config.rows {
        for col in 0..config.cols {
            let ctx = FieldContext {
                row,
                col,
                rows: config.rows,
                wave_position: state.wave_position,
                direction: state.direction,
                phase: state.phase,
                hue: state.hue,
                intensity: config.intensity as f32,
            };
            cells.push(pattern.evaluate(&ctx));
        }
    }

    CellGrid { rows: config.rows, cols: config.cols, cells }
}
