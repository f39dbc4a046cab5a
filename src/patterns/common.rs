/// Width of the bouncing wave band, in cells
pub(crate) const WAVE_WIDTH: f32 = 5.0;

/// Per-cell evaluation context passed to all wave patterns
#[derive(Debug, Clone)]
pub(crate) struct FieldContext {
    /// Current row index
    pub row: usize,
    /// Current column index
    pub col: usize,
    /// Total grid rows
    pub rows: usize,
    /// Wave front position within [0, cols]
    pub wave_position: f32,
    /// Sweep direction, +1.0 or -1.0
    pub direction: f32,
    /// Monotonic oscillation phase, consumed by the radial patterns
    pub phase: f32,
    /// Current hue (0-360)
    pub hue: f32,
    /// Wave intensity percentage (10-100)
    pub intensity: f32,
}

impl FieldContext {
    /// Signed distance from the wave front along the columns
    pub(crate) fn horizontal_offset(&self) -> f32 {
        self.col as f32 - self.wave_position
    }

    /// Signed distance from the grid's center row
    pub(crate) fn vertical_offset(&self) -> f32 {
        self.row as f32 - (self.rows / 2) as f32
    }

    /// Euclidean distance from (wave front, center row)
    pub(crate) fn radial_distance(&self) -> f32 {
        let dx = self.horizontal_offset();
        let dy = self.vertical_offset();
        (dx * dx + dy * dy).sqrt()
    }

    /// Intensity as a 0..1 multiplier
    pub(crate) fn intensity_scale(&self) -> f32 {
        self.intensity / 100.0
    }
}

/// Visual attribute for a lit cell, in HSL space
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CellAttribute {
    /// Hue (0-360)
    pub hue: f32,
    /// Saturation percentage, always 100 for lit cells
    pub saturation: f32,
    /// Lightness percentage (0-100)
    pub lightness: f32,
}

impl CellAttribute {
    /// Create a fully saturated attribute with the given hue and lightness
    pub(crate) fn saturated(hue: f32, lightness: f32) -> Self {
        Self { hue, saturation: 100.0, lightness }
    }
}

/// Trait for wave pattern evaluation strategies
pub(crate) trait WavePattern {
    /// Evaluate a single cell; `None` leaves the cell unlit
    fn evaluate(&self, ctx: &FieldContext) -> Option<CellAttribute>;
}
