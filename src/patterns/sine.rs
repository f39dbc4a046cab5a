use super::common::{CellAttribute, FieldContext, WavePattern, WAVE_WIDTH};

/// Sine pattern - Horizontal bouncing wave lighting the cells behind its sweep
pub(crate) struct Sine;

impl WavePattern for Sine {
    fn evaluate(&self, ctx: &FieldContext) -> Option<CellAttribute> {
        let offset = ctx.horizontal_offset();
        // Only the trailing side of the sweep is lit, never the cells ahead
        if offset * ctx.direction > 0.0 {
            return None;
        }
        let distance = offset.abs();
        if distance >= WAVE_WIDTH {
            return None;
        }
        // Base 50% lightness at the front; intensity does not apply here
        let lightness = 50.0 * (1.0 - distance / WAVE_WIDTH);
        Some(CellAttribute::saturated(ctx.hue, lightness))
    }
}
