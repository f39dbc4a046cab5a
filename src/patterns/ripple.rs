use super::common::{CellAttribute, FieldContext, WavePattern};

/// Extent of the ripple field around the wave position, in cells
const RIPPLE_RADIUS: f32 = 8.0;

/// Ripple pattern - Concentric rings spreading from the wave position
pub(crate) struct Ripple;

impl WavePattern for Ripple {
    fn evaluate(&self, ctx: &FieldContext) -> Option<CellAttribute> {
        let distance = ctx.radial_distance();
        if distance >= RIPPLE_RADIUS {
            return None;
        }
        // Ring oscillation in [0, 1]; troughs leave the cell unlit
        let ripple = (distance * 0.5 - ctx.phase).sin() * 0.5 + 0.5;
        let lightness = ctx.intensity_scale() * 40.0 * ripple * (1.0 - distance / RIPPLE_RADIUS);
        (lightness > 0.0).then(|| CellAttribute::saturated(ctx.hue, lightness))
    }
}
