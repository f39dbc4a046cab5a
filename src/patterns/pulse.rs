use super::common::{CellAttribute, FieldContext, WavePattern};

/// Pulse pattern - Circular pulse breathing around the wave position
pub(crate) struct Pulse;

impl WavePattern for Pulse {
    fn evaluate(&self, ctx: &FieldContext) -> Option<CellAttribute> {
        let distance = ctx.radial_distance();
        let pulse_radius = 3.0 + 2.0 * ctx.phase.sin();
        if distance >= pulse_radius {
            return None;
        }
        let lightness = ctx.intensity_scale() * 60.0 * (1.0 - distance / pulse_radius);
        Some(CellAttribute::saturated(ctx.hue, lightness))
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn ctx(col: usize, row: usize) -> FieldContext {
        FieldContext {
            row,
            col,
            rows: 15,
            wave_position: 10.0,
            direction: 1.0,
            phase: 0.0,
            hue: 200.0,
            intensity: 100.0,
        }
    }

    #[test]
    fn center_cell_at_rest_phase() {
        // phase 0 -> radius 3; the cell at the pulse center gets the full 60%
        let attribute = Pulse.evaluate(&ctx(10, 7)).expect("center is lit");
        assert!((attribute.lightness - 60.0).abs() < 1e-4);
        assert_eq!(attribute.hue, 200.0);
    }

    #[test]
    fn radius_boundary_is_exclusive() {
        assert_eq!(Pulse.evaluate(&ctx(13, 7)), None);
        assert_eq!(Pulse.evaluate(&ctx(10, 3)), None);
    }

    #[test]
    fn intensity_scales_lightness() {
        let mut context = ctx(10, 7);
        context.intensity = 50.0;
        let attribute = Pulse.evaluate(&context).unwrap();
        assert!((attribute.lightness - 30.0).abs() < 1e-4);
    }

    #[test]
    fn phase_expands_the_radius() {
        // phase pi/2 -> radius 5, so a cell 4 away is now inside the pulse
        let mut context = ctx(14, 7);
        assert_eq!(Pulse.evaluate(&context), None);
        context.phase = FRAC_PI_2;
        let attribute = Pulse.evaluate(&context).expect("expanded pulse reaches the cell");
        assert!((attribute.lightness - 12.0).abs() < 1e-3);
    }
}
