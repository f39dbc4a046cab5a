use super::common::{CellAttribute, FieldContext, WavePattern, WAVE_WIDTH};

/// Cascade pattern - Bouncing wave with lightness falloff and hue shift by row
pub(crate) struct Cascade;

impl WavePattern for Cascade {
    fn evaluate(&self, ctx: &FieldContext) -> Option<CellAttribute> {
        let offset = ctx.horizontal_offset();
        if offset * ctx.direction > 0.0 {
            return None;
        }
        let distance = offset.abs();
        if distance >= WAVE_WIDTH {
            return None;
        }
        let row_offset = ctx.vertical_offset().abs();
        // Rows fade out the farther they sit from the center row
        let damping = (1.0 - row_offset * 0.1).max(0.0);
        let lightness = ctx.intensity_scale() * 50.0 * damping * (1.0 - distance / WAVE_WIDTH);
        let hue = (ctx.hue + row_offset * 20.0) % 360.0;
        (lightness > 0.0).then(|| CellAttribute::saturated(hue, lightness))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn ctx(col: usize, row: usize, rows: usize) -> FieldContext {
        FieldContext {
            row,
            col,
            rows,
            wave_position: 10.0,
            direction: 1.0,
            phase: 0.0,
            hue: 100.0,
            intensity: 100.0,
        }
    }

    #[test]
    fn center_row_at_the_front() {
        let attribute = Cascade.evaluate(&ctx(10, 7, 15)).expect("center is lit");
        assert!((attribute.lightness - 50.0).abs() < 1e-4);
        assert_eq!(attribute.hue, 100.0);
    }

    #[test]
    fn lightness_strictly_decreases_away_from_center() {
        let rows = [7, 8, 9, 10, 11];
        let lightness: Vec<f32> = rows
            .iter()
            .map(|&row| Cascade.evaluate(&ctx(10, row, 15)).expect("damped but lit").lightness)
            .collect();
        for pair in lightness.windows(2) {
            assert!(pair[1] < pair[0], "expected {} < {}", pair[1], pair[0]);
        }
    }

    #[rstest]
    #[case(7, 100.0)]
    #[case(8, 120.0)]
    #[case(10, 160.0)]
    #[case(4, 160.0)]
    fn hue_is_spaced_by_row_offset(#[case] row: usize, #[case] expected: f32) {
        let attribute = Cascade.evaluate(&ctx(10, row, 15)).unwrap();
        assert!((attribute.hue - expected).abs() < 1e-4);
    }

    #[test]
    fn hue_wraps_past_360() {
        let mut context = ctx(10, 8, 15);
        context.hue = 350.0;
        let attribute = Cascade.evaluate(&context).unwrap();
        assert!((attribute.hue - 10.0).abs() < 1e-4);
    }

    #[test]
    fn fully_damped_rows_are_unlit() {
        // rows = 25 puts the top row 12 away from center, past the damping range
        assert_eq!(Cascade.evaluate(&ctx(10, 0, 25)), None);
    }

    #[test]
    fn cells_ahead_of_the_front_are_unlit() {
        assert_eq!(Cascade.evaluate(&ctx(12, 7, 15)), None);
    }
}
