use std::ops::RangeInclusive;

use clap::ValueEnum;
use strum::IntoEnumIterator;

use crate::themes::ColorTheme;

/// Control-surface bounds, matching the original slider ranges
pub(crate) const ROWS_RANGE: RangeInclusive<usize> = 8..=25;
pub(crate) const COLS_RANGE: RangeInclusive<usize> = 10..=30;
pub(crate) const SPEED_RANGE: RangeInclusive<f32> = 0.2..=5.0;
pub(crate) const INTENSITY_RANGE: RangeInclusive<u8> = 10..=100;

const SPEED_STEP: f32 = 0.1;
const INTENSITY_STEP: i32 = 5;

/// Wave pattern selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, strum::Display, strum::EnumIter)]
pub(crate) enum WaveType {
    #[strum(to_string = "Sine Wave")]
    Sine,
    #[strum(to_string = "Pulse")]
    Pulse,
    #[strum(to_string = "Ripple")]
    Ripple,
    #[strum(to_string = "Cascade")]
    Cascade,
}

impl WaveType {
    /// The next pattern in display order, wrapping at the end
    pub(crate) fn next(self) -> Self {
        let all: Vec<_> = Self::iter().collect();
        let index = all.iter().position(|v| *v == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }
}

/// Full configuration consumed by the simulation core, immutable per frame
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub speed: f32,
    pub wave_type: WaveType,
    pub theme: ColorTheme,
    pub intensity: u8,
}

impl GridConfig {
    /// Build a configuration from arbitrary control inputs, clamping each
    /// numeric field into its supported range
    pub(crate) fn clamped(
        rows: usize,
        cols: usize,
        speed: f32,
        wave_type: WaveType,
        theme: ColorTheme,
        intensity: u8,
    ) -> Self {
        Self {
            rows: rows.clamp(*ROWS_RANGE.start(), *ROWS_RANGE.end()),
            cols: cols.clamp(*COLS_RANGE.start(), *COLS_RANGE.end()),
            speed: speed.clamp(*SPEED_RANGE.start(), *SPEED_RANGE.end()),
            wave_type,
            theme,
            intensity: intensity.clamp(*INTENSITY_RANGE.start(), *INTENSITY_RANGE.end()),
        }
    }

    /// Adjust speed by a number of 0.1 steps; returns whether it changed
    pub(crate) fn step_speed(&mut self, steps: i32) -> bool {
        let speed = (self.speed + steps as f32 * SPEED_STEP)
            .clamp(*SPEED_RANGE.start(), *SPEED_RANGE.end());
        let changed = speed != self.speed;
        self.speed = speed;
        changed
    }

    /// Adjust intensity by a number of 5% steps; returns whether it changed
    pub(crate) fn step_intensity(&mut self, steps: i32) -> bool {
        let intensity = (self.intensity as i32 + steps * INTENSITY_STEP)
            .clamp(*INTENSITY_RANGE.start() as i32, *INTENSITY_RANGE.end() as i32)
            as u8;
        let changed = intensity != self.intensity;
        self.intensity = intensity;
        changed
    }

    /// Grow or shrink the row count by one; returns whether it changed
    pub(crate) fn step_rows(&mut self, delta: i32) -> bool {
        let rows = clamp_dimension(self.rows, delta, &ROWS_RANGE);
        let changed = rows != self.rows;
        self.rows = rows;
        changed
    }

    /// Grow or shrink the column count by one; returns whether it changed
    pub(crate) fn step_cols(&mut self, delta: i32) -> bool {
        let cols = clamp_dimension(self.cols, delta, &COLS_RANGE);
        let changed = cols != self.cols;
        self.cols = cols;
        changed
    }
}

fn clamp_dimension(current: usize, delta: i32, range: &RangeInclusive<usize>) -> usize {
    (current as i32 + delta).clamp(*range.start() as i32, *range.end() as i32) as usize
}
