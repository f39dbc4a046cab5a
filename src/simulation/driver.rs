use std::time::Instant;

use crate::config::GridConfig;

/// Frame clock measuring elapsed milliseconds between ticks.
///
/// The first tick after construction or a reset reports 0: there is no
/// meaningful delta until two ticks have been observed.
#[derive(Debug)]
pub(crate) struct FrameClock {
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub(crate) fn new() -> Self {
        Self { last_tick: None }
    }

    /// Milliseconds since the previous tick
    pub(crate) fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = self
            .last_tick
            .map(|last| now.duration_since(last).as_secs_f32() * 1000.0)
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        delta
    }

    /// Forget the previous tick, e.g. when resuming from pause
    pub(crate) fn reset(&mut self) {
        self.last_tick = None;
    }
}

/// Scalar simulation state, advanced once per frame before any cell is
/// evaluated
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WaveState {
    /// Wave front position within [0, cols]
    pub wave_position: f32,
    /// Sweep direction, +1.0 or -1.0
    pub direction: f32,
    /// Monotonic oscillation phase consumed by the radial patterns
    pub phase: f32,
    /// Current hue (0-360)
    pub hue: f32,
}

impl WaveState {
    /// Initial state for a configuration; the hue starts at the theme's
    /// base hue
    pub(crate) fn new(config: &GridConfig) -> Self {
        Self {
            wave_position: 0.0,
            direction: 1.0,
            phase: 0.0,
            hue: config.theme.base_hue,
        }
    }

    /// Advance the state by `delta_ms` of real time. `delta_ms` must be
    /// non-negative; the frame clock guarantees this.
    pub(crate) fn advance(&mut self, delta_ms: f32, config: &GridConfig) {
        let movement = self.direction * 0.01 * config.speed * delta_ms;
        self.wave_position += movement;

        // Bounce at the grid boundaries. The clamp takes precedence on
        // overshoot, so the direction flips exactly once per crossing.
        let cols = config.cols as f32;
        if self.wave_position >= cols || self.wave_position <= 0.0 {
            self.direction *= -1.0;
            self.wave_position = self.wave_position.clamp(0.0, cols);
        }

        if config.theme.is_rainbow() {
            self.hue = (self.hue + 0.05 * config.speed * delta_ms) % 360.0;
        } else {
            self.hue = config.theme.base_hue;
        }

        self.phase += 0.02 * config.speed * delta_ms;
    }
}
