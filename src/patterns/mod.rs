mod common;

// Individual pattern modules
mod cascade;
mod pulse;
mod ripple;
mod sine;

pub(crate) use common::{CellAttribute, FieldContext, WavePattern};

use crate::config::WaveType;

/// Get the evaluation strategy for a given wave pattern
pub(crate) fn get_pattern(wave_type: WaveType) -> Box<dyn WavePattern> {
    match wave_type {
        WaveType::Sine => Box::new(sine::Sine),
        WaveType::Pulse => Box::new(pulse::Pulse),
        WaveType::Ripple => Box::new(ripple::Ripple),
        WaveType::Cascade => Box::new(cascade::Cascade),
    }
}
