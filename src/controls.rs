use crossterm::event::KeyCode;

use crate::config::GridConfig;
use crate::themes::ThemeRegistry;

/// Outcome of a key press on the control surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// Nothing changed
    None,
    /// Exit the program
    Quit,
    /// Toggle pause
    TogglePause,
    /// Configuration changed or a restart was requested; the simulation
    /// state is rebuilt from the configuration
    Restart,
}

/// Apply a key press to the configuration
pub(crate) fn handle_key(code: KeyCode, config: &mut GridConfig, themes: &ThemeRegistry) -> Action {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(' ') => Action::TogglePause,
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Char('w') => {
            config.wave_type = config.wave_type.next();
            Action::Restart
        }
        KeyCode::Char('t') => {
            config.theme = themes.next_after(&config.theme.name).clone();
            Action::Restart
        }
        KeyCode::Char('+') | KeyCode::Char('=') => stepped(config.step_speed(1)),
        KeyCode::Char('-') => stepped(config.step_speed(-1)),
        KeyCode::Char('.') => stepped(config.step_intensity(1)),
        KeyCode::Char(',') => stepped(config.step_intensity(-1)),
        KeyCode::Up => stepped(config.step_rows(1)),
        KeyCode::Down => stepped(config.step_rows(-1)),
        KeyCode::Right => stepped(config.step_cols(1)),
        KeyCode::Left => stepped(config.step_cols(-1)),
        _ => Action::None,
    }
}

fn stepped(changed: bool) -> Action {
    if changed { Action::Restart } else { Action::None }
}
