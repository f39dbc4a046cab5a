use std::{io, path::PathBuf, time::Duration};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

mod config;
mod controls;
mod patterns;
mod render;
mod simulation;
mod themes;

use config::{GridConfig, WaveType};
use controls::Action;
use simulation::driver::{FrameClock, WaveState};
use themes::ThemeRegistry;

/// A terminal wave pattern visualizer
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Number of grid rows
    #[arg(long, default_value_t = 15)]
    rows: usize,

    /// Number of grid columns
    #[arg(long, default_value_t = 20)]
    cols: usize,

    /// Animation speed multiplier
    #[arg(long, default_value_t = 1.0)]
    speed: f32,

    /// Wave pattern
    #[arg(long, value_enum, default_value_t = WaveType::Sine)]
    wave: WaveType,

    /// Color theme name
    #[arg(long, default_value = "rainbow")]
    theme: String,

    /// Wave intensity percentage
    #[arg(long, default_value_t = 100)]
    intensity: u8,

    /// YAML file with extra color themes
    #[arg(long, env = "WAVEGRID_THEMES")]
    theme_file: Option<PathBuf>,

    /// List available themes and exit
    #[arg(long)]
    list_themes: bool,
}

/// Target frame cadence; event polling blocks at most this long
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut registry = ThemeRegistry::new();
    if let Some(path) = &cli.theme_file {
        let count = registry
            .load_file(path)
            .with_context(|| format!("loading theme file {}", path.display()))?;
        eprintln!("[wavegrid] loaded {count} custom theme(s) from {}", path.display());
    }

    if cli.list_themes {
        for theme in registry.iter() {
            println!("{:<12} base hue {:>5.1}", theme.name, theme.base_hue);
        }
        return Ok(());
    }

    let theme = registry.find(&cli.theme)?.clone();
    let mut config = GridConfig::clamped(cli.rows, cli.cols, cli.speed, cli.wave, theme, cli.intensity);

    let mut state = WaveState::new(&config);
    let mut clock = FrameClock::new();
    let mut paused = false;

    let _guard = TerminalGuard::enter()?;
    let mut out = io::stdout();

    loop {
        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    match controls::handle_key(key.code, &mut config, &registry) {
                        Action::Quit => break,
                        Action::TogglePause => {
                            paused = !paused;
                            if !paused {
                                // do not replay the paused interval as one delta
                                clock.reset();
                            }
                        }
                        Action::Restart => {
                            state = WaveState::new(&config);
                            clock.reset();
                            execute!(out, Clear(ClearType::All))?;
                        }
                        Action::None => {}
                    }
                }
                Event::Resize(..) => execute!(out, Clear(ClearType::All))?,
                _ => {}
            }
        }

        if !paused {
            let delta_ms = clock.tick();
            state.advance(delta_ms, &config);
        }
        let grid = simulation::field::evaluate(&config, &state);
        render::draw_frame(&mut out, &grid, &config, paused)?;
    }

    Ok(())
}

/// Puts the terminal into raw alternate-screen mode and restores it on drop,
/// including on error paths
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide, Clear(ClearType::All))?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
