//! Terminal UI for Strictly 2048.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, action_for};

use crate::audio::{Silent, SoundSink, TerminalBell};
use crate::config::GameConfig;
use crate::games::twenty48::BoardEngine;
use crate::theme::Theme;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

/// Run the TUI client
#[instrument(skip_all, fields(theme = %config.theme()))]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    let theme = Theme::named(config.theme())?;
    let engine = match config.seed() {
        Some(seed) => BoardEngine::seeded(*seed),
        None => BoardEngine::new(),
    };
    let sound: Box<dyn SoundSink> = if *config.sound() {
        Box::new(TerminalBell::new(io::stdout()))
    } else {
        Box::new(Silent)
    };
    let mut app = App::new(engine, theme, sound);

    info!("Starting Strictly 2048 TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        score = app.engine().score(),
        best_score = app.engine().best_score(),
        "Leaving TUI"
    );
    res
}

/// Draw, read one key, apply it; until quit.
fn run_game(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw frame")?;

        if let Event::Key(key) = event::read().context("Failed to read terminal event")? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match action_for(key.code) {
                Action::Quit => return Ok(()),
                action => app.apply(action),
            }
        }
    }
}
