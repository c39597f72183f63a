//! Application state and logic.

use super::input::Action;
use crate::audio::SoundSink;
use crate::games::twenty48::{BoardEngine, Coord, Direction, MoveOutcome};
use crate::theme::Theme;
use tracing::{debug, info, instrument};

const HELP: &str = "Arrows/hjkl/wasd to move, 'r' to restart, 'q' to quit.";
const GAME_OVER: &str = "Game over! Press 'r' to restart or 'q' to quit.";

/// Main application state.
pub struct App {
    engine: BoardEngine,
    theme: Theme,
    sound: Box<dyn SoundSink>,
    last_outcome: Option<MoveOutcome>,
    status_message: String,
}

impl App {
    /// Creates a new application around a freshly reset engine.
    pub fn new(engine: BoardEngine, theme: Theme, sound: Box<dyn SoundSink>) -> Self {
        Self {
            engine,
            theme,
            sound,
            last_outcome: None,
            status_message: HELP.to_string(),
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    /// Gets the active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether `coord` holds a tile merged by the last move.
    pub fn was_merged(&self, coord: Coord) -> bool {
        self.last_outcome
            .as_ref()
            .is_some_and(|o| o.merged().contains(&coord))
    }

    /// Whether `coord` holds the tile spawned by the last move.
    pub fn was_spawned(&self, coord: Coord) -> bool {
        self.last_outcome
            .as_ref()
            .is_some_and(|o| *o.spawned() == Some(coord))
    }

    /// Applies a non-quit action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Move(direction) => self.handle_move(direction),
            Action::Restart => self.restart(),
            Action::Quit | Action::Ignore => {}
        }
    }

    #[instrument(skip(self))]
    fn handle_move(&mut self, direction: Direction) {
        let outcome = self.engine.make_move(direction);
        self.sound.notify(&outcome);

        if *outcome.game_over() {
            info!(score = self.engine.score(), "Player ran out of moves");
        }

        self.status_message = if self.engine.game_over() {
            GAME_OVER.to_string()
        } else if *outcome.gained() > 0 {
            format!("+{}", outcome.gained())
        } else if *outcome.moved() {
            HELP.to_string()
        } else {
            format!("Nothing moves {}.", direction)
        };

        if *outcome.moved() {
            self.last_outcome = Some(outcome);
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.last_outcome = None;
        self.status_message = HELP.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Silent;
    use crate::games::twenty48::Grid;

    fn app() -> App {
        App::new(BoardEngine::seeded(11), Theme::default(), Box::new(Silent))
    }

    #[test]
    fn test_restart_clears_highlights() {
        let mut app = app();
        for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            app.apply(Action::Move(direction));
        }
        app.apply(Action::Restart);
        assert_eq!(app.engine().score(), 0);
        assert_eq!(app.engine().grid().tile_count(), 2);
        assert!(Grid::coords().all(|c| !app.was_merged(c) && !app.was_spawned(c)));
        assert_eq!(app.status_message(), HELP);
    }

    #[test]
    fn test_committed_move_highlights_spawn() {
        let mut app = app();
        let moved = [Direction::Left, Direction::Right, Direction::Up, Direction::Down]
            .into_iter()
            .any(|d| {
                app.apply(Action::Move(d));
                app.last_outcome.is_some()
            });
        assert!(moved, "a fresh board always has some legal move");
        assert_eq!(Grid::coords().filter(|c| app.was_spawned(*c)).count(), 1);
    }

    #[test]
    fn test_ignore_changes_nothing() {
        let mut app = app();
        let before = app.engine().snapshot();
        app.apply(Action::Ignore);
        assert_eq!(app.engine().snapshot(), before);
    }
}
