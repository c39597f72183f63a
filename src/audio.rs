//! Sound notifications derived from move outcomes.
//!
//! The engine emits no sound. The front-end turns each [`MoveOutcome`] into
//! [`SoundEvent`]s and hands them to a [`SoundSink`].

use crate::games::twenty48::MoveOutcome;
use std::io::Write;
use tracing::{debug, instrument, warn};

/// A sound-worthy event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "camelCase")]
pub enum SoundEvent {
    /// Tiles moved.
    Move,
    /// At least one pair merged.
    Merge,
    /// The move ended the game.
    GameOver,
}

impl SoundEvent {
    /// Events to play for `outcome`, in order. Empty for a no-op move.
    #[instrument(skip(outcome))]
    pub fn for_outcome(outcome: &MoveOutcome) -> Vec<SoundEvent> {
        if !*outcome.moved() {
            return Vec::new();
        }
        let mut events = vec![SoundEvent::Move];
        if outcome.any_merged() {
            events.push(SoundEvent::Merge);
        }
        if *outcome.game_over() {
            events.push(SoundEvent::GameOver);
        }
        events
    }
}

/// Something that can play sound events.
pub trait SoundSink {
    /// Plays one event.
    fn play(&mut self, event: SoundEvent);

    /// Plays every event for `outcome`.
    fn notify(&mut self, outcome: &MoveOutcome) {
        for event in SoundEvent::for_outcome(outcome) {
            self.play(event);
        }
    }
}

/// Rings the terminal bell for merges and game over.
///
/// Plain moves stay silent; a bell on every keypress is noise.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    /// Rings the bell on `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> SoundSink for TerminalBell<W> {
    fn play(&mut self, event: SoundEvent) {
        if event == SoundEvent::Move {
            return;
        }
        debug!(%event, "Ringing bell");
        if let Err(e) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            warn!(error = %e, "Failed to ring terminal bell");
        }
    }
}

/// Records events in the log only.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&mut self, event: SoundEvent) {
        debug!(%event, "Sound muted");
    }
}
