//! UI-side state the engine reports into.

use std::cell::Cell;

/// Score, game-over and play flags owned by the host.
///
/// Engine observers write score and game-over; the host reads them to draw
/// and to decide what a toggle means. Shared through `Rc`.
#[derive(Debug, Default)]
pub struct HostState {
    score: Cell<u32>,
    game_over: Cell<bool>,
    playing: Cell<bool>,
}

impl HostState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score.get()
    }

    pub fn set_score(&self, score: u32) {
        self.score.set(score);
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.get()
    }

    pub fn set_game_over(&self, over: bool) {
        self.game_over.set(over);
    }

    pub fn is_playing(&self) -> bool {
        self.playing.get()
    }

    pub fn set_playing(&self, playing: bool) {
        self.playing.set(playing);
    }

    /// Back to a fresh game: no score, not over. The play flag is untouched.
    pub fn reset(&self) {
        self.score.set(0);
        self.game_over.set(false);
    }
}
