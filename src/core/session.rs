//! Session context passed explicitly through the game loop.

use crate::character::player::Player;

/// Top-level phases of the loop. Battle is a nested sub-loop of
/// `Exploring`, not a phase of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Exploring,
    GameOver,
}

/// Process-wide session state. Created once in `main` and handed to every
/// screen; there is no global instance.
///
/// The player survives a Game Over: returning to the menu leaves it in
/// place, and "New Game" overwrites it. The defeated-enemy counter spans
/// the whole session.
#[derive(Debug)]
pub struct GameSession {
    pub player: Option<Player>,
    pub phase: Phase,
    pub enemies_defeated: u32,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            player: None,
            phase: Phase::Menu,
            enemies_defeated: 0,
        }
    }

    /// Creates a fresh player for a new game, replacing any previous one.
    pub fn start_new_game(&mut self, name: String) {
        self.player = Some(Player::new(name));
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
