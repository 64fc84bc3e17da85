//! Core session state and game loop.

pub mod constants;
pub mod game_loop;
pub mod session;

pub use constants::*;
pub use game_loop::*;
pub use session::*;
