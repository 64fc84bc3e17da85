//! Player character and progression.

pub mod player;

pub use player::*;
