//! Delve - Terminal Dungeon Crawler RPG Library
//!
//! The game logic lives in the library so tests can drive a complete
//! session over scripted input without a terminal.

pub mod build_info;
pub mod character;
pub mod combat;
pub mod core;
pub mod items;
pub mod ui;
