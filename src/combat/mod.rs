//! Combat system types and turn resolution.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
