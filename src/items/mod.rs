//! Item value objects.

pub mod types;

pub use types::*;
