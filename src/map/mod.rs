//! This module contains all the level-related code.

pub mod direction;
pub mod level;
pub mod loader;
pub mod parser;

pub use level::Level;
