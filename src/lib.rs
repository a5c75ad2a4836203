//! Runaway: a two-player, turn-based chase on a grid.

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatter;
pub mod game;
pub mod input;
pub mod logging;
pub mod map;
pub mod render;
