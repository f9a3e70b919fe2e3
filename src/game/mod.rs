//! Core game logic module for Snake
//!
//! This module contains all the game rules without any I/O or rendering
//! dependencies: grid arithmetic, the snake body, buffered turns, tick
//! advancement, collision resolution and food spawning. Everything here is
//! deterministic given a seeded engine, so the rules can be tested without
//! a terminal attached.

pub mod config;
pub mod engine;
pub mod heading;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use engine::{GameEngine, TickResult};
pub use heading::Heading;
pub use state::{Cell, EndReason, GamePhase, GameState, Snake};
