//! High-score record and its on-disk store

pub mod store;

pub use store::{HighScoreRecord, ScoreStore};
