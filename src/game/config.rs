use anyhow::{ensure, Result};
use std::time::Duration;

/// Configuration for the game
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Simulation ticks per second
    pub tick_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // 640x480 window at 20px cells, the classic board
            grid_width: 32,
            grid_height: 24,
            initial_snake_length: 3,
            tick_rate: 15,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Time between simulation ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }

    /// Check that the grid can hold the starting snake
    ///
    /// `GameEngine::reset` lays the body out leftward from the grid
    /// center, so the center-to-left span must cover the initial length;
    /// zero-sized grids are rejected outright.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width > 0 && self.grid_height > 0,
            "grid must be at least 1x1, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(
            self.initial_snake_length > 0,
            "snake must start with at least one cell"
        );
        ensure!(
            self.grid_width / 2 + 1 >= self.initial_snake_length,
            "a {}x{} grid is too small for a snake of length {}",
            self.grid_width,
            self.grid_height,
            self.initial_snake_length
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.tick_rate, 15);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 15);
    }

    #[test]
    fn test_tick_interval() {
        let config = GameConfig::default();
        assert_eq!(config.tick_interval(), Duration::from_secs_f64(1.0 / 15.0));

        // A zero rate must not blow up the interval
        let config = GameConfig {
            tick_rate: 0,
            ..Default::default()
        };
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_validate_accepts_playable_grids() {
        assert!(GameConfig::default().validate().is_ok());
        assert!(GameConfig::small().validate().is_ok());

        // Smallest width the default snake fits on
        assert!(GameConfig::new(4, 1).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unplayable_grids() {
        // Center-to-left span too short for a length-3 body
        assert!(GameConfig::new(3, 3).validate().is_err());

        assert!(GameConfig::new(0, 24).validate().is_err());
        assert!(GameConfig::new(32, 0).validate().is_err());

        let config = GameConfig {
            initial_snake_length: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
