use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{
    config::GameConfig,
    heading::Heading,
    state::{Cell, EndReason, GamePhase, GameState, Snake},
};

/// Random placement attempts before falling back to a full free-cell scan
const FOOD_SPAWN_ATTEMPTS: usize = 100;

/// Result of advancing the game by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Set on the tick that ended the game
    pub end: Option<EndReason>,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine with a fixed RNG seed for deterministic food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The configuration this engine was built with
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the game to its start-of-game state
    ///
    /// Snake of the configured length at the grid center heading Right,
    /// score 0, phase Running, food on a free cell.
    pub fn reset(&mut self) -> GameState {
        let center_x = (self.config.grid_width / 2) as i32;
        let center_y = (self.config.grid_height / 2) as i32;

        let snake = Snake::new(
            Cell::new(center_x, center_y),
            Heading::Right,
            self.config.initial_snake_length,
        );

        let food = self.spawn_food(&snake);
        let mut state = GameState {
            snake,
            food,
            grid_width: self.config.grid_width,
            grid_height: self.config.grid_height,
            score: 0,
            phase: GamePhase::Running,
            end_reason: None,
            pending_heading: None,
        };

        // A grid the starting snake already fills is won on the spot
        if state.food.is_none() {
            state.phase = GamePhase::GameOver;
            state.end_reason = Some(EndReason::GridFull);
        }

        state
    }

    /// Advance the game by one tick
    ///
    /// No-op unless the phase is Running. On the tick that ends the game
    /// the snake is left exactly as it was before the tick.
    pub fn advance_tick(&mut self, state: &mut GameState) -> TickResult {
        if state.phase != GamePhase::Running {
            return TickResult {
                ate_food: false,
                end: None,
            };
        }

        // Buffered turn takes effect now
        if let Some(heading) = state.pending_heading.take() {
            state.snake.heading = heading;
        }

        let next_head = state.snake.head().moved_in(state.snake.heading);

        if let Some(reason) = self.check_collision(state, next_head) {
            state.phase = GamePhase::GameOver;
            state.end_reason = Some(reason);

            return TickResult {
                ate_food: false,
                end: Some(reason),
            };
        }

        let ate_food = state.food == Some(next_head);
        state.snake.advance(next_head, ate_food);

        if ate_food {
            state.score += 1;
            state.food = self.spawn_food(&state.snake);

            // No free cell left: the board is beaten
            if state.food.is_none() {
                state.phase = GamePhase::GameOver;
                state.end_reason = Some(EndReason::GridFull);

                return TickResult {
                    ate_food: true,
                    end: Some(EndReason::GridFull),
                };
            }
        }

        TickResult {
            ate_food,
            end: None,
        }
    }

    /// Check whether moving the head to `next` ends the game
    ///
    /// The current tail cell is exempt: it vacates in the same tick, since
    /// food never sits on the snake and the tail only stays on growth.
    fn check_collision(&self, state: &GameState, next: Cell) -> Option<EndReason> {
        if !state.is_in_bounds(next) {
            return Some(EndReason::WallCollision);
        }

        if state.is_occupied_by_snake(next) && next != state.snake.tail() {
            return Some(EndReason::SelfCollision);
        }

        None
    }

    /// Choose a food cell uniformly among cells the snake does not occupy
    ///
    /// Rejection-samples up to a fixed number of attempts, then falls back
    /// to an exhaustive scan so placement terminates on a nearly full grid.
    /// Returns `None` when the snake covers every cell.
    fn spawn_food(&mut self, snake: &Snake) -> Option<Cell> {
        for _ in 0..FOOD_SPAWN_ATTEMPTS {
            let x = self.rng.gen_range(0..self.config.grid_width) as i32;
            let y = self.rng.gen_range(0..self.config.grid_height) as i32;
            let cell = Cell::new(x, y);

            if !snake.occupies(cell) {
                return Some(cell);
            }
        }

        let free: Vec<Cell> = (0..self.config.grid_height as i32)
            .flat_map(|y| (0..self.config.grid_width as i32).map(move |x| Cell::new(x, y)))
            .filter(|cell| !snake.occupies(*cell))
            .collect();

        if free.is_empty() {
            None
        } else {
            Some(free[self.rng.gen_range(0..free.len())])
        }
    }
}
