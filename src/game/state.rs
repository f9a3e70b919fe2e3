use std::collections::VecDeque;

use super::heading::Heading;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one step in a heading
    pub fn moved_in(&self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body cells, head at the front
    pub body: VecDeque<Cell>,
    /// Current heading of movement
    pub heading: Heading,
}

impl Snake {
    /// Create a new snake with given head cell and heading
    ///
    /// Body segments extend behind the head, opposite to the heading.
    pub fn new(head: Cell, heading: Heading, length: usize) -> Self {
        let mut body = VecDeque::with_capacity(length);
        body.push_back(head);

        let (dx, dy) = heading.delta();
        let (back_dx, back_dy) = (-dx, -dy);

        for i in 1..length {
            let prev = body[i - 1];
            body.push_back(prev.moved_by(back_dx, back_dy));
        }

        Self { body, heading }
    }

    /// Get the head cell
    pub fn head(&self) -> Cell {
        *self.body.front().expect("snake body is never empty")
    }

    /// Get the tail cell (last segment)
    pub fn tail(&self) -> Cell {
        *self.body.back().expect("snake body is never empty")
    }

    /// Check if any body cell (head included) occupies the given cell
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Advance the head to `new_head`, keeping the tail if `grow` is true
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.push_front(new_head);

        if !grow {
            self.body.pop_back();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }
}

/// Coarse game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ticks advance the snake
    Running,
    /// Ticks are suspended; toggling resumes
    Paused,
    /// Terminal until reset
    GameOver,
}

/// Why the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Snake hit a wall
    WallCollision,
    /// Snake hit its own body
    SelfCollision,
    /// Snake fills the grid; nowhere left to spawn food
    GridFull,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// `None` only once the snake covers the whole grid
    pub food: Option<Cell>,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub phase: GamePhase,
    /// Set exactly when `phase` becomes `GameOver`
    pub end_reason: Option<EndReason>,
    /// Buffered heading request, consumed at the start of the next tick
    pub pending_heading: Option<Heading>,
}

impl GameState {
    /// Create a new running game state
    pub fn new(snake: Snake, food: Cell, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            food: Some(food),
            grid_width,
            grid_height,
            score: 0,
            phase: GamePhase::Running,
            end_reason: None,
            pending_heading: None,
        }
    }

    /// Check if a cell is within the grid bounds
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.x < self.grid_width as i32
            && cell.y >= 0
            && cell.y < self.grid_height as i32
    }

    /// Check if a cell is occupied by the snake
    pub fn is_occupied_by_snake(&self, cell: Cell) -> bool {
        self.snake.occupies(cell)
    }

    /// Request a heading change, applied at the start of the next tick
    ///
    /// A request that would reverse the snake onto itself is ignored while
    /// the snake is longer than one cell. Later requests before the next
    /// tick overwrite earlier ones.
    pub fn set_heading(&mut self, requested: Heading) {
        if self.snake.heading.is_opposite(requested) && self.snake.len() > 1 {
            return;
        }
        self.pending_heading = Some(requested);
    }

    /// Flip between Running and Paused; no effect once the game is over
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            GamePhase::GameOver => GamePhase::GameOver,
        };
    }
}
