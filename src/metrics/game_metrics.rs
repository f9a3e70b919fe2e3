use std::time::{Duration, Instant};

/// Per-session counters shown in the header bar
///
/// The persisted high score lives in the score store; this only tracks
/// what resets when the program exits.
pub struct GameMetrics {
    session_start: Instant,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            session_start: Instant::now(),
            games_played: 0,
        }
    }

    pub fn on_game_over(&mut self) {
        self.games_played += 1;
    }

    /// Wall-clock time since launch, as mm:ss
    pub fn session_time(&self) -> String {
        format_mm_ss(self.session_start.elapsed())
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn format_mm_ss(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
