use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine, GamePhase, GameState};
use crate::input::{InputHandler, KeyAction, NameAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::score::{HighScoreRecord, ScoreStore};

/// Longest player name accepted on the game-over screen
const MAX_NAME_LEN: usize = 24;

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    store: ScoreStore,
    high_score: HighScoreRecord,
    /// Some while the player is typing a name for a new record
    name_entry: Option<String>,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, store: ScoreStore) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();
        let high_score = store.load();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            store,
            high_score,
            name_entry: None,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        // A record typed but never confirmed still counts
        let flushed = self.flush_pending_score();

        result.and(flushed)
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Game speed comes from the configured tick rate
        let mut tick_timer = interval(self.engine.config().tick_interval());

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.state.phase == GamePhase::Running {
                        self.update_game();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(
                            frame,
                            &self.state,
                            &self.metrics,
                            &self.high_score,
                            self.name_entry.as_deref(),
                        );
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            if self.name_entry.is_some() {
                self.handle_name_key(key)?;
            } else {
                self.handle_game_key(key)?;
            }
        }

        Ok(())
    }

    fn handle_game_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.input_handler.handle_key_event(key) {
            KeyAction::Turn(heading) => {
                self.state.set_heading(heading);
            }
            KeyAction::TogglePause => {
                self.state.toggle_pause();
            }
            KeyAction::Restart => {
                self.reset_game()?;
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }

        Ok(())
    }

    fn handle_name_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.input_handler.handle_name_key(key) {
            NameAction::Push(c) => {
                if let Some(buffer) = self.name_entry.as_mut() {
                    if buffer.chars().count() < MAX_NAME_LEN {
                        buffer.push(c);
                    }
                }
            }
            NameAction::Pop => {
                if let Some(buffer) = self.name_entry.as_mut() {
                    buffer.pop();
                }
            }
            NameAction::Confirm => {
                self.flush_pending_score()?;
            }
            NameAction::Quit => {
                self.should_quit = true;
            }
            NameAction::None => {}
        }

        Ok(())
    }

    fn update_game(&mut self) {
        let result = self.engine.advance_tick(&mut self.state);

        // Track game over
        if result.end.is_some() {
            self.metrics.on_game_over();

            if self.high_score.is_beaten_by(self.state.score) {
                self.name_entry = Some(String::new());
            }
        }
    }

    /// Commit an open name entry to the record and persist it
    ///
    /// The buffer is stored as typed, even when partial. No-op when no
    /// entry is open or when the score turns out not to beat the record.
    fn flush_pending_score(&mut self) -> Result<()> {
        let Some(buffer) = self.name_entry.take() else {
            return Ok(());
        };

        if self.high_score.record(&buffer, self.state.score) {
            self.store.save(&self.high_score)?;
        }

        Ok(())
    }

    fn reset_game(&mut self) -> Result<()> {
        self.flush_pending_score()?;
        self.state = self.engine.reset();
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tempfile::TempDir;

    fn test_mode() -> (HumanMode, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = ScoreStore::new(temp_dir.path().join("scores.json"));
        (HumanMode::new(GameConfig::default(), store), temp_dir)
    }

    #[test]
    fn test_game_initialization() {
        let (mode, _dir) = test_mode();
        assert_eq!(mode.state.phase, GamePhase::Running);
        assert_eq!(mode.state.score, 0);
        assert_eq!(mode.high_score, HighScoreRecord::default());
        assert!(mode.name_entry.is_none());
    }

    #[test]
    fn test_game_reset() {
        let (mut mode, _dir) = test_mode();
        mode.state.score = 10;
        mode.state.phase = GamePhase::GameOver;
        mode.reset_game().unwrap();
        assert_eq!(mode.state.score, 0);
        assert_eq!(mode.state.phase, GamePhase::Running);
    }

    #[test]
    fn test_confirm_writes_record() {
        let (mut mode, _dir) = test_mode();
        mode.state.score = 7;
        mode.name_entry = Some("Ada".to_string());

        mode.flush_pending_score().unwrap();

        assert!(mode.name_entry.is_none());
        assert_eq!(mode.high_score.name, "Ada");
        assert_eq!(mode.high_score.best, 7);

        // And it reached the disk
        let reloaded = mode.store.load();
        assert_eq!(reloaded.name, "Ada");
        assert_eq!(reloaded.best, 7);
    }

    #[test]
    fn test_flush_without_entry_is_noop() {
        let (mut mode, _dir) = test_mode();
        mode.state.score = 7;

        mode.flush_pending_score().unwrap();

        assert_eq!(mode.high_score, HighScoreRecord::default());
        assert_eq!(mode.store.load(), HighScoreRecord::default());
    }

    #[test]
    fn test_partial_name_flushed_on_restart() {
        let (mut mode, _dir) = test_mode();
        mode.state.score = 5;
        mode.state.phase = GamePhase::GameOver;
        mode.name_entry = Some("Ad".to_string());

        mode.reset_game().unwrap();

        assert_eq!(mode.high_score.name, "Ad");
        assert_eq!(mode.high_score.best, 5);
        assert_eq!(mode.state.phase, GamePhase::Running);
        assert_eq!(mode.store.load().best, 5);
    }

    #[test]
    fn test_name_keys_edit_buffer() {
        let (mut mode, _dir) = test_mode();
        mode.name_entry = Some(String::new());

        for c in ['A', 'd', 'a'] {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            mode.handle_name_key(key).unwrap();
        }
        assert_eq!(mode.name_entry.as_deref(), Some("Ada"));

        let backspace = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        mode.handle_name_key(backspace).unwrap();
        assert_eq!(mode.name_entry.as_deref(), Some("Ad"));
    }

    #[test]
    fn test_name_length_cap() {
        let (mut mode, _dir) = test_mode();
        mode.name_entry = Some("x".repeat(MAX_NAME_LEN));

        let key = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE);
        mode.handle_name_key(key).unwrap();

        assert_eq!(
            mode.name_entry.as_deref().unwrap().chars().count(),
            MAX_NAME_LEN
        );
    }

    #[test]
    fn test_pause_key_toggles_phase() {
        let (mut mode, _dir) = test_mode();

        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        mode.handle_game_key(space).unwrap();
        assert_eq!(mode.state.phase, GamePhase::Paused);

        mode.handle_game_key(space).unwrap();
        assert_eq!(mode.state.phase, GamePhase::Running);
    }
}
