use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Cell, EndReason, GamePhase, GameState};
use crate::metrics::GameMetrics;
use crate::score::HighScoreRecord;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw one frame
    ///
    /// `name_entry` is `Some` while the player is typing a name for a new
    /// high score on the game-over screen.
    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        metrics: &GameMetrics,
        record: &HighScoreRecord,
        name_entry: Option<&str>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Header: session info left, score center, high score right
        let header_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Percentage(30),
            ])
            .split(chunks[0]);

        frame.render_widget(self.render_session_info(metrics), header_chunks[0]);
        frame.render_widget(self.render_score(state), header_chunks[1]);
        frame.render_widget(self.render_record(record), header_chunks[2]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match state.phase {
            GamePhase::Running => {
                let grid = self.render_grid(game_area, state);
                frame.render_widget(grid, game_area);
            }
            GamePhase::Paused => {
                // Keep the board visible behind the banner
                let grid = self.render_grid(game_area, state);
                frame.render_widget(grid, game_area);

                let banner_area = self.banner_area(game_area);
                frame.render_widget(Clear, banner_area);
                frame.render_widget(self.render_pause_banner(), banner_area);
            }
            GamePhase::GameOver => {
                let game_over = self.render_game_over(game_area, state, record, name_entry);
                frame.render_widget(game_over, game_area);
            }
        }

        // Render footer with controls
        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for y in 0..state.grid_height {
            let mut spans = Vec::new();

            for x in 0..state.grid_width {
                let cell = Cell::new(x as i32, y as i32);

                let span = if cell == state.snake.head() {
                    // Snake head - distinct color
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.body.contains(&cell) {
                    // Snake body
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if state.food == Some(cell) {
                    // Food
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    // Empty cell
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_session_info(&self, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.session_time(), Style::default().fg(Color::White)),
            Span::raw("  "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.games_played.to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Left)
    }

    fn render_score(&self, state: &GameState) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_record(&self, record: &HighScoreRecord) -> Paragraph<'_> {
        let holder = if record.name.is_empty() {
            record.best.to_string()
        } else {
            format!("{} ({})", record.best, record.name)
        };

        let text = vec![Line::from(vec![
            Span::styled("High: ", Style::default().fg(Color::Yellow)),
            Span::styled(holder, Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Right)
    }

    /// Small centered rect inside `area` for the pause banner
    fn banner_area(&self, area: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(20),
                Constraint::Percentage(40),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Percentage(30),
            ])
            .split(vertical[1])[1]
    }

    fn render_pause_banner(&self) -> Paragraph<'static> {
        let text = vec![
            Line::from(Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Space",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to resume", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
    }

    fn render_game_over(
        &self,
        _area: Rect,
        state: &GameState,
        record: &HighScoreRecord,
        name_entry: Option<&str>,
    ) -> Paragraph<'_> {
        let won = state.end_reason == Some(EndReason::GridFull);

        let (title, title_color) = if won {
            ("YOU WIN!", Color::Green)
        } else {
            ("GAME OVER", Color::Red)
        };

        let mut text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                title,
                Style::default()
                    .fg(title_color)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
        ];

        if let Some(buffer) = name_entry {
            text.push(Line::from(vec![Span::styled(
                "NEW HIGH SCORE!",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]));
            text.push(Line::from(""));
            text.push(Line::from(vec![
                Span::styled("Enter your name: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    buffer.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("_", Style::default().fg(Color::White)),
            ]));
            text.push(Line::from(""));
            text.push(Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to save", Style::default().fg(Color::Gray)),
            ]));
        } else {
            if !record.name.is_empty() {
                text.push(Line::from(vec![
                    Span::styled("Best so far: ", Style::default().fg(Color::Yellow)),
                    Span::styled(
                        format!("{} by {}", record.best, record.name),
                        Style::default().fg(Color::White),
                    ),
                ]));
                text.push(Line::from(""));
            }
            text.push(Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]));
        }

        let border_color = if won { Color::Green } else { Color::Red };

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" to pause | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
