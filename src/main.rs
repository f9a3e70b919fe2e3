use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tui_snake::game::GameConfig;
use tui_snake::modes::HumanMode;
use tui_snake::score::ScoreStore;

#[derive(Parser)]
#[command(name = "tui_snake")]
#[command(version, about = "Classic snake in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = GameConfig::default().grid_width)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = GameConfig::default().grid_height)]
    height: usize,

    /// Game speed in ticks per second
    #[arg(long, default_value_t = GameConfig::default().tick_rate)]
    tick_rate: u32,

    /// Where the high score is kept
    #[arg(long, default_value = ".tui_snake_scores.json")]
    score_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create game configuration from CLI arguments
    let config = GameConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        tick_rate: cli.tick_rate,
        ..GameConfig::default()
    };
    config.validate()?;

    let store = ScoreStore::new(cli.score_file);

    let mut human_mode = HumanMode::new(config, store);
    human_mode.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_game_config() {
        let cli = Cli::parse_from(["tui_snake"]);
        let defaults = GameConfig::default();

        assert_eq!(cli.width, defaults.grid_width);
        assert_eq!(cli.height, defaults.grid_height);
        assert_eq!(cli.tick_rate, defaults.tick_rate);
        assert_eq!(cli.score_file, PathBuf::from(".tui_snake_scores.json"));
    }
}
