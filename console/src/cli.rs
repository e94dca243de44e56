use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use minecross_core::{Coord, GameConfig};

/// Walk from the left edge of a minefield to the right edge without losing
/// all your lives.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Read game settings from a TOML file; flags below override it
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub rows: Option<Coord>,

    #[arg(long)]
    pub columns: Option<Coord>,

    /// Share of cells holding a mine
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub mine_percentage: Option<u8>,

    #[arg(short, long)]
    pub lives: Option<u8>,

    /// Seed for mine placement, random when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

impl Args {
    /// Defaults, then the config file, then flags.
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GameConfig::default(),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(mine_percentage) = self.mine_percentage {
            config.mine_percentage = mine_percentage;
        }
        if let Some(lives) = self.lives {
            config.lives = lives;
        }

        config.validate().context("Invalid game settings")?;
        Ok(config)
    }
}

pub fn load_config(path: &Path) -> Result<GameConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read config file {}", path.display()))?;
    parse_config(&text).with_context(|| format!("Could not load {}", path.display()))
}

pub fn parse_config(text: &str) -> Result<GameConfig> {
    Ok(toml::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_gives_defaults() {
        let args = Args::try_parse_from(["minecross"]).unwrap();
        assert_eq!(args.game_config().unwrap(), GameConfig::default());
        assert_eq!(args.seed, None);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "minecross",
            "--rows",
            "4",
            "--columns",
            "6",
            "--mine-percentage",
            "25",
            "--lives",
            "5",
            "--seed",
            "12",
        ])
        .unwrap();

        assert_eq!(args.game_config().unwrap(), GameConfig::new(4, 6, 25, 5).unwrap());
        assert_eq!(args.seed, Some(12));
    }

    #[test]
    fn percentage_above_hundred_is_refused() {
        assert!(Args::try_parse_from(["minecross", "--mine-percentage", "101"]).is_err());
    }

    #[test]
    fn zero_lives_fails_validation() {
        let args = Args::try_parse_from(["minecross", "--lives", "0"]).unwrap();
        assert!(args.game_config().is_err());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = parse_config("rows = 12\nmine_percentage = 20\n").unwrap();
        assert_eq!(config.rows, 12);
        assert_eq!(config.columns, GameConfig::DEFAULT_COLUMNS);
        assert_eq!(config.mine_percentage, 20);
        assert_eq!(config.lives, GameConfig::DEFAULT_LIVES);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_config("rows = \"many\"").is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = Args::try_parse_from(["minecross", "--config", "/nonexistent/minecross.toml"])
            .unwrap();
        assert!(args.game_config().is_err());
    }
}
