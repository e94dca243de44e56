//! Terminal runner for the minefield crossing game.
//!
//! Reads single key presses in raw mode and feeds them to the game state.
//! All game feedback goes through the `log` facade.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use minecross_core::{GameState, LogObserver, RandomMinePlacer};

use crate::cli::Args;
use crate::input::{Command, map_key};

mod cli;
mod input;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose.log_level_filter());

    let config = args.game_config()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("Using seed {seed}");

    log::info!("Welcome to minecross!");
    log::info!("Use the arrow keys (or w/a/s/d) to move, press 'x' to quit at any time.");
    log::info!("Cross from the top-left corner to the far right of the grid without losing all your lives.");

    let mut game = GameState::with_observer(config, RandomMinePlacer::new(seed), LogObserver)?;

    terminal::enable_raw_mode()?;
    let result = run(&mut game);

    // Always try to restore terminal state.
    let _ = terminal::disable_raw_mode();
    result
}

/// Raw mode does not translate `\n`, so every record ends with `\r\n`.
fn init_logger(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| write!(buf, "[{}] {}\r\n", record.level(), record.args()))
        .init();
}

fn run(game: &mut GameState<LogObserver>) -> Result<()> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match map_key(key) {
            Some(Command::Quit) => return Ok(()),
            Some(Command::Move(direction)) => {
                let was_over = game.is_game_over();
                game.move_player(direction);
                if game.is_game_over() && !was_over {
                    log::info!("Press 'x' to quit.");
                }
            }
            None => {}
        }
    }
}
