//! Strictly Checkers - terminal front-end
//!
//! Reads tile clicks and moves from stdin and renders the board as text.
//! All rules live in the library.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, Input};
use std::io::{BufRead, Write};
use strictly_checkers::{CheckersConfig, ClickOutcome, GameSession, MoveOutcome, TileSelection};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => CheckersConfig::from_file(path)?,
        None => CheckersConfig::default(),
    };

    match cli.command {
        Command::Show => show(config),
        Command::Play { json } => play(config, json),
    }
}

/// Print the opening board
#[instrument(skip(config))]
fn show(config: CheckersConfig) -> Result<()> {
    let session = GameSession::new(config)?;
    print!("{}", session.board());
    Ok(())
}

/// Run a hot-seat game over stdin
#[instrument(skip(config))]
fn play(config: CheckersConfig, json: bool) -> Result<()> {
    let mut session = GameSession::new(config)?;
    let mut selection = TileSelection::new();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    info!("Starting hot-seat game");
    print!("{}", session.board());

    loop {
        write!(stdout, "{} > ", session.turn())?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            debug!("Input closed");
            break;
        }

        let input = match line.parse::<Input>() {
            Ok(input) => input,
            Err(e) => {
                println!("error: {:#}", e);
                continue;
            }
        };

        let result = match input {
            Input::Quit => break,
            Input::Board => {
                print!("{}", session.board());
                continue;
            }
            Input::Moves => {
                for mv in session.legal_moves() {
                    println!("  {}", mv);
                }
                continue;
            }
            Input::Click(coord) => selection.click(&mut session, coord),
            Input::Submit {
                from,
                direction,
                distance,
            } => {
                selection.clear();
                let player = session.turn();
                session
                    .submit_move(player, from, direction, distance)
                    .map(ClickOutcome::Moved)
            }
        };

        match result {
            Ok(ClickOutcome::Selected(coord)) => println!("selected {}", coord),
            Ok(ClickOutcome::Deselected) => println!("selection cleared"),
            Ok(ClickOutcome::Moved(outcome)) => report(&session, &outcome, json)?,
            Err(e) => {
                warn!(error = %e, "Move rejected");
                println!("error: {}", e);
            }
        }

        if session.status().is_over() {
            println!("{}", session.status());
            break;
        }
    }

    Ok(())
}

/// Print an accepted move and the board after it
fn report(session: &GameSession, outcome: &MoveOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(outcome)?);
    } else {
        let moved = outcome.moved();
        match outcome.captured() {
            Some(captured) => println!("{} -> {} capturing {}", moved.from, moved.to, captured),
            None => println!("{} -> {}", moved.from, moved.to),
        }
        if *outcome.promoted() {
            println!("crowned at {}", moved.to);
        }
    }
    print!("{}", session.board());
    Ok(())
}
