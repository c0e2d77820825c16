//! Command-line interface for strictly_checkers.

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use strictly_checkers::{Coordinate, Direction};

/// Strictly Checkers - type-safe checkers rules engine
#[derive(Parser, Debug)]
#[command(name = "strictly_checkers")]
#[command(about = "Play checkers against yourself in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML rules file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the opening board
    Show,

    /// Play a hot-seat game on stdin
    Play {
        /// Print each accepted move as JSON
        #[arg(long)]
        json: bool,
    },
}

/// One line typed at the `play` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// `x y`: click a tile.
    Click(Coordinate),
    /// `x y DIR [distance]`: submit a move directly.
    Submit {
        /// Square of the moving piece.
        from: Coordinate,
        /// Direction of travel.
        direction: Direction,
        /// 1 for a step, 2 for a jump.
        distance: i32,
    },
    /// `moves`: list legal moves.
    Moves,
    /// `board`: print the board.
    Board,
    /// `quit`: leave the game.
    Quit,
}

impl FromStr for Input {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["quit" | "q" | "exit"] => Ok(Input::Quit),
            ["moves" | "m"] => Ok(Input::Moves),
            ["board" | "b"] => Ok(Input::Board),
            [x, y] => Ok(Input::Click(coordinate(x, y)?)),
            [x, y, dir, rest @ ..] if rest.len() <= 1 => {
                let direction = Direction::from_str(dir)
                    .map_err(|_| anyhow!("Unknown direction '{}' (use NE, SE, SW or NW)", dir))?;
                let distance = match rest.first() {
                    Some(d) => d
                        .parse()
                        .with_context(|| format!("Distance '{}' is not a number", d))?,
                    None => 1,
                };
                Ok(Input::Submit {
                    from: coordinate(x, y)?,
                    direction,
                    distance,
                })
            }
            [] => bail!("Empty input"),
            _ => bail!("Expected 'x y', 'x y DIR [1|2]', 'moves', 'board' or 'quit'"),
        }
    }
}

fn coordinate(x: &str, y: &str) -> Result<Coordinate> {
    let x = x
        .parse()
        .with_context(|| format!("Column '{}' is not a number", x))?;
    let y = y
        .parse()
        .with_context(|| format!("Row '{}' is not a number", y))?;
    Ok(Coordinate::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_click() {
        assert_eq!(
            "2 3".parse::<Input>().unwrap(),
            Input::Click(Coordinate::new(2, 3))
        );
    }

    #[test]
    fn test_parse_submit_defaults_to_step() {
        assert_eq!(
            "0 2 se".parse::<Input>().unwrap(),
            Input::Submit {
                from: Coordinate::new(0, 2),
                direction: Direction::SouthEast,
                distance: 1,
            }
        );
        assert_eq!(
            "2 2 SE 2".parse::<Input>().unwrap(),
            Input::Submit {
                from: Coordinate::new(2, 2),
                direction: Direction::SouthEast,
                distance: 2,
            }
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Input>().is_err());
        assert!("a b".parse::<Input>().is_err());
        assert!("1 1 up".parse::<Input>().is_err());
        assert!("1 1 NE 2 3".parse::<Input>().is_err());
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("quit".parse::<Input>().unwrap(), Input::Quit);
        assert_eq!(" moves ".parse::<Input>().unwrap(), Input::Moves);
        assert_eq!("b".parse::<Input>().unwrap(), Input::Board);
    }
}
