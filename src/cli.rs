#![cfg(feature = "std")]

//! Line-based terminal front end.
//!
//! Reads one command per line, forwards it to a [`GameEngine`] and prints the
//! board after every change. Key bindings live here, not in the engine.

use std::io::{BufRead, Write};

use crate::{common::GameError, direction::Direction, game::GameEngine, grid::Grid};
use rand::Rng;

/// A single player instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Undo,
    Reset,
    Quit,
}

/// Map a line of input to a command.
///
/// Accepts `w/a/s/d`, `h/j/k/l`, full direction names, ANSI arrow-key
/// sequences, `u`/`undo`, `r`/`reset`/`esc` (or a bare escape) and
/// `q`/`quit`.
pub fn parse_command(input: &str) -> Option<Command> {
    let trimmed = input.trim_matches(|c: char| c == ' ' || c == '\t' || c == '\r' || c == '\n');
    match trimmed {
        "\u{1b}[A" => return Some(Command::Move(Direction::Up)),
        "\u{1b}[B" => return Some(Command::Move(Direction::Down)),
        "\u{1b}[C" => return Some(Command::Move(Direction::Right)),
        "\u{1b}[D" => return Some(Command::Move(Direction::Left)),
        "\u{1b}" => return Some(Command::Reset),
        _ => {}
    }
    let lower = trimmed.to_ascii_lowercase();
    let cmd = match lower.as_str() {
        "a" | "h" | "left" => Command::Move(Direction::Left),
        "w" | "k" | "up" => Command::Move(Direction::Up),
        "d" | "l" | "right" => Command::Move(Direction::Right),
        "s" | "j" | "down" => Command::Move(Direction::Down),
        "u" | "undo" => Command::Undo,
        "r" | "reset" | "esc" => Command::Reset,
        "q" | "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(cmd)
}

/// Text rendering of the board with the score above it.
pub fn render(grid: &Grid, score: u64) -> String {
    std::format!("Score: {}\n{}\n", score, grid)
}

pub const HELP: &str = "Move with w/a/s/d or arrows, u to undo, r to restart, q to quit.";

/// Drive `engine` from `input` until `quit` or end of input.
pub fn run_session<R, I, O>(engine: &mut GameEngine<R>, input: I, mut output: O) -> anyhow::Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(output, "{}", HELP)?;
    write!(output, "{}", render(engine.grid(), engine.score()))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(cmd) = parse_command(&line) else {
            writeln!(output, "Unknown command: {}", line.trim())?;
            continue;
        };
        match cmd {
            Command::Quit => break,
            Command::Reset => {
                engine.reset();
                writeln!(output, "New game.")?;
            }
            Command::Undo => match engine.undo() {
                Ok(()) => {}
                Err(GameError::EmptyHistory) => {
                    writeln!(output, "Nothing to undo.")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            },
            Command::Move(direction) => {
                let outcome = engine.apply_move(direction);
                if !outcome.changed {
                    writeln!(output, "Nothing moved.")?;
                    continue;
                }
                write!(output, "{}", render(engine.grid(), engine.score()))?;
                if outcome.won {
                    writeln!(output, "You reached {}!", engine.config().win_tile)?;
                } else if outcome.game_over {
                    writeln!(output, "Game over! No moves left.")?;
                }
                continue;
            }
        }
        write!(output, "{}", render(engine.grid(), engine.score()))?;
    }
    output.flush()?;
    Ok(())
}
