use std::io;

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use twenty48::{
    cli::{render, run_session},
    init_logging, Direction, GameConfig, GameEngine, GameStatus, DEFAULT_HISTORY_LIMIT, GRID_SIZE,
    WIN_TILE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone, Debug)]
struct Rules {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = GRID_SIZE, help = "Side length of the grid (2 to 64)")]
    size: usize,
    #[arg(long, default_value_t = WIN_TILE, help = "Tile value that wins the game")]
    win_tile: u32,
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT, help = "Number of moves that can be undone")]
    history: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively, one command per line.
    Play {
        #[command(flatten)]
        rules: Rules,
    },
    /// Apply a fixed move sequence (e.g. `lurd`) and print the final board.
    Replay {
        #[command(flatten)]
        rules: Rules,
        /// Moves as letters: l(eft), u(p), r(ight), d(own).
        moves: String,
    },
}

fn build_engine(rules: &Rules) -> anyhow::Result<GameEngine> {
    let config = GameConfig::default()
        .with_size(rules.size)
        .with_win_tile(rules.win_tile)
        .with_history_limit(rules.history);
    let rng = if let Some(s) = rules.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    Ok(GameEngine::new(config, rng)?)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { rules } => {
            let mut engine = build_engine(&rules)?;
            let stdin = io::stdin();
            run_session(&mut engine, stdin.lock(), io::stdout())?;
        }
        Commands::Replay { rules, moves } => {
            let mut engine = build_engine(&rules)?;
            for ch in moves.chars().filter(|c| !c.is_whitespace()) {
                let direction: Direction = ch.to_string().parse()?;
                engine.apply_move(direction);
                if engine.status() != GameStatus::InProgress {
                    break;
                }
            }
            print!("{}", render(engine.grid(), engine.score()));
            match engine.status() {
                GameStatus::Won => println!("Won."),
                GameStatus::Lost => println!("Game over."),
                GameStatus::InProgress => {}
            }
        }
    }
    Ok(())
}
