use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;
use twenty48::{Direction, GameEngine, GameStatus};

const DEFAULT_MAX_MOVES: usize = 10_000;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "sim".into());
    let args: Vec<String> = args.collect();
    if args.is_empty() || args.len() > 2 {
        eprintln!("Usage: {} <seed> [max_moves]", program);
        std::process::exit(1);
    }
    let seed: u64 = args[0].parse()?;
    let max_moves: usize = match args.get(1) {
        Some(s) => s.parse()?,
        None => DEFAULT_MAX_MOVES,
    };

    let mut engine = GameEngine::seeded(seed);
    let mut picker = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut moves = 0usize;

    while moves < max_moves && engine.status() == GameStatus::InProgress {
        let direction = Direction::ALL[picker.random_range(0..Direction::ALL.len())];
        if engine.apply_move(direction).changed {
            moves += 1;
        }
    }

    let result = json!({
        "seed": seed,
        "moves": moves,
        "score": engine.score(),
        "max_tile": engine.max_tile(),
        "won": engine.check_win(),
        "game_over": engine.is_game_over(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
