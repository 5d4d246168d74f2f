#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use seabattle::{select_target, Difficulty, Game, GameConfig, NullSink, Phase, Side};
#[cfg(feature = "std")]
use serde_json::json;

/// Headless self-play: a scripted player against the computer.
#[derive(Parser)]
#[cfg(feature = "std")]
struct Args {
    #[arg(long, default_value_t = 1)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    games: u64,
    #[arg(long, default_value = "medium", help = "Computer difficulty")]
    difficulty: Difficulty,
    #[arg(long, default_value = "hard", help = "Targeting rule used for the player")]
    player: Difficulty,
}

#[cfg(feature = "std")]
fn play(seed: u64, computer: Difficulty, player: Difficulty) -> anyhow::Result<serde_json::Value> {
    let config = GameConfig::seeded(seed).with_difficulty(computer);
    let mut game = Game::with_sink(config, NullSink).map_err(|e| anyhow::anyhow!(e))?;
    let mut player_rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    game.auto_place().map_err(|e| anyhow::anyhow!(e))?;

    let mut player_shots = 0usize;
    let mut computer_shots = 0usize;
    loop {
        match game.phase() {
            Phase::PlayerTurn => {
                let (x, y) = select_target(player, game.computer_board(), &mut player_rng)
                    .ok_or_else(|| anyhow::anyhow!("player ran out of targets"))?;
                game.shoot_at(x, y).map_err(|e| anyhow::anyhow!(e))?;
                player_shots += 1;
            }
            Phase::ComputerTurn => {
                game.trigger_computer_shot().map_err(|e| anyhow::anyhow!(e))?;
                computer_shots += 1;
            }
            Phase::GameOver => break,
            Phase::Placement => anyhow::bail!("game fell back to placement"),
        }
    }

    let winner = match game.winner() {
        Some(Side::Player) => "player",
        Some(Side::Computer) => "computer",
        None => anyhow::bail!("game over without a winner"),
    };
    Ok(json!({
        "seed": seed,
        "winner": winner,
        "player": {"shots": player_shots, "score": game.player_score()},
        "computer": {"shots": computer_shots, "score": game.computer_score()},
    }))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    seabattle::init_logging(log::LevelFilter::Warn);
    let args = Args::parse();

    let mut games = Vec::new();
    let mut player_wins = 0u64;
    for i in 0..args.games {
        let result = play(args.seed.wrapping_add(i), args.difficulty, args.player)?;
        if result["winner"] == "player" {
            player_wins += 1;
        }
        games.push(result);
    }

    let summary = json!({
        "difficulty": args.difficulty,
        "games": games,
        "player_wins": player_wins,
        "computer_wins": args.games - player_wins,
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
