use broadside::{AiPlayer, Match};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <setup-seed> <play-seed>", args[0]);
        std::process::exit(1);
    }
    let setup_seed: u64 = args[1].parse()?;
    let play_seed: u64 = args[2].parse()?;

    let mut game = Match::new([Box::new(AiPlayer::new()), Box::new(AiPlayer::new())]);
    game.setup(&mut SmallRng::seed_from_u64(setup_seed))?;
    let winner = game.run(&mut SmallRng::seed_from_u64(play_seed))?;

    let result = json!({
        "winner": std::format!("player{}", winner),
        "summary": game.summary(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
