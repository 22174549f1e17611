use broadside::{
    init_logging,
    ui::{describe_shot, render_own_board},
    Match, Mode,
};

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a match on this terminal.
    Play {
        #[arg(
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u8).range(0..=2),
            help = "Number of human players: 0 (computer vs computer), 1, or 2"
        )]
        players: u8,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { players, seed } => {
            let mode = Mode::try_from(players)
                .map_err(|n| anyhow::anyhow!("cannot have a game with {} players", n))?;
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };

            println!("Welcome to Broadside! Take turns firing at each other's fleet.");
            let mut game = Match::new(mode.players());
            game.setup(&mut rng)?;

            println!("Beginning game ...");
            let spectating = game.humans() == 0;
            let winner = game.run_with(&mut rng, |report| {
                if spectating {
                    println!("Player {} fires at {}", report.shooter, describe_shot(&report.shot));
                }
            })?;

            if spectating {
                for owner in [1, 2] {
                    if let Some(board) = game.board(owner) {
                        println!("\nPlayer {}'s board:\n{}", owner, render_own_board(board));
                    }
                }
            }
            println!("\nPlayer {} has won the game after {} turns!", winner, game.turns());
        }
    }
    Ok(())
}
