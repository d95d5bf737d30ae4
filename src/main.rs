use std::io;
use std::time::Duration;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    greeting, init_logging, ConsoleInput, ConsoleObserver, MatchController, MatchState, Player,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer on a 6x6 grid", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible boards and computer moves (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1000, help = "Pause between moves in milliseconds")]
    pace_ms: u64,
    #[arg(long, help = "Show the computer's fleet")]
    reveal: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut board_rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let computer_rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
    }

    let mut controller = MatchController::with_random_boards(
        Player::Human(ConsoleInput::stdin()),
        Player::Computer(computer_rng),
        &mut board_rng,
    );
    controller.reveal_computer_board(cli.reveal);

    let mut observer = ConsoleObserver::new(io::stdout(), Duration::from_millis(cli.pace_ms));
    println!("{}", greeting());
    let summary = controller.run(&mut observer)?;

    match summary.state {
        MatchState::PlayerWon => log::info!("player won in {} shots", summary.player_shots),
        _ => log::info!("computer won in {} shots", summary.computer_shots),
    }
    Ok(())
}
