use std::io::{self, Cursor, Sink};

use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, ConsoleInput, MatchController, Player};

type Seat = Player<ConsoleInput<Cursor<Vec<u8>>, Sink>, SmallRng>;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut board_rng = SmallRng::seed_from_u64(seed1 ^ seed2);
    let first: Seat = Player::Computer(SmallRng::seed_from_u64(seed1));
    let second: Seat = Player::Computer(SmallRng::seed_from_u64(seed2));

    let mut controller = MatchController::with_random_boards(first, second, &mut board_rng);
    let summary = controller.run(&mut ())?;

    serde_json::to_writer(io::stdout(), &summary)?;
    println!();
    Ok(())
}
