use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use crazycircus::{
    load_config, rng_for_game, AnimalsDb, Game, MoveCode, Players, Podium, TurnOutcome,
};

#[derive(Debug, Parser)]
#[command(name = "circus-cli", about = "Crazy Circus console game")]
struct Args {
    /// Config file: line 1 animal names, line 2 allowed move codes
    #[arg(long, default_value = "data/crazy.cfg")]
    config: PathBuf,

    /// RNG seed for card draws (defaults to a clock-derived seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Print final standings as JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Player names, in registration order
    #[arg(required = true, num_args = 1..)]
    players: Vec<String>,
}

fn legend(code: MoveCode) -> &'static str {
    match code {
        MoveCode::Ki => "KI (B->R)",
        MoveCode::Lo => "LO (B<-R)",
        MoveCode::So => "SO (B<->R)",
        MoveCode::Ni => "NI (B ^)",
        MoveCode::Ma => "MA (R ^)",
    }
}

fn print_vocabulary(game: &Game) {
    let entries: Vec<&str> = game.vocab.codes().map(legend).collect();
    println!("{}", entries.join(" | "));
    println!();
}

fn cell(game: &Game, podium: &Podium, level: usize) -> String {
    podium
        .get(level)
        .and_then(|idx| game.animals.name(idx))
        .unwrap_or("")
        .to_string()
}

/// Render the four live podiums side by side, top row first:
/// current Blue/Red, then the target pair.
fn print_podiums(game: &Game) {
    let max = crazycircus::max_height(
        &game.current_blue,
        &game.current_red,
        &game.target_blue,
        &game.target_red,
    );
    for level in (0..max).rev() {
        println!(
            "{:<12}  {:<12} || {:<12}   {:<12}",
            cell(game, &game.current_blue, level),
            cell(game, &game.current_red, level),
            cell(game, &game.target_blue, level),
            cell(game, &game.target_red, level),
        );
    }
    println!("---------------------------------------------------------------");
    println!("{:<12}  {:<12} || {:<12}   {:<12}", "Blue", "Red", "Blue", "Red");
    println!();
}

fn report(outcome: &TurnOutcome, name: &str) {
    match outcome {
        TurnOutcome::UnknownPlayer => println!("no player named '{name}'\n"),
        TurnOutcome::NotEligible => println!("{name} cannot play again this round\n"),
        TurnOutcome::Unauthorized => println!("unknown move sequence\n"),
        TurnOutcome::Infeasible => println!("that sequence cannot be executed\n"),
        TurnOutcome::Missed { bonus } => {
            println!("the sequence does not reach the target -- {name} is out for this round");
            if let Some(winner) = bonus {
                println!("{winner} wins a point: they alone could still play this round");
            }
            println!();
        }
        TurnOutcome::Scored => println!("{name} wins a point\n"),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x00C0_FFEE)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = load_config(&args.config).map_err(|e| format!("config error: {e}"))?;
    let animals = AnimalsDb::from_names(config.animal_names.iter().cloned());
    let players = Players::from_names(args.players.iter().cloned())
        .map_err(|e| format!("player list error: {e}"))?;

    let mut game = Game::new(animals, config.vocab, players)?;
    let mut rng = rng_for_game(args.seed.unwrap_or_else(clock_seed));
    game.deal(&mut rng);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_vocabulary(&game);
        print_podiums(&game);
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            continue;
        };
        // A bare name is an empty sequence, which scores only if the pairs
        // already match.
        let sequence = parts.next().unwrap_or("");

        let outcome = game.play_turn(name, sequence, &mut rng);
        report(&outcome, name);
    }

    if args.json {
        let roster: Vec<_> = game.players.iter().collect();
        println!("{}", serde_json::to_string(&roster)?);
    } else {
        println!("Final scores:");
        for (name, points) in game.standings() {
            println!("  {name}: {points}");
        }
    }

    Ok(())
}
