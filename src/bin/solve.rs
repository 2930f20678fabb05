use std::path::PathBuf;

use clap::Parser;
use crazycircus::{
    load_config, rng_for_game, solve, AnimalsDb, Deck, Podium, SearchLimits,
};

/// Solver driver:
/// - Loads a config and builds the full deck
/// - Draws a current and a target pair with a deterministic seed
/// - Reports a shortest solving sequence under the allowed vocabulary
#[derive(Debug, Parser)]
#[command(name = "solve", about = "Crazy Circus shortest-sequence solver")]
struct Args {
    /// Config file: line 1 animal names, line 2 allowed move codes
    #[arg(long, default_value = "data/crazy.cfg")]
    config: PathBuf,

    /// RNG seed for the two card draws (deterministic)
    #[arg(long, default_value_t = 0x00C0_FFEE)]
    seed: u64,

    /// Longest sequence considered
    #[arg(long, default_value_t = 32)]
    max_depth: u8,
}

fn render(animals: &AnimalsDb, podium: &Podium) -> String {
    let names: Vec<&str> = podium.iter().filter_map(|idx| animals.name(idx)).collect();
    format!("[{}]", names.join(", "))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = load_config(&args.config).map_err(|e| format!("config error: {e}"))?;
    let animals = AnimalsDb::from_names(config.animal_names.iter().cloned());
    let deck = Deck::generate_all(animals.len())?;
    println!(
        "[solve] Deck holds {} cards for {} animals.",
        deck.len(),
        animals.len()
    );

    let mut rng = rng_for_game(args.seed);
    let n = animals.len();
    let (mut blue, mut red) = (Podium::with_capacity(n), Podium::with_capacity(n));
    let (mut target_blue, mut target_red) = (Podium::with_capacity(n), Podium::with_capacity(n));
    if let Some(card) = deck.draw(&mut rng) {
        card.deal(&mut blue, &mut red);
    }
    if let Some(card) = deck.draw(&mut rng) {
        card.deal(&mut target_blue, &mut target_red);
    }

    println!(
        "[solve] Current: Blue {} Red {}",
        render(&animals, &blue),
        render(&animals, &red)
    );
    println!(
        "[solve] Target:  Blue {} Red {}",
        render(&animals, &target_blue),
        render(&animals, &target_red)
    );

    let limits = SearchLimits {
        max_depth: args.max_depth,
        ..SearchLimits::default()
    };
    match solve(config.vocab, &blue, &red, &target_blue, &target_red, limits) {
        Some(moves) if moves.is_empty() => println!("[solve] Already at the target."),
        Some(moves) => {
            let word: String = moves.iter().map(|c| c.as_str()).collect();
            println!("[solve] Shortest sequence ({} moves): {word}", moves.len());
        }
        None => println!(
            "[solve] No sequence within depth {} reaches the target under this vocabulary.",
            args.max_depth
        ),
    }

    Ok(())
}
