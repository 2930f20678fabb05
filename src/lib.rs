#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod vocab;
pub mod animals;
pub mod podium;
pub mod cards;
pub mod players;
pub mod config;
pub mod rng;
pub mod hash;

pub mod engine {
    pub mod exec;
    pub mod turn;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::animals::{Animal, AnimalsDb};
pub use crate::cards::{Card, Deck};
pub use crate::config::{load_config, parse_config, GameConfig};
pub use crate::engine::exec::{execute_code, execute_sequence, ExecOutcome};
pub use crate::engine::turn::{Game, TurnOutcome};
pub use crate::hash::podium_key;
pub use crate::players::{Player, Players};
pub use crate::podium::{max_height, Podium};
pub use crate::rng::rng_for_game;
pub use crate::solver::{solve, SearchLimits};
pub use crate::types::MoveCode;
pub use crate::vocab::Vocabulary;
