use rand::Rng;

use crate::animals::AnimalsDb;
use crate::cards::Deck;
use crate::engine::exec::{execute_sequence, ExecOutcome};
use crate::players::Players;
use crate::podium::Podium;
use crate::vocab::Vocabulary;

/// What one player turn produced. `Missed` carries the name of the player
/// granted the sole-eligible bonus when the miss left exactly one player
/// still able to act.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// No player registered under that name.
    UnknownPlayer,
    /// The player already acted this round.
    NotEligible,
    /// The sequence used a code outside the allowed vocabulary.
    Unauthorized,
    /// Odd-length sequence or a move that hit an empty podium.
    Infeasible,
    /// The sequence applied but did not reach the target.
    Missed { bonus: Option<String> },
    /// The sequence reached the target; a point was scored and a fresh
    /// round was dealt.
    Scored,
}

/// Live game state: the referentials, the current and target podium pairs,
/// and the full card deck drawn from between rounds.
#[derive(Debug)]
pub struct Game {
    pub animals: AnimalsDb,
    pub vocab: Vocabulary,
    pub players: Players,
    pub deck: Deck,
    pub current_blue: Podium,
    pub current_red: Podium,
    pub target_blue: Podium,
    pub target_red: Podium,
}

impl Game {
    /// Build a game over the given referentials. The deck is generated here;
    /// call [`Game::deal`] before the first turn.
    pub fn new(animals: AnimalsDb, vocab: Vocabulary, players: Players) -> Result<Game, String> {
        let n = animals.len();
        let deck = Deck::generate_all(n)?;
        Ok(Game {
            animals,
            vocab,
            players,
            deck,
            current_blue: Podium::with_capacity(n),
            current_red: Podium::with_capacity(n),
            target_blue: Podium::with_capacity(n),
            target_red: Podium::with_capacity(n),
        })
    }

    /// Start a round: one random card rebuilds the current pair, a second
    /// (independent) draw rebuilds the target pair.
    pub fn deal<R: Rng>(&mut self, rng: &mut R) {
        if let Some(card) = self.deck.draw(rng) {
            card.deal(&mut self.current_blue, &mut self.current_red);
        }
        if let Some(card) = self.deck.draw(rng) {
            card.deal(&mut self.target_blue, &mut self.target_red);
        }
    }

    /// Run one player turn: validate the player, interpret the sequence on a
    /// clone of the current pair, then commit or reject.
    ///
    /// Scoring protocol:
    /// - reaching the target awards a point, resets everyone's eligibility
    ///   and deals the next round;
    /// - a miss costs the actor their eligibility; if exactly one eligible
    ///   player remains they collect the round bonus and a fresh round is
    ///   dealt; if none remain the round elapses unrewarded and is redealt;
    /// - unauthorized or infeasible sequences change nothing.
    pub fn play_turn<R: Rng>(
        &mut self,
        name: &str,
        sequence: &str,
        rng: &mut R,
    ) -> TurnOutcome {
        if !self.players.exists(name) {
            return TurnOutcome::UnknownPlayer;
        }
        if !self.players.can_play(name) {
            return TurnOutcome::NotEligible;
        }

        let mut blue = self.current_blue.clone();
        let mut red = self.current_red.clone();
        match execute_sequence(self.vocab, sequence, &mut blue, &mut red) {
            ExecOutcome::Unauthorized => return TurnOutcome::Unauthorized,
            ExecOutcome::Malformed => return TurnOutcome::Infeasible,
            ExecOutcome::Applied => {}
        }

        if blue == self.target_blue && red == self.target_red {
            // Commit-by-redeal: the reached state is immediately replaced by
            // the next round's draw, so the clone itself is dropped.
            self.players.award_point(name);
            self.players.reset_turns();
            self.deal(rng);
            return TurnOutcome::Scored;
        }

        self.players.mark_played(name);
        let bonus = self.players.sole_eligible().map(|p| p.name.clone());
        match &bonus {
            Some(winner) => {
                self.players.award_point(winner);
                self.players.reset_turns();
                self.deal(rng);
            }
            None => {
                if self.players.iter().all(|p| !p.eligible) {
                    // Round elapsed with nobody left; rearm and redeal.
                    self.players.reset_turns();
                    self.deal(rng);
                }
            }
        }
        TurnOutcome::Missed { bonus }
    }

    /// Final `(name, points)` listing in registration order.
    pub fn standings(&self) -> impl Iterator<Item = (&str, u32)> {
        self.players.iter().map(|p| (p.name.as_str(), p.points))
    }
}
