use crazycircus::{
    rng_for_game, AnimalsDb, Game, MoveCode, Players, Podium, TurnOutcome, Vocabulary,
};

fn podium_of(slots: &[u8]) -> Podium {
    let mut p = Podium::with_capacity(slots.len());
    for &s in slots {
        p.push_top(s);
    }
    p
}

fn game_with(players: &[&str], vocab: Vocabulary) -> Game {
    let animals = AnimalsDb::from_names(["lion", "tiger", "bear"]);
    let players = Players::from_names(players.iter().copied()).expect("players");
    Game::new(animals, vocab, players).expect("game")
}

/// Each animal index stands on exactly one podium of the pair.
fn assert_partition(blue: &Podium, red: &Podium, n: u8) {
    assert_eq!(blue.len() + red.len(), n as usize);
    for idx in 0..n {
        assert_ne!(
            blue.contains(idx),
            red.contains(idx),
            "animal {idx} must be on exactly one podium"
        );
    }
}

#[test]
fn deal_partitions_both_pairs() {
    let mut game = game_with(&["alice"], Vocabulary::full());
    let mut rng = rng_for_game(7);
    for _ in 0..32 {
        game.deal(&mut rng);
        assert_partition(&game.current_blue, &game.current_red, 3);
        assert_partition(&game.target_blue, &game.target_red, 3);
    }
}

#[test]
fn solving_sequence_scores_and_redeals() {
    let mut game = game_with(&["alice", "bob"], Vocabulary::from_codes(&[MoveCode::Ki, MoveCode::Lo]));
    let mut rng = rng_for_game(1);
    game.current_blue = podium_of(&[0, 1, 2]);
    game.current_red = podium_of(&[]);
    game.target_blue = podium_of(&[0, 1]);
    game.target_red = podium_of(&[2]);

    let outcome = game.play_turn("alice", "KI", &mut rng);
    assert_eq!(outcome, TurnOutcome::Scored);
    assert_eq!(game.players.by_name("alice").unwrap().points, 1);
    assert!(game.players.iter().all(|p| p.eligible));

    // A fresh round was dealt for both pairs.
    assert_partition(&game.current_blue, &game.current_red, 3);
    assert_partition(&game.target_blue, &game.target_red, 3);

    // Bob follows with an out-of-vocabulary code: reported, nothing changes.
    let before_blue = game.current_blue.clone();
    let before_red = game.current_red.clone();
    let outcome = game.play_turn("bob", "SO", &mut rng);
    assert_eq!(outcome, TurnOutcome::Unauthorized);
    assert_eq!(game.current_blue, before_blue);
    assert_eq!(game.current_red, before_red);
    assert_eq!(game.players.by_name("bob").unwrap().points, 0);
    assert!(game.players.by_name("bob").unwrap().eligible);
}

#[test]
fn miss_with_two_players_grants_sole_eligible_bonus() {
    let mut game = game_with(&["alice", "bob"], Vocabulary::full());
    let mut rng = rng_for_game(2);
    game.current_blue = podium_of(&[0, 1, 2]);
    game.current_red = podium_of(&[]);
    game.target_blue = podium_of(&[]);
    game.target_red = podium_of(&[0, 1, 2]);

    // KI applies but only moves one animal: a miss.
    let outcome = game.play_turn("alice", "KI", &mut rng);
    assert_eq!(
        outcome,
        TurnOutcome::Missed {
            bonus: Some("bob".to_string())
        }
    );
    assert_eq!(game.players.by_name("alice").unwrap().points, 0);
    assert_eq!(game.players.by_name("bob").unwrap().points, 1);
    assert!(
        game.players.iter().all(|p| p.eligible),
        "bonus ends the round and rearms everyone"
    );
}

#[test]
fn miss_with_three_players_keeps_round_open() {
    let mut game = game_with(&["alice", "bob", "carol"], Vocabulary::full());
    let mut rng = rng_for_game(3);
    game.current_blue = podium_of(&[0, 1, 2]);
    game.current_red = podium_of(&[]);
    game.target_blue = podium_of(&[]);
    game.target_red = podium_of(&[0, 1, 2]);
    let frozen_target_blue = game.target_blue.clone();
    let frozen_target_red = game.target_red.clone();

    let outcome = game.play_turn("alice", "KI", &mut rng);
    assert_eq!(outcome, TurnOutcome::Missed { bonus: None });
    assert!(!game.players.by_name("alice").unwrap().eligible);

    // No redeal happened: two players can still try this round.
    assert_eq!(game.target_blue, frozen_target_blue);
    assert_eq!(game.target_red, frozen_target_red);

    // Alice is spent for the round.
    let outcome = game.play_turn("alice", "KI", &mut rng);
    assert_eq!(outcome, TurnOutcome::NotEligible);

    // Bob misses too; carol becomes the sole eligible player and scores.
    let outcome = game.play_turn("bob", "KI", &mut rng);
    assert_eq!(
        outcome,
        TurnOutcome::Missed {
            bonus: Some("carol".to_string())
        }
    );
    assert_eq!(game.players.by_name("carol").unwrap().points, 1);
    assert!(game.players.iter().all(|p| p.eligible));
}

#[test]
fn single_player_miss_elapses_the_round() {
    let mut game = game_with(&["alice"], Vocabulary::full());
    let mut rng = rng_for_game(4);
    game.current_blue = podium_of(&[0, 1, 2]);
    game.current_red = podium_of(&[]);
    game.target_blue = podium_of(&[]);
    game.target_red = podium_of(&[0, 1, 2]);

    let outcome = game.play_turn("alice", "KI", &mut rng);
    assert_eq!(outcome, TurnOutcome::Missed { bonus: None });
    assert_eq!(game.players.by_name("alice").unwrap().points, 0);
    assert!(
        game.players.by_name("alice").unwrap().eligible,
        "with nobody left the round elapses and eligibility rearms"
    );
}

#[test]
fn unknown_player_and_infeasible_sequence_change_nothing() {
    let mut game = game_with(&["alice"], Vocabulary::full());
    let mut rng = rng_for_game(5);
    game.deal(&mut rng);
    let before_blue = game.current_blue.clone();
    let before_red = game.current_red.clone();

    assert_eq!(
        game.play_turn("mallory", "KI", &mut rng),
        TurnOutcome::UnknownPlayer
    );

    // Odd-length input is infeasible; the live pair is untouched.
    assert_eq!(
        game.play_turn("alice", "KIL", &mut rng),
        TurnOutcome::Infeasible
    );
    assert_eq!(game.current_blue, before_blue);
    assert_eq!(game.current_red, before_red);
    assert!(game.players.by_name("alice").unwrap().eligible);
}

#[test]
fn empty_sequence_scores_on_matching_pairs() {
    let mut game = game_with(&["alice", "bob"], Vocabulary::full());
    let mut rng = rng_for_game(6);
    game.current_blue = podium_of(&[0, 1]);
    game.current_red = podium_of(&[2]);
    game.target_blue = podium_of(&[0, 1]);
    game.target_red = podium_of(&[2]);

    assert_eq!(game.play_turn("alice", "", &mut rng), TurnOutcome::Scored);
    assert_eq!(game.players.by_name("alice").unwrap().points, 1);
}

#[test]
fn standings_keep_registration_order() {
    let mut game = game_with(&["carol", "alice", "bob"], Vocabulary::full());
    let mut rng = rng_for_game(8);
    game.current_blue = podium_of(&[0, 1, 2]);
    game.current_red = podium_of(&[]);
    game.target_blue = podium_of(&[0, 1, 2]);
    game.target_red = podium_of(&[]);
    let _ = game.play_turn("alice", "", &mut rng);

    let names: Vec<&str> = game.standings().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["carol", "alice", "bob"]);
    let points: Vec<u32> = game.standings().map(|(_, p)| p).collect();
    assert_eq!(points, vec![0, 1, 0]);
}
