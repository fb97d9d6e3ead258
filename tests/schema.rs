mod helpers;

use scramble::{Answer, BestAnswer, Error, Game, Player, Round, RoundState};

use crate::helpers::{finished_round, players, PLAYER_1, PLAYER_2};

#[test]
fn game_built_from_parts_keeps_them() {
    let game = Game::new(players(), vec![finished_round()]);

    assert_eq!(game.players(), players().as_slice());
    assert_eq!(game.rounds().len(), 1);
    assert_eq!(game.current_round_state(), Some(Ok(RoundState::Complete)));
    assert_eq!(game.settings().number_of_tiles, 7);
}

#[test]
fn snapshot_uses_the_client_field_names() {
    let game = Game::new(players(), vec![finished_round()]);

    let json: serde_json::Value = serde_json::from_str(&game.to_json().unwrap()).unwrap();

    assert_eq!(json["players"], serde_json::json!([PLAYER_1, PLAYER_2]));
    let round = &json["rounds"][0];
    assert_eq!(round["letters"][0], "S");
    assert_eq!(round["answers"][0]["player"], PLAYER_1);
    assert_eq!(round["answers"][0]["answer"], "scramble");
    assert_eq!(round["answers"][0]["score"], 14);
    assert_eq!(round["answers"][0]["definition"], "to mix together");
    assert_eq!(round["lookups_used"][PLAYER_2], 1);
    assert_eq!(round["best_answers"], serde_json::json!([]));
    assert_eq!(json["settings"]["scoring_method"], "Normal");
}

#[test]
fn minimal_client_round_gets_empty_extras() {
    let payload = r#"{
        "players": ["alice"],
        "rounds": [{"letters": ["A", "T", "E"], "answers": [{"player": "alice", "answer": "eat"}]}]
    }"#;

    let game = Game::from_json(payload).unwrap();

    let round = game.current_round().unwrap();
    assert_eq!(round.letters(), &['A', 'T', 'E']);
    assert_eq!(round.answers(), &[Answer::new("alice", "eat")]);
    assert!(round.lookups_used().is_empty());
    assert!(round.best_answers().is_empty());
    assert_eq!(game.settings().number_of_lookups, 2);
}

#[test]
fn guesses_used_client_round_is_migrated() {
    let payload = r#"{
        "players": ["alice", "bob"],
        "rounds": [{
            "letters": ["Z", "E", "U", "G", "M", "A"],
            "answers": [],
            "guesses_used": {"bob": 2},
            "best_answers": [{"word": "zeugma", "score": 18, "definition": "a figure of speech"}]
        }]
    }"#;

    let game = Game::from_json(payload).unwrap();

    let round = game.current_round().unwrap();
    assert_eq!(round.lookups_used_by(&Player::from("bob")), 2);
    assert_eq!(round.lookups_used_by(&Player::from("alice")), 0);
    assert_eq!(
        round.best_answers(),
        &[BestAnswer::new("zeugma", 18, "a figure of speech")]
    );
}

#[test]
fn multi_letter_tiles_are_rejected() {
    let payload = r#"{"players": [], "rounds": [{"letters": ["QU"]}]}"#;

    let result = Game::from_json(payload);

    assert!(matches!(result, Err(Error::UnprocessableGame(_, _))));
}

#[test]
fn round_with_more_answers_than_players_is_reported() {
    let game = Game::new(vec![Player::from(PLAYER_1)], vec![finished_round()]);

    assert_eq!(
        game.current_round_state(),
        Some(Err(Error::TooManyAnswers(2, 1)))
    );
}

#[test]
fn new_round_appended_by_hand_becomes_current() {
    let mut rounds = vec![finished_round()];
    rounds.push(Round::new(vec!['A', 'B']));

    let game = Game::new(players(), rounds);

    assert_eq!(game.current_round_state(), Some(Ok(RoundState::Start)));
}
