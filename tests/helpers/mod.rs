use scramble::{Answer, Player, Round};

pub static PLAYER_1: &str = "alice";
pub static PLAYER_2: &str = "bob";

pub fn players() -> Vec<Player> {
    vec![PLAYER_1, PLAYER_2]
        .into_iter()
        .map(Player::from)
        .collect()
}

/// A round where both players answered and one of them needed a lookup first.
pub fn finished_round() -> Round {
    let mut round = Round::new("SCRAMBLE".chars().collect());
    round.record_lookup(&Player::from(PLAYER_2));
    round.add_answer(
        Answer::new(PLAYER_1, "scramble")
            .with_score(14)
            .with_definition("to mix together"),
    );
    round.add_answer(Answer::new(PLAYER_2, "cram").with_score(8));
    round
}
