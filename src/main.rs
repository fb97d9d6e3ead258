use scramble::config::Config;
use scramble::{Game, Player, Round};

fn main() {
    std_logger::Config::logfmt().init();

    let config = match Config::get() {
        Ok(config) => config,
        Err(error) => {
            log::error!("Unable to get the Config. Error: '{error}'.");
            std::process::exit(1);
        }
    };
    log::set_max_level(config.application.log_level());

    let players: Vec<Player> = std::env::args().skip(1).map(Player::from).collect();
    if players.is_empty() {
        log::warn!("No players given, the game will start with an empty roster.");
    }

    let game = Round::deal(&config.game, &mut rand::thread_rng())
        .and_then(|round| Game::new(players, vec![round]).with_settings(config.game.clone()))
        .and_then(|game| game.to_json());

    match game {
        Ok(json) => println!("{json}"),
        Err(error) => {
            log::error!("Unable to create the game. Error: '{error}'.");
            std::process::exit(1);
        }
    }
}
