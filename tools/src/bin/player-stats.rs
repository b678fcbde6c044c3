use std::fs;

use clap::{App, Arg};
use env_logger::Env;
use hypixel::{
    client::TransportError,
    stats::bedwars::{BedwarsStats, ModeStats},
    Client, Config, Game, Request, Response, Transport, UnknownGames,
};
use log::{debug, error};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Answers every request with a response saved to disk earlier.
struct Saved {
    body: String,
}

impl Transport for Saved {
    fn get(&self, request: &Request) -> std::result::Result<Response, TransportError> {
        debug!("answering {} from saved response", request.url);
        Ok(Response {
            status: 200,
            body: self.body.clone(),
        })
    }
}

fn ratio(r: Option<f64>) -> String {
    match r {
        Some(r) => format!("{:.2}", r),
        None => "-".to_owned(),
    }
}

fn print_mode(name: &str, mode: &ModeStats) {
    println!(
        "{:<10} {:>6} {:>6} {:>6} {:>6} {:>7} {:>6} {:>6}",
        name,
        mode.plays,
        mode.winloss.wins,
        mode.winloss.losses,
        ratio(mode.winloss.wlr()),
        ratio(mode.fkdr()),
        ratio(mode.kdr()),
        ratio(mode.beds.bblr()),
    );
}

fn print_bedwars(stats: &BedwarsStats) {
    println!("Bed Wars: {} experience, {} coins", stats.experience, stats.coins);
    println!(
        "{:<10} {:>6} {:>6} {:>6} {:>6} {:>7} {:>6} {:>6}",
        "mode", "games", "wins", "losses", "wlr", "fkdr", "kdr", "bblr"
    );
    print_mode("overall", &stats.all_modes);
    print_mode("solo", &stats.solo);
    print_mode("doubles", &stats.duos);
    print_mode("3v3v3v3", &stats.threes);
    print_mode("4v4v4v4", &stats.fours);
    print_mode("4v4", &stats.teams);
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let matches = App::new("player-stats")
        .about("Summarise a saved /player response")
        .arg(Arg::with_name("file").takes_value(true).required(true))
        .arg(
            Arg::with_name("lenient")
                .long("lenient")
                .takes_value(false)
                .help("skip stats of games this version does not know"),
        )
        .arg(
            Arg::with_name("config")
                .long("config")
                .takes_value(true)
                .required(false)
                .help("JSON client config"),
        )
        .get_matches();

    let mut config = match matches.value_of("config") {
        Some(path) => Config::from_json(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    if matches.is_present("lenient") {
        config.unknown_games = UnknownGames::Lenient;
    }

    let path = matches.value_of("file").ok_or("no file given")?;
    let body = fs::read_to_string(path)?;
    let client = Client::with_config("", config, Saved { body });

    let player = match client.get_player("")? {
        Some(player) => player,
        None => {
            error!("{} holds no player", path);
            return Ok(());
        }
    };

    println!(
        "{} [{}]",
        player.display_name,
        player.rank.as_deref().unwrap_or("no rank")
    );
    if let Some(last_login) = player.last_login {
        println!("last login {}", last_login.to_rfc2822());
    }

    match player.stats_for::<BedwarsStats>(Game::Bedwars) {
        Some(stats) => print_bedwars(stats),
        None => println!("no Bed Wars stats"),
    }

    let mut other: Vec<_> = player
        .raw_stats
        .keys()
        .filter(|k| Game::from_key(k) != Some(Game::Bedwars))
        .collect();
    other.sort();
    if !other.is_empty() {
        println!("also played: {}", other.iter().map(|k| k.as_str()).collect::<Vec<_>>().join(", "));
    }

    Ok(())
}
