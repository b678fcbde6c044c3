use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use crate::{stats::bedwars::BedwarsStats, Error, Game, Player, StatsRegistry, UnknownGames};

fn player(v: Value) -> Player {
    Player::from_json(v, &StatsRegistry::standard()).unwrap()
}

fn rank_of(fields: Value) -> Option<String> {
    let mut v = json!({"uuid": "abc", "displayname": "Steve"});
    v.as_object_mut()
        .unwrap()
        .extend(fields.as_object().unwrap().clone());
    player(v).rank
}

#[test]
fn general_fields() {
    let p = player(json!({
        "uuid": "069a79f444e94726a5befca90e38aaf5",
        "displayname": "Notch",
        "firstLogin": 1_400_000_000_000i64,
        "lastLogin": 1_600_000_000_000i64,
        "stats": {"Bedwars": {"wins_bedwars": 4}},
    }));

    assert_eq!(p.uuid, "069a79f444e94726a5befca90e38aaf5");
    assert_eq!(p.display_name, "Notch");
    assert_eq!(
        p.first_login,
        Utc.timestamp_millis_opt(1_400_000_000_000).single()
    );
    assert_eq!(
        p.last_login,
        Utc.timestamp_millis_opt(1_600_000_000_000).single()
    );
    assert_eq!(p.last_logout, None);
    assert!(p.raw_stats.contains_key("Bedwars"));

    let bedwars = p.stats_for::<BedwarsStats>(Game::Bedwars).unwrap();
    assert_eq!(bedwars.all_modes.winloss.wins, 4);
}

#[test]
fn missing_stats_are_empty() {
    let p = player(json!({"uuid": "abc", "displayname": "Steve"}));
    assert!(p.raw_stats.is_empty());
    assert!(p.stats.is_empty());
    assert!(p.stats_for::<BedwarsStats>(Game::Bedwars).is_none());
}

#[test]
fn undecoded_games_stay_in_raw_stats() {
    let p = player(json!({
        "uuid": "abc",
        "stats": {"SkyWars": {"wins": 1}},
    }));
    assert!(p.stats.is_empty());
    assert_eq!(p.raw_stats["SkyWars"]["wins"], 1);
}

#[test]
fn unknown_game_follows_registry_policy() {
    let v = json!({"uuid": "abc", "stats": {"NEW_GAME": {}}});

    let strict = Player::from_json(v.clone(), &StatsRegistry::standard());
    assert!(matches!(strict, Err(Error::UnknownGame(_))));

    let lenient = StatsRegistry::standard().unknown_games(UnknownGames::Lenient);
    let p = Player::from_json(v, &lenient).unwrap();
    assert!(p.stats.is_empty());
    assert!(p.raw_stats.contains_key("NEW_GAME"));
}

#[test]
fn staff_rank_wins() {
    let rank = rank_of(json!({
        "rank": "ADMIN",
        "monthlyPackageRank": "SUPERSTAR",
        "newPackageRank": "MVP_PLUS",
    }));
    assert_eq!(rank.as_deref(), Some("ADMIN"));
}

#[test]
fn normal_rank_falls_through_to_monthly() {
    let rank = rank_of(json!({
        "rank": "NORMAL",
        "monthlyPackageRank": "SUPERSTAR",
        "newPackageRank": "MVP_PLUS",
    }));
    assert_eq!(rank.as_deref(), Some("SUPERSTAR"));
}

#[test]
fn null_or_none_monthly_falls_through_to_new_package() {
    let null = rank_of(json!({"monthlyPackageRank": null, "newPackageRank": "MVP_PLUS"}));
    assert_eq!(null.as_deref(), Some("MVP_PLUS"));

    let none = rank_of(json!({"monthlyPackageRank": "NONE", "newPackageRank": "VIP"}));
    assert_eq!(none.as_deref(), Some("VIP"));
}

#[test]
fn legacy_package_rank_is_last() {
    let rank = rank_of(json!({"newPackageRank": "NONE", "packageRank": "VIP_PLUS"}));
    assert_eq!(rank.as_deref(), Some("VIP_PLUS"));
}

#[test]
fn no_rank() {
    assert_eq!(rank_of(json!({})), None);
    assert_eq!(rank_of(json!({"rank": "NORMAL", "packageRank": "NONE"})), None);
}

#[test]
fn missing_uuid_is_an_error() {
    let err = Player::from_json(json!({"displayname": "Steve"}), &StatsRegistry::new());
    assert!(matches!(err, Err(Error::Json(_))));
}
