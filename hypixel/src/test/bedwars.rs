use serde_json::{json, Map, Value};

use crate::{
    stats::bedwars::{BedwarsStats, Cosmetics, WinLossStats},
    Game, Stats,
};

fn bedwars(v: Value) -> BedwarsStats {
    let raw: Map<String, Value> = serde_json::from_value(v).unwrap();
    BedwarsStats::process_json(&raw).unwrap()
}

#[test]
fn empty_object_is_all_zero() {
    let stats = bedwars(json!({}));

    assert_eq!(stats.experience, 0);
    assert_eq!(stats.all_modes.kills.total, 0);
    assert_eq!(stats.solo.plays, 0);
    assert_eq!(stats.cosmetics, Cosmetics::default());
    assert_eq!(stats.all_modes.winloss.wlr(), None);
    assert_eq!(stats.game(), Game::Bedwars);
}

#[test]
fn modes_do_not_leak_into_each_other() {
    let stats = bedwars(json!({
        "wins_bedwars": 100,
        "eight_one_wins_bedwars": 1,
        "eight_two_wins_bedwars": 2,
        "four_three_wins_bedwars": 3,
        "four_four_wins_bedwars": 4,
        "two_four_wins_bedwars": 5,
    }));

    assert_eq!(stats.all_modes.winloss.wins, 100);
    assert_eq!(stats.solo.winloss.wins, 1);
    assert_eq!(stats.duos.winloss.wins, 2);
    assert_eq!(stats.threes.winloss.wins, 3);
    assert_eq!(stats.fours.winloss.wins, 4);
    assert_eq!(stats.teams.winloss.wins, 5);
}

#[test]
fn mode_with_no_keys_is_zero_even_if_others_are_set() {
    let stats = bedwars(json!({
        "eight_one_kills_bedwars": 7,
        "eight_one_games_played_bedwars": 3,
    }));

    assert_eq!(stats.solo.kills.total, 7);
    assert_eq!(stats.solo.plays, 3);
    assert_eq!(stats.duos.kills.total, 0);
    assert_eq!(stats.all_modes.kills.total, 0);
}

#[test]
fn kills_by_cause() {
    let stats = bedwars(json!({
        "kills_bedwars": 20,
        "magic_kills_bedwars": 1,
        "void_kills_bedwars": 2,
        "entity_attack_kills_bedwars": 3,
        "entity_explosion_kills_bedwars": 4,
        "fall_kills_bedwars": 5,
        "projectile_kills_bedwars": 6,
        "fire_tick_kills_bedwars": 7,
        "void_final_kills_bedwars": 9,
        "four_four_magic_deaths_bedwars": 11,
    }));

    let kills = stats.all_modes.kills;
    assert_eq!(kills.total, 20);
    assert_eq!(kills.magic, 1);
    assert_eq!(kills.void, 2);
    assert_eq!(kills.entity_attack, 3);
    assert_eq!(kills.entity_explosion, 4);
    assert_eq!(kills.fall, 5);
    assert_eq!(kills.projectile, 6);
    assert_eq!(kills.fire_tick, 7);

    assert_eq!(stats.all_modes.final_kills.void, 9);
    assert_eq!(stats.all_modes.final_kills.magic, 0);
    assert_eq!(stats.fours.deaths.magic, 11);
    assert_eq!(stats.all_modes.deaths.magic, 0);
}

#[test]
fn ratios() {
    let stats = bedwars(json!({
        "kills_bedwars": 30,
        "deaths_bedwars": 10,
        "final_kills_bedwars": 9,
        "final_deaths_bedwars": 0,
        "beds_broken_bedwars": 6,
        "beds_lost_bedwars": 4,
    }));

    assert_eq!(stats.all_modes.kdr(), Some(3.0));
    assert_eq!(stats.all_modes.fkdr(), None);
    assert_eq!(stats.all_modes.beds.bblr(), Some(1.5));

    let never_lost = WinLossStats { wins: 5, losses: 0 };
    assert_eq!(never_lost.wlr(), None);
}

#[test]
fn general_fields() {
    let stats = bedwars(json!({
        "Experience": 52_000,
        "coins": 1234,
        "Bedwars_openedChests": 10,
        "Bedwars_openedCommons": 7,
        "Bedwars_openedRares": 3,
        "activeKillEffect": "killeffect_rainbow",
        "activeProjectileTrail": "projectiletrail_hearts",
        "iron_resources_collected_bedwars": 500,
        "resources_collected_bedwars": 600,
        "two_four_emerald_resources_collected_bedwars": 8,
        "items_purchased_bedwars": 40,
        "permanent_items_purchased_bedwars": 12,
    }));

    assert_eq!(stats.experience, 52_000);
    assert_eq!(stats.coins, 1234);
    assert_eq!(stats.chests.total, 10);
    assert_eq!(stats.chests.common, 7);
    assert_eq!(stats.chests.rare, 3);
    assert_eq!(stats.cosmetics.kill_effect, "killeffect_rainbow");
    assert_eq!(stats.cosmetics.bed_destroy, "");
    assert_eq!(stats.cosmetics.projectile_trail, "projectiletrail_hearts");
    assert_eq!(stats.all_modes.resources.iron, 500);
    assert_eq!(stats.all_modes.resources.total, 600);
    assert_eq!(stats.teams.resources.emerald, 8);
    assert_eq!(stats.all_modes.purchases.total, 40);
    assert_eq!(stats.all_modes.purchases.permanent, 12);
}
