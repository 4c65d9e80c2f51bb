//! End-to-end shoot-out scenarios driven through the public session API.

use pk_core::config::{AimMode, ShootoutConfig};
use pk_core::engine::{
    ActionResult, AimSelection, Band, Column, GameEvent, IgnoreReason, Outcome, RoundPhase,
    ScriptedRolls, ShootoutSession, Zone,
};

const LEFT_TOP: Zone = Zone::new(Column::Left, Band::Top);

/// Roll that makes a uniform keeper pick `zone`.
fn keeper_roll(config: &ShootoutConfig, zone: Zone) -> f32 {
    let zones = config.layout.zones();
    let idx = zones.iter().position(|z| *z == zone).expect("zone in layout");
    (idx as f32 + 0.5) / zones.len() as f32
}

fn scripted(config: ShootoutConfig, rolls: Vec<f32>) -> ShootoutSession<ScriptedRolls> {
    ShootoutSession::with_rolls(config, ScriptedRolls::new(rolls)).expect("valid config")
}

#[test]
fn power_shot_breaks_exact_match_save() {
    let mut config = ShootoutConfig::six_zone();
    config.resolution.power_enabled = true;
    config.oscillator.power_period_ms = 1000;
    let keeper = keeper_roll(&config, LEFT_TOP);
    let mut session = scripted(config, vec![keeper, 0.37]);

    assert!(session.handle_key("Digit1").is_applied());
    // triangle gauge reads 0.95 at 47.5% of its period
    session.advance(475);
    let power = session.power_gauge().unwrap();
    assert!(power > 0.9, "gauge at {power}");

    assert!(session.shoot().is_applied());
    session.finish_round();

    let score = session.score();
    assert_eq!(session.history().latest().unwrap().outcome, Outcome::PowerGoal);
    assert_eq!(score.score, 1);
    assert_eq!(score.goals, 1);
    assert_eq!(score.power_goals, 1);
    assert_eq!(score.shots, 1);
}

#[test]
fn different_row_and_column_is_always_a_goal() {
    let config = ShootoutConfig::nine_zone();
    let keeper = keeper_roll(&config, LEFT_TOP);
    // a 0.0 roll would trigger any save roll, so it must go unused
    let mut session = scripted(config, vec![keeper, 0.0]);

    session.set_aim(AimSelection::Zone { zone: Zone::new(Column::Right, Band::Bottom) });
    session.shoot();
    session.finish_round();

    assert_eq!(session.history().latest().unwrap().outcome, Outcome::Goal);
    assert_eq!(session.score().goals, 1);
    assert_eq!(session.rolls_mut().remaining(), 1);
}

#[test]
fn off_frame_continuous_aim_is_a_miss() {
    let mut config = ShootoutConfig::six_zone();
    config.aim_mode = AimMode::Discrete;
    let mut session = scripted(config, vec![0.5]);

    assert!(session.set_aim(AimSelection::Continuous { x: 1.2, y: 0.4 }).is_applied());
    session.shoot();
    session.finish_round();

    let score = session.score();
    assert_eq!(session.history().latest().unwrap().outcome, Outcome::Miss);
    assert_eq!(session.history().latest().unwrap().zone, None);
    assert_eq!(score.score, -1);
    assert_eq!(score.shots, 1);
    assert_eq!(score.saves, 0);
    assert_eq!(score.misses, 1);
}

#[test]
fn oscillating_reticle_can_miss() {
    let config = ShootoutConfig::power_shot();
    let mut session = ShootoutSession::new(config, 17).unwrap();

    // walk the clock until the reticle is off frame
    let mut waited = 0;
    while session.reticle().map(|(x, y)| (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y)).unwrap()
    {
        session.advance(5);
        waited += 5;
        assert!(waited < 10_000, "reticle never left the frame");
    }

    session.shoot();
    session.finish_round();
    assert_eq!(session.score().misses, 1);
}

#[test]
fn five_saves_lose_the_shootout() {
    let config = ShootoutConfig::six_zone();
    let keeper = keeper_roll(&config, config.layout.default_zone());
    let mut session = scripted(config, vec![keeper; 5]);

    for _ in 0..5 {
        assert!(session.shoot().is_applied());
        session.finish_round();
    }

    assert_eq!(session.score().score, -5);
    assert_eq!(session.phase(), RoundPhase::GameOver);
    assert_eq!(session.shoot(), ActionResult::Ignored(IgnoreReason::GameOver));
    assert_eq!(session.handle_key("ArrowLeft"), ActionResult::Ignored(IgnoreReason::GameOver));
    assert_eq!(session.score().shots, 5);
    assert!(session.pending_effects().is_empty());
}

#[test]
fn five_goals_win_the_shootout() {
    let config = ShootoutConfig::nine_zone();
    let keeper = keeper_roll(&config, LEFT_TOP);
    let mut session = scripted(config, vec![keeper; 5]);
    session.handle_key("Digit9");

    for _ in 0..5 {
        session.shoot();
        session.finish_round();
    }

    assert_eq!(session.score().goals, 5);
    assert_eq!(session.phase(), RoundPhase::GameOver);
    assert_eq!(session.status(), "You win the shoot-out!");
}

#[test]
fn reset_from_game_over_clears_everything() {
    let config = ShootoutConfig::six_zone();
    let keeper = keeper_roll(&config, config.layout.default_zone());
    let mut session = scripted(config, vec![keeper; 5]);
    for _ in 0..5 {
        session.shoot();
        session.on_resolution_complete();
    }
    assert_eq!(session.phase(), RoundPhase::GameOver);
    session.drain_events();

    assert!(session.handle_key("KeyR").is_applied());
    assert_eq!(session.phase(), RoundPhase::Idle);
    assert_eq!(session.score().shots, 0);
    assert_eq!(session.score().score, 0);
    assert!(session.history().is_empty());
    assert_eq!(session.aim(), AimSelection::Zone { zone: Zone::new(Column::Center, Band::Bottom) });
    assert_eq!(session.status(), "Score reset. Aim and shoot!");
    assert!(session.drain_events().contains(&GameEvent::ScoreReset));

    assert!(session.shoot().is_applied());
}

#[test]
fn classic_round_trip_emits_render_events() {
    let mut session = ShootoutSession::new(ShootoutConfig::classic(), 2024).unwrap();
    session.handle_key("ArrowRight");
    session.handle_key("ArrowUp");
    assert_eq!(session.aim_label(), "Right / High");
    session.drain_events();

    session.shoot();
    session.finish_round();

    let events = session.drain_events();
    let target = events.iter().find_map(|e| match e {
        GameEvent::ShotTaken { target, .. } => Some(*target),
        _ => None,
    });
    assert_eq!(target, Some((130.0, -70.0)));

    let dive = events.iter().find_map(|e| match e {
        GameEvent::KeeperDived { offset_x, at_ms, .. } => Some((*offset_x, *at_ms)),
        _ => None,
    });
    let (offset_x, at_ms) = dive.expect("keeper dive event");
    assert!([-140.0, 0.0, 140.0].contains(&offset_x));
    assert_eq!(at_ms, 0);

    let resolved_at = events.iter().find_map(|e| match e {
        GameEvent::ShotResolved { at_ms, .. } => Some(*at_ms),
        _ => None,
    });
    assert_eq!(resolved_at, Some(500));
    assert_eq!(session.clock_ms(), 1100);
}

#[test]
fn seeded_sessions_are_reproducible() {
    let play = |seed: u64| {
        let mut session = ShootoutSession::new(ShootoutConfig::classic(), seed).unwrap();
        let keys = ["ArrowLeft", "Space", "ArrowRight", "Space", "ArrowRight", "Space"];
        for key in keys {
            session.handle_key(key);
            session.finish_round();
        }
        (*session.score(), session.history().to_vec())
    };

    assert_eq!(play(77), play(77));
}
