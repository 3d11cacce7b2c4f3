//! Whole-frame gameplay scenarios driven through `tick`

use glam::Vec2;

use graem_shooter::AssetCatalog;
use graem_shooter::sim::{
    GameEvent, GamePhase, GameState, Minion, Outcome, Projectile, TickInput, Viewport, tick,
};

const DT: f32 = 1.0 / 60.0;

/// A fresh 800x600 run with the opening minion wave removed
fn quiet_state() -> GameState {
    let mut state = GameState::new(2024, Viewport::new(800.0, 600.0), AssetCatalog::headless());
    state.minions.clear();
    state.drain_events();
    state
}

fn stationary(mut projectile: Projectile) -> Projectile {
    projectile.entity.velocity = Vec2::ZERO;
    projectile
}

#[test]
fn heal_shot_restores_health() {
    let mut state = quiet_state();
    state.player.health = 50;
    let at = state.player.entity.position;
    let shot = Projectile::boss(at, 0.0, true, &state.assets);
    assert_eq!(shot.damage, -5);
    state.bullets.push(stationary(shot));

    tick(&mut state, &TickInput::default(), DT);

    assert_eq!(state.player.health, 55);
    assert!(state.bullets.is_empty());
    assert!(state.drain_events().contains(&GameEvent::PlayerHealth(55)));
}

#[test]
fn tenth_minion_hit_is_lethal() {
    let mut state = quiet_state();
    state.player.health = 10;

    for hit in 1..=10 {
        let at = state.player.entity.position;
        state.bullets.push(stationary(Projectile::minion(at, 0.0)));
        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.player.health, 10 - hit);
        if hit < 10 {
            assert_eq!(state.phase, GamePhase::Playing, "ended early on hit {hit}");
        }
    }

    assert_eq!(state.phase, GamePhase::Over(Outcome::Lost));
    let game_overs: Vec<_> = state
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::GameOver(_)))
        .collect();
    assert_eq!(game_overs, vec![GameEvent::GameOver(Outcome::Lost)]);
}

#[test]
fn player_bullet_removes_exactly_the_minion_it_hits() {
    let mut state = quiet_state();
    for i in 0..5 {
        let at = Vec2::new(100.0 + 100.0 * i as f32, 300.0);
        state.minions.push(Minion::new(at, i, 5, &state.assets));
    }
    let target = state.minions[3].entity.position;
    state.bullets.push(stationary(Projectile::player(target, 0.0)));

    tick(&mut state, &TickInput::default(), DT);

    assert!(state.bullets.is_empty());
    let remaining: Vec<f32> = state.minions.iter().map(|m| m.entity.position.x).collect();
    assert_eq!(remaining, vec![100.0, 200.0, 300.0, 500.0]);
}

#[test]
fn crowded_field_spawns_fewer_and_terminates() {
    let mut state = GameState::new(9, Viewport::new(100.0, 100.0), AssetCatalog::headless());
    state.minions.clear();
    state.minions.push(Minion::new(Vec2::new(50.0, 50.0), 0, 5, &state.assets));
    state.drain_events();

    let placed = state.spawn_minions(10);

    assert!(placed < 10);
    assert_eq!(placed, 0);
    assert_eq!(state.minions.len(), 1);
    assert_eq!(
        state.drain_events(),
        vec![GameEvent::MinionsSpawned {
            requested: 10,
            placed: 0
        }]
    );
}

#[test]
fn same_seed_same_run() {
    let run = || {
        let mut state =
            GameState::new(77, Viewport::new(800.0, 600.0), AssetCatalog::headless());
        let input = TickInput {
            pointer: Vec2::new(400.0, 100.0),
            pointer_down: true,
            ..Default::default()
        };
        for _ in 0..1200 {
            tick(&mut state, &input, DT);
        }
        (
            state.player.health,
            state.boss.as_ref().map(|b| b.health),
            state.minions.len(),
            state.bullets.len(),
            state.phase,
        )
    };
    assert_eq!(run(), run());
}
