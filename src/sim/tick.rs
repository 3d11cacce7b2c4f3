//! Per-frame simulation tick
//!
//! Advances the boss, then the player, then every minion, then every bullet.
//! Later updates see the state earlier ones left this frame.

use glam::Vec2;

use super::projectile::Targets;
use super::state::{GamePhase, GameState};

/// Input state sampled for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer in canvas coordinates
    pub pointer: Vec2,
    /// Primary button held
    pub pointer_down: bool,
    /// W
    pub up: bool,
    /// S
    pub down: bool,
    /// A
    pub left: bool,
    /// D
    pub right: bool,
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    /// Record a movement key by name (`"w"`, `"A"`, ...).
    /// Returns `false` for keys that don't move the player.
    pub fn set_key(&mut self, key: &str, held: bool) -> bool {
        let flag = match key.to_ascii_uppercase().as_str() {
            "W" => &mut self.up,
            "S" => &mut self.down,
            "A" => &mut self.left,
            "D" => &mut self.right,
            _ => return false,
        };
        *flag = held;
        true
    }
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::Over(_) => {}
        }
    }

    // Don't tick if paused or the run is over
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time += dt;
    state.frame += 1;

    // Boss
    let player_pos = state.player.entity.position;
    let wave = match state.boss.as_mut() {
        Some(boss) => boss.update(
            dt,
            state.viewport,
            player_pos,
            &state.assets,
            &mut state.rng,
            &mut state.bullets,
        ),
        None => None,
    };
    if let Some(count) = wave {
        state.spawn_minions(count);
    }

    // Player
    state
        .player
        .update(input, dt, state.viewport, &mut state.bullets, &mut state.events);

    // Minions
    let player_pos = state.player.entity.position;
    for minion in state.minions.iter_mut().rev() {
        minion.update(dt, player_pos, &mut state.bullets);
    }

    // Bullets: spent ones are dropped in a single compaction pass
    let mut bullets = std::mem::take(&mut state.bullets);
    let mut outcome = None;
    {
        let mut targets = Targets {
            bounds: state.viewport,
            player: &mut state.player,
            boss: state.boss.as_mut(),
            minions: &mut state.minions,
            events: &mut state.events,
            outcome: &mut outcome,
        };
        bullets.retain_mut(|bullet| !bullet.update(dt, &mut targets));
    }
    state.bullets = bullets;

    if let Some(outcome) = outcome {
        state.finish(outcome);
    }
}
