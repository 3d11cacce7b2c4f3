//! Game state and core simulation types
//!
//! Everything a run needs lives here: the actors, the live bullet and minion
//! collections, the seeded RNG and the events raised since the last drain.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::boss::Boss;
use super::entity::{Viewport, clamp_range};
use super::minion::Minion;
use super::player::Player;
use super::projectile::Projectile;
use crate::assets::AssetCatalog;
use crate::audio::SoundEffect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Paused,
    /// Run ended; no further ticks do anything
    Over(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Graem is down
    Won,
    /// The player is down
    Lost,
}

impl Outcome {
    /// End-of-game message shown to the player
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Won => "YOU WIN. WOOOO MY GOD WOWWW",
            Outcome::Lost => "YOU JUST LOST... TO GRAEM??? AHAHAHAHAHA",
        }
    }
}

/// Something the shell should react to (HUD, audio)
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// New player health, `0..=100`
    PlayerHealth(i32),
    /// New boss health (may go negative on the killing blow)
    BossHealth(i32),
    Ammo { current: i32, size: i32 },
    Sound(SoundEffect),
    MinionsSpawned { requested: usize, placed: usize },
    GameOver(Outcome),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub player: Player,
    pub boss: Option<Boss>,
    pub minions: Vec<Minion>,
    pub bullets: Vec<Projectile>,
    pub assets: AssetCatalog,
    /// Simulated seconds
    pub time: f32,
    /// Ticks advanced while playing
    pub frame: u64,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh run: player at the bottom, Graem at the top, first minion wave
    /// already placed
    pub fn new(seed: u64, viewport: Viewport, assets: AssetCatalog) -> Self {
        log::info!("starting game (seed {seed}, {}x{})", viewport.width, viewport.height);

        let player = Player::new(viewport, &assets);
        let boss = Boss::new(viewport, &assets);
        let events = vec![
            GameEvent::PlayerHealth(player.health),
            GameEvent::BossHealth(boss.health),
            GameEvent::Ammo {
                current: player.clip.current,
                size: player.clip.size,
            },
        ];

        let mut state = Self {
            seed,
            viewport,
            phase: GamePhase::Playing,
            player,
            boss: Some(boss),
            minions: Vec::new(),
            bullets: Vec::new(),
            assets,
            time: 0.0,
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
            events,
        };

        state.spawn_minions(INITIAL_MINIONS);
        state
    }

    /// Try to place `count` minions at random spots that overlap nothing.
    ///
    /// Gives up after `MAX_SPAWN_ATTEMPTS` tries in total, so a crowded
    /// field gets fewer minions than requested. Returns how many were placed.
    pub fn spawn_minions(&mut self, count: usize) -> usize {
        log::info!("spawning {count} minions");

        let Viewport { width, height } = self.viewport;
        let mut placed = 0;
        let mut attempts = 0;

        while placed < count && attempts < MAX_SPAWN_ATTEMPTS {
            attempts += 1;

            let col = self.rng.random_range(0..MINION_SHEET_COLUMNS);
            let row = self.rng.random_range(MINION_SHEET_ROW_MIN..MINION_SHEET_ROW_MAX);
            let x = clamp_range(self.rng.random::<f32>() * width, MINION_SIZE, width - MINION_SIZE);
            let y = clamp_range(self.rng.random::<f32>() * height, MINION_SIZE, height - MINION_SIZE);
            let candidate = Minion::new(Vec2::new(x, y), col, row, &self.assets);

            let blocked = candidate.entity.is_colliding(&self.player.entity)
                || self
                    .boss
                    .as_ref()
                    .is_some_and(|boss| candidate.entity.is_colliding(&boss.entity))
                || self
                    .minions
                    .iter()
                    .any(|other| candidate.entity.is_colliding(&other.entity));

            if !blocked {
                self.minions.push(candidate);
                placed += 1;
            }
        }

        if placed < count {
            log::info!("placed {placed} of {count} minions after {attempts} attempts");
        }
        self.events.push(GameEvent::MinionsSpawned {
            requested: count,
            placed,
        });
        placed
    }

    /// End the run once; later calls are ignored
    pub fn finish(&mut self, outcome: Outcome) {
        if self.is_stopped() {
            return;
        }
        log::info!("game over: {outcome:?}");
        self.phase = GamePhase::Over(outcome);
        self.events.push(GameEvent::GameOver(outcome));
    }

    /// Take every event raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self.phase, GamePhase::Over(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::Over(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Track a resized canvas; actors are clamped on their next move
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(seed: u64) -> GameState {
        GameState::new(seed, Viewport::new(800.0, 600.0), AssetCatalog::headless())
    }

    #[test]
    fn test_new_game() {
        let mut s = state(12345);
        assert_eq!(s.phase, GamePhase::Playing);
        assert!(s.boss.is_some());
        assert!(s.bullets.is_empty());
        assert!(s.minions.len() <= INITIAL_MINIONS);

        let events = s.drain_events();
        assert_eq!(events[0], GameEvent::PlayerHealth(100));
        assert_eq!(events[1], GameEvent::BossHealth(100));
        assert_eq!(events[2], GameEvent::Ammo { current: 20, size: 20 });
        assert!(matches!(
            events[3],
            GameEvent::MinionsSpawned { requested: 10, .. }
        ));
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn test_spawned_minions_do_not_overlap_anything() {
        let s = state(42);
        for (i, m) in s.minions.iter().enumerate() {
            let pos = m.entity.position;
            assert!((40.0..=760.0).contains(&pos.x) && (40.0..=560.0).contains(&pos.y));
            assert!(!m.entity.is_colliding(&s.player.entity));
            assert!(!m.entity.is_colliding(&s.boss.as_ref().unwrap().entity));
            for other in &s.minions[i + 1..] {
                assert!(!m.entity.is_colliding(&other.entity));
            }
        }
    }

    #[test]
    fn test_same_seed_same_minions() {
        let a = state(7);
        let b = state(7);
        let positions = |s: &GameState| s.minions.iter().map(|m| m.entity.position).collect::<Vec<_>>();
        assert_eq!(positions(&a), positions(&b));
    }

    #[test]
    fn test_spawn_attempts_are_capped() {
        let mut s = state(1);
        s.resize(Viewport::new(100.0, 100.0));
        s.minions.clear();
        s.minions.push(Minion::new(Vec2::new(50.0, 50.0), 0, 5, &s.assets));

        assert_eq!(s.spawn_minions(10), 0);
        assert_eq!(s.minions.len(), 1);
    }

    #[test]
    fn test_finish_only_once() {
        let mut s = state(1);
        s.drain_events();
        s.finish(Outcome::Lost);
        s.finish(Outcome::Won);
        assert_eq!(s.outcome(), Some(Outcome::Lost));
        assert!(s.is_stopped());
        assert_eq!(s.drain_events(), vec![GameEvent::GameOver(Outcome::Lost)]);
    }
}
