//! Projectiles
//!
//! One type for every shot, tagged by who fired it. The tag selects the
//! per-frame steering and which targets the shot can hit.

use glam::Vec2;

use super::boss::Boss;
use super::entity::{Color, Entity, EntityDesc, Viewport};
use super::minion::Minion;
use super::player::Player;
use super::state::{GameEvent, Outcome};
use crate::assets::{AssetCatalog, keys};
use crate::consts::*;

/// Residue left by summing fractional frame times
const LIFE_SPAN_EPSILON: f32 = 1e-4;

/// Who fired a projectile, plus any owner-specific state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectileKind {
    /// Hits the boss or any minion
    Player,
    /// Hits the player; steers gently toward them
    Minion,
    /// Hits the player; expires after `life_span` seconds.
    /// A `stocks_up` shot heals and keeps facing the player.
    Boss { stocks_up: bool, life_span: f32 },
}

/// Everything a projectile may hit during its update
pub struct Targets<'a> {
    pub bounds: Viewport,
    pub player: &'a mut Player,
    pub boss: Option<&'a mut Boss>,
    pub minions: &'a mut Vec<Minion>,
    pub events: &'a mut Vec<GameEvent>,
    /// First terminal outcome reached this frame
    pub outcome: &'a mut Option<Outcome>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub entity: Entity,
    /// Health removed from whatever it hits (negative heals)
    pub damage: i32,
    pub kind: ProjectileKind,
}

impl Projectile {
    /// Player tracer round fired from `position` along `angle`
    pub fn player(position: Vec2, angle: f32) -> Self {
        let (w, h) = PLAYER_BULLET_SIZE;
        Self {
            entity: Entity::new(EntityDesc {
                position: Some(position),
                angle: Some(angle),
                velocity: Some(Vec2::new(0.0, -PLAYER_BULLET_SPEED)),
                size: Some(Vec2::new(w, h)),
                color: Some(Color::AMBER),
                ..Default::default()
            }),
            damage: PLAYER_BULLET_DAMAGE,
            kind: ProjectileKind::Player,
        }
    }

    pub fn minion(position: Vec2, angle: f32) -> Self {
        Self {
            entity: Entity::new(EntityDesc {
                position: Some(position),
                angle: Some(angle),
                velocity: Some(Vec2::new(0.0, -MINION_BULLET_SPEED)),
                size: Some(Vec2::splat(MINION_BULLET_SIZE)),
                color: Some(Color::RED),
                ..Default::default()
            }),
            damage: MINION_BULLET_DAMAGE,
            kind: ProjectileKind::Minion,
        }
    }

    /// Boss shot; `stocks_up` shots heal instead of hurting
    pub fn boss(position: Vec2, angle: f32, stocks_up: bool, assets: &AssetCatalog) -> Self {
        let key = if stocks_up { keys::BOSS_SHOT_UP } else { keys::BOSS_SHOT_DOWN };
        Self {
            entity: Entity::new(EntityDesc {
                image: assets.image(key),
                position: Some(position),
                angle: Some(angle),
                velocity: Some(Vec2::new(0.0, -BOSS_BULLET_SPEED)),
                size: Some(Vec2::splat(BOSS_BULLET_SIZE)),
                ..Default::default()
            }),
            damage: if stocks_up { BOSS_BULLET_HEAL } else { BOSS_BULLET_DAMAGE },
            kind: ProjectileKind::Boss {
                stocks_up,
                life_span: BOSS_BULLET_LIFESPAN,
            },
        }
    }

    /// Advance one frame; returns `true` once the projectile is spent
    /// (hit something, left the playfield, or outlived its life span)
    pub fn update(&mut self, dt: f32, targets: &mut Targets) -> bool {
        let player_pos = targets.player.entity.position;

        match &mut self.kind {
            ProjectileKind::Boss {
                stocks_up,
                life_span,
            } => {
                *life_span -= dt;
                if *life_span <= LIFE_SPAN_EPSILON {
                    return true;
                }
                if *stocks_up {
                    self.entity.look_at(player_pos);
                }
            }
            ProjectileKind::Minion => {
                let heading_error = self.entity.angle_to(player_pos) - self.entity.angle;
                self.entity.angle += (heading_error / MINION_BULLET_TURN_DAMPING)
                    .clamp(-MINION_BULLET_MAX_TURN, MINION_BULLET_MAX_TURN);
            }
            ProjectileKind::Player => {}
        }

        self.entity.translate();
        self.check_collisions(targets)
    }

    /// Owner-specific hits first, then the playfield bounds
    fn check_collisions(&self, targets: &mut Targets) -> bool {
        let hit = match self.kind {
            ProjectileKind::Player => self.hit_boss_or_minion(targets),
            ProjectileKind::Minion | ProjectileKind::Boss { .. } => self.hit_player(targets),
        };
        hit || self.out_of_bounds(targets.bounds)
    }

    fn hit_player(&self, targets: &mut Targets) -> bool {
        if !self.entity.is_colliding(&targets.player.entity) {
            return false;
        }
        if targets.player.hurt(self.damage, targets.events) {
            targets.outcome.get_or_insert(Outcome::Lost);
        }
        true
    }

    fn hit_boss_or_minion(&self, targets: &mut Targets) -> bool {
        if let Some(boss) = targets.boss.as_deref_mut() {
            if self.entity.is_colliding(&boss.entity) {
                if boss.hurt(self.damage, targets.events) {
                    targets.outcome.get_or_insert(Outcome::Won);
                }
                return true;
            }
        }

        // Newest minions are checked first; exactly one is removed per shot
        match targets
            .minions
            .iter()
            .rposition(|minion| self.entity.is_colliding(&minion.entity))
        {
            Some(index) => {
                targets.minions.remove(index);
                true
            }
            None => false,
        }
    }

    fn out_of_bounds(&self, bounds: Viewport) -> bool {
        let pos = self.entity.position;
        let size = self.entity.size;
        pos.x < 0.0 || pos.x + size.x > bounds.width || pos.y < 0.0 || pos.y + size.y > bounds.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Viewport = Viewport::new(800.0, 600.0);

    struct Scene {
        player: Player,
        boss: Boss,
        minions: Vec<Minion>,
        events: Vec<GameEvent>,
        outcome: Option<Outcome>,
    }

    impl Scene {
        fn new() -> Self {
            let assets = AssetCatalog::headless();
            let mut player = Player::new(BOUNDS, &assets);
            player.entity.position = Vec2::new(400.0, 500.0);
            let mut boss = Boss::new(BOUNDS, &assets);
            boss.entity.position = Vec2::new(400.0, 80.0);
            Self {
                player,
                boss,
                minions: Vec::new(),
                events: Vec::new(),
                outcome: None,
            }
        }

        fn update(&mut self, projectile: &mut Projectile, dt: f32) -> bool {
            let mut targets = Targets {
                bounds: BOUNDS,
                player: &mut self.player,
                boss: Some(&mut self.boss),
                minions: &mut self.minions,
                events: &mut self.events,
                outcome: &mut self.outcome,
            };
            projectile.update(dt, &mut targets)
        }
    }

    fn stationary(mut projectile: Projectile, position: Vec2) -> Projectile {
        projectile.entity.position = position;
        projectile.entity.velocity = Vec2::ZERO;
        projectile
    }

    #[test]
    fn test_out_of_bounds_expires() {
        let mut scene = Scene::new();
        for position in [
            Vec2::new(-5.0, 300.0),
            Vec2::new(799.5, 300.0),
            Vec2::new(300.0, -1.0),
            Vec2::new(300.0, 595.0),
        ] {
            let mut p = stationary(Projectile::minion(position, 0.0), position);
            // Keep the steering from mattering
            p.kind = ProjectileKind::Player;
            assert!(scene.update(&mut p, 0.016), "expected expiry at {position:?}");
        }
    }

    #[test]
    fn test_in_bounds_miss_stays_alive() {
        let mut scene = Scene::new();
        let mut p = Projectile::player(Vec2::new(100.0, 300.0), 0.0);
        assert!(!scene.update(&mut p, 0.016));
        // Facing 0 means straight up the screen
        assert!((p.entity.position - Vec2::new(100.0, 290.0)).length() < 1e-4);
    }

    #[test]
    fn test_player_shot_hurts_boss() {
        let mut scene = Scene::new();
        let boss_pos = scene.boss.entity.position;
        let mut p = stationary(Projectile::player(boss_pos, 0.0), boss_pos);
        assert!(scene.update(&mut p, 0.016));
        assert_eq!(scene.boss.health, BOSS_MAX_HEALTH - PLAYER_BULLET_DAMAGE);
        assert!(scene.events.contains(&GameEvent::BossHealth(BOSS_MAX_HEALTH - 1)));
    }

    #[test]
    fn test_killing_blow_records_win() {
        let mut scene = Scene::new();
        scene.boss.health = 1;
        let boss_pos = scene.boss.entity.position;
        let mut p = stationary(Projectile::player(boss_pos, 0.0), boss_pos);
        assert!(scene.update(&mut p, 0.016));
        assert_eq!(scene.outcome, Some(Outcome::Won));
    }

    #[test]
    fn test_boss_shot_heals_player() {
        let mut scene = Scene::new();
        scene.player.health = 50;
        let pos = scene.player.entity.position;
        let assets = AssetCatalog::headless();
        let mut p = stationary(Projectile::boss(pos, 0.0, true, &assets), pos);
        assert_eq!(p.damage, -5);
        assert!(scene.update(&mut p, 0.016));
        assert_eq!(scene.player.health, 55);
    }

    #[test]
    fn test_boss_shot_lifespan() {
        let mut scene = Scene::new();
        let assets = AssetCatalog::headless();
        let start = Vec2::new(100.0, 300.0);
        let mut p = stationary(Projectile::boss(start, 0.0, false, &assets), start);

        for _ in 0..4 {
            assert!(!scene.update(&mut p, 1.0));
        }
        assert!(scene.update(&mut p, 1.0));
        assert_eq!(scene.player.health, PLAYER_MAX_HEALTH);
    }

    #[test]
    fn test_boss_shot_lifespan_fractional_dt() {
        let assets = AssetCatalog::headless();
        let start = Vec2::new(100.0, 300.0);
        for (dt, ticks) in [(0.1_f32, 50), (0.05, 100), (0.25, 20), (1.0 / 60.0, 300)] {
            let mut scene = Scene::new();
            let mut p = stationary(Projectile::boss(start, 0.0, false, &assets), start);
            for tick in 1..ticks {
                assert!(!scene.update(&mut p, dt), "dt {dt}: expired early on tick {tick}");
            }
            assert!(scene.update(&mut p, dt), "dt {dt}: alive after tick {ticks}");
        }
    }

    #[test]
    fn test_stocks_up_shot_tracks_player() {
        let mut scene = Scene::new();
        let assets = AssetCatalog::headless();
        let start = Vec2::new(100.0, 300.0);
        let mut p = stationary(Projectile::boss(start, 0.0, true, &assets), start);
        assert!(!scene.update(&mut p, 0.1));
        let expected = p.entity.angle_to(scene.player.entity.position);
        assert!((p.entity.angle - expected).abs() < 1e-5);
    }

    #[test]
    fn test_minion_shot_turns_at_most_a_little() {
        let mut scene = Scene::new();
        // Fired facing straight up while the player is below
        let mut p = Projectile::minion(Vec2::new(400.0, 300.0), 0.0);
        assert!(!scene.update(&mut p, 0.016));
        assert!((p.entity.angle.abs() - MINION_BULLET_MAX_TURN).abs() < 1e-6);
    }

    #[test]
    fn test_minion_shot_hurts_player() {
        let mut scene = Scene::new();
        let pos = scene.player.entity.position;
        let mut p = stationary(Projectile::minion(pos, 0.0), pos);
        assert!(scene.update(&mut p, 0.016));
        assert_eq!(scene.player.health, PLAYER_MAX_HEALTH - MINION_BULLET_DAMAGE);
        assert_eq!(scene.outcome, None);
    }

    #[test]
    fn test_player_shot_ignores_player() {
        let mut scene = Scene::new();
        let pos = scene.player.entity.position;
        let mut p = stationary(Projectile::player(pos, 0.0), pos);
        assert!(!scene.update(&mut p, 0.016));
        assert_eq!(scene.player.health, PLAYER_MAX_HEALTH);
    }
}
