//! Graem, the boss
//!
//! Bobs, patrols side to side along the top of the playfield, fires a shot at
//! the player every few seconds and periodically calls in minion waves.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::entity::{Entity, EntityDesc, Viewport};
use super::projectile::Projectile;
use super::state::GameEvent;
use crate::assets::{AssetCatalog, keys};
use crate::consts::*;

/// Face shown by the boss sprite; changes whenever it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expression {
    Sad,
    Happy,
}

impl Expression {
    pub fn key(&self) -> &'static str {
        match self {
            Expression::Sad => keys::GRAEM_SAD,
            Expression::Happy => keys::GRAEM_HAPPY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Boss {
    pub entity: Entity,
    /// Starts at `BOSS_MAX_HEALTH`; never clamped
    pub health: i32,
    pub expression: Expression,
    pub bob_timer: f32,
    /// +1 grows, -1 shrinks
    pub bob_direction: f32,
    pub shoot_timer: f32,
    pub spawn_timer: f32,
}

impl Boss {
    pub fn new(bounds: Viewport, assets: &AssetCatalog) -> Self {
        let expression = Expression::Sad;
        let image = assets.image_or_square(expression.key());
        let height = image.height_for_width(BOSS_WIDTH);

        Self {
            entity: Entity::new(EntityDesc {
                image: Some(image),
                size: Some(Vec2::new(BOSS_WIDTH, height)),
                position: Some(Vec2::new(bounds.width / 2.0, BOSS_TOP_MARGIN + height / 2.0)),
                velocity: Some(Vec2::new(BOSS_PATROL_SPEED, 0.0)),
                ..Default::default()
            }),
            health: BOSS_MAX_HEALTH,
            expression,
            bob_timer: 0.0,
            bob_direction: 1.0,
            shoot_timer: 0.0,
            spawn_timer: 0.0,
        }
    }

    /// One frame of boss behavior. Returns the size of a minion wave when
    /// one is due; placing the minions is up to the caller.
    pub fn update(
        &mut self,
        dt: f32,
        bounds: Viewport,
        player_pos: Vec2,
        assets: &AssetCatalog,
        rng: &mut Pcg32,
        bullets: &mut Vec<Projectile>,
    ) -> Option<usize> {
        self.bob(dt);
        self.patrol(bounds);
        self.shoot(dt, player_pos, assets, rng, bullets);

        self.spawn_timer += dt;
        if self.spawn_timer >= BOSS_SPAWN_DELAY {
            self.spawn_timer = 0.0;
            return Some(rng.random_range(0..BOSS_SPAWN_MAX) as usize);
        }
        None
    }

    /// Pulse the size; the radius follows the width
    fn bob(&mut self, dt: f32) {
        self.bob_timer += dt;
        if self.bob_timer > BOB_DELAY {
            self.bob_timer = 0.0;
            self.bob_direction = -self.bob_direction;
        }

        let change = self.bob_direction * BOB_AMOUNT;
        self.entity.size += Vec2::splat(change);
        self.entity.radius = self.entity.size.x / 2.0;
    }

    fn patrol(&mut self, bounds: Viewport) {
        self.entity.advance(bounds);
        let x = self.entity.position.x;
        if x >= bounds.width - BOSS_PATROL_MARGIN || x <= BOSS_PATROL_MARGIN {
            self.entity.velocity.x = -self.entity.velocity.x;
        }
    }

    fn shoot(
        &mut self,
        dt: f32,
        player_pos: Vec2,
        assets: &AssetCatalog,
        rng: &mut Pcg32,
        bullets: &mut Vec<Projectile>,
    ) {
        self.shoot_timer += dt;
        if self.shoot_timer < BOSS_SHOOT_DELAY {
            return;
        }
        self.shoot_timer = 0.0;

        let stocks_up = rng.random::<f32>() > STOCKS_UP_THRESHOLD;
        self.expression = if stocks_up { Expression::Happy } else { Expression::Sad };
        self.entity.set_sprite_key(self.expression.key());

        let angle = self.entity.angle_to(player_pos);
        bullets.push(Projectile::boss(self.entity.position, angle, stocks_up, assets));
    }

    /// Apply damage while alive. Returns `true` when this hit was fatal.
    pub fn hurt(&mut self, damage: i32, events: &mut Vec<GameEvent>) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.health -= damage;
        log::debug!("boss hurt ({damage}), health {}", self.health);
        events.push(GameEvent::BossHealth(self.health));
        !self.is_alive()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}
