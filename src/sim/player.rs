//! The player actor
//!
//! Pointer aiming, WASD movement, sprite animation and the
//! shoot/reload cycle.

use glam::Vec2;

use super::entity::{Entity, EntityDesc, Viewport, clamp_range};
use super::projectile::Projectile;
use super::state::GameEvent;
use super::tick::TickInput;
use crate::assets::AssetCatalog;
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::math::vec;

/// Carried weapon; selects the sprite set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weapon {
    Flashlight,
    Handgun,
    Knife,
    Rifle,
    Shotgun,
}

impl Weapon {
    pub const ALL: [Weapon; 5] = [
        Weapon::Flashlight,
        Weapon::Handgun,
        Weapon::Knife,
        Weapon::Rifle,
        Weapon::Shotgun,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weapon::Flashlight => "flashlight",
            Weapon::Handgun => "handgun",
            Weapon::Knife => "knife",
            Weapon::Rifle => "rifle",
            Weapon::Shotgun => "shotgun",
        }
    }

    /// Frames in `anim` for this weapon; 0 when the weapon lacks it
    pub fn frame_count(&self, anim: Anim) -> u32 {
        match (self, anim) {
            (_, Anim::Idle | Anim::Move) => 20,
            (_, Anim::MeleeAttack) => 15,
            (Weapon::Handgun, Anim::Reload) => 15,
            (Weapon::Rifle | Weapon::Shotgun, Anim::Reload) => 20,
            (Weapon::Handgun | Weapon::Rifle | Weapon::Shotgun, Anim::Shoot) => 3,
            (Weapon::Flashlight | Weapon::Knife, Anim::Reload | Anim::Shoot) => 0,
        }
    }

    pub fn has(&self, anim: Anim) -> bool {
        self.frame_count(anim) > 0
    }
}

/// Upper-body animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anim {
    Idle,
    MeleeAttack,
    Move,
    Reload,
    Shoot,
}

impl Anim {
    pub const ALL: [Anim; 5] = [Anim::Idle, Anim::MeleeAttack, Anim::Move, Anim::Reload, Anim::Shoot];

    pub fn name(&self) -> &'static str {
        match self {
            Anim::Idle => "idle",
            Anim::MeleeAttack => "meleeattack",
            Anim::Move => "move",
            Anim::Reload => "reload",
            Anim::Shoot => "shoot",
        }
    }
}

/// Feet layer animations and their frame counts
pub const FEET_ANIMS: [(&str, u32); 2] = [("idle", 1), ("run", 20)];

pub fn weapon_sprite_key(weapon: Weapon, anim: Anim, frame: u32) -> String {
    let (w, a) = (weapon.name(), anim.name());
    format!("img/tds/{w}/{a}/survivor-{a}_{w}_{frame}.png")
}

pub fn feet_sprite_key(anim: &str, frame: u32) -> String {
    format!("img/tds/feet/{anim}/survivor-{anim}_{frame}.png")
}

/// Rounds loaded vs. capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clip {
    pub current: i32,
    pub size: i32,
}

impl Clip {
    pub fn full(size: i32) -> Self {
        Self { current: size, size }
    }

    /// Set the loaded count, clamped into `[0, size]`
    pub fn set(&mut self, amount: i32) {
        self.current = amount.clamp(0, self.size.max(0));
    }

    pub fn is_empty(&self) -> bool {
        self.current < 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponState {
    Idle,
    /// Waiting for the shoot animation to pass its release frame
    Shooting,
    /// Waiting for the reload animation to finish
    Reloading,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub entity: Entity,
    /// `[0, PLAYER_MAX_HEALTH]`
    pub health: i32,
    pub clip: Clip,
    pub weapon: Weapon,
    pub animation: Anim,
    /// `None` right after switching animation, until the next animation tick
    pub frame: Option<u32>,
    pub anim_tick: f32,
    pub shoot_timer: f32,
    pub state: WeaponState,
    /// `1 - health / 100`
    pub motion_blur: f32,
}

impl Player {
    /// Handgun at idle, centered near the bottom of the playfield
    pub fn new(bounds: Viewport, assets: &AssetCatalog) -> Self {
        let weapon = Weapon::Handgun;
        let animation = Anim::Idle;
        let image = assets.image_or_square(&weapon_sprite_key(weapon, animation, 0));
        let size = Vec2::new(PLAYER_WIDTH, image.height_for_width(PLAYER_WIDTH));

        Self {
            entity: Entity::new(EntityDesc {
                image: Some(image),
                size: Some(size),
                position: Some(Vec2::new(
                    bounds.width / 2.0,
                    bounds.height - PLAYER_SPAWN_OFFSET_Y,
                )),
                ..Default::default()
            }),
            health: PLAYER_MAX_HEALTH,
            clip: Clip::full(CLIP_SIZE),
            weapon,
            animation,
            frame: Some(0),
            anim_tick: 0.0,
            shoot_timer: INITIAL_SHOOT_TIMER,
            state: WeaponState::Idle,
            motion_blur: 0.0,
        }
    }

    /// One frame: aim, move, animate, then run the shoot/reload cycle
    pub fn update(
        &mut self,
        input: &TickInput,
        dt: f32,
        bounds: Viewport,
        bullets: &mut Vec<Projectile>,
        events: &mut Vec<GameEvent>,
    ) {
        self.entity.look_at(input.pointer);
        self.walk(input, dt, bounds);
        self.animate(dt);

        self.shoot_timer += dt;
        match self.state {
            WeaponState::Reloading => {
                if self.frame == Some(RELOAD_DONE_FRAME) {
                    self.finish_reload(events);
                }
            }
            WeaponState::Shooting => {
                if self.frame == Some(SHOOT_RELEASE_FRAME) {
                    self.state = WeaponState::Idle;
                    self.switch_animation(Anim::Idle);
                    self.shoot_timer = 0.0;
                }
            }
            WeaponState::Idle => {
                if input.pointer_down && self.shoot_timer > SHOOT_DELAY {
                    self.fire(bullets, events);
                }
            }
        }
    }

    fn walk(&mut self, input: &TickInput, dt: f32, bounds: Viewport) {
        let mut dir = Vec2::ZERO;
        // Later keys win when both directions of an axis are held
        if input.up {
            dir.y = -1.0;
        }
        if input.down {
            dir.y = 1.0;
        }
        if input.left {
            dir.x = -1.0;
        }
        if input.right {
            dir.x = 1.0;
        }

        let velocity = vec::scale(vec::unit(dir), PLAYER_MOVE_SPEED * dt);
        self.entity.velocity = velocity;

        let size = self.entity.size;
        let pos = self.entity.position + velocity;
        self.entity.position = Vec2::new(
            clamp_range(pos.x, 0.0, bounds.width - size.x),
            clamp_range(pos.y, size.y / 2.0, bounds.height - size.y / 2.0),
        );
    }

    fn animate(&mut self, dt: f32) {
        self.anim_tick += dt;
        if self.anim_tick <= ANIM_DELAY {
            return;
        }
        self.anim_tick = 0.0;

        let count = self.weapon.frame_count(self.animation).max(1);
        let frame = self.frame.map_or(0, |f| f + 1) % count;
        self.frame = Some(frame);
        self.entity
            .set_sprite_key(&weapon_sprite_key(self.weapon, self.animation, frame));
    }

    fn fire(&mut self, bullets: &mut Vec<Projectile>, events: &mut Vec<GameEvent>) {
        self.set_ammo(self.clip.current - 1, events);
        self.state = WeaponState::Shooting;
        self.switch_animation(Anim::Shoot);

        events.push(GameEvent::Sound(SoundEffect::Shoot));
        bullets.push(Projectile::player(self.entity.position, self.entity.angle));

        if self.clip.is_empty() {
            self.state = WeaponState::Reloading;
            events.push(GameEvent::Sound(SoundEffect::Reload));
            self.switch_animation(Anim::Reload);
        }
    }

    fn finish_reload(&mut self, events: &mut Vec<GameEvent>) {
        self.set_ammo(self.clip.size, events);
        self.state = WeaponState::Idle;
        self.switch_animation(Anim::Idle);
        self.shoot_timer = 0.0;
    }

    /// Set the loaded rounds (clamped) and report the new count
    pub fn set_ammo(&mut self, amount: i32, events: &mut Vec<GameEvent>) {
        self.clip.set(amount);
        events.push(GameEvent::Ammo {
            current: self.clip.current,
            size: self.clip.size,
        });
    }

    /// Apply damage (negative heals). Returns `true` when this hit was fatal.
    pub fn hurt(&mut self, damage: i32, events: &mut Vec<GameEvent>) -> bool {
        if !self.is_alive() {
            return false;
        }
        log::debug!("player hurt ({damage})");

        self.health = (self.health - damage).clamp(0, PLAYER_MAX_HEALTH);
        self.motion_blur = 1.0 - self.health as f32 / PLAYER_MAX_HEALTH as f32;
        events.push(GameEvent::PlayerHealth(self.health));

        !self.is_alive()
    }

    /// Switch animation, falling back to idle when the weapon lacks it.
    /// The frame restarts on the next animation tick.
    pub fn switch_animation(&mut self, anim: Anim) {
        self.animation = if self.weapon.has(anim) { anim } else { Anim::Idle };
        self.frame = None;
    }

    pub fn switch_weapon(&mut self, weapon: Weapon) {
        self.weapon = weapon;
        self.switch_animation(self.animation);
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}
