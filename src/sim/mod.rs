//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Seeded RNG only
//! - Fixed update order (boss, player, minions, bullets)
//! - No rendering or platform dependencies

pub mod boss;
pub mod entity;
pub mod minion;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;

pub use boss::{Boss, Expression};
pub use entity::{Color, Entity, EntityDesc, Sprite, Viewport};
pub use minion::Minion;
pub use player::{Anim, Clip, Player, Weapon, WeaponState};
pub use projectile::{Projectile, ProjectileKind, Targets};
pub use state::{GameEvent, GamePhase, GameState, Outcome};
pub use tick::{TickInput, tick};
