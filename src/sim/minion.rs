//! Minions: stationary turrets cut from a sprite sheet

use glam::Vec2;

use super::entity::{Entity, EntityDesc};
use super::projectile::Projectile;
use crate::assets::{AssetCatalog, keys};
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct Minion {
    pub entity: Entity,
    pub shoot_timer: f32,
}

impl Minion {
    /// A minion at `position` showing sheet tile (`col`, `row`)
    pub fn new(position: Vec2, col: u32, row: u32, assets: &AssetCatalog) -> Self {
        Self {
            entity: Entity::new(EntityDesc {
                image: Some(assets.image_or_square(keys::MINION_SHEET)),
                position: Some(position),
                size: Some(Vec2::splat(MINION_SIZE)),
                sx: Some(col as f32 * MINION_SIZE),
                sy: Some(row as f32 * MINION_SIZE),
                sw: Some(MINION_SIZE),
                sh: Some(MINION_SIZE),
                ..Default::default()
            }),
            shoot_timer: 0.0,
        }
    }

    /// Fire at the player's current position every `MINION_SHOOT_DELAY`
    pub fn update(&mut self, dt: f32, player_pos: Vec2, bullets: &mut Vec<Projectile>) {
        self.shoot_timer += dt;
        if self.shoot_timer >= MINION_SHOOT_DELAY {
            self.shoot_timer = 0.0;
            let angle = self.entity.angle_to(player_pos);
            bullets.push(Projectile::minion(self.entity.position, angle));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_tile() {
        let m = Minion::new(Vec2::new(100.0, 100.0), 3, 7, &AssetCatalog::headless());
        let sprite = m.entity.sprite.unwrap();
        assert_eq!(sprite.key, keys::MINION_SHEET);
        assert_eq!((sprite.sx, sprite.sy, sprite.sw, sprite.sh), (120.0, 280.0, 40.0, 40.0));
        assert_eq!(m.entity.radius, 20.0);
    }

    #[test]
    fn test_fires_every_two_seconds_at_player() {
        let mut m = Minion::new(Vec2::new(100.0, 100.0), 0, 5, &AssetCatalog::headless());
        let mut bullets = Vec::new();
        let player = Vec2::new(200.0, 100.0);

        m.update(1.5, player, &mut bullets);
        assert!(bullets.is_empty());
        m.update(0.5, player, &mut bullets);
        assert_eq!(bullets.len(), 1);
        // Due right: a quarter turn from "up"
        assert!((bullets[0].entity.angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(bullets[0].entity.position, m.entity.position);

        m.update(1.9, player, &mut bullets);
        assert_eq!(bullets.len(), 1);
    }
}
