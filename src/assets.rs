//! Asset store contract
//!
//! The simulation never loads anything. The shell resolves every key in
//! [`manifest`] and records the decoded image dimensions in an
//! [`AssetCatalog`]; entities only carry keys and source rectangles.

use std::collections::HashMap;

use thiserror::Error;

use crate::audio::SoundEffect;
use crate::sim::player::{Anim, FEET_ANIMS, Weapon, feet_sprite_key, weapon_sprite_key};

/// Image keys referenced directly by the simulation
pub mod keys {
    pub const GRAEM_SAD: &str = "img/graem_sad.png";
    pub const GRAEM_HAPPY: &str = "img/graem_happy.png";
    /// 40x40 tiles, columns x rows
    pub const MINION_SHEET: &str = "img/rotmg.png";
    pub const BOSS_SHOT_UP: &str = "img/up.png";
    pub const BOSS_SHOT_DOWN: &str = "img/down.png";
}

/// Side length used when an image's real dimensions are unknown
pub const FALLBACK_IMAGE_SIZE: f32 = 256.0;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load image `{key}`: {reason}")]
    Image { key: String, reason: String },
    #[error("failed to load sound `{key}`: {reason}")]
    Sound { key: String, reason: String },
}

/// Resolved image metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub key: String,
    pub width: f32,
    pub height: f32,
}

impl Image {
    pub fn new(key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
        }
    }

    /// Height for a given width, keeping the aspect ratio
    pub fn height_for_width(&self, width: f32) -> f32 {
        if self.width == 0.0 {
            return width;
        }
        width * self.height / self.width
    }
}

/// Loaded image metadata by key
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    images: HashMap<String, Image>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog for runs without a browser: every manifest image is a
    /// [`FALLBACK_IMAGE_SIZE`] square
    pub fn headless() -> Self {
        let mut catalog = Self::new();
        for key in manifest().images {
            catalog.insert(Image::new(key, FALLBACK_IMAGE_SIZE, FALLBACK_IMAGE_SIZE));
        }
        catalog
    }

    pub fn insert(&mut self, image: Image) {
        self.images.insert(image.key.clone(), image);
    }

    pub fn image(&self, key: &str) -> Option<Image> {
        self.images.get(key).cloned()
    }

    /// The named image, or a fallback square when it was never loaded
    pub fn image_or_square(&self, key: &str) -> Image {
        self.image(key).unwrap_or_else(|| {
            log::warn!("image `{key}` missing from catalog, using {FALLBACK_IMAGE_SIZE}px square");
            Image::new(key, FALLBACK_IMAGE_SIZE, FALLBACK_IMAGE_SIZE)
        })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Every asset key the game needs, in load order
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    pub images: Vec<String>,
    pub sounds: Vec<&'static str>,
}

pub fn manifest() -> Manifest {
    let mut images: Vec<String> = [
        keys::GRAEM_SAD,
        keys::GRAEM_HAPPY,
        keys::MINION_SHEET,
        keys::BOSS_SHOT_UP,
        keys::BOSS_SHOT_DOWN,
    ]
    .into_iter()
    .map(String::from)
    .collect();

    for weapon in Weapon::ALL {
        for anim in Anim::ALL {
            for frame in 0..weapon.frame_count(anim) {
                images.push(weapon_sprite_key(weapon, anim, frame));
            }
        }
    }
    for (anim, count) in FEET_ANIMS {
        for frame in 0..count {
            images.push(feet_sprite_key(anim, frame));
        }
    }

    Manifest {
        images,
        sounds: vec![SoundEffect::Shoot.key(), SoundEffect::Reload.key()],
    }
}
