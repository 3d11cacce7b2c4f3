//! Graem Shooter - a top-down canvas shooter
//!
//! Core modules:
//! - `math`: 2D/3D vector helpers, line geometry, grid ray tracing
//! - `sim`: Per-frame simulation (player, boss, minions, projectiles)
//! - `renderer`: Drawing contract the simulation is presented through
//! - `assets`: Image metadata and the manifest of every asset key
//! - `hud`: HUD sink contract fed from simulation events
//! - `audio`: Sound cue keys (and the browser player)
//! - `settings`: Runtime settings parsed from JSON

pub mod assets;
pub mod audio;
pub mod hud;
pub mod math;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{AssetCatalog, AssetError, Image};
pub use settings::{Settings, SettingsError};

/// Fixed design parameters. Times are in seconds unless noted, distances in
/// canvas pixels.
pub mod consts {
    /// Largest elapsed time fed to a single tick (tab switches, debugger stalls)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Elapsed time assumed for the very first frame
    pub const FIRST_FRAME_DT: f32 = 1.0 / 60.0;

    /// Player
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_SPAWN_OFFSET_Y: f32 = 240.0;
    pub const PLAYER_MOVE_SPEED: f32 = 500.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    pub const CLIP_SIZE: i32 = 20;
    /// Minimum time between trigger pulls
    pub const SHOOT_DELAY: f32 = 0.1;
    /// Shoot timer value at spawn (first shot is immediately available)
    pub const INITIAL_SHOOT_TIMER: f32 = 0.2;
    /// Sprite animation cadence (30 frames per second)
    pub const ANIM_DELAY: f32 = 2.0 / 60.0;
    /// Shoot animation frame that returns the player to idle
    pub const SHOOT_RELEASE_FRAME: u32 = 2;
    /// Reload animation frame that refills the clip
    pub const RELOAD_DONE_FRAME: u32 = 14;

    /// Player bullet: per-frame displacement along the facing direction
    pub const PLAYER_BULLET_SPEED: f32 = 10.0;
    pub const PLAYER_BULLET_SIZE: (f32, f32) = (1.0, 10.0);
    pub const PLAYER_BULLET_DAMAGE: i32 = 1;

    /// Boss
    pub const BOSS_WIDTH: f32 = 200.0;
    pub const BOSS_TOP_MARGIN: f32 = 20.0;
    pub const BOSS_MAX_HEALTH: i32 = 100;
    /// Horizontal patrol displacement per frame
    pub const BOSS_PATROL_SPEED: f32 = 5.0;
    /// Distance from either side edge at which the patrol reverses
    pub const BOSS_PATROL_MARGIN: f32 = 100.0;
    pub const BOSS_SHOOT_DELAY: f32 = 3.0;
    pub const BOSS_SPAWN_DELAY: f32 = 10.0;
    /// Spawn waves draw a count in `0..BOSS_SPAWN_MAX`
    pub const BOSS_SPAWN_MAX: u32 = 10;
    pub const BOB_DELAY: f32 = 0.5;
    pub const BOB_AMOUNT: f32 = 1.0;
    /// Rolls above this fire a stocks-up (healing) shot (~34%)
    pub const STOCKS_UP_THRESHOLD: f32 = 0.66;

    /// Boss bullets
    pub const BOSS_BULLET_SIZE: f32 = 35.0;
    pub const BOSS_BULLET_SPEED: f32 = 3.0;
    pub const BOSS_BULLET_LIFESPAN: f32 = 5.0;
    pub const BOSS_BULLET_DAMAGE: i32 = 15;
    /// Stocks-up shots heal
    pub const BOSS_BULLET_HEAL: i32 = -5;

    /// Minions
    pub const MINION_SIZE: f32 = 40.0;
    pub const MINION_SHOOT_DELAY: f32 = 2.0;
    pub const MINION_SHEET_COLUMNS: u32 = 24;
    pub const MINION_SHEET_ROW_MIN: u32 = 5;
    pub const MINION_SHEET_ROW_MAX: u32 = 20;
    pub const INITIAL_MINIONS: usize = 10;
    /// Placement tries per spawn wave before giving up
    pub const MAX_SPAWN_ATTEMPTS: u32 = 50;

    /// Minion bullets
    pub const MINION_BULLET_SIZE: f32 = 10.0;
    pub const MINION_BULLET_SPEED: f32 = 3.0;
    pub const MINION_BULLET_DAMAGE: i32 = 1;
    /// Largest heading correction per frame (radians)
    pub const MINION_BULLET_MAX_TURN: f32 = 0.01;
    /// Heading error is divided by this before clamping
    pub const MINION_BULLET_TURN_DAMPING: f32 = 20.0;
}
