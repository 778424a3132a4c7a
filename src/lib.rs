//! Flappy - A flap-through-the-gates arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, run state)
//! - `renderer`: Platform-independent scene description for a drawing backend
//! - `assets`: Startup asset gate and optional sprite metadata
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod error;
pub mod renderer;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use assets::{AssetGate, AssetKind, AssetManifest, ImageSize};
pub use error::{Error, Result};
pub use sim::{Game, GameEvent, GameState, RunState};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Playfield dimensions in pixels
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Floor line sits this far above the bottom of the screen
    pub const FLOOR_MARGIN: f32 = 10.0;

    /// Entity defaults
    pub const ENTITY_X: f32 = 80.0;
    pub const ENTITY_WIDTH: f32 = 34.0;
    pub const ENTITY_HEIGHT: f32 = 24.0;

    /// Sprite-derived entity size is clamped to these ranges
    pub const ENTITY_MIN_WIDTH: f32 = 24.0;
    pub const ENTITY_MAX_WIDTH: f32 = 48.0;
    pub const ENTITY_MIN_HEIGHT: f32 = 18.0;
    pub const ENTITY_MAX_HEIGHT: f32 = 36.0;

    /// Downward acceleration (pixels/frame²)
    pub const GRAVITY: f32 = 0.55;
    /// Velocity set by a flap (negative is up)
    pub const JUMP_IMPULSE: f32 = -9.0;

    /// Visual tilt in degrees per unit of vertical velocity
    pub const ROTATION_SCALE: f32 = 3.0;
    pub const MIN_ROTATION: f32 = -25.0;
    pub const MAX_ROTATION: f32 = 90.0;

    /// Obstacle defaults
    pub const GAP_HEIGHT: f32 = 150.0;
    pub const OBSTACLE_WIDTH: f32 = 52.0;
    /// Horizontal scroll (pixels/frame)
    pub const OBSTACLE_SPEED: f32 = 2.2;
    /// Frames between spawns
    pub const SPAWN_INTERVAL: u64 = 90;
    /// Obstacles spawn this far right of the visible area
    pub const SPAWN_OFFSET: f32 = 10.0;
    /// Gap may not start closer than this to the top or end closer to the bottom
    pub const MARGIN_TOP: f32 = 80.0;
    pub const MARGIN_BOTTOM: f32 = 80.0;
    /// Obstacles are retired once their trailing edge is this far off-screen
    pub const DESPAWN_BUFFER: f32 = 50.0;
}
