//! Data-driven game balance
//!
//! Every gameplay constant can be overridden from JSON. Missing fields fall
//! back to the defaults in [`crate::consts`], so a partial file like
//! `{"gravity": 0.4}` is valid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Gameplay constants for one simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Distance of the floor line above the bottom edge
    pub floor_margin: f32,

    // === Entity ===
    pub entity_x: f32,
    /// Collision size used when no sprite dimensions are available
    pub entity_width: f32,
    pub entity_height: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub rotation_scale: f32,
    pub min_rotation: f32,
    pub max_rotation: f32,

    // === Obstacles ===
    pub gap_height: f32,
    pub obstacle_width: f32,
    pub obstacle_speed: f32,
    /// Frames between spawns
    pub spawn_interval: u64,
    pub spawn_offset: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub despawn_buffer: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            floor_margin: FLOOR_MARGIN,

            entity_x: ENTITY_X,
            entity_width: ENTITY_WIDTH,
            entity_height: ENTITY_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            rotation_scale: ROTATION_SCALE,
            min_rotation: MIN_ROTATION,
            max_rotation: MAX_ROTATION,

            gap_height: GAP_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval: SPAWN_INTERVAL,
            spawn_offset: SPAWN_OFFSET,
            margin_top: MARGIN_TOP,
            margin_bottom: MARGIN_BOTTOM,
            despawn_buffer: DESPAWN_BUFFER,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Y coordinate of the floor line
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.screen_height - self.floor_margin
    }

    /// X coordinate new obstacles appear at
    #[inline]
    pub fn spawn_x(&self) -> f32 {
        self.screen_width + self.spawn_offset
    }

    /// Inclusive integer range the gap's top edge is drawn from.
    ///
    /// Rounded inward so every value keeps both margins even when they are
    /// fractional.
    pub fn gap_top_range(&self) -> (i32, i32) {
        let min = self.margin_top.ceil() as i32;
        let max = (self.screen_height - self.margin_bottom - self.gap_height).floor() as i32;
        (min, max)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let floats = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("floor_margin", self.floor_margin),
            ("entity_x", self.entity_x),
            ("entity_width", self.entity_width),
            ("entity_height", self.entity_height),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("rotation_scale", self.rotation_scale),
            ("min_rotation", self.min_rotation),
            ("max_rotation", self.max_rotation),
            ("gap_height", self.gap_height),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_speed", self.obstacle_speed),
            ("spawn_offset", self.spawn_offset),
            ("margin_top", self.margin_top),
            ("margin_bottom", self.margin_bottom),
            ("despawn_buffer", self.despawn_buffer),
        ];
        if let Some((name, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidTuning(format!("{name} must be finite")));
        }

        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return Err(Error::InvalidTuning("screen size must be > 0".into()));
        }
        if self.entity_width <= 0.0 || self.entity_height <= 0.0 {
            return Err(Error::InvalidTuning("entity size must be > 0".into()));
        }
        if self.spawn_interval == 0 {
            return Err(Error::InvalidTuning("spawn_interval must be > 0".into()));
        }
        if self.jump_impulse >= 0.0 {
            return Err(Error::InvalidTuning(
                "jump_impulse must be negative (upward)".into(),
            ));
        }
        if self.obstacle_speed <= 0.0 || self.obstacle_width <= 0.0 {
            return Err(Error::InvalidTuning(
                "obstacle_speed and obstacle_width must be > 0".into(),
            ));
        }
        if self.gap_height <= 0.0 {
            return Err(Error::InvalidTuning("gap_height must be > 0".into()));
        }
        if self.min_rotation > self.max_rotation {
            return Err(Error::InvalidTuning(
                "min_rotation must not exceed max_rotation".into(),
            ));
        }
        let (min, max) = self.gap_top_range();
        if min > max {
            return Err(Error::InvalidTuning(format!(
                "gap does not fit: top range [{min}, {max}] is empty"
            )));
        }
        Ok(())
    }
}
