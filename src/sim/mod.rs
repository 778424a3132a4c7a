//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, driven by the caller
//! - Injected RNG only
//! - Stable obstacle order (creation order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod game;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use game::Game;
pub use state::{
    CrashCause, Entity, GameEvent, GameState, MAX_PENDING_EVENTS, Obstacle, RunState,
};
pub use tick::{step, trigger_action};
