//! Rendering module
//!
//! Backend-agnostic: produces draw commands and HUD strings from a read-only
//! view of the game state.

pub mod hud;
pub mod scene;

pub use hud::{hud_text, overlay_message};
pub use scene::{DrawCmd, build_scene};
