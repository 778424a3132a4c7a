//! Demo mode: decides when to flap so the game can play itself

use super::state::GameState;

/// How far above the gap's lower edge the entity's bottom is allowed to sink
pub const FLOOR_CLEARANCE: f32 = 12.0;

/// True when a flap now keeps the entity on course for the next gap.
///
/// Flaps only while falling and only when the bottom edge would sink past
/// the lower edge of the next uncleared gap (minus [`FLOOR_CLEARANCE`]) on
/// the next frame. With no obstacle ahead it holds the middle of the screen.
pub fn should_flap(state: &GameState) -> bool {
    if !state.is_running() {
        return false;
    }

    let tuning = &state.tuning;
    let entity = &state.entity;
    if entity.vy < 0.0 {
        return false;
    }

    let limit = match state.next_obstacle() {
        Some(obstacle) => obstacle.top + tuning.gap_height - FLOOR_CLEARANCE,
        None => (tuning.screen_height + tuning.gap_height) / 2.0,
    };

    entity.bottom() + entity.vy + tuning.gravity >= limit
}
