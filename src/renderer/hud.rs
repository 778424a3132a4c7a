//! Score line and overlay prompt text

use crate::sim::{GameState, RunState};

pub const START_PROMPT: &str = "Click to Start";
pub const RESTART_PROMPT: &str = "Game Over - Click to Restart";

/// `Score: N`, with ` | Best: M` once a best exists
pub fn hud_text(state: &GameState) -> String {
    if state.best > 0 {
        format!("Score: {} | Best: {}", state.score, state.best)
    } else {
        format!("Score: {}", state.score)
    }
}

/// Prompt shown over the playfield, if any
pub fn overlay_message(state: &GameState) -> Option<&'static str> {
    match state.run_state {
        RunState::Idle => Some(START_PROMPT),
        RunState::Running => None,
        RunState::GameOver => Some(RESTART_PROMPT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetManifest;
    use crate::tuning::Tuning;

    #[test]
    fn test_hud_text() {
        let mut state = GameState::new(Tuning::default(), &AssetManifest::placeholders());
        state.score = 3;
        assert_eq!(hud_text(&state), "Score: 3");
        state.best = 9;
        assert_eq!(hud_text(&state), "Score: 3 | Best: 9");
    }

    #[test]
    fn test_overlay_follows_run_state() {
        let mut state = GameState::new(Tuning::default(), &AssetManifest::placeholders());
        assert_eq!(overlay_message(&state), Some(START_PROMPT));
        state.run_state = RunState::Running;
        assert_eq!(overlay_message(&state), None);
        state.run_state = RunState::GameOver;
        assert_eq!(overlay_message(&state), Some(RESTART_PROMPT));
    }
}
