//! Per-frame simulation step
//!
//! Core game loop that advances simulation deterministically. A running step
//! always executes the same four stages in order: integrate, spawn, advance,
//! collide.

use rand::Rng;

use super::state::{CrashCause, Entity, GameEvent, GameState, Obstacle, RunState};
use crate::tuning::Tuning;

/// Advance the game state by one frame. No-op unless a run is active.
pub fn step<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    if state.run_state != RunState::Running {
        return;
    }

    state.frame += 1;

    integrate(&mut state.entity, &state.tuning);
    spawn_obstacles(state, rng);
    advance_obstacles(state);

    if let Some(cause) = detect_crash(state) {
        end_run(state, cause);
    }
}

/// The single discrete input: starts a run from Idle/GameOver, flaps while running
pub fn trigger_action(state: &mut GameState) {
    match state.run_state {
        RunState::Idle | RunState::GameOver => start_run(state),
        RunState::Running => {
            state.entity.vy = state.tuning.jump_impulse;
            state.push_event(GameEvent::Flapped);
        }
    }
}

fn start_run(state: &mut GameState) {
    let restart = state.run_state == RunState::GameOver;
    state.reset_run();
    state.run_state = RunState::Running;
    state.push_event(GameEvent::Started);
    if restart {
        log::info!("Run restarted (best {})", state.best);
    } else {
        log::info!("Run started");
    }
}

fn end_run(state: &mut GameState, cause: CrashCause) {
    state.run_state = RunState::GameOver;
    state.best = state.best.max(state.score);
    state.push_event(GameEvent::Crashed {
        cause,
        score: state.score,
        best: state.best,
    });
    log::info!(
        "Game over ({:?}) at frame {}: score {}, best {}",
        cause,
        state.frame,
        state.score,
        state.best
    );
}

/// Semi-implicit Euler: velocity first, then position with the new velocity
pub fn integrate(entity: &mut Entity, tuning: &Tuning) {
    entity.vy += tuning.gravity;
    entity.pos.y += entity.vy;
    entity.rotation =
        (entity.vy * tuning.rotation_scale).clamp(tuning.min_rotation, tuning.max_rotation);
}

/// Append a new obstacle on every `spawn_interval`th frame
pub fn spawn_obstacles<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    if state.frame % state.tuning.spawn_interval != 0 {
        return;
    }

    let top = random_gap_top(&state.tuning, rng);
    state.obstacles.push(Obstacle::new(state.tuning.spawn_x(), top));
    state.push_event(GameEvent::Spawned { top });
    log::debug!("Spawned obstacle at frame {} with gap top {}", state.frame, top);
}

/// Uniform integer gap offset within the configured margins (inclusive)
pub fn random_gap_top<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> f32 {
    let (min, max) = tuning.gap_top_range();
    rng.random_range(min..=max) as f32
}

/// Scroll obstacles, score the ones the entity has cleared, retire off-screen ones
pub fn advance_obstacles(state: &mut GameState) {
    let tuning = &state.tuning;
    let entity_x = state.entity.pos.x;
    let mut newly_passed = 0;

    for obstacle in &mut state.obstacles {
        obstacle.x -= tuning.obstacle_speed;

        if !obstacle.passed && obstacle.trailing_edge(tuning) < entity_x {
            obstacle.passed = true;
            newly_passed += 1;
        }
    }

    let despawn_at = -tuning.despawn_buffer;
    state
        .obstacles
        .retain(|o| o.x + tuning.obstacle_width >= despawn_at);

    for _ in 0..newly_passed {
        state.score += 1;
        let score = state.score;
        state.push_event(GameEvent::Scored { score });
        log::debug!("Scored: {}", score);
    }
}

/// Boundary check first, then every obstacle the entity has not yet cleared.
///
/// A passed obstacle's trailing edge is already left of the entity's fixed
/// x, so it can never overlap again and is skipped.
pub fn detect_crash(state: &GameState) -> Option<CrashCause> {
    let tuning = &state.tuning;
    let entity = &state.entity;

    if entity.bottom() > tuning.floor_y() {
        return Some(CrashCause::Floor);
    }
    if entity.pos.y < 0.0 {
        return Some(CrashCause::Ceiling);
    }

    let body = entity.rect();
    state
        .obstacles
        .iter()
        .filter(|o| !o.passed)
        .any(|o| body.overlaps(&o.top_rect(tuning)) || body.overlaps(&o.bottom_rect(tuning)))
        .then_some(CrashCause::Obstacle)
}
