//! Game state and core simulation types
//!
//! Everything a frame reads or writes lives in [`GameState`]; there is no
//! module-level mutable state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::assets::AssetManifest;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    /// Waiting for the first action; nothing moves
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Run ended; waiting for the restart action
    GameOver,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Top edge went above the screen
    Ceiling,
    /// Bottom edge went below the floor line
    Floor,
    /// Overlapped an obstacle rectangle
    Obstacle,
}

/// Things that happened during a step or action, for sound and UI prompts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run began (from Idle or GameOver)
    Started,
    Flapped,
    Spawned { top: f32 },
    /// An obstacle was passed; carries the new score
    Scored { score: u32 },
    /// The run ended; the UI should show the restart prompt
    Crashed { cause: CrashCause, score: u32, best: u32 },
}

/// Pending events are capped so an undrained queue cannot grow forever
pub const MAX_PENDING_EVENTS: usize = 256;

/// The falling actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner. `x` is fixed after reset.
    pub pos: Vec2,
    /// Collision size (width, height)
    pub size: Vec2,
    /// Vertical velocity, positive is down
    pub vy: f32,
    /// Visual tilt in degrees, derived from `vy`
    pub rotation: f32,
}

impl Entity {
    pub fn new(tuning: &Tuning, size: Vec2) -> Self {
        let mut entity = Self {
            pos: Vec2::ZERO,
            size,
            vy: 0.0,
            rotation: 0.0,
        };
        entity.reset(tuning);
        entity
    }

    /// Back to the start position, at rest
    pub fn reset(&mut self, tuning: &Tuning) {
        self.pos = Vec2::new(tuning.entity_x, tuning.screen_height / 2.0);
        self.vy = 0.0;
        self.rotation = 0.0;
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// One obstacle pair: a top and a bottom column with a gap between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Leading (left) edge
    pub x: f32,
    /// Top of the gap; `[top, top + gap_height)` is passable
    pub top: f32,
    /// Set once when the trailing edge moves behind the entity
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, top: f32) -> Self {
        Self {
            x,
            top,
            passed: false,
        }
    }

    #[inline]
    pub fn trailing_edge(&self, tuning: &Tuning) -> f32 {
        self.x + tuning.obstacle_width
    }

    /// Upper column, from the top of the screen down to the gap
    pub fn top_rect(&self, tuning: &Tuning) -> Rect {
        Rect::from_xywh(self.x, 0.0, tuning.obstacle_width, self.top)
    }

    /// Lower column, from the bottom of the gap to the bottom of the screen
    pub fn bottom_rect(&self, tuning: &Tuning) -> Rect {
        let gap_bottom = self.top + tuning.gap_height;
        Rect::from_xywh(
            self.x,
            gap_bottom,
            tuning.obstacle_width,
            tuning.screen_height - gap_bottom,
        )
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub run_state: RunState,
    pub entity: Entity,
    /// Active obstacles in creation order (descending x)
    pub obstacles: Vec<Obstacle>,
    /// Frames since the run started; drives the spawn clock
    pub frame: u64,
    /// Obstacles passed this run
    pub score: u32,
    /// Highest score of any finished run in this process
    pub best: u32,
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Idle state with the entity sized from the asset manifest
    pub fn new(tuning: Tuning, assets: &AssetManifest) -> Self {
        let (w, h) = assets.entity_size(&tuning);
        let entity = Entity::new(&tuning, Vec2::new(w, h));
        Self {
            tuning,
            run_state: RunState::Idle,
            entity,
            obstacles: Vec::new(),
            frame: 0,
            score: 0,
            best: 0,
            events: Vec::new(),
        }
    }

    /// Clear everything a run owns. `best` survives.
    pub fn reset_run(&mut self) {
        self.entity.reset(&self.tuning);
        self.obstacles.clear();
        self.frame = 0;
        self.score = 0;
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Number of live obstacles already scored
    pub fn passed_count(&self) -> usize {
        self.obstacles.iter().filter(|o| o.passed).count()
    }

    /// First obstacle the entity still has to clear
    pub fn next_obstacle(&self) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| !o.passed)
    }

    pub fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_centered() {
        let state = GameState::new(Tuning::default(), &AssetManifest::placeholders());
        assert_eq!(state.run_state, RunState::Idle);
        assert_eq!(state.entity.pos, Vec2::new(80.0, 300.0));
        assert_eq!(state.entity.size, Vec2::new(34.0, 24.0));
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_obstacle_rects() {
        let tuning = Tuning::default();
        let obstacle = Obstacle::new(200.0, 100.0);

        assert_eq!(obstacle.top_rect(&tuning), Rect::from_xywh(200.0, 0.0, 52.0, 100.0));
        assert_eq!(
            obstacle.bottom_rect(&tuning),
            Rect::from_xywh(200.0, 250.0, 52.0, 350.0)
        );
        assert_eq!(obstacle.trailing_edge(&tuning), 252.0);
    }

    #[test]
    fn test_reset_run_keeps_best() {
        let mut state = GameState::new(Tuning::default(), &AssetManifest::placeholders());
        state.best = 7;
        state.score = 3;
        state.frame = 500;
        state.entity.pos.y = 12.0;
        state.entity.vy = 4.0;
        state.obstacles.push(Obstacle::new(10.0, 90.0));

        state.reset_run();

        assert_eq!(state.best, 7);
        assert_eq!(state.score, 0);
        assert_eq!(state.frame, 0);
        assert_eq!(state.entity.pos.y, 300.0);
        assert_eq!(state.entity.vy, 0.0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_event_queue_is_capped() {
        let mut state = GameState::new(Tuning::default(), &AssetManifest::placeholders());
        for _ in 0..MAX_PENDING_EVENTS + 10 {
            state.push_event(GameEvent::Flapped);
        }
        state.push_event(GameEvent::Started);
        assert_eq!(state.events.len(), MAX_PENDING_EVENTS);
        assert_eq!(state.events.last(), Some(&GameEvent::Started));
    }
}
