//! Owned simulation: state plus the random source that feeds the spawner

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{GameEvent, GameState, RunState};
use super::tick;
use crate::assets::AssetManifest;
use crate::error::Result;
use crate::tuning::Tuning;

/// A single simulation. Drivers call [`Game::step`] once per display refresh
/// and [`Game::trigger_action`] on pointer-down, touch-start or the action key.
#[derive(Debug, Clone)]
pub struct Game<R = Pcg32> {
    state: GameState,
    rng: R,
}

impl Game<Pcg32> {
    /// Game with the default seeded generator
    pub fn new(tuning: Tuning, assets: &AssetManifest, seed: u64) -> Result<Self> {
        let game = Self::with_rng(tuning, assets, Pcg32::seed_from_u64(seed))?;
        log::info!("Game initialized with seed: {}", seed);
        Ok(game)
    }
}

impl<R: Rng> Game<R> {
    /// Game with a caller-supplied random source.
    ///
    /// Fails with [`Error::InvalidTuning`](crate::Error::InvalidTuning) when
    /// the tuning could make a later step panic.
    pub fn with_rng(tuning: Tuning, assets: &AssetManifest, rng: R) -> Result<Self> {
        tuning.validate()?;
        Ok(Self {
            state: GameState::new(tuning, assets),
            rng,
        })
    }

    /// Advance one frame
    pub fn step(&mut self) {
        tick::step(&mut self.state, &mut self.rng);
    }

    /// Start, restart or flap depending on the run state
    pub fn trigger_action(&mut self) {
        tick::trigger_action(&mut self.state);
    }

    /// Read-only view for rendering
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn run_state(&self) -> RunState {
        self.state.run_state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn best(&self) -> u32 {
        self.state.best
    }

    /// Take every event recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }
}
