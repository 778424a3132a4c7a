//! Browser bindings
//!
//! The page owns the canvas, image loading and input listeners. It forwards
//! image load results to the gate, calls `step` from `requestAnimationFrame`
//! and `trigger_action` from pointer-down, touch-start and Space, then reads
//! the draw list back as JSON.

use wasm_bindgen::prelude::*;

use crate::assets::{AssetGate, AssetKind, AssetManifest, ImageSize};
use crate::renderer::{build_scene, hud_text, overlay_message};
use crate::sim::{Game, RunState};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
}

fn asset_kind(name: &str) -> Option<AssetKind> {
    match name {
        "bg" | "background" => Some(AssetKind::Background),
        "bird" | "entity" => Some(AssetKind::Entity),
        "pipe" | "obstacle" => Some(AssetKind::Obstacle),
        _ => None,
    }
}

/// Collects image load results until every request has settled
#[wasm_bindgen]
#[derive(Default)]
pub struct WebAssets {
    gate: AssetGate,
    manifest: Option<AssetManifest>,
}

#[wasm_bindgen]
impl WebAssets {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the gate is open
    pub fn loaded(&mut self, name: &str, width: u32, height: u32) -> bool {
        match asset_kind(name) {
            Some(kind) => {
                if let Some(manifest) = self.gate.loaded(kind, ImageSize { width, height }) {
                    self.manifest = Some(manifest);
                }
            }
            None => log::warn!("Unknown asset '{}'", name),
        }
        self.is_ready()
    }

    /// Returns true once the gate is open
    pub fn failed(&mut self, name: &str) -> bool {
        match asset_kind(name) {
            Some(kind) => {
                if let Some(manifest) = self.gate.failed(kind) {
                    self.manifest = Some(manifest);
                }
            }
            None => log::warn!("Unknown asset '{}'", name),
        }
        self.is_ready()
    }

    pub fn is_ready(&self) -> bool {
        self.manifest.is_some()
    }
}

/// Game instance holding all state
#[wasm_bindgen]
pub struct WebGame {
    game: Game,
    assets: AssetManifest,
}

#[wasm_bindgen]
impl WebGame {
    /// Build a game once assets have settled. `tuning_json` may be empty.
    #[wasm_bindgen(constructor)]
    pub fn new(assets: &WebAssets, tuning_json: &str) -> Result<WebGame, JsError> {
        let Some(manifest) = assets.manifest else {
            return Err(JsError::new("assets have not finished loading"));
        };
        let tuning = if tuning_json.trim().is_empty() {
            Tuning::default()
        } else {
            Tuning::from_json(tuning_json)?
        };
        let seed = js_sys::Date::now() as u64;
        Ok(Self {
            game: Game::new(tuning, &manifest, seed)?,
            assets: manifest,
        })
    }

    pub fn step(&mut self) {
        self.game.step();
    }

    pub fn trigger_action(&mut self) {
        self.game.trigger_action();
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }

    pub fn best(&self) -> u32 {
        self.game.best()
    }

    /// "idle", "running" or "game_over"
    pub fn run_state(&self) -> String {
        match self.game.run_state() {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::GameOver => "game_over",
        }
        .to_string()
    }

    pub fn hud_text(&self) -> String {
        hud_text(self.game.state())
    }

    pub fn overlay_message(&self) -> Option<String> {
        overlay_message(self.game.state()).map(str::to_string)
    }

    /// Draw list for the current frame
    pub fn scene_json(&self) -> Result<String, JsError> {
        let cmds = build_scene(self.game.state(), &self.assets);
        Ok(serde_json::to_string(&cmds)?)
    }

    /// Full state for debugging
    pub fn snapshot_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(self.game.state())?)
    }

    /// Events since the last call, as JSON
    pub fn drain_events_json(&mut self) -> Result<String, JsError> {
        let events = self.game.drain_events();
        Ok(serde_json::to_string(&events)?)
    }
}
