//! Flappy entry point
//!
//! The browser build is driven through `flappy::web`. Natively this runs a
//! headless demo: the autopilot plays one run and the result is logged.
//!
//! Usage: `flappy [tuning.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy (native) starting...");

    if let Err(e) = native::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is flappy::web::wasm_start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use flappy::renderer::{build_scene, hud_text, overlay_message};
    use flappy::sim::autopilot;
    use flappy::{AssetGate, AssetKind, Game, GameEvent, Result, RunState, Tuning};

    /// Stop the demo after this many frames (about 5 minutes at 60 Hz)
    const MAX_FRAMES: u64 = 60 * 60 * 5;

    pub fn run() -> Result<()> {
        let mut args = std::env::args().skip(1);
        let tuning = match args.next() {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };
        let seed = match args.next() {
            Some(s) => s.parse().unwrap_or_else(|_| {
                log::warn!("Invalid seed '{}', using 1", s);
                1
            }),
            None => rand::random(),
        };

        // No image decoder here: every request settles as failed
        let mut gate = AssetGate::new();
        let mut manifest = None;
        for kind in AssetKind::ALL {
            manifest = gate.failed(kind);
        }
        let manifest = manifest.unwrap_or_default();

        let mut game = Game::new(tuning, &manifest, seed)?;
        log::info!("{}", overlay_message(game.state()).unwrap_or_default());
        game.trigger_action();

        let mut frames = 0;
        while game.run_state() == RunState::Running && frames < MAX_FRAMES {
            if autopilot::should_flap(game.state()) {
                game.trigger_action();
            }
            game.step();
            frames += 1;

            for event in game.drain_events() {
                match event {
                    GameEvent::Scored { score } => log::info!("Passed gate {}", score),
                    GameEvent::Crashed { cause, .. } => log::info!("Crashed into {:?}", cause),
                    _ => log::trace!("{:?}", event),
                }
            }
        }

        let scene = build_scene(game.state(), &manifest);
        log::debug!("Final scene has {} draw commands", scene.len());
        log::info!("{} after {} frames", hud_text(game.state()), frames);
        Ok(())
    }
}
