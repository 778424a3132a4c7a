//! Startup asset gate
//!
//! Images are decoded by the platform layer. The simulation only needs to
//! know when every request has settled and, optionally, the entity sprite
//! size. A failed load settles the same way a successful one does so the
//! game can always start with placeholder visuals.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// The images the game asks for at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    Background,
    Entity,
    Obstacle,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [AssetKind::Background, AssetKind::Entity, AssetKind::Obstacle];

    /// Conventional path relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            AssetKind::Background => "assets/background.png",
            AssetKind::Entity => "assets/bird.png",
            AssetKind::Obstacle => "assets/pipe.png",
        }
    }

    fn index(self) -> usize {
        match self {
            AssetKind::Background => 0,
            AssetKind::Entity => 1,
            AssetKind::Obstacle => 2,
        }
    }
}

/// Decoded image dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Which images are available once loading has settled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetManifest {
    pub background: Option<ImageSize>,
    pub entity: Option<ImageSize>,
    pub obstacle: Option<ImageSize>,
}

impl AssetManifest {
    /// Manifest with no images; everything renders as placeholders
    pub fn placeholders() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: AssetKind) -> Option<ImageSize> {
        match kind {
            AssetKind::Background => self.background,
            AssetKind::Entity => self.entity,
            AssetKind::Obstacle => self.obstacle,
        }
    }

    /// Collision size for the entity: sprite dimensions clamped to a sane
    /// range, or the tuning default when no sprite loaded.
    pub fn entity_size(&self, tuning: &Tuning) -> (f32, f32) {
        match self.entity {
            Some(size) => (
                (size.width as f32).clamp(ENTITY_MIN_WIDTH, ENTITY_MAX_WIDTH),
                (size.height as f32).clamp(ENTITY_MIN_HEIGHT, ENTITY_MAX_HEIGHT),
            ),
            None => (tuning.entity_width, tuning.entity_height),
        }
    }
}

/// Outcome of one load request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Pending,
    Loaded(ImageSize),
    Failed,
}

/// Counts down outstanding loads; yields the manifest once all have settled
#[derive(Debug, Clone)]
pub struct AssetGate {
    slots: [Slot; 3],
}

impl Default for AssetGate {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetGate {
    pub fn new() -> Self {
        Self {
            slots: [Slot::Pending; 3],
        }
    }

    /// Number of requests still outstanding
    pub fn pending(&self) -> usize {
        self.slots.iter().filter(|s| **s == Slot::Pending).count()
    }

    pub fn is_ready(&self) -> bool {
        self.pending() == 0
    }

    /// Record a successful load. Returns the manifest if this settled the gate.
    pub fn loaded(&mut self, kind: AssetKind, size: ImageSize) -> Option<AssetManifest> {
        self.settle(kind, Slot::Loaded(size))
    }

    /// Record a failed load. Returns the manifest if this settled the gate.
    pub fn failed(&mut self, kind: AssetKind) -> Option<AssetManifest> {
        log::error!("Failed to load {}", kind.path());
        self.settle(kind, Slot::Failed)
    }

    fn settle(&mut self, kind: AssetKind, outcome: Slot) -> Option<AssetManifest> {
        let slot = &mut self.slots[kind.index()];
        if *slot != Slot::Pending {
            log::warn!("{:?} already settled, ignoring", kind);
            return None;
        }
        *slot = outcome;

        if self.is_ready() {
            let manifest = self.manifest();
            log::info!(
                "Assets settled: background={} entity={} obstacle={}",
                manifest.background.is_some(),
                manifest.entity.is_some(),
                manifest.obstacle.is_some()
            );
            Some(manifest)
        } else {
            None
        }
    }

    /// Current view of the loaded images (pending and failed both read as missing)
    pub fn manifest(&self) -> AssetManifest {
        let image = |kind: AssetKind| match self.slots[kind.index()] {
            Slot::Loaded(size) => Some(size),
            Slot::Pending | Slot::Failed => None,
        };
        AssetManifest {
            background: image(AssetKind::Background),
            entity: image(AssetKind::Entity),
            obstacle: image(AssetKind::Obstacle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPRITE: ImageSize = ImageSize {
        width: 40,
        height: 30,
    };

    #[test]
    fn test_gate_opens_after_all_settle() {
        let mut gate = AssetGate::new();
        assert_eq!(gate.pending(), 3);

        assert!(gate.loaded(AssetKind::Background, SPRITE).is_none());
        assert!(gate.failed(AssetKind::Obstacle).is_none());
        let manifest = gate.loaded(AssetKind::Entity, SPRITE).unwrap();

        assert!(gate.is_ready());
        assert_eq!(manifest.entity, Some(SPRITE));
        assert_eq!(manifest.obstacle, None);
    }

    #[test]
    fn test_all_failures_still_open_gate() {
        let mut gate = AssetGate::new();
        let mut result = None;
        for kind in AssetKind::ALL {
            result = gate.failed(kind);
        }
        assert_eq!(result, Some(AssetManifest::placeholders()));
    }

    #[test]
    fn test_duplicate_resolution_ignored() {
        let mut gate = AssetGate::new();
        gate.failed(AssetKind::Entity);
        assert!(gate.loaded(AssetKind::Entity, SPRITE).is_none());
        assert_eq!(gate.pending(), 2);
        assert_eq!(gate.manifest().entity, None);
    }

    #[test]
    fn test_entity_size_clamped() {
        let tuning = Tuning::default();
        let big = AssetManifest {
            entity: Some(ImageSize {
                width: 512,
                height: 4,
            }),
            ..Default::default()
        };
        assert_eq!(big.entity_size(&tuning), (48.0, 18.0));

        let fits = AssetManifest {
            entity: Some(SPRITE),
            ..Default::default()
        };
        assert_eq!(fits.entity_size(&tuning), (40.0, 30.0));
    }

    #[test]
    fn test_entity_size_fallback() {
        let tuning = Tuning::default();
        assert_eq!(
            AssetManifest::placeholders().entity_size(&tuning),
            (ENTITY_WIDTH, ENTITY_HEIGHT)
        );
    }
}
