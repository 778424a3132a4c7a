//! Scene description for a drawing backend
//!
//! The simulation never draws. A backend (canvas, GPU, terminal) asks for the
//! draw list after each step and replays it in order. Missing images fall
//! back to flat-colored rectangles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::{AssetKind, AssetManifest};
use crate::sim::{GameState, Rect};

/// Colors for game elements
pub mod colors {
    const fn rgb(hex: u32) -> [f32; 4] {
        [
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
            1.0,
        ]
    }

    pub const SKY: [f32; 4] = rgb(0x70c5ce);
    pub const OBSTACLE: [f32; 4] = rgb(0x2ecc71);
    pub const ENTITY: [f32; 4] = rgb(0xffdd57);
}

/// One drawing operation, in back-to-front order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCmd {
    /// Solid rectangle
    Fill { rect: Rect, color: [f32; 4] },
    /// Image stretched over `rect` (or repeated when `tiled`), rotated about
    /// the rect center by `rotation` degrees
    Sprite {
        asset: AssetKind,
        rect: Rect,
        rotation: f32,
        tiled: bool,
    },
    /// Solid rectangle rotated about its center by `rotation` degrees
    FillRotated {
        rect: Rect,
        color: [f32; 4],
        rotation: f32,
    },
}

/// Build the full draw list for the current state
pub fn build_scene(state: &GameState, assets: &AssetManifest) -> Vec<DrawCmd> {
    let tuning = &state.tuning;
    let mut cmds = Vec::with_capacity(2 + state.obstacles.len() * 4);
    let screen = Rect::from_xywh(0.0, 0.0, tuning.screen_width, tuning.screen_height);

    // Background
    cmds.push(match assets.background {
        Some(_) => DrawCmd::Sprite {
            asset: AssetKind::Background,
            rect: screen,
            rotation: 0.0,
            tiled: true,
        },
        None => DrawCmd::Fill {
            rect: screen,
            color: colors::SKY,
        },
    });

    // Obstacles
    for obstacle in &state.obstacles {
        let upper = obstacle.top_rect(tuning);
        let lower = obstacle.bottom_rect(tuning);
        match assets.obstacle {
            Some(image) => {
                let cap_h = image.height as f32;
                let sprite = |rect: Rect| DrawCmd::Sprite {
                    asset: AssetKind::Obstacle,
                    rect,
                    rotation: 0.0,
                    tiled: false,
                };
                // Cap sits just above the gap, body fills the column
                cmds.push(sprite(Rect::from_xywh(
                    obstacle.x,
                    obstacle.top - cap_h,
                    tuning.obstacle_width,
                    cap_h,
                )));
                cmds.push(sprite(upper));
                cmds.push(sprite(Rect::new(
                    lower.pos,
                    Vec2::new(tuning.obstacle_width, cap_h),
                )));
                cmds.push(sprite(lower));
            }
            None => {
                cmds.push(DrawCmd::Fill {
                    rect: upper,
                    color: colors::OBSTACLE,
                });
                cmds.push(DrawCmd::Fill {
                    rect: lower,
                    color: colors::OBSTACLE,
                });
            }
        }
    }

    // Entity
    let entity = &state.entity;
    cmds.push(match assets.entity {
        Some(_) => DrawCmd::Sprite {
            asset: AssetKind::Entity,
            rect: entity.rect(),
            rotation: entity.rotation,
            tiled: false,
        },
        None => DrawCmd::FillRotated {
            rect: entity.rect(),
            color: colors::ENTITY,
            rotation: entity.rotation,
        },
    });

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageSize;
    use crate::sim::Obstacle;
    use crate::tuning::Tuning;

    fn state_with_obstacle() -> GameState {
        let mut state = GameState::new(Tuning::default(), &AssetManifest::placeholders());
        state.obstacles.push(Obstacle::new(200.0, 120.0));
        state.entity.rotation = 15.0;
        state
    }

    #[test]
    fn test_placeholder_scene() {
        let state = state_with_obstacle();
        let cmds = build_scene(&state, &AssetManifest::placeholders());

        assert_eq!(cmds.len(), 4);
        assert_eq!(
            cmds[0],
            DrawCmd::Fill {
                rect: Rect::from_xywh(0.0, 0.0, 400.0, 600.0),
                color: colors::SKY
            }
        );
        assert_eq!(
            cmds[2],
            DrawCmd::Fill {
                rect: Rect::from_xywh(200.0, 270.0, 52.0, 330.0),
                color: colors::OBSTACLE
            }
        );
        assert!(matches!(
            cmds[3],
            DrawCmd::FillRotated { rotation, .. } if rotation == 15.0
        ));
    }

    #[test]
    fn test_sprite_scene() {
        let state = state_with_obstacle();
        let size = ImageSize {
            width: 52,
            height: 26,
        };
        let assets = AssetManifest {
            background: Some(size),
            entity: Some(size),
            obstacle: Some(size),
        };
        let cmds = build_scene(&state, &assets);

        // Background, 4 obstacle pieces, entity
        assert_eq!(cmds.len(), 6);
        assert!(matches!(cmds[0], DrawCmd::Sprite { tiled: true, .. }));
        assert_eq!(
            cmds[1],
            DrawCmd::Sprite {
                asset: AssetKind::Obstacle,
                rect: Rect::from_xywh(200.0, 94.0, 52.0, 26.0),
                rotation: 0.0,
                tiled: false
            }
        );
        assert!(matches!(
            cmds[5],
            DrawCmd::Sprite {
                asset: AssetKind::Entity,
                ..
            }
        ));
    }

    #[test]
    fn test_colors() {
        assert_eq!(colors::ENTITY[0], 1.0);
        assert_eq!(colors::SKY[3], 1.0);
    }
}
