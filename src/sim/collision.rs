//! Axis-aligned rectangle overlap
//!
//! Every collider in the game is an upright rectangle, so the whole collision
//! model is one strict-inequality overlap test. Touching edges do not count.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, `pos` is the top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict AABB overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_hit() {
        let entity = Rect::from_xywh(10.0, 10.0, 30.0, 20.0);
        let column = Rect::from_xywh(5.0, 0.0, 52.0, 25.0);
        assert!(entity.overlaps(&column));
        assert!(column.overlaps(&entity));
    }

    #[test]
    fn test_overlap_disjoint_on_x() {
        let entity = Rect::from_xywh(10.0, 10.0, 30.0, 20.0);
        let column = Rect::from_xywh(50.0, 0.0, 52.0, 25.0);
        assert!(!entity.overlaps(&column));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        // Shares the right edge
        assert!(!a.overlaps(&Rect::from_xywh(10.0, 0.0, 10.0, 10.0)));
        // Shares the bottom edge
        assert!(!a.overlaps(&Rect::from_xywh(0.0, 10.0, 10.0, 10.0)));
        // Nudged inside
        assert!(a.overlaps(&Rect::from_xywh(9.9, 9.9, 10.0, 10.0)));
    }

    #[test]
    fn test_zero_height_column_never_hits() {
        let entity = Rect::from_xywh(10.0, 0.0, 30.0, 20.0);
        let empty = Rect::from_xywh(10.0, 0.0, 52.0, 0.0);
        assert!(!entity.overlaps(&empty));
    }

    #[test]
    fn test_center() {
        let r = Rect::from_xywh(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }
}
