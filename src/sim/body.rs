//! Axis-aligned bounding box geometry shared by every entity
//!
//! Screen space: origin at the top-left, y grows downward.
//! - pos: top-left corner
//! - size: width and height

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in screen space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center point of the box
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict containment (points on the edge are outside)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x > self.left() && point.x < self.right() && point.y > self.top() && point.y < self.bottom()
    }

    /// True if the boxes share any area or touch along an edge
    pub fn overlaps(&self, other: &Body) -> bool {
        self.right() >= other.left()
            && self.left() <= other.right()
            && self.bottom() >= other.top()
            && self.top() <= other.bottom()
    }

    /// True if the boxes share area; edge contact alone does not count
    pub fn intersects(&self, other: &Body) -> bool {
        self.right() > other.left()
            && self.left() < other.right()
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }

    /// Box grown by `margin` on every side
    pub fn expanded(&self, margin: f32) -> Body {
        Body {
            pos: self.pos - Vec2::splat(margin),
            size: self.size + Vec2::splat(margin * 2.0),
        }
    }
}
