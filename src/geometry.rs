//! Plain value geometry and the hit-test predicates every hover and selection
//! decision is built on.

use serde::{Deserialize, Serialize};

/// A point in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}

impl Pos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Pos) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A displacement, e.g. pointer movement since the previous event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle stored as origin + size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Normalized rectangle spanning two arbitrary corner points.
    pub fn from_corners(a: Pos, b: Pos) -> Self {
        let min_x = a.x.min(b.x);
        let min_y = a.y.min(b.y);
        let max_x = a.x.max(b.x);
        let max_y = a.y.max(b.y);
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    pub fn min(&self) -> Pos {
        Pos::new(self.x, self.y)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn translate(&mut self, d: Vec2) {
        self.x += d.x;
        self.y += d.y;
    }
}

/// True when `p` lies within `r + extra_margin` of `center`.
pub fn point_in_circle(p: Pos, center: Pos, r: f32, extra_margin: f32) -> bool {
    p.distance(center) <= r + extra_margin
}

/// Inclusive bounds test.
pub fn point_in_rect(p: Pos, r: Rect) -> bool {
    p.x >= r.x && p.x <= r.right() && p.y >= r.y && p.y <= r.bottom()
}

/// Strict overlap: rectangles sharing only an edge do not intersect.
pub fn rects_intersect(a: Rect, b: Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}
