//! Axis-aligned rectangle geometry for hitboxes
//!
//! A rectangle stores only its top-left corner and its size. Every edge
//! (left, right, top, bottom, middle) is computed from those, and setting an
//! edge moves the rectangle without resizing it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Top-left corner
    pub position: Vec2,
    width: f32,
    height: f32,
}

impl Rectangle {
    /// Negative sizes are clamped to zero
    pub fn new(position: Vec2, width: f32, height: f32) -> Self {
        Self {
            position,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Rectangle of the given size whose middle sits at `middle`
    pub fn centered(middle: Vec2, width: f32, height: f32) -> Self {
        let mut rect = Self::new(Vec2::ZERO, width, height);
        rect.set_middle(middle);
        rect
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.position.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.position.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y + self.height
    }

    /// Center point
    #[inline]
    pub fn middle(&self) -> Vec2 {
        self.position + self.size() / 2.0
    }

    pub fn set_left(&mut self, left: f32) {
        self.position.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.position.x = right - self.width;
    }

    pub fn set_top(&mut self, top: f32) {
        self.position.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.position.y = bottom - self.height;
    }

    pub fn set_middle(&mut self, middle: Vec2) {
        self.position = middle - self.size() / 2.0;
    }

    /// Shift the rectangle by `delta`
    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// True if the rectangle has no area
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check overlap with another rectangle
    ///
    /// Uses open intervals on both axes: boxes that only share an edge do not
    /// collide, while a box fully inside another does. Empty rectangles never
    /// collide, not even with themselves.
    pub fn collides(&self, other: &Rectangle) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        let overlap_x = self.left() < other.right() && self.right() > other.left();
        let overlap_y = self.top() < other.bottom() && self.bottom() > other.top();
        overlap_x && overlap_y
    }

    /// Copy of this rectangle grown by `margin` on every side
    pub fn expanded(&self, margin: f32) -> Rectangle {
        Rectangle::new(
            self.position - Vec2::splat(margin),
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rectangle {
        Rectangle::new(Vec2::new(x, y), w, h)
    }

    #[test]
    fn test_edges_follow_position() {
        let mut r = rect(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.middle(), Vec2::new(25.0, 40.0));

        r.set_right(100.0);
        assert_eq!(r.left(), 70.0);
        assert_eq!(r.width(), 30.0);

        r.set_bottom(0.0);
        assert_eq!(r.top(), -40.0);
        assert_eq!(r.height(), 40.0);

        r.set_middle(Vec2::ZERO);
        assert_eq!(r.position, Vec2::new(-15.0, -20.0));
        assert_eq!(r.size(), Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_negative_size_clamps() {
        let r = rect(0.0, 0.0, -5.0, 3.0);
        assert_eq!(r.width(), 0.0);
        assert!(r.is_empty());
    }

    #[test]
    fn test_overlap_and_containment() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(a.collides(&rect(5.0, 5.0, 10.0, 10.0)));
        // Fully inside, either way round
        let inner = rect(2.0, 2.0, 2.0, 2.0);
        assert!(a.collides(&inner));
        assert!(inner.collides(&a));
        assert!(a.collides(&a));
    }

    #[test]
    fn test_edge_touching_is_not_collision() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.collides(&rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.collides(&rect(0.0, 10.0, 10.0, 10.0)));
        assert!(!a.collides(&rect(-10.0, -10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_empty_rect_never_collides() {
        let big = rect(0.0, 0.0, 100.0, 100.0);
        let line = rect(50.0, 0.0, 0.0, 100.0);
        let flat = rect(0.0, 50.0, 100.0, 0.0);
        assert!(!line.collides(&big));
        assert!(!big.collides(&line));
        assert!(!flat.collides(&big));
        assert!(!line.collides(&line));
        assert!(!flat.collides(&flat));
    }

    #[test]
    fn test_expanded_grows_every_side() {
        let field = rect(0.0, 0.0, 500.0, 400.0).expanded(20.0);
        assert_eq!(field.left(), -20.0);
        assert_eq!(field.top(), -20.0);
        assert_eq!(field.right(), 520.0);
        assert_eq!(field.bottom(), 420.0);
    }

    fn arb_rect() -> impl Strategy<Value = Rectangle> {
        (-100.0f32..100.0, -100.0f32..100.0, 0.0f32..50.0, 0.0f32..50.0)
            .prop_map(|(x, y, w, h)| rect(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_collision_is_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(a.collides(&b), b.collides(&a));
        }

        #[test]
        fn prop_zero_translate_keeps_result(a in arb_rect(), b in arb_rect()) {
            let before = a.collides(&b);
            let mut moved = a;
            moved.translate(Vec2::ZERO);
            prop_assert_eq!(moved.collides(&b), before);
        }

        #[test]
        fn prop_zero_width_collides_with_nothing(
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
            h in 0.0f32..50.0,
            b in arb_rect(),
        ) {
            let empty = rect(x, y, 0.0, h);
            prop_assert!(!empty.collides(&b));
            prop_assert!(!b.collides(&empty));
        }

        #[test]
        fn prop_setters_never_resize(a in arb_rect(), v in -100.0f32..100.0) {
            let mut r = a;
            r.set_left(v);
            r.set_bottom(v);
            r.set_middle(Vec2::splat(v));
            prop_assert_eq!(r.width(), a.width());
            prop_assert_eq!(r.height(), a.height());
        }
    }
}
