//! Positioned entities with rectangular hitboxes
//!
//! Ball, goal and obstacles share one representation. What differs between
//! them is the `BodyKind` tag, which also carries attraction strength for
//! black holes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rectangle;
use crate::radius_for_size;

/// What a body is and how it behaves on contact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BodyKind {
    Ball,
    Goal,
    /// Pulls the ball toward its center while the ball is within its
    /// influence radius. Negative strength pushes instead.
    Attractor { strength: f32 },
}

/// A hitbox attached to a body at a fixed offset from the body's center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub rect: Rectangle,
    pub offset: Vec2,
}

impl Hitbox {
    /// Square hitbox centered on the body
    pub fn square(size: f32) -> Self {
        Self::new(size, size, Vec2::ZERO)
    }

    pub fn new(width: f32, height: f32, offset: Vec2) -> Self {
        Self {
            rect: Rectangle::centered(offset, width, height),
            offset,
        }
    }
}

/// A positioned, optionally moving entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub kind: BodyKind,
    pos: Vec2,
    pub vel: Vec2,
    /// Nominal size the body was built with
    size: f32,
    /// Never empty; the first entry is the primary hitbox
    hitboxes: Vec<Hitbox>,
}

impl Body {
    /// Body with a single `size × size` hitbox centered on `pos`
    pub fn new(kind: BodyKind, pos: Vec2, size: f32) -> Self {
        Self::compound(kind, pos, size, Hitbox::square(size), std::iter::empty::<Hitbox>())
    }

    /// Body with a primary hitbox and any number of extra ones
    pub fn compound(
        kind: BodyKind,
        pos: Vec2,
        size: f32,
        primary: Hitbox,
        extra: impl IntoIterator<Item = Hitbox>,
    ) -> Self {
        let mut hitboxes = vec![primary];
        hitboxes.extend(extra);

        let mut body = Self {
            kind,
            pos,
            vel: Vec2::ZERO,
            size: size.max(0.0),
            hitboxes,
        };
        body.recenter_hitboxes();
        body
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn hitboxes(&self) -> &[Hitbox] {
        &self.hitboxes
    }

    /// Drawn radius
    pub fn radius(&self) -> f32 {
        radius_for_size(self.size)
    }

    /// Distance from the center within which an attractor pulls
    pub fn influence_radius(&self) -> f32 {
        self.hitboxes[0].rect.width() / 2.0
    }

    /// Attraction strength, if this body is an attractor
    pub fn attraction(&self) -> Option<f32> {
        match self.kind {
            BodyKind::Attractor { strength } => Some(strength),
            _ => None,
        }
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.vel != Vec2::ZERO
    }

    /// Advance one tick: move by velocity, then re-center hitboxes
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.recenter_hitboxes();
    }

    /// Teleport to `pos`, keeping velocity
    pub fn place(&mut self, pos: Vec2) {
        self.pos = pos;
        self.recenter_hitboxes();
    }

    /// True if any of our hitboxes overlaps any of theirs
    pub fn collides_with(&self, other: &Body) -> bool {
        self.hitboxes
            .iter()
            .any(|mine| other.hitboxes.iter().any(|theirs| mine.rect.collides(&theirs.rect)))
    }

    fn recenter_hitboxes(&mut self) {
        let pos = self.pos;
        for hitbox in &mut self.hitboxes {
            hitbox.rect.set_middle(pos + hitbox.offset);
        }
    }
}
