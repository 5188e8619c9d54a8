//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - One tick per call, no wall-clock time
//! - Stable iteration order (obstacle list order)
//! - No randomness

pub mod body;
pub mod collision;
pub mod course;
pub mod rect;
pub mod state;
pub mod tick;

pub use body::{Body, BodyKind, Hitbox};
pub use collision::{attraction_pull, find_contacts, out_of_bounds, total_pull};
pub use course::{CourseDef, ObstacleDef};
pub use rect::Rectangle;
pub use state::{Ball, BallState, GameEvent, Level};
pub use tick::tick;
