//! Galaxy Golf - mini-golf in outer space
//!
//! Core modules:
//! - `sim`: Tick-driven simulation (rectangles, bodies, level, collisions)
//! - `settings`: Immutable tuning passed into a level
//! - `input`: Pointer/wheel events mapped onto level commands
//! - `view`: Read-only snapshot for renderers
//! - `demo`: Seeded auto-player used by the native driver

pub mod demo;
pub mod input;
pub mod settings;
pub mod sim;
pub mod view;

pub use settings::Settings;
pub use sim::{BallState, CourseDef, GameEvent, Level, ObstacleDef};

/// Game configuration defaults
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICKS_PER_SECOND: f32 = 80.0;

    /// Nominal size of the ball and goal hitboxes (pixels)
    pub const DEFAULT_SIZE: f32 = 10.0;

    /// Launch force bounds
    pub const MIN_FORCE: f32 = 10.0;
    pub const MAX_FORCE: f32 = 100.0;
    pub const DEFAULT_FORCE: f32 = 40.0;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 500.0;
    pub const PLAYFIELD_HEIGHT: f32 = 500.0;
}

/// Drawn radius of a body whose square hitbox has side `size`.
///
/// A circle of this radius covers roughly the same area as the hitbox.
#[inline]
pub fn radius_for_size(size: f32) -> f32 {
    (size / std::f32::consts::PI.sqrt()).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_radius() {
        assert_eq!(radius_for_size(consts::DEFAULT_SIZE), 6.0);
        assert_eq!(radius_for_size(0.0), 0.0);
    }
}
