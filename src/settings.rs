//! Simulation tuning
//!
//! Passed into a `Level` at construction and never mutated afterward, so
//! several levels (or tests) can run side by side with independent tuning.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tuning constants for one simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Timing ===
    /// Nominal tick rate of the external driver
    pub ticks_per_second: f32,

    // === Launch ===
    /// Lowest launch force
    pub min_force: f32,
    /// Highest launch force
    pub max_force: f32,
    /// Force a fresh level starts with
    pub initial_force: f32,

    // === Bodies ===
    /// Side of the ball's square hitbox
    pub ball_size: f32,
    /// Side of the goal's square hitbox
    pub goal_size: f32,

    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ticks_per_second: TICKS_PER_SECOND,

            min_force: MIN_FORCE,
            max_force: MAX_FORCE,
            initial_force: DEFAULT_FORCE,

            ball_size: DEFAULT_SIZE,
            goal_size: DEFAULT_SIZE,

            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
        }
    }
}

impl Settings {
    /// Default tuning on a playfield of the given size
    pub fn with_playfield(width: f32, height: f32) -> Self {
        Self {
            playfield_width: width,
            playfield_height: height,
            ..Self::default()
        }
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Settings>(json).map(Settings::validated)
    }

    /// Repair values that would break the simulation.
    ///
    /// Non-positive or non-finite tick rates fall back to the default, an
    /// inverted force range is swapped, sizes clamp to zero, and the initial
    /// force is clamped into range.
    pub fn validated(mut self) -> Self {
        if !(self.ticks_per_second.is_finite() && self.ticks_per_second > 0.0) {
            log::warn!(
                "Invalid tick rate {}, using {}",
                self.ticks_per_second,
                TICKS_PER_SECOND
            );
            self.ticks_per_second = TICKS_PER_SECOND;
        }

        if !self.min_force.is_finite() {
            self.min_force = MIN_FORCE;
        }
        if !self.max_force.is_finite() {
            self.max_force = MAX_FORCE;
        }
        if self.min_force > self.max_force {
            std::mem::swap(&mut self.min_force, &mut self.max_force);
        }
        self.initial_force = if self.initial_force.is_finite() {
            self.initial_force.clamp(self.min_force, self.max_force)
        } else {
            self.min_force
        };

        self.ball_size = self.ball_size.max(0.0);
        self.goal_size = self.goal_size.max(0.0);
        self.playfield_width = self.playfield_width.max(0.0);
        self.playfield_height = self.playfield_height.max(0.0);
        self
    }

    /// Clamp a force into the configured range
    #[inline]
    pub fn clamp_force(&self, force: f32) -> f32 {
        force.clamp(self.min_force, self.max_force)
    }

    /// Per-tick launch speed for a given force.
    ///
    /// Normalized by half the tick rate so a force maps to the same
    /// real-world speed at any simulation rate.
    #[inline]
    pub fn launch_speed(&self, force: f32) -> f32 {
        force / (self.ticks_per_second / 2.0)
    }

    /// Position of a ball is out of play beyond this margin around the playfield
    #[inline]
    pub fn out_of_bounds_margin(&self) -> f32 {
        2.0 * self.ball_size
    }

    /// Normalized position of `force` within the range (0 = min, 1 = max)
    pub fn force_fraction(&self, force: f32) -> f32 {
        let span = self.max_force - self.min_force;
        if span <= 0.0 {
            return 1.0;
        }
        ((force - self.min_force) / span).clamp(0.0, 1.0)
    }
}
