//! Demo/idle player
//!
//! Plays the level on its own: whenever the ball is ready, it aims at the goal
//! with a little seeded wobble and sets the force from the distance. Same seed,
//! same shots.

use std::f32::consts::PI;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::input::InputEvent;
use crate::sim::Level;

/// Default aim wobble (radians either side of the goal)
pub const DEFAULT_AIM_JITTER: f32 = 0.12;

/// Seeded auto-player
#[derive(Debug, Clone)]
pub struct DemoPlayer {
    rng: Pcg32,
    aim_jitter: f32,
    shots: u32,
}

impl DemoPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            aim_jitter: DEFAULT_AIM_JITTER,
            shots: 0,
        }
    }

    /// Same player with a different aim wobble (0 = perfect aim).
    /// Non-finite values mean perfect aim; anything past half a turn is capped.
    pub fn with_aim_jitter(mut self, jitter: f32) -> Self {
        self.aim_jitter = if jitter.is_finite() {
            jitter.abs().min(PI)
        } else {
            0.0
        };
        self
    }

    /// Shots taken so far
    pub fn shots(&self) -> u32 {
        self.shots
    }

    /// Inputs for the next shot, or `None` while the ball isn't ready
    pub fn next_shot(&mut self, level: &Level) -> Option<Vec<InputEvent>> {
        let ball = level.ball();
        if !ball.can_launch() {
            return None;
        }

        let to_goal = level.goal().pos() - ball.pos();
        let dist = to_goal.length();
        if dist <= 0.0 {
            return None;
        }

        let wobble = if self.aim_jitter > 0.0 {
            self.rng.random_range(-self.aim_jitter..=self.aim_jitter)
        } else {
            0.0
        };
        let target = ball.pos() + Vec2::from_angle(wobble).rotate(to_goal);

        // Farther goals get harder shots
        let settings = level.settings();
        let diagonal = level.playfield().size().length().max(1.0);
        let reach = (dist / diagonal).clamp(0.0, 1.0);
        let desired = settings.clamp_force(
            settings.min_force + reach * (settings.max_force - settings.min_force),
        );

        self.shots += 1;
        log::debug!(
            "Demo shot {}: wobble {:.3} rad, force {:.1}",
            self.shots,
            wobble,
            desired
        );

        // A positive wheel delta lowers the force
        Some(vec![
            InputEvent::Wheel(level.force() - desired),
            InputEvent::Click(target),
        ])
    }
}
