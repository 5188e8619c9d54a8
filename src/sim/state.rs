//! Level state and ball lifecycle
//!
//! A `Level` exclusively owns everything that changes during play. It is
//! mutated only through `tick`, `launch`, `set_force`/`adjust_force` and
//! `reset_ball`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, BodyKind};
use super::course::{CourseDef, ObstacleDef};
use super::rect::Rectangle;
use crate::settings::Settings;

/// Where the ball is in its shot cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallState {
    /// At rest, waiting for a launch
    #[default]
    Idle,
    /// Moving
    Rolling,
    /// Stopped in the goal. Stays here until the ball is reset.
    Holed,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball left the playfield and was put back at the start
    Respawned,
    /// Ball reached the goal
    Holed,
}

/// The golf ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub body: Body,
    pub state: BallState,
}

impl Ball {
    /// Fresh ball at rest
    pub fn spawn(pos: Vec2, size: f32) -> Self {
        Self {
            body: Body::new(BodyKind::Ball, pos, size),
            state: BallState::Idle,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos()
    }

    #[inline]
    pub fn vel(&self) -> Vec2 {
        self.body.vel
    }

    /// Ready to be launched: idle and exactly at rest
    pub fn can_launch(&self) -> bool {
        self.state == BallState::Idle && !self.body.is_moving()
    }
}

/// One playable level
#[derive(Debug, Clone)]
pub struct Level {
    pub(super) settings: Settings,
    pub(super) playfield: Rectangle,
    pub(super) start: Vec2,
    pub(super) ball: Ball,
    pub(super) goal: Body,
    pub(super) obstacles: Vec<Body>,
    pub(super) force: f32,
    /// Obstacles touched on the last tick (indices, obstacle order)
    pub(super) contacts: Vec<usize>,
    pub(super) tick_count: u64,
}

impl Level {
    /// Build a level with the ball at rest on `start`
    pub fn new(settings: Settings, start: Vec2, goal: Vec2, obstacles: &[ObstacleDef]) -> Self {
        let settings = settings.validated();
        let playfield = Rectangle::new(
            Vec2::ZERO,
            settings.playfield_width,
            settings.playfield_height,
        );

        let obstacles: Vec<Body> = obstacles.iter().map(ObstacleDef::to_body).collect();
        log::debug!(
            "Level created: start={:?}, goal={:?}, {} obstacles",
            start,
            goal,
            obstacles.len()
        );

        Self {
            ball: Ball::spawn(start, settings.ball_size),
            goal: Body::new(BodyKind::Goal, goal, settings.goal_size),
            force: settings.initial_force,
            settings,
            playfield,
            start,
            obstacles,
            contacts: Vec::new(),
            tick_count: 0,
        }
    }

    /// Build a level from a course definition
    pub fn from_course(settings: Settings, course: &CourseDef) -> Self {
        Self::new(settings, course.start, course.goal, &course.obstacles)
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn goal(&self) -> &Body {
        &self.goal
    }

    pub fn obstacles(&self) -> &[Body] {
        &self.obstacles
    }

    pub fn force(&self) -> f32 {
        self.force
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn playfield(&self) -> &Rectangle {
        &self.playfield
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Indices of the obstacles the ball touched on the last tick
    pub fn contacts(&self) -> &[usize] {
        &self.contacts
    }

    pub fn is_holed(&self) -> bool {
        self.ball.state == BallState::Holed
    }

    /// Set the launch force, clamped into the configured range.
    /// Non-finite values are ignored.
    pub fn set_force(&mut self, force: f32) {
        if !force.is_finite() {
            return;
        }
        self.force = self.settings.clamp_force(force);
        log::trace!("Force set to {}", self.force);
    }

    /// Change the launch force by `delta` (clamped)
    pub fn adjust_force(&mut self, delta: f32) {
        self.set_force(self.force + delta);
    }

    /// Shoot the ball toward `target` with the current force.
    ///
    /// Does nothing unless the ball is idle and at rest, or when `target` is
    /// the ball's own position. Returns whether the shot was taken.
    pub fn launch(&mut self, target: Vec2) -> bool {
        if !self.ball.can_launch() {
            return false;
        }

        let direction = target - self.ball.pos();
        if !direction.is_finite() || direction == Vec2::ZERO {
            return false;
        }

        // Scale down first so huge but finite directions don't overflow `length`
        let unit = (direction / direction.abs().max_element()).normalize();

        let speed = self.settings.launch_speed(self.force);
        self.ball.body.vel = unit * speed;
        self.ball.state = BallState::Rolling;
        log::debug!(
            "Launched toward {:?} with force {} (vel {:?})",
            target,
            self.force,
            self.ball.body.vel
        );
        true
    }

    /// Put a fresh ball back on the start position, leaving the holed state
    pub fn reset_ball(&mut self) {
        self.respawn_ball();
    }

    /// Replace the ball wholesale, discarding any velocity
    pub(super) fn respawn_ball(&mut self) {
        self.ball = Ball::spawn(self.start, self.settings.ball_size);
    }
}
