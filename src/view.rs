//! Read-only snapshot of a level for renderers
//!
//! Renderers draw from a `LevelView` instead of reaching into the simulation,
//! and the snapshot serializes to JSON for drivers that hand frames to another
//! process or language.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{BallState, Body, Level};

/// Position and size of a round body
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyView {
    pub pos: Vec2,
    pub radius: f32,
}

impl BodyView {
    fn of(body: &Body) -> Self {
        Self {
            pos: body.pos(),
            radius: body.radius(),
        }
    }
}

/// A black hole as drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleView {
    pub pos: Vec2,
    pub radius: f32,
    /// How far the pull reaches
    pub influence_radius: f32,
    pub strength: f32,
    /// Ball touched it on the last tick
    pub in_contact: bool,
}

/// Launch force, for drawing the aim ring
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForceView {
    pub value: f32,
    pub min: f32,
    pub max: f32,
    /// 0 at min force, 1 at max
    pub fraction: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelView {
    pub tick: u64,
    pub ball: BodyView,
    pub ball_state: BallState,
    pub force: ForceView,
    pub goal: BodyView,
    pub obstacles: Vec<ObstacleView>,
}

impl LevelView {
    pub fn capture(level: &Level) -> Self {
        let settings = level.settings();
        let obstacles = level
            .obstacles()
            .iter()
            .enumerate()
            .map(|(i, obstacle)| ObstacleView {
                pos: obstacle.pos(),
                radius: obstacle.radius(),
                influence_radius: obstacle.influence_radius(),
                strength: obstacle.attraction().unwrap_or(0.0),
                in_contact: level.contacts().contains(&i),
            })
            .collect();

        Self {
            tick: level.tick_count(),
            ball: BodyView::of(&level.ball().body),
            ball_state: level.ball().state,
            force: ForceView {
                value: level.force(),
                min: settings.min_force,
                max: settings.max_force,
                fraction: settings.force_fraction(level.force()),
            },
            goal: BodyView::of(level.goal()),
            obstacles,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::ObstacleDef;

    fn level() -> Level {
        Level::new(
            Settings::default(),
            Vec2::new(20.0, 20.0),
            Vec2::new(250.0, 400.0),
            &[
                ObstacleDef::new(Vec2::new(20.0, 30.0), 40.0, 0.1),
                ObstacleDef::new(Vec2::new(300.0, 300.0), 60.0, 0.2),
            ],
        )
    }

    #[test]
    fn test_capture_reports_bodies() {
        let mut level = level();
        level.set_force(55.0);
        let view = LevelView::capture(&level);

        assert_eq!(view.ball.pos, Vec2::new(20.0, 20.0));
        assert_eq!(view.ball.radius, 6.0);
        assert_eq!(view.goal.pos, Vec2::new(250.0, 400.0));
        assert_eq!(view.ball_state, BallState::Idle);
        assert_eq!(view.force.value, 55.0);
        assert!((view.force.fraction - 0.5).abs() < 1e-6);
        assert_eq!(view.obstacles.len(), 2);
        assert_eq!(view.obstacles[1].influence_radius, 30.0);
        assert_eq!(view.obstacles[1].strength, 0.2);
    }

    #[test]
    fn test_capture_marks_contacts() {
        let mut level = level();
        level.tick();
        let view = LevelView::capture(&level);
        assert_eq!(view.tick, 1);
        assert!(view.obstacles[0].in_contact);
        assert!(!view.obstacles[1].in_contact);
        assert_eq!(view.ball_state, BallState::Rolling);
    }

    #[test]
    fn test_json_shape() {
        let json = LevelView::capture(&level()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ball"]["pos"], serde_json::json!([20.0, 20.0]));
        assert_eq!(value["ball_state"], "Idle");
        assert_eq!(value["obstacles"].as_array().map(Vec::len), Some(2));
    }
}
