//! Course definitions
//!
//! A course is the input for building a level: where the ball starts, where
//! the goal sits, and which black holes are in the way.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, BodyKind};

/// One black hole on a course
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleDef {
    /// Center
    pub position: Vec2,
    /// Side of the square hitbox; the pull reaches half of this from the center
    pub size: f32,
    /// Velocity added per tick toward the center (negative pushes away)
    pub attraction: f32,
}

impl ObstacleDef {
    pub fn new(position: Vec2, size: f32, attraction: f32) -> Self {
        Self {
            position,
            size,
            attraction,
        }
    }

    pub fn to_body(&self) -> Body {
        Body::new(
            BodyKind::Attractor {
                strength: self.attraction,
            },
            self.position,
            self.size,
        )
    }
}

/// Everything needed to lay out a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDef {
    pub start: Vec2,
    pub goal: Vec2,
    #[serde(default)]
    pub obstacles: Vec<ObstacleDef>,
}

impl CourseDef {
    /// Built-in course: tee in the top-left, goal near the bottom, with a
    /// pair of black holes flanking the direct line.
    pub fn sample() -> Self {
        Self {
            start: Vec2::new(20.0, 20.0),
            goal: Vec2::new(250.0, 400.0),
            obstacles: vec![
                ObstacleDef::new(Vec2::new(170.0, 190.0), 80.0, 0.02),
                ObstacleDef::new(Vec2::new(90.0, 300.0), 100.0, 0.04),
                ObstacleDef::new(Vec2::new(380.0, 330.0), 120.0, 0.03),
            ],
        }
    }

    /// Parse a course from JSON. Vectors are `[x, y]` arrays.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacle_to_body() {
        let def = ObstacleDef::new(Vec2::new(100.0, 50.0), 40.0, 0.1);
        let body = def.to_body();
        assert_eq!(body.pos(), Vec2::new(100.0, 50.0));
        assert_eq!(body.attraction(), Some(0.1));
        assert_eq!(body.influence_radius(), 20.0);
        assert!(!body.is_moving());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "start": [20.0, 20.0],
            "goal": [250.0, 400.0],
            "obstacles": [
                { "position": [120.0, 200.0], "size": 60.0, "attraction": 0.1 }
            ]
        }"#;
        let course = CourseDef::from_json(json).unwrap();
        assert_eq!(course.start, Vec2::new(20.0, 20.0));
        assert_eq!(course.obstacles.len(), 1);
        assert_eq!(course.obstacles[0].attraction, 0.1);
    }

    #[test]
    fn test_from_json_without_obstacles() {
        let course = CourseDef::from_json(r#"{ "start": [0, 0], "goal": [10, 10] }"#).unwrap();
        assert!(course.obstacles.is_empty());
    }

    #[test]
    fn test_from_json_missing_goal_fails() {
        assert!(CourseDef::from_json(r#"{ "start": [0, 0] }"#).is_err());
    }

    #[test]
    fn test_sample_round_trips_through_json() {
        let course = CourseDef::sample();
        let json = serde_json::to_string(&course).unwrap();
        assert_eq!(CourseDef::from_json(&json).unwrap(), course);
    }
}
