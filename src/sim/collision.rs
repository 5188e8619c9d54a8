//! Collision detection and response
//!
//! The ball is tested against every obstacle each tick. There is no broad
//! phase: a level holds one ball and a handful of obstacles.

use glam::Vec2;

use super::body::Body;
use super::rect::Rectangle;

/// Indices (in obstacle order) of every obstacle the ball overlaps
pub fn find_contacts(ball: &Body, obstacles: &[Body]) -> Vec<usize> {
    obstacles
        .iter()
        .enumerate()
        .filter(|(_, obstacle)| ball.collides_with(obstacle))
        .map(|(i, _)| i)
        .collect()
}

/// Velocity change an obstacle applies to a ball centered at `ball_pos`
///
/// Only attractors pull, and only while the ball center is strictly inside the
/// influence radius. The pull has magnitude `strength` and points from the
/// ball toward the obstacle center. Coincident centers have no direction and
/// yield no pull.
pub fn attraction_pull(ball_pos: Vec2, obstacle: &Body) -> Vec2 {
    let Some(strength) = obstacle.attraction() else {
        return Vec2::ZERO;
    };

    let to_center = obstacle.pos() - ball_pos;
    let dist = to_center.length();
    if dist <= 0.0 || dist >= obstacle.influence_radius() {
        return Vec2::ZERO;
    }

    to_center / dist * strength
}

/// Summed pull of the contacted obstacles
pub fn total_pull(ball_pos: Vec2, obstacles: &[Body], contacts: &[usize]) -> Vec2 {
    contacts
        .iter()
        .filter_map(|&i| obstacles.get(i))
        .map(|obstacle| attraction_pull(ball_pos, obstacle))
        .fold(Vec2::ZERO, |acc, pull| acc + pull)
}

/// Check if a ball position has left the playfield grown by `margin`
pub fn out_of_bounds(pos: Vec2, playfield: &Rectangle, margin: f32) -> bool {
    let bounds = playfield.expanded(margin);

    // NaN positions fail every comparison, so test for "inside" and negate
    !(pos.x >= bounds.left()
        && pos.x <= bounds.right()
        && pos.y >= bounds.top()
        && pos.y <= bounds.bottom())
}
