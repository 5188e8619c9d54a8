//! Per-frame simulation tick
//!
//! Advances a level by one step in a fixed order: integrate, bounds check,
//! contacts, attraction, goal.

use glam::Vec2;

use super::collision::{find_contacts, out_of_bounds, total_pull};
use super::state::{BallState, GameEvent, Level};

/// Advance the level by one tick and report what happened
pub fn tick(level: &mut Level) -> Vec<GameEvent> {
    let mut events = Vec::new();
    level.tick_count += 1;

    level.ball.body.update();

    // Out of play: put a fresh ball on the tee
    let margin = level.settings.out_of_bounds_margin();
    if out_of_bounds(level.ball.pos(), &level.playfield, margin) {
        log::info!(
            "Ball out of bounds at {:?} (tick {}), respawning",
            level.ball.pos(),
            level.tick_count
        );
        level.respawn_ball();
        events.push(GameEvent::Respawned);
    }

    // Rebuilt from scratch every tick
    level.contacts = find_contacts(&level.ball.body, &level.obstacles);

    let pull = total_pull(level.ball.pos(), &level.obstacles, &level.contacts);
    level.ball.body.vel += pull;

    // Runs every tick, so a ball drifting back into the goal stops again
    if level.ball.body.collides_with(&level.goal) {
        level.ball.body.vel = Vec2::ZERO;
        if level.ball.state != BallState::Holed {
            level.ball.state = BallState::Holed;
            log::info!("Ball holed at tick {}", level.tick_count);
            events.push(GameEvent::Holed);
        }
    }

    // Keep idle/rolling in step with the velocity
    match level.ball.state {
        BallState::Rolling if !level.ball.body.is_moving() => {
            log::debug!("Ball came to rest at {:?}", level.ball.pos());
            level.ball.state = BallState::Idle;
        }
        BallState::Idle if level.ball.body.is_moving() => {
            level.ball.state = BallState::Rolling;
        }
        _ => {}
    }

    events
}

impl Level {
    /// Advance one tick. See [`tick`].
    pub fn tick(&mut self) -> Vec<GameEvent> {
        tick(self)
    }
}
