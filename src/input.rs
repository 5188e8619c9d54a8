//! Player input mapped onto level commands
//!
//! Platform layers convert raw pointer positions into level-space coordinates
//! before building an `InputEvent`; nothing here knows about screens or canvases.

use glam::Vec2;

use crate::sim::Level;

/// Input the level understands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer click at a level-space point: shoot toward it
    Click(Vec2),
    /// Scroll wheel delta: scrolling down (positive) weakens the shot
    Wheel(f32),
}

/// Apply one input event to the level
///
/// Events arrive between ticks and take effect immediately.
pub fn apply_input(level: &mut Level, event: InputEvent) {
    match event {
        InputEvent::Click(target) => {
            if !level.launch(target) {
                log::trace!("Click at {:?} ignored", target);
            }
        }
        InputEvent::Wheel(delta) => level.adjust_force(-delta),
    }
}

/// Apply a batch of events in order
pub fn apply_inputs(level: &mut Level, events: impl IntoIterator<Item = InputEvent>) {
    for event in events {
        apply_input(level, event);
    }
}
