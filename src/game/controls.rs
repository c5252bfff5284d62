//! Per-frame player commands and their effect on the world.

use super::session::Ball;
use crate::world::PhysicsWorld;

/// Commands gathered from one frame of window events and held keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// SPACE went down this frame.
    pub launch: bool,
    /// LEFT is held.
    pub rotate_left: bool,
    /// RIGHT is held.
    pub rotate_right: bool,
    /// The window was asked to close.
    pub close_requested: bool,
}

impl FrameInput {
    /// Net platform rotation for this frame; opposite keys cancel out.
    pub fn rotation_delta(&self, step: f64) -> f64 {
        let mut delta = 0.0;
        if self.rotate_left {
            delta -= step;
        }
        if self.rotate_right {
            delta += step;
        }
        delta
    }
}

/// Overwrites every ball's vertical velocity, keeping its horizontal velocity.
pub fn launch_balls(world: &mut PhysicsWorld, balls: &[Ball], vertical_velocity: f64) {
    for ball in balls {
        if let Some(body) = world.body_mut(ball.handle) {
            body.linear_velocity.y = vertical_velocity;
        }
    }
}

/// Turns the platform by `delta` radians. The angle is not clamped.
pub fn rotate_platform(world: &mut PhysicsWorld, platform: usize, delta: f64) {
    if let Some(body) = world.body_mut(platform) {
        body.rotation += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_delta() {
        let left = FrameInput { rotate_left: true, ..Default::default() };
        let right = FrameInput { rotate_right: true, ..Default::default() };
        let both = FrameInput { rotate_left: true, rotate_right: true, ..Default::default() };
        assert_eq!(left.rotation_delta(0.05), -0.05);
        assert_eq!(right.rotation_delta(0.05), 0.05);
        assert_eq!(both.rotation_delta(0.05), 0.0);
        assert_eq!(FrameInput::default().rotation_delta(0.05), 0.0);
    }
}
