//! Fixed parameters of a session.

use std::time::Duration;

use super::BALL_COUNT;
use crate::Vec2;

/// Every constant the session uses, in world units (pixels, y down) and seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub window_title: &'static str,
    pub arena_width: f64,
    pub arena_height: f64,
    pub gravity: Vec2,
    /// Simulated time per frame, independent of wall-clock frame time.
    pub timestep: f64,
    pub target_fps: u32,
    pub countdown: Duration,

    pub ball_start_height: f64,
    pub ball_x_offsets: [f64; BALL_COUNT],

    pub platform_pivot: Vec2,
    pub platform_length: f64,
    pub platform_initial_angle: f64,
    pub platform_restitution: f64,
    pub platform_friction: f64,

    /// Half-thickness of the platform and walls.
    pub segment_radius: f64,
    pub wall_restitution: f64,

    /// Vertical velocity every ball gets on launch (negative is up).
    pub launch_velocity: f64,
    /// Platform rotation per frame while a rotate key is held, in radians.
    pub rotate_step: f64,
}

impl SessionConfig {
    /// A ball whose centre passes this line has left the arena.
    pub fn game_over_line(&self) -> f64 {
        self.arena_height
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            window_title: "Bouncing Balls with Different Materials",
            arena_width: 800.0,
            arena_height: 600.0,
            gravity: Vec2::new(0.0, 981.0),
            timestep: 1.0 / 60.0,
            target_fps: 60,
            countdown: Duration::from_secs(2),
            ball_start_height: 50.0,
            ball_x_offsets: [300.0, 400.0, 500.0],
            platform_pivot: Vec2::new(400.0, 550.0),
            platform_length: 200.0,
            platform_initial_angle: 0.1,
            platform_restitution: 1.0,
            platform_friction: 0.8,
            segment_radius: 5.0,
            wall_restitution: 1.0,
            launch_velocity: -700.0,
            rotate_step: 0.05,
        }
    }
}
