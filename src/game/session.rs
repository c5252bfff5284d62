//! One play session: the world, its bodies, and the run state.

use log::info;

use super::config::SessionConfig;
use super::controls::{self, FrameInput};
use super::factory;
use super::material::Material;
use super::BallChoices;
use crate::error::Result;
use crate::objects::RigidBody;
use crate::world::PhysicsWorld;

/// Non-owning handle to a ball body plus the material it was made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub handle: usize,
    pub material: Material,
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    WindowClosed,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Stopped(Termination),
}

/// All mutable state of a session, created once the arena is populated and
/// dropped when the front-end shuts down.
pub struct Session {
    config: SessionConfig,
    world: PhysicsWorld,
    balls: Vec<Ball>,
    platform: usize,
    state: SessionState,
    frame: u64,
}

impl Session {
    /// Builds the world and every body. Fails, without a running session, when
    /// any choice does not resolve to a cataloged material.
    pub fn start(config: SessionConfig, choices: &BallChoices) -> Result<Self> {
        let mut world = PhysicsWorld::new();
        world.gravity = config.gravity;
        let arena = factory::populate_arena(&mut world, choices, &config)?;

        info!(
            "session started with {:?}",
            arena.balls.iter().map(|ball| ball.material).collect::<Vec<_>>()
        );
        Ok(Self {
            config,
            world,
            balls: arena.balls,
            platform: arena.platform,
            state: SessionState::Running,
            frame: 0,
        })
    }

    /// Applies one frame of player commands. A close request stops the session.
    pub fn apply_input(&mut self, input: &FrameInput) {
        if !self.is_running() {
            return;
        }
        if input.close_requested {
            self.stop(Termination::WindowClosed);
            return;
        }
        if input.launch {
            controls::launch_balls(&mut self.world, &self.balls, self.config.launch_velocity);
        }
        let delta = input.rotation_delta(self.config.rotate_step);
        if delta != 0.0 {
            controls::rotate_platform(&mut self.world, self.platform, delta);
        }
    }

    /// Advances the world by exactly one fixed timestep.
    pub fn step(&mut self) {
        if !self.is_running() {
            return;
        }
        self.world.step(self.config.timestep);
        self.frame += 1;
    }

    /// Stops the session the first time any ball has dropped below the arena.
    /// Returns `true` only on that transition.
    pub fn check_game_over(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let line = self.config.game_over_line();
        let fallen = self
            .balls
            .iter()
            .filter_map(|ball| self.world.body(ball.handle))
            .any(|body| body.position.y > line);
        if fallen {
            self.stop(Termination::GameOver);
        }
        fallen
    }

    fn stop(&mut self, reason: Termination) {
        info!("session stopped after {} frames: {:?}", self.frame, reason);
        self.state = SessionState::Stopped(reason);
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn ball_body(&self, ball: &Ball) -> Option<&RigidBody> {
        self.world.body(ball.handle)
    }

    pub fn platform(&self) -> usize {
        self.platform
    }

    pub fn platform_angle(&self) -> f64 {
        self.world.body(self.platform).map_or(0.0, |body| body.rotation)
    }

    /// Frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::objects::BodyType;
    use crate::Vec2;
    const EPSILON: f64 = 1e-9;

    fn running_session() -> Session {
        Session::start(SessionConfig::default(), &[1, 2, 1]).unwrap()
    }

    fn hold(rotate_left: bool, rotate_right: bool) -> FrameInput {
        FrameInput { rotate_left, rotate_right, ..Default::default() }
    }

    #[test]
    fn test_start_populates_arena() {
        let session = running_session();
        let world = session.world();

        assert!(session.is_running());
        assert_eq!(session.balls().len(), 3);
        assert_eq!(world.bodies.len(), 8);
        let count = |t: BodyType| world.bodies.iter().filter(|b| b.body_type == t).count();
        assert_eq!(count(BodyType::Dynamic), 3);
        assert_eq!(count(BodyType::Kinematic), 1);
        assert_eq!(count(BodyType::Static), 4);

        for (ball, x) in session.balls().iter().zip([300.0, 400.0, 500.0]) {
            let body = session.ball_body(ball).unwrap();
            assert_eq!(body.position, Vec2::new(x, 50.0));
        }
        assert_eq!(world.bodies[session.platform()].position, Vec2::new(400.0, 550.0));
        assert_eq!(session.platform_angle(), 0.1);
        assert_eq!(world.gravity, Vec2::new(0.0, 981.0));
    }

    #[test]
    fn test_start_rejects_wood() {
        let result = Session::start(SessionConfig::default(), &[1, 3, 1]);
        assert!(matches!(result, Err(Error::InvalidSelection { ball: 2, selector: 3 })));
    }

    #[test]
    fn test_start_rejects_saturated_selector() {
        let result = Session::start(SessionConfig::default(), &[i64::MAX, 1, 1]);
        assert!(matches!(result, Err(Error::InvalidSelection { ball: 1, selector: i64::MAX })));
    }

    #[test]
    fn test_balls_fall_monotonically_without_input() {
        let mut session = running_session();
        let mut previous: Vec<f64> = session
            .balls()
            .iter()
            .map(|b| session.ball_body(b).unwrap().position.y)
            .collect();

        for _ in 0..30 {
            session.apply_input(&FrameInput::default());
            session.step();
            let current: Vec<f64> = session
                .balls()
                .iter()
                .map(|b| session.ball_body(b).unwrap().position.y)
                .collect();
            for (now, before) in current.iter().zip(&previous) {
                assert!(now > before, "ball rose from {before} to {now}");
            }
            previous = current;
        }
        assert_eq!(session.frame(), 30);
        assert!(!session.check_game_over());
    }

    #[test]
    fn test_launch_overwrites_vertical_velocity_only() {
        let mut session = running_session();
        let balls = session.balls().to_vec();
        let priors = [Vec2::new(37.0, 250.0), Vec2::new(-12.5, -40.0), Vec2::new(0.0, 0.0)];
        for (ball, v) in balls.iter().zip(priors) {
            session.world.bodies[ball.handle].linear_velocity = v;
        }

        session.apply_input(&FrameInput { launch: true, ..Default::default() });

        for (ball, v) in balls.iter().zip(priors) {
            let velocity = session.ball_body(ball).unwrap().linear_velocity;
            assert_eq!(velocity.y, -700.0);
            assert_eq!(velocity.x, v.x);
        }
    }

    #[test]
    fn test_holding_left_rotates_platform_unbounded() {
        let mut session = running_session();
        let k = 100;
        for _ in 0..k {
            session.apply_input(&hold(true, false));
            session.step();
        }
        let expected = 0.1 - 0.05 * k as f64;
        assert!((session.platform_angle() - expected).abs() < EPSILON, "angle {}", session.platform_angle());
    }

    #[test]
    fn test_holding_right_rotates_platform() {
        let mut session = running_session();
        for _ in 0..7 {
            session.apply_input(&hold(false, true));
        }
        assert!((session.platform_angle() - (0.1 + 0.35)).abs() < EPSILON);
    }

    #[test]
    fn test_stepping_does_not_turn_platform() {
        let mut session = running_session();
        for _ in 0..10 {
            session.step();
        }
        assert_eq!(session.platform_angle(), 0.1);
        assert_eq!(session.world().bodies[session.platform()].position, Vec2::new(400.0, 550.0));
    }

    #[test]
    fn test_game_over_reported_once_and_freezes_session() {
        let mut session = running_session();
        let handle = session.balls()[1].handle;
        session.world.bodies[handle].position.y = 600.0;
        assert!(!session.check_game_over(), "600 is still inside the arena");

        session.world.bodies[handle].position.y = 600.5;
        assert!(session.check_game_over());
        assert_eq!(session.state(), SessionState::Stopped(Termination::GameOver));
        assert!(!session.check_game_over());

        let frame = session.frame();
        let snapshot = session.world().bodies.clone();
        session.apply_input(&FrameInput { launch: true, rotate_left: true, ..Default::default() });
        session.step();
        assert_eq!(session.frame(), frame);
        assert_eq!(session.world().bodies, snapshot);
    }

    #[test]
    fn test_close_request_stops_session() {
        let mut session = running_session();
        session.apply_input(&FrameInput { close_requested: true, launch: true, ..Default::default() });
        assert_eq!(session.state(), SessionState::Stopped(Termination::WindowClosed));
        assert_eq!(session.ball_body(&session.balls()[0]).unwrap().linear_velocity, Vec2::ZERO);
        assert!(!session.check_game_over());
    }
}
