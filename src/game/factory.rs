//! Builds the session's bodies and registers them with the world.

use log::warn;

use super::config::SessionConfig;
use super::material;
use super::session::Ball;
use super::BallChoices;
use crate::common::Surface;
use crate::error::{Error, Result};
use crate::objects::RigidBody;
use crate::shapes::{Circle, Segment, Shape};
use crate::world::PhysicsWorld;
use crate::Vec2;

/// Handles of every body in a populated arena.
#[derive(Debug, Clone, PartialEq)]
pub struct Arena {
    pub balls: Vec<Ball>,
    pub platform: usize,
    pub walls: [usize; 4],
}

/// Creates a dynamic ball of the selected material at `(x, start height)`.
/// Returns `None`, without touching the world, when the selector has no catalog entry.
pub fn create_ball(world: &mut PhysicsWorld, selector: i64, x: f64, config: &SessionConfig) -> Option<Ball> {
    let (material, properties) = material::lookup(selector)?;

    let body = RigidBody::new(properties.mass, Shape::Circle(Circle::new(properties.radius)))
        .with_position(Vec2::new(x, config.ball_start_height))
        .with_surface(Surface::elastic(properties.restitution));
    let handle = world.add_body(body);
    Some(Ball { handle, material })
}

/// Creates the kinematic platform centred on the pivot and turned to `angle`.
pub fn create_platform(world: &mut PhysicsWorld, angle: f64, config: &SessionConfig) -> usize {
    let segment = Segment::centered(config.platform_length, config.segment_radius);
    let body = RigidBody::new_kinematic(Shape::Segment(segment), config.platform_pivot, angle)
        .with_surface(Surface::new(config.platform_restitution, config.platform_friction));
    world.add_body(body)
}

/// Creates the four static walls tracing the arena rectangle: top, bottom, left, right.
pub fn create_boundary(world: &mut PhysicsWorld, config: &SessionConfig) -> [usize; 4] {
    let (w, h) = (config.arena_width, config.arena_height);
    let edges = [
        (Vec2::new(0.0, 0.0), Vec2::new(w, 0.0)),
        (Vec2::new(0.0, h), Vec2::new(w, h)),
        (Vec2::new(0.0, 0.0), Vec2::new(0.0, h)),
        (Vec2::new(w, 0.0), Vec2::new(w, h)),
    ];

    edges.map(|(a, b)| {
        let wall = RigidBody::new_static(Shape::Segment(Segment::new(a, b, config.segment_radius)), Vec2::ZERO, 0.0)
            .with_surface(Surface::elastic(config.wall_restitution));
        world.add_body(wall)
    })
}

/// Creates the balls, then the platform and the walls.
///
/// Every ball is attempted first; if any selector fails, the error is returned
/// before the platform or walls exist.
pub fn populate_arena(world: &mut PhysicsWorld, choices: &BallChoices, config: &SessionConfig) -> Result<Arena> {
    let created: Vec<Option<Ball>> = choices
        .iter()
        .zip(config.ball_x_offsets)
        .map(|(&selector, x)| create_ball(world, selector, x, config))
        .collect();

    if let Some(missing) = created.iter().position(Option::is_none) {
        let selector = choices[missing];
        warn!("ball {} rejected: selector {} has no catalog entry", missing + 1, selector);
        return Err(Error::InvalidSelection { ball: missing + 1, selector });
    }

    let balls = created.into_iter().flatten().collect();
    let platform = create_platform(world, config.platform_initial_angle, config);
    let walls = create_boundary(world, config);
    Ok(Arena { balls, platform, walls })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::material::Material;
    use crate::objects::BodyType;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_create_ball_rubber() {
        let config = SessionConfig::default();
        let mut world = PhysicsWorld::new();
        let ball = create_ball(&mut world, 1, 300.0, &config).unwrap();
        assert_eq!(ball.material, Material::Rubber);

        let body = world.body(ball.handle).unwrap();
        assert_eq!(body.body_type, BodyType::Dynamic);
        assert_eq!(body.mass, 1.0);
        assert_eq!(body.shape.radius(), 20.0);
        assert_eq!(body.surface.restitution, 0.8);
        assert_eq!(body.position, Vec2::new(300.0, 50.0));
    }

    #[test]
    fn test_create_ball_steel() {
        let config = SessionConfig::default();
        let mut world = PhysicsWorld::new();
        let ball = create_ball(&mut world, 2, 500.0, &config).unwrap();
        let body = world.body(ball.handle).unwrap();
        assert_eq!(body.mass, 3.0);
        assert_eq!(body.shape.radius(), 20.0);
        assert_eq!(body.surface.restitution, 0.3);
        assert_eq!(body.position, Vec2::new(500.0, 50.0));
    }

    #[test]
    fn test_create_ball_wood_yields_nothing() {
        let config = SessionConfig::default();
        let mut world = PhysicsWorld::new();
        assert!(create_ball(&mut world, 3, 400.0, &config).is_none());
        assert!(create_ball(&mut world, 9, 400.0, &config).is_none());
        assert!(world.bodies.is_empty());
    }

    #[test]
    fn test_create_platform() {
        let config = SessionConfig::default();
        let mut world = PhysicsWorld::new();
        let handle = create_platform(&mut world, 0.1, &config);
        let body = world.body(handle).unwrap();

        assert_eq!(body.body_type, BodyType::Kinematic);
        assert_eq!(body.position, Vec2::new(400.0, 550.0));
        assert_eq!(body.rotation, 0.1);
        assert_eq!(body.surface.restitution, 1.0);
        assert_eq!(body.surface.friction, 0.8);
        match body.shape {
            Shape::Segment(segment) => {
                assert!((segment.length() - 200.0).abs() < EPSILON);
                assert_eq!(segment.midpoint(), Vec2::ZERO);
                assert_eq!(segment.radius, 5.0);
            }
            Shape::Circle(_) => panic!("platform must be a segment"),
        }
    }

    #[test]
    fn test_create_boundary_traces_arena() {
        let config = SessionConfig::default();
        let mut world = PhysicsWorld::new();
        let walls = create_boundary(&mut world, &config);

        let expected = [
            (Vec2::new(0.0, 0.0), Vec2::new(800.0, 0.0)),
            (Vec2::new(0.0, 600.0), Vec2::new(800.0, 600.0)),
            (Vec2::new(0.0, 0.0), Vec2::new(0.0, 600.0)),
            (Vec2::new(800.0, 0.0), Vec2::new(800.0, 600.0)),
        ];
        for (handle, (a, b)) in walls.iter().zip(expected) {
            let wall = world.body(*handle).unwrap();
            assert_eq!(wall.body_type, BodyType::Static);
            assert_eq!(wall.surface.restitution, 1.0);
            assert_eq!(wall.world_segment(), Some((a, b)));
        }
    }

    #[test]
    fn test_populate_arena_valid() {
        let config = SessionConfig::default();
        let mut world = PhysicsWorld::new();
        let arena = populate_arena(&mut world, &[1, 2, 1], &config).unwrap();

        assert_eq!(arena.balls.len(), 3);
        assert_eq!(world.bodies.len(), 8);
        let xs: Vec<f64> = arena.balls.iter().map(|b| world.bodies[b.handle].position.x).collect();
        assert_eq!(xs, vec![300.0, 400.0, 500.0]);
        let materials: Vec<Material> = arena.balls.iter().map(|b| b.material).collect();
        assert_eq!(materials, vec![Material::Rubber, Material::Steel, Material::Rubber]);
        assert_eq!(world.bodies[arena.platform].body_type, BodyType::Kinematic);
        assert!(arena.walls.iter().all(|&w| world.bodies[w].body_type == BodyType::Static));
    }

    #[test]
    fn test_populate_arena_wood_aborts_before_platform_and_walls() {
        let config = SessionConfig::default();
        let mut world = PhysicsWorld::new();
        let err = populate_arena(&mut world, &[1, 3, 1], &config).unwrap_err();

        assert!(matches!(err, Error::InvalidSelection { ball: 2, selector: 3 }));
        // Only the two valid balls were registered
        assert_eq!(world.bodies.len(), 2);
        assert!(world.bodies.iter().all(|b| b.is_dynamic()));
    }
}
