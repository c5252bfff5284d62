pub mod objects;
pub mod integration;
pub mod collision;
pub mod shapes;
pub mod world;
pub mod common;
pub mod game;
pub mod error;

/// 2D vector type used throughout the engine (f64, y pointing down the screen).
pub type Vec2 = glam::DVec2;

// Re-export key types for easier use
pub use objects::{BodyType, RigidBody};
pub use shapes::{Circle, Segment, Shape};
pub use world::PhysicsWorld;
pub use common::Surface;
pub use error::{Error, Result};
pub use game::{
    config::SessionConfig,
    controls::FrameInput,
    material::{Material, MaterialProperties},
    session::{Ball, Session, SessionState, Termination},
};
