pub mod aabb;
pub mod detection;
pub mod manifold;

pub use aabb::Aabb;
pub use detection::{check_circle_circle, check_circle_segment, check_collision};
pub use manifold::{CollisionManifold, ContactPoint};
