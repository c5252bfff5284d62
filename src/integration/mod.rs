pub mod integrator;

pub use integrator::{integrate_positions, integrate_velocities};
