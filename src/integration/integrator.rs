//! Semi-implicit Euler integration, split in two halves so contacts can be
//! resolved between the velocity and the position update.

use crate::objects::{BodyType, RigidBody};

/// Velocity half-step: `v += F/m * dt`, `w += T/I * dt`. Clears the accumulators.
pub fn integrate_velocities(body: &mut RigidBody, dt: f64) {
    if body.body_type != BodyType::Dynamic {
        return;
    }

    body.linear_velocity += body.force * body.inv_mass * dt;
    body.angular_velocity += body.torque * body.inv_inertia * dt;
    body.clear_accumulators();
}

/// Position half-step: `p += v * dt`, `theta += w * dt`.
///
/// Dynamic rotations are wrapped to [-PI, PI]. Kinematic rotations are left
/// untouched so that angles driven from outside stay exactly as they were set.
pub fn integrate_positions(body: &mut RigidBody, dt: f64) {
    match body.body_type {
        BodyType::Static => {}
        BodyType::Kinematic => {
            body.position += body.linear_velocity * dt;
            body.rotation += body.angular_velocity * dt;
        }
        BodyType::Dynamic => {
            body.position += body.linear_velocity * dt;
            body.rotation = wrap_angle(body.rotation + body.angular_velocity * dt);
        }
    }
}

/// Wraps an angle in radians to the range [-PI, PI].
fn wrap_angle(angle: f64) -> f64 {
    angle.sin().atan2(angle.cos())
}
