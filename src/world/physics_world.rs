use log::{debug, trace};

use crate::collision::{self, CollisionManifold};
use crate::integration::{integrate_positions, integrate_velocities};
use crate::objects::RigidBody;
use crate::Vec2;

pub struct PhysicsWorld {
    pub bodies: Vec<RigidBody>,
    pub gravity: Vec2,
    /// Impulse passes over the contact set per step.
    pub collision_iterations: usize,
    /// Contacts detected during the last step.
    pub contacts: Vec<CollisionManifold>,
}

impl PhysicsWorld {
    const DEFAULT_COLLISION_ITERATIONS: usize = 10;
    const POSITIONAL_CORRECTION_PERCENT: f64 = 0.2; // Share of the penetration removed per step
    const POSITIONAL_CORRECTION_SLOP: f64 = 0.01; // Penetration tolerated without correction

    /// Creates an empty world with y-down gravity.
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            gravity: Vec2::new(0.0, 981.0),
            collision_iterations: Self::DEFAULT_COLLISION_ITERATIONS,
            contacts: Vec::new(),
        }
    }

    /// Adds a rigid body to the world and returns its handle.
    pub fn add_body(&mut self, body: RigidBody) -> usize {
        let index = self.bodies.len();
        debug!(
            "registered {:?} body {} at ({:.1}, {:.1})",
            body.body_type, index, body.position.x, body.position.y
        );
        self.bodies.push(body);
        index
    }

    pub fn body(&self, handle: usize) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    pub fn body_mut(&mut self, handle: usize) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle)
    }

    /// Checks every pair with at least one dynamic body for contact.
    fn check_collisions(&mut self) {
        self.contacts.clear();

        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let body_a = &self.bodies[i];
                let body_b = &self.bodies[j];

                if !body_a.is_dynamic() && !body_b.is_dynamic() {
                    continue;
                }
                if !body_a.calculate_aabb().overlaps(&body_b.calculate_aabb()) {
                    continue;
                }
                if let Some(manifold) = collision::check_collision(body_a, i, body_b, j) {
                    self.contacts.push(manifold);
                }
            }
        }
    }

    /// Applies normal and friction impulses for a single contact.
    fn apply_collision_impulse(&mut self, manifold: &CollisionManifold) {
        // Pairs are generated with body_a < body_b
        let (head, tail) = self.bodies.split_at_mut(manifold.body_b);
        let body_a = &mut head[manifold.body_a];
        let body_b = &mut tail[0];

        let normal = manifold.normal;
        let contact_point = manifold.contact.midpoint();
        let r_a = contact_point - body_a.position;
        let r_b = contact_point - body_b.position;

        let relative_velocity = body_b.velocity_at(r_b) - body_a.velocity_at(r_a);
        let relative_velocity_normal = relative_velocity.dot(normal);

        // Already separating
        if relative_velocity_normal > 0.0 {
            return;
        }

        let ra_cross_n = r_a.perp_dot(normal);
        let rb_cross_n = r_b.perp_dot(normal);
        let effective_mass_normal = body_a.inv_mass
            + body_b.inv_mass
            + ra_cross_n * ra_cross_n * body_a.inv_inertia
            + rb_cross_n * rb_cross_n * body_b.inv_inertia;
        if effective_mass_normal <= 0.0 {
            return;
        }

        let e = body_a.surface.combined_restitution(&body_b.surface);
        let j = -(1.0 + e) * relative_velocity_normal / effective_mass_normal;
        let impulse = normal * j;
        body_a.apply_impulse(-impulse, r_a);
        body_b.apply_impulse(impulse, r_b);

        trace!(
            "contact {}-{}: vn={:.3} e={:.2} j={:.3} depth={:.3}",
            manifold.body_a, manifold.body_b, relative_velocity_normal, e, j, manifold.depth
        );

        // Coulomb friction, bounded by the normal impulse
        let mu = body_a.surface.combined_friction(&body_b.surface);
        if mu <= 0.0 {
            return;
        }
        let relative_velocity = body_b.velocity_at(r_b) - body_a.velocity_at(r_a);
        let tangent = (relative_velocity - normal * relative_velocity.dot(normal)).normalize_or_zero();
        if tangent == Vec2::ZERO {
            return;
        }
        let ra_cross_t = r_a.perp_dot(tangent);
        let rb_cross_t = r_b.perp_dot(tangent);
        let effective_mass_tangent = body_a.inv_mass
            + body_b.inv_mass
            + ra_cross_t * ra_cross_t * body_a.inv_inertia
            + rb_cross_t * rb_cross_t * body_b.inv_inertia;
        let max_friction = j * mu;
        let jt = (-relative_velocity.dot(tangent) / effective_mass_tangent).clamp(-max_friction, max_friction);
        let friction_impulse = tangent * jt;
        body_a.apply_impulse(-friction_impulse, r_a);
        body_b.apply_impulse(friction_impulse, r_b);
    }

    /// Pushes overlapping bodies apart in proportion to their inverse masses.
    fn apply_positional_correction(&mut self, manifold: &CollisionManifold) {
        let correction_magnitude = (manifold.depth - Self::POSITIONAL_CORRECTION_SLOP).max(0.0);
        if correction_magnitude < 1e-9 {
            return;
        }

        let (head, tail) = self.bodies.split_at_mut(manifold.body_b);
        let body_a = &mut head[manifold.body_a];
        let body_b = &mut tail[0];

        let total_inv_mass = body_a.inv_mass + body_b.inv_mass;
        if total_inv_mass < 1e-9 {
            return;
        }

        let correction =
            manifold.normal * (correction_magnitude / total_inv_mass * Self::POSITIONAL_CORRECTION_PERCENT);
        body_a.position -= correction * body_a.inv_mass;
        body_b.position += correction * body_b.inv_mass;
    }

    /// Advances the simulation by one time step `dt`. A non-positive `dt` does nothing.
    pub fn step(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }

        // 1. Gravity
        let gravity = self.gravity;
        for body in self.bodies.iter_mut().filter(|body| body.is_dynamic()) {
            let weight = gravity * body.mass;
            body.apply_force(weight);
        }

        // 2. Velocities
        for body in self.bodies.iter_mut() {
            integrate_velocities(body, dt);
        }

        // 3. Contacts
        self.check_collisions();
        let contacts = std::mem::take(&mut self.contacts);
        for _ in 0..self.collision_iterations {
            for manifold in &contacts {
                self.apply_collision_impulse(manifold);
            }
        }

        // 4. Positions
        for body in self.bodies.iter_mut() {
            integrate_positions(body, dt);
        }

        // 5. Penetration cleanup
        for manifold in &contacts {
            self.apply_positional_correction(manifold);
        }
        self.contacts = contacts;
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
