use crate::collision::Aabb;
use crate::common::Surface;
use crate::shapes::Shape;
use crate::Vec2;

/// How a body takes part in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    /// Moved by forces and contact impulses.
    Dynamic,
    /// Moved only by its own velocity or direct pose edits; pushes dynamic bodies but is never pushed.
    Kinematic,
    /// Never moves.
    Static,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    // Geometry
    pub shape: Shape,
    pub surface: Surface,
    pub body_type: BodyType,

    // Primary state
    pub position: Vec2, // World position of the body origin (centre of mass for dynamic bodies)
    pub rotation: f64,  // Radians
    pub linear_velocity: Vec2,
    pub angular_velocity: f64, // Radians per second

    // Accumulators for forces/torques applied during a time step
    pub force: Vec2,
    pub torque: f64,

    // Physical properties
    pub mass: f64,
    pub inv_mass: f64,    // 0.0 for static and kinematic bodies
    pub inertia: f64,     // Moment of inertia about the body origin
    pub inv_inertia: f64, // 0.0 for static and kinematic bodies
}

impl RigidBody {
    /// Creates a dynamic body with the given mass, placed at the origin.
    /// Inertia is derived from the shape. A non-positive mass yields a static body.
    pub fn new(mass: f64, shape: Shape) -> Self {
        if mass <= 0.0 {
            return Self::new_static(shape, Vec2::ZERO, 0.0);
        }
        let inertia = match &shape {
            Shape::Circle(circle) => circle.moment_of_inertia(mass),
            Shape::Segment(segment) => {
                let length = segment.length();
                (1.0 / 12.0) * mass * length * length
            }
        };
        let inv_inertia = if inertia > 0.0 { 1.0 / inertia } else { 0.0 };

        Self {
            shape,
            surface: Surface::default(),
            body_type: BodyType::Dynamic,
            position: Vec2::ZERO,
            rotation: 0.0,
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            force: Vec2::ZERO,
            torque: 0.0,
            mass,
            inv_mass: 1.0 / mass,
            inertia,
            inv_inertia,
        }
    }

    /// Creates an immovable body with its origin at `position`.
    pub fn new_static(shape: Shape, position: Vec2, rotation: f64) -> Self {
        Self::immovable(BodyType::Static, shape, position, rotation)
    }

    /// Creates a kinematic body with its origin at `position`.
    pub fn new_kinematic(shape: Shape, position: Vec2, rotation: f64) -> Self {
        Self::immovable(BodyType::Kinematic, shape, position, rotation)
    }

    fn immovable(body_type: BodyType, shape: Shape, position: Vec2, rotation: f64) -> Self {
        Self {
            shape,
            surface: Surface::default(),
            body_type,
            position,
            rotation,
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            force: Vec2::ZERO,
            torque: 0.0,
            mass: 0.0,
            inv_mass: 0.0,
            inertia: f64::INFINITY,
            inv_inertia: 0.0,
        }
    }

    /// Sets the surface properties, builder style.
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn is_dynamic(&self) -> bool {
        self.body_type == BodyType::Dynamic
    }

    /// Transforms a body-local point into world space.
    pub fn to_world(&self, local: Vec2) -> Vec2 {
        self.position + Vec2::from_angle(self.rotation).rotate(local)
    }

    /// World-space endpoints of a segment body, or `None` for other shapes.
    pub fn world_segment(&self) -> Option<(Vec2, Vec2)> {
        match &self.shape {
            Shape::Segment(segment) => Some((self.to_world(segment.a), self.to_world(segment.b))),
            Shape::Circle(_) => None,
        }
    }

    /// Calculates the world-space bounding box, including the shape's rounded outline.
    pub fn calculate_aabb(&self) -> Aabb {
        let radius = self.shape.radius();
        let pad = Vec2::splat(radius);
        match self.world_segment() {
            Some((a, b)) => Aabb::new(a.min(b) - pad, a.max(b) + pad),
            None => Aabb::new(self.position - pad, self.position + pad),
        }
    }

    /// Applies a force at the centre of mass.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Applies an instantaneous impulse at a world-space contact offset `r` from the origin.
    pub fn apply_impulse(&mut self, impulse: Vec2, r: Vec2) {
        self.linear_velocity += impulse * self.inv_mass;
        self.angular_velocity += r.perp_dot(impulse) * self.inv_inertia;
    }

    /// Velocity of the material point at offset `r` from the body origin.
    pub fn velocity_at(&self, r: Vec2) -> Vec2 {
        self.linear_velocity + r.perp() * self.angular_velocity
    }

    /// Should typically be called after integration in each simulation step.
    pub fn clear_accumulators(&mut self) {
        self.force = Vec2::ZERO;
        self.torque = 0.0;
    }
}
