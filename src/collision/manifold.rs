use crate::Vec2;

/// Closest surface points of a contact, in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContactPoint {
    /// Contact point on the surface of body A.
    pub point_a: Vec2,
    /// Contact point on the surface of body B.
    pub point_b: Vec2,
}

impl ContactPoint {
    /// Point halfway between the two surface points; impulses are applied here.
    pub fn midpoint(&self) -> Vec2 {
        (self.point_a + self.point_b) * 0.5
    }
}

/// A single contact between two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionManifold {
    pub body_a: usize,
    pub body_b: usize,
    /// Unit normal pointing from body A towards body B.
    pub normal: Vec2,
    /// Penetration depth along the normal.
    pub depth: f64,
    pub contact: ContactPoint,
}

impl CollisionManifold {
    /// The same contact seen from the other body.
    pub fn flipped(self) -> Self {
        Self {
            body_a: self.body_b,
            body_b: self.body_a,
            normal: -self.normal,
            depth: self.depth,
            contact: ContactPoint {
                point_a: self.contact.point_b,
                point_b: self.contact.point_a,
            },
        }
    }
}
