pub mod circle;
pub mod segment;

pub use circle::Circle;
pub use segment::Segment;

/// Geometric shape of a rigid body, in body-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Segment(Segment),
}

impl Shape {
    /// Radius of the rounded outline around the shape's core geometry.
    pub fn radius(&self) -> f64 {
        match self {
            Shape::Circle(circle) => circle.radius,
            Shape::Segment(segment) => segment.radius,
        }
    }
}
