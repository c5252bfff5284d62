use crate::Vec2;

/// A line segment with rounded ends (a capsule). `radius` is the half-thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
    pub radius: f64,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2, radius: f64) -> Self {
        assert!(radius >= 0.0, "Segment radius cannot be negative");
        Self { a, b, radius }
    }

    /// A segment of the given length centred on the local origin, lying along the x axis.
    pub fn centered(length: f64, radius: f64) -> Self {
        let half = length / 2.0;
        Self::new(Vec2::new(-half, 0.0), Vec2::new(half, 0.0), radius)
    }

    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Midpoint of the segment in local coordinates.
    pub fn midpoint(&self) -> Vec2 {
        (self.a + self.b) * 0.5
    }

    /// Closest point on the segment from `a` to `b` to `point`.
    pub fn closest_point(a: Vec2, b: Vec2, point: Vec2) -> Vec2 {
        let ab = b - a;
        let length_sq = ab.length_squared();
        if length_sq < 1e-12 {
            return a;
        }
        let t = ((point - a).dot(ab) / length_sq).clamp(0.0, 1.0);
        a + ab * t
    }
}
