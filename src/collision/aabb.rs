use crate::Vec2;

/// An axis-aligned bounding box used for broad-phase rejection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Creates a box from two corners given in any order.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Aabb { min: a.min(b), max: a.max(b) }
    }

    /// Touching boxes count as overlapping, so resting contacts survive the broad phase.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x >= other.min.x
            && self.min.x <= other.max.x
            && self.max.y >= other.min.y
            && self.min.y <= other.max.y
    }
}
