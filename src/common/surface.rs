//! Contact properties of a body's surface.

/// Physical properties of a body's surface that shape its collision response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Coefficient of restitution (bounciness). Range [0, 1].
    /// 0 = perfectly inelastic (no bounce), 1 = perfectly elastic.
    pub restitution: f64,
    /// Coefficient of friction. Range [0, infinity).
    pub friction: f64,
}

impl Surface {
    /// Creates a new surface, clamping both coefficients into their valid ranges.
    pub fn new(restitution: f64, friction: f64) -> Self {
        Surface {
            restitution: restitution.clamp(0.0, 1.0),
            friction: friction.max(0.0),
        }
    }

    /// A frictionless surface with the given restitution.
    pub fn elastic(restitution: f64) -> Self {
        Surface::new(restitution, 0.0)
    }

    /// Restitution used for a contact between two surfaces.
    /// Coefficients multiply, so a fully elastic wall passes the other side's value through.
    pub fn combined_restitution(&self, other: &Surface) -> f64 {
        self.restitution * other.restitution
    }

    /// Friction used for a contact between two surfaces.
    /// Coefficients multiply, so a frictionless surface never grips.
    pub fn combined_friction(&self, other: &Surface) -> f64 {
        self.friction * other.friction
    }
}

impl Default for Surface {
    /// Frictionless and perfectly inelastic, the engine default for new shapes.
    fn default() -> Self {
        Surface {
            restitution: 0.0,
            friction: 0.0,
        }
    }
}
