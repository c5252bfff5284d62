use super::manifold::{CollisionManifold, ContactPoint};
use crate::objects::RigidBody;
use crate::shapes::{Segment, Shape};
use crate::Vec2;

/// Narrow-phase test for any pair of bodies.
/// The returned manifold keeps `body_a_idx` as A, with the normal pointing from A to B.
pub fn check_collision(
    body_a: &RigidBody,
    body_a_idx: usize,
    body_b: &RigidBody,
    body_b_idx: usize,
) -> Option<CollisionManifold> {
    match (&body_a.shape, &body_b.shape) {
        (Shape::Circle(_), Shape::Circle(_)) => check_circle_circle(body_a, body_a_idx, body_b, body_b_idx),
        (Shape::Circle(_), Shape::Segment(_)) => check_circle_segment(body_a, body_a_idx, body_b, body_b_idx),
        (Shape::Segment(_), Shape::Circle(_)) => {
            check_circle_segment(body_b, body_b_idx, body_a, body_a_idx).map(CollisionManifold::flipped)
        }
        // Segments only model static and kinematic geometry, which never collide with each other.
        (Shape::Segment(_), Shape::Segment(_)) => None,
    }
}

/// Checks for collision between two circles.
pub fn check_circle_circle(
    body_a: &RigidBody,
    body_a_idx: usize,
    body_b: &RigidBody,
    body_b_idx: usize,
) -> Option<CollisionManifold> {
    let (Shape::Circle(circle_a), Shape::Circle(circle_b)) = (&body_a.shape, &body_b.shape) else {
        return None;
    };

    let dist_vec = body_b.position - body_a.position;
    let dist_sq = dist_vec.length_squared();
    let radii_sum = circle_a.radius + circle_b.radius;
    if dist_sq >= radii_sum * radii_sum {
        return None;
    }

    let distance = dist_sq.sqrt();
    let normal = if distance > 1e-10 {
        dist_vec / distance
    } else {
        // Concentric circles, any direction separates them
        Vec2::Y
    };

    Some(CollisionManifold {
        body_a: body_a_idx,
        body_b: body_b_idx,
        normal,
        depth: radii_sum - distance,
        contact: ContactPoint {
            point_a: body_a.position + normal * circle_a.radius,
            point_b: body_b.position - normal * circle_b.radius,
        },
    })
}

/// Checks a circle against a thick segment (a capsule).
/// The normal points from the circle towards the segment.
pub fn check_circle_segment(
    circle_body: &RigidBody,
    circle_body_idx: usize,
    segment_body: &RigidBody,
    segment_body_idx: usize,
) -> Option<CollisionManifold> {
    let Shape::Circle(circle) = &circle_body.shape else {
        return None;
    };
    let (Shape::Segment(segment), Some((a, b))) = (&segment_body.shape, segment_body.world_segment()) else {
        return None;
    };

    let closest = Segment::closest_point(a, b, circle_body.position);
    let to_segment = closest - circle_body.position;
    let dist_sq = to_segment.length_squared();
    let radii_sum = circle.radius + segment.radius;
    if dist_sq >= radii_sum * radii_sum {
        return None;
    }

    let distance = dist_sq.sqrt();
    let normal = if distance > 1e-10 {
        to_segment / distance
    } else {
        // Centre lies on the core line; push out along the segment's perpendicular
        let perp = (b - a).perp().normalize_or_zero();
        if perp == Vec2::ZERO { Vec2::Y } else { perp }
    };

    Some(CollisionManifold {
        body_a: circle_body_idx,
        body_b: segment_body_idx,
        normal,
        depth: radii_sum - distance,
        contact: ContactPoint {
            point_a: circle_body.position + normal * circle.radius,
            point_b: closest - normal * segment.radius,
        },
    })
}
