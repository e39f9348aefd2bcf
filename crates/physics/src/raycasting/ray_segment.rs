use crate::raycasting::*;

/// Rays closer to parallel than this (as the sine of the angle between them) never hit a segment.
const PARALLEL_EPSILON: f64 = 1e-12;

/// Intersect a ray with a two-sided line segment.
///
/// The normal is the segment's perpendicular, flipped so that it faces back toward the ray.  Segments have no
/// interior, so `inside` is always false.
pub(crate) fn ray_segment_test(ray: &Ray, segment: &Segment) -> Option<RaycastingResult> {
    let edge = segment.b - segment.a;
    let denom = ray.direction.cross(&edge);
    if denom.abs() < PARALLEL_EPSILON * edge.length() {
        return None;
    }

    let to_start = segment.a - ray.origin;
    let t = to_start.cross(&edge) / denom;
    let u = to_start.cross(&ray.direction) / denom;

    if !(0.0..=ray.length).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }

    let mut normal = edge.perp().normalize();
    if normal.dot(&ray.direction) > 0.0 {
        normal = -normal;
    }

    Some(RaycastingResult {
        point: ray.evaluate(t),
        distance: t,
        normal: Some(normal),
        inside: false,
    })
}
