//! The AABB-segment overlap test.
use crate::*;

/// Does any stretch of the segment pass through the interior of the box?
///
/// Clips the segment's parameter range against both slabs (Liang-Barsky).  A segment lying along an edge of the box,
/// or touching only a corner, does not overlap it.
pub(crate) fn aabb_segment_test(aabb: &Aabb, segment: &Segment) -> bool {
    let lo = aabb.get_p1();
    let hi = aabb.get_p2();
    let edge = segment.b - segment.a;

    let mut umin: f64 = 0.0;
    let mut umax: f64 = 1.0;

    for (start, delta, min, max) in [
        (segment.a.x, edge.x, lo.x, hi.x),
        (segment.a.y, edge.y, lo.y, hi.y),
    ] {
        if delta == 0.0 {
            if !(min < start && start < max) {
                return false;
            }
            continue;
        }

        let t1 = (min - start) / delta;
        let t2 = (max - start) / delta;
        umin = umin.max(t1.min(t2));
        umax = umax.min(t1.max(t2));
    }

    umin < umax
}
