//! The AABB-AABB overlap test.
use crate::*;

/// Do the interiors of two boxes overlap?
///
/// Works on the Minkowski sum: grow `box1` by the half extents of `box2` and ask whether the center of `box2` is
/// strictly inside.  Boxes which share an edge are not overlapping, which is what lets a body rest on top of another.
pub(crate) fn aabb_aabb_test(box1: &Aabb, box2: &Aabb) -> bool {
    let reach = box1.get_half_extents() + box2.get_half_extents();
    let gap = (box2.get_center() - box1.get_center()).abs();
    gap.x < reach.x && gap.y < reach.y
}
