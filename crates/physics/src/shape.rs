//! A shape is one of the concrete shape types behind an enum for collision
//! detection.
use crate::*;

/// A line segment between two distinct points.  Used for slopes, which boxes can't express.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub(crate) a: V2,
    pub(crate) b: V2,
}

impl Segment {
    pub fn new(a: V2, b: V2) -> Result<Segment> {
        if a == b || !a.is_finite() || !b.is_finite() {
            return Err(Error::DegenerateSegment { a, b });
        }
        Ok(Segment { a, b })
    }

    pub fn get_a(&self) -> V2 {
        self.a
    }

    pub fn get_b(&self) -> V2 {
        self.b
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Aabb(Aabb),
    Segment(Segment),
}

impl Shape {
    /// Does this shape pass through the interior of the given box?
    pub fn overlaps_aabb(&self, area: &Aabb) -> bool {
        use crate::collision_tests::*;

        match self {
            Shape::Aabb(ref a) => aabb_aabb_test(a, area),
            Shape::Segment(ref s) => aabb_segment_test(area, s),
        }
    }

    /// A point fixed to the shape: the center of a box, the first endpoint of a segment.
    pub fn reference_point(&self) -> V2 {
        match self {
            Shape::Aabb(ref a) => a.get_center(),
            Shape::Segment(ref s) => s.a,
        }
    }

    pub fn raycast(&self, ray: &Ray) -> Option<RaycastingResult> {
        match self {
            Shape::Aabb(ref a) => crate::raycasting::ray_aabb_test(ray, a),
            Shape::Segment(ref s) => crate::raycasting::ray_segment_test(ray, s),
        }
    }
}

impl From<Aabb> for Shape {
    fn from(other: Aabb) -> Shape {
        Shape::Aabb(other)
    }
}

impl From<Segment> for Shape {
    fn from(other: Segment) -> Shape {
        Shape::Segment(other)
    }
}
