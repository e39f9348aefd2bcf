//! The interface between movers and whatever holds the level geometry.
use crate::*;

/// What to do with colliders tagged as one-way platforms.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OneWayPolicy {
    /// One-way platforms block the ray like anything else.
    Include,
    /// One-way platforms are invisible to the ray.
    Skip,
}

/// Narrows down which colliders a query may report.
///
/// Filtering happens before hits are compared, so an excluded collider can never shadow one behind it.
#[derive(Copy, Clone, Debug)]
pub struct QueryFilter<'a> {
    pub mask: LayerMask,
    pub one_way: OneWayPolicy,
    /// Colliders to ignore outright.
    pub exclude: &'a [ObjectId],
}

impl QueryFilter<'static> {
    pub fn new(mask: LayerMask) -> QueryFilter<'static> {
        QueryFilter {
            mask,
            one_way: OneWayPolicy::Include,
            exclude: &[],
        }
    }
}

impl<'a> QueryFilter<'a> {
    pub fn one_way(self, one_way: OneWayPolicy) -> QueryFilter<'a> {
        QueryFilter { one_way, ..self }
    }

    pub fn exclude<'b>(self, exclude: &'b [ObjectId]) -> QueryFilter<'b> {
        QueryFilter {
            mask: self.mask,
            one_way: self.one_way,
            exclude,
        }
    }

    /// Should a collider with these properties be considered at all?
    pub fn accepts(&self, object: ObjectId, layers: LayerMask, one_way: bool) -> bool {
        if !layers.intersects(self.mask) {
            return false;
        }

        if one_way && self.one_way == OneWayPolicy::Skip {
            return false;
        }

        !self.exclude.contains(&object)
    }
}

/// The nearest surface a ray ran into.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    /// Distance from the ray's origin.
    pub distance: f64,
    pub point: V2,
    /// Unit surface normal, facing back toward the ray.
    pub normal: V2,
    pub object: ObjectId,
}

/// A collider found by an overlap query.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Overlap {
    pub object: ObjectId,
    pub layers: LayerMask,
    pub one_way: bool,
}

/// Anything which can answer ray and overlap queries about static geometry.
///
/// Implementations must be deterministic: the same query against the same geometry gives the same answer.
pub trait GeometryQuery {
    /// Cast `ray`, returning the nearest hit among the colliders accepted by `filter`.
    ///
    /// Colliders which contain the ray's origin don't count as hit.
    fn cast_ray(&self, ray: &Ray, filter: &QueryFilter<'_>) -> Option<RayHit>;

    /// Push every collider on a layer in `mask` which passes through the interior of `area` into `out`.
    fn overlapping(&self, area: &Aabb, mask: LayerMask, out: &mut Vec<Overlap>);

    /// A point which moves rigidly with `object`, for providers whose objects can move.
    ///
    /// Movers standing on an object follow the change in this point between steps.  Static providers can leave the
    /// default, which never reports a position.
    fn object_position(&self, _object: ObjectId) -> Option<V2> {
        None
    }
}

impl<G: GeometryQuery + ?Sized> GeometryQuery for &G {
    fn cast_ray(&self, ray: &Ray, filter: &QueryFilter<'_>) -> Option<RayHit> {
        (**self).cast_ray(ray, filter)
    }

    fn overlapping(&self, area: &Aabb, mask: LayerMask, out: &mut Vec<Overlap>) {
        (**self).overlapping(area, mask, out)
    }

    fn object_position(&self, object: ObjectId) -> Option<V2> {
        (**self).object_position(object)
    }
}

/// Convert a shape-level raycasting result into a hit, dropping rays which started inside the shape.
pub(crate) fn hit_from_result(result: RaycastingResult, object: ObjectId) -> Option<RayHit> {
    if result.inside {
        return None;
    }

    Some(RayHit {
        distance: result.distance,
        point: result.point,
        normal: result.normal?,
        object,
    })
}
