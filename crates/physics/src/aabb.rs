//! An axis-aligned bounding box.
use num::traits::Num;

use crate::errors::*;
use crate::*;

/// An axis-aligned bounding box is specified by the lower left point and a width/height vector.
///
/// Boxes can never be a single point or line.
#[derive(Debug, Copy, Clone, Eq, Ord, PartialEq, PartialOrd)]
pub struct Aabb<T = f64> {
    p1: V2<T>,
    /// width-height
    wh: V2<T>,
}

impl<T: Num + Copy> Aabb<T> {
    /// get a box from a point and a width/height pair. Note that this is unchecked: if wh is a zero vector or negative,
    /// behavior is undefined.
    fn from_point_wh(point: V2<T>, wh: V2<T>) -> Aabb<T> {
        Aabb { p1: point, wh }
    }

    pub fn get_p1(&self) -> V2<T> {
        self.p1
    }

    pub fn get_p2(&self) -> V2<T> {
        self.p1 + self.wh
    }

    pub fn get_width(&self) -> T {
        self.wh.x
    }

    pub fn get_height(&self) -> T {
        self.wh.y
    }
}

impl<T: Num + Copy + std::cmp::PartialOrd> Aabb<T> {
    pub fn from_points(p1: V2<T>, p2: V2<T>) -> Result<Aabb<T>, AabbError> {
        // Written so that NaN fails the check.
        if !(p1.x < p2.x && p1.y < p2.y) {
            return Err(AabbError::AabbInvalidDims);
        }

        let wh = p2 - p1;
        Ok(Aabb { p1, wh })
    }
}

impl<T: Num + Copy> Aabb<T>
where
    f64: From<T>,
{
    pub fn get_half_width(&self) -> f64 {
        f64::from(self.get_width()) / 2.0
    }

    pub fn get_half_height(&self) -> f64 {
        f64::from(self.get_height()) / 2.0
    }

    pub fn get_center(&self) -> V2<f64> {
        V2 {
            x: f64::from(self.p1.x) + self.get_half_width(),
            y: f64::from(self.p1.y) + self.get_half_height(),
        }
    }

    /// get the squared distance to a specific point.
    pub fn distance_to_point_squared(&self, point: &V2<f64>) -> f64 {
        // The closest point on a box to a point is the clamped value of the point itself.
        let p1 = self.get_p1();
        let p2 = self.get_p2();
        let p1x: f64 = p1.x.into();
        let p1y = p1.y.into();
        let p2x = p2.x.into();
        let p2y = p2.y.into();
        let x = point.x.clamp(p1x, p2x);
        let y = point.y.clamp(p1y, p2y);
        (point.x - x).powi(2) + (point.y - y).powi(2)
    }

    pub fn distance_to_point(&self, point: &V2<f64>) -> f64 {
        self.distance_to_point_squared(point).sqrt()
    }
}

impl Aabb {
    /// Build a box from its center and half extents.
    pub fn from_center_half_extents(center: V2, half_extents: V2) -> Result<Aabb, AabbError> {
        Aabb::from_points(center - half_extents, center + half_extents)
    }

    pub fn get_half_extents(&self) -> V2 {
        V2::new(self.get_half_width(), self.get_half_height())
    }

    /// Do the interiors of the two boxes overlap?  Boxes which only touch do not.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        crate::collision_tests::aabb_aabb_test(self, other)
    }

    #[must_use = "This doesn't mutate the Aabb in-place"]
    pub fn translate(&self, delta: V2) -> Aabb {
        Aabb::from_point_wh(self.p1 + delta, self.wh)
    }

    /// Shrink the box by `amount` on every side.
    pub fn inset(&self, amount: f64) -> Result<Aabb, AabbError> {
        let offset = V2::new(amount, amount);
        Aabb::from_points(self.get_p1() + offset, self.get_p2() - offset)
    }
}

impl Aabb<u16> {
    /// get an iterator which will visit all tiles of this box, by rows of x starting from the minimum y:
    ///
    /// `(1, 1), (2, 1), ... (1, 2), (2, 2),...`
    ///
    /// Errors out if it is necessary to visit a tile which would be beyond `u16::MAX`, before iteration. The iterator
    /// itself is guaranteed never to overflow.
    pub fn iter_tiles(&self) -> Result<impl Iterator<Item = V2<u16>>> {
        let min_x = self.p1.x;
        let min_y = self.p1.y;
        let max_x = min_x
            .checked_add(self.wh.x - 1)
            .ok_or(AabbError::AabbU16Overflow)?;
        let max_y = min_y
            .checked_add(self.wh.y - 1)
            .ok_or(AabbError::AabbU16Overflow)?;

        let iter = (min_y..=max_y).flat_map(move |y| (min_x..=max_x).map(move |x| V2::new(x, y)));
        Ok(iter)
    }
}
