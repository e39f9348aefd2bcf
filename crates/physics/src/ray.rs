use crate::*;

/// A ray with a unit direction and a finite length.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Ray {
    pub(crate) origin: V2,
    pub(crate) direction: V2,
    pub(crate) length: f64,
}

impl Ray {
    /// Build a ray.  `direction` is expected to be normalized.
    pub fn new(origin: V2, direction: V2, length: f64) -> Ray {
        Ray {
            origin,
            direction,
            length,
        }
    }

    /// Build a ray from a source point and a destination point.
    pub fn from_points(source: V2, target: V2) -> Ray {
        let length = source.distance(&target);
        let direction = V2::new(target.x - source.x, target.y - source.y).normalize();
        Ray::new(source, direction, length)
    }

    pub fn get_origin(&self) -> V2 {
        self.origin
    }

    pub fn get_direction(&self) -> V2 {
        self.direction
    }

    pub fn get_length(&self) -> f64 {
        self.length
    }

    /// Iterate over the unit tiles this ray passes through, in order.
    pub fn raycast(&self) -> TileGridRaycastPointIterator {
        TileGridRaycastPointIterator::new(self)
    }

    /// Evaluate the ray at a given `t`.
    pub fn evaluate(&self, t: f64) -> V2 {
        V2::new(
            self.origin.x + self.direction.x * t,
            self.origin.y + self.direction.y * t,
        )
    }

    /// The point at the far end of the ray.
    pub fn end(&self) -> V2 {
        self.evaluate(self.length)
    }
}

#[cfg(test)]
mod tests {
    use approx::*;

    use super::*;

    #[test]
    fn test_from_points() {
        let r = Ray::from_points(V2::new(1.0, 1.0), V2::new(4.0, 5.0));
        assert_relative_eq!(r.get_length(), 5.0);
        assert_relative_eq!(r.get_direction().x, 0.6);
        assert_relative_eq!(r.get_direction().y, 0.8);
        let end = r.end();
        assert_relative_eq!(end.x, 4.0);
        assert_relative_eq!(end.y, 5.0);
    }
}
