//! The controller's box, and the points its rays start from.
use raykin_physics::{Aabb, V2};

use crate::{ConfigError, Result};

/// The controller's collision box for one step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    center: V2,
    half_extents: V2,
    skin_width: f64,
}

impl BoundingBox {
    /// Derive the box for a collider of `size` at `scale`.  Negative scales flip sprites, so only their magnitude
    /// matters.
    pub fn new(center: V2, size: V2, scale: V2, skin_width: f64) -> Result<BoundingBox, ConfigError> {
        let half_extents = size.scale(scale.abs()) / 2.0;
        let inner = half_extents - V2::new(skin_width, skin_width);

        // Also rejects NaN.
        if !(inner.x > 0.0 && inner.y > 0.0 && center.is_finite() && half_extents.is_finite()) {
            return Err(ConfigError::DegenerateBounds {
                size,
                scale,
                skin_width,
            });
        }

        Ok(BoundingBox {
            center,
            half_extents,
            skin_width,
        })
    }

    pub fn get_center(&self) -> V2 {
        self.center
    }

    pub fn get_half_extents(&self) -> V2 {
        self.half_extents
    }

    pub fn get_skin_width(&self) -> f64 {
        self.skin_width
    }

    /// The box with the skin width removed from every side.
    pub fn get_inner_half_extents(&self) -> V2 {
        self.half_extents - V2::new(self.skin_width, self.skin_width)
    }

    pub fn to_aabb(&self) -> Result<Aabb> {
        Aabb::from_center_half_extents(self.center, self.half_extents)
            .map_err(|e| raykin_physics::Error::from(e).into())
    }

    pub fn to_inner_aabb(&self) -> Result<Aabb> {
        self.to_aabb()?
            .inset(self.skin_width)
            .map_err(|e| raykin_physics::Error::from(e).into())
    }

    pub fn ray_origins(&self) -> RayOrigins {
        let inner = self.get_inner_half_extents();
        RayOrigins {
            top_left: self.center + V2::new(-inner.x, inner.y),
            top_right: self.center + inner,
            bottom_left: self.center - inner,
            bottom_right: self.center + V2::new(inner.x, -inner.y),
        }
    }

    #[must_use]
    pub fn translate(&self, delta: V2) -> BoundingBox {
        BoundingBox {
            center: self.center + delta,
            ..*self
        }
    }
}

/// The corners of the box, inset by the skin width.  Only valid for the step they were computed in.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayOrigins {
    pub top_left: V2,
    pub top_right: V2,
    pub bottom_left: V2,
    pub bottom_right: V2,
}

fn spacing(span: f64, rays: usize) -> f64 {
    match rays {
        0 | 1 => 0.0,
        n => span / (n - 1) as f64,
    }
}

impl RayOrigins {
    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.bottom_left.x
    }

    pub fn height(&self) -> f64 {
        self.top_left.y - self.bottom_left.y
    }

    /// Distance between neighbouring rays of a horizontal sweep, which are spread up the box's side.
    ///
    /// Fewer than 2 rays have no neighbours, and the spacing is 0.
    pub fn horizontal_ray_spacing(&self, rays: usize) -> f64 {
        spacing(self.height(), rays)
    }

    /// Distance between neighbouring rays of a vertical sweep, which are spread across the box's top or bottom.
    ///
    /// Fewer than 2 rays have no neighbours, and the spacing is 0.
    pub fn vertical_ray_spacing(&self, rays: usize) -> f64 {
        spacing(self.width(), rays)
    }

    /// Origin of ray `index` of a horizontal sweep, counting up from the bottom.
    pub fn horizontal_ray_origin(&self, index: usize, rays: usize, going_right: bool) -> V2 {
        let base = if going_right {
            self.bottom_right
        } else {
            self.bottom_left
        };
        base + V2::new(0.0, self.horizontal_ray_spacing(rays) * index as f64)
    }

    /// Origin of ray `index` of a vertical sweep, counting right from the left.
    pub fn vertical_ray_origin(&self, index: usize, rays: usize, going_up: bool) -> V2 {
        let base = if going_up {
            self.top_left
        } else {
            self.bottom_left
        };
        base + V2::new(self.vertical_ray_spacing(rays) * index as f64, 0.0)
    }

    /// Middle of the inset bottom edge.
    pub fn foot(&self) -> V2 {
        (self.bottom_left + self.bottom_right) / 2.0
    }
}
