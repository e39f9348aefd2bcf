//! The raycast sweeps which resolve one step's displacement against the level.
//!
//! Each sweep reads the level through [GeometryQuery] and edits a [Motion] in place.  Order matters: the controller
//! runs the slope probe, then the horizontal sweep, then the vertical sweep, each seeing the previous one's result.
use raykin_physics::*;

use crate::{ControllerParameters, ControllerState, RayOrigins, RaycastSettings};

mod horizontal;
mod slopes;
mod vertical;

pub(crate) use horizontal::*;
pub(crate) use slopes::*;
pub(crate) use vertical::*;

/// Everything the sweeps read but don't change.
pub(crate) struct SweepContext<'a, G: GeometryQuery + ?Sized> {
    pub(crate) world: &'a G,
    pub(crate) origins: RayOrigins,
    pub(crate) settings: &'a RaycastSettings,
    pub(crate) parameters: &'a ControllerParameters,
    /// One-way platforms the box was inside of at the end of the last step.  Never blocks downward movement.
    pub(crate) inside_platforms: &'a [ObjectId],
}

/// The parts of the controller the sweeps change.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct Motion {
    pub(crate) displacement: V2,
    pub(crate) velocity: V2,
    pub(crate) state: ControllerState,
    pub(crate) standing_on: Option<ObjectId>,
}

/// What a hit surface means for movement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Surface {
    Flat,
    /// Walkable, at this many degrees.
    Slope(f64),
    Wall,
}

/// Angle between a surface and flat ground, in degrees.  Ceilings come out above 90.
pub(crate) fn surface_angle(normal: V2) -> f64 {
    normal.x.abs().atan2(normal.y).to_degrees()
}

impl<'a, G: GeometryQuery + ?Sized> SweepContext<'a, G> {
    pub(crate) fn classify(&self, normal: V2) -> Surface {
        // Zero and NaN normals say nothing about the surface, so don't try to climb it.
        if !(normal.length_squared() > 1e-12) {
            return Surface::Wall;
        }

        let angle = surface_angle(normal);
        let eps = self.settings.slope_limit_epsilon;
        if angle >= 90.0 - eps {
            Surface::Wall
        } else if angle <= self.settings.flat_ground_epsilon {
            Surface::Flat
        } else if angle <= self.parameters.slope_limit + eps {
            Surface::Slope(angle)
        } else {
            Surface::Wall
        }
    }

    /// Filter for sideways and upward rays, which one-way platforms never stop.
    pub(crate) fn solid_filter(&self) -> QueryFilter<'static> {
        QueryFilter::new(self.settings.platform_mask).one_way(OneWayPolicy::Skip)
    }

    /// Filter for downward rays, which land on one-way platforms unless the box is still inside them.
    pub(crate) fn ground_filter(&self) -> QueryFilter<'a> {
        QueryFilter::new(self.settings.platform_mask).exclude(self.inside_platforms)
    }

    pub(crate) fn skin(&self) -> f64 {
        self.settings.skin_width
    }
}

/// Tan of a surface angle in degrees, capped short of vertical.
pub(crate) fn slope_tan(angle: f64) -> f64 {
    angle.min(89.0).to_radians().tan()
}
