use raykin_physics::*;

use super::*;

/// Resolve the vertical part of the displacement, finding ground and ceilings.
///
/// Rays start from the box's position after the horizontal part of the move.  A zero displacement sweeps downward,
/// so that a box resting on the ground stays grounded.
pub(crate) fn move_vertically<G: GeometryQuery + ?Sized>(ctx: &SweepContext<'_, G>, motion: &mut Motion) {
    let dy = motion.displacement.y;
    let going_up = dy > 0.0;
    let (direction, filter) = if going_up {
        (V2::UP, ctx.solid_filter())
    } else {
        (V2::DOWN, ctx.ground_filter())
    };
    let length = dy.abs() + ctx.skin();
    let rays = ctx.settings.vertical_rays;
    let shift = V2::new(motion.displacement.x, 0.0);

    let mut nearest: Option<RayHit> = None;
    for index in 0..rays {
        let origin = ctx.origins.vertical_ray_origin(index, rays, going_up) + shift;
        let hit = match ctx.world.cast_ray(&Ray::new(origin, direction, length), &filter) {
            Some(h) => h,
            None => continue,
        };
        if nearest.map_or(true, |n| hit.distance < n.distance) {
            nearest = Some(hit);
        }
    }

    let hit = match nearest {
        Some(h) => h,
        None => {
            log::trace!("Vertical sweep: {} unobstructed", dy);
            return;
        }
    };

    let travel = hit.distance - ctx.skin();
    if going_up {
        let allowed = travel.max(0.0);
        // A ceiling cut a climb short, so don't walk into the slope either.
        if motion.state.moving_up_slope && allowed < dy {
            let tan = slope_tan(motion.state.slope_angle);
            let dx = motion.displacement.x;
            if tan > 0.0 && allowed / tan < dx.abs() {
                motion.displacement.x = (allowed / tan).copysign(dx);
            }
        }

        motion.displacement.y = allowed;
        motion.velocity.y = 0.0;
        motion.state.colliding_above = true;
    } else {
        let surface = ctx.classify(hit.normal);
        let blocked_sideways = motion.state.colliding_left || motion.state.colliding_right;
        // A negative travel means the box is sunk into the surface.  Only ground it could stand on may lift it back
        // out, otherwise the rays shifted into a steep ramp would walk the box up it.
        let may_lift = match surface {
            Surface::Flat => true,
            Surface::Slope(_) => !blocked_sideways,
            Surface::Wall => false,
        };
        motion.displacement.y = if may_lift { -travel } else { (-travel).min(0.0) };
        motion.velocity.y = 0.0;
        motion.state.colliding_below = true;
        motion.standing_on = Some(hit.object);

        if !motion.state.is_on_slope() {
            motion.state.slope_angle = 0.0;
            if let Surface::Slope(angle) = surface {
                if travel < 0.0 && may_lift {
                    motion.state.moving_up_slope = true;
                    motion.state.slope_angle = angle;
                }
            }
        }
    }

    log::trace!(
        "Vertical sweep: {} -> {} against {}",
        dy,
        motion.displacement.y,
        hit.object
    );
}
