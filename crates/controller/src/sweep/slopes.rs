//! Walking up and down sloped ground.
//!
//! Both handlers lift or drop the box by `|dx| * tan(angle)`, so the corner resting on the slope slides along it.
use raykin_physics::*;

use super::*;

/// The horizontal sweep's bottom ray ran into a walkable slope: lift the box so that its leading bottom corner ends
/// up on the slope.
pub(crate) fn handle_horizontal_slope<G: GeometryQuery + ?Sized>(
    ctx: &SweepContext<'_, G>,
    motion: &mut Motion,
    hit: &RayHit,
    angle: f64,
    going_right: bool,
) {
    let skin = ctx.skin();
    let bottom = ctx.origins.bottom_left.y - skin;
    let (edge, sign) = if going_right {
        (ctx.origins.bottom_right.x + skin, 1.0)
    } else {
        (ctx.origins.bottom_left.x - skin, -1.0)
    };

    // How far past the box's edge the slope was hit, and how far up the slope rises past that point.
    let ahead = (hit.point.x - edge) * sign;
    let rise = hit.point.y - bottom + slope_tan(angle) * (motion.displacement.x.abs() - ahead);

    // Already rising faster than the slope, e.g. jumping.
    if motion.displacement.y > rise {
        return;
    }

    motion.displacement.y = rise;
    motion.velocity.y = 0.0;
    motion.state.moving_up_slope = true;
    motion.state.moving_down_slope = false;
    motion.state.colliding_below = true;
    motion.state.slope_angle = angle;
    motion.standing_on = Some(hit.object);
}

/// Probe the ground under the middle of a grounded box which is moving sideways, and follow any slope found there.
///
/// Slopes falling away in the direction of motion pull the box down onto them.  Slopes rising into the motion lift
/// it, or stop it outright if they are too steep to walk.  Either way the box has to actually be resting on the
/// slope: the surface under its middle is lower than its bottom by half its width times the slope.
pub(crate) fn handle_vertical_slope<G: GeometryQuery + ?Sized>(ctx: &SweepContext<'_, G>, motion: &mut Motion) {
    let dx = motion.displacement.x;
    if dx == 0.0 {
        return;
    }

    let skin = ctx.skin();
    let extra = ctx.settings.slope_probe_extra;
    let half_width = ctx.origins.width() / 2.0 + skin;
    let reach = half_width * slope_tan(ctx.parameters.slope_limit) + extra + skin;

    let ray = Ray::new(ctx.origins.foot(), V2::DOWN, reach);
    let hit = match ctx.world.cast_ray(&ray, &ctx.ground_filter()) {
        Some(h) => h,
        None => return,
    };

    let surface = ctx.classify(hit.normal);
    let angle = match surface {
        Surface::Flat => return,
        Surface::Slope(a) => a,
        Surface::Wall => surface_angle(hit.normal),
    };
    // Also rejects NaN.
    if !(angle < 90.0) {
        return;
    }

    let tan = slope_tan(angle);
    let gap = hit.distance - skin;
    let drop = half_width * tan;

    if hit.normal.x.signum() == dx.signum() {
        // Too steep to walk down, so the box will fall instead.
        if surface == Surface::Wall || gap > drop + extra {
            return;
        }

        motion.displacement.y = motion.displacement.y.min(-dx.abs() * tan);
        motion.velocity.y = 0.0;
        motion.state.moving_down_slope = true;
        motion.state.colliding_below = true;
        motion.state.slope_angle = angle;
        motion.standing_on = Some(hit.object);
        log::trace!("Descending slope of {} degrees", angle);
        return;
    }

    if (gap - drop).abs() > extra {
        return;
    }

    // The leading corner has already reached flat ground at the top of the slope.
    let corner = if dx > 0.0 {
        ctx.origins.bottom_right
    } else {
        ctx.origins.bottom_left
    };
    let crest = ctx
        .world
        .cast_ray(&Ray::new(corner, V2::DOWN, skin + extra), &ctx.ground_filter())
        .map_or(false, |h| ctx.classify(h.normal) == Surface::Flat);
    if crest {
        return;
    }

    match surface {
        Surface::Slope(_) => {
            motion.displacement.y = dx.abs() * tan;
            motion.velocity.y = 0.0;
            motion.state.moving_up_slope = true;
            motion.state.colliding_below = true;
            motion.state.slope_angle = angle;
            motion.standing_on = Some(hit.object);
            log::trace!("Climbing slope of {} degrees", angle);
        }
        _ => {
            motion.displacement.x = 0.0;
            motion.velocity.x = 0.0;
            if dx > 0.0 {
                motion.state.colliding_right = true;
            } else {
                motion.state.colliding_left = true;
            }
            log::trace!("Blocked by slope of {} degrees", angle);
        }
    }
}
