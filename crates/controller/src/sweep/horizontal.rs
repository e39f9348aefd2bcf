use raykin_physics::*;
use smallvec::SmallVec;

use super::*;

#[derive(Copy, Clone, Debug)]
struct SideHit {
    index: usize,
    hit: RayHit,
    surface: Surface,
}

/// Resolve the horizontal part of the displacement.
///
/// The result never moves further than asked and never reverses direction.  A walkable slope in the way lifts the
/// box instead of stopping it.
pub(crate) fn move_horizontally<G: GeometryQuery + ?Sized>(ctx: &SweepContext<'_, G>, motion: &mut Motion) {
    let dx = motion.displacement.x;
    if dx == 0.0 {
        return;
    }

    let going_right = dx > 0.0;
    let direction = if going_right { V2::RIGHT } else { V2::LEFT };
    let length = dx.abs() + ctx.skin();
    let rays = ctx.settings.horizontal_rays;
    let filter = ctx.solid_filter();

    let hits = (0..rays)
        .filter_map(|index| {
            let origin = ctx.origins.horizontal_ray_origin(index, rays, going_right);
            let hit = ctx.world.cast_ray(&Ray::new(origin, direction, length), &filter)?;
            Some(SideHit {
                index,
                hit,
                surface: ctx.classify(hit.normal),
            })
        })
        .collect::<SmallVec<[SideHit; 8]>>();

    // Only the bottom ray can start a climb.  While climbing, the other rays see more of the same slope further up,
    // which isn't in the way.  Otherwise a walkable surface higher up the box is a ledge and blocks like a wall.
    let climb = hits
        .first()
        .filter(|h| h.index == 0 && h.surface != Surface::Wall);
    let blocking = |h: &&SideHit| match h.surface {
        Surface::Wall => true,
        _ => h.index != 0 && climb.is_none(),
    };

    // Strict comparison, so ties go to the lower ray.
    let mut wall: Option<&SideHit> = None;
    for h in hits.iter().filter(blocking) {
        if wall.map_or(true, |w| h.hit.distance < w.hit.distance) {
            wall = Some(h);
        }
    }

    if let Some(w) = wall {
        let allowed = (w.hit.distance - ctx.skin()).max(0.0);
        if allowed < dx.abs() {
            motion.displacement.x = allowed.copysign(dx);
        }
        if going_right {
            motion.state.colliding_right = true;
        } else {
            motion.state.colliding_left = true;
        }
        motion.velocity.x = 0.0;
    }

    if let Some(slope) = climb {
        if wall.map_or(true, |w| slope.hit.distance <= w.hit.distance) {
            let angle = match slope.surface {
                Surface::Slope(a) => a,
                _ => 0.0,
            };
            handle_horizontal_slope(ctx, motion, &slope.hit, angle, going_right);
        }
    }

    log::trace!(
        "Horizontal sweep: {} -> {} ({} hits)",
        dx,
        motion.displacement.x,
        hits.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::*;
    use proptest::prelude::*;

    use crate::sweep::test_support::*;

    fn run(world: &GeometryWorld, bounds: &crate::BoundingBox, parameters: &ControllerParameters, dx: f64) -> Motion {
        let settings = RaycastSettings::default();
        let ctx = context(world, bounds, &settings, parameters);
        let mut motion = Motion {
            displacement: V2::new(dx, 0.0),
            velocity: V2::new(dx * 60.0, 0.0),
            ..Default::default()
        };
        move_horizontally(&ctx, &mut motion);
        motion
    }

    fn wall_world() -> GeometryWorld {
        let mut world = GeometryWorld::new();
        let wall = Aabb::from_points(V2::new(3.0, -5.0), V2::new(4.0, 5.0)).unwrap();
        world.insert(Collider::new(wall));
        world
    }

    #[test]
    fn test_open_space() {
        let world = GeometryWorld::new();
        let motion = run(&world, &unit_box_at(0.0, 0.0), &Default::default(), 0.5);
        assert_eq!(motion.displacement.x, 0.5);
        assert!(!motion.state.has_collisions());
        assert_eq!(motion.velocity.x, 30.0);
    }

    #[test]
    fn test_zero_displacement_fires_nothing() {
        let world = wall_world();
        let motion = run(&world, &unit_box_at(1.99, 0.0), &Default::default(), 0.0);
        assert_eq!(motion, Motion::default());
    }

    #[test]
    fn test_wall() {
        let world = wall_world();
        let motion = run(&world, &unit_box_at(1.5, 0.0), &Default::default(), 1.0);
        assert_relative_eq!(motion.displacement.x, 0.5, epsilon = 1e-9);
        assert!(motion.state.colliding_right);
        assert!(!motion.state.colliding_left);
        assert_eq!(motion.velocity.x, 0.0);

        // Already touching.
        let motion = run(&world, &unit_box_at(2.0, 0.0), &Default::default(), 1.0);
        assert_relative_eq!(motion.displacement.x, 0.0, epsilon = 1e-9);
        assert!(motion.state.colliding_right);

        // Moving away.
        let motion = run(&world, &unit_box_at(2.0, 0.0), &Default::default(), -1.0);
        assert_eq!(motion.displacement.x, -1.0);
        assert!(!motion.state.has_collisions());
    }

    #[test]
    fn test_ledge_hit_by_upper_ray() {
        // A block at head height only.
        let mut world = GeometryWorld::new();
        let block = Aabb::from_points(V2::new(3.0, 0.6), V2::new(4.0, 5.0)).unwrap();
        world.insert(Collider::new(block));
        let motion = run(&world, &unit_box_at(1.0, 0.0), &Default::default(), -2.0);
        assert_eq!(motion.displacement.x, -2.0);
        let motion = run(&world, &unit_box_at(1.0, 0.0), &Default::default(), 2.0);
        assert_relative_eq!(motion.displacement.x, 1.0, epsilon = 1e-9);
        assert!(motion.state.colliding_right);
    }

    #[test]
    fn test_one_way_platforms_never_block_sideways() {
        let mut world = GeometryWorld::new();
        let platform = Aabb::from_points(V2::new(3.0, -5.0), V2::new(4.0, 5.0)).unwrap();
        world.insert(Collider::new(platform).one_way(true));
        let motion = run(&world, &unit_box_at(1.5, 0.0), &Default::default(), 1.0);
        assert_eq!(motion.displacement.x, 1.0);
        assert!(!motion.state.has_collisions());
    }

    #[test]
    fn test_climbs_walkable_slope() {
        let mut world = GeometryWorld::new();
        world.insert(Collider::new(ramp(V2::new(1.0, 0.0), 30.0, 10.0)));
        let parameters = ControllerParameters {
            slope_limit: 30.0,
            ..Default::default()
        };

        // The box's bottom right corner sits on the foot of the ramp.
        let motion = run(&world, &unit_box_at(0.0, 0.0), &parameters, 1.0);
        assert_eq!(motion.displacement.x, 1.0);
        assert_relative_eq!(
            motion.displacement.y,
            30.0f64.to_radians().tan(),
            epsilon = 1e-6
        );
        assert!(motion.state.moving_up_slope);
        assert!(motion.state.colliding_below);
        assert_relative_eq!(motion.state.slope_angle, 30.0, epsilon = 1e-6);
        assert!(!motion.state.colliding_right);
    }

    #[test]
    fn test_steep_slope_is_a_wall() {
        let mut world = GeometryWorld::new();
        world.insert(Collider::new(ramp(V2::new(1.0, 0.0), 80.0, 10.0)));
        let parameters = ControllerParameters {
            slope_limit: 75.0,
            ..Default::default()
        };

        let motion = run(&world, &unit_box_at(0.0, 0.0), &parameters, 1.0);
        let skin = RaycastSettings::default().skin_width;
        // The bottom ray starts `skin` in from the box's edge and `skin` up from its bottom.
        let hit_distance = skin + skin / 80.0f64.to_radians().tan();
        assert_relative_eq!(motion.displacement.x, hit_distance - skin, epsilon = 1e-9);
        assert!(motion.state.colliding_right);
        assert_eq!(motion.velocity.x, 0.0);
        assert!(!motion.state.is_on_slope());
        assert_eq!(motion.displacement.y, 0.0);
    }

    #[test]
    fn test_climb_stops_at_wall() {
        let mut world = GeometryWorld::new();
        world.insert(Collider::new(ramp(V2::new(1.0, 0.0), 20.0, 10.0)));
        let wall = Aabb::from_points(V2::new(1.5, 0.0), V2::new(2.0, 5.0)).unwrap();
        world.insert(Collider::new(wall));

        let motion = run(&world, &unit_box_at(0.0, 0.0), &Default::default(), 2.0);
        assert_relative_eq!(motion.displacement.x, 0.5, epsilon = 1e-9);
        assert!(motion.state.colliding_right);
        assert!(motion.state.moving_up_slope);
        assert!(motion.displacement.y > 0.0);
    }

    proptest! {
        #[test]
        fn test_never_moves_further_or_backwards(
            dx in -5.0..5.0f64,
            x in -6.0..6.0f64,
            y in -1.0..3.0f64,
            limit in 0.0..=90.0f64,
        ) {
            let mut world = wall_world();
            world.insert(Collider::new(ramp(V2::new(-4.0, 0.0), 40.0, 3.0)));
            world.insert(Collider::new(Aabb::from_points(V2::new(-10.0, -1.0), V2::new(10.0, 0.0)).unwrap()));
            let parameters = ControllerParameters {
                slope_limit: limit,
                ..Default::default()
            };

            let motion = run(&world, &unit_box_at(x, y), &parameters, dx);
            let result = motion.displacement.x;
            prop_assert!(result.abs() <= dx.abs());
            prop_assert!(result == 0.0 || result.signum() == dx.signum());
        }
    }
}
