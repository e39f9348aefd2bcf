//! Dropping boxes onto the ground and walking them into walls.
mod utils;

use anyhow::Result;
use approx::assert_abs_diff_eq;

use raykin_controller::*;
use raykin_physics::*;
use raykin_tilemap::{tile_object_id, Tilemap};

use utils::*;

fn flat_ground() -> Result<(GeometryWorld, ObjectId)> {
    let mut world = GeometryWorld::new();
    let ground = world.insert(Collider::new(Aabb::from_points(
        V2::new(-50.0, -1.0),
        V2::new(50.0, 0.0),
    )?));
    Ok((world, ground))
}

#[test]
fn drop_onto_flat_ground() -> Result<()> {
    raykin_logging::log_to_stderr();

    for height in [0.1, 1.0, 5.0, 20.0] {
        let (world, ground) = flat_ground()?;
        let mut controller = unit_controller(V2::new(0.0, 0.5 + height))?;

        let steps = step_until(&mut controller, &world, 600, |c| c.state().is_grounded())?;
        assert!(steps.is_some(), "Never landed from {}", height);

        assert!(controller.state().colliding_below);
        assert_eq!(controller.velocity().y, 0.0);
        assert_eq!(controller.standing_on(), Some(ground));
        let feet = feet(&controller)?;
        assert!(feet >= -1e-9 && feet <= 0.02, "Landed at {}", feet);

        // And stays there.
        step_until(&mut controller, &world, 30, |_| false)?;
        assert!(controller.state().is_grounded());
        assert_abs_diff_eq!(feet, utils::feet(&controller)?, epsilon = 1e-9);
    }

    Ok(())
}

#[test]
fn fast_fall_does_not_tunnel() -> Result<()> {
    raykin_logging::log_to_stderr();

    let mut world = GeometryWorld::new();
    // Thinner than a single step of movement.
    world.insert(Collider::new(Aabb::from_points(
        V2::new(-5.0, -0.05),
        V2::new(5.0, 0.0),
    )?));
    let mut controller = unit_controller(V2::new(0.0, 10.0))?;
    controller.set_vertical_force(-300.0);

    let steps = step_until(&mut controller, &world, 60, |c| c.state().is_grounded())?;
    assert!(steps.is_some());
    assert_abs_diff_eq!(feet(&controller)?, 0.0, epsilon = 1e-9);
    Ok(())
}

#[test]
fn ceiling_stops_a_jump() -> Result<()> {
    raykin_logging::log_to_stderr();

    let (mut world, _) = flat_ground()?;
    world.insert(Collider::new(Aabb::from_points(
        V2::new(-5.0, 2.0),
        V2::new(5.0, 3.0),
    )?));
    let mut controller = unit_controller(V2::new(0.0, 0.5))?;
    controller.step(DT, &world, &mut ())?;
    assert!(controller.jump());

    let steps = step_until(&mut controller, &world, 60, |c| c.state().colliding_above)?;
    assert!(steps.is_some());
    assert_eq!(controller.velocity().y, 0.0);
    let top = controller.position().y + 0.5;
    assert_abs_diff_eq!(top, 2.0, epsilon = 1e-9);

    // Then falls back down.
    let steps = step_until(&mut controller, &world, 120, |c| c.state().is_grounded())?;
    assert!(steps.is_some());
    Ok(())
}

#[test]
fn tilemap_room() -> Result<()> {
    raykin_logging::log_to_stderr();

    let room = Tilemap::from_ascii(concat!(
        "#......#\n",
        "#......#\n",
        "#......#\n",
        "########\n",
    ))?;
    let mut controller = ControllerBuilder::new()
        .position(V2::new(3.5, 2.5))
        .collider_size(V2::new(0.8, 0.8))
        .build()?;

    let steps = step_until(&mut controller, &room, 300, |c| c.state().is_grounded())?;
    assert!(steps.is_some());
    assert_abs_diff_eq!(feet(&controller)?, 1.0, epsilon = 1e-9);
    assert_eq!(controller.standing_on(), Some(tile_object_id(V2::new(3, 0))));

    let mut hit_wall = false;
    for _ in 0..120 {
        controller.set_horizontal_force(5.0);
        controller.step(DT, &room, &mut ())?;
        hit_wall |= controller.state().colliding_right;
        assert!(controller.state().is_grounded());
    }

    assert!(hit_wall);
    assert_eq!(controller.velocity().x, 0.0);
    assert_abs_diff_eq!(controller.position().x + 0.4, 7.0, epsilon = 1e-9);

    // And back the other way.
    for _ in 0..120 {
        controller.set_horizontal_force(-5.0);
        controller.step(DT, &room, &mut ())?;
    }
    assert!(controller.state().colliding_left);
    assert_abs_diff_eq!(controller.position().x - 0.4, 1.0, epsilon = 1e-9);
    Ok(())
}
