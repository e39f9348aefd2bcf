#![allow(dead_code)]

use anyhow::Result;

use raykin_controller::*;
use raykin_physics::{GeometryQuery, V2};

pub const DT: f64 = 1.0 / 60.0;

pub fn unit_controller(position: V2) -> Result<CharacterController> {
    Ok(ControllerBuilder::new()
        .position(position)
        .collider_size(V2::new(1.0, 1.0))
        .build()?)
}

/// Step until `done` says so, returning how many steps that took.
pub fn step_until<G: GeometryQuery>(
    controller: &mut CharacterController,
    world: &G,
    max_steps: usize,
    mut done: impl FnMut(&CharacterController) -> bool,
) -> Result<Option<usize>> {
    for i in 1..=max_steps {
        controller.step(DT, world, &mut ())?;
        if done(controller) {
            return Ok(Some(i));
        }
    }

    Ok(None)
}

/// Bottom edge of the controller's box.
pub fn feet(controller: &CharacterController) -> Result<f64> {
    let bounds = controller.bounds()?;
    Ok(bounds.get_center().y - bounds.get_half_extents().y)
}
