//! Headless playground: drives a scripted player through a small level and logs what happens.
//!
//! Run with `RUST_LOG=debug` to see the controller's own events.
mod level;
mod player;

use std::path::PathBuf;

use anyhow::{Context, Result};
use structopt::StructOpt;

use raykin_controller::*;
use raykin_physics::{ObjectId, V2};

use level::Level;
use player::Player;

const DT: f64 = 1.0 / 60.0;

#[derive(Debug, StructOpt)]
struct Params {
    /// JSON file holding controller parameters.  Missing fields take their defaults.
    #[structopt(parse(from_os_str))]
    parameters: Option<PathBuf>,

    /// How many simulated seconds to run for.
    #[structopt(long = "--seconds", default_value = "14")]
    seconds: f64,
}

/// Notices the player touching things.  The level can't change mid-step, so pickups are applied afterwards.
#[derive(Debug, Default)]
struct Pickups {
    touched: Vec<ObjectId>,
    collected: usize,
}

impl OverlapListener for Pickups {
    fn on_overlap_enter(&mut self, object: ObjectId) {
        log::info!("Entered {}", object);
        self.touched.push(object);
    }

    fn on_overlap_exit(&mut self, object: ObjectId) {
        log::info!("Left {}", object);
    }
}

fn load_parameters(path: Option<&PathBuf>) -> Result<ControllerParameters> {
    let path = match path {
        Some(p) => p,
        None => return Ok(Default::default()),
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Reading parameters from {}", path.display()))?;
    let parameters = serde_json::from_str(&text)
        .with_context(|| format!("Parsing parameters from {}", path.display()))?;
    Ok(parameters)
}

/// Run the script for `seconds`, returning the final controller and what was picked up.
fn simulate(parameters: ControllerParameters, seconds: f64) -> Result<(CharacterController, Pickups)> {
    let mut level = Level::new()?;
    let mut controller = ControllerBuilder::new()
        .position(V2::new(0.0, 1.0))
        .collider_size(V2::new(0.8, 1.6))
        .parameters(parameters)
        .build()?;
    let mut player = Player::new(&controller);
    let mut pickups = Pickups::default();

    let steps = (seconds / DT).round() as u64;
    for step in 0..steps {
        let time = step as f64 * DT;

        level.tick(DT)?;
        player.update(&mut controller, player::script(time), DT);
        controller
            .step(DT, &level.world, &mut pickups)
            .with_context(|| format!("Stepping the controller at t={:.2}", time))?;

        for object in pickups.touched.drain(..) {
            if level.coin() == Some(object) {
                level.collect_coin()?;
                pickups.collected += 1;
            }
        }

        if step % 60 == 0 {
            log::info!(
                "t={:.0} position={:?} velocity={:?} facing_right={} lift={:?} {}",
                time,
                controller.position(),
                controller.velocity(),
                player.is_facing_right(),
                level.lift_position(),
                controller.state()
            );
        }
    }

    Ok((controller, pickups))
}

fn main() -> Result<()> {
    raykin_logging::log_to_stderr();

    let params = Params::from_args();
    let parameters = load_parameters(params.parameters.as_ref())?;
    log::info!("Running for {}s with {:?}", params.seconds, parameters);

    let (controller, pickups) = simulate(parameters, params.seconds)?;
    log::info!(
        "Finished at {:?}, collected {} coin(s)",
        controller.position(),
        pickups.collected
    );
    Ok(())
}
