//! A kinematic 2D character controller.
//!
//! The controller moves an axis-aligned box through anything implementing [raykin_physics::GeometryQuery].  Each
//! step, rays are cast from just inside the box along the direction of motion, and the displacement is cut short
//! at whatever they hit.  Walkable slopes lift or lower the box instead of stopping it, and one-way platforms only
//! stop it from above.
//!
//! ```no_run
//! use raykin_controller::*;
//! use raykin_physics::*;
//!
//! # fn main() -> raykin_controller::Result<()> {
//! let world = GeometryWorld::new();
//! let mut player = ControllerBuilder::new()
//!     .collider_size(V2::new(1.0, 2.0))
//!     .build()?;
//!
//! player.set_horizontal_force(4.0);
//! if player.can_jump() {
//!     player.jump();
//! }
//! player.step(1.0 / 60.0, &world, &mut ())?;
//! # Ok(())
//! # }
//! ```
mod bounds;
mod controller;
mod errors;
mod overlap;
mod parameters;
mod state;
mod sweep;

pub use bounds::*;
pub use controller::*;
pub use errors::*;
pub use overlap::{OverlapEvent, OverlapListener};
pub use parameters::*;
pub use state::*;
