//! Waypoint paths for moving platforms and other scripted movers.
//!
//! A [PathDefinition] is a list of points.  Walking it with [PathDefinition::points] bounces back and forth between
//! the ends forever, and [FollowPath] moves a position along that walk one frame at a time.
mod definition;
mod errors;
mod follow;

pub use definition::*;
pub use errors::*;
pub use follow::*;
