//! Tilemaps, and collision against them.
//!
//! A [Tilemap] stores tiles sparsely.  Maps of [CollisionTile] implement [raykin_physics::GeometryQuery], so a
//! controller can move through them directly.
mod errors;
mod geometry;
mod tile_trait;
mod tilemap;

#[cfg(test)]
mod tests;

pub use errors::*;
pub use geometry::*;
pub use tile_trait::*;
pub use tilemap::*;
