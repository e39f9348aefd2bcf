//! Geometry primitives and queries for 2D movers.
//!
//! This crate knows about vectors, boxes, segments and rays, and defines [GeometryQuery], the one interface a
//! character controller needs in order to move through a level.  [GeometryWorld] is a simple implementation of it.
mod aabb;
mod collision_tests;
mod errors;
mod layers;
mod query;
mod ray;
mod raycasting;
mod shape;
mod v2;
mod world;

pub use aabb::*;
pub use errors::*;
pub use layers::*;
pub use query::*;
pub use ray::*;
pub use raycasting::*;
pub use shape::*;
pub use v2::*;
pub use world::*;
