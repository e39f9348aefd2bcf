mod aabb_aabb;
mod aabb_segment;

pub(crate) use aabb_aabb::*;
pub(crate) use aabb_segment::*;
