//! The `GeometryWorld` is a flat collection of static colliders which answers [GeometryQuery] by brute force.
//!
//! Good enough for levels with a few hundred colliders.  Tile-based levels should use a tilemap instead, which only
//! looks at the cells a ray actually crosses.
use slab::Slab;

use crate::*;

/// A piece of static level geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Collider {
    pub(crate) shape: Shape,
    pub(crate) layers: LayerMask,
    pub(crate) one_way: bool,
}

impl Collider {
    /// A solid collider on the default layer.
    pub fn new(shape: impl Into<Shape>) -> Collider {
        Collider {
            shape: shape.into(),
            layers: LayerMask::DEFAULT,
            one_way: false,
        }
    }

    #[must_use]
    pub fn layers(mut self, layers: LayerMask) -> Collider {
        self.layers = layers;
        self
    }

    /// Mark this collider as a one-way platform, which movers can pass through from below.
    #[must_use]
    pub fn one_way(mut self, one_way: bool) -> Collider {
        self.one_way = one_way;
        self
    }

    pub fn get_shape(&self) -> &Shape {
        &self.shape
    }

    pub fn get_layers(&self) -> LayerMask {
        self.layers
    }

    pub fn is_one_way(&self) -> bool {
        self.one_way
    }
}

#[derive(Debug, Default)]
pub struct GeometryWorld {
    colliders: Slab<Collider>,
}

fn object_id(key: usize) -> ObjectId {
    ObjectId::new(key as u64)
}

impl GeometryWorld {
    pub fn new() -> GeometryWorld {
        Default::default()
    }

    pub fn insert(&mut self, collider: Collider) -> ObjectId {
        let key = self.colliders.insert(collider);
        log::trace!("Inserted collider {} into geometry world", key);
        object_id(key)
    }

    pub fn remove(&mut self, id: ObjectId) -> Result<Collider> {
        let key = usize::try_from(id.get()).map_err(|_| Error::UnknownCollider(id))?;
        self.colliders
            .try_remove(key)
            .ok_or(Error::UnknownCollider(id))
    }

    /// Replace the shape of an existing collider, keeping its id, layers and one-way flag.  Used to move platforms.
    pub fn set_shape(&mut self, id: ObjectId, shape: impl Into<Shape>) -> Result<()> {
        let collider = usize::try_from(id.get())
            .ok()
            .and_then(|k| self.colliders.get_mut(k))
            .ok_or(Error::UnknownCollider(id))?;
        collider.shape = shape.into();
        Ok(())
    }

    pub fn get(&self, id: ObjectId) -> Option<&Collider> {
        let key = usize::try_from(id.get()).ok()?;
        self.colliders.get(key)
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Iterate over all colliders in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Collider)> {
        self.colliders.iter().map(|(k, c)| (object_id(k), c))
    }
}

impl GeometryQuery for GeometryWorld {
    fn cast_ray(&self, ray: &Ray, filter: &QueryFilter<'_>) -> Option<RayHit> {
        let mut best: Option<RayHit> = None;

        for (id, collider) in self.iter() {
            if !filter.accepts(id, collider.layers, collider.one_way) {
                continue;
            }

            let hit = collider
                .shape
                .raycast(ray)
                .and_then(|r| crate::query::hit_from_result(r, id));
            let hit = match hit {
                Some(h) => h,
                None => continue,
            };

            // Ties go to the lower id, which is the iteration order.
            if best.map_or(true, |b| hit.distance < b.distance) {
                best = Some(hit);
            }
        }

        best
    }

    fn overlapping(&self, area: &Aabb, mask: LayerMask, out: &mut Vec<Overlap>) {
        for (id, collider) in self.iter() {
            if collider.layers.intersects(mask) && collider.shape.overlaps_aabb(area) {
                out.push(Overlap {
                    object: id,
                    layers: collider.layers,
                    one_way: collider.one_way,
                });
            }
        }
    }

    fn object_position(&self, object: ObjectId) -> Option<V2> {
        self.get(object).map(|c| c.shape.reference_point())
    }
}
