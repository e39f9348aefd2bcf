//! Lets a tilemap stand in as level geometry.
//!
//! Tile `(x, y)` fills the unit square from `(x, y)` to `(x + 1, y + 1)`.  Rays only look at the cells they cross, so
//! queries cost the length of the ray rather than the size of the level.
use raykin_physics::*;

use crate::{CollisionTile, Tilemap};

/// The id reported for hits against the tile at `coord`.
pub fn tile_object_id(coord: V2<u16>) -> ObjectId {
    ObjectId::new((u64::from(coord.x) << 16) | u64::from(coord.y))
}

/// Inverse of [tile_object_id].
pub fn object_id_tile(id: ObjectId) -> Option<V2<u16>> {
    let raw = id.get();
    if raw > u32::MAX as u64 {
        return None;
    }

    Some(V2::new((raw >> 16) as u16, (raw & 0xffff) as u16))
}

fn tile_box(coord: V2<u16>) -> Option<Aabb> {
    let p1 = V2::new(f64::from(coord.x), f64::from(coord.y));
    Aabb::from_points(p1, p1 + V2::new(1.0, 1.0)).ok()
}

fn cell_to_tile(cell: V2<i64>) -> Option<V2<u16>> {
    Some(V2::new(
        u16::try_from(cell.x).ok()?,
        u16::try_from(cell.y).ok()?,
    ))
}

/// Clamp a world coordinate range onto tile indices, as a half-open range.
fn tile_range(min: f64, max: f64) -> Option<(u16, u16)> {
    let lo = min.floor().max(0.0);
    let hi = max.ceil().min(f64::from(u16::MAX));
    // Also rejects NaN.
    if !(lo < hi) {
        return None;
    }

    Some((lo as u16, hi as u16))
}

impl<T: CollisionTile> GeometryQuery for Tilemap<T> {
    fn cast_ray(&self, ray: &Ray, filter: &QueryFilter<'_>) -> Option<RayHit> {
        for cell in ray.raycast() {
            let coord = match cell_to_tile(cell) {
                Some(c) => c,
                None => continue,
            };

            let tile = self.get(coord);
            let layers = tile.layers();
            if layers.is_empty() {
                continue;
            }

            let object = tile_object_id(coord);
            if !filter.accepts(object, layers, tile.is_one_way()) {
                continue;
            }

            let result = match tile_box(coord).and_then(|b| Shape::Aabb(b).raycast(ray)) {
                Some(r) if !r.inside => r,
                _ => continue,
            };

            if let Some(normal) = result.normal {
                return Some(RayHit {
                    distance: result.distance,
                    point: result.point,
                    normal,
                    object,
                });
            }
        }

        None
    }

    fn overlapping(&self, area: &Aabb, mask: LayerMask, out: &mut Vec<Overlap>) {
        let p1 = area.get_p1();
        let p2 = area.get_p2();
        let ((x1, x2), (y1, y2)) = match (tile_range(p1.x, p2.x), tile_range(p1.y, p2.y)) {
            (Some(x), Some(y)) => (x, y),
            _ => return,
        };

        let cells = match Aabb::from_points(V2::new(x1, y1), V2::new(x2, y2))
            .map_err(Error::from)
            .and_then(|b| b.iter_tiles())
        {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Skipping overlap query for {:?}: {}", area, e);
                return;
            }
        };

        for coord in cells {
            let tile = self.get(coord);
            let layers = tile.layers();
            if !layers.intersects(mask) || !tile_box(coord).map_or(false, |b| b.overlaps(area)) {
                continue;
            }

            out.push(Overlap {
                object: tile_object_id(coord),
                layers,
                one_way: tile.is_one_way(),
            });
        }
    }

    /// Tiles never move, but report their centers so movers standing on them see a zero delta.
    fn object_position(&self, object: ObjectId) -> Option<V2> {
        let coord = object_id_tile(object)?;
        if self.get(coord).layers().is_empty() {
            return None;
        }

        Some(V2::new(f64::from(coord.x) + 0.5, f64::from(coord.y) + 0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::*;

    use crate::BasicTile;

    fn level() -> Tilemap<BasicTile> {
        Tilemap::from_ascii(concat!(
            "......\n", //
            "..==.2\n", //
            "#.....\n", //
            "######\n",
        ))
        .unwrap()
    }

    #[test]
    fn test_object_ids() {
        let coord = V2::new(513u16, 7u16);
        assert_eq!(object_id_tile(tile_object_id(coord)), Some(coord));
        assert_eq!(object_id_tile(ObjectId::new(1 << 40)), None);
    }

    #[test]
    fn test_object_position() {
        let map = level();
        assert_eq!(map.object_position(tile_object_id(V2::new(2, 2))), Some(V2::new(2.5, 2.5)));
        assert_eq!(map.object_position(tile_object_id(V2::new(1, 1))), None);
        assert_eq!(map.object_position(ObjectId::new(1 << 40)), None);
    }

    #[test]
    fn test_ray_down_onto_floor() {
        let map = level();
        let ray = Ray::new(V2::new(2.5, 3.5), V2::DOWN, 5.0);

        let hit = map.cast_ray(&ray, &QueryFilter::new(LayerMask::ALL)).unwrap();
        assert_eq!(hit.object, tile_object_id(V2::new(2, 2)));
        assert_relative_eq!(hit.distance, 0.5);
        assert_eq!(hit.normal, V2::UP);

        let skip = QueryFilter::new(LayerMask::ALL).one_way(OneWayPolicy::Skip);
        let hit = map.cast_ray(&ray, &skip).unwrap();
        assert_eq!(hit.object, tile_object_id(V2::new(2, 0)));
        assert_relative_eq!(hit.distance, 2.5);
    }

    #[test]
    fn test_ray_sideways_into_wall() {
        let map = level();
        let ray = Ray::new(V2::new(3.0, 1.5), V2::LEFT, 10.0);
        let hit = map.cast_ray(&ray, &QueryFilter::new(LayerMask::DEFAULT)).unwrap();
        assert_eq!(hit.object, tile_object_id(V2::new(0, 1)));
        assert_relative_eq!(hit.distance, 2.0);
        assert_eq!(hit.normal, V2::RIGHT);
    }

    #[test]
    fn test_ray_ignores_masked_and_short() {
        let map = level();
        // The trigger at (5, 2) is on layer 2 only.
        let ray = Ray::new(V2::new(4.5, 2.5), V2::RIGHT, 3.0);
        assert!(map.cast_ray(&ray, &QueryFilter::new(LayerMask::DEFAULT)).is_none());
        assert!(map.cast_ray(&ray, &QueryFilter::new(LayerMask::layer(2))).is_some());

        let short = Ray::new(V2::new(2.5, 3.5), V2::DOWN, 0.25);
        assert!(map.cast_ray(&short, &QueryFilter::new(LayerMask::ALL)).is_none());
    }

    #[test]
    fn test_ray_off_the_map() {
        let map = level();
        let ray = Ray::new(V2::new(-3.0, 0.5), V2::RIGHT, 2.0);
        assert!(map.cast_ray(&ray, &QueryFilter::new(LayerMask::ALL)).is_none());
        let ray = Ray::new(V2::new(-3.0, 0.5), V2::RIGHT, 4.0);
        let hit = map.cast_ray(&ray, &QueryFilter::new(LayerMask::ALL)).unwrap();
        assert_relative_eq!(hit.distance, 3.0);
    }

    #[test]
    fn test_overlapping() {
        let map = level();
        let mut out = vec![];

        // Standing exactly on the floor touches but doesn't overlap it.
        let player = Aabb::from_points(V2::new(1.5, 1.0), V2::new(2.5, 2.0)).unwrap();
        map.overlapping(&player, LayerMask::ALL, &mut out);
        assert!(out.is_empty());

        let player = player.translate(V2::new(0.0, 0.5));
        map.overlapping(&player, LayerMask::ALL, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].object, tile_object_id(V2::new(2, 2)));
        assert!(out[0].one_way);

        out.clear();
        let near_trigger = Aabb::from_points(V2::new(4.8, 2.2), V2::new(5.2, 2.8)).unwrap();
        map.overlapping(&near_trigger, LayerMask::layer(2), &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].layers, LayerMask::layer(2));
        assert!(!out[0].one_way);
    }

    #[test]
    fn test_overlapping_outside_map() {
        let map = level();
        let mut out = vec![];
        let area = Aabb::from_points(V2::new(-5.0, -5.0), V2::new(-1.0, -1.0)).unwrap();
        map.overlapping(&area, LayerMask::ALL, &mut out);
        assert!(out.is_empty());
    }
}
