use crate::raycasting::*;

/// A ray-aabb intersection test using the slab test, extended to report which face was entered.
///
/// Hits beyond the ray's length are misses.  A ray which grazes a face (travels exactly along an edge) misses.
pub(crate) fn ray_aabb_test(ray: &Ray, aabb: &Aabb) -> Option<RaycastingResult> {
    // Axis-aligned rays divide by zero here, producing infinities.  If the ray is also exactly on one of the box's
    // lines, we get `inf * 0.0 = NaN`, which the min/max clamping below turns into an empty interval.
    let inv_dx = 1.0 / ray.direction.x;
    let inv_dy = 1.0 / ray.direction.y;

    let lo = aabb.get_p1();
    let hi = aabb.get_p2();

    // Parametric distances at which the ray crosses each of the four lines bounding the box.
    let tx1 = (lo.x - ray.origin.x) * inv_dx;
    let tx2 = (hi.x - ray.origin.x) * inv_dx;
    let ty1 = (lo.y - ray.origin.y) * inv_dy;
    let ty2 = (hi.y - ray.origin.y) * inv_dy;

    // Rust's min/max prefer the non-NaN argument, so folding in the infinities maps an all-NaN pair to an interval
    // which can never overlap anything.
    let txmin = tx1.min(tx2).min(f64::INFINITY);
    let txmax = tx1.max(tx2).max(f64::NEG_INFINITY);
    let tymin = ty1.min(ty2).min(f64::INFINITY);
    let tymax = ty1.max(ty2).max(f64::NEG_INFINITY);

    // The ray is inside the box while it is inside both slabs.
    let tmin = txmin.max(tymin);
    let tmax = txmax.min(tymax);

    let tray = tmin.max(0.0);
    if tray >= tmax || tray > ray.length {
        return None;
    }

    let point = ray.evaluate(tray);

    if tmin < 0.0 {
        return Some(RaycastingResult {
            point,
            distance: 0.0,
            normal: None,
            inside: true,
        });
    }

    // The ray started outside, so `tray` is exactly one of the four crossings, and that crossing names the face.
    let normal = if tray == tx1 {
        V2::LEFT
    } else if tray == tx2 {
        V2::RIGHT
    } else if tray == ty1 {
        V2::DOWN
    } else if tray == ty2 {
        V2::UP
    } else {
        unreachable!("The ray must equal one of the 4 t values");
    };

    Some(RaycastingResult {
        point,
        distance: tray,
        normal: Some(normal),
        inside: false,
    })
}
