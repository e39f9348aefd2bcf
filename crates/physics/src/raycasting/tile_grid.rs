//! Walks the unit grid cells a ray passes through.
//!
//! An implementation of the algorithm found at
//! http://playtechs.blogspot.com/2007/03/raytracing-on-grid.html
//!
//! Cells are yielded in the order the ray enters them, so the first cell containing a hit also contains the nearest
//! hit.
use crate::*;

pub struct TileGridRaycastPointIterator {
    dx: f64,
    dy: f64,
    cell: V2<i64>,
    remaining: i64,
    x_inc: i64,
    y_inc: i64,
    error: f64,
}

impl TileGridRaycastPointIterator {
    pub fn new(ray: &Ray) -> TileGridRaycastPointIterator {
        let start = ray.origin;
        let end = ray.end();
        let dx = (end.x - start.x).abs();
        let dy = (end.y - start.y).abs();
        let x = start.x.floor() as i64;
        let y = start.y.floor() as i64;
        let mut remaining: i64 = 1;
        let x_inc: i64;
        let y_inc: i64;
        let mut error: f64;

        if dx == 0.0 {
            x_inc = 0;
            error = f64::INFINITY;
        } else if end.x > start.x {
            x_inc = 1;
            remaining += end.x.floor() as i64 - x;
            error = (start.x.floor() + 1.0 - start.x) * dy;
        } else {
            x_inc = -1;
            remaining += x - end.x.floor() as i64;
            error = (start.x - start.x.floor()) * dy;
        }

        if dy == 0.0 {
            y_inc = 0;
            error -= f64::INFINITY;
        } else if end.y > start.y {
            y_inc = 1;
            remaining += end.y.floor() as i64 - y;
            error -= (start.y.floor() + 1.0 - start.y) * dx;
        } else {
            y_inc = -1;
            remaining += y - end.y.floor() as i64;
            error -= (start.y - start.y.floor()) * dx;
        }

        // A zero length ray ends up with `inf - inf`; it only ever visits its own cell.
        if error.is_nan() {
            error = 0.0;
        }

        TileGridRaycastPointIterator {
            dx,
            dy,
            cell: V2::new(x, y),
            remaining,
            x_inc,
            y_inc,
            error,
        }
    }
}

impl Iterator for TileGridRaycastPointIterator {
    type Item = V2<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining <= 0 {
            return None;
        }

        self.remaining -= 1;
        let cell = self.cell;
        if self.error > 0.0 {
            self.cell.y += self.y_inc;
            self.error -= self.dx;
        } else {
            self.cell.x += self.x_inc;
            self.error += self.dy;
        }
        Some(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_one_simple() {
        let directions = vec![(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
        for (x, y) in directions.into_iter() {
            let test = Ray::new(V2::new(0.0, 0.0), V2::new(x, y), 1.0)
                .raycast()
                .collect::<Vec<_>>();
            let correct = vec![V2::new(0, 0), V2::new(x as i64, y as i64)];
            assert_eq!(test, correct);
        }
    }

    #[test]
    fn test_length_zero_simple() {
        let directions = vec![(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
        let correct = [V2::new(0i64, 0i64)];
        for (x, y) in directions.into_iter() {
            let test = Ray::new(V2::new(0.0, 0.0), V2::new(x, y), 0.0)
                .raycast()
                .collect::<Vec<_>>();
            assert_eq!(test, correct);
        }
    }

    #[test]
    fn test_downward_from_inside_cell() {
        // Feet just above a tile boundary, looking down into the tile below.
        let test = Ray::new(V2::new(2.5, 3.02), V2::DOWN, 0.5)
            .raycast()
            .collect::<Vec<_>>();
        assert_eq!(test, vec![V2::new(2, 3), V2::new(2, 2)]);
    }

    #[test]
    fn test_diagonal() {
        let test = Ray::from_points(V2::new(0.5, 0.5), V2::new(1.5, 1.5))
            .raycast()
            .collect::<Vec<_>>();
        assert_eq!(test, vec![V2::new(0, 0), V2::new(1, 0), V2::new(1, 1)]);
    }
}
