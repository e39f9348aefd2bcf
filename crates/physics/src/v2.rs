//! A 2-dimensional vector/point.
use num::Num;

/// A 2D vector.  Defaults to `f64` components; tile coordinates use `V2<u16>`.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct V2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T: Num> V2<T> {
    pub const fn new(x: T, y: T) -> Self {
        V2 { x, y }
    }
}

impl<T> V2<T>
where
    T: Num + Copy,
    f64: From<T>,
{
    pub fn length_squared(&self) -> f64 {
        let x: f64 = self.x.into();
        let y: f64 = self.y.into();
        x * x + y * y
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    #[must_use = "This function doesn't modify the vector in place"]
    pub fn normalize(self) -> V2<f64> {
        let l = self.length();
        V2 {
            x: f64::from(self.x) / l,
            y: f64::from(self.y) / l,
        }
    }

    pub fn dot(&self, other: &V2<T>) -> f64 {
        let sx: f64 = self.x.into();
        let sy: f64 = self.y.into();
        let ox: f64 = other.x.into();
        let oy: f64 = other.y.into();

        sx * ox + sy * oy
    }

    /// The z component of the 3d cross product of the two vectors.
    pub fn cross(&self, other: &V2<T>) -> f64 {
        let sx: f64 = self.x.into();
        let sy: f64 = self.y.into();
        let ox: f64 = other.x.into();
        let oy: f64 = other.y.into();

        sx * oy - sy * ox
    }

    pub fn distance_squared(&self, other: &V2<T>) -> f64 {
        let x1: f64 = self.x.into();
        let y1: f64 = self.y.into();
        let x2: f64 = other.x.into();
        let y2: f64 = other.y.into();
        (x2 - x1).powi(2) + (y2 - y1).powi(2)
    }

    pub fn distance(&self, other: &V2<T>) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

impl V2 {
    pub const ZERO: V2 = V2 { x: 0.0, y: 0.0 };
    pub const UP: V2 = V2 { x: 0.0, y: 1.0 };
    pub const DOWN: V2 = V2 { x: 0.0, y: -1.0 };
    pub const LEFT: V2 = V2 { x: -1.0, y: 0.0 };
    pub const RIGHT: V2 = V2 { x: 1.0, y: 0.0 };

    /// Componentwise absolute value.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn abs(self) -> V2 {
        V2::new(self.x.abs(), self.y.abs())
    }

    /// Rotate 90 degrees counterclockwise.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn perp(self) -> V2 {
        V2::new(-self.y, self.x)
    }

    /// Componentwise multiplication.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn scale(self, other: V2) -> V2 {
        V2::new(self.x * other.x, self.y * other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Linear interpolation toward `target`.  `t` is clamped to `[0, 1]`.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn lerp(self, target: V2, t: f64) -> V2 {
        let t = t.clamp(0.0, 1.0);
        V2::new(
            self.x + (target.x - self.x) * t,
            self.y + (target.y - self.y) * t,
        )
    }

    /// Move toward `target` by at most `max_delta`, never overshooting it.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn move_towards(self, target: V2, max_delta: f64) -> V2 {
        let delta = target - self;
        let dist = delta.length();
        if dist <= max_delta || dist == 0.0 {
            return target;
        }
        self + delta * (max_delta / dist)
    }
}

impl<T: Num> std::ops::Add for V2<T> {
    type Output = V2<T>;

    fn add(self, rhs: V2<T>) -> V2<T> {
        V2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Num + Copy> std::ops::AddAssign for V2<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
    }
}

impl<T: Copy> std::ops::Mul<f64> for V2<T>
where
    f64: From<T>,
{
    type Output = V2<f64>;

    fn mul(self, rhs: f64) -> Self::Output {
        V2 {
            x: f64::from(self.x) * rhs,
            y: f64::from(self.y) * rhs,
        }
    }
}

impl<T: Copy> std::ops::Div<f64> for V2<T>
where
    f64: From<T>,
{
    type Output = V2<f64>;

    fn div(self, rhs: f64) -> Self::Output {
        V2 {
            x: f64::from(self.x) / rhs,
            y: f64::from(self.y) / rhs,
        }
    }
}

impl<T: std::ops::Neg> std::ops::Neg for V2<T> {
    type Output = V2<<T as std::ops::Neg>::Output>;

    fn neg(self) -> Self::Output {
        V2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: Num> std::ops::Sub for V2<T> {
    type Output = V2<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        V2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Num + Copy> std::ops::SubAssign for V2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x = self.x - rhs.x;
        self.y = self.y - rhs.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::*;

    #[test]
    fn test_move_towards() {
        let start = V2::new(0.0, 0.0);
        let target = V2::new(3.0, 4.0);
        let step = start.move_towards(target, 1.0);
        assert_relative_eq!(step.x, 0.6);
        assert_relative_eq!(step.y, 0.8);
        assert_eq!(start.move_towards(target, 10.0), target);
    }

    #[test]
    fn test_lerp_clamps() {
        let a = V2::new(1.0, 1.0);
        let b = V2::new(3.0, -1.0);
        assert_eq!(a.lerp(b, 0.5), V2::new(2.0, 0.0));
        assert_eq!(a.lerp(b, 4.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }

    #[test]
    fn test_cross_and_perp() {
        let a = V2::new(1.0, 0.0);
        assert_eq!(a.perp(), V2::new(0.0, 1.0));
        assert_relative_eq!(a.cross(&V2::new(0.0, 1.0)), 1.0);
        assert_relative_eq!(V2::new(0.0, 1.0).cross(&a), -1.0);
    }
}
