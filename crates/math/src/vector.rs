use std::ops;

use crate::cast;

/// A 2D vector, used both as a position and as a free direction.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T> From<[T; 2]> for Vec2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<Vec2<T>> for [T; 2] {
    fn from(v: Vec2<T>) -> Self {
        [v.x, v.y]
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: ops::Neg<Output = T>> ops::Neg for Vec2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: ops::Add<Output = T>> ops::Add for Vec2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: ops::AddAssign> ops::AddAssign for Vec2<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: ops::Sub<Output = T>> ops::Sub for Vec2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: ops::SubAssign> ops::SubAssign for Vec2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: ops::Mul<Output = T>> ops::Mul for Vec2<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl<T: ops::Mul<Output = T> + Copy> ops::Mul<T> for Vec2<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: ops::Div<Output = T> + Copy> ops::Div<T> for Vec2<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T> Vec2<T> {
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn splat(t: T) -> Self
    where
        T: Copy,
    {
        Self::new(t, t)
    }

    #[must_use]
    pub fn into_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    #[must_use]
    pub fn map<U>(self, f: impl Fn(T) -> U) -> Vec2<U> {
        Vec2::new(f(self.x), f(self.y))
    }
}

impl<T: num::Zero> Vec2<T> {
    #[must_use]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T> Vec2<T>
where
    T: ops::Mul<Output = T> + ops::Add<Output = T>,
{
    #[must_use]
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y
    }
}

impl<T> Vec2<T>
where
    T: ops::Mul<Output = T> + ops::Add<Output = T> + Copy,
{
    #[must_use]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }
}

impl<T: ops::Neg<Output = T>> Vec2<T> {
    /// The vector rotated a quarter turn counter-clockwise, `(-y, x)`.
    #[must_use]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl<T> Vec2<T>
where
    T: ops::Mul<Output = T> + ops::Sub<Output = T>,
{
    /// Perpendicular dot product, AKA the 2d cross product.
    #[must_use]
    pub fn perp_dot(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }
}

impl<T: num::Float> Vec2<T> {
    #[must_use]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns a unit vector with the given angle from the unit X vector.
    #[must_use]
    pub fn from_unit_angle(angle: T) -> Self {
        let (y, x) = angle.sin_cos();
        Self::new(x, y)
    }

    #[must_use]
    pub fn rotate_angle(self, angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[must_use]
    pub fn trunc(self) -> Self {
        self.map(num::Float::trunc)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: num::NumCast> Vec2<T> {
    #[must_use]
    pub fn cast<U: num::NumCast>(self) -> Vec2<U> {
        self.map(cast::cast)
    }

    #[must_use]
    pub fn try_cast<U: num::NumCast>(self) -> Option<Vec2<U>> {
        Some(Vec2::new(cast::try_cast(self.x)?, cast::try_cast(self.y)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perp_is_counter_clockwise() {
        let v = Vec2::new(3.0, 1.0);
        assert_eq!(v.perp(), Vec2::new(-1.0, 3.0));
        assert_eq!(v.dot(v.perp()), 0.0);
        assert!(v.perp_dot(v.perp()) > 0.0);
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1, 2);
        let b = Vec2::new(4, -3);
        assert_eq!(a + b, Vec2::new(5, -1));
        assert_eq!(a - b, Vec2::new(-3, 5));
        assert_eq!(-a, Vec2::new(-1, -2));
        assert_eq!(a * 3, Vec2::new(3, 6));
        assert_eq!(a.dot(b), -2);
        assert_eq!(b.length_squared(), 25);
    }

    #[test]
    fn rotate_quarter_turn() {
        let v = Vec2::new(2.0f64, 0.0).rotate_angle(std::f64::consts::FRAC_PI_2);
        assert!((v.x - 0.0).abs() < 1e-12);
        assert!((v.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn casts() {
        assert_eq!(Vec2::new(1.7f64, -1.7).cast::<i32>(), Vec2::new(1, -1));
        assert_eq!(Vec2::new(-1i32, 2).try_cast::<u32>(), None);
    }
}
