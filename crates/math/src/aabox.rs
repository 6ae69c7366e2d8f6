use std::ops;

use crate::vector::Vec2;

/// An axis-aligned 2D box, closed on every side.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Box2<T> {
    pub min: Vec2<T>,
    pub max: Vec2<T>,
}

impl<T> Box2<T> {
    pub const fn new(min: Vec2<T>, max: Vec2<T>) -> Self {
        Self { min, max }
    }
}

impl<T: Copy> Box2<T> {
    /// The four corners in counter-clockwise order, starting from `min`.
    pub fn corners(self) -> [Vec2<T>; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }
}

impl<T> Box2<T>
where
    T: ops::Add<Output = T> + ops::Sub<Output = T> + Copy,
{
    pub fn with_size(min: Vec2<T>, size: Vec2<T>) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    pub fn size(self) -> Vec2<T> {
        self.max - self.min
    }

    pub fn translate(self, offset: Vec2<T>) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

impl<T: PartialOrd + Copy> Box2<T> {
    /// The smallest box containing every given point, or `None` if there are no points.
    pub fn from_points(points: impl IntoIterator<Item = Vec2<T>>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::new(first, first), |b, p| b.expand_to(p)))
    }

    pub fn expand_to(self, p: Vec2<T>) -> Self {
        let lesser = |a: T, b: T| if b < a { b } else { a };
        let greater = |a: T, b: T| if b > a { b } else { a };
        Self {
            min: Vec2::new(lesser(self.min.x, p.x), lesser(self.min.y, p.y)),
            max: Vec2::new(greater(self.max.x, p.x), greater(self.max.y, p.y)),
        }
    }

    pub fn contains_point(self, p: Vec2<T>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
