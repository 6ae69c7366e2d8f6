use std::ops;

use gjk2d_math::{Box2, Vec2};

use crate::error::Error;

/// Anything that can present itself as the ordered vertex list of a convex polygon.
///
/// Winding order does not matter. A shape with no vertices is never accepted by the collision
/// routines, they fail with [`Error::EmptyShape`] instead.
pub trait ConvexShape<N> {
    fn vertices(&self) -> &[Vec2<N>];
}

impl<N> ConvexShape<N> for [Vec2<N>] {
    fn vertices(&self) -> &[Vec2<N>] {
        self
    }
}

impl<N, const K: usize> ConvexShape<N> for [Vec2<N>; K] {
    fn vertices(&self) -> &[Vec2<N>] {
        self.as_slice()
    }
}

impl<N> ConvexShape<N> for Vec<Vec2<N>> {
    fn vertices(&self) -> &[Vec2<N>] {
        self.as_slice()
    }
}

impl<'a, S, N> ConvexShape<N> for &'a S
where
    S: ConvexShape<N> + ?Sized,
{
    fn vertices(&self) -> &[Vec2<N>] {
        (**self).vertices()
    }
}

impl<S, N> ConvexShape<N> for Box<S>
where
    S: ConvexShape<N> + ?Sized,
{
    fn vertices(&self) -> &[Vec2<N>] {
        (**self).vertices()
    }
}

/// An owned convex polygon with at least one vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<N> {
    vertices: Vec<Vec2<N>>,
}

impl<N> ConvexShape<N> for Polygon<N> {
    fn vertices(&self) -> &[Vec2<N>] {
        &self.vertices
    }
}

impl<N> Polygon<N> {
    pub fn new(vertices: impl Into<Vec<Vec2<N>>>) -> Result<Self, Error> {
        let vertices = vertices.into();
        if vertices.is_empty() {
            return Err(Error::EmptyShape);
        }
        Ok(Self { vertices })
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[Vec2<N>] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Vec2<N>> {
        self.vertices
    }
}

impl<N: Copy> Polygon<N> {
    /// An axis-aligned rectangle, wound counter-clockwise from `bounds.min`.
    pub fn from_box(bounds: Box2<N>) -> Self {
        Self {
            vertices: bounds.corners().to_vec(),
        }
    }
}

impl<N: ops::AddAssign + Copy> Polygon<N> {
    /// Move every vertex by `offset`.
    pub fn shift(&mut self, offset: Vec2<N>) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    #[must_use]
    pub fn shifted(mut self, offset: Vec2<N>) -> Self {
        self.shift(offset);
        self
    }
}

impl<N> Polygon<N>
where
    N: num::Num + PartialOrd + Copy,
{
    /// Returns true if `p` lies inside the polygon or on its boundary.
    ///
    /// Assumes the vertices form a convex polygon. Degenerate polygons (a single point, or
    /// collinear vertices) contain exactly the points of their segment.
    pub fn contains_point(&self, p: Vec2<N>) -> bool {
        let mut left = false;
        let mut right = false;
        for (i, &a) in self.vertices.iter().enumerate() {
            let b = self.vertices[(i + 1) % self.vertices.len()];
            let side = (b - a).perp_dot(p - a);
            if side > N::zero() {
                left = true;
            } else if side < N::zero() {
                right = true;
            }

            if left && right {
                return false;
            }
        }

        Box2::from_points(self.vertices.iter().copied())
            .is_some_and(|bounds| bounds.contains_point(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_polygon_is_rejected() {
        assert_eq!(Polygon::<f64>::new(vec![]), Err(Error::EmptyShape));
    }

    #[test]
    fn shift_moves_every_vertex() {
        let square = Polygon::from_box(Box2::new(Vec2::new(0, 0), Vec2::new(1, 1)));
        let moved = square.shifted(Vec2::new(10, -2));
        assert_eq!(
            moved.vertices(),
            &[
                Vec2::new(10, -2),
                Vec2::new(11, -2),
                Vec2::new(11, -1),
                Vec2::new(10, -1)
            ]
        );
    }

    #[test]
    fn contains_point_is_closed() {
        let square = Polygon::from_box(Box2::new(Vec2::new(0, 0), Vec2::new(2, 2)));
        assert!(square.contains_point(Vec2::new(1, 1)));
        assert!(square.contains_point(Vec2::new(2, 1)));
        assert!(square.contains_point(Vec2::new(0, 0)));
        assert!(!square.contains_point(Vec2::new(3, 1)));
        assert!(!square.contains_point(Vec2::new(-1, -1)));
    }

    #[test]
    fn contains_point_either_winding() {
        let ccw = Polygon::new(vec![Vec2::new(0, 0), Vec2::new(4, 0), Vec2::new(0, 4)]).unwrap();
        let cw = Polygon::new(vec![Vec2::new(0, 0), Vec2::new(0, 4), Vec2::new(4, 0)]).unwrap();
        for p in [Vec2::new(1, 1), Vec2::new(2, 2)] {
            assert!(ccw.contains_point(p));
            assert!(cw.contains_point(p));
        }
        assert!(!ccw.contains_point(Vec2::new(3, 3)));
        assert!(!cw.contains_point(Vec2::new(3, 3)));
    }

    #[test]
    fn contains_point_degenerate() {
        let point = Polygon::new(vec![Vec2::new(1, 1)]).unwrap();
        assert!(point.contains_point(Vec2::new(1, 1)));
        assert!(!point.contains_point(Vec2::new(1, 2)));

        let segment = Polygon::new(vec![Vec2::new(0, 0), Vec2::new(2, 2)]).unwrap();
        assert!(segment.contains_point(Vec2::new(1, 1)));
        assert!(!segment.contains_point(Vec2::new(3, 3)));
        assert!(!segment.contains_point(Vec2::new(1, 0)));
    }
}
