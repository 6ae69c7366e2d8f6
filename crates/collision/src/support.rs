use std::ops;

use gjk2d_math::Vec2;

use crate::{
    error::Error,
    shape::{ConvexShape, Polygon},
};

/// Returns the vertex of `shape` furthest along `dir`, or `None` if the shape has no vertices.
///
/// When several vertices are equally far along `dir`, the first one in vertex order is returned.
/// The direction does not need to be normalized.
pub fn support<N, S>(shape: &S, dir: Vec2<N>) -> Option<Vec2<N>>
where
    N: num::Num + PartialOrd + Copy,
    S: ConvexShape<N> + ?Sized,
{
    let (&first, rest) = shape.vertices().split_first()?;

    let mut best = first;
    let mut max = dir.dot(first);
    for &v in rest {
        let d = dir.dot(v);
        if d > max {
            max = d;
            best = v;
        }
    }

    Some(best)
}

/// A trait for convex shapes that are representable by a support mapping function.
///
/// A "support mapping function", or just "support function", finds the point inside a given convex
/// shape that is furthest in a given direction. Since the shape is convex, the provided direction
/// and the returned point produce a "supporting line" that touches the shape at at least one point,
/// where every point in the shape lies on the side of the line opposite the direction. Any convex
/// shape is uniquely determined by its support function.
///
/// Unlike [`support`], a `SupportMap` is total: it always has a point to return.
pub trait SupportMap<N> {
    /// Produce the point in the shape furthest in the given direction.
    ///
    /// The direction is not required to be normalized and may be zero, in which case any point of
    /// the shape may be returned.
    fn support_point(&self, dir: Vec2<N>) -> Vec2<N>;
}

impl<'a, S, N> SupportMap<N> for &'a S
where
    S: SupportMap<N> + ?Sized,
{
    fn support_point(&self, dir: Vec2<N>) -> Vec2<N> {
        (**self).support_point(dir)
    }
}

impl<S, N> SupportMap<N> for Box<S>
where
    S: SupportMap<N> + ?Sized,
{
    fn support_point(&self, dir: Vec2<N>) -> Vec2<N> {
        (**self).support_point(dir)
    }
}

/// A `ConvexShape` that has been checked to have at least one vertex, which makes its vertex
/// support function total.
#[derive(Debug, Copy, Clone)]
pub struct Hull<S>(S);

impl<S> Hull<S> {
    pub fn new<N>(shape: S) -> Result<Self, Error>
    where
        S: ConvexShape<N>,
    {
        if shape.vertices().is_empty() {
            Err(Error::EmptyShape)
        } else {
            Ok(Self(shape))
        }
    }

    pub fn shape(&self) -> &S {
        &self.0
    }

    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S, N> SupportMap<N> for Hull<S>
where
    N: num::Num + PartialOrd + Copy,
    S: ConvexShape<N>,
{
    fn support_point(&self, dir: Vec2<N>) -> Vec2<N> {
        support(&self.0, dir).expect("hull has at least one vertex")
    }
}

impl<N> SupportMap<N> for Polygon<N>
where
    N: num::Num + PartialOrd + Copy,
{
    fn support_point(&self, dir: Vec2<N>) -> Vec2<N> {
        support(self, dir).expect("polygon has at least one vertex")
    }
}

/// The point of the Minkowski difference `A - B` furthest along `dir`.
///
/// The difference contains the origin if and only if `A` and `B` share at least one point.
pub fn minkowski_support<N, A, B>(a: &A, b: &B, dir: Vec2<N>) -> Vec2<N>
where
    N: ops::Neg<Output = N> + ops::Sub<Output = N> + Copy,
    A: SupportMap<N> + ?Sized,
    B: SupportMap<N> + ?Sized,
{
    a.support_point(dir) - b.support_point(-dir)
}
