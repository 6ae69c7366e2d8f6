use std::ops;

use gjk2d_math::Vec2;

use crate::support::SupportMap;

/// The point reflection of a shape through the origin.
#[derive(Debug, Copy, Clone)]
pub struct Negate<S>(pub S);

impl<S, N> SupportMap<N> for Negate<S>
where
    N: ops::Neg<Output = N>,
    S: SupportMap<N>,
{
    fn support_point(&self, dir: Vec2<N>) -> Vec2<N> {
        -self.0.support_point(-dir)
    }
}

/// The Minkowski sum of two shapes.
#[derive(Debug, Copy, Clone)]
pub struct Add<A, B>(pub A, pub B);

impl<A, B, N> SupportMap<N> for Add<A, B>
where
    A: SupportMap<N>,
    B: SupportMap<N>,
    N: ops::Add<Output = N> + Copy,
{
    fn support_point(&self, dir: Vec2<N>) -> Vec2<N> {
        self.0.support_point(dir) + self.1.support_point(dir)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Translate<S, N>(pub S, pub Vec2<N>);

impl<S, N> SupportMap<N> for Translate<S, N>
where
    N: ops::Add<Output = N> + Copy,
    S: SupportMap<N>,
{
    fn support_point(&self, dir: Vec2<N>) -> Vec2<N> {
        self.0.support_point(dir) + self.1
    }
}
