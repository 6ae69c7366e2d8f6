use gjk2d_math::{Box2, Vec2};

use crate::{
    support::SupportMap,
    support_maps::{Add, Negate, Translate},
};

pub trait SupportMapExt<N>: SupportMap<N> {
    fn bound_box(&self) -> Box2<N>
    where
        N: num::Signed + Copy,
    {
        let _0 = N::zero();
        let _1 = N::one();
        let xmin = self.support_point(Vec2::new(-_1, _0)).x;
        let xmax = self.support_point(Vec2::new(_1, _0)).x;
        let ymin = self.support_point(Vec2::new(_0, -_1)).y;
        let ymax = self.support_point(Vec2::new(_0, _1)).y;
        Box2 {
            min: Vec2::new(xmin, ymin),
            max: Vec2::new(xmax, ymax),
        }
    }

    fn negate(self) -> Negate<Self>
    where
        Self: Sized,
    {
        Negate(self)
    }

    fn add<S>(self, other: S) -> Add<Self, S>
    where
        Self: Sized,
    {
        Add(self, other)
    }

    fn translate(self, offset: Vec2<N>) -> Translate<Self, N>
    where
        Self: Sized,
    {
        Translate(self, offset)
    }

    /// Takes this support function (A) and a provided support function (B) and finds the support
    /// function for the Minkowski sum of A and -B.
    ///
    /// This shape contains the origin if and only if A and B intersect: if they share a point `p`,
    /// then `p + -p` lies in the sum.
    ///
    /// Sampling it along `dir` is the same as calling
    /// [`minkowski_support(a, b, dir)`](crate::support::minkowski_support).
    fn minkowski_difference<S>(self, other: S) -> Add<Self, Negate<S>>
    where
        Self: Sized,
    {
        Add(self, Negate(other))
    }
}

impl<S, N> SupportMapExt<N> for S where S: SupportMap<N> {}
