use std::ops::Deref;

use arrayvec::ArrayVec;
use gjk2d_math::Vec2;

/// Either the empty set, a single point, a line, or a triangle whose vertices lie on the boundary
/// of a Minkowski difference.
///
/// Points are stored oldest first, so the last point is always the most recently sampled one.
#[derive(Debug, Clone, PartialEq)]
pub struct Simplex<N>(ArrayVec<Vec2<N>, 3>);

/// The outcome of evolving a simplex towards the origin.
#[derive(Debug, Clone, PartialEq)]
pub enum Evolution<N> {
    /// The origin lies inside the simplex, or on its boundary.
    Enclosed,
    /// The origin is not known to be enclosed yet. The reduced simplex should be extended with the
    /// support point along `direction`.
    Search {
        simplex: Simplex<N>,
        direction: Vec2<N>,
    },
}

impl<N> Default for Simplex<N> {
    fn default() -> Self {
        Self(ArrayVec::new())
    }
}

impl<N> Deref for Simplex<N> {
    type Target = [Vec2<N>];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl<N: Copy> Simplex<N> {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn point(p: Vec2<N>) -> Self {
        Self(ArrayVec::from_iter([p]))
    }

    /// Returns this simplex with `p` added as the newest point.
    ///
    /// # Panics
    ///
    /// Panics if the simplex already holds three points.
    #[must_use]
    pub fn with_point(mut self, p: Vec2<N>) -> Self {
        if self.0.try_push(p).is_err() {
            panic!("GJK simplex cannot hold more than three points");
        }
        self
    }

    fn from_points<const K: usize>(points: [Vec2<N>; K]) -> Self {
        Self(ArrayVec::from_iter(points))
    }
}

impl<N> Simplex<N>
where
    N: num::Signed + PartialOrd + Copy,
{
    /// Consumes a line or triangle simplex whose newest point was just sampled, and either reports
    /// that it encloses the origin or returns a reduced simplex together with the next direction
    /// to search in.
    ///
    /// Two vectors point the "same direction" only when their dot product is strictly positive.
    ///
    /// # Panics
    ///
    /// Panics if the simplex does not hold exactly two or three points, which cannot happen when
    /// driven by [`gjk`](crate::gjk::gjk).
    pub fn evolve(self) -> Evolution<N> {
        match *self.0.as_slice() {
            [b, a] => Self::evolve_line(b, a),
            [c, b, a] => Self::evolve_triangle(c, b, a),
            _ => panic!("invalid number of points in the GJK simplex: {}", self.len()),
        }
    }

    fn evolve_line(b: Vec2<N>, a: Vec2<N>) -> Evolution<N> {
        let ao = -a;
        let ab = b - a;

        let normal = ab.perp();
        let side = normal.dot(ao);
        if side > N::zero() {
            return Evolution::Search {
                simplex: Self::from_points([b, a]),
                direction: normal,
            };
        } else if side < N::zero() {
            return Evolution::Search {
                simplex: Self::from_points([b, a]),
                direction: -normal,
            };
        }

        // The origin lies on the infinite line through A and B (or A and B coincide), so no
        // normal of the line points towards it. Searching along either normal could only produce
        // a triangle with no area, so instead search along the line itself from whichever end is
        // nearest the origin, or stop if the origin is already on the segment.
        if ab == Vec2::zero() || ao.dot(ab) < N::zero() {
            if ao == Vec2::zero() {
                return Evolution::Enclosed;
            }
            return Evolution::Search {
                simplex: Self::point(a),
                direction: ao,
            };
        }

        let bo = -b;
        if bo.dot(-ab) < N::zero() {
            return Evolution::Search {
                simplex: Self::point(b),
                direction: bo,
            };
        }

        Evolution::Enclosed
    }

    fn evolve_triangle(c: Vec2<N>, b: Vec2<N>, a: Vec2<N>) -> Evolution<N> {
        let same_direction = |u: Vec2<N>, v: Vec2<N>| u.dot(v) > N::zero();

        let ao = -a;
        let ab = b - a;
        let ac = c - a;

        // Normal of AB facing away from C. If it faces the origin then C is the vertex furthest
        // from the origin and can be dropped.
        let mut ab_normal = ab.perp();
        if same_direction(ab_normal, ac) {
            ab_normal = -ab_normal;
        }
        if same_direction(ab_normal, ao) {
            return Evolution::Search {
                simplex: Self::from_points([b, a]),
                direction: ab_normal,
            };
        }

        // Likewise for AC facing away from B.
        let mut ac_normal = ac.perp();
        if same_direction(ac_normal, ab) {
            ac_normal = -ac_normal;
        }
        if same_direction(ac_normal, ao) {
            return Evolution::Search {
                simplex: Self::from_points([c, a]),
                direction: ac_normal,
            };
        }

        // Neither edge touching A faces the origin, and the origin was already known to be on the
        // inner side of BC when A was sampled.
        Evolution::Enclosed
    }
}
