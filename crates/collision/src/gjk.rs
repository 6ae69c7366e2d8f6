use gjk2d_math::Vec2;

use crate::{
    error::Error,
    shape::ConvexShape,
    simplex::{Evolution, Simplex},
    support::{Hull, SupportMap},
    support_ext::SupportMapExt,
};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Settings {
    /// If the GJK algorithm has not otherwise terminated after sampling this many support points
    /// (not counting the initial one), it will return with `Outcome::IterationLimit`.
    ///
    /// Polygons need well under one iteration per vertex in practice, so reaching this limit
    /// means the search is cycling on numerically degenerate input.
    pub max_iterations: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self { max_iterations: 64 }
    }
}

impl Settings {
    /// Settings with an iteration limit scaled to the combined vertex count of two shapes.
    pub fn for_shapes(a_vertices: usize, b_vertices: usize) -> Self {
        let vertices = u32::try_from(a_vertices.saturating_add(b_vertices)).unwrap_or(u32::MAX);
        Self {
            max_iterations: vertices.saturating_mul(4).saturating_add(8),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// The origin is inside the support map or on its boundary.
    Intersecting,
    /// A direction was found along which the whole support map lies strictly behind the origin.
    Separated,
    /// `Settings::max_iterations` was reached before either answer was found.
    IterationLimit,
}

/// The result of the GJK algorithm
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Report {
    pub outcome: Outcome,
    /// The number of support points sampled after the initial one.
    pub iterations: u32,
}

/// Use the GJK algorithm to determine whether the given support map contains the origin.
///
/// Pass the Minkowski difference of two shapes (see [`SupportMapExt::minkowski_difference`]) to
/// test whether those shapes intersect. Touching counts as intersecting, though whether an exact
/// touch is detected with floating point coordinates depends on rounding.
pub fn gjk<N, S>(settings: Settings, support: S) -> Report
where
    N: num::Signed + PartialOrd + Copy,
    S: SupportMap<N>,
{
    // Any starting direction works, the origin is never in the direction we just sampled from a
    // single point so we immediately turn around.
    let mut direction = Vec2::new(N::one(), N::zero());
    let mut simplex = Simplex::point(support.support_point(direction));
    direction = -direction;

    let mut iterations = 0;

    loop {
        if iterations >= settings.max_iterations {
            log::warn!("GJK gave up after {iterations} iterations");
            return Report {
                outcome: Outcome::IterationLimit,
                iterations,
            };
        }
        iterations += 1;

        let point = support.support_point(direction);

        // To enclose the origin the new point must reach at least as far as the origin along the
        // search direction. If it doesn't, `direction` is a separating axis.
        if point.dot(direction) < N::zero() {
            log::trace!("GJK found a separating axis after {iterations} iterations");
            return Report {
                outcome: Outcome::Separated,
                iterations,
            };
        }

        match simplex.with_point(point).evolve() {
            Evolution::Enclosed => {
                log::trace!("GJK enclosed the origin after {iterations} iterations");
                return Report {
                    outcome: Outcome::Intersecting,
                    iterations,
                };
            }
            Evolution::Search {
                simplex: reduced,
                direction: next,
            } => {
                simplex = reduced;
                direction = next;
            }
        }
    }
}

/// Returns true if the two convex shapes share at least one point, including when they only touch.
///
/// Fails with [`Error::EmptyShape`] if either shape has no vertices, and with
/// [`Error::NoConvergence`] if the search exceeds the iteration limit from
/// [`Settings::for_shapes`].
pub fn intersects<N, A, B>(a: &A, b: &B) -> Result<bool, Error>
where
    N: num::Signed + PartialOrd + Copy,
    A: ConvexShape<N> + ?Sized,
    B: ConvexShape<N> + ?Sized,
{
    let settings = Settings::for_shapes(
        ConvexShape::<N>::vertices(a).len(),
        ConvexShape::<N>::vertices(b).len(),
    );
    let a = Hull::new::<N>(a)?;
    let b = Hull::new::<N>(b)?;

    let report = gjk(settings, SupportMapExt::<N>::minkowski_difference(a, b));
    match report.outcome {
        Outcome::Intersecting => Ok(true),
        Outcome::Separated => Ok(false),
        Outcome::IterationLimit => Err(Error::NoConvergence {
            iterations: report.iterations,
        }),
    }
}
