use thiserror::Error;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum Error {
    #[error("convex shape has no vertices")]
    EmptyShape,
    #[error("GJK did not converge after {iterations} iterations")]
    NoConvergence { iterations: u32 },
}
