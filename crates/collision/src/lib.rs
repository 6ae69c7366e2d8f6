pub mod error;
pub mod gjk;
pub mod shape;
pub mod simplex;
pub mod support;
pub mod support_ext;
pub mod support_maps;

pub use self::{
    error::Error,
    gjk::intersects,
    shape::{ConvexShape, Polygon},
    support::{Hull, SupportMap, minkowski_support, support},
    support_ext::SupportMapExt,
};
