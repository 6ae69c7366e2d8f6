pub mod aabox;
pub mod cast;
pub mod vector;

pub use self::{aabox::Box2, vector::Vec2};
