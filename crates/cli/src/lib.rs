pub mod generate;
pub mod scene;

pub use self::{
    generate::{GenerateSettings, random_polygon, random_scene},
    scene::{OverlapReport, Scene, SceneError},
};
