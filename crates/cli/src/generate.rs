use std::{f64::consts::TAU, ops::RangeInclusive};

use gjk2d_collision::Polygon;
use gjk2d_math::Vec2;
use rand::Rng;

use crate::scene::{Scene, SceneError};

/// Parameters for generating random scenes of rough circles.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateSettings {
    pub count: usize,
    /// Number of sides of each polygon approximating a circle.
    pub sides: RangeInclusive<u32>,
    pub radius: RangeInclusive<u32>,
    /// Polygon centers are placed within `[0, width) x [0, height)`.
    pub width: u32,
    pub height: u32,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            count: 10,
            sides: 3..=10,
            radius: 50..=149,
            width: 1440,
            height: 810,
        }
    }
}

impl GenerateSettings {
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.sides.is_empty() || *self.sides.start() == 0 {
            return Err(SceneError::Settings("side range must be non-empty and above zero"));
        }
        if self.radius.is_empty() {
            return Err(SceneError::Settings("radius range must be non-empty"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::Settings("canvas must have a non-zero size"));
        }
        Ok(())
    }
}

/// A convex polygon approximating a circle with a random number of sides, radius, center and
/// rotation.
///
/// Vertices are placed on integer coordinates, the offsets from the center are truncated both
/// before and after rotating.
pub fn random_polygon(
    rng: &mut impl Rng,
    settings: &GenerateSettings,
) -> Result<Polygon<f64>, SceneError> {
    settings.validate()?;

    let sides = rng.random_range(settings.sides.clone());
    let radius = f64::from(rng.random_range(settings.radius.clone()));
    let center = Vec2::new(
        f64::from(rng.random_range(0..settings.width)),
        f64::from(rng.random_range(0..settings.height)),
    );
    let rotation = rng.random::<f64>() * TAU;

    let step = TAU / f64::from(sides);
    let mut theta = 0.0;
    let mut vertices = Vec::with_capacity(sides as usize);
    for _ in 0..sides {
        let p = (Vec2::from_unit_angle(theta) * radius).trunc();
        vertices.push(center + p.rotate_angle(rotation).trunc());
        theta += step;
    }

    Ok(Polygon::new(vertices)?)
}

/// Generate a whole scene, `settings.count` polygons drawn from `rng`.
pub fn random_scene(rng: &mut impl Rng, settings: &GenerateSettings) -> Result<Scene, SceneError> {
    settings.validate()?;
    let polygons = (0..settings.count)
        .map(|_| random_polygon(rng, settings))
        .collect::<Result<_, _>>()?;
    log::info!("generated {} random polygons", settings.count);
    Ok(Scene::new(polygons))
}
