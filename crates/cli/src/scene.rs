use std::{collections::BTreeSet, fs, io, path::Path};

use gjk2d_collision::{self as collision, Polygon};
use gjk2d_math::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("polygon {index} is invalid: {source}")]
    Polygon {
        index: usize,
        #[source]
        source: collision::Error,
    },
    #[error("no polygon with index {0}")]
    NoSuchPolygon(usize),
    #[error("invalid generation settings: {0}")]
    Settings(&'static str),
    #[error(transparent)]
    Collision(#[from] collision::Error),
}

/// On-disk form of a scene, every polygon is a list of `[x, y]` pairs.
#[derive(Serialize, Deserialize)]
struct SceneFile {
    polygons: Vec<Vec<[f64; 2]>>,
}

/// Every pair of polygons in a scene that intersect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverlapReport {
    /// Pairs of polygon indices `(i, j)` with `i < j`, in ascending order.
    pub pairs: Vec<(usize, usize)>,
    /// Every polygon index that appears in at least one pair, in ascending order.
    pub intersecting: Vec<usize>,
}

/// An ordered collection of convex polygons, standing in for the interactive demo canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    polygons: Vec<Polygon<f64>>,
}

impl Scene {
    pub fn new(polygons: Vec<Polygon<f64>>) -> Self {
        Self { polygons }
    }

    pub fn polygons(&self) -> &[Polygon<f64>] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let file: SceneFile = serde_json::from_str(json)?;
        let polygons = file
            .polygons
            .into_iter()
            .enumerate()
            .map(|(index, vertices)| {
                let vertices: Vec<Vec2<f64>> = vertices.into_iter().map(Vec2::from).collect();
                Polygon::new(vertices).map_err(|source| SceneError::Polygon { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { polygons })
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        let file = SceneFile {
            polygons: self
                .polygons
                .iter()
                .map(|p| p.vertices().iter().map(|&v| v.into()).collect())
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let scene = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!("loaded {} polygons from {path:?}", scene.len());
        Ok(scene)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SceneError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!("saved {} polygons to {path:?}", self.len());
        Ok(())
    }

    /// Test every pair of polygons against each other, returning the intersecting pairs `(i, j)`
    /// with `i < j` in ascending order.
    pub fn intersecting_pairs(&self) -> Result<Vec<(usize, usize)>, SceneError> {
        let mut pairs = Vec::new();
        for (i, a) in self.polygons.iter().enumerate() {
            for (j, b) in self.polygons.iter().enumerate().skip(i + 1) {
                if collision::intersects::<f64, _, _>(a, b)? {
                    log::debug!("polygons {i} and {j} intersect");
                    pairs.push((i, j));
                }
            }
        }
        Ok(pairs)
    }

    /// Every polygon that intersects at least one other polygon.
    pub fn intersecting_set(&self) -> Result<BTreeSet<usize>, SceneError> {
        Ok(self
            .intersecting_pairs()?
            .into_iter()
            .flat_map(|(i, j)| [i, j])
            .collect())
    }

    pub fn overlap_report(&self) -> Result<OverlapReport, SceneError> {
        let pairs = self.intersecting_pairs()?;
        let intersecting = pairs
            .iter()
            .flat_map(|&(i, j)| [i, j])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        Ok(OverlapReport {
            pairs,
            intersecting,
        })
    }

    /// Returns the index of the first polygon containing `point`, if any.
    pub fn pick(&self, point: Vec2<f64>) -> Option<usize> {
        self.polygons.iter().position(|p| p.contains_point(point))
    }

    /// Move the polygon at `index` by `offset`.
    pub fn drag(&mut self, index: usize, offset: Vec2<f64>) -> Result<(), SceneError> {
        let polygon = self
            .polygons
            .get_mut(index)
            .ok_or(SceneError::NoSuchPolygon(index))?;
        polygon.shift(offset);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use gjk2d_math::Box2;

    use super::*;

    fn square(x: f64, y: f64, size: f64) -> Polygon<f64> {
        Polygon::from_box(Box2::with_size(Vec2::new(x, y), Vec2::splat(size)))
    }

    #[test]
    fn report_lists_each_pair_once() {
        let scene = Scene::new(vec![
            square(0.0, 0.0, 2.0),
            square(10.0, 10.0, 1.0),
            square(1.0, 1.0, 2.0),
            square(2.5, 2.5, 1.0),
        ]);

        let report = scene.overlap_report().unwrap();
        assert_eq!(report.pairs, vec![(0, 2), (2, 3)]);
        assert_eq!(report.intersecting, vec![0, 2, 3]);
        assert_eq!(
            scene.intersecting_set().unwrap(),
            BTreeSet::from([0, 2, 3])
        );
    }

    #[test]
    fn empty_scene_has_no_pairs() {
        assert_eq!(
            Scene::default().overlap_report().unwrap(),
            OverlapReport::default()
        );
    }

    #[test]
    fn pick_returns_first_hit() {
        let scene = Scene::new(vec![square(0.0, 0.0, 4.0), square(1.0, 1.0, 1.0)]);
        assert_eq!(scene.pick(Vec2::new(1.5, 1.5)), Some(0));
        assert_eq!(scene.pick(Vec2::new(5.0, 5.0)), None);
    }

    #[test]
    fn drag_separates_polygons() {
        let mut scene = Scene::new(vec![square(0.0, 0.0, 2.0), square(1.0, 1.0, 2.0)]);
        assert_eq!(scene.intersecting_pairs().unwrap(), vec![(0, 1)]);

        scene.drag(1, Vec2::new(5.0, 0.0)).unwrap();
        assert!(scene.intersecting_pairs().unwrap().is_empty());

        assert!(matches!(
            scene.drag(2, Vec2::zero()),
            Err(SceneError::NoSuchPolygon(2))
        ));
    }

    #[test]
    fn json_round_trip_keeps_vertex_order() {
        let scene = Scene::new(vec![
            square(0.0, 0.0, 1.0),
            Polygon::new(vec![Vec2::new(3.5, -1.0)]).unwrap(),
        ]);
        let json = scene.to_json().unwrap();
        assert_eq!(Scene::from_json(&json).unwrap(), scene);
    }

    #[test]
    fn empty_polygon_in_json_is_rejected() {
        let err = Scene::from_json(r#"{"polygons": [[[0, 0]], []]}"#).unwrap_err();
        assert!(matches!(
            err,
            SceneError::Polygon {
                index: 1,
                source: collision::Error::EmptyShape
            }
        ));
    }
}
