use std::fs;

use gjk2d_cli::{GenerateSettings, Scene, SceneError, random_scene};
use gjk2d_collision::Polygon;
use gjk2d_math::{Box2, Vec2};
use rand::{SeedableRng, rngs::SmallRng};

#[test]
fn save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.json");

    let scene = random_scene(&mut SmallRng::seed_from_u64(1234), &GenerateSettings::default())
        .unwrap();
    scene.save(&path).unwrap();

    let loaded = Scene::load(&path).unwrap();
    assert_eq!(loaded, scene);
    assert_eq!(
        loaded.overlap_report().unwrap(),
        scene.overlap_report().unwrap()
    );
}

#[test]
fn load_errors() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(
        Scene::load(dir.path().join("missing.json")),
        Err(SceneError::Io(_))
    ));

    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"polygons\": [[[0, 0], [1]]]}").unwrap();
    assert!(matches!(Scene::load(&path), Err(SceneError::Json(_))));

    fs::write(&path, "{\"polygons\": [[[0, 0]], [[1, 1]], []]}").unwrap();
    match Scene::load(&path) {
        Err(SceneError::Polygon { index, .. }) => assert_eq!(index, 2),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn handwritten_scene() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.json");
    fs::write(
        &path,
        r#"{
            "polygons": [
                [[0, 0], [4, 0], [4, 4], [0, 4]],
                [[3, 3], [6, 3], [6, 6]],
                [[10, 0], [12, 0], [11, 2]],
                [[4, 0]]
            ]
        }"#,
    )
    .unwrap();

    let scene = Scene::load(&path).unwrap();
    let report = scene.overlap_report().unwrap();
    assert_eq!(report.pairs, vec![(0, 1), (0, 3)]);
    assert_eq!(report.intersecting, vec![0, 1, 3]);
}

#[test]
fn drag_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.json");

    let mut scene = Scene::new(vec![
        Polygon::from_box(Box2::with_size(Vec2::new(0.0, 0.0), Vec2::splat(10.0))),
        Polygon::from_box(Box2::with_size(Vec2::new(20.0, 0.0), Vec2::splat(10.0))),
    ]);
    assert!(scene.intersecting_pairs().unwrap().is_empty());

    let index = scene.pick(Vec2::new(25.0, 5.0)).unwrap();
    assert_eq!(index, 1);
    scene.drag(index, Vec2::new(-15.0, 0.0)).unwrap();
    scene.save(&path).unwrap();

    let loaded = Scene::load(&path).unwrap();
    assert_eq!(loaded.intersecting_pairs().unwrap(), vec![(0, 1)]);
    assert_eq!(loaded.pick(Vec2::new(25.0, 5.0)), None);
}

#[test]
fn generated_scene_within_canvas() {
    let settings = GenerateSettings {
        count: 50,
        ..Default::default()
    };
    let scene = random_scene(&mut SmallRng::seed_from_u64(99), &settings).unwrap();
    assert_eq!(scene.len(), 50);

    // Centers are inside the canvas, so vertices are at most one radius outside it.
    let margin = f64::from(*settings.radius.end());
    let canvas = Box2::new(
        Vec2::splat(-margin),
        Vec2::new(
            f64::from(settings.width) + margin,
            f64::from(settings.height) + margin,
        ),
    );
    for polygon in scene.polygons() {
        for &v in polygon.vertices() {
            assert!(canvas.contains_point(v));
        }
    }

    // The report is consistent with testing each pair directly.
    let pairs = scene.intersecting_pairs().unwrap();
    for (i, a) in scene.polygons().iter().enumerate() {
        for (j, b) in scene.polygons().iter().enumerate().skip(i + 1) {
            assert_eq!(
                gjk2d_collision::intersects::<f64, _, _>(a, b).unwrap(),
                pairs.contains(&(i, j))
            );
        }
    }
}
