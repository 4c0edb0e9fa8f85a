use std::f32::consts::TAU;

use tui_cloud::{Cloud, Keyword, Scene, Vec3};

fn abc() -> Vec<Keyword> {
    vec![
        Keyword::new("a", 1.0),
        Keyword::new("b", 5.0),
        Keyword::new("c", 3.0),
    ]
}

fn size_of(cloud: &Cloud, word: &str) -> f32 {
    cloud
        .items()
        .iter()
        .find(|it| it.word == word)
        .map(|it| it.size)
        .unwrap()
}

fn position_of(cloud: &Cloud, word: &str) -> Vec3 {
    cloud
        .items()
        .iter()
        .find(|it| it.word == word)
        .map(|it| it.base_position.position)
        .unwrap()
}

#[test]
fn sizes_follow_weights() {
    let mut cloud = Cloud::default();
    cloud.build(&abc());

    let (a, b, c) = (size_of(&cloud, "a"), size_of(&cloud, "b"), size_of(&cloud, "c"));
    assert!(a < c && c < b, "a={a} c={c} b={b}");
    assert_eq!(a, 0.25);
    assert_eq!(b, 1.0);
}

#[test]
fn positions_sit_on_sphere() {
    let mut cloud = Cloud::default();
    let items = cloud.build(&abc());

    assert_eq!(items.len(), 3);

    for item in items {
        let d = item.base_position.position.length();
        assert!((d - 2.5).abs() < 1e-4, "{} at distance {d}", item.word);
    }
}

#[test]
fn reordering_reassigns_same_point_set() {
    let mut cloud = Cloud::default();
    cloud.build(&abc());
    let first: Vec<Vec3> = cloud.base_positions().to_vec();
    let a_before = position_of(&cloud, "a");
    let b_before = position_of(&cloud, "b");

    let reordered = vec![
        Keyword::new("b", 5.0),
        Keyword::new("a", 1.0),
        Keyword::new("c", 3.0),
    ];
    cloud.build(&reordered);

    assert_eq!(cloud.base_positions(), first.as_slice());
    assert_eq!(cloud.stats().position_builds, 1);
    assert_eq!(position_of(&cloud, "b"), a_before);
    assert_eq!(position_of(&cloud, "a"), b_before);
    assert_ne!(position_of(&cloud, "a"), a_before);
}

#[test]
fn animation_is_periodic_in_elapsed_time() {
    let mut cloud = Cloud::default();
    cloud.build(&abc());

    let t1 = 0.8;
    cloud.tick(0.016, t1);
    let first: Vec<f32> = cloud.items().iter().map(|it| it.current_position.y).collect();

    cloud.tick(0.016, t1 + TAU);
    let second: Vec<f32> = cloud.items().iter().map(|it| it.current_position.y).collect();

    for (a, b) in first.iter().zip(&second) {
        assert!((a - b).abs() < 1e-4);
    }
}

#[test]
fn hover_round_trip() {
    let mut cloud = Cloud::default();
    cloud.build(&abc());
    let before = cloud.items()[2].scale();

    cloud.pointer_enter(2);
    assert!(cloud.items()[2].scale() > before);
    cloud.pointer_leave(2);

    assert_eq!(cloud.items()[2].scale(), before);
}

#[test]
fn clearing_falls_back_to_idle() {
    let mut cloud = Cloud::default();
    cloud.build(&abc());
    assert!(matches!(cloud.scene(), Scene::Cloud { .. }));

    cloud.build(&[]);
    assert!(matches!(cloud.scene(), Scene::Idle(_)));
}
