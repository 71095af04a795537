mod common;

use common::*;
use glam::Vec2;
use tree_core::*;

#[test]
fn classifies_fist_open_and_dead_zone() {
    let t = GestureThresholds::default();

    let s = classify(&fist(), &t);
    assert!(s.is_fist && !s.is_open);
    assert_eq!(s.gesture(), Gesture::Fist);

    let s = classify(&open_hand(), &t);
    assert!(!s.is_fist && s.is_open);
    assert_eq!(s.gesture(), Gesture::Open);

    let s = classify(&relaxed(), &t);
    assert!(!s.is_fist && !s.is_open);
    assert_eq!(s.gesture(), Gesture::Indeterminate);
}

#[test]
fn thresholds_are_strict() {
    let t = GestureThresholds::default();
    assert_eq!(t.classify_distance(0.2), (false, false));
    assert_eq!(t.classify_distance(0.35), (false, false));
    assert_eq!(t.classify_distance(0.199), (true, false));
    assert_eq!(t.classify_distance(0.351), (false, true));
}

#[test]
fn fist_and_open_are_never_both_true() {
    let t = GestureThresholds::default();
    let mut d = 0.0_f32;
    while d < 1.0 {
        let (fist, open) = t.classify_distance(d);
        assert!(!(fist && open), "both set at {d}");
        d += 0.005;
    }
}

#[test]
fn average_distance_uses_four_fingertips_only() {
    let wrist = Vec2::new(0.5, 0.9);
    let mut points = [wrist; LANDMARK_COUNT];
    points[INDEX_TIP] = wrist - Vec2::new(0.0, 0.1);
    points[MIDDLE_TIP] = wrist - Vec2::new(0.0, 0.2);
    points[RING_TIP] = wrist - Vec2::new(0.0, 0.3);
    points[PINKY_TIP] = wrist - Vec2::new(0.0, 0.4);
    // thumb tip far away must not count
    points[4] = Vec2::new(0.0, 0.0);
    let avg = HandLandmarks::new(points).average_fingertip_distance();
    assert!((avg - 0.25).abs() < 1e-5, "avg={avg}");
}

#[test]
fn pointer_maps_to_symmetric_range_with_y_up() {
    let cases = [
        (Vec2::new(0.5, 0.5), Vec2::new(0.0, 0.0)),
        (Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)),
        (Vec2::new(0.0, 1.0), Vec2::new(-1.0, -1.0)),
        (Vec2::new(0.75, 0.25), Vec2::new(0.5, 0.5)),
    ];
    for (centre, expected) in cases {
        let s = classify(&hand(centre, 0.3), &GestureThresholds::default());
        assert!(
            (s.pointer() - expected).length() < 1e-6,
            "centre {centre:?} -> {:?}, expected {expected:?}",
            s.pointer()
        );
    }
}

#[test]
fn classification_is_deterministic() {
    let t = GestureThresholds::default();
    let h = hand(Vec2::new(0.31, 0.62), 0.33);
    let a = classify(&h, &t);
    for _ in 0..10 {
        assert_eq!(classify(&h, &t), a);
    }
}

#[test]
fn no_hand_yields_no_sample() {
    let t = GestureThresholds::default();
    assert_eq!(classify_frame(None, &t), None);
    assert!(classify_frame(Some(&fist()), &t).is_some());
}

#[test]
fn from_flat_accepts_pairs_and_triples() {
    let pairs: Vec<f32> = (0..LANDMARK_COUNT)
        .flat_map(|i| [i as f32 / 40.0, 0.5])
        .collect();
    let a = HandLandmarks::from_flat(&pairs).expect("pairs");

    let triples: Vec<f32> = (0..LANDMARK_COUNT)
        .flat_map(|i| [i as f32 / 40.0, 0.5, -0.3])
        .collect();
    let b = HandLandmarks::from_flat(&triples).expect("triples");

    assert_eq!(a, b);
    assert_eq!(a.point(20), Vec2::new(0.5, 0.5));
}

#[test]
fn from_flat_rejects_malformed_input() {
    assert_eq!(
        HandLandmarks::from_flat(&[0.5; 10]),
        Err(GestureError::WrongLength(10))
    );
    let mut coords = vec![0.5_f32; LANDMARK_COUNT * 2];
    coords[2 * 7 + 1] = f32::NAN;
    assert_eq!(
        HandLandmarks::from_flat(&coords),
        Err(GestureError::NonFinite { index: 7 })
    );
}
