use super::*;
use nalgebra::{vector, Vector2};
use std::collections::HashSet;

#[test]
fn intersection_counts_by_configuration() {
    let a = Circle::new(vector![0.0, 0.0], 1.0);
    // two points
    let b = Circle::new(vector![1.0, 0.0], 1.0);
    let pts = a.intersection(&b);
    assert_eq!(pts.len(), 2);
    for p in &pts {
        assert!(((p - a.center).norm() - 1.0).abs() < 1e-12);
        assert!(((p - b.center).norm() - 1.0).abs() < 1e-12);
    }
    // left of a→b first
    assert!(pts[0].y > 0.0 && pts[1].y < 0.0);
    // disjoint
    let far = Circle::new(vector![5.0, 0.0], 1.0);
    assert!(a.intersection(&far).is_empty());
    // nested
    let inner = Circle::new(vector![0.1, 0.0], 0.2);
    assert!(a.intersection(&inner).is_empty());
    // concentric
    assert!(a.intersection(&a).is_empty());
    // tangent
    let touch = Circle::new(vector![2.0, 0.0], 1.0);
    let t = a.intersection(&touch);
    assert_eq!(t.len(), 1);
    assert!((t[0] - vector![1.0, 0.0]).norm() < 1e-12);
}

#[test]
fn turn_parametrization_uses_downward_y() {
    let c = Circle::new(vector![2.0, 3.0], 2.0);
    let east = c.point_at_turn(0.0);
    assert!((east - vector![4.0, 3.0]).norm() < 1e-12);
    // a quarter turn lands above the center on screen (smaller y)
    let up = c.point_at_turn(0.25);
    assert!((up - vector![2.0, 1.0]).norm() < 1e-12);
    let down = c.point_at_turn(0.75);
    assert!((down - vector![2.0, 5.0]).norm() < 1e-12);
}

#[test]
fn turn_of_inverts_point_at_turn() {
    let c = Circle::new(vector![-1.0, 0.5], 1.5);
    for k in 0..16 {
        let t = k as f64 / 16.0 + 0.01;
        let back = c.turn_of(c.point_at_turn(t));
        assert!((back - t).abs() < 1e-9, "t={t} back={back}");
    }
}

#[test]
fn circle_equality_is_structural_and_folds_negative_zero() {
    let a = Circle::new(vector![0.0, 1.0], 1.0);
    let b = Circle::new(vector![-0.0, 1.0], 1.0);
    assert_eq!(a, b);
    let mut set = HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));
    assert_ne!(a, Circle::new(vector![0.0, 1.0], 2.0));
}

#[test]
fn round_point_keeps_requested_digits() {
    let p = round_point(Vector2::new(0.866025403, -0.4999999999), 5);
    assert_eq!(p, Vector2::new(0.86603, -0.5));
    let z = round_point(Vector2::new(-1e-9, 1e-9), 5);
    assert_eq!(z.x.to_bits(), 0.0f64.to_bits());
}

#[test]
fn scaled_into_maps_lattice_frame() {
    let c = Circle::new(vector![1.0, -1.0], 1.0);
    let s = c.scaled_into(vector![6.0, 4.5], 2.0);
    assert_eq!(s.center, vector![8.0, 2.5]);
    assert_eq!(s.radius, 2.0);
}

#[test]
fn cfg_validation_rejects_bad_tolerances() {
    assert!(GeomCfg::default().validate().is_ok());
    let bad = GeomCfg {
        near: 0.0,
        ..GeomCfg::default()
    };
    assert!(matches!(
        bad.validate(),
        Err(GeomError::InvalidConfig { field: "near", .. })
    ));
    let bad_slack = GeomCfg {
        fp_slack: f64::NAN,
        ..GeomCfg::default()
    };
    assert!(bad_slack.validate().is_err());
}

#[test]
fn color_hex() {
    assert_eq!(Color::BLACK.to_hex(), "#000000");
    assert_eq!(Color::rgb(255, 16, 1).to_hex(), "#ff1001");
}
