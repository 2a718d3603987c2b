//! Integration tests for vela-math.

use vela_math::spring::spring_force;
use vela_math::triangle::{face_normal, normalize_guarded};
use vela_math::Vec3;

// ─── Spring Force Tests ───────────────────────────────────────

#[test]
fn spring_at_rest_length_is_zero() {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(1.0, 0.0, 0.0);
    let f = spring_force(a, b, 50.0, 1.0).unwrap();
    assert!(f.length() < 1e-6, "rest-length spring produced {f:?}");
}

#[test]
fn stretched_spring_pulls_endpoints_together() {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(2.0, 0.0, 0.0);
    let f = spring_force(a, b, 50.0, 1.0).unwrap();
    // Stretched to 2× rest length: force on a points toward b.
    assert!(f.x > 0.0);
    assert!((f.y).abs() < 1e-6 && (f.z).abs() < 1e-6);
    // k·(|d| − l0) = 50·(2 − 1) = 50 N.
    assert!((f.length() - 50.0).abs() < 1e-4);
}

#[test]
fn compressed_spring_pushes_endpoints_apart() {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(0.5, 0.0, 0.0);
    let f = spring_force(a, b, 50.0, 1.0).unwrap();
    assert!(f.x < 0.0, "compressed spring should push a away from b");
}

#[test]
fn spring_force_is_antisymmetric() {
    let a = Vec3::new(0.1, -0.4, 0.3);
    let b = Vec3::new(-0.2, 0.9, 1.1);
    let f_ab = spring_force(a, b, 10.0, 0.7).unwrap();
    let f_ba = spring_force(b, a, 10.0, 0.7).unwrap();
    assert!((f_ab + f_ba).length() < 1e-5);
}

#[test]
fn coincident_endpoints_are_guarded() {
    let p = Vec3::new(1.0, 2.0, 3.0);
    assert!(spring_force(p, p, 50.0, 1.0).is_none());
}

// ─── Face Normal Tests ────────────────────────────────────────

#[test]
fn face_normal_of_ccw_triangle_points_up() {
    let n = face_normal(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    assert!(n.z > 0.0);
    // Magnitude = 2 × area = 1.0 for this right triangle.
    assert!((n.length() - 1.0).abs() < 1e-6);
}

#[test]
fn face_normal_flips_with_winding() {
    let p0 = Vec3::new(0.0, 0.0, 0.0);
    let p1 = Vec3::new(1.0, 0.0, 0.0);
    let p2 = Vec3::new(0.0, 1.0, 0.0);
    let n1 = face_normal(p0, p1, p2);
    let n2 = face_normal(p0, p2, p1);
    assert!((n1 + n2).length() < 1e-6);
}

#[test]
fn degenerate_triangle_has_zero_normal() {
    let p = Vec3::new(0.3, 0.3, 0.3);
    let n = face_normal(p, p, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(n, Vec3::ZERO);
}

// ─── Normalization Tests ──────────────────────────────────────

#[test]
fn normalize_guarded_unit_result() {
    let n = normalize_guarded(Vec3::new(0.0, 0.0, 4.2)).unwrap();
    assert!((n.length() - 1.0).abs() < 1e-6);
    assert!((n.z - 1.0).abs() < 1e-6);
}

#[test]
fn normalize_guarded_rejects_zero() {
    assert!(normalize_guarded(Vec3::ZERO).is_none());
}
