use spatial_core::constants::{HALF_PI, PI, TWOPI};
use spatial_core::test_helpers::{assert_float_eq, assert_matrix_near, assert_vec_near};
use spatial_core::{transform, Matrix3, Quaternion, SpatialError, Vector3};

const TOL: f64 = 1e-5;

fn angles() -> Vec<f64> {
    (0..=48).map(|i| -PI + TWOPI * i as f64 / 48.0).collect()
}

fn unit_axes() -> Vec<Vector3> {
    vec![
        Vector3::x_axis(),
        Vector3::y_axis(),
        Vector3::z_axis(),
        Vector3::new(1.0, 1.0, 1.0).normalize(),
        Vector3::new(-2.0, 0.5, 3.0).normalize(),
        Vector3::new(0.0, -0.6, 0.8),
    ]
}

fn sample_vectors() -> Vec<Vector3> {
    vec![
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.3, -2.0, 5.0),
        Vector3::new(-1.5, 1.5, -0.25),
    ]
}

// --- Concrete scenarios ---

#[test]
fn rotation_z_quarter_turn_maps_x_to_y() {
    let v = Matrix3::rotation_z(HALF_PI) * Vector3::new(1.0, 0.0, 0.0);
    assert_vec_near(v, Vector3::new(0.0, 1.0, 0.0), TOL);
}

#[test]
fn row_major_constructor_element_access() {
    let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    assert_eq!(m.get(1, 2), 6.0);
    assert_eq!(m[(1, 2)], 6.0);
}

#[test]
fn diagonal_scale_applied_to_ones() {
    let v = Matrix3::scale(2.0, 3.0, 4.0) * Vector3::new(1.0, 1.0, 1.0);
    assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));
}

// --- Quaternion / matrix agreement ---

#[test]
fn quaternion_transform_matches_rotation_matrix() {
    for axis in unit_axes() {
        for t in angles() {
            let q = Quaternion::from_axis_angle(axis, t);
            let m = q.to_rotation_matrix();
            for v in sample_vectors() {
                assert_vec_near(transform(v, &q), m * v, TOL);
            }
        }
    }
}

#[test]
fn quaternion_matrix_matches_axis_angle_matrix() {
    for axis in unit_axes() {
        for t in angles() {
            let q = Quaternion::from_axis_angle(axis, t);
            assert_matrix_near(&q.to_rotation_matrix(), &Matrix3::rotation(t, axis), 1e-12);
        }
    }
}

#[test]
fn rotation_matrix_round_trip_through_quaternion() {
    for axis in unit_axes() {
        for t in angles() {
            let m = Matrix3::rotation(t, axis);
            let q = Quaternion::from_rotation_matrix(&m);
            assert_matrix_near(&q.to_rotation_matrix(), &m, TOL);
        }
    }
}

#[test]
fn composed_rotations_round_trip() {
    let m = Matrix3::rotation_x(0.3) * Matrix3::rotation_y(-2.2) * Matrix3::rotation_z(1.7);
    assert!(m.is_rotation_matrix(1e-12));
    let q = Quaternion::from_rotation_matrix(&m);
    assert_matrix_near(&q.to_rotation_matrix(), &m, 1e-12);
}

#[test]
fn hamilton_product_matches_matrix_product() {
    let axes = unit_axes();
    for (i, a) in axes.iter().enumerate() {
        let b = axes[(i + 1) % axes.len()];
        let q1 = Quaternion::from_axis_angle(*a, 0.9);
        let q2 = Quaternion::from_axis_angle(b, -2.4);
        let product = q1.compose(&q2).to_rotation_matrix();
        let expected = q1.to_rotation_matrix() * q2.to_rotation_matrix();
        assert_matrix_near(&product, &expected, 1e-12);
    }
}

#[test]
fn composed_quaternion_stays_unit() {
    let mut q = Quaternion::identity();
    let step = Quaternion::from_axis_angle(Vector3::new(0.0, -0.6, 0.8), 0.1);
    for _ in 0..100 {
        q *= step;
    }
    assert!((q.norm() - 1.0).abs() < 1e-12);
    assert_matrix_near(
        &q.to_rotation_matrix(),
        &Matrix3::rotation(10.0, Vector3::new(0.0, -0.6, 0.8)),
        1e-10,
    );
}

// --- Matrix algebra ---

#[test]
fn inverse_times_matrix_is_identity() {
    let matrices = [
        Matrix3::new(2.0, -3.0, 1.0, 2.0, 0.0, -1.0, 1.0, 4.0, 5.0),
        Matrix3::new(0.5, 0.0, 2.0, 1.0, 3.0, 0.0, 0.0, -1.0, 0.25),
        Matrix3::rotation(1.3, Vector3::new(1.0, 1.0, 1.0).normalize()),
        Matrix3::scale(2.0, 0.5, -4.0),
        Matrix3::skew(0.6, Vector3::x_axis(), Vector3::new(0.0, 0.6, 0.8)),
        Matrix3::scale_along(3.0, Vector3::new(-2.0, 0.5, 3.0).normalize()),
    ];
    for m in &matrices {
        assert!(m.determinant().abs() > 1e-6);
        assert_matrix_near(&(m.inverse() * m), &Matrix3::identity(), TOL);
        assert_matrix_near(&(m * m.inverse()), &Matrix3::identity(), TOL);
    }
}

#[test]
fn singular_matrix_checked_inverse_fails() {
    let flat = Matrix3::from_columns(
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(1.0, 1.0, 0.0),
    );
    assert_eq!(flat.determinant(), 0.0);
    match flat.try_inverse(1e-12) {
        Err(SpatialError::SingularMatrix { determinant }) => assert_eq!(determinant, 0.0),
        other => panic!("expected SingularMatrix, got {:?}", other),
    }
    assert!(flat.inverse().get(0, 0).is_nan() || flat.inverse().get(0, 0).is_infinite());
}

#[test]
fn axis_rotations_have_unit_determinant() {
    for t in angles() {
        assert!((Matrix3::rotation_x(t).determinant() - 1.0).abs() < 1e-12);
        assert!((Matrix3::rotation_y(t).determinant() - 1.0).abs() < 1e-12);
        assert!((Matrix3::rotation_z(t).determinant() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn axis_rotations_at_zero_are_identity() {
    assert_eq!(Matrix3::rotation_x(0.0), Matrix3::identity());
    assert_eq!(Matrix3::rotation_y(0.0), Matrix3::identity());
    assert_eq!(Matrix3::rotation_z(0.0), Matrix3::identity());
    assert_float_eq(Matrix3::rotation_x(0.0).determinant(), 1.0, 0);
}

#[test]
fn reflection_is_involutive() {
    for axis in unit_axes() {
        let r = Matrix3::reflection(axis);
        assert_matrix_near(&(r * r), &Matrix3::identity(), TOL);
        assert!((r.determinant() + 1.0).abs() < 1e-12);
        assert_vec_near(r * axis, -axis, 1e-12);
    }
}

#[test]
fn involution_is_involutive() {
    for axis in unit_axes() {
        let m = Matrix3::involution(axis);
        assert_matrix_near(&(m * m), &Matrix3::identity(), TOL);
        assert_vec_near(m * axis, axis, 1e-12);
        assert_matrix_near(&m, &Matrix3::rotation(PI, axis), 1e-12);
    }
}

#[test]
fn skew_moves_points_along_direction() {
    let a = Vector3::new(0.0, 0.6, 0.8);
    let b = Vector3::x_axis();
    let m = Matrix3::skew(0.4, a, b);
    let p = Vector3::new(2.0, 1.0, -1.0);
    let expected = p + a * (0.4_f64.tan() * b.dot(&p));
    assert_vec_near(m * p, expected, 1e-12);
}

#[test]
fn column_accessors_round_trip_through_matrix() {
    let mut m = Matrix3::rotation_y(0.5);
    let c0 = m.column(0);
    let c2 = m.column(2);
    m.set_column(0, c2);
    m.set_column(2, c0);
    assert_eq!(m.column(0), c2);
    assert_eq!(m.column(2), c0);
    assert!((m.determinant() + 1.0).abs() < 1e-12);
}
