//! Cross-module algebraic properties of matrices, quaternions and
//! transforms.

use gimbal::precision::equal;
use gimbal::{Matrix, Matrix4, Point, Quaternion, Transform, Tuple4, Vector};

#[test]
fn inverting_twice_recovers_the_matrix() {
    let matrices = [
        Matrix4::new([
            [-5.0, 2.0, 6.0, -8.0],
            [1.0, -5.0, 1.0, 8.0],
            [7.0, 7.0, -6.0, -7.0],
            [1.0, -3.0, 7.0, 4.0],
        ]),
        Matrix4::new([
            [8.0, -5.0, 9.0, 2.0],
            [7.0, 5.0, 6.0, 1.0],
            [-6.0, 0.0, 9.0, 6.0],
            [-3.0, 0.0, -9.0, -4.0],
        ]),
        Transform::new()
            .rotate(30.0, -45.0, 60.0)
            .scale(2.0, 3.0, 4.0)
            .translate(1.0, -2.0, 3.0)
            .matrix(),
    ];

    for m in matrices {
        assert_eq!(m.inverted().unwrap().inverted().unwrap(), m);
    }
}

#[test]
fn transposing_twice_recovers_the_matrix() {
    let m = Matrix::<f64, 2, 3>::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    assert_eq!(m.transposed().transposed(), m);

    let m = Matrix4::new([
        [0.0, 9.0, 3.0, 0.0],
        [9.0, 8.0, 0.0, 8.0],
        [1.0, 8.0, 5.0, 3.0],
        [0.0, 0.0, 5.0, 8.0],
    ]);
    assert_eq!(m.transposed().transposed(), m);
}

#[test]
fn identity_product_is_neutral_on_both_sides() {
    let m = Matrix4::new([
        [0.0, 1.0, 2.0, 4.0],
        [1.0, 2.0, 4.0, 8.0],
        [2.0, 4.0, 8.0, 16.0],
        [4.0, 8.0, 16.0, 32.0],
    ]);

    assert_eq!(Matrix4::identity() * m, m);
    assert_eq!(m * Matrix4::identity(), m);
}

#[test]
fn matrix_times_its_inverse_is_identity() {
    let m = Transform::new()
        .rotate(10.0, 20.0, 30.0)
        .scale(1.5, 2.5, 3.5)
        .translate(-4.0, 5.0, -6.0)
        .matrix();

    assert_eq!(m * m.inverted().unwrap(), Matrix4::identity());
}

#[test]
fn normalized_quaternions_have_unit_magnitude() {
    let samples = [
        Quaternion::new(25.0, 25.0, 25.0, 25.0),
        Quaternion::new(1.0, -2.0, 3.0, -4.0),
        Quaternion::new(0.001, 0.0, -0.002, 0.5),
    ];

    for q in samples {
        assert!(equal(q.normalized().magnitude(), 1.0));
    }
}

#[test]
fn identity_quaternion_is_a_noop_rotation() {
    let tuples = [
        Tuple4::new(1.0, 2.0, 3.0, 1.0),
        Tuple4::new(-4.5, 0.0, 9.0, 0.0),
    ];

    for t in tuples {
        assert_eq!(Quaternion::identity() * t, t);
    }
}

#[test]
fn quaternion_survives_matrix_round_trip() {
    let rotations = [
        Quaternion::euler_angles(90.0, 0.0, 0.0),
        Quaternion::euler_angles(0.0, 0.0, 90.0),
        Quaternion::euler_angles(12.0, 34.0, 56.0),
        Quaternion::angle_axis(150.0, Vector::up()),
        Quaternion::angle_axis(
            75.0,
            Vector::new(1.0, 1.0, 1.0).normalized().unwrap(),
        ),
    ];

    for q in rotations {
        let recovered = Quaternion::from(q.matrix());
        // The double cover means -q is an equally valid recovery.
        let sign = if recovered.w() * q.w() < 0.0 { -1.0 } else { 1.0 };
        assert!(equal(sign * recovered.w(), q.w()));
        assert!(equal(sign * recovered.i(), q.i()));
        assert!(equal(sign * recovered.j(), q.j()));
        assert!(equal(sign * recovered.k(), q.k()));
    }
}

#[test]
fn quaternion_angle_axis_about_x() {
    let q = Quaternion::angle_axis(90.0, Vector::new(1.0, 0.0, 0.0));

    assert!(equal(q.w(), 0.707107));
    assert!(equal(q.i(), 0.707107));
    assert!(equal(q.j(), 0.0));
    assert!(equal(q.k(), 0.0));
}

#[test]
fn rotation_matrix_matches_quaternion_matrix() {
    let expected = Matrix4::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, -1.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    let q = Quaternion::angle_axis(90.0, Vector::right());
    assert_eq!(q.matrix(), expected);
}

#[test]
fn transform_applies_quaternion_rotation_to_points() {
    let transform = Transform::new().rotate(90.0, 0.0, 0.0);
    let by_matrix = transform * Point::new(0.0, 1.0, 0.0);
    let by_conjugation = transform.rotation() * Point::new(0.0, 1.0, 0.0);

    assert_eq!(by_matrix, Point::new(0.0, 0.0, 1.0));
    assert_eq!(by_matrix, by_conjugation);
}
