//! Rotation quaternion.
//!
//! A rotation is represented as a unit quaternion (w, i, j, k). All angle
//! arguments are degrees. Conversions to and from the 4x4 homogeneous
//! rotation matrix and Tait-Bryan angles live here; composing rotations is
//! the Hamilton product.

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::ops::Mul;

use crate::matrix::Matrix4;
use crate::precision;
use crate::trig;
use crate::tuple::{Point, Tuple3, Tuple4, Vector};
use crate::Result;

/// A rotation, stored as quaternion components (w, i, j, k).
///
/// Rotation semantics hold only at unit magnitude; [`normalize`] and
/// [`normalized`] restore it. Unlike the tuple and matrix types, equality
/// is exact, component by component.
///
/// [`normalize`]: Quaternion::normalize
/// [`normalized`]: Quaternion::normalized
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    w: f64,
    i: f64,
    j: f64,
    k: f64,
}

impl Quaternion {
    /// Creates a quaternion from raw components.
    #[inline]
    pub const fn new(w: f64, i: f64, j: f64, k: f64) -> Self {
        Self { w, i, j, k }
    }

    /// The identity rotation (1, 0, 0, 0).
    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Creates a rotation of `degrees` around `axis`.
    ///
    /// `axis` must be a unit vector; it is not normalized here.
    pub fn angle_axis(degrees: f64, axis: Vector) -> Self {
        let half = trig::degrees_to_radians(degrees) / 2.0;
        let s = half.sin();

        Self::new(half.cos(), axis.x() * s, axis.y() * s, axis.z() * s).normalized()
    }

    /// Creates a rotation from Tait-Bryan angles in degrees, applied in
    /// x, y, z order.
    pub fn euler_angles(x_degrees: f64, y_degrees: f64, z_degrees: f64) -> Self {
        let (sx, cx) = (trig::degrees_to_radians(x_degrees) / 2.0).sin_cos();
        let (sy, cy) = (trig::degrees_to_radians(y_degrees) / 2.0).sin_cos();
        let (sz, cz) = (trig::degrees_to_radians(z_degrees) / 2.0).sin_cos();

        Self::new(
            cx * cy * cz + sx * sy * sz,
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
        )
    }

    /// Creates the rotation that maps the direction `from` onto `to`.
    ///
    /// When the directions are parallel the rotation axis is ill-defined;
    /// an axis perpendicular to `from` is used instead, built against the
    /// world right direction, or the world up direction when `from` is
    /// itself along right. Fails with
    /// [`GimbalError::DegenerateAxis`](crate::GimbalError::DegenerateAxis)
    /// when `from` has near-zero length.
    pub fn from_to(from: &Vector, to: &Vector) -> Result<Self> {
        let mut axis = Vector::cross(from, to);
        if precision::equal(axis.magnitude(), 0.0) {
            axis = Vector::cross(from, &Vector::right());
            if precision::equal(axis.magnitude(), 0.0) {
                axis = Vector::cross(from, &Vector::up());
            }
        }

        Ok(Self::angle_axis(Vector::angle(from, to), axis.normalized()?))
    }

    /// Returns the W component.
    #[inline]
    pub const fn w(&self) -> f64 {
        self.w
    }

    /// Returns the I component.
    #[inline]
    pub const fn i(&self) -> f64 {
        self.i
    }

    /// Returns the J component.
    #[inline]
    pub const fn j(&self) -> f64 {
        self.j
    }

    /// Returns the K component.
    #[inline]
    pub const fn k(&self) -> f64 {
        self.k
    }

    /// Returns the magnitude.
    pub fn magnitude(&self) -> f64 {
        (self.w * self.w + self.i * self.i + self.j * self.j + self.k * self.k).sqrt()
    }

    /// Returns a unit-magnitude copy.
    pub fn normalized(&self) -> Self {
        let mut copy = *self;
        copy.normalize();
        copy
    }

    /// Scales the quaternion to unit magnitude in place.
    pub fn normalize(&mut self) {
        let magnitude = self.magnitude();
        self.w /= magnitude;
        self.i /= magnitude;
        self.j /= magnitude;
        self.k /= magnitude;
    }

    /// Returns the conjugate, which inverts a unit quaternion.
    pub fn inverse(&self) -> Self {
        Self::new(self.w, -self.i, -self.j, -self.k)
    }

    /// Returns the equivalent homogeneous rotation matrix.
    pub fn matrix(&self) -> Matrix4 {
        let Self { w, i, j, k } = *self;

        Matrix4::new([
            [
                1.0 - 2.0 * (j * j + k * k),
                2.0 * (i * j - k * w),
                2.0 * (i * k + j * w),
                0.0,
            ],
            [
                2.0 * (i * j + k * w),
                1.0 - 2.0 * (i * i + k * k),
                2.0 * (j * k - i * w),
                0.0,
            ],
            [
                2.0 * (i * k - j * w),
                2.0 * (j * k + i * w),
                1.0 - 2.0 * (i * i + j * j),
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Extracts Tait-Bryan angles in degrees, in the same x, y, z
    /// convention [`euler_angles`](Quaternion::euler_angles) consumes.
    ///
    /// At gimbal lock (|sin pitch| >= 1) the pitch saturates at +-90
    /// degrees.
    pub fn to_euler(&self) -> Tuple3<f64> {
        let Self { w, i, j, k } = *self;

        let sinr_cosp = 2.0 * (w * i + j * k);
        let cosr_cosp = 1.0 - 2.0 * (i * i + j * j);
        let x = sinr_cosp.atan2(cosr_cosp);

        let sinp = 2.0 * (w * j - k * i);
        let y = if sinp.abs() >= 1.0 {
            FRAC_PI_2.copysign(sinp)
        } else {
            sinp.asin()
        };

        let siny_cosp = 2.0 * (w * k + i * j);
        let cosy_cosp = 1.0 - 2.0 * (j * j + k * k);
        let z = siny_cosp.atan2(cosy_cosp);

        Tuple3::new(
            trig::radians_to_degrees(x),
            trig::radians_to_degrees(y),
            trig::radians_to_degrees(z),
        )
    }
}

/// Extracts the rotation from a homogeneous rotation matrix.
///
/// Branches on the largest diagonal term so the divisor stays large, which
/// keeps the extraction numerically stable for every rotation.
impl From<Matrix4> for Quaternion {
    fn from(m: Matrix4) -> Self {
        let trace = m[(0, 0)] + m[(1, 1)] + m[(2, 2)];

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new(
                s / 4.0,
                (m[(2, 1)] - m[(1, 2)]) / s,
                (m[(0, 2)] - m[(2, 0)]) / s,
                (m[(1, 0)] - m[(0, 1)]) / s,
            )
        } else if m[(0, 0)] > m[(1, 1)] && m[(0, 0)] > m[(2, 2)] {
            let s = (1.0 + m[(0, 0)] - m[(1, 1)] - m[(2, 2)]).sqrt() * 2.0;
            Self::new(
                (m[(2, 1)] - m[(1, 2)]) / s,
                s / 4.0,
                (m[(0, 1)] + m[(1, 0)]) / s,
                (m[(0, 2)] + m[(2, 0)]) / s,
            )
        } else if m[(1, 1)] > m[(2, 2)] {
            let s = (1.0 + m[(1, 1)] - m[(0, 0)] - m[(2, 2)]).sqrt() * 2.0;
            Self::new(
                (m[(0, 2)] - m[(2, 0)]) / s,
                (m[(0, 1)] + m[(1, 0)]) / s,
                s / 4.0,
                (m[(1, 2)] + m[(2, 1)]) / s,
            )
        } else {
            let s = (1.0 + m[(2, 2)] - m[(0, 0)] - m[(1, 1)]).sqrt() * 2.0;
            Self::new(
                (m[(1, 0)] - m[(0, 1)]) / s,
                (m[(0, 2)] + m[(2, 0)]) / s,
                (m[(1, 2)] + m[(2, 1)]) / s,
                s / 4.0,
            )
        }
    }
}

/// Hamilton product. Non-commutative; `a * b` rotates by `b` first, then
/// by `a`.
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, other: Quaternion) -> Quaternion {
        Quaternion::new(
            self.w * other.w - self.i * other.i - self.j * other.j - self.k * other.k,
            self.w * other.i + self.i * other.w + self.j * other.k - self.k * other.j,
            self.w * other.j + self.j * other.w + self.k * other.i - self.i * other.k,
            self.w * other.k + self.k * other.w + self.i * other.j - self.j * other.i,
        )
    }
}

/// Rotates the tuple's vector part by conjugation q * p * q^-1. The w
/// component passes through unchanged.
impl Mul<Tuple4<f64>> for Quaternion {
    type Output = Tuple4<f64>;

    fn mul(self, tuple: Tuple4<f64>) -> Tuple4<f64> {
        let pure = Quaternion::new(0.0, tuple.x(), tuple.y(), tuple.z());
        let rotated = self * pure * self.inverse();
        Tuple4::new(rotated.i, rotated.j, rotated.k, tuple.w())
    }
}

impl Mul<Point> for Quaternion {
    type Output = Point;

    fn mul(self, point: Point) -> Point {
        Point::from_tuple(self * point.as_tuple())
    }
}

impl Mul<Vector> for Quaternion {
    type Output = Vector;

    fn mul(self, vector: Vector) -> Vector {
        Vector::from_tuple(self * vector.as_tuple())
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.w, self.i, self.j, self.k)
    }
}
