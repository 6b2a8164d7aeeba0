//! Direction vector in Euclidean space.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::precision;
use crate::trig;
use crate::tuple::{Tuple3, Tuple4};
use crate::{GimbalError, Result};

/// A vector in Euclidean space, stored as a homogeneous tuple with w = 0.
///
/// The zero w component makes the translation part of an affine matrix a
/// no-op when the vector is transformed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    tuple: Tuple4<f64>,
}

impl Vector {
    /// Creates a vector with x, y and z components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            tuple: Tuple4::new(x, y, z, 0.0),
        }
    }

    /// Creates a vector from a homogeneous tuple, re-fixing w to 0.
    #[inline]
    pub fn from_tuple(tuple: Tuple4<f64>) -> Self {
        Self::new(tuple.x(), tuple.y(), tuple.z())
    }

    /// Creates a vector from a three-component tuple.
    #[inline]
    pub fn from_tuple3(tuple: Tuple3<f64>) -> Self {
        Self::new(tuple.x(), tuple.y(), tuple.z())
    }

    /// The zero vector. Note that it has no defined direction.
    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// The vector with all components 1.
    #[inline]
    pub fn one() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Unit vector along +Y.
    #[inline]
    pub fn up() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Unit vector along -Y.
    #[inline]
    pub fn down() -> Self {
        Self::new(0.0, -1.0, 0.0)
    }

    /// Unit vector along +X.
    #[inline]
    pub fn right() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Unit vector along -X.
    #[inline]
    pub fn left() -> Self {
        Self::new(-1.0, 0.0, 0.0)
    }

    /// Unit vector along +Z.
    #[inline]
    pub fn forward() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Unit vector along -Z.
    #[inline]
    pub fn backward() -> Self {
        Self::new(0.0, 0.0, -1.0)
    }

    /// Returns the X component.
    #[inline]
    pub fn x(&self) -> f64 {
        self.tuple.x()
    }

    /// Returns the Y component.
    #[inline]
    pub fn y(&self) -> f64 {
        self.tuple.y()
    }

    /// Returns the Z component.
    #[inline]
    pub fn z(&self) -> f64 {
        self.tuple.z()
    }

    /// Returns the W component, always 0.
    #[inline]
    pub fn w(&self) -> f64 {
        self.tuple.w()
    }

    /// Returns the underlying homogeneous tuple.
    #[inline]
    pub fn as_tuple(&self) -> Tuple4<f64> {
        self.tuple
    }

    /// Returns the spatial components as a three-component tuple.
    #[inline]
    pub fn as_tuple3(&self) -> Tuple3<f64> {
        self.tuple.drop_w()
    }

    /// Reinterprets the vector as a point (w becomes 1).
    #[inline]
    pub fn as_point(&self) -> super::Point {
        super::Point::new(self.x(), self.y(), self.z())
    }

    /// Cross product of `a` and `b`.
    pub fn cross(a: &Vector, b: &Vector) -> Vector {
        Vector::new(
            a.y() * b.z() - a.z() * b.y(),
            a.z() * b.x() - a.x() * b.z(),
            a.x() * b.y() - a.y() * b.x(),
        )
    }

    /// Dot product of `a` and `b`.
    pub fn dot(a: &Vector, b: &Vector) -> f64 {
        a.x() * b.x() + a.y() * b.y() + a.z() * b.z()
    }

    /// Angle between `a` and `b` in degrees, in [0, 180].
    pub fn angle(a: &Vector, b: &Vector) -> f64 {
        trig::radians_to_degrees(Self::cross(b, a).magnitude().atan2(Self::dot(a, b)))
    }

    /// Signed angle between `a` and `b` in degrees, measured around `axis`.
    pub fn signed_angle(a: &Vector, b: &Vector, axis: &Vector) -> f64 {
        trig::radians_to_degrees(Self::dot(&Self::cross(a, b), axis).atan2(Self::dot(a, b)))
    }

    /// Reflects `vector` off a surface with the given `normal`.
    pub fn reflect(vector: &Vector, normal: &Vector) -> Vector {
        *vector - *normal * (2.0 * Self::dot(vector, normal))
    }

    /// Projects `p` onto the direction `dir`.
    pub fn project(p: &Vector, dir: &Vector) -> Vector {
        *dir * (Self::dot(p, dir) / Self::dot(dir, dir))
    }

    /// Returns the magnitude (length).
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns the square of the magnitude.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        Self::dot(self, self)
    }

    /// Returns the unit vector with the same direction.
    ///
    /// Fails with [`GimbalError::DegenerateAxis`] when the vector has
    /// near-zero length and no direction can be derived.
    pub fn normalized(&self) -> Result<Vector> {
        let magnitude = self.magnitude();
        if precision::equal(magnitude, 0.0) {
            return Err(GimbalError::DegenerateAxis);
        }
        Ok(*self / magnitude)
    }

    /// Normalizes the vector in place.
    ///
    /// Fails with [`GimbalError::DegenerateAxis`] when the vector has
    /// near-zero length, leaving it unchanged.
    pub fn normalize(&mut self) -> Result<()> {
        *self = self.normalized()?;
        Ok(())
    }

    /// Returns a copy with components within tolerance of 0 snapped to 0.
    pub fn clear_near_zero(&self) -> Vector {
        let snap = |v: f64| if precision::equal(v, 0.0) { 0.0 } else { v };
        Vector::new(snap(self.x()), snap(self.y()), snap(self.z()))
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::from_tuple(self.tuple + other.tuple)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, other: Vector) {
        *self = *self + other;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector::from_tuple(self.tuple - other.tuple)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, other: Vector) {
        *self = *self - other;
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::from_tuple(-self.tuple)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        Vector::from_tuple(self.tuple * scalar)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, scalar: f64) -> Vector {
        Vector::from_tuple(self.tuple / scalar)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tuple.fmt(f)
    }
}
