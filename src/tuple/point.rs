//! Position in Euclidean space.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::tuple::{Tuple3, Tuple4, Vector};

/// A point in Euclidean space, stored as a homogeneous tuple with w = 1.
///
/// The unit w component makes the translation part of an affine matrix
/// apply when the point is transformed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    tuple: Tuple4<f64>,
}

impl Point {
    /// Creates a point with x, y and z components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            tuple: Tuple4::new(x, y, z, 1.0),
        }
    }

    /// The point at the origin.
    #[inline]
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Creates a point from a homogeneous tuple, re-fixing w to 1.
    #[inline]
    pub fn from_tuple(tuple: Tuple4<f64>) -> Self {
        Self::new(tuple.x(), tuple.y(), tuple.z())
    }

    /// Creates a point from a three-component tuple.
    #[inline]
    pub fn from_tuple3(tuple: Tuple3<f64>) -> Self {
        Self::new(tuple.x(), tuple.y(), tuple.z())
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

    /// Returns the W component, always 1.
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

    /// Reinterprets the point as a direction from the origin (w becomes 0).
    #[inline]
    pub fn as_vector(&self) -> Vector {
        Vector::new(self.x(), self.y(), self.z())
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

/// Point minus point yields the displacement between them.
impl Sub for Point {
    type Output = Vector;

    fn sub(self, other: Point) -> Vector {
        Vector::from_tuple(self.tuple - other.tuple)
    }
}

/// Point minus vector yields the point moved against the vector.
impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, other: Vector) -> Point {
        Point::from_tuple(self.tuple - other.as_tuple())
    }
}

/// Point plus vector yields the point moved along the vector.
impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, other: Vector) -> Point {
        Point::from_tuple(self.tuple + other.as_tuple())
    }
}

/// Negation leaves the affine convention behind, so the result is a raw
/// tuple with w = -1 rather than a point.
impl Neg for Point {
    type Output = Tuple4<f64>;

    fn neg(self) -> Tuple4<f64> {
        -self.tuple
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tuple.fmt(f)
    }
}
