//! Affine transform builder.
//!
//! A [`Transform`] holds a translation, a rotation and a component-wise
//! scale, and renders them as the 4x4 matrix T * R * S on demand. Mutators
//! consume and return the transform, so a pipeline reads as a chain:
//!
//! ```
//! use gimbal::{Point, Transform};
//!
//! let transform = Transform::new()
//!     .rotate(90.0, 0.0, 0.0)
//!     .scale(5.0, 5.0, 5.0)
//!     .translate(10.0, 5.0, 7.0);
//!
//! assert_eq!(transform * Point::new(1.0, 0.0, 1.0), Point::new(15.0, 0.0, 7.0));
//! ```

use std::fmt;
use std::ops::Mul;

use crate::matrix::Matrix4;
use crate::quaternion::Quaternion;
use crate::tuple::{Point, Tuple4, Vector};
use crate::Result;

/// A translation, rotation and scale composed into an affine transform.
///
/// The composed matrix is always rederived from the three parts; it is
/// never stored, so the parts and the matrix cannot drift apart.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    position: Vector,
    rotation: Quaternion,
    scale: Vector,
}

impl Transform {
    /// Creates the identity transform: no translation, no rotation, unit
    /// scale.
    pub fn new() -> Self {
        Self {
            position: Vector::zero(),
            rotation: Quaternion::identity(),
            scale: Vector::one(),
        }
    }

    /// Returns the accumulated translation.
    #[inline]
    pub fn position(&self) -> Vector {
        self.position
    }

    /// Returns the current rotation.
    #[inline]
    pub fn rotation(&self) -> Quaternion {
        self.rotation
    }

    /// Returns the accumulated component-wise scale.
    #[inline]
    pub fn scaling(&self) -> Vector {
        self.scale
    }

    /// Translates along x, y and z. Translations accumulate additively and
    /// are unaffected by the current rotation or scale.
    pub fn translate(mut self, x: f64, y: f64, z: f64) -> Self {
        self.position += Vector::new(x, y, z);
        self
    }

    /// Rotates by Tait-Bryan angles in degrees. The new rotation composes
    /// onto the existing one.
    pub fn rotate(mut self, x_degrees: f64, y_degrees: f64, z_degrees: f64) -> Self {
        self.rotation = self.rotation * Quaternion::euler_angles(x_degrees, y_degrees, z_degrees);
        self
    }

    /// Scales along the x, y and z axes. Scales accumulate component-wise
    /// multiplicatively.
    pub fn scale(mut self, x: f64, y: f64, z: f64) -> Self {
        self.scale = Vector::new(
            x * self.scale.x(),
            y * self.scale.y(),
            z * self.scale.z(),
        );
        self
    }

    /// Replaces the rotation so that the world forward direction points
    /// from the current position toward `target`.
    ///
    /// Fails with
    /// [`GimbalError::DegenerateAxis`](crate::GimbalError::DegenerateAxis)
    /// when `target` coincides with the current position.
    pub fn look_at(self, target: Point) -> Result<Self> {
        self.look_at_with_reference(target, Vector::forward())
    }

    /// Replaces the rotation so that `reference` is mapped onto the
    /// direction from the current position toward `target`.
    pub fn look_at_with_reference(mut self, target: Point, reference: Vector) -> Result<Self> {
        let direction = target - self.position.as_point();
        self.rotation = Quaternion::from_to(&reference, &direction)?;
        Ok(self)
    }

    /// The world up axis under the current rotation.
    pub fn up(&self) -> Vector {
        self.rotation * Vector::up()
    }

    /// The world down axis under the current rotation.
    pub fn down(&self) -> Vector {
        self.rotation * Vector::down()
    }

    /// The world left axis under the current rotation.
    pub fn left(&self) -> Vector {
        self.rotation * Vector::left()
    }

    /// The world right axis under the current rotation.
    pub fn right(&self) -> Vector {
        self.rotation * Vector::right()
    }

    /// The world forward axis under the current rotation.
    pub fn forward(&self) -> Vector {
        self.rotation * Vector::forward()
    }

    /// The world backward axis under the current rotation.
    pub fn backward(&self) -> Vector {
        self.rotation * Vector::backward()
    }

    /// Composes translation, rotation and scale into the matrix T * R * S.
    /// Applied to a tuple, the scale therefore acts first and the
    /// translation last.
    pub fn matrix(&self) -> Matrix4 {
        let translation = Matrix4::new([
            [1.0, 0.0, 0.0, self.position.x()],
            [0.0, 1.0, 0.0, self.position.y()],
            [0.0, 0.0, 1.0, self.position.z()],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        let rotation = self.rotation.matrix();

        let scale = Matrix4::new([
            [self.scale.x(), 0.0, 0.0, 0.0],
            [0.0, self.scale.y(), 0.0, 0.0],
            [0.0, 0.0, self.scale.z(), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        translation * rotation * scale
    }

    /// Returns the transpose of the composed matrix.
    pub fn transposed(&self) -> Matrix4 {
        self.matrix().transposed()
    }

    /// Returns the inverse of the composed matrix.
    ///
    /// Fails with
    /// [`GimbalError::SingularMatrix`](crate::GimbalError::SingularMatrix)
    /// when the transform cannot be undone, e.g. after a zero scale.
    pub fn inverted(&self) -> Result<Matrix4> {
        self.matrix().inverted()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Mul<Tuple4<f64>> for Transform {
    type Output = Tuple4<f64>;

    fn mul(self, tuple: Tuple4<f64>) -> Tuple4<f64> {
        self.matrix() * tuple
    }
}

impl Mul<Point> for Transform {
    type Output = Point;

    fn mul(self, point: Point) -> Point {
        self.matrix() * point
    }
}

impl Mul<Vector> for Transform {
    type Output = Vector;

    fn mul(self, vector: Vector) -> Vector {
        self.matrix() * vector
    }
}

/// Renders the composed matrix.
impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.matrix().fmt(f)
    }
}

/// Transforms are equal when their composed matrices are equal, inheriting
/// the matrix tolerance.
impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        self.matrix() == other.matrix()
    }
}
