//! gimbal: fixed-size linear algebra and spatial transforms.
//!
//! Value types for geometry-adjacent code: tuples, points and vectors in
//! homogeneous coordinates, matrices with compile-time dimensions, rotation
//! quaternions, and an affine [`Transform`] builder that composes
//! translation, rotation and scale into a 4x4 matrix.
//!
//! ```
//! use gimbal::{Point, Transform};
//!
//! let spun = Transform::new().rotate(90.0, 0.0, 0.0);
//! assert_eq!(spun * Point::new(0.0, 1.0, 0.0), Point::new(0.0, 0.0, 1.0));
//! ```

pub mod matrix;
pub mod precision;
pub mod quaternion;
pub mod transform;
pub mod trig;
pub mod tuple;

// Re-exports for convenience
pub use matrix::{Matrix, Matrix4, Scalar};
pub use quaternion::Quaternion;
pub use transform::Transform;
pub use tuple::{Point, Tuple2, Tuple3, Tuple4, Vector};

/// Result type for gimbal operations.
pub type Result<T> = std::result::Result<T, GimbalError>;

#[derive(Debug, thiserror::Error)]
pub enum GimbalError {
    /// A flat initializer does not hold one element per matrix cell.
    #[error("expected {expected} elements for a {rows}x{cols} matrix, got {got}")]
    DataSizeMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        got: usize,
    },

    /// The matrix has a zero determinant, so no inverse exists.
    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,

    /// A rotation axis or direction has near-zero length, so no direction
    /// can be derived from it.
    #[error("axis or direction has near-zero length")]
    DegenerateAxis,
}
