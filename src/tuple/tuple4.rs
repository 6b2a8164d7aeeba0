//! Four-component homogeneous tuple.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::precision::ApproxEq;
use crate::tuple::Tuple3;

/// A tuple with x, y, z and w components.
///
/// The w component is the homogeneous coordinate: 1 for an affine position,
/// 0 for a direction. [`Point`](crate::Point) and [`Vector`](crate::Vector)
/// wrap this type and pin w to those values.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuple4<T> {
    x: T,
    y: T,
    z: T,
    w: T,
}

impl<T: Copy> Tuple4<T> {
    /// Creates a tuple with x, y, z and w components.
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Returns the X component.
    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    /// Returns the Y component.
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    /// Returns the Z component.
    #[inline]
    pub fn z(&self) -> T {
        self.z
    }

    /// Returns the W component.
    #[inline]
    pub fn w(&self) -> T {
        self.w
    }

    /// Returns the spatial components, dropping w.
    #[inline]
    pub fn drop_w(&self) -> Tuple3<T> {
        Tuple3::new(self.x, self.y, self.z)
    }
}

impl<T: ApproxEq> PartialEq for Tuple4<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x.approx_eq(other.x)
            && self.y.approx_eq(other.y)
            && self.z.approx_eq(other.z)
            && self.w.approx_eq(other.w)
    }
}

impl<T: Add<Output = T>> Add for Tuple4<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
            w: self.w + other.w,
        }
    }
}

impl<T: Copy + Add<Output = T>> AddAssign for Tuple4<T> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: Sub<Output = T>> Sub for Tuple4<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
            w: self.w - other.w,
        }
    }
}

impl<T: Copy + Sub<Output = T>> SubAssign for Tuple4<T> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: Neg<Output = T>> Neg for Tuple4<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Tuple4<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            w: self.w * scalar,
        }
    }
}

impl<T: Copy + Mul<Output = T>> MulAssign<T> for Tuple4<T> {
    fn mul_assign(&mut self, scalar: T) {
        *self = *self * scalar;
    }
}

impl<T: Copy + Div<Output = T>> Div<T> for Tuple4<T> {
    type Output = Self;

    fn div(self, scalar: T) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
            w: self.w / scalar,
        }
    }
}

impl<T: Copy + Div<Output = T>> DivAssign<T> for Tuple4<T> {
    fn div_assign(&mut self, scalar: T) {
        *self = *self / scalar;
    }
}

impl<T: fmt::Display> fmt::Display for Tuple4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple4_default_is_zero() {
        let t = Tuple4::<f64>::default();
        assert_eq!(t.x(), 0.0);
        assert_eq!(t.y(), 0.0);
        assert_eq!(t.z(), 0.0);
        assert_eq!(t.w(), 0.0);
    }

    #[test]
    fn test_tuple4_accessors() {
        let t = Tuple4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(t.x(), 1.0);
        assert_eq!(t.y(), 2.0);
        assert_eq!(t.z(), 3.0);
        assert_eq!(t.w(), 4.0);
    }

    #[test]
    fn test_tuple4_equality_is_epsilon_tolerant() {
        let t = Tuple4::new(4.3, -4.2, 3.1, 1.0);
        assert_eq!(t, Tuple4::new(4.3, -4.2, 3.1 - 1e-7, 1.0));
        assert_ne!(t, Tuple4::new(1.0, 2.0, -9.3, 0.0));
    }

    #[test]
    fn test_tuple4_float_equality() {
        let t = Tuple4::new(4.3f32, -4.2, 3.1, 1.0);
        assert_eq!(t, Tuple4::new(4.3f32, -4.2, 3.1, 1.0));
        assert_ne!(t, Tuple4::new(1.0f32, 2.0, -9.3, 0.0));
    }

    #[test]
    fn test_tuple4_integer_equality_is_exact() {
        assert_eq!(Tuple4::new(4, -4, 3, 1), Tuple4::new(4, -4, 3, 1));
        assert_ne!(Tuple4::new(4, -4, 3, 1), Tuple4::new(1, 2, -9, 0));
    }

    #[test]
    fn test_tuple4_addition() {
        let a = Tuple4::new(3.0, -2.0, 5.0, 1.0);
        let b = Tuple4::new(-2.0, 3.0, 1.0, 0.0);
        assert_eq!(a + b, Tuple4::new(1.0, 1.0, 6.0, 1.0));

        let mut c = a;
        c += b;
        assert_eq!(c, Tuple4::new(1.0, 1.0, 6.0, 1.0));
    }

    #[test]
    fn test_tuple4_subtraction() {
        let a = Tuple4::new(3.0, -2.0, 5.0, 1.0);
        let b = Tuple4::new(-2.0, 3.0, 1.0, 0.0);
        assert_eq!(a - b, Tuple4::new(5.0, -5.0, 4.0, 1.0));
    }

    #[test]
    fn test_tuple4_negation() {
        assert_eq!(
            -Tuple4::new(1.0, -2.0, 3.0, -4.0),
            Tuple4::new(-1.0, 2.0, -3.0, 4.0)
        );
    }

    #[test]
    fn test_tuple4_scalar_multiplication() {
        let t = Tuple4::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(t * 3.5, Tuple4::new(3.5, -7.0, 10.5, -14.0));
        assert_eq!(t * 0.5, Tuple4::new(0.5, -1.0, 1.5, -2.0));
    }

    #[test]
    fn test_tuple4_scalar_division() {
        let t = Tuple4::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(t / 2.0, Tuple4::new(0.5, -1.0, 1.5, -2.0));

        let mut u = t;
        u /= 2.0;
        assert_eq!(u, Tuple4::new(0.5, -1.0, 1.5, -2.0));
    }

    #[test]
    fn test_tuple4_drop_w() {
        let t = Tuple4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(t.drop_w(), Tuple3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_tuple4_display() {
        assert_eq!(
            Tuple4::new(4.3, -4.2, 3.1, 1.0).to_string(),
            "4.3, -4.2, 3.1, 1"
        );
    }
}
