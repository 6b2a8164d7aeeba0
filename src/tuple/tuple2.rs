//! Two-component tuple.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::precision::ApproxEq;

/// A tuple with x and y components.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuple2<T> {
    x: T,
    y: T,
}

impl<T: Copy> Tuple2<T> {
    /// Creates a tuple with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
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
}

impl<T: ApproxEq> PartialEq for Tuple2<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x.approx_eq(other.x) && self.y.approx_eq(other.y)
    }
}

impl<T: Add<Output = T>> Add for Tuple2<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T: Copy + Add<Output = T>> AddAssign for Tuple2<T> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: Sub<Output = T>> Sub for Tuple2<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T: Copy + Sub<Output = T>> SubAssign for Tuple2<T> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: Neg<Output = T>> Neg for Tuple2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Tuple2<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl<T: Copy + Mul<Output = T>> MulAssign<T> for Tuple2<T> {
    fn mul_assign(&mut self, scalar: T) {
        *self = *self * scalar;
    }
}

impl<T: Copy + Div<Output = T>> Div<T> for Tuple2<T> {
    type Output = Self;

    fn div(self, scalar: T) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl<T: Copy + Div<Output = T>> DivAssign<T> for Tuple2<T> {
    fn div_assign(&mut self, scalar: T) {
        *self = *self / scalar;
    }
}

impl<T: fmt::Display> fmt::Display for Tuple2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}
