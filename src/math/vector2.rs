use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{MathError, Result};

use super::{abs, tolerance, Scalar, Vector3};

/// A 2D point or displacement.
///
/// Arithmetic operators work componentwise between two vectors and
/// broadcast when the right-hand side is a scalar. The compound
/// assignment operators mutate the receiver; everything else returns a
/// new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vector2<T> {
    /// Creates a vector from its components.
    #[must_use]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// A vector with both components set to `s`.
    #[must_use]
    pub fn splat(s: T) -> Self {
        Self::new(s, s)
    }

    /// Euclidean norm.
    ///
    /// Evaluated with `hypot`, so it stays finite when the squared
    /// components would overflow.
    #[must_use]
    pub fn magnitude(self) -> T {
        self.x.hypot(self.y)
    }

    /// Squared Euclidean norm. Overflows to infinity for components
    /// beyond the square root of the scalar's maximum.
    #[must_use]
    pub fn magnitude_squared(self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroVector`] if the magnitude is below
    /// [`TOLERANCE`](super::TOLERANCE).
    pub fn normalize(self) -> Result<Self> {
        if self.magnitude() < tolerance::<T>() {
            return Err(MathError::ZeroVector.into());
        }
        // Bring the largest component to 1 first; the norm of the scaled
        // vector is in [1, sqrt(2)] and cannot overflow.
        let scaled = self / abs(self.x).max(abs(self.y));
        let r = T::one() / scaled.magnitude();
        Ok(scaled * r)
    }

    /// Rotates the vector by 90° counter-clockwise.
    #[must_use]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    #[must_use]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    #[must_use]
    pub fn ceil(self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil())
    }

    /// Componentwise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Componentwise minimum.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Clamps each component into `[lo, hi]`.
    ///
    /// Computed as `min(max(self, lo), hi)`, so `hi` wins when the bounds
    /// cross.
    #[must_use]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// Linear interpolation towards `target`.
    ///
    /// `t = 0` yields `self`, `t = 1` yields `target`; values outside
    /// `[0, 1]` extrapolate.
    #[must_use]
    pub fn lerp(self, target: Self, t: T) -> Self {
        self * (T::one() - t) + target * t
    }

    #[must_use]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Scalar (z-component) cross product: `x * oy - y * ox`.
    ///
    /// Positive when `other` lies counter-clockwise from `self`.
    #[must_use]
    pub fn cross(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Interprets `self` as polar `(r, θ)` and returns Cartesian `(x, y)`.
    #[must_use]
    pub fn cart(self) -> Self {
        let (sin, cos) = self.y.sin_cos();
        Self::new(cos * self.x, sin * self.x)
    }

    /// Interprets `self` as Cartesian and returns polar `(r, θ)`.
    ///
    /// The angle is in `(-π, π]`.
    #[must_use]
    pub fn polar(self) -> Self {
        Self::new(self.magnitude(), self.y.atan2(self.x))
    }

    /// Divides both components by `s`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] if `s` is zero.
    pub fn checked_div_scalar(self, s: T) -> Result<Self> {
        if s == T::zero() {
            return Err(MathError::DivisionByZero.into());
        }
        Ok(self / s)
    }

    /// Appends a `z` component.
    #[must_use]
    pub fn extend(self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }
}

impl<T: Scalar> Default for Vector2<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

impl<T: Scalar> From<nalgebra::Vector2<T>> for Vector2<T> {
    fn from(v: nalgebra::Vector2<T>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl<T: Scalar> From<Vector2<T>> for nalgebra::Vector2<T> {
    fn from(v: Vector2<T>) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

impl<T: Scalar> Add for Vector2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Add<T> for Vector2<T> {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        Self::new(self.x + rhs, self.y + rhs)
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Sub<T> for Vector2<T> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        Self::new(self.x - rhs, self.y - rhs)
    }
}

impl<T: Scalar> Mul for Vector2<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Scalar> Div for Vector2<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl<T: Scalar> Div<T> for Vector2<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Scalar> AddAssign for Vector2<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: Scalar> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: Scalar> MulAssign for Vector2<T> {
    fn mul_assign(&mut self, rhs: Self) {
        self.x *= rhs.x;
        self.y *= rhs.y;
    }
}

impl<T: Scalar> MulAssign<T> for Vector2<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl<T: Scalar> DivAssign for Vector2<T> {
    fn div_assign(&mut self, rhs: Self) {
        self.x /= rhs.x;
        self.y /= rhs.y;
    }
}

impl<T: Scalar> DivAssign<T> for Vector2<T> {
    fn div_assign(&mut self, rhs: T) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

// Scalar on the left-hand side. Coherence rules out a blanket impl over `T`.
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl Add<Vector2<$t>> for $t {
            type Output = Vector2<$t>;

            fn add(self, rhs: Vector2<$t>) -> Vector2<$t> {
                rhs + self
            }
        }

        impl Mul<Vector2<$t>> for $t {
            type Output = Vector2<$t>;

            fn mul(self, rhs: Vector2<$t>) -> Vector2<$t> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64);
