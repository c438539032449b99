use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{MathError, Result};

use super::{abs, tolerance, Scalar, Vector2};

/// A 3D point or displacement.
///
/// Shares the operator semantics of [`Vector2`]. The polar helpers
/// (`perp`, `cart`, `polar`) are planar and have no 3D counterpart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Vector3<T> {
    /// Creates a vector from its components.
    #[must_use]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// A vector with all three components set to `s`.
    #[must_use]
    pub fn splat(s: T) -> Self {
        Self::new(s, s, s)
    }

    /// Euclidean norm, evaluated as `hypot(hypot(x, y), z)` so it stays
    /// finite when the squared components would overflow.
    #[must_use]
    pub fn magnitude(self) -> T {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Squared Euclidean norm. Overflows to infinity for components
    /// beyond the square root of the scalar's maximum.
    #[must_use]
    pub fn magnitude_squared(self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
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
        let largest = abs(self.x).max(abs(self.y)).max(abs(self.z));
        let scaled = self / largest;
        let r = T::one() / scaled.magnitude();
        Ok(scaled * r)
    }

    #[must_use]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor(), self.z.floor())
    }

    #[must_use]
    pub fn ceil(self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil(), self.z.ceil())
    }

    /// Componentwise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Componentwise minimum.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Componentwise `min(max(self, lo), hi)`.
    #[must_use]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// Linear interpolation: `self * (1 - t) + target * t`.
    #[must_use]
    pub fn lerp(self, target: Self, t: T) -> Self {
        self * (T::one() - t) + target * t
    }

    #[must_use]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Divides all components by `s`.
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

    /// Drops the `z` component.
    #[must_use]
    pub fn truncate(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }
}

impl<T: Scalar> Default for Vector3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}

/// Lifts a planar vector onto the `z = 0` plane.
impl<T: Scalar> From<Vector2<T>> for Vector3<T> {
    fn from(v: Vector2<T>) -> Self {
        v.extend(T::zero())
    }
}

impl<T: Scalar> From<nalgebra::Vector3<T>> for Vector3<T> {
    fn from(v: nalgebra::Vector3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<T: Scalar> From<Vector3<T>> for nalgebra::Vector3<T> {
    fn from(v: Vector3<T>) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Scalar> Add<T> for Vector3<T> {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        Self::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Scalar> Sub<T> for Vector3<T> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        Self::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

impl<T: Scalar> Mul for Vector3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Scalar> Div for Vector3<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl<T: Scalar> Div<T> for Vector3<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Scalar> AddAssign for Vector3<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<T: Scalar> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl<T: Scalar> MulAssign for Vector3<T> {
    fn mul_assign(&mut self, rhs: Self) {
        self.x *= rhs.x;
        self.y *= rhs.y;
        self.z *= rhs.z;
    }
}

impl<T: Scalar> MulAssign<T> for Vector3<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl<T: Scalar> DivAssign for Vector3<T> {
    fn div_assign(&mut self, rhs: Self) {
        self.x /= rhs.x;
        self.y /= rhs.y;
        self.z /= rhs.z;
    }
}

impl<T: Scalar> DivAssign<T> for Vector3<T> {
    fn div_assign(&mut self, rhs: T) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl Add<Vector3<$t>> for $t {
            type Output = Vector3<$t>;

            fn add(self, rhs: Vector3<$t>) -> Vector3<$t> {
                rhs + self
            }
        }

        impl Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;

            fn mul(self, rhs: Vector3<$t>) -> Vector3<$t> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64);
