mod vector2;
mod vector3;

pub use vector2::Vector2;
pub use vector3::Vector3;

use nalgebra::RealField;

/// Floating-point scalar usable as a vector component.
///
/// Blanket-implemented for every [`RealField`] that is `Copy`, which covers
/// `f32` and `f64`.
pub trait Scalar: RealField + Copy {}

impl<T: RealField + Copy> Scalar for T {}

/// 2D vector of `f32`.
pub type Vector2f = Vector2<f32>;

/// 2D vector of `f64`.
pub type Vector2d = Vector2<f64>;

/// 3D vector of `f32`.
pub type Vector3f = Vector3<f32>;

/// 3D vector of `f64`.
pub type Vector3d = Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// [`TOLERANCE`] converted to the scalar type `T`.
#[must_use]
pub fn tolerance<T: Scalar>() -> T {
    nalgebra::convert(TOLERANCE)
}

/// Absolute value of a scalar.
///
/// `RealField` inherits `abs` from both `ComplexField` and `Signed`, so the
/// call is spelled out once here.
pub(crate) fn abs<T: Scalar>(v: T) -> T {
    nalgebra::ComplexField::abs(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_converts_to_f32() {
        let tol: f32 = tolerance();
        assert!(tol > 0.0 && tol < 1e-9, "tol={tol}");
    }

    #[test]
    fn abs_of_negative() {
        assert_eq!(abs(-2.5_f64), 2.5);
        assert_eq!(abs(3.0_f32), 3.0);
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn vectors_are_send_and_sync() {
        assert_send_sync::<Vector2f>();
        assert_send_sync::<Vector2d>();
        assert_send_sync::<Vector3f>();
        assert_send_sync::<Vector3d>();
    }

    #[test]
    fn aliases_share_one_definition() {
        let a = Vector2f::new(1.0, 2.0);
        let b = Vector2d::new(1.0, 2.0);
        assert_eq!(f64::from(a.x), b.x);
        assert_eq!(f64::from(a.y), b.y);

        let c = Vector3f::new(1.0, 2.0, 3.0);
        let d = Vector3d::new(1.0, 2.0, 3.0);
        assert_eq!(f64::from(c.z), d.z);
    }
}
