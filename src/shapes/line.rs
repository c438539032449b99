use crate::error::Result;
use crate::math::Vector2f;

/// A 2D line segment from `p1` to `p2`.
///
/// The parametric form is: `P(t) = p1 + t * (p2 - p1)`, with `t` in `[0, 1]`
/// on the segment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    pub p1: Vector2f,
    pub p2: Vector2f,
}

impl Line {
    #[must_use]
    pub fn new(p1: Vector2f, p2: Vector2f) -> Self {
        Self { p1, p2 }
    }

    /// Distance between the endpoints.
    #[must_use]
    pub fn length(&self) -> f32 {
        (self.p2 - self.p1).magnitude()
    }

    /// Returns the unit direction from `p1` to `p2`.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment has zero length.
    pub fn direction(&self) -> Result<Vector2f> {
        (self.p2 - self.p1).normalize()
    }

    #[must_use]
    pub fn midpoint(&self) -> Vector2f {
        self.point_at(0.5)
    }

    /// Evaluates the segment at parameter `t`. Values outside `[0, 1]`
    /// land on the extension of the segment.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vector2f {
        self.p1.lerp(self.p2, t)
    }

    /// Splits the segment into `steps` equal parts and yields the
    /// `steps + 1` points that bound them, both endpoints included.
    ///
    /// `steps = 0` yields `p1` alone.
    pub fn sample(&self, steps: u16) -> impl Iterator<Item = Vector2f> + '_ {
        (0..=steps).map(move |i| {
            if i == 0 {
                self.p1
            } else if i == steps {
                self.p2
            } else {
                self.point_at(f32::from(i) / f32::from(steps))
            }
        })
    }
}
