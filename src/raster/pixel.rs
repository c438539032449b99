use crate::math::Vector2f;

/// A single framebuffer sample: an RGBA color at a screen position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
    pub position: Vector2f,
}

impl Pixel {
    /// Creates a pixel at the origin with alpha `0`.
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0)
    }

    /// Creates a pixel at the origin with an explicit alpha.
    #[must_use]
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            a,
            position: Vector2f::zero(),
        }
    }

    /// Returns this pixel moved to `position`.
    #[must_use]
    pub fn with_position(self, position: Vector2f) -> Self {
        Self { position, ..self }
    }

    /// Channels in `[r, g, b, a]` order.
    #[must_use]
    pub fn channels(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_alpha_to_zero() {
        let p = Pixel::new(10, 20, 30);
        assert_eq!(p.channels(), [10, 20, 30, 0]);
        assert_eq!(p.position, Vector2f::zero());
    }

    #[test]
    fn rgba_keeps_channel_order() {
        let p = Pixel::rgba(1, 2, 3, 255);
        assert_eq!((p.r, p.g, p.b, p.a), (1, 2, 3, 255));
    }

    #[test]
    fn with_position_keeps_color() {
        let p = Pixel::rgba(9, 8, 7, 6).with_position(Vector2f::new(4.0, 5.0));
        assert_eq!(p.channels(), [9, 8, 7, 6]);
        assert_eq!(p.position, Vector2f::new(4.0, 5.0));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn pixel_is_send_and_sync() {
        assert_send_sync::<Pixel>();
    }

    #[test]
    fn default_is_transparent_black_at_origin() {
        let p = Pixel::default();
        assert_eq!(p, Pixel::new(0, 0, 0));
    }
}
