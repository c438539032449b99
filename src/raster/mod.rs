mod pixel;

pub use pixel::Pixel;
