//! console3d showcase: walks the vector API and logs the results.
//!
//! Usage:
//! ```text
//! cargo run --example showcase
//! RUST_LOG=showcase=debug cargo run --example showcase
//! ```

use console3d::math::{Vector2d, Vector2f, Vector3d};
use console3d::raster::Pixel;
use console3d::shapes::Line;
use console3d::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for this demo and the library.
    // Override with RUST_LOG env var.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("showcase=info".parse().unwrap_or_default())
        .add_directive("console3d=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    planar()?;
    spatial()?;
    raster()?;
    Ok(())
}

fn planar() -> Result<()> {
    let v = Vector2d::new(3.0, 4.0);
    let w = Vector2d::new(1.0, 2.0);
    tracing::info!(%v, magnitude = v.magnitude(), "2D vector");
    tracing::info!(normalized = %v.normalize()?, perp = %v.perp(), "2D transforms");
    tracing::info!(dot = v.dot(w), cross = v.cross(w), "2D products");

    let polar = v.polar();
    tracing::info!(%polar, back = %polar.cart(), "polar round trip");
    tracing::debug!(lerp = %v.lerp(w, 0.25), clamp = %v.clamp(w, w * 2.0), "2D helpers");

    if let Err(err) = Vector2d::zero().normalize() {
        tracing::warn!(%err, "normalizing the zero vector");
    }
    Ok(())
}

fn spatial() -> Result<()> {
    let x = Vector3d::new(1.0, 0.0, 0.0);
    let y = Vector3d::new(0.0, 1.0, 0.0);
    let up = x.cross(y);
    tracing::info!(%up, "x cross y");

    let diagonal = (x + y + up).normalize()?;
    tracing::info!(%diagonal, magnitude = diagonal.magnitude(), "unit diagonal");
    Ok(())
}

fn raster() -> Result<()> {
    let line = Line::new(Vector2f::new(0.0, 0.0), Vector2f::new(8.0, 6.0));
    tracing::info!(length = line.length(), direction = %line.direction()?, "line");

    // Sample the segment into pixels, one per unit of length, endpoints included.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = line.length().ceil().max(1.0) as u16;
    for point in line.sample(steps) {
        let pixel = Pixel::rgba(255, 255, 255, 255).with_position(point.floor());
        tracing::debug!(position = %pixel.position, channels = ?pixel.channels(), "pixel");
    }
    Ok(())
}
