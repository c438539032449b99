pub mod error;
pub mod math;
pub mod raster;
pub mod shapes;

pub use error::{ConsoleError, MathError, Result};
