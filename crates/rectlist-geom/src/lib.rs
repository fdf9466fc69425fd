// Axis-aligned rectangle model
mod format;
mod point;
mod rectangle;

pub use format::format_g;
pub use point::Point;
pub use rectangle::{Rectangle, Summary, DEFAULT_NAME, SCALE_FACTOR};
