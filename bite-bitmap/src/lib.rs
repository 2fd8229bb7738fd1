pub mod bitmap;

pub use bitmap::bitmap::Bitmap;
pub use bitmap::radix::{MAX_RADIX, MIN_RADIX};
pub use bitmap::{BitmapError, Result};
