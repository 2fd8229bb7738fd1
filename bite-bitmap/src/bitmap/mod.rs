#[macro_use]
pub(super) mod macros;

pub mod bitmap;
pub mod radix;
mod words;

use thiserror::Error;

/// Errors returned by [`Bitmap`](bitmap::Bitmap) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitmapError {
    /// A bit can only be set to `0` or `1`.
    #[error("bit value must be 0 or 1, got {0}")]
    InvalidBit(u8),

    /// A range must be non-empty with `start < end`.
    #[error("range end {end} is not greater than start {start}")]
    InvalidRange { start: usize, end: usize },

    #[error("radix {0} is outside 2..=62")]
    InvalidRadix(u32),

    /// The input is not a valid numeral in the requested radix.
    #[error("cannot parse {input:?} as a base {radix} numeral")]
    Parse { input: String, radix: u32 },

    /// The magnitude needs more digits than the declared width of
    /// the bitmap.
    #[error("magnitude needs {width} digits but the bitmap is {size} wide")]
    WidthOverflow { size: usize, width: usize },
}

/// A specialized Result type for bitmap operations
pub type Result<T> = core::result::Result<T, BitmapError>;
