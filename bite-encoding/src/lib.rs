pub mod prefix;
pub mod rle;

#[cfg(test)]
mod tests_props;

use bite_bitmap::BitmapError;
use thiserror::Error;

/// Errors returned by the gamma and run-length codecs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Gamma coding is only defined for positive integers.
    #[error("cannot gamma encode zero")]
    Zero,

    /// The compressed stream does not split into whole codewords. The
    /// position is the bit index at which the stream was cut.
    #[error("compressed stream is truncated at bit {position}")]
    Truncated { position: usize },

    /// A decoded run does not fit in a u64 or in memory, or the runs
    /// add up to more than [`rle::MAX_DECODED_BITS`].
    #[error("run length overflows the decoded output")]
    RunOverflow,

    #[error(transparent)]
    Bitmap(#[from] BitmapError),
}

/// A specialized Result type for encoding operations
pub type Result<T> = core::result::Result<T, EncodingError>;
