//! Bit-level codecs: an arbitrary-width bitmap with Elias gamma coding
//! and bit oriented run-length encoding layered on top.
//!
//! # Examples
//! ```
//! use bite::bitmap::Bitmap;
//! use bite::encoding::{gamma, rle};
//!
//! let enc = gamma::encode(4).unwrap();
//! assert_eq!(enc.to_string_radix(2).unwrap(), "00100");
//!
//! let bits = Bitmap::from_bin_str("0000000000000011").unwrap();
//! let packed = rle::encode(&bits).unwrap();
//! assert_eq!(packed.size(), 12);
//! assert_eq!(rle::decode(&packed).unwrap(), bits);
//! ```

/// A fixed-width bit container backed by an arbitrary-precision
/// unsigned integer.
pub mod bitmap {
    pub use bite_bitmap::Bitmap;
    /// Errors returned by [`Bitmap`] operations.
    pub use bite_bitmap::BitmapError;
    /// The range of radixes accepted by the text conversions of
    /// [`Bitmap`].
    pub use bite_bitmap::{MAX_RADIX, MIN_RADIX};
}

/// Codecs that read and write [`Bitmap`](bitmap::Bitmap)s.
pub mod encoding {
    /// Elias gamma coding of positive integers.
    pub use bite_encoding::prefix::gamma;
    /// Bit oriented run-length encoding with gamma coded run lengths.
    pub use bite_encoding::rle;
    /// Errors returned by the [`gamma`] and [`rle`] codecs.
    pub use bite_encoding::EncodingError;
}

pub use bite_bitmap::bits;
