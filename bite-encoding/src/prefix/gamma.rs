/*
   Elias Gamma Coding: A universal code for the positive integers,
   devised by Peter Elias. Each value is written as a unary count of
   its bit length followed by its binary form.

   Copyright 2026 The bite Authors

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

//! Elias gamma coding of positive integers into a
//! [`Bitmap`](bite_bitmap::Bitmap).
//!
//! A value `x` with `N + 1` significant bits is written as `N` zero
//! bits followed by the `N + 1` bits of `x`, most significant first:
//!
//! ```text
//! decimal 1  = 1
//! decimal 4  = 00 100
//! decimal 13 = 000 1101
//! ```
//!
//! The codeword read as an unsigned integer is `x` itself, the zero
//! prefix only adds width. Encoding therefore stores `x` in a bitmap
//! that is `2N + 1` bits wide and decoding reads the magnitude back.
//!
//! # Examples
//! ```
//! use bite::encoding::gamma;
//!
//! let enc = gamma::encode(13).unwrap();
//! assert_eq!(enc.size(), 7);
//! assert_eq!(enc.to_string_radix(2).unwrap(), "0001101");
//! assert_eq!(gamma::decode(&enc), Some(13));
//!
//! assert!(gamma::encode(0).is_err());
//! ```

use crate::{EncodingError, Result};
use bite_bitmap::Bitmap;
use core::mem;

const U64_BITS: usize = mem::size_of::<u64>() * 8;

/// Returns the width of the gamma codeword for `x`, or `0` for zero
/// which has no codeword.
///
/// # Examples
/// ```
/// use bite::encoding::gamma;
/// assert_eq!(gamma::encoded_len(1), 1);
/// assert_eq!(gamma::encoded_len(4), 5);
/// assert_eq!(gamma::encoded_len(u64::MAX), 127);
/// ```
pub fn encoded_len(x: u64) -> usize {
    if x == 0 {
        return 0;
    }
    // Chop off the MSB 1 bit and count the remaining bits to get the
    // length of the unary prefix
    let lz = x.leading_zeros() as usize;
    let offset_len = U64_BITS - (lz + 1);
    2 * offset_len + 1
}

/// Encodes the positive integer `x` as a gamma codeword. Returns
/// [`EncodingError::Zero`] if `x` is `0`.
pub fn encode(x: u64) -> Result<Bitmap> {
    if x == 0 {
        return Err(EncodingError::Zero);
    }
    // The high N bits of the codeword are the zero padding of the
    // bitmap's declared width
    let mut b = Bitmap::new(encoded_len(x));
    b.set_magnitude(x);
    Ok(b)
}

/// Decodes the gamma codeword `b`. Returns `None` if `b` is empty or
/// its value does not fit in a [`u64`].
///
/// The codeword is not validated: `b` must span exactly the `2N + 1`
/// bits of one codeword, as returned by [`encode()`] or sliced out of
/// a stream with [`Bitmap::range()`].
pub fn decode(b: &Bitmap) -> Option<u64> {
    if b.size() == 0 {
        return None;
    }
    b.magnitude()
}
