/*
   Run-Length Encoding: A bit oriented run-length code where the
   length of every run of equal bits is written as an Elias gamma
   codeword.

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

//! Bit oriented run-length encoding.
//!
//! The input bits are read most significant first and split into
//! maximal runs of equal bits. The encoded container is laid out as:
//!
//! ```text
//!  MSB                               LSB
//!   │                                 │
//!   ▼                                 ▼
//!   1 B <gamma(run 1)> <gamma(run 2)> ...
//!   ▲ ▲
//!   │ └─ value of the first run, later runs alternate
//!   └─── compressed flag
//! ```
//!
//! If the compressed bits are not strictly shorter than the input, the
//! container holds the input verbatim behind a `0` flag instead:
//!
//! ```text
//!   0 <input bits>
//! ```
//!
//! so an encoded container is never more than one bit wider than its
//! input.
//!
//! # Examples
//! ```
//! use bite::bitmap::Bitmap;
//! use bite::encoding::rle;
//!
//! let input = Bitmap::from_bin_str("0000000000000011").unwrap();
//! let enc = rle::encode(&input).unwrap();
//! assert_eq!(enc.to_string_radix(2).unwrap(), "100001110010");
//! assert!(rle::is_compressed(&enc));
//!
//! let dec = rle::decode(&enc).unwrap();
//! assert_eq!(dec, input);
//! ```

mod scan;

use crate::prefix::gamma;
use crate::{EncodingError, Result};
use bite_bitmap::{Bitmap, BitmapError};
use scan::Codewords;
use tracing::{debug, trace};

/// The widest bitmap [`decode()`] will produce. A compressed container
/// whose runs add up to more bits fails with
/// [`EncodingError::RunOverflow`].
pub const MAX_DECODED_BITS: u64 = 1 << 32;

#[inline(always)]
fn bit_char(bit: u8) -> char {
    if bit == 0 {
        '0'
    } else {
        '1'
    }
}

/// Appends the gamma codeword of a run of `len` bits to `text`.
fn push_run(text: &mut String, bit: u8, len: u64) -> Result<()> {
    trace!(bit, len, "closing run");
    text.push_str(&gamma::encode(len)?.to_string_radix(2)?);
    Ok(())
}

/// Run-length encodes the bits of `b`.
///
/// Returns an empty bitmap for an empty input. Fails with
/// [`WidthOverflow`](BitmapError::WidthOverflow) if the magnitude of
/// `b` is wider than its declared size.
///
/// # Examples
/// ```
/// use bite::bitmap::Bitmap;
/// use bite::encoding::rle;
///
/// // too many short runs, stored verbatim behind a 0 flag
/// let input = Bitmap::from_bin_str("0000000011000011").unwrap();
/// let enc = rle::encode(&input).unwrap();
/// assert_eq!(enc.to_string_radix(2).unwrap(), "00000000011000011");
/// assert!(!rle::is_compressed(&enc));
/// ```
pub fn encode(b: &Bitmap) -> Result<Bitmap> {
    let size = b.size();
    if size == 0 {
        return Ok(Bitmap::new(0));
    }
    if b.bit_len() > size {
        return Err(BitmapError::WidthOverflow {
            size,
            width: b.bit_len(),
        }
        .into());
    }

    let first = b.bit(size - 1);
    let mut runs: Vec<u64> = Vec::new();
    let mut prev = first;
    let mut run: u64 = 1;
    for i in (0..size - 1).rev() {
        let curr = b.bit(i);
        if curr != prev {
            runs.push(run);
            prev = curr;
            run = 0;
        }
        run += 1;
    }
    runs.push(run);

    // the first run bit plus one codeword per run
    let packed = 1 + runs.iter().map(|r| gamma::encoded_len(*r)).sum::<usize>();
    if packed >= size {
        debug!(
            size,
            compressed = packed,
            "run-length coding does not shrink the input, storing it verbatim"
        );
        let out = format!("0{}", b.to_string_radix(2)?);
        return Ok(Bitmap::from_bin_str(&out)?);
    }

    let mut text = String::with_capacity(packed + 1);
    text.push('1');
    // the decoder needs the value of the first run
    text.push(bit_char(first));
    let mut bit = first;
    for run in runs {
        push_run(&mut text, bit, run)?;
        bit ^= 1;
    }

    debug!(size, compressed = packed, "run-length coded");
    Ok(Bitmap::from_bin_str(&text)?)
}

/// Decodes a container produced by [`encode()`].
///
/// Returns an empty bitmap for an empty container. A compressed
/// container whose bits do not split into whole gamma codewords fails
/// with [`EncodingError::Truncated`], and a run that cannot be
/// represented, or that would take the output past
/// [`MAX_DECODED_BITS`], fails with [`EncodingError::RunOverflow`].
///
/// # Examples
/// ```
/// use bite::bitmap::Bitmap;
/// use bite::encoding::{rle, EncodingError};
///
/// let enc = Bitmap::from_bin_str("100001110010").unwrap();
/// let dec = rle::decode(&enc).unwrap();
/// assert_eq!(dec.to_string_radix(2).unwrap(), "0000000000000011");
///
/// let enc = Bitmap::from_bin_str("00000000011000011").unwrap();
/// let dec = rle::decode(&enc).unwrap();
/// assert_eq!(dec.to_string_radix(2).unwrap(), "0000000011000011");
///
/// let bad = Bitmap::from_bin_str("10000").unwrap();
/// assert_eq!(rle::decode(&bad), Err(EncodingError::Truncated { position: 0 }));
/// ```
pub fn decode(b: &Bitmap) -> Result<Bitmap> {
    let size = b.size();
    if size == 0 {
        return Ok(Bitmap::new(0));
    }

    if !is_compressed(b) {
        debug!(size, "container holds verbatim bits");
        if size == 1 {
            return Ok(Bitmap::new(0));
        }
        return Ok(b.range(0, size - 1)?);
    }

    debug!(size, "container holds run-length coded bits");
    if size < 2 {
        return Err(EncodingError::Truncated { position: 0 });
    }

    let mut bit = b.bit(size - 2);
    let mut total: u64 = 0;
    let mut text = String::new();
    for span in Codewords::new(b, size - 2) {
        let span = span?;
        let codeword = b.range(span.start, span.end)?;
        let run = gamma::decode(&codeword).ok_or(EncodingError::RunOverflow)?;
        trace!(bit, run, start = span.start, end = span.end, "decoded run");

        total = total
            .checked_add(run)
            .filter(|total| *total <= MAX_DECODED_BITS)
            .ok_or(EncodingError::RunOverflow)?;
        let run = usize::try_from(run).map_err(|_| EncodingError::RunOverflow)?;
        text.try_reserve(run).map_err(|_| EncodingError::RunOverflow)?;
        text.extend(core::iter::repeat(bit_char(bit)).take(run));
        bit ^= 1;
    }

    // every well formed stream holds at least one run
    if text.is_empty() {
        return Err(EncodingError::Truncated { position: 0 });
    }
    Ok(Bitmap::from_bin_str(&text)?)
}

/// Returns true if `b` is a run-length coded container, false if it
/// holds its bits verbatim or is empty.
pub fn is_compressed(b: &Bitmap) -> bool {
    match b.size() {
        0 => false,
        size => b.bit(size - 1) == 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASES: [(&str, &str, &str); 4] = [
        (
            "expanded data is stored verbatim",
            "0000000011000011",
            "00000000011000011",
        ),
        (
            "short data",
            "0000000000000011",
            "100001110010",
        ),
        (
            "medium data",
            "00000000001111111000000010000000",
            "1000010100011100111100111",
        ),
        (
            "long data",
            "1111111111111111000000000000001111111110000111110000000000000011",
            "110000100000001110000100100100001010001110010",
        ),
    ];

    fn encode_bin(bin: &str) -> String {
        let b = Bitmap::from_bin_str(bin).unwrap();
        encode(&b).unwrap().to_string_radix(2).unwrap()
    }

    fn decode_bin(bin: &str) -> Result<String> {
        let b = Bitmap::from_bin_str(bin).unwrap();
        Ok(decode(&b)?.to_string_radix(2).unwrap())
    }

    #[test]
    fn test_encode() {
        for (name, input, want) in CASES.iter() {
            assert_eq!(encode_bin(input), *want, "{}", name);
        }
    }

    #[test]
    fn test_decode() {
        for (name, want, input) in CASES.iter() {
            assert_eq!(decode_bin(input).unwrap(), *want, "{}", name);
        }
    }

    #[test]
    fn test_empty() {
        let enc = encode(&Bitmap::new(0)).unwrap();
        assert_eq!(enc.size(), 0);
        let dec = decode(&enc).unwrap();
        assert_eq!(dec.size(), 0);
        assert!(!is_compressed(&enc));
    }

    #[test]
    fn test_compressed_width_is_sum_of_codewords() {
        // flag, first run bit, then one codeword per run
        let runs = [14u64, 2];
        let input = Bitmap::from_bin_str("0000000000000011").unwrap();
        let enc = encode(&input).unwrap();
        let want = 2 + runs.iter().map(|r| gamma::encoded_len(*r)).sum::<usize>();
        assert_eq!(enc.size(), want);

        // runs of 8, 2, 4 and 2 need 19 bits, more than the 16 input bits
        let runs = [8u64, 2, 4, 2];
        assert!(1 + runs.iter().map(|r| gamma::encoded_len(*r)).sum::<usize>() >= 16);
        let input = Bitmap::from_bin_str("0000000011000011").unwrap();
        assert!(!is_compressed(&encode(&input).unwrap()));
    }

    #[test]
    fn test_single_bits() {
        // a lone bit never compresses
        assert_eq!(encode_bin("0"), "00");
        assert_eq!(encode_bin("1"), "01");
        assert_eq!(decode_bin("00").unwrap(), "0");
        assert_eq!(decode_bin("01").unwrap(), "1");
        assert_eq!(decode_bin("0").unwrap(), "");
    }

    #[test]
    fn test_equal_length_is_stored_verbatim() {
        // "0" + gamma(6) is 6 bits, as long as the input
        assert_eq!(encode_bin("000000"), "0000000");
        assert_eq!(decode_bin("0000000").unwrap(), "000000");

        // "0" + gamma(7) is one bit shorter than the input
        assert_eq!(encode_bin("0000000"), "1000111");
        assert_eq!(decode_bin("1000111").unwrap(), "0000000");
    }

    #[test]
    fn test_leading_zeros_survive() {
        let input = format!("{}1", "0".repeat(200));
        let enc = encode(&Bitmap::from_bin_str(&input).unwrap()).unwrap();
        assert!(is_compressed(&enc));
        assert!(enc.size() < 30);
        let dec = decode(&enc).unwrap();
        assert_eq!(dec.size(), 201);
        assert_eq!(dec.to_string_radix(2).unwrap(), input);
    }

    #[test]
    fn test_long_runs_cross_words() {
        let input = format!("{}{}{}", "1".repeat(100), "0".repeat(300), "1".repeat(70));
        let b = Bitmap::from_bin_str(&input).unwrap();
        let enc = encode(&b).unwrap();
        assert!(is_compressed(&enc));
        assert_eq!(decode(&enc).unwrap(), b);
    }

    #[test]
    fn test_encode_rejects_wide_magnitude() {
        let mut b = Bitmap::new(3);
        b.set_magnitude(0b1111);
        assert_eq!(
            encode(&b),
            Err(EncodingError::Bitmap(BitmapError::WidthOverflow {
                size: 3,
                width: 4
            }))
        );
    }

    #[test]
    fn test_decode_truncated() {
        for bin in ["1", "10", "11", "1000", "10000", "100001"] {
            assert_eq!(
                decode_bin(bin),
                Err(EncodingError::Truncated { position: 0 }),
                "bin={}",
                bin
            );
        }
        // the body of the second codeword runs below bit 0
        assert_eq!(
            decode_bin("100001110001"),
            Err(EncodingError::Truncated { position: 0 })
        );
        assert_eq!(
            decode_bin("1000011100010"),
            Err(EncodingError::Truncated { position: 1 })
        );
    }

    #[test]
    fn test_decode_run_overflow() {
        // a 65 bit codeword body cannot be a run length
        let bin = format!("10{}1{}", "0".repeat(64), "0".repeat(64));
        assert_eq!(decode_bin(&bin), Err(EncodingError::RunOverflow));
    }

    #[test]
    fn test_decode_rejects_oversized_output() {
        // gamma(2^34) is a valid codeword but the run is too long
        let bin = format!("10{}1{}", "0".repeat(34), "0".repeat(34));
        assert_eq!(decode_bin(&bin), Err(EncodingError::RunOverflow));

        // a run of 1 followed by a run of 2^32 goes one bit past the limit
        let bin = format!("111{}1{}", "0".repeat(32), "0".repeat(32));
        assert_eq!(decode_bin(&bin), Err(EncodingError::RunOverflow));
    }

    #[test]
    fn test_is_compressed() {
        assert!(is_compressed(&Bitmap::from_bin_str("1001").unwrap()));
        assert!(!is_compressed(&Bitmap::from_bin_str("0111").unwrap()));
        assert!(!is_compressed(&Bitmap::new(0)));
    }
}
