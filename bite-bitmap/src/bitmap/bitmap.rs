/*
   Bitmap: A fixed-width view over an arbitrary-precision unsigned
   integer. The magnitude is stored in a vector of little-endian
   64 bit words and the width controls how the bits are displayed.

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

use crate::bitmap::{
    radix,
    words::{self, WORD_BITS},
    BitmapError, Result,
};
use core::fmt;
use core::fmt::Debug;

/// A sequence of bits stored as an arbitrary-precision unsigned
/// integer (the *magnitude*) together with a declared width (the
/// *size*).
///
/// Bits are indexed by significance: bit `0` is the least
/// significant bit, printed rightmost, and bit `size - 1` is the most
/// significant displayed bit. When rendered as text the magnitude is
/// left padded with zeros up to `size` characters, so leading zero
/// bits are part of the sequence even though they do not change the
/// magnitude.
///
/// # Getting Started
/// ```
/// use bite::bitmap::Bitmap;
///
/// let mut b = Bitmap::new(8);
/// b.set_bit(0, 1).unwrap();
/// b.set_bit(2, 1).unwrap();
///
/// assert_eq!(b.bit(0), 1);
/// assert_eq!(b.bit(1), 0);
/// assert_eq!(b.magnitude(), Some(0b101));
/// assert_eq!(b.to_string_radix(2).unwrap(), "00000101");
/// ```
///
/// # The Size Invariant
///
/// The size is a display width and not a capacity. Bits can be set
/// at any index, but rendering a bitmap whose magnitude needs more
/// digits than `size` fails with
/// [`WidthOverflow`](BitmapError::WidthOverflow). Callers storing a
/// larger magnitude are expected to grow the width first with
/// [`set_size()`](#method.set_size).
///
/// ```
/// use bite::bitmap::{Bitmap, BitmapError};
///
/// let mut b = Bitmap::new(2);
/// b.set_magnitude(0b111);
/// assert_eq!(
///     b.to_string_radix(2),
///     Err(BitmapError::WidthOverflow { size: 2, width: 3 })
/// );
///
/// b.set_size(4);
/// assert_eq!(b.to_string_radix(2).unwrap(), "0111");
/// ```
///
/// # Memory Management
///
/// The magnitude is held in a [`Vec<u64>`](Vec) of little-endian
/// words, word `0` holding bits `0` thru `63`. The vector never keeps
/// zero words past the most significant set bit, which makes two
/// bitmaps equal exactly when both their sizes and magnitudes are
/// equal.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Bitmap {
    pub(super) words: Vec<u64>,
    pub(super) size: usize,
}

impl Bitmap {
    /// Creates a zero valued bitmap with the declared width `size`. A
    /// size of `0` represents the empty sequence.
    ///
    /// # Examples
    /// ```
    /// use bite::bitmap::Bitmap;
    /// let b = Bitmap::new(5);
    /// assert_eq!(b.size(), 5);
    /// assert_eq!(b.to_string_radix(2).unwrap(), "00000");
    /// ```
    pub fn new(size: usize) -> Bitmap {
        Bitmap {
            words: Vec::new(),
            size,
        }
    }

    /// Creates a bitmap from a string of `'0'` and `'1'` characters
    /// written most significant bit first. The size of the bitmap is
    /// the length of the string, so leading zeros are preserved. An
    /// empty string creates an empty bitmap.
    ///
    /// # Examples
    /// ```
    /// use bite::bitmap::Bitmap;
    /// let b = Bitmap::from_bin_str("00101").unwrap();
    /// assert_eq!(b.size(), 5);
    /// assert_eq!(b.magnitude(), Some(5));
    ///
    /// assert!(Bitmap::from_bin_str("0021").is_err());
    /// ```
    pub fn from_bin_str(s: &str) -> Result<Bitmap> {
        let mut b = Bitmap::new(s.len());
        if !s.is_empty() {
            b.set_str_radix(s, 2)?;
        }
        Ok(b)
    }

    /// Creates a bitmap from bits listed most significant first. The
    /// size of the bitmap is the number of bits.
    ///
    /// # Examples
    /// ```
    /// use bite::bitmap::Bitmap;
    /// let b = Bitmap::from_msb0(&[true, false, false]);
    /// assert_eq!(b.size(), 3);
    /// assert_eq!(b.magnitude(), Some(4));
    /// ```
    pub fn from_msb0(bits: &[bool]) -> Bitmap {
        let mut b = Bitmap::new(bits.len());
        for (pos, bit) in bits.iter().rev().enumerate() {
            if *bit {
                words::or_bits_at(&mut b.words, pos, 1, 1);
            }
        }
        b
    }

    /// Returns the declared width of this bitmap.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Changes the declared width without touching the magnitude.
    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }

    /// Returns the minimal number of bits needed to represent the
    /// magnitude. This is `0` for a zero magnitude and can exceed
    /// [`size()`](#method.size) if bits were set past the declared
    /// width.
    ///
    /// # Examples
    /// ```
    /// use bite::bitmap::Bitmap;
    /// let mut b = Bitmap::new(16);
    /// assert_eq!(b.bit_len(), 0);
    /// b.set_magnitude(0b1001);
    /// assert_eq!(b.bit_len(), 4);
    /// ```
    pub fn bit_len(&self) -> usize {
        words::bit_len(&self.words)
    }

    /// Returns true if the magnitude is zero.
    pub fn is_zero(&self) -> bool {
        self.words.is_empty()
    }

    /// Sets the bit at index `i` to `v`, which must be `0` or `1`. The
    /// declared width is not changed, even if `i >= size()`.
    ///
    /// # Examples
    /// ```
    /// use bite::bitmap::{Bitmap, BitmapError};
    ///
    /// let mut b = Bitmap::new(4);
    /// b.set_bit(3, 1).unwrap();
    /// assert_eq!(b.to_string_radix(2).unwrap(), "1000");
    /// b.set_bit(3, 0).unwrap();
    /// assert_eq!(b.to_string_radix(2).unwrap(), "0000");
    ///
    /// assert_eq!(b.set_bit(0, 2), Err(BitmapError::InvalidBit(2)));
    /// ```
    pub fn set_bit(&mut self, i: usize, v: u8) -> Result<()> {
        if check_bit!(v) {
            words::or_bits_at(&mut self.words, i, 1, 1);
        } else {
            let idx = i / WORD_BITS;
            if idx < self.words.len() {
                self.words[idx] &= !(1u64 << (i % WORD_BITS));
                words::normalize(&mut self.words);
            }
        }
        Ok(())
    }

    /// Returns the bit at index `i`. Bits above the magnitude read as
    /// `0`, whatever the declared width.
    pub fn bit(&self, i: usize) -> u8 {
        match self.words.get(i / WORD_BITS) {
            None => 0,
            Some(word) => ((word >> (i % WORD_BITS)) & 1) as u8,
        }
    }

    /// Replaces the magnitude with `x`.
    pub fn set_magnitude(&mut self, x: u64) {
        self.words.clear();
        if x != 0 {
            self.words.push(x);
        }
    }

    /// Returns the magnitude as a [`u64`] or `None` if it does not
    /// fit in 64 bits.
    ///
    /// # Examples
    /// ```
    /// use bite::bitmap::Bitmap;
    /// let mut b = Bitmap::new(80);
    /// b.set_magnitude(u64::MAX);
    /// assert_eq!(b.magnitude(), Some(u64::MAX));
    ///
    /// b.set_bit(64, 1).unwrap();
    /// assert_eq!(b.magnitude(), None);
    /// ```
    pub fn magnitude(&self) -> Option<u64> {
        match self.words.len() {
            0 => Some(0),
            1 => Some(self.words[0]),
            _ => None,
        }
    }

    /// Parses the numeral `s` into the magnitude, selecting the base
    /// from its prefix: `0b` or `0B` selects base 2, `0o`, `0O` or a
    /// bare leading `0` selects base 8, `0x` or `0X` selects base 16
    /// and anything else is read in base 10. The declared width is not
    /// changed. On failure the bitmap is left untouched.
    ///
    /// # Examples
    /// ```
    /// use bite::bitmap::Bitmap;
    /// let mut b = Bitmap::new(8);
    ///
    /// b.set_str("0b101").unwrap();
    /// assert_eq!(b.magnitude(), Some(5));
    /// b.set_str("0x1f").unwrap();
    /// assert_eq!(b.magnitude(), Some(31));
    /// b.set_str("017").unwrap();
    /// assert_eq!(b.magnitude(), Some(15));
    /// b.set_str("42").unwrap();
    /// assert_eq!(b.magnitude(), Some(42));
    ///
    /// assert!(b.set_str("0b").is_err());
    /// assert_eq!(b.magnitude(), Some(42));
    /// ```
    pub fn set_str(&mut self, s: &str) -> Result<()> {
        let (radix, digits) = split_prefix(s);
        self.words = radix::parse(digits, radix).map_err(|_| BitmapError::Parse {
            input: s.to_string(),
            radix,
        })?;
        Ok(())
    }

    /// Parses the numeral `s` in the specified `radix` (2 thru 62)
    /// into the magnitude. No prefix is accepted. On failure the
    /// bitmap is left untouched.
    pub fn set_str_radix(&mut self, s: &str, radix: u32) -> Result<()> {
        self.words = radix::parse(s, radix)?;
        Ok(())
    }

    /// Renders the magnitude in the specified `radix` (2 thru 62),
    /// left padded with `'0'` until the text is [`size()`](#method.size)
    /// characters long. Digits above `9` are `a` thru `z` followed by
    /// `A` thru `Z`.
    ///
    /// Returns [`WidthOverflow`](BitmapError::WidthOverflow) if the
    /// magnitude needs more than `size()` digits.
    ///
    /// # Examples
    /// ```
    /// use bite::bitmap::Bitmap;
    /// let mut b = Bitmap::new(4);
    /// b.set_magnitude(255);
    /// assert_eq!(b.to_string_radix(16).unwrap(), "00ff");
    /// assert_eq!(b.to_string_radix(10).unwrap(), "0255");
    /// assert!(b.to_string_radix(2).is_err());
    /// ```
    pub fn to_string_radix(&self, radix: u32) -> Result<String> {
        let natural = radix::render(&self.words, radix)?;
        if natural.len() > self.size {
            return Err(BitmapError::WidthOverflow {
                size: self.size,
                width: natural.len(),
            });
        }
        let mut out = String::with_capacity(self.size);
        out.extend(core::iter::repeat('0').take(self.size - natural.len()));
        out.push_str(&natural);
        Ok(out)
    }

    /// Replaces the magnitude with `buf` read as a big-endian unsigned
    /// integer.
    ///
    /// # Examples
    /// ```
    /// use bite::bitmap::Bitmap;
    /// let mut b = Bitmap::new(16);
    /// b.set_bytes(&[0x01, 0x02]);
    /// assert_eq!(b.magnitude(), Some(0x0102));
    /// assert_eq!(b.to_bytes(), vec![0x01, 0x02]);
    /// ```
    pub fn set_bytes(&mut self, buf: &[u8]) {
        self.words.clear();
        // rchunks yields the least significant word first
        for chunk in buf.rchunks(8) {
            let word = chunk.iter().fold(0u64, |acc, b| (acc << 8) | *b as u64);
            self.words.push(word);
        }
        words::normalize(&mut self.words);
    }

    /// Returns the magnitude as a big-endian byte vector without
    /// leading zero bytes. A zero magnitude returns an empty vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let count = (self.bit_len() + 7) / 8;
        (0..count)
            .rev()
            .map(|idx| (self.words[idx / 8] >> ((idx % 8) * 8)) as u8)
            .collect()
    }

    /// Returns the bits `[start, end)` as a new bitmap of size
    /// `end - start`, where bit `j` of the result is bit `start + j` of
    /// self. Bits past the stored magnitude read as `0`, so the range
    /// may extend beyond both the magnitude and the declared width.
    ///
    /// The bits are copied a word at a time.
    ///
    /// # Examples
    /// ```
    /// use bite::bitmap::{Bitmap, BitmapError};
    ///
    /// let b = Bitmap::from_bin_str("110010").unwrap();
    /// let r = b.range(1, 4).unwrap();
    /// assert_eq!(r.size(), 3);
    /// assert_eq!(r.to_string_radix(2).unwrap(), "001");
    ///
    /// let r = b.range(4, 10).unwrap();
    /// assert_eq!(r.to_string_radix(2).unwrap(), "000011");
    ///
    /// assert_eq!(b.range(3, 3), Err(BitmapError::InvalidRange { start: 3, end: 3 }));
    /// ```
    pub fn range(&self, start: usize, end: usize) -> Result<Bitmap> {
        if end <= start {
            return Err(BitmapError::InvalidRange { start, end });
        }

        let mut out = Bitmap::new(end - start);
        let stored = self.words.len() * WORD_BITS;
        if start >= stored {
            return Ok(out);
        }

        // everything past the stored words is zero
        let len = end.min(stored) - start;
        let count = (len + WORD_BITS - 1) / WORD_BITS;
        out.words = (0..count)
            .map(|idx| words::word_at(&self.words, start + idx * WORD_BITS))
            .collect();

        let tail = len % WORD_BITS;
        if tail > 0 {
            if let Some(last) = out.words.last_mut() {
                *last &= words::lsb_mask(tail);
            }
        }
        words::normalize(&mut out.words);
        Ok(out)
    }
}

/// Splits the radix prefix off `s`. A bare leading zero selects
/// octal, but a lone `"0"` is decimal zero.
fn split_prefix(s: &str) -> (u32, &str) {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'b' | b'B' => return (2, &s[2..]),
            b'o' | b'O' => return (8, &s[2..]),
            b'x' | b'X' => return (16, &s[2..]),
            _ => return (8, &s[1..]),
        }
    }
    (10, s)
}

/// Formats the bits padded to the declared width. If the magnitude is
/// wider than the declared width all of its bits are written.
///
/// # Examples
/// ```
/// use bite::bitmap::Bitmap;
/// let b = Bitmap::from_bin_str("0011").unwrap();
/// assert_eq!(format!("{:b}", b), "0011");
/// assert_eq!(format!("{:#b}", b), "0b0011");
/// ```
impl fmt::Binary for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let natural = radix::render(&self.words, 2).map_err(|_| fmt::Error)?;
        let pad = self.size.saturating_sub(natural.len());
        let mut digits = String::with_capacity(pad + natural.len());
        digits.extend(core::iter::repeat('0').take(pad));
        digits.push_str(&natural);
        f.pad_integral(true, "0b", &digits)
    }
}

impl Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("size", &self.size)
            .field("bits", &format_args!("{:b}", self))
            .finish()
    }
}
