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

use crate::bitmap::{words, BitmapError, Result};

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 62;

const DIGITS: &[u8; MAX_RADIX as usize] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn check_radix(radix: u32) -> Result<()> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(BitmapError::InvalidRadix(radix));
    }
    Ok(())
}

/// Returns the value of the ascii digit `c` in the specified
/// `radix`. Letters are case-insensitive up to radix 36, above that
/// the upper case letters are the digits 36 thru 61.
fn digit_value(c: u8, radix: u32) -> Option<u64> {
    let val = match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'z' => c - b'a' + 10,
        b'A'..=b'Z' if radix <= 36 => c - b'A' + 10,
        b'A'..=b'Z' => c - b'A' + 36,
        _ => return None,
    };
    if (val as u32) < radix {
        Some(val as u64)
    } else {
        None
    }
}

/// Returns the largest power of `radix` that fits in a word and the
/// number of digits it spans.
fn big_base(radix: u32) -> (u64, usize) {
    let radix = radix as u64;
    let mut base: u64 = 1;
    let mut digits = 0;
    while let Some(next) = base.checked_mul(radix) {
        base = next;
        digits += 1;
    }
    (base, digits)
}

/// Returns the number of bits per digit if `radix` is a power of
/// two, `None` otherwise.
fn pow2_bits(radix: u32) -> Option<usize> {
    if radix.is_power_of_two() {
        Some(radix.trailing_zeros() as usize)
    } else {
        None
    }
}

/// Parses `s` as an unsigned numeral in `radix` into normalized
/// little-endian words. No prefix or sign is accepted.
pub(super) fn parse(s: &str, radix: u32) -> Result<Vec<u64>> {
    check_radix(radix)?;
    let parse_err = || BitmapError::Parse {
        input: s.to_string(),
        radix,
    };
    if s.is_empty() {
        return Err(parse_err());
    }

    let mut out: Vec<u64> = Vec::new();
    match pow2_bits(radix) {
        Some(bits) => {
            // place each digit directly, starting from the lsb end
            for (pos, c) in s.bytes().rev().enumerate() {
                let val = digit_value(c, radix).ok_or_else(parse_err)?;
                words::or_bits_at(&mut out, pos * bits, val, bits);
            }
        }
        None => {
            let (base, _) = big_base(radix);
            let mut acc: u64 = 0;
            let mut mul: u64 = 1;
            for c in s.bytes() {
                let val = digit_value(c, radix).ok_or_else(parse_err)?;
                acc = acc * radix as u64 + val;
                mul *= radix as u64;
                if mul == base {
                    words::mul_add(&mut out, base, acc);
                    acc = 0;
                    mul = 1;
                }
            }
            if mul > 1 {
                words::mul_add(&mut out, mul, acc);
            }
        }
    }
    words::normalize(&mut out);
    Ok(out)
}

/// Renders the magnitude in `words` in the specified `radix` without
/// any padding. Zero renders as the empty string.
pub(super) fn render(src: &[u64], radix: u32) -> Result<String> {
    check_radix(radix)?;
    let len = words::bit_len(src);
    if len == 0 {
        return Ok(String::new());
    }

    match pow2_bits(radix) {
        Some(bits) => {
            let count = (len + bits - 1) / bits;
            let mask = words::lsb_mask(bits);
            Ok((0..count)
                .rev()
                .map(|idx| DIGITS[(words::word_at(src, idx * bits) & mask) as usize] as char)
                .collect())
        }
        None => {
            let (base, chunk) = big_base(radix);
            let mut rem = src.to_vec();
            // digits are produced lsb first
            let mut digits: Vec<u8> = Vec::new();
            while !rem.is_empty() {
                let mut part = words::div_rem(&mut rem, base);
                for _ in 0..chunk {
                    digits.push((part % radix as u64) as u8);
                    part /= radix as u64;
                }
            }
            while let Some(&0) = digits.last() {
                digits.pop();
            }
            Ok(digits
                .iter()
                .rev()
                .map(|d| DIGITS[*d as usize] as char)
                .collect())
        }
    }
}
