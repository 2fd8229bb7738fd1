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

/// Number of bits in a storage word.
pub(super) const WORD_BITS: usize = 64;

/// Pops the most significant zero words so that equal magnitudes
/// always have equal word vectors.
#[inline(always)]
pub(super) fn normalize(words: &mut Vec<u64>) {
    while let Some(&0) = words.last() {
        words.pop();
    }
}

/// Returns the minimal number of bits needed to represent the
/// magnitude held in `words`. Zero needs zero bits.
pub(super) fn bit_len(words: &[u64]) -> usize {
    match words.iter().rposition(|w| *w != 0) {
        None => 0,
        Some(idx) => idx * WORD_BITS + (WORD_BITS - words[idx].leading_zeros() as usize),
    }
}

/// Returns a word with the `count` lsb bits set. This method will
/// panic in debug builds if `count` exceeds 64
#[inline(always)]
pub(super) fn lsb_mask(count: usize) -> u64 {
    debug_assert!(count <= WORD_BITS, "count {} exceeds {}", count, WORD_BITS);
    if count == WORD_BITS {
        u64::MAX
    } else {
        (1u64 << count) - 1
    }
}

/// Returns the 64 bits of `words` starting at bit `offset`, with bit
/// `offset` in the lsb of the result. Bits past the last stored word
/// read as zero.
///
/// let words = [0xF000_0000_0000_0000, 0b101];
/// assert_eq!(word_at(&words, 60), 0b101_1111);
#[inline(always)]
pub(super) fn word_at(words: &[u64], offset: usize) -> u64 {
    let idx = offset / WORD_BITS;
    let shift = offset % WORD_BITS;
    let lo = words.get(idx).copied().unwrap_or(0) >> shift;
    if shift == 0 {
        return lo;
    }
    // shift-and-mask across the word boundary
    let hi = words.get(idx + 1).copied().unwrap_or(0) << (WORD_BITS - shift);
    lo | hi
}

/// ORs the `count` lsb bits of `val` into `words` starting at bit
/// `offset`, growing `words` as needed. `count` must not exceed 64.
pub(super) fn or_bits_at(words: &mut Vec<u64>, offset: usize, val: u64, count: usize) {
    if count == 0 {
        return;
    }
    let val = val & lsb_mask(count);
    let idx = offset / WORD_BITS;
    let shift = offset % WORD_BITS;
    let last = (offset + count - 1) / WORD_BITS;
    if words.len() <= last {
        words.resize(last + 1, 0);
    }
    words[idx] |= val << shift;
    if last > idx {
        words[last] |= val >> (WORD_BITS - shift);
    }
}

/// Computes `words = words * mul + add` in place.
pub(super) fn mul_add(words: &mut Vec<u64>, mul: u64, add: u64) {
    let mut carry = add as u128;
    for word in words.iter_mut() {
        let val = (*word as u128) * (mul as u128) + carry;
        *word = val as u64;
        carry = val >> WORD_BITS;
    }
    if carry > 0 {
        words.push(carry as u64);
    }
}

/// Computes `words = words / div` in place and returns the
/// remainder. `div` must be non-zero.
pub(super) fn div_rem(words: &mut Vec<u64>, div: u64) -> u64 {
    debug_assert!(div > 0, "division by zero");
    let div = div as u128;
    let mut rem: u128 = 0;
    for word in words.iter_mut().rev() {
        let cur = (rem << WORD_BITS) | (*word as u128);
        *word = (cur / div) as u64;
        rem = cur % div;
    }
    normalize(words);
    rem as u64
}
