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

/// Creates a [`Bitmap`](crate::Bitmap) from a list of bits written
/// in display order, i.e. the first bit listed is the most
/// significant one. Every non-zero element is a `1` bit.
///
/// # Examples
/// ```
/// use bite::bits;
///
/// let b = bits![0, 1, 1, 0];
/// assert_eq!(b.size(), 4);
/// assert_eq!(b.to_string_radix(2).unwrap(), "0110");
///
/// let b = bits![1; 3];
/// assert_eq!(b.to_string_radix(2).unwrap(), "111");
///
/// let b = bits![];
/// assert_eq!(b.size(), 0);
/// ```
#[macro_export]
macro_rules! bits {
    () => {
        $crate::Bitmap::new(0)
    };
    ($bit:expr; $n:expr) => {
        $crate::Bitmap::from_msb0(&::std::vec![($bit) != 0; $n])
    };
    ($($bit:expr),+ $(,)?) => {
        $crate::Bitmap::from_msb0(&[$(($bit) != 0),+])
    };
}

/// Checks that `v` is a valid bit value and evaluates to it as a
/// `bool`.
macro_rules! check_bit {
    ($v: expr) => {
        match $v {
            0 => false,
            1 => true,
            _ => return Err(crate::bitmap::BitmapError::InvalidBit($v)),
        }
    };
}
