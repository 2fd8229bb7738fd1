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

use crate::{EncodingError, Result};
use bite_bitmap::Bitmap;
use core::ops::Range;

/// State of the codeword scanner after reading one bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    /// `n` zero bits of a unary prefix have been read.
    ZeroRun(usize),
    /// A whole codeword occupying the bits `[start, end)` was read.
    Codeword { start: usize, end: usize },
}

impl State {
    /// Reads the bit at `pos`, the bit just below the previous
    /// position, and returns the next state.
    ///
    /// A `1` bit after `N` zeros is the top bit of the codeword body,
    /// so the codeword spans `[pos - N, pos + N + 1)`. Returns
    /// [`EncodingError::Truncated`] if the body would extend below bit
    /// `0`.
    pub(crate) fn advance(self, pos: usize, bit: u8) -> Result<State> {
        let zeros = match self {
            State::ZeroRun(n) => n,
            State::Codeword { .. } => 0,
        };
        if bit == 0 {
            return Ok(State::ZeroRun(zeros + 1));
        }
        if zeros > pos {
            return Err(EncodingError::Truncated { position: pos });
        }
        Ok(State::Codeword {
            start: pos - zeros,
            end: pos + zeros + 1,
        })
    }

    /// Returns the position to read after this state was entered at
    /// `pos`, or `None` once bit `0` has been consumed.
    pub(crate) fn next_pos(&self, pos: usize) -> Option<usize> {
        match self {
            State::ZeroRun(_) => pos.checked_sub(1),
            State::Codeword { start, .. } => start.checked_sub(1),
        }
    }
}

/// An iterator over the spans of the gamma codewords stored in the
/// bits below `top` of a bitmap, most significant codeword first.
///
/// Yields a single [`EncodingError::Truncated`] and stops if the bits
/// do not split into whole codewords.
pub(crate) struct Codewords<'a> {
    bitmap: &'a Bitmap,
    pos: Option<usize>,
    state: State,
    done: bool,
}

impl<'a> Codewords<'a> {
    pub(crate) fn new(bitmap: &'a Bitmap, top: usize) -> Codewords<'a> {
        Codewords {
            bitmap,
            pos: top.checked_sub(1),
            state: State::ZeroRun(0),
            done: false,
        }
    }
}

impl<'a> Iterator for Codewords<'a> {
    type Item = Result<Range<usize>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        while let Some(pos) = self.pos {
            let state = match self.state.advance(pos, self.bitmap.bit(pos)) {
                Ok(state) => state,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            self.pos = state.next_pos(pos);
            match state {
                State::ZeroRun(_) => self.state = state,
                State::Codeword { start, end } => {
                    self.state = State::ZeroRun(0);
                    return Some(Ok(start..end));
                }
            }
        }

        self.done = true;
        match self.state {
            // ran out of bits inside a unary prefix
            State::ZeroRun(n) if n > 0 => Some(Err(EncodingError::Truncated { position: 0 })),
            _ => None,
        }
    }
}
