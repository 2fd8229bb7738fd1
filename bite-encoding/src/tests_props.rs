/*
   Property tests for the gamma and run-length codecs.

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


use crate::prefix::gamma;
use crate::rle;
use bite_bitmap::Bitmap;
use proptest::prelude::*;

/// Strategy: a binary string built from alternating runs, which is
/// the shape run-length coding is meant to shrink.
fn arb_runs() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        proptest::collection::vec(1usize..200, 1..24),
    )
        .prop_map(|(first, runs)| {
            let mut s = String::new();
            let mut bit = first;
            for run in runs {
                let c = if bit { '1' } else { '0' };
                s.extend(std::iter::repeat(c).take(run));
                bit = !bit;
            }
            s
        })
}

fn roundtrip(s: &str) -> (Bitmap, String) {
    let enc = rle::encode(&Bitmap::from_bin_str(s).unwrap()).unwrap();
    let dec = rle::decode(&enc).unwrap();
    (enc, dec.to_string_radix(2).unwrap())
}

// ===== Elias gamma =====

proptest! {
    #[test]
    fn gamma_roundtrip(x in 1u64..=u64::MAX) {
        let enc = gamma::encode(x).unwrap();
        prop_assert_eq!(gamma::decode(&enc), Some(x));
    }

    #[test]
    fn gamma_width_law(x in 1u64..=u64::MAX) {
        let bitlen = 64 - x.leading_zeros() as usize;
        let enc = gamma::encode(x).unwrap();
        prop_assert_eq!(enc.size(), 2 * (bitlen - 1) + 1);
        prop_assert_eq!(enc.size(), gamma::encoded_len(x));
    }

    #[test]
    fn gamma_codeword_shape(x in 1u64..=u64::MAX) {
        let bin = gamma::encode(x).unwrap().to_string_radix(2).unwrap();
        let n = bin.len() / 2;
        prop_assert!(bin[..n].bytes().all(|c| c == b'0'));
        prop_assert_eq!(&bin[n..n + 1], "1");
    }
}

// ===== Run-length coding =====

proptest! {
    #[test]
    fn rle_roundtrip(s in "[01]{0,300}") {
        let (_, dec) = roundtrip(&s);
        prop_assert_eq!(dec, s);
    }

    #[test]
    fn rle_roundtrip_runs(s in arb_runs()) {
        let (enc, dec) = roundtrip(&s);
        prop_assert_eq!(dec, s.clone());
        prop_assert_eq!(rle::is_compressed(&enc), enc.size() <= s.len());
    }

    #[test]
    fn rle_never_grows_by_more_than_one_bit(s in "[01]{0,300}") {
        let (enc, _) = roundtrip(&s);
        prop_assert!(enc.size() <= s.len() + 1);
    }

    #[test]
    fn rle_flag_matches_layout(s in "[01]{1,300}") {
        let (enc, _) = roundtrip(&s);
        let bin = enc.to_string_radix(2).unwrap();
        if rle::is_compressed(&enc) {
            prop_assert!(enc.size() <= s.len());
            prop_assert_eq!(&bin[..1], "1");
            prop_assert_eq!(&bin[1..2], &s[..1]);
        } else {
            prop_assert_eq!(enc.size(), s.len() + 1);
            prop_assert_eq!(&bin[..1], "0");
            prop_assert_eq!(&bin[1..], s.as_str());
        }
    }

    #[test]
    fn rle_decode_arbitrary_bits(s in "[01]{0,300}") {
        // any container either decodes or reports an error
        let b = Bitmap::from_bin_str(&s).unwrap();
        match rle::decode(&b) {
            Ok(dec) => {
                prop_assert!(dec.bit_len() <= dec.size());
                if !rle::is_compressed(&b) {
                    prop_assert_eq!(dec.size(), s.len().saturating_sub(1));
                }
            }
            Err(_) => prop_assert!(rle::is_compressed(&b)),
        }
    }
}
