//! Size Calculation Module
//!
//! Provides size calculation for external term format encoding, so encoders
//! can allocate their output buffer once.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * This file is derived from work copyrighted by Ericsson AB 1996-2025.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use entities_data_handling::Term;
use infrastructure_bignum_encoding::integer_to_bytes;

/// Number of bytes needed to encode a term (without version byte)
///
/// # Arguments
/// * `term` - The term to calculate size for
///
/// # Returns
/// Size in bytes of the term body as produced by `encode_body`
pub fn encoded_size(term: &Term) -> usize {
    match term {
        Term::Integer(value) => {
            if (0..=255).contains(value) {
                2
            } else if i32::try_from(*value).is_ok() {
                5
            } else {
                let magnitude = value.unsigned_abs();
                let bytes = (64 - magnitude.leading_zeros() as usize + 7) / 8;
                big_header_size(bytes) + bytes
            }
        }
        Term::BigInteger(value) => {
            let bytes = integer_to_bytes(value).0.len();
            big_header_size(bytes) + bytes
        }
        Term::Float(_) => 9,
        Term::Atom(name) => {
            let len = name.len();
            if len <= 255 {
                2 + len
            } else {
                3 + len
            }
        }
        Term::Binary(data) => 5 + data.len(),
        Term::Tuple(elements) => {
            let header = if elements.len() <= 255 { 2 } else { 5 };
            header + elements.iter().map(encoded_size).sum::<usize>()
        }
        Term::List(elements) if elements.is_empty() => 1,
        // LIST_EXT header + elements + NIL_EXT tail
        Term::List(elements) => 5 + elements.iter().map(encoded_size).sum::<usize>() + 1,
    }
}

/// Tag, arity and sign bytes of a big integer
fn big_header_size(magnitude_bytes: usize) -> usize {
    if magnitude_bytes <= 255 {
        3
    } else {
        6
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::encode_body;
    use entities_data_handling::Integer;

    fn check(term: Term) {
        let mut buf = Vec::new();
        encode_body(&mut buf, &term).unwrap();
        assert_eq!(encoded_size(&term), buf.len(), "size of {:?}", term);
    }

    #[test]
    fn test_sizes_match_encoder() {
        check(Term::Integer(0));
        check(Term::Integer(-1));
        check(Term::Integer(1 << 31));
        check(Term::Integer(i64::MIN));
        check(Term::Integer(i64::MAX));
        check(Term::BigInteger(Integer::from(u64::MAX) * Integer::from(u64::MAX)));
        check(Term::Float(0.1));
        check(Term::atom("bert"));
        check(Term::atom("x".repeat(256)));
        check(Term::Binary(vec![0; 10]));
        check(Term::Tuple(vec![Term::Integer(1); 300]));
        check(Term::List(vec![]));
        check(Term::List(vec![Term::atom("a"), Term::List(vec![])]));
    }
}
