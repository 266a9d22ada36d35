//! Encoding Module
//!
//! Provides core encoding functions for the external term format.
//!
//! Tag selection:
//! - integers 0..=255 as SMALL_INTEGER_EXT, other 32-bit values as INTEGER_EXT,
//!   anything wider as a big integer
//! - floats as NEW_FLOAT_EXT
//! - atoms as SMALL_ATOM_UTF8_EXT, or ATOM_UTF8_EXT above 255 bytes
//! - the empty list as NIL_EXT, other lists as LIST_EXT with a NIL_EXT tail

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

use entities_data_handling::{Integer, Term};
use infrastructure_bignum_encoding::{BignumCodec, EncodeError as BignumEncodeError};
use thiserror::Error;

use crate::size_calculation::encoded_size;
use crate::tags::*;

/// Encoding error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Atom name longer than 65535 bytes
    #[error("atom is {0} bytes long, the limit is 65535")]
    AtomTooLong(usize),
    /// Binary, tuple or list with more than `u32::MAX` entries
    #[error("{what} of length {len} exceeds the 32-bit length field")]
    TooLarge { what: &'static str, len: usize },
    /// Big integer payload error
    #[error(transparent)]
    Bignum(#[from] BignumEncodeError),
    /// zlib stream error
    #[error("compression failed: {0}")]
    Compression(String),
}

/// Encode a term to external format, version byte included
///
/// # Arguments
/// * `term` - The term to encode
///
/// # Returns
/// * `Ok(Vec<u8>)` - Encoded bytes in ETF format
/// * `Err(EncodeError)` - Encoding error
pub fn encode_term(term: &Term) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::with_capacity(1 + encoded_size(term));
    buf.push(VERSION_MAGIC);
    encode_body(&mut buf, term)?;
    Ok(buf)
}

/// Append the encoding of `term` (no version byte) to `buf`
///
/// # Returns
/// * `Ok(bytes_written)` - Number of bytes appended
pub fn encode_body(buf: &mut Vec<u8>, term: &Term) -> Result<usize, EncodeError> {
    let start = buf.len();
    match term {
        Term::Integer(value) => encode_integer(buf, *value)?,
        Term::BigInteger(value) => {
            BignumCodec::encode(buf, value)?;
        }
        Term::Float(value) => {
            buf.push(NEW_FLOAT_EXT);
            buf.extend_from_slice(&value.to_be_bytes());
        }
        Term::Atom(name) => encode_atom(buf, name)?,
        Term::Binary(data) => {
            buf.push(BINARY_EXT);
            buf.extend_from_slice(&length_u32("binary", data.len())?.to_be_bytes());
            buf.extend_from_slice(data);
        }
        Term::Tuple(elements) => {
            if let Ok(arity) = u8::try_from(elements.len()) {
                buf.push(SMALL_TUPLE_EXT);
                buf.push(arity);
            } else {
                buf.push(LARGE_TUPLE_EXT);
                buf.extend_from_slice(&length_u32("tuple", elements.len())?.to_be_bytes());
            }
            for element in elements {
                encode_body(buf, element)?;
            }
        }
        Term::List(elements) if elements.is_empty() => buf.push(NIL_EXT),
        Term::List(elements) => {
            buf.push(LIST_EXT);
            buf.extend_from_slice(&length_u32("list", elements.len())?.to_be_bytes());
            for element in elements {
                encode_body(buf, element)?;
            }
            buf.push(NIL_EXT);
        }
    }
    Ok(buf.len() - start)
}

fn encode_integer(buf: &mut Vec<u8>, value: i64) -> Result<(), EncodeError> {
    if let Ok(small) = u8::try_from(value) {
        buf.push(SMALL_INTEGER_EXT);
        buf.push(small);
    } else if let Ok(int) = i32::try_from(value) {
        buf.push(INTEGER_EXT);
        buf.extend_from_slice(&int.to_be_bytes());
    } else {
        BignumCodec::encode(buf, &Integer::from(value))?;
    }
    Ok(())
}

fn encode_atom(buf: &mut Vec<u8>, name: &str) -> Result<(), EncodeError> {
    let bytes = name.as_bytes();
    if let Ok(len) = u8::try_from(bytes.len()) {
        buf.push(SMALL_ATOM_UTF8_EXT);
        buf.push(len);
    } else if let Ok(len) = u16::try_from(bytes.len()) {
        buf.push(ATOM_UTF8_EXT);
        buf.extend_from_slice(&len.to_be_bytes());
    } else {
        return Err(EncodeError::AtomTooLong(bytes.len()));
    }
    buf.extend_from_slice(bytes);
    Ok(())
}

fn length_u32(what: &'static str, len: usize) -> Result<u32, EncodeError> {
    u32::try_from(len).map_err(|_| EncodeError::TooLarge { what, len })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty_list() {
        assert_eq!(encode_term(&Term::List(vec![])).unwrap(), vec![131, 106]);
    }

    #[test]
    fn test_encode_small_integer() {
        assert_eq!(encode_term(&Term::Integer(42)).unwrap(), vec![131, 97, 42]);
        assert_eq!(encode_term(&Term::Integer(255)).unwrap(), vec![131, 97, 255]);
    }

    #[test]
    fn test_encode_integer() {
        assert_eq!(
            encode_term(&Term::Integer(256)).unwrap(),
            vec![131, 98, 0, 0, 1, 0]
        );
        assert_eq!(
            encode_term(&Term::Integer(-1)).unwrap(),
            vec![131, 98, 0xff, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn test_encode_wide_integer_as_bignum() {
        let encoded = encode_term(&Term::Integer(1 << 40)).unwrap();
        assert_eq!(encoded, vec![131, 110, 6, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_encode_i64_min() {
        let encoded = encode_term(&Term::Integer(i64::MIN)).unwrap();
        assert_eq!(encoded, vec![131, 110, 8, 1, 0, 0, 0, 0, 0, 0, 0, 0x80]);
    }

    #[test]
    fn test_encode_float() {
        let encoded = encode_term(&Term::Float(1.5)).unwrap();
        assert_eq!(encoded[1], 70);
        assert_eq!(&encoded[2..], &1.5f64.to_be_bytes());
    }

    #[test]
    fn test_encode_atom() {
        assert_eq!(
            encode_term(&Term::atom("bert")).unwrap(),
            vec![131, 119, 4, b'b', b'e', b'r', b't']
        );
    }

    #[test]
    fn test_encode_long_atom() {
        let name = "a".repeat(300);
        let encoded = encode_term(&Term::atom(name)).unwrap();
        assert_eq!(&encoded[..4], &[131, 118, 1, 44]);
        assert_eq!(encoded.len(), 4 + 300);
    }

    #[test]
    fn test_encode_atom_too_long() {
        let name = "a".repeat(70_000);
        assert_eq!(
            encode_term(&Term::atom(name)),
            Err(EncodeError::AtomTooLong(70_000))
        );
    }

    #[test]
    fn test_encode_binary() {
        assert_eq!(
            encode_term(&Term::Binary(vec![1, 2, 3])).unwrap(),
            vec![131, 109, 0, 0, 0, 3, 1, 2, 3]
        );
    }

    #[test]
    fn test_encode_tuple() {
        let term = Term::Tuple(vec![Term::Integer(1), Term::Integer(2)]);
        assert_eq!(encode_term(&term).unwrap(), vec![131, 104, 2, 97, 1, 97, 2]);
    }

    #[test]
    fn test_encode_large_tuple() {
        let term = Term::Tuple(vec![Term::Integer(0); 256]);
        let encoded = encode_term(&term).unwrap();
        assert_eq!(&encoded[..6], &[131, 105, 0, 0, 1, 0]);
    }

    #[test]
    fn test_encode_list() {
        let term = Term::List(vec![Term::Integer(1)]);
        assert_eq!(
            encode_term(&term).unwrap(),
            vec![131, 108, 0, 0, 0, 1, 97, 1, 106]
        );
    }

    #[test]
    fn test_encode_body_reports_length() {
        let mut buf = Vec::new();
        let written = encode_body(&mut buf, &Term::atom("ok")).unwrap();
        assert_eq!(written, 4);
        assert_eq!(buf, vec![119, 2, b'o', b'k']);
    }
}
