//! Decoding Module
//!
//! Provides core decoding functions for the external term format.
//!
//! A decode starts at an offset holding the version magic byte (131). The
//! body is either a plain term or a zlib-compressed term (tag 80 followed by
//! the uncompressed size and the zlib stream).

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

use std::io::Read;

use entities_data_handling::Term;
use flate2::read::ZlibDecoder;
use infrastructure_bignum_encoding::{BignumCodec, DecodeError as BignumDecodeError};
use thiserror::Error;

use crate::tags::*;

/// Decoding error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Buffer too short
    #[error("unexpected end of data at byte {0}")]
    BufferTooShort(usize),
    /// Offset past the end of the buffer
    #[error("offset {offset} is past the end of a {len}-byte buffer")]
    OffsetOutOfRange { offset: usize, len: usize },
    /// Invalid version magic byte
    #[error("expected version byte 131, got {0}")]
    InvalidVersion(u8),
    /// Tag this decoder does not understand
    #[error("unsupported term tag {tag} at byte {pos}")]
    UnsupportedTag { tag: u8, pos: usize },
    /// List whose tail is not the empty list
    #[error("improper lists are not supported")]
    ImproperList,
    /// Atom text is not valid UTF-8
    #[error("invalid atom text: {0}")]
    InvalidAtom(String),
    /// FLOAT_EXT text does not parse
    #[error("invalid float text: {0:?}")]
    InvalidFloat(String),
    /// Big integer payload error
    #[error(transparent)]
    Bignum(#[from] BignumDecodeError),
    /// zlib stream error
    #[error("decompression failed: {0}")]
    Decompression(String),
    /// Inflated size differs from the size in the header
    #[error("compressed term declared {expected} bytes, inflated to {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Decode a term from external format
///
/// # Arguments
/// * `data` - The encoded bytes
/// * `offset` - Position of the version magic byte
///
/// # Returns
/// * `Ok((term, end))` - Decoded term and the position just after it
/// * `Err(DecodeError)` - Decoding error
pub fn decode_term(data: &[u8], offset: usize) -> Result<(Term, usize), DecodeError> {
    if offset >= data.len() {
        return Err(DecodeError::OffsetOutOfRange {
            offset,
            len: data.len(),
        });
    }
    if data[offset] != VERSION_MAGIC {
        return Err(DecodeError::InvalidVersion(data[offset]));
    }

    let mut reader = TermReader::new(data, offset + 1);
    if reader.peek() == Some(COMPRESSED) {
        reader.pos += 1;
        let expected = reader.read_u32_be()? as usize;
        let (inflated, consumed) = inflate(&data[reader.pos..], expected)?;
        let (term, _) = decode_body(&inflated, 0)?;
        return Ok((term, reader.pos + consumed));
    }

    let term = reader.read_term()?;
    Ok((term, reader.pos))
}

/// Decode a term body (no version byte) starting at `pos`
///
/// # Returns
/// * `Ok((term, end))` - Decoded term and the position just after it
pub fn decode_body(data: &[u8], pos: usize) -> Result<(Term, usize), DecodeError> {
    let mut reader = TermReader::new(data, pos);
    let term = reader.read_term()?;
    Ok((term, reader.pos))
}

/// Inflate a zlib stream, returning the data and the compressed bytes consumed
fn inflate(compressed: &[u8], expected: usize) -> Result<(Vec<u8>, usize), DecodeError> {
    let mut decoder = ZlibDecoder::new(compressed);
    // Bound the up-front allocation; a lying header must not reserve gigabytes
    let mut inflated = Vec::with_capacity(expected.min(compressed.len().saturating_mul(4)));
    decoder
        .by_ref()
        .take(expected as u64 + 1)
        .read_to_end(&mut inflated)
        .map_err(|e| DecodeError::Decompression(e.to_string()))?;
    if inflated.len() != expected {
        return Err(DecodeError::SizeMismatch {
            expected,
            actual: inflated.len(),
        });
    }
    Ok((inflated, decoder.total_in() as usize))
}

/// Cursor over an encoded buffer
struct TermReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> TermReader<'a> {
    fn new(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or(DecodeError::BufferTooShort(self.data.len()))?;
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.read_bytes(1)?[0])
    }

    fn read_u16_be(&mut self) -> Result<u16, DecodeError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn read_u32_be(&mut self) -> Result<u32, DecodeError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Capacity hint that never exceeds what the remaining bytes could hold
    fn capacity_for(&self, count: usize) -> usize {
        count.min(self.remaining())
    }

    fn read_term(&mut self) -> Result<Term, DecodeError> {
        let tag_pos = self.pos;
        let tag = self.read_u8()?;

        match tag {
            SMALL_INTEGER_EXT => Ok(Term::Integer(self.read_u8()? as i64)),
            INTEGER_EXT => Ok(Term::Integer(self.read_u32_be()? as i32 as i64)),
            NEW_FLOAT_EXT => {
                let bytes = self.read_bytes(8)?;
                let mut raw = [0u8; 8];
                raw.copy_from_slice(bytes);
                Ok(Term::Float(f64::from_be_bytes(raw)))
            }
            FLOAT_EXT => {
                let bytes = self.read_bytes(FLOAT_EXT_LEN)?;
                let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
                let text = String::from_utf8_lossy(&bytes[..end]);
                text.trim()
                    .parse::<f64>()
                    .map(Term::Float)
                    .map_err(|_| DecodeError::InvalidFloat(text.into_owned()))
            }
            ATOM_EXT => {
                let len = self.read_u16_be()? as usize;
                Ok(Term::Atom(latin1_to_string(self.read_bytes(len)?)))
            }
            SMALL_ATOM_EXT => {
                let len = self.read_u8()? as usize;
                Ok(Term::Atom(latin1_to_string(self.read_bytes(len)?)))
            }
            ATOM_UTF8_EXT => {
                let len = self.read_u16_be()? as usize;
                self.read_utf8_atom(len)
            }
            SMALL_ATOM_UTF8_EXT => {
                let len = self.read_u8()? as usize;
                self.read_utf8_atom(len)
            }
            SMALL_TUPLE_EXT => {
                let arity = self.read_u8()? as usize;
                self.read_elements(arity).map(Term::Tuple)
            }
            LARGE_TUPLE_EXT => {
                let arity = self.read_u32_be()? as usize;
                self.read_elements(arity).map(Term::Tuple)
            }
            NIL_EXT => Ok(Term::List(Vec::new())),
            STRING_EXT => {
                let len = self.read_u16_be()? as usize;
                let bytes = self.read_bytes(len)?;
                Ok(Term::List(
                    bytes.iter().map(|&b| Term::Integer(b as i64)).collect(),
                ))
            }
            LIST_EXT => {
                let len = self.read_u32_be()? as usize;
                let elements = self.read_elements(len)?;
                match self.read_term()? {
                    Term::List(tail) if tail.is_empty() => Ok(Term::List(elements)),
                    _ => Err(DecodeError::ImproperList),
                }
            }
            BINARY_EXT => {
                let len = self.read_u32_be()? as usize;
                Ok(Term::Binary(self.read_bytes(len)?.to_vec()))
            }
            SMALL_BIG_EXT | LARGE_BIG_EXT => {
                let (value, consumed) = BignumCodec::decode(&self.data[tag_pos..])?;
                self.pos = tag_pos + consumed;
                Ok(Term::from(value))
            }
            other => Err(DecodeError::UnsupportedTag {
                tag: other,
                pos: tag_pos,
            }),
        }
    }

    fn read_elements(&mut self, count: usize) -> Result<Vec<Term>, DecodeError> {
        let mut elements = Vec::with_capacity(self.capacity_for(count));
        for _ in 0..count {
            elements.push(self.read_term()?);
        }
        Ok(elements)
    }

    fn read_utf8_atom(&mut self, len: usize) -> Result<Term, DecodeError> {
        let bytes = self.read_bytes(len)?;
        std::str::from_utf8(bytes)
            .map(|name| Term::Atom(name.to_string()))
            .map_err(|e| DecodeError::InvalidAtom(e.to_string()))
    }
}

/// Latin-1 bytes map one-to-one onto the first 256 code points
fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
