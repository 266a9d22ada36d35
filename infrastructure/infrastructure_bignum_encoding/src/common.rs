//! Common Encoding/Decoding Utilities
//!
//! Provides the shared helpers for moving malachite `Integer` values in and out
//! of the little-endian magnitude bytes used by ETF big integers, plus the
//! error types of this crate.
//!
//! ## Encoding Format
//!
//! - **SMALL_BIG_EXT** (tag 110): 1 byte tag + 1 byte arity + 1 byte sign + n bytes (little-endian)
//! - **LARGE_BIG_EXT** (tag 111): 1 byte tag + 4 bytes arity (big-endian) + 1 byte sign + n bytes (little-endian)

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

use malachite::Integer;
use thiserror::Error;

/// SMALL_BIG_EXT tag
pub const SMALL_BIG_EXT: u8 = 110;
/// LARGE_BIG_EXT tag
pub const LARGE_BIG_EXT: u8 = 111;

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Magnitude needs more than `u32::MAX` bytes
    #[error("big integer too large to encode ({0} bytes)")]
    ValueTooLarge(usize),
}

/// Decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Buffer too short
    #[error("buffer too short for big integer")]
    BufferTooShort,
    /// Invalid format
    #[error("invalid big integer format: {0}")]
    InvalidFormat(String),
}

/// Extract magnitude bytes from an Integer (little-endian)
///
/// # Arguments
/// * `value` - The Integer value
///
/// # Returns
/// * `(bytes, is_negative)` - Magnitude bytes (little-endian, at least one byte) and sign flag
pub fn integer_to_bytes(value: &Integer) -> (Vec<u8>, bool) {
    let zero = Integer::from(0);
    let is_negative = *value < zero;
    let mut v = if is_negative {
        -value.clone()
    } else {
        value.clone()
    };
    let base = Integer::from(256u32);

    let mut bytes = Vec::new();
    if v == zero {
        bytes.push(0);
    }
    while v > zero {
        let remainder = &v % &base;
        // Remainder is always < 256
        bytes.push(u64::try_from(&remainder).unwrap_or(0) as u8);
        v = &v / &base;
    }

    (bytes, is_negative)
}

/// Build an Integer from magnitude bytes (little-endian)
///
/// # Arguments
/// * `bytes` - Magnitude bytes (little-endian)
/// * `is_negative` - Whether the value is negative
pub fn bytes_to_integer(bytes: &[u8], is_negative: bool) -> Integer {
    let mut value = Integer::from(0);
    // Most significant byte first, so each step is a shift by one byte
    for &byte in bytes.iter().rev() {
        value = value * Integer::from(256u32) + Integer::from(byte);
    }

    if is_negative {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_to_bytes_zero() {
        assert_eq!(integer_to_bytes(&Integer::from(0)), (vec![0], false));
    }

    #[test]
    fn test_integer_to_bytes_little_endian() {
        assert_eq!(integer_to_bytes(&Integer::from(0x0102)), (vec![0x02, 0x01], false));
        assert_eq!(integer_to_bytes(&Integer::from(-256)), (vec![0, 1], true));
    }

    #[test]
    fn test_bytes_to_integer() {
        assert_eq!(bytes_to_integer(&[0x02, 0x01], false), Integer::from(0x0102));
        assert_eq!(bytes_to_integer(&[0, 1], true), Integer::from(-256));
        assert_eq!(bytes_to_integer(&[], false), Integer::from(0));
    }

    #[test]
    fn test_bytes_round_trip_large() {
        let value = Integer::from(u64::MAX) * Integer::from(u64::MAX);
        let (bytes, negative) = integer_to_bytes(&value);
        assert_eq!(bytes.len(), 16);
        assert_eq!(bytes_to_integer(&bytes, negative), value);
    }
}
