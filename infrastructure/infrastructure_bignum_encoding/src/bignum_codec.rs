//! Bignum Codec Module
//!
//! Provides bignum encoding/decoding in the SMALL_BIG_EXT / LARGE_BIG_EXT
//! layouts of the external term format.

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

use crate::common::{
    bytes_to_integer, integer_to_bytes, DecodeError, EncodeError, LARGE_BIG_EXT, SMALL_BIG_EXT,
};

/// Bignum codec
pub struct BignumCodec;

impl BignumCodec {
    /// Encode an Integer, tag byte included
    ///
    /// Magnitudes of up to 255 bytes use SMALL_BIG_EXT, larger ones LARGE_BIG_EXT.
    ///
    /// # Arguments
    /// * `buf` - Buffer to append the encoded bytes to
    /// * `value` - The Integer to encode
    ///
    /// # Returns
    /// * `Ok(bytes_written)` - Number of bytes appended
    /// * `Err(EncodeError)` - The magnitude does not fit LARGE_BIG_EXT
    pub fn encode(buf: &mut Vec<u8>, value: &Integer) -> Result<usize, EncodeError> {
        let start = buf.len();
        let (bytes, is_negative) = integer_to_bytes(value);

        if let Ok(arity) = u8::try_from(bytes.len()) {
            buf.push(SMALL_BIG_EXT);
            buf.push(arity);
        } else {
            let arity =
                u32::try_from(bytes.len()).map_err(|_| EncodeError::ValueTooLarge(bytes.len()))?;
            buf.push(LARGE_BIG_EXT);
            buf.extend_from_slice(&arity.to_be_bytes());
        }
        buf.push(u8::from(is_negative));
        buf.extend_from_slice(&bytes);

        Ok(buf.len() - start)
    }

    /// Decode an Integer starting at the tag byte
    ///
    /// # Arguments
    /// * `data` - Bytes starting with tag 110 or 111
    ///
    /// # Returns
    /// * `Ok((integer, bytes_consumed))` - Decoded value and bytes consumed, tag included
    /// * `Err(DecodeError)` - Decoding error
    pub fn decode(data: &[u8]) -> Result<(Integer, usize), DecodeError> {
        let tag = *data.first().ok_or(DecodeError::BufferTooShort)?;
        let (arity, mut index) = match tag {
            SMALL_BIG_EXT => {
                let arity = *data.get(1).ok_or(DecodeError::BufferTooShort)?;
                (arity as usize, 2)
            }
            LARGE_BIG_EXT => {
                let bytes: [u8; 4] = data
                    .get(1..5)
                    .and_then(|slice| slice.try_into().ok())
                    .ok_or(DecodeError::BufferTooShort)?;
                (u32::from_be_bytes(bytes) as usize, 5)
            }
            other => {
                return Err(DecodeError::InvalidFormat(format!(
                    "Expected big integer tag (110 or 111), got {}",
                    other
                )))
            }
        };

        let is_negative = match data.get(index) {
            Some(0) => false,
            Some(1) => true,
            Some(sign) => {
                return Err(DecodeError::InvalidFormat(format!("invalid sign byte {}", sign)))
            }
            None => return Err(DecodeError::BufferTooShort),
        };
        index += 1;

        let magnitude = data
            .get(index..index + arity)
            .ok_or(DecodeError::BufferTooShort)?;
        index += arity;

        Ok((bytes_to_integer(magnitude, is_negative), index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_small_big() {
        let mut buf = Vec::new();
        let written = BignumCodec::encode(&mut buf, &Integer::from(-0x0102)).unwrap();
        assert_eq!(buf, vec![110, 2, 1, 0x02, 0x01]);
        assert_eq!(written, 5);
    }

    #[test]
    fn test_encode_appends() {
        let mut buf = vec![0xaa];
        BignumCodec::encode(&mut buf, &Integer::from(1)).unwrap();
        assert_eq!(buf, vec![0xaa, 110, 1, 0, 1]);
    }

    #[test]
    fn test_encode_large_big() {
        // 2^(8*256) needs 257 magnitude bytes
        let mut value = Integer::from(1);
        for _ in 0..256 {
            value *= Integer::from(256u32);
        }
        let mut buf = Vec::new();
        BignumCodec::encode(&mut buf, &value).unwrap();
        assert_eq!(buf[0], 111);
        assert_eq!(&buf[1..5], &257u32.to_be_bytes());
        let (decoded, consumed) = BignumCodec::decode(&buf).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(consumed, buf.len());
    }

    #[test]
    fn test_decode_small_big() {
        let data = [110, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0x80];
        let (value, consumed) = BignumCodec::decode(&data).unwrap();
        assert_eq!(value, Integer::from(i64::MAX) + Integer::from(1));
        assert_eq!(consumed, 11);
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(BignumCodec::decode(&[]), Err(DecodeError::BufferTooShort));
        assert_eq!(BignumCodec::decode(&[110, 2, 0, 1]), Err(DecodeError::BufferTooShort));
        assert_eq!(BignumCodec::decode(&[111, 0, 0]), Err(DecodeError::BufferTooShort));
        assert!(matches!(BignumCodec::decode(&[97, 1]), Err(DecodeError::InvalidFormat(_))));
        assert!(matches!(
            BignumCodec::decode(&[110, 1, 7, 1]),
            Err(DecodeError::InvalidFormat(_))
        ));
    }
}
