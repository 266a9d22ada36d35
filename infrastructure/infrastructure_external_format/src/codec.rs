//! ETF Codec Module
//!
//! Provides `EtfCodec`, the external term format implementation of the
//! `TermCodec` trait, with optional zlib compression of encoded output.

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

use std::io::Write;

use entities_data_handling::{Term, TermCodec};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use thiserror::Error;
use tracing::{debug, trace};

use crate::decoding::{decode_term, DecodeError};
use crate::encoding::{encode_term, EncodeError};
use crate::tags::{COMPRESSED, VERSION_MAGIC};

/// Error reported by `EtfCodec`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("ETF decode failed: {0}")]
    Decode(#[from] DecodeError),
    #[error("ETF encode failed: {0}")]
    Encode(#[from] EncodeError),
}

/// External term format codec
#[derive(Debug, Clone, Copy, Default)]
pub struct EtfCodec {
    compression: Option<u32>,
}

impl EtfCodec {
    /// Codec producing uncompressed terms
    pub fn new() -> Self {
        Self::default()
    }

    /// Codec that zlib-compresses encoded terms at `level` (0-9)
    ///
    /// The compressed form is only emitted when it is smaller than the plain
    /// encoding.
    pub fn with_compression(level: u32) -> Self {
        Self {
            compression: Some(level.min(9)),
        }
    }

    pub fn compression(&self) -> Option<u32> {
        self.compression
    }

    /// Decode one term at `offset`, returning the term and the position after it
    pub fn decode_at(&self, bytes: &[u8], offset: usize) -> Result<(Term, usize), CodecError> {
        let (term, end) = decode_term(bytes, offset)?;
        trace!(offset, end, kind = term.kind(), "decoded ETF term");
        Ok((term, end))
    }

    fn compress(&self, level: u32, plain: Vec<u8>) -> Result<Vec<u8>, CodecError> {
        let body = &plain[1..];
        let Ok(body_len) = u32::try_from(body.len()) else {
            return Ok(plain);
        };

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(level));
        encoder
            .write_all(body)
            .map_err(|e| EncodeError::Compression(e.to_string()))?;
        let deflated = encoder
            .finish()
            .map_err(|e| EncodeError::Compression(e.to_string()))?;

        let mut compressed = Vec::with_capacity(6 + deflated.len());
        compressed.push(VERSION_MAGIC);
        compressed.push(COMPRESSED);
        compressed.extend_from_slice(&body_len.to_be_bytes());
        compressed.extend_from_slice(&deflated);

        if compressed.len() < plain.len() {
            debug!(
                plain = plain.len(),
                compressed = compressed.len(),
                "using compressed ETF encoding"
            );
            Ok(compressed)
        } else {
            Ok(plain)
        }
    }
}

impl TermCodec for EtfCodec {
    type Error = CodecError;

    fn decode(&self, bytes: &[u8], offset: usize) -> Result<Term, CodecError> {
        self.decode_at(bytes, offset).map(|(term, _)| term)
    }

    fn encode(&self, term: &Term) -> Result<Vec<u8>, CodecError> {
        let plain = encode_term(term)?;
        trace!(len = plain.len(), kind = term.kind(), "encoded ETF term");
        match self.compression {
            Some(level) => self.compress(level, plain),
            None => Ok(plain),
        }
    }
}
