//! BERT Error Module
//!
//! Provides `BertError`, the single error type surfaced by BERT decoding and
//! encoding. Nothing in the conversion layer recovers locally; every failure
//! reaches the caller of `decode`/`encode`/`convert`.

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

use entities_data_handling::DataError;
use thiserror::Error;

/// BERT conversion errors
#[derive(Debug, Error)]
pub enum BertError {
    /// Tagged term whose type atom is not a known BERT type
    #[error("unsupported BERT type: {0}")]
    UnsupportedType(String),
    /// Known tag with a payload of the wrong shape
    #[error("malformed BERT {tag}: {reason}")]
    Malformed { tag: String, reason: String },
    /// Encoding name that is not supported
    #[error("unknown text encoding: {0}")]
    UnknownEncoding(String),
    /// Text that cannot be represented in (or decoded from) an encoding
    #[error("cannot convert text using {encoding}: {reason}")]
    Text { encoding: String, reason: String },
    /// Pattern source that does not compile
    #[error("invalid pattern {source_text:?}: {error}")]
    InvalidPattern {
        source_text: String,
        #[source]
        error: regex::Error,
    },
    /// Timestamp fields outside the representable range
    #[error("invalid timestamp {megaseconds}/{seconds}/{microseconds}")]
    InvalidTimestamp {
        megaseconds: i64,
        seconds: i64,
        microseconds: i64,
    },
    /// Native container rejected its contents
    #[error(transparent)]
    Data(#[from] DataError),
    /// The byte-level term codec failed
    #[error("term codec failed: {0}")]
    Codec(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl BertError {
    /// Malformed payload error for `tag`
    pub fn malformed(tag: &str, reason: impl Into<String>) -> Self {
        BertError::Malformed {
            tag: tag.to_string(),
            reason: reason.into(),
        }
    }

    /// Wrap a codec error, keeping it as the error source
    pub fn codec<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        BertError::Codec(Box::new(error))
    }
}
