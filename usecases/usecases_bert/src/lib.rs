//! Use Cases Layer: BERT Conversion
//!
//! This crate converts between the generic term tree produced by an ETF codec and the native
//! value tree applications work with.
//!
//! ## Overview
//!
//! The `usecases_bert` crate is part of the use cases layer in the CLEAN architecture. It depends
//! only on the entities layer; the byte-level codec is supplied by the caller through the
//! [`TermCodec`](entities_data_handling::TermCodec) trait.
//!
//! BERT marks rich values with tagged tuples `(bert, tag, payload...)`. The decoder unpacks
//! them; the encoder produces them. Values with no tag form (integers, floats, atoms, binaries)
//! pass through unchanged.
//!
//! ## Modules
//!
//! - **[`decoder`](decoder/index.html)**: `TermDecoder`, terms to values
//! - **[`encoder`](encoder/index.html)**: `TermEncoder`, values to terms
//! - **[`config`](config/index.html)**: Text encoding configuration
//! - **[`time`](time/index.html)**: Timestamp split into `(megaseconds, seconds, microseconds)`
//! - **[`flags`](flags/index.html)**: Regex option atoms and pattern flags
//! - **[`error`](error/index.html)**: `BertError`
//!
//! ## Usage
//!
//! ```rust
//! use entities_data_handling::{Term, Value};
//! use usecases_bert::{TermDecoder, TermEncoder};
//!
//! // The codec is only needed for byte-level encode/decode
//! let encoder = TermEncoder::new(());
//! let decoder = TermDecoder::new(());
//!
//! let term = encoder.convert(&Value::Null).unwrap();
//! assert!(term.is_bert_tagged());
//! assert_eq!(decoder.convert(term).unwrap(), Value::Null);
//!
//! assert_eq!(decoder.convert(Term::Integer(7)).unwrap(), Value::Integer(7));
//! ```

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

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod flags;
pub mod time;

pub use config::{BertConfig, TextEncoding, DEFAULT_ENCODING};
pub use decoder::TermDecoder;
pub use encoder::TermEncoder;
pub use error::BertError;
pub use time::{utc_from_parts, utc_to_parts, TimeParts};
