//! Infrastructure Layer: External Term Format
//!
//! Provides external term format (ETF) encoding/decoding infrastructure. This crate
//! turns generic `Term` trees into bytes and back, and is the byte-level collaborator
//! of the BERT conversion layer.
//!
//! ## Overview
//!
//! The `infrastructure_external_format` crate is part of the infrastructure layer in the
//! CLEAN architecture. The BERT use cases never inspect raw bytes; they talk to the
//! `TermCodec` trait from the entities layer, which [`EtfCodec`] implements.
//!
//! ## Modules
//!
//! - **[`encoding`](encoding/index.html)**: Term encoding (`encode_term`, `encode_body`)
//!
//! - **[`decoding`](decoding/index.html)**: Term decoding (`decode_term`, `decode_body`),
//!   including zlib-compressed terms
//!
//! - **[`size_calculation`](size_calculation/index.html)**: Exact encoded size of a term
//!
//! - **[`codec`](codec/index.html)**: `EtfCodec`, the `TermCodec` implementation
//!
//! - **[`tags`](tags/index.html)**: Tag byte constants
//!
//! ## See Also
//!
//! - [`infrastructure_bignum_encoding`](../infrastructure_bignum_encoding/index.html): Big integer layouts
//! - [`entities_data_handling`](../entities_data_handling/index.html): `Term` and `TermCodec`

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

pub mod tags;
pub mod encoding;
pub mod decoding;
pub mod size_calculation;
pub mod codec;

pub use encoding::{encode_body, encode_term, EncodeError};
pub use decoding::{decode_body, decode_term, DecodeError};
pub use size_calculation::encoded_size;
pub use codec::{CodecError, EtfCodec};
pub use tags::VERSION_MAGIC;
