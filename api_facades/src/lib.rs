//! API Facades Layer
//!
//! Provides the outward entry points for BERT: decoding ETF bytes into native values and
//! encoding native values into ETF bytes.
//!
//! All facades call underlying Rust modules from inner layers. The use cases layer does the
//! BERT conversion; the infrastructure layer reads and writes the bytes.
//!
//! ## Usage
//!
//! ```rust
//! use api_facades::{decode, encode, Value};
//!
//! let bytes = encode(&Value::from("h\u{e9}llo")).unwrap();
//! assert_eq!(decode(&bytes).unwrap(), Value::from("h\u{e9}llo"));
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

pub mod bert_facades;

// Re-export main facade types
pub use bert_facades::*;
pub use entities_data_handling::Value;
pub use usecases_bert::{BertConfig, BertError, TextEncoding};
