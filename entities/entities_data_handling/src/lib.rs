//! Entities Layer: Data Handling
//!
//! This crate provides the core data model for BERT, the tagged-extension convention
//! layered on the Erlang External Term Format (ETF).
//!
//! ## Overview
//!
//! The `entities_data_handling` crate is part of the entities layer in the CLEAN architecture.
//! As the innermost layer, it has no dependencies on other crates in the system, making it a
//! foundational building block for all higher layers.
//!
//! Two trees are defined here:
//! - the **generic term tree** ([`Term`]) that an ETF codec reads and writes, and
//! - the **native value tree** ([`Value`]) that applications work with.
//!
//! The conversion between them lives in the use cases layer.
//!
//! ## Modules
//!
//! - **[`term`](term/index.html)**: The generic `Term` enum, the reserved `bert` atom, and the
//!   `TermCodec` trait implemented by byte-level codecs.
//!
//! - **[`value`](value/index.html)**: The native `Value` enum, totally ordered so it can key
//!   maps and populate sets.
//!
//! - **[`numeric`](numeric/index.html)**: Complex numbers, dense n-dimensional arrays and
//!   matrices, all row-major.
//!
//! - **[`tabular`](tabular/index.html)**: Series, dataframes and factors.
//!
//! - **[`pattern`](pattern/index.html)**: Compiled patterns that keep their source and flags.
//!
//! - **[`error`](error/index.html)**: Errors raised while building native containers.
//!
//! ## Usage
//!
//! ```rust
//! use entities_data_handling::{Matrix, Number, Term, Value};
//!
//! let tagged = Term::tagged("nil", []);
//! assert!(tagged.is_bert_tagged());
//!
//! let data = (1..=6).map(Number::Integer).collect();
//! let matrix = Matrix::new(2, 3, data).unwrap();
//! assert_eq!(matrix.get(1, 2), Some(&Number::Integer(6)));
//!
//! let value = Value::from(matrix);
//! assert_eq!(value.kind(), "matrix");
//! ```
//!
//! ## See Also
//!
//! - [`infrastructure_external_format`](../infrastructure_external_format/index.html): ETF codec
//!   implementing `TermCodec`
//! - [`usecases_bert`](../usecases_bert/index.html): Conversion between `Term` and `Value`

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

pub mod term;
pub mod value;
pub mod numeric;
pub mod tabular;
pub mod pattern;
pub mod error;

// Re-export main types for convenience
pub use term::{Term, TermCodec, BERT_ATOM};
pub use value::Value;
pub use numeric::{Complex, Matrix, NdArray, Number};
pub use tabular::{DataFrame, Factor, Series};
pub use pattern::{Pattern, PatternFlags};
pub use error::DataError;

// Native containers re-exported so callers need no direct dependency
pub use chrono::{DateTime, TimeZone, Utc};
pub use malachite::Integer;
