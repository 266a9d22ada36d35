//! Term Encoder Module
//!
//! Provides `TermEncoder`, which turns a native value tree into a generic
//! term tree the byte-level codec can serialize.
//!
//! Values are classified in a fixed order and the first match wins: booleans
//! and null, text, maps, timestamps, lists, tuples, patterns, complex
//! numbers, sets, series, dataframes, factors, matrices, arrays. Anything
//! else passes through as the equivalent plain term.
//!
//! Pure-ASCII text is sent as a plain binary and decodes back as
//! `Value::Binary`, not `Value::Text`.

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

use entities_data_handling::{
    DataFrame, Factor, Integer, NdArray, Number, Pattern, Term, TermCodec, Value,
};
use tracing::{debug, trace};

use crate::config::BertConfig;
use crate::error::BertError;
use crate::flags::flags_to_options;
use crate::time::utc_to_parts;

/// Converts native values into generic terms
#[derive(Debug, Clone, Default)]
pub struct TermEncoder<C> {
    config: BertConfig,
    codec: C,
}

impl<C> TermEncoder<C> {
    /// Encoder with the default configuration (UTF-8)
    pub fn new(codec: C) -> Self {
        Self::with_config(codec, BertConfig::default())
    }

    pub fn with_config(codec: C, config: BertConfig) -> Self {
        Self { config, codec }
    }

    pub fn config(&self) -> &BertConfig {
        &self.config
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Convert a native value tree into a generic term tree
    ///
    /// # Arguments
    /// * `value` - Value to convert
    ///
    /// # Returns
    /// * `Ok(Term)` - Term ready for the byte-level codec
    /// * `Err(BertError::Text)` - Text not representable in the configured encoding
    pub fn convert(&self, value: &Value) -> Result<Term, BertError> {
        let term = match value {
            Value::Bool(true) => marker("true"),
            Value::Bool(false) => marker("false"),
            Value::Null => marker("nil"),
            Value::Text(text) if text.is_ascii() => Term::Binary(text.as_bytes().to_vec()),
            Value::Text(text) => {
                let encoding = self.config.encoding;
                Term::tagged(
                    "string",
                    [Term::atom(encoding.name()), Term::Binary(encoding.encode(text)?)],
                )
            }
            Value::Map(map) => {
                let pairs = map
                    .iter()
                    .map(|(key, value)| Ok(Term::Tuple(vec![self.convert(key)?, self.convert(value)?])))
                    .collect::<Result<Vec<Term>, BertError>>()?;
                Term::tagged("dict", [Term::List(pairs)])
            }
            Value::Time(time) => {
                let parts = utc_to_parts(time);
                Term::tagged(
                    "time",
                    [
                        Term::Integer(parts.megaseconds),
                        Term::Integer(parts.seconds),
                        Term::Integer(parts.microseconds),
                    ],
                )
            }
            Value::List(items) => Term::List(self.convert_all(items)?),
            Value::Tuple(items) => Term::Tuple(self.convert_all(items)?),
            Value::Pattern(pattern) => pattern_term(pattern),
            Value::Complex(complex) => Term::tagged(
                "complex",
                [Term::Float(complex.re), Term::Float(complex.im)],
            ),
            Value::Set(set) => Term::tagged("set", [Term::List(self.convert_all(set)?)]),
            Value::Series(series) => {
                Term::tagged("series", [Term::List(self.convert_all(series.values())?)])
            }
            Value::DataFrame(frame) => self.dataframe_term(frame)?,
            Value::Factor(factor) => self.factor_term(factor)?,
            Value::Matrix(matrix) => array_term("matrix", matrix.as_array()),
            Value::Array(array) => array_term("array", array),
            Value::Integer(value) => Term::Integer(*value),
            Value::BigInteger(value) => Term::from(value.clone()),
            Value::Float(value) => Term::Float(*value),
            Value::Atom(name) => Term::Atom(name.clone()),
            Value::Binary(data) => Term::Binary(data.clone()),
        };
        trace!(kind = value.kind(), "converted value");
        Ok(term)
    }

    fn convert_all<'v>(
        &self,
        values: impl IntoIterator<Item = &'v Value>,
    ) -> Result<Vec<Term>, BertError> {
        values.into_iter().map(|value| self.convert(value)).collect()
    }

    fn dataframe_term(&self, frame: &DataFrame) -> Result<Term, BertError> {
        let columns = self.convert_all(frame.columns())?;
        let rows = frame
            .rows()
            .iter()
            .map(|row| Ok(Term::List(self.convert_all(row)?)))
            .collect::<Result<Vec<Term>, BertError>>()?;
        Ok(Term::tagged("dataframe", [Term::List(columns), Term::List(rows)]))
    }

    fn factor_term(&self, factor: &Factor) -> Result<Term, BertError> {
        let values = factor
            .values()
            .map(|value| match value {
                Some(value) => self.convert(value),
                None => Ok(marker("nil")),
            })
            .collect::<Result<Vec<Term>, BertError>>()?;
        let categories = self.convert_all(factor.categories())?;
        Ok(Term::tagged("factor", [Term::List(values), Term::List(categories)]))
    }
}

impl<C: TermCodec> TermEncoder<C> {
    /// Encode a native value into bytes
    ///
    /// # Arguments
    /// * `value` - Value to encode
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - Encoded bytes
    /// * `Err(BertError::Codec)` - The codec could not serialize the term
    /// * `Err(BertError)` - Conversion failed (see [`TermEncoder::convert`])
    pub fn encode(&self, value: &Value) -> Result<Vec<u8>, BertError> {
        let term = self.convert(value)?;
        let bytes = self.codec.encode(&term).map_err(BertError::codec)?;
        debug!(kind = value.kind(), len = bytes.len(), "encoded BERT value");
        Ok(bytes)
    }
}

/// Tagged term with no payload, such as `(bert, nil)`
fn marker(tag: &str) -> Term {
    Term::tagged(tag, Vec::<Term>::new())
}

fn pattern_term(pattern: &Pattern) -> Term {
    Term::tagged(
        "regex",
        [
            Term::Binary(pattern.source().as_bytes().to_vec()),
            Term::Tuple(flags_to_options(pattern.flags())),
        ],
    )
}

/// `(bert, tag, shape, data)` with the shape as a tuple and data flat in row-major order
fn array_term(tag: &str, array: &NdArray) -> Term {
    let shape = array
        .shape()
        .iter()
        .map(|&dim| Term::from(Integer::from(dim)))
        .collect();
    let data = array.data().iter().map(number_term).collect();
    Term::tagged(tag, [Term::Tuple(shape), Term::List(data)])
}

fn number_term(number: &Number) -> Term {
    match *number {
        Number::Integer(value) => Term::Integer(value),
        Number::Float(value) => Term::Float(value),
    }
}
