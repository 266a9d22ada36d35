//! Term Decoder Module
//!
//! Provides `TermDecoder`, which turns a generic term tree into a native
//! value tree, unpacking BERT-tagged tuples along the way.
//!
//! A tuple or list whose first element is the atom `bert` is tagged; its
//! second element names the type and the remaining elements are positional
//! payload. Every other tuple and list is converted element by element, and
//! every other term passes through unchanged.

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

use std::collections::{BTreeMap, BTreeSet};

use entities_data_handling::{
    Complex, DataError, DataFrame, Factor, Matrix, NdArray, Number, Pattern, Series, Term,
    TermCodec, Value, BERT_ATOM,
};
use tracing::{debug, trace, warn};

use crate::config::{BertConfig, TextEncoding};
use crate::error::BertError;
use crate::flags::options_to_flags;
use crate::time::{utc_from_parts, TimeParts};

/// Converts generic terms into native values
#[derive(Debug, Clone, Default)]
pub struct TermDecoder<C> {
    config: BertConfig,
    codec: C,
}

impl<C> TermDecoder<C> {
    /// Decoder with the default configuration (UTF-8)
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

    /// Convert a generic term tree into a native value tree
    ///
    /// # Arguments
    /// * `term` - Term produced by the byte-level codec
    ///
    /// # Returns
    /// * `Ok(Value)` - Converted value
    /// * `Err(BertError::UnsupportedType)` - A tagged term names an unknown type
    /// * `Err(BertError)` - A tagged payload is malformed
    pub fn convert(&self, term: Term) -> Result<Value, BertError> {
        match term {
            Term::Tuple(elements) if is_tagged(&elements) => self.convert_bert(elements),
            Term::List(elements) if is_tagged(&elements) => self.convert_bert(elements),
            Term::Tuple(elements) => Ok(Value::Tuple(self.convert_all(elements)?)),
            Term::List(elements) => Ok(Value::List(self.convert_all(elements)?)),
            Term::Atom(name) => Ok(Value::Atom(name)),
            Term::Integer(value) => Ok(Value::Integer(value)),
            Term::BigInteger(value) => Ok(Value::BigInteger(value)),
            Term::Float(value) => Ok(Value::Float(value)),
            Term::Binary(data) => Ok(Value::Binary(data)),
        }
    }

    fn convert_all(&self, terms: Vec<Term>) -> Result<Vec<Value>, BertError> {
        terms.into_iter().map(|term| self.convert(term)).collect()
    }

    fn convert_bert(&self, elements: Vec<Term>) -> Result<Value, BertError> {
        let mut fields = elements.into_iter();
        fields.next();
        let tag = match fields.next() {
            Some(Term::Atom(name)) => name,
            Some(other) => return Err(BertError::UnsupportedType(format!("{:?}", other))),
            None => return Err(BertError::malformed(BERT_ATOM, "missing type tag")),
        };
        trace!(tag = %tag, "converting BERT term");

        let mut payload = Payload {
            tag: &tag,
            fields,
        };
        match tag.as_str() {
            "nil" => Ok(Value::Null),
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "string" => self.convert_string(&mut payload),
            "dict" => self.convert_dict(&mut payload),
            "time" => {
                let parts = TimeParts {
                    megaseconds: payload.integer("megaseconds")?,
                    seconds: payload.integer("seconds")?,
                    microseconds: payload.integer("microseconds")?,
                };
                Ok(Value::Time(utc_from_parts(parts)?))
            }
            "regex" => self.convert_regex(&mut payload),
            "complex" => {
                let re = payload.float("real part")?;
                let im = payload.float("imaginary part")?;
                Ok(Value::Complex(Complex::new(re, im)))
            }
            "vector" => Ok(Value::Tuple(self.convert_all(payload.sequence("elements")?)?)),
            "set" => {
                let elements = payload.sequence("elements")?;
                let set = elements
                    .into_iter()
                    .map(|term| self.convert(term))
                    .collect::<Result<BTreeSet<Value>, BertError>>()?;
                Ok(Value::Set(set))
            }
            "series" => Ok(Value::Series(Series::new(
                self.convert_all(payload.sequence("values")?)?,
            ))),
            "dataframe" => self.convert_dataframe(&mut payload),
            "factor" => {
                let values = self.convert_all(payload.sequence("values")?)?;
                let categories = self.convert_all(payload.sequence("categories")?)?;
                Ok(Value::Factor(Factor::new(values, categories)?))
            }
            "matrix" => {
                let shape = payload.shape()?;
                let data = numbers(payload.sequence("data")?)?;
                Ok(Value::Matrix(Matrix::from_shape(shape, data)?))
            }
            "array" => {
                let shape = payload.shape()?;
                let data = numbers(payload.sequence("data")?)?;
                Ok(Value::Array(NdArray::from_shape(shape, data)?))
            }
            _ => Err(BertError::UnsupportedType(tag.clone())),
        }
    }

    fn convert_string(&self, payload: &mut Payload<'_>) -> Result<Value, BertError> {
        let name = match payload.next("encoding")? {
            Term::Atom(name) => name,
            Term::Binary(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            other => return Err(payload.malformed(format!("encoding must be an atom, got {}", other.kind()))),
        };
        let encoding = TextEncoding::from_name(&name).unwrap_or_else(|| {
            warn!(
                encoding = %name,
                fallback = %self.config.encoding,
                "unknown string encoding, using configured encoding"
            );
            self.config.encoding
        });
        match payload.next("text")? {
            Term::Binary(bytes) => Ok(Value::Text(encoding.decode(&bytes)?)),
            other => Err(payload.malformed(format!("text must be a binary, got {}", other.kind()))),
        }
    }

    fn convert_dict(&self, payload: &mut Payload<'_>) -> Result<Value, BertError> {
        let mut map = BTreeMap::new();
        for entry in payload.sequence("pairs")? {
            let (key, value) = match entry {
                Term::Tuple(pair) | Term::List(pair) if pair.len() == 2 => {
                    let mut pair = pair.into_iter();
                    match (pair.next(), pair.next()) {
                        (Some(key), Some(value)) => (key, value),
                        _ => return Err(payload.malformed("dict entry lost its elements")),
                    }
                }
                other => {
                    return Err(payload.malformed(format!(
                        "dict entries must be 2-tuples, got {}",
                        other.kind()
                    )))
                }
            };
            // Later duplicates win, as with any mapping built pair by pair
            map.insert(self.convert(key)?, self.convert(value)?);
        }
        Ok(Value::Map(map))
    }

    fn convert_regex(&self, payload: &mut Payload<'_>) -> Result<Value, BertError> {
        let source = match payload.next("pattern source")? {
            Term::Binary(bytes) => String::from_utf8(bytes)
                .map_err(|e| payload.malformed(format!("pattern source is not UTF-8: {}", e)))?,
            Term::List(chars) if !is_tagged(&chars) => charlist_to_string(&chars)
                .ok_or_else(|| payload.malformed("pattern source is not a character list"))?,
            tagged @ (Term::Tuple(_) | Term::List(_)) => match self.convert(tagged)? {
                Value::Text(text) => text,
                other => {
                    return Err(payload.malformed(format!(
                        "pattern source must be text, got {}",
                        other.kind()
                    )))
                }
            },
            other => {
                return Err(payload.malformed(format!(
                    "pattern source must be text, got {}",
                    other.kind()
                )))
            }
        };
        let options = payload.sequence("options")?;
        let flags = options_to_flags(&options);
        let pattern = Pattern::new(source.as_str(), flags).map_err(|error| {
            BertError::InvalidPattern {
                source_text: source.clone(),
                error,
            }
        })?;
        Ok(Value::Pattern(pattern))
    }

    fn convert_dataframe(&self, payload: &mut Payload<'_>) -> Result<Value, BertError> {
        let columns = self.convert_all(payload.sequence("columns")?)?;
        let mut data = Vec::new();
        for term in payload.sequence("rows")? {
            data.push(match array_row_cells(term) {
                Ok(cells) => Value::List(self.convert_all(cells)?),
                Err(term) => self.convert(term)?,
            });
        }

        let frame = if !data.is_empty() && data.iter().all(is_row) {
            let rows = data.into_iter().map(row_cells).collect();
            DataFrame::new(columns, rows)?
        } else {
            DataFrame::from_flat(columns, data)?
        };
        Ok(Value::DataFrame(frame))
    }
}

impl<C: TermCodec> TermDecoder<C> {
    /// Decode bytes into a native value
    ///
    /// # Arguments
    /// * `bytes` - Encoded data
    /// * `offset` - Position of the encoded term within `bytes`
    ///
    /// # Returns
    /// * `Ok(Value)` - Decoded value
    /// * `Err(BertError::Codec)` - The codec rejected the bytes
    /// * `Err(BertError)` - Conversion failed (see [`TermDecoder::convert`])
    pub fn decode(&self, bytes: &[u8], offset: usize) -> Result<Value, BertError> {
        debug!(len = bytes.len(), offset, "decoding BERT value");
        let term = self.codec.decode(bytes, offset).map_err(BertError::codec)?;
        self.convert(term)
    }
}

/// Remaining payload fields of a tagged term, read in order
struct Payload<'t> {
    tag: &'t str,
    fields: std::vec::IntoIter<Term>,
}

impl Payload<'_> {
    fn malformed(&self, reason: impl Into<String>) -> BertError {
        BertError::malformed(self.tag, reason)
    }

    fn next(&mut self, what: &str) -> Result<Term, BertError> {
        match self.fields.next() {
            Some(term) => Ok(term),
            None => Err(self.malformed(format!("missing {}", what))),
        }
    }

    /// Elements of a list (or tuple) field
    fn sequence(&mut self, what: &str) -> Result<Vec<Term>, BertError> {
        match self.next(what)? {
            Term::List(elements) | Term::Tuple(elements) => Ok(elements),
            other => Err(self.malformed(format!("{} must be a list, got {}", what, other.kind()))),
        }
    }

    fn integer(&mut self, what: &str) -> Result<i64, BertError> {
        match self.next(what)? {
            Term::Integer(value) => Ok(value),
            Term::Float(value) if value.fract() == 0.0 && value.abs() < 9.0e15 => Ok(value as i64),
            other => Err(self.malformed(format!("{} must be an integer, got {}", what, other.kind()))),
        }
    }

    fn float(&mut self, what: &str) -> Result<f64, BertError> {
        match self.next(what)? {
            Term::Float(value) => Ok(value),
            Term::Integer(value) => Ok(value as f64),
            other => Err(self.malformed(format!("{} must be a number, got {}", what, other.kind()))),
        }
    }

    fn shape(&mut self) -> Result<Vec<usize>, BertError> {
        self.sequence("shape")?
            .into_iter()
            .map(|dim| match dim {
                Term::Integer(value) => usize::try_from(value)
                    .map_err(|_| BertError::from(DataError::InvalidDimension(value.to_string()))),
                Term::Float(value) if value.fract() == 0.0 && value >= 0.0 && value < 9.0e15 => {
                    Ok(value as usize)
                }
                other => Err(BertError::from(DataError::InvalidDimension(format!(
                    "{:?}",
                    other
                )))),
            })
            .collect()
    }
}

fn is_tagged(elements: &[Term]) -> bool {
    elements.first().map_or(false, |head| head.is_atom(BERT_ATOM))
}

/// Flatten row-major numeric data; nested rows are flattened in order
fn numbers(terms: Vec<Term>) -> Result<Vec<Number>, BertError> {
    let mut out = Vec::with_capacity(terms.len());
    flatten_numbers(terms, &mut out)?;
    Ok(out)
}

fn flatten_numbers(terms: Vec<Term>, out: &mut Vec<Number>) -> Result<(), BertError> {
    for term in terms {
        match term {
            Term::Integer(value) => out.push(Number::Integer(value)),
            Term::Float(value) => out.push(Number::Float(value)),
            Term::List(row) | Term::Tuple(row) if !is_tagged(&row) => flatten_numbers(row, out)?,
            other => return Err(DataError::NonNumeric(format!("{:?}", other)).into()),
        }
    }
    Ok(())
}

/// Whether a converted dataframe element is a whole row
fn is_row(value: &Value) -> bool {
    matches!(value, Value::List(_) | Value::Tuple(_) | Value::Series(_))
}

/// Cells of a value accepted by `is_row`
fn row_cells(value: Value) -> Vec<Value> {
    match value {
        Value::List(cells) | Value::Tuple(cells) => cells,
        Value::Series(series) => series.into_values(),
        other => vec![other],
    }
}

/// Cells of a dataframe row sent as `(bert, array, {n}, [cell...])`
///
/// Row cells may be of any type, so they are not read as numbers. Terms of any
/// other shape are handed back unchanged.
fn array_row_cells(term: Term) -> Result<Vec<Term>, Term> {
    match term {
        Term::Tuple(elements) | Term::List(elements) if is_array_row(&elements) => {
            match elements.into_iter().nth(3) {
                Some(Term::List(cells) | Term::Tuple(cells)) => Ok(cells),
                _ => Ok(Vec::new()),
            }
        }
        other => Err(other),
    }
}

fn is_array_row(elements: &[Term]) -> bool {
    match elements {
        [head, tag, shape, data] if head.is_atom(BERT_ATOM) && tag.is_atom("array") => {
            match (shape.elements(), data.elements()) {
                (Some([Term::Integer(len)]), Some(cells)) => {
                    !is_tagged(cells) && usize::try_from(*len).ok() == Some(cells.len())
                }
                _ => false,
            }
        }
        _ => false,
    }
}

/// Erlang string (list of code points) to text
fn charlist_to_string(chars: &[Term]) -> Option<String> {
    chars
        .iter()
        .map(|term| match term {
            Term::Integer(code) => u32::try_from(*code).ok().and_then(char::from_u32),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_data_handling::PatternFlags;

    fn decoder() -> TermDecoder<()> {
        TermDecoder::new(())
    }

    fn tagged(tag: &str, payload: Vec<Term>) -> Term {
        Term::tagged(tag, payload)
    }

    #[test]
    fn test_passthrough() {
        let d = decoder();
        assert_eq!(d.convert(Term::atom("ok")).unwrap(), Value::Atom("ok".into()));
        assert_eq!(d.convert(Term::Integer(5)).unwrap(), Value::Integer(5));
        assert_eq!(d.convert(Term::Float(0.5)).unwrap(), Value::Float(0.5));
        assert_eq!(
            d.convert(Term::Binary(b"abc".to_vec())).unwrap(),
            Value::Binary(b"abc".to_vec())
        );
    }

    #[test]
    fn test_plain_containers_recurse() {
        let term = Term::Tuple(vec![
            Term::Integer(1),
            Term::List(vec![tagged("true", vec![]), tagged("nil", vec![])]),
        ]);
        assert_eq!(
            decoder().convert(term).unwrap(),
            Value::Tuple(vec![
                Value::Integer(1),
                Value::List(vec![Value::Bool(true), Value::Null]),
            ])
        );
    }

    #[test]
    fn test_simple_tags() {
        let d = decoder();
        assert_eq!(d.convert(tagged("nil", vec![])).unwrap(), Value::Null);
        assert_eq!(d.convert(tagged("true", vec![])).unwrap(), Value::Bool(true));
        assert_eq!(d.convert(tagged("false", vec![])).unwrap(), Value::Bool(false));
    }

    #[test]
    fn test_tagged_list() {
        let term = Term::List(vec![Term::atom("bert"), Term::atom("true")]);
        assert_eq!(decoder().convert(term).unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_string() {
        let term = tagged(
            "string",
            vec![Term::atom("UTF-8"), Term::Binary("caf\u{e9}".as_bytes().to_vec())],
        );
        assert_eq!(decoder().convert(term).unwrap(), Value::Text("caf\u{e9}".into()));
    }

    #[test]
    fn test_string_latin1_payload() {
        let term = tagged("string", vec![Term::atom("ISO-8859-1"), Term::Binary(vec![0xe9])]);
        assert_eq!(decoder().convert(term).unwrap(), Value::Text("\u{e9}".into()));
    }

    #[test]
    fn test_string_unknown_encoding_falls_back() {
        let d = TermDecoder::with_config((), BertConfig::new(TextEncoding::Latin1));
        let term = tagged("string", vec![Term::atom("EBCDIC"), Term::Binary(vec![0xe9])]);
        assert_eq!(d.convert(term).unwrap(), Value::Text("\u{e9}".into()));
    }

    #[test]
    fn test_string_utf16_payload() {
        let term = tagged(
            "string",
            vec![Term::atom("UTF-16-LE"), Term::Binary(vec![0x68, 0, 0x69, 0])],
        );
        assert_eq!(decoder().convert(term).unwrap(), Value::Text("hi".into()));
    }

    #[test]
    fn test_string_named_encoding_wins_over_config() {
        let d = TermDecoder::with_config((), BertConfig::new(TextEncoding::Latin1));
        let term = tagged("string", vec![Term::atom("CP1252"), Term::Binary(vec![0x80])]);
        assert_eq!(d.convert(term).unwrap(), Value::Text("\u{20ac}".into()));
    }

    #[test]
    fn test_string_malformed_utf16_is_error() {
        let term = tagged("string", vec![Term::atom("UTF-16LE"), Term::Binary(vec![0x68])]);
        assert!(matches!(decoder().convert(term), Err(BertError::Text { .. })));
    }

    #[test]
    fn test_string_invalid_bytes() {
        let term = tagged("string", vec![Term::atom("UTF-8"), Term::Binary(vec![0xff])]);
        assert!(matches!(decoder().convert(term), Err(BertError::Text { .. })));
    }

    #[test]
    fn test_dict() {
        let term = tagged(
            "dict",
            vec![Term::List(vec![
                Term::Tuple(vec![Term::atom("a"), Term::Integer(1)]),
                Term::Tuple(vec![Term::atom("b"), tagged("nil", vec![])]),
            ])],
        );
        let mut expected = BTreeMap::new();
        expected.insert(Value::Atom("a".into()), Value::Integer(1));
        expected.insert(Value::Atom("b".into()), Value::Null);
        assert_eq!(decoder().convert(term).unwrap(), Value::Map(expected));
    }

    #[test]
    fn test_dict_bad_entry() {
        let term = tagged("dict", vec![Term::List(vec![Term::Integer(1)])]);
        assert!(matches!(
            decoder().convert(term),
            Err(BertError::Malformed { tag, .. }) if tag == "dict"
        ));
    }

    #[test]
    fn test_time() {
        let term = tagged(
            "time",
            vec![Term::Integer(1609), Term::Integer(459_200), Term::Integer(123_456)],
        );
        match decoder().convert(term).unwrap() {
            Value::Time(time) => {
                assert_eq!(time.timestamp(), 1_609_459_200);
                assert_eq!(time.timestamp_subsec_micros(), 123_456);
            }
            other => panic!("Expected Time, got {:?}", other),
        }
    }

    #[test]
    fn test_time_missing_field() {
        let term = tagged("time", vec![Term::Integer(1), Term::Integer(2)]);
        assert!(matches!(
            decoder().convert(term),
            Err(BertError::Malformed { reason, .. }) if reason.contains("microseconds")
        ));
    }

    #[test]
    fn test_regex() {
        let term = tagged(
            "regex",
            vec![
                Term::Binary(b"ab+c".to_vec()),
                Term::List(vec![Term::atom("caseless"), Term::atom("multiline")]),
            ],
        );
        match decoder().convert(term).unwrap() {
            Value::Pattern(pattern) => {
                assert_eq!(pattern.source(), "ab+c");
                assert_eq!(pattern.flags(), PatternFlags::CASELESS | PatternFlags::MULTILINE);
                assert!(pattern.is_match("xABBC"));
            }
            other => panic!("Expected Pattern, got {:?}", other),
        }
    }

    #[test]
    fn test_regex_charlist_source() {
        let source = "a.c".chars().map(|c| Term::Integer(c as i64)).collect();
        let term = tagged("regex", vec![Term::List(source), Term::Tuple(vec![])]);
        match decoder().convert(term).unwrap() {
            Value::Pattern(pattern) => assert_eq!(pattern.source(), "a.c"),
            other => panic!("Expected Pattern, got {:?}", other),
        }
    }

    #[test]
    fn test_regex_invalid_source() {
        let term = tagged("regex", vec![Term::Binary(b"(".to_vec()), Term::List(vec![])]);
        assert!(matches!(
            decoder().convert(term),
            Err(BertError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_complex_accepts_integers() {
        let term = tagged("complex", vec![Term::Integer(3), Term::Float(4.0)]);
        assert_eq!(
            decoder().convert(term).unwrap(),
            Value::Complex(Complex::new(3.0, 4.0))
        );
    }

    #[test]
    fn test_vector_and_series() {
        let d = decoder();
        let items = Term::List(vec![Term::Integer(1), tagged("true", vec![])]);
        assert_eq!(
            d.convert(tagged("vector", vec![items.clone()])).unwrap(),
            Value::Tuple(vec![Value::Integer(1), Value::Bool(true)])
        );
        assert_eq!(
            d.convert(tagged("series", vec![items])).unwrap(),
            Value::Series(Series::new(vec![Value::Integer(1), Value::Bool(true)]))
        );
    }

    #[test]
    fn test_set_collapses_duplicates() {
        let term = tagged(
            "set",
            vec![Term::List(vec![Term::Integer(2), Term::Integer(1), Term::Integer(2)])],
        );
        match decoder().convert(term).unwrap() {
            Value::Set(set) => {
                assert_eq!(set.len(), 2);
                assert!(set.contains(&Value::Integer(1)));
            }
            other => panic!("Expected Set, got {:?}", other),
        }
    }

    #[test]
    fn test_dataframe_rows() {
        let term = tagged(
            "dataframe",
            vec![
                Term::List(vec![Term::Binary(b"x".to_vec()), Term::Binary(b"y".to_vec())]),
                Term::List(vec![
                    Term::List(vec![Term::Integer(1), Term::Integer(2)]),
                    Term::List(vec![Term::Integer(3), Term::Integer(4)]),
                ]),
            ],
        );
        match decoder().convert(term).unwrap() {
            Value::DataFrame(frame) => {
                assert_eq!(frame.shape(), (2, 2));
                assert_eq!(frame.rows()[1][0], Value::Integer(3));
            }
            other => panic!("Expected DataFrame, got {:?}", other),
        }
    }

    #[test]
    fn test_dataframe_flat_cells() {
        let term = tagged(
            "dataframe",
            vec![
                Term::List(vec![Term::atom("x"), Term::atom("y")]),
                Term::List((1..=4).map(Term::Integer).collect()),
            ],
        );
        match decoder().convert(term).unwrap() {
            Value::DataFrame(frame) => {
                assert_eq!(frame.shape(), (2, 2));
                assert_eq!(frame.rows()[0], vec![Value::Integer(1), Value::Integer(2)]);
            }
            other => panic!("Expected DataFrame, got {:?}", other),
        }
    }

    #[test]
    fn test_dataframe_array_rows() {
        // Rows sent as 1-D arrays, one per row
        let row = |a: i64, b: i64| {
            tagged(
                "array",
                vec![Term::Tuple(vec![Term::Integer(2)]), Term::List(vec![Term::Integer(a), Term::Integer(b)])],
            )
        };
        let term = tagged(
            "dataframe",
            vec![Term::List(vec![Term::atom("x"), Term::atom("y")]), Term::List(vec![row(1, 2), row(3, 4)])],
        );
        match decoder().convert(term).unwrap() {
            Value::DataFrame(frame) => assert_eq!(frame.rows()[1][1], Value::Integer(4)),
            other => panic!("Expected DataFrame, got {:?}", other),
        }
    }

    #[test]
    fn test_dataframe_array_rows_with_mixed_cells() {
        let row = |id: i64, label: Term| {
            tagged(
                "array",
                vec![Term::Tuple(vec![Term::Integer(2)]), Term::List(vec![Term::Integer(id), label])],
            )
        };
        let term = tagged(
            "dataframe",
            vec![
                Term::List(vec![Term::Binary(b"id".to_vec()), Term::Binary(b"label".to_vec())]),
                Term::List(vec![
                    row(1, Term::Binary(b"a".to_vec())),
                    row(2, tagged("nil", vec![])),
                ]),
            ],
        );
        match decoder().convert(term).unwrap() {
            Value::DataFrame(frame) => {
                assert_eq!(frame.shape(), (2, 2));
                assert_eq!(
                    frame.rows()[0],
                    vec![Value::Integer(1), Value::Binary(b"a".to_vec())]
                );
                assert_eq!(frame.rows()[1], vec![Value::Integer(2), Value::Null]);
            }
            other => panic!("Expected DataFrame, got {:?}", other),
        }
    }

    #[test]
    fn test_dataframe_array_row_with_wrong_length_is_error() {
        let bad_row = tagged(
            "array",
            vec![Term::Tuple(vec![Term::Integer(3)]), Term::List(vec![Term::Integer(1)])],
        );
        let term = tagged(
            "dataframe",
            vec![Term::List(vec![Term::atom("x")]), Term::List(vec![bad_row])],
        );
        assert!(matches!(
            decoder().convert(term),
            Err(BertError::Data(DataError::ShapeMismatch { .. }))
        ));
    }

    #[test]
    fn test_dataframe_ragged_rows() {
        let term = tagged(
            "dataframe",
            vec![
                Term::List(vec![Term::atom("x"), Term::atom("y")]),
                Term::List(vec![Term::List(vec![Term::Integer(1)])]),
            ],
        );
        assert!(matches!(
            decoder().convert(term),
            Err(BertError::Data(DataError::RaggedRow { .. }))
        ));
    }

    #[test]
    fn test_factor() {
        let term = tagged(
            "factor",
            vec![
                Term::List(vec![Term::atom("lo"), Term::atom("hi"), Term::atom("lo")]),
                Term::List(vec![Term::atom("lo"), Term::atom("hi")]),
            ],
        );
        match decoder().convert(term).unwrap() {
            Value::Factor(factor) => assert_eq!(factor.codes(), &[Some(0), Some(1), Some(0)]),
            other => panic!("Expected Factor, got {:?}", other),
        }
    }

    #[test]
    fn test_factor_nil_category_is_error() {
        let term = tagged(
            "factor",
            vec![
                Term::List(vec![tagged("nil", vec![]), Term::atom("lo")]),
                Term::List(vec![Term::atom("lo"), tagged("nil", vec![])]),
            ],
        );
        assert!(matches!(
            decoder().convert(term),
            Err(BertError::Data(DataError::NullCategory(1)))
        ));
    }

    #[test]
    fn test_matrix_nested_data() {
        let term = tagged(
            "matrix",
            vec![
                Term::Tuple(vec![Term::Integer(2), Term::Integer(2)]),
                Term::List(vec![
                    Term::List(vec![Term::Integer(1), Term::Float(2.5)]),
                    Term::List(vec![Term::Integer(3), Term::Integer(4)]),
                ]),
            ],
        );
        match decoder().convert(term).unwrap() {
            Value::Matrix(matrix) => assert_eq!(matrix.get(0, 1), Some(&Number::Float(2.5))),
            other => panic!("Expected Matrix, got {:?}", other),
        }
    }

    #[test]
    fn test_matrix_wrong_rank() {
        let term = tagged(
            "matrix",
            vec![Term::List(vec![Term::Integer(4)]), Term::List((1..=4).map(Term::Integer).collect())],
        );
        assert!(matches!(
            decoder().convert(term),
            Err(BertError::Data(DataError::InvalidRank(1)))
        ));
    }

    #[test]
    fn test_array_negative_dimension() {
        let term = tagged("array", vec![Term::List(vec![Term::Integer(-1)]), Term::List(vec![])]);
        assert!(matches!(
            decoder().convert(term),
            Err(BertError::Data(DataError::InvalidDimension(_)))
        ));
    }

    #[test]
    fn test_array_non_numeric() {
        let term = tagged(
            "array",
            vec![Term::List(vec![Term::Integer(1)]), Term::List(vec![Term::atom("x")])],
        );
        assert!(matches!(
            decoder().convert(term),
            Err(BertError::Data(DataError::NonNumeric(_)))
        ));
    }

    #[test]
    fn test_unknown_tag() {
        let term = tagged("totally_unknown_tag", vec![Term::Integer(1)]);
        match decoder().convert(term) {
            Err(BertError::UnsupportedType(tag)) => assert_eq!(tag, "totally_unknown_tag"),
            other => panic!("Expected UnsupportedType, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_tag_nested() {
        let term = Term::List(vec![Term::Integer(1), tagged("mystery", vec![])]);
        assert!(matches!(
            decoder().convert(term),
            Err(BertError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_missing_tag() {
        let term = Term::Tuple(vec![Term::atom("bert")]);
        assert!(matches!(
            decoder().convert(term),
            Err(BertError::Malformed { .. })
        ));
    }

    #[test]
    fn test_non_atom_tag() {
        let term = Term::Tuple(vec![Term::atom("bert"), Term::Integer(1)]);
        assert!(matches!(
            decoder().convert(term),
            Err(BertError::UnsupportedType(_))
        ));
    }
}
