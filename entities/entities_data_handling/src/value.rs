//! Native Value Module
//!
//! Provides `Value`, the typed native value tree produced by decoding BERT
//! terms and consumed by encoding them.
//!
//! `Value` is totally ordered so it can be used as a mapping key and as a set
//! element. Values of different kinds order by kind (in declaration order);
//! floats order by `f64::total_cmp`, so `NaN` equals itself and `-0.0` sorts
//! before `0.0`.

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

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use malachite::Integer;

use crate::numeric::{cmp_f64, Complex, Matrix, NdArray};
use crate::pattern::Pattern;
use crate::tabular::{DataFrame, Factor, Series};

/// Native value tree
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    BigInteger(Integer),
    Float(f64),
    /// Opaque symbolic constant
    Atom(String),
    /// Opaque byte data (including pure-ASCII text sent untagged)
    Binary(Vec<u8>),
    Text(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Map(BTreeMap<Value, Value>),
    Set(BTreeSet<Value>),
    Time(DateTime<Utc>),
    Pattern(Pattern),
    Complex(Complex),
    Series(Series),
    DataFrame(DataFrame),
    Factor(Factor),
    Matrix(Matrix),
    Array(NdArray),
}

impl Value {
    /// Position of the variant, used to order values of different kinds
    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Integer(_) => 2,
            Value::BigInteger(_) => 3,
            Value::Float(_) => 4,
            Value::Atom(_) => 5,
            Value::Binary(_) => 6,
            Value::Text(_) => 7,
            Value::List(_) => 8,
            Value::Tuple(_) => 9,
            Value::Map(_) => 10,
            Value::Set(_) => 11,
            Value::Time(_) => 12,
            Value::Pattern(_) => 13,
            Value::Complex(_) => 14,
            Value::Series(_) => 15,
            Value::DataFrame(_) => 16,
            Value::Factor(_) => 17,
            Value::Matrix(_) => 18,
            Value::Array(_) => 19,
        }
    }

    /// Short name of the value kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::BigInteger(_) => "big integer",
            Value::Float(_) => "float",
            Value::Atom(_) => "atom",
            Value::Binary(_) => "binary",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Map(_) => "map",
            Value::Set(_) => "set",
            Value::Time(_) => "time",
            Value::Pattern(_) => "pattern",
            Value::Complex(_) => "complex",
            Value::Series(_) => "series",
            Value::DataFrame(_) => "dataframe",
            Value::Factor(_) => "factor",
            Value::Matrix(_) => "matrix",
            Value::Array(_) => "array",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::BigInteger(a), Value::BigInteger(b)) => a.cmp(b),
            // Both integer kinds hold the same number line
            (Value::Integer(a), Value::BigInteger(b)) => Integer::from(*a).cmp(b),
            (Value::BigInteger(a), Value::Integer(b)) => a.cmp(&Integer::from(*b)),
            (Value::Float(a), Value::Float(b)) => cmp_f64(*a, *b),
            (Value::Atom(a), Value::Atom(b)) => a.cmp(b),
            (Value::Binary(a), Value::Binary(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::List(a), Value::List(b)) => a.cmp(b),
            (Value::Tuple(a), Value::Tuple(b)) => a.cmp(b),
            (Value::Map(a), Value::Map(b)) => a.cmp(b),
            (Value::Set(a), Value::Set(b)) => a.cmp(b),
            (Value::Time(a), Value::Time(b)) => a.cmp(b),
            (Value::Pattern(a), Value::Pattern(b)) => a.cmp(b),
            (Value::Complex(a), Value::Complex(b)) => a.cmp(b),
            (Value::Series(a), Value::Series(b)) => a.cmp(b),
            (Value::DataFrame(a), Value::DataFrame(b)) => a.cmp(b),
            (Value::Factor(a), Value::Factor(b)) => a.cmp(b),
            (Value::Matrix(a), Value::Matrix(b)) => a.cmp(b),
            (Value::Array(a), Value::Array(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<Integer> for Value {
    /// Big integers that fit in 64 bits become `Value::Integer`
    fn from(value: Integer) -> Self {
        match i64::try_from(&value) {
            Ok(small) => Value::Integer(small),
            Err(_) => Value::BigInteger(value),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Time(value)
    }
}

impl From<Pattern> for Value {
    fn from(value: Pattern) -> Self {
        Value::Pattern(value)
    }
}

impl From<Complex> for Value {
    fn from(value: Complex) -> Self {
        Value::Complex(value)
    }
}

impl From<Series> for Value {
    fn from(value: Series) -> Self {
        Value::Series(value)
    }
}

impl From<DataFrame> for Value {
    fn from(value: DataFrame) -> Self {
        Value::DataFrame(value)
    }
}

impl From<Factor> for Value {
    fn from(value: Factor) -> Self {
        Value::Factor(value)
    }
}

impl From<Matrix> for Value {
    fn from(value: Matrix) -> Self {
        Value::Matrix(value)
    }
}

impl From<NdArray> for Value {
    fn from(value: NdArray) -> Self {
        Value::Array(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
