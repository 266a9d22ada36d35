//! Generic Term Module
//!
//! Provides the generic term tree exchanged with an External Term Format codec,
//! and the `TermCodec` trait describing that codec.
//!
//! The generic term vocabulary is deliberately small: atoms, tuples, lists,
//! binaries and numbers. Everything richer is layered on top as BERT-tagged
//! tuples (see [`BERT_ATOM`]).

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

/// The reserved atom that marks a tuple or list as BERT-tagged
pub const BERT_ATOM: &str = "bert";

/// Generic term tree
///
/// This is the untyped intermediate representation shared between an ETF
/// codec and the BERT conversion layer. The empty list is `List(vec![])`.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// Atom, compared by name
    Atom(String),
    /// Integer that fits in 64 bits
    Integer(i64),
    /// Integer that does not fit in 64 bits
    BigInteger(Integer),
    /// IEEE 754 double
    Float(f64),
    /// Binary (byte sequence)
    Binary(Vec<u8>),
    /// Fixed-arity tuple
    Tuple(Vec<Term>),
    /// Proper list
    List(Vec<Term>),
}

impl Term {
    /// Create an atom term
    pub fn atom(name: impl Into<String>) -> Self {
        Term::Atom(name.into())
    }

    /// Create a `(bert, tag, payload...)` tuple
    ///
    /// # Arguments
    /// * `tag` - Name of the semantic type
    /// * `payload` - Tag-specific payload elements
    pub fn tagged(tag: &str, payload: impl IntoIterator<Item = Term>) -> Self {
        let mut elements = vec![Term::atom(BERT_ATOM), Term::atom(tag)];
        elements.extend(payload);
        Term::Tuple(elements)
    }

    /// Name of the atom, if this term is one
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Term::Atom(name) => Some(name),
            _ => None,
        }
    }

    /// Check whether this term is the atom `name`
    pub fn is_atom(&self, name: &str) -> bool {
        self.as_atom() == Some(name)
    }

    /// Elements of a tuple or list
    pub fn elements(&self) -> Option<&[Term]> {
        match self {
            Term::Tuple(elements) | Term::List(elements) => Some(elements),
            _ => None,
        }
    }

    /// Check whether this is a tuple or list headed by the atom `bert`
    ///
    /// The head element is the sole discriminator; arity is never consulted.
    pub fn is_bert_tagged(&self) -> bool {
        self.elements()
            .and_then(|elements| elements.first())
            .map_or(false, |head| head.is_atom(BERT_ATOM))
    }

    /// Short name of the term kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Term::Atom(_) => "atom",
            Term::Integer(_) => "integer",
            Term::BigInteger(_) => "big integer",
            Term::Float(_) => "float",
            Term::Binary(_) => "binary",
            Term::Tuple(_) => "tuple",
            Term::List(_) => "list",
        }
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::Integer(value)
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        Term::Float(value)
    }
}

impl From<Integer> for Term {
    /// Big integers that fit in 64 bits become `Term::Integer`
    fn from(value: Integer) -> Self {
        match i64::try_from(&value) {
            Ok(small) => Term::Integer(small),
            Err(_) => Term::BigInteger(value),
        }
    }
}

/// Byte-level codec for generic terms
///
/// Implemented by the infrastructure layer (the ETF codec). The BERT layer
/// only ever talks to this trait and never inspects raw bytes itself.
pub trait TermCodec {
    /// Error reported by the codec
    type Error: std::error::Error + Send + Sync + 'static;

    /// Decode one term starting at `offset`
    fn decode(&self, bytes: &[u8], offset: usize) -> Result<Term, Self::Error>;

    /// Encode one term
    fn encode(&self, term: &Term) -> Result<Vec<u8>, Self::Error>;
}

impl<C: TermCodec + ?Sized> TermCodec for &C {
    type Error = C::Error;

    fn decode(&self, bytes: &[u8], offset: usize) -> Result<Term, Self::Error> {
        (**self).decode(bytes, offset)
    }

    fn encode(&self, term: &Term) -> Result<Vec<u8>, Self::Error> {
        (**self).encode(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_builds_bert_tuple() {
        let term = Term::tagged("complex", [Term::Float(3.0), Term::Float(4.0)]);
        match &term {
            Term::Tuple(elements) => {
                assert_eq!(elements.len(), 4);
                assert!(elements[0].is_atom("bert"));
                assert!(elements[1].is_atom("complex"));
            }
            _ => panic!("Expected Tuple"),
        }
        assert!(term.is_bert_tagged());
    }

    #[test]
    fn test_is_bert_tagged_list() {
        let term = Term::List(vec![Term::atom("bert"), Term::atom("nil")]);
        assert!(term.is_bert_tagged());
    }

    #[test]
    fn test_is_bert_tagged_ignores_arity() {
        // A lone `bert` head is still tagged; the tag check happens later
        assert!(Term::Tuple(vec![Term::atom("bert")]).is_bert_tagged());
        assert!(!Term::Tuple(vec![]).is_bert_tagged());
        assert!(!Term::Tuple(vec![Term::atom("other"), Term::atom("nil")]).is_bert_tagged());
        assert!(!Term::Tuple(vec![Term::Binary(b"bert".to_vec())]).is_bert_tagged());
    }

    #[test]
    fn test_from_big_integer_normalizes() {
        assert_eq!(Term::from(Integer::from(42)), Term::Integer(42));
        let big = Integer::from(i64::MAX) + Integer::from(1);
        assert!(matches!(Term::from(big), Term::BigInteger(_)));
    }

    #[test]
    fn test_kind() {
        assert_eq!(Term::atom("a").kind(), "atom");
        assert_eq!(Term::List(vec![]).kind(), "list");
        assert_eq!(Term::Binary(vec![]).kind(), "binary");
    }
}
