//! Numeric Module
//!
//! Provides the numeric native types carried by BERT:
//! - `Number`: a single integer or float element
//! - `Complex`: a complex number
//! - `NdArray`: dense n-dimensional array with an explicit shape
//! - `Matrix`: dense 2-D array
//!
//! Arrays and matrices store their elements flat, in row-major order. The
//! shape product always equals the element count.

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

use crate::error::DataError;

/// Total order over floats, used wherever a float must be `Ord`
pub(crate) fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Element of a dense numeric container
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Value as a float (integers are widened)
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(value) => value as f64,
            Number::Float(value) => value,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    // Integers sort before floats; within a kind the natural (total) order applies
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a.cmp(b),
            (Number::Float(a), Number::Float(b)) => cmp_f64(*a, *b),
            (Number::Integer(_), Number::Float(_)) => Ordering::Less,
            (Number::Float(_), Number::Integer(_)) => Ordering::Greater,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// Complex number
#[derive(Debug, Clone, Copy)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Complex {}

impl PartialOrd for Complex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Complex {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_f64(self.re, other.re).then_with(|| cmp_f64(self.im, other.im))
    }
}

/// Dense n-dimensional numeric array
///
/// Elements are stored flat in row-major order; the last dimension varies
/// fastest.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NdArray {
    shape: Vec<usize>,
    data: Vec<Number>,
}

impl NdArray {
    /// Build an array from a shape and row-major data
    ///
    /// # Arguments
    /// * `shape` - Length of each dimension
    /// * `data` - Flat row-major elements
    ///
    /// # Returns
    /// * `Ok(NdArray)` - The array
    /// * `Err(DataError::ShapeMismatch)` - `data.len()` differs from the shape product
    pub fn from_shape(shape: Vec<usize>, data: Vec<Number>) -> Result<Self, DataError> {
        let expected = element_count(&shape)?;
        if expected != data.len() {
            return Err(DataError::ShapeMismatch {
                shape,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// One-dimensional array over `data`
    pub fn from_vec(data: Vec<Number>) -> Self {
        Self {
            shape: vec![data.len()],
            data,
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Flat row-major elements
    pub fn data(&self) -> &[Number] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at a multi-dimensional index, `None` when out of bounds
    pub fn get(&self, index: &[usize]) -> Option<&Number> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut flat = 0usize;
        for (&i, &dim) in index.iter().zip(&self.shape) {
            if i >= dim {
                return None;
            }
            flat = flat * dim + i;
        }
        self.data.get(flat)
    }

    /// Same data under a new shape
    pub fn reshape(self, shape: Vec<usize>) -> Result<Self, DataError> {
        Self::from_shape(shape, self.data)
    }

    pub fn into_data(self) -> Vec<Number> {
        self.data
    }
}

/// Dense 2-D numeric matrix, row-major
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Matrix {
    array: NdArray,
}

impl Matrix {
    /// Build a `rows` x `cols` matrix from row-major data
    pub fn new(rows: usize, cols: usize, data: Vec<Number>) -> Result<Self, DataError> {
        Ok(Self {
            array: NdArray::from_shape(vec![rows, cols], data)?,
        })
    }

    /// Build a matrix from a shape vector that must have exactly 2 entries
    pub fn from_shape(shape: Vec<usize>, data: Vec<Number>) -> Result<Self, DataError> {
        if shape.len() != 2 {
            return Err(DataError::InvalidRank(shape.len()));
        }
        Self::new(shape[0], shape[1], data)
    }

    /// Build a matrix from nested rows; every row must have the same length
    pub fn from_rows(rows: Vec<Vec<Number>>) -> Result<Self, DataError> {
        let cols = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        let mut data = Vec::with_capacity(row_count * cols);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != cols {
                return Err(DataError::RaggedRow {
                    row,
                    expected: cols,
                    actual: cells.len(),
                });
            }
            data.extend(cells);
        }
        Self::new(row_count, cols, data)
    }

    pub fn rows(&self) -> usize {
        self.array.shape()[0]
    }

    pub fn cols(&self) -> usize {
        self.array.shape()[1]
    }

    pub fn shape(&self) -> &[usize] {
        self.array.shape()
    }

    pub fn data(&self) -> &[Number] {
        self.array.data()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Number> {
        self.array.get(&[row, col])
    }

    /// Iterate over rows as slices
    pub fn row_iter(&self) -> impl Iterator<Item = &[Number]> {
        // chunks(0) panics, and a zero-column matrix has no row slices to yield
        let cols = self.cols().max(1);
        self.array.data().chunks(cols)
    }

    pub fn as_array(&self) -> &NdArray {
        &self.array
    }
}

/// Product of a shape, failing on overflow
fn element_count(shape: &[usize]) -> Result<usize, DataError> {
    shape.iter().try_fold(1usize, |acc, &dim| {
        acc.checked_mul(dim)
            .ok_or_else(|| DataError::InvalidDimension(format!("shape {:?} overflows", shape)))
    })
}
