//! Data Error Module
//!
//! Errors raised while constructing native containers (arrays, matrices,
//! dataframes, factors) from flat or nested data.

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

use thiserror::Error;

/// Native container construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// Flat data length does not equal the product of the shape
    #[error("shape {shape:?} needs {expected} elements, got {actual}")]
    ShapeMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },
    /// A matrix was given a shape whose rank is not 2
    #[error("matrix shape must have 2 dimensions, got {0}")]
    InvalidRank(usize),
    /// A shape entry could not be used as a dimension
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),
    /// A dataframe row has the wrong number of cells
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A factor category appears more than once
    #[error("duplicate category at position {0}")]
    DuplicateCategory(usize),
    /// Null cannot be a factor category; it marks a missing value
    #[error("null category at position {0}")]
    NullCategory(usize),
    /// A dense numeric container received a non-numeric element
    #[error("non-numeric element: {0}")]
    NonNumeric(String),
}
