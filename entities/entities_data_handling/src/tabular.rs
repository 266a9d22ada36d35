//! Tabular Module
//!
//! Provides the labeled and categorical native types carried by BERT:
//! - `Series`: ordered one-dimensional sequence of values
//! - `DataFrame`: column labels plus row-major rows of cells
//! - `Factor`: categorical values drawn from an ordered category list

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

use crate::error::DataError;
use crate::value::Value;

/// One-dimensional sequence of values
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Series {
    values: Vec<Value>,
}

impl Series {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl FromIterator<Value> for Series {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Two-dimensional labeled table
///
/// Every row has exactly one cell per column.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct DataFrame {
    columns: Vec<Value>,
    rows: Vec<Vec<Value>>,
}

impl DataFrame {
    /// Build a table from column labels and rows
    ///
    /// # Returns
    /// * `Ok(DataFrame)` - The table
    /// * `Err(DataError::RaggedRow)` - A row length differs from the column count
    pub fn new(columns: Vec<Value>, rows: Vec<Vec<Value>>) -> Result<Self, DataError> {
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != columns.len() {
                return Err(DataError::RaggedRow {
                    row,
                    expected: columns.len(),
                    actual: cells.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Build a table from column labels and flat row-major cells
    pub fn from_flat(columns: Vec<Value>, cells: Vec<Value>) -> Result<Self, DataError> {
        let width = columns.len();
        if width == 0 {
            if !cells.is_empty() {
                return Err(DataError::ShapeMismatch {
                    shape: vec![0, 0],
                    expected: 0,
                    actual: cells.len(),
                });
            }
            return Ok(Self {
                columns,
                rows: Vec::new(),
            });
        }
        if cells.len() % width != 0 {
            let row_count = cells.len() / width + 1;
            return Err(DataError::ShapeMismatch {
                shape: vec![row_count, width],
                expected: row_count * width,
                actual: cells.len(),
            });
        }
        let mut rows = Vec::with_capacity(cells.len() / width);
        let mut cells = cells.into_iter();
        loop {
            let row: Vec<Value> = cells.by_ref().take(width).collect();
            if row.is_empty() {
                break;
            }
            rows.push(row);
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[Value] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// Cells of the column labeled `label`, top to bottom
    pub fn column(&self, label: &Value) -> Option<Vec<&Value>> {
        let index = self.columns.iter().position(|column| column == label)?;
        Some(self.rows.iter().map(|row| &row[index]).collect())
    }
}

/// Categorical value
///
/// Stores the ordered category list and, for each value, the index of its
/// category. A value that is not one of the categories is missing (`None`).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Factor {
    categories: Vec<Value>,
    codes: Vec<Option<usize>>,
}

impl Factor {
    /// Build a factor, restricting `values` to `categories`
    ///
    /// # Returns
    /// * `Ok(Factor)` - Values outside the category list become missing
    /// * `Err(DataError::DuplicateCategory)` - A category is listed twice
    /// * `Err(DataError::NullCategory)` - A category is null
    pub fn new(values: Vec<Value>, categories: Vec<Value>) -> Result<Self, DataError> {
        for (index, category) in categories.iter().enumerate() {
            if category.is_null() {
                return Err(DataError::NullCategory(index));
            }
            if categories[..index].contains(category) {
                return Err(DataError::DuplicateCategory(index));
            }
        }
        let codes = values
            .iter()
            .map(|value| categories.iter().position(|category| category == value))
            .collect();
        Ok(Self { categories, codes })
    }

    pub fn categories(&self) -> &[Value] {
        &self.categories
    }

    /// Category index per value
    pub fn codes(&self) -> &[Option<usize>] {
        &self.codes
    }

    /// Values in order; missing values are `None`
    pub fn values(&self) -> impl Iterator<Item = Option<&Value>> + '_ {
        self.codes
            .iter()
            .map(move |code| code.map(|index| &self.categories[index]))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
