// Copyright 2022 The rust-mt Authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Tabular data
//!
//! Minimal column-oriented table used as input of the column translation methods and as the
//! payload of the CSV export. A `DataFrame` is an ordered list of uniquely named `Column`s of
//! equal length. Looking up a column that does not exist fails with a `KeyError`.
//!
//! ```no_run
//! # fn main() -> Result<(), rust_mt::TranslatorError> {
//! use rust_mt::frame::{Column, CsvOptions, DataFrame};
//!
//! let mut data = DataFrame::from_columns(vec![Column::new("text", vec!["adsa", "今日は"])])?;
//! data.push_column(Column::new("translation", vec!["Adsa", "Hello"]))?;
//! data.to_csv("trial.csv", &CsvOptions::default())?;
//! # Ok(())
//! # }
//! ```

mod csv_io;
mod value;

pub use csv_io::CsvOptions;
pub use value::Value;

use crate::common::error::TranslatorError;
use std::collections::HashSet;

/// # Named column of cell values
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    /// Creates a new column from a name and any iterator of values convertible to `Value`
    ///
    /// # Example
    ///
    /// ```
    /// use rust_mt::frame::{Column, Value};
    ///
    /// let column = Column::new("text", vec![Some("adsa"), None]);
    /// assert_eq!(column.values(), &[Value::Text("adsa".to_string()), Value::Null]);
    /// ```
    pub fn new<N, I, V>(name: N, values: I) -> Column
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Column {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, row: usize) -> Option<&Value> {
        self.values.get(row)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrows every cell as text, failing with a `ValueError` on the first non-text cell.
    pub fn text_values(&self) -> Result<Vec<&str>, TranslatorError> {
        self.values
            .iter()
            .enumerate()
            .map(|(row, value)| {
                value.as_text().ok_or_else(|| {
                    TranslatorError::ValueError(format!(
                        "row {} of column `{}` is {}, text input must be of type `str`",
                        row,
                        self.name,
                        value.type_name()
                    ))
                })
            })
            .collect()
    }
}

/// # Ordered collection of equally long, uniquely named columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFrame {
    columns: Vec<Column>,
}

impl DataFrame {
    /// Creates an empty `DataFrame`
    pub fn new() -> DataFrame {
        DataFrame {
            columns: Vec::new(),
        }
    }

    /// Builds a `DataFrame` from a list of columns
    ///
    /// # Arguments
    ///
    /// * `columns` - columns in output order. All columns must have the same length and distinct names.
    ///
    /// # Returns
    ///
    /// * `Result<DataFrame, TranslatorError>` - `ValueError` on length mismatch or duplicate names
    pub fn from_columns(columns: Vec<Column>) -> Result<DataFrame, TranslatorError> {
        let mut frame = DataFrame::new();
        for column in columns {
            frame.push_column(column)?;
        }
        Ok(frame)
    }

    /// Appends a column to the right of the existing ones
    pub fn push_column(&mut self, column: Column) -> Result<(), TranslatorError> {
        if let Some(first) = self.columns.first() {
            if first.len() != column.len() {
                return Err(TranslatorError::ValueError(format!(
                    "length of column `{}` ({}) does not match the frame height ({})",
                    column.name,
                    column.len(),
                    first.len()
                )));
            }
        }
        if self.columns.iter().any(|c| c.name == column.name) {
            return Err(TranslatorError::ValueError(format!(
                "duplicate column name `{}`",
                column.name
            )));
        }
        self.columns.push(column);
        Ok(())
    }

    /// Looks up a column by name
    ///
    /// # Returns
    ///
    /// * `Result<&Column, TranslatorError>` - `KeyError` if no column has this name
    pub fn column(&self, name: &str) -> Result<&Column, TranslatorError> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .ok_or_else(|| {
                TranslatorError::KeyError(format!(
                    "column `{}` not found, available columns: {:?}",
                    name,
                    self.column_names()
                ))
            })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name()).collect()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.height() == 0
    }

    fn check_unique_names(names: &[String]) -> Result<(), TranslatorError> {
        let mut seen = HashSet::new();
        for name in names {
            if !seen.insert(name.as_str()) {
                return Err(TranslatorError::ValueError(format!(
                    "duplicate column name `{}`",
                    name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> DataFrame {
        DataFrame::from_columns(vec![
            Column::new("text", vec!["adsa", "加藤産業㈱阪神支店ﾘﾍﾞｰﾄ3月"]),
            Column::new("id", vec![1, 2]),
        ])
        .unwrap()
    }

    #[test]
    fn column_lookup() {
        let frame = sample_frame();
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.column_names(), vec!["text", "id"]);
        assert_eq!(
            frame.column("text").unwrap().get(0),
            Some(&Value::Text("adsa".to_string()))
        );
    }

    #[test]
    fn missing_column_is_a_key_error() {
        let frame = sample_frame();
        let error = frame.column("translation").unwrap_err();
        assert!(matches!(error, TranslatorError::KeyError(_)));
    }

    #[test]
    fn mismatched_column_length_is_rejected() {
        let mut frame = sample_frame();
        let error = frame
            .push_column(Column::new("translation", vec!["Adsa"]))
            .unwrap_err();
        assert!(matches!(error, TranslatorError::ValueError(_)));
        assert_eq!(frame.width(), 2);
    }

    #[test]
    fn duplicate_column_name_is_rejected() {
        let error = DataFrame::from_columns(vec![
            Column::new("text", vec!["a"]),
            Column::new("text", vec!["b"]),
        ])
        .unwrap_err();
        assert!(matches!(error, TranslatorError::ValueError(_)));
    }

    #[test]
    fn text_values_rejects_non_text_cells() {
        let column = Column::new("text", vec![Value::from("adsa"), Value::Integer(9)]);
        let error = column.text_values().unwrap_err();
        assert!(matches!(error, TranslatorError::ValueError(_)));

        let column = Column::new("text", vec!["adsa", ""]);
        assert_eq!(column.text_values().unwrap(), vec!["adsa", ""]);
    }
}
