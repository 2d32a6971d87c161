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

use crate::common::error::TranslatorError;
use crate::frame::{DataFrame, Value};
use tracing::{debug, trace};

/// # Single-text translation capability
///
/// Implementors only provide `translate`; the row-by-row column translation is built on top of
/// it, so any implementor (including a test double) gets the same column semantics.
pub trait Translate {
    /// Translates a single text
    ///
    /// # Arguments
    ///
    /// * `text` - text in the source language
    ///
    /// # Returns
    ///
    /// * `Result<String, TranslatorError>` - translation in the target language
    fn translate(&self, text: &str) -> Result<String, TranslatorError>;

    /// Translates a single cell value. Only `Value::Text` is accepted: null, numeric or boolean
    /// values fail with a `ValueError` and are never coerced to text.
    fn translate_value(&self, value: &Value) -> Result<String, TranslatorError> {
        match value.as_text() {
            Some(text) => self.translate(text),
            None => Err(TranslatorError::ValueError(format!(
                "text input must be of type `str`, got {}",
                value.type_name()
            ))),
        }
    }

    /// Translates every row of a column, one `translate` call per row, in row order.
    ///
    /// # Arguments
    ///
    /// * `dataframe` - `DataFrame` holding the texts
    /// * `column_name` - name of the column to translate
    ///
    /// # Returns
    ///
    /// * `Result<Vec<String>, TranslatorError>` - one translation per row. A missing column
    /// fails with a `KeyError`; the first failing row aborts the whole call.
    ///
    /// # Example
    ///
    /// ```
    /// # fn main() -> Result<(), rust_mt::TranslatorError> {
    /// use rust_mt::frame::{Column, DataFrame};
    /// use rust_mt::translation::Translate;
    /// use rust_mt::TranslatorError;
    ///
    /// struct Shout;
    ///
    /// impl Translate for Shout {
    ///     fn translate(&self, text: &str) -> Result<String, TranslatorError> {
    ///         Ok(text.to_uppercase())
    ///     }
    /// }
    ///
    /// let data = DataFrame::from_columns(vec![Column::new("text", vec!["a", "b"])])?;
    /// assert_eq!(Shout.column_translate(&data, "text")?, vec!["A", "B"]);
    /// # Ok(())
    /// # }
    /// ```
    fn column_translate(
        &self,
        dataframe: &DataFrame,
        column_name: &str,
    ) -> Result<Vec<String>, TranslatorError> {
        let column = dataframe.column(column_name)?;
        debug!(column_name, rows = column.len(), "translating column row by row");
        column
            .values()
            .iter()
            .enumerate()
            .map(|(row, value)| {
                trace!(row, "translating row");
                self.translate_value(value)
            })
            .collect()
    }
}
