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
use crate::frame::{Column, DataFrame, Value};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// # CSV serialization options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Write a leading, unnamed column holding the row numbers (default: false)
    pub include_index: bool,
    /// Field delimiter (default: `,`)
    pub delimiter: u8,
    /// Read empty fields as `Value::Null` instead of empty text (default: false)
    pub empty_as_null: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            include_index: false,
            delimiter: b',',
            empty_as_null: false,
        }
    }
}

impl DataFrame {
    /// Reads a comma separated file with a header row.
    ///
    /// Every field is read as `Value::Text`, empty fields included, so that a frame written by
    /// `to_csv` reads back with the same text values. A written index column is kept as a
    /// regular column named `""`.
    ///
    /// # Arguments
    ///
    /// * `path` - location of the CSV file
    pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<DataFrame, TranslatorError> {
        DataFrame::read_csv_with(path, &CsvOptions::default())
    }

    /// Reads a CSV file with explicit options (delimiter, empty fields as `Value::Null`).
    pub fn read_csv_with<P: AsRef<Path>>(
        path: P,
        options: &CsvOptions,
    ) -> Result<DataFrame, TranslatorError> {
        let file = File::open(path)?;
        DataFrame::read_csv_from(file, options)
    }

    /// Reads CSV content from any reader. See `read_csv`.
    pub fn read_csv_from<R: Read>(
        reader: R,
        options: &CsvOptions,
    ) -> Result<DataFrame, TranslatorError> {
        let mut csv = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(options.delimiter)
            .from_reader(reader);

        let names = csv
            .headers()?
            .iter()
            .map(String::from)
            .collect::<Vec<String>>();
        DataFrame::check_unique_names(&names)?;

        let mut values: Vec<Vec<Value>> = vec![Vec::new(); names.len()];
        for result in csv.records() {
            let record = result?;
            for (column_values, field) in values.iter_mut().zip(record.iter()) {
                column_values.push(if options.empty_as_null && field.is_empty() {
                    Value::Null
                } else {
                    Value::Text(field.to_string())
                });
            }
        }

        DataFrame::from_columns(
            names
                .into_iter()
                .zip(values)
                .map(|(name, values)| Column::new(name, values))
                .collect(),
        )
    }

    /// Writes the frame to a CSV file, creating it or truncating an existing file.
    ///
    /// # Arguments
    ///
    /// * `path` - output location
    /// * `options` - `CsvOptions` controlling the index column and delimiter
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn main() -> Result<(), rust_mt::TranslatorError> {
    /// use rust_mt::frame::{Column, CsvOptions, DataFrame};
    ///
    /// let data = DataFrame::from_columns(vec![Column::new("text", vec!["adsa"])])?;
    /// let options = CsvOptions {
    ///     include_index: true,
    ///     ..Default::default()
    /// };
    /// data.to_csv("trial.csv", &options)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_csv<P: AsRef<Path>>(
        &self,
        path: P,
        options: &CsvOptions,
    ) -> Result<(), TranslatorError> {
        let file = File::create(path)?;
        self.write_csv(file, options)
    }

    /// Writes the frame as CSV to any writer. See `to_csv`.
    pub fn write_csv<W: Write>(&self, writer: W, options: &CsvOptions) -> Result<(), TranslatorError> {
        let mut csv = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .from_writer(writer);

        let mut header = Vec::with_capacity(self.width() + 1);
        if options.include_index {
            header.push("");
        }
        header.extend(self.column_names());
        csv.write_record(&header)?;

        for row in 0..self.height() {
            let mut record = Vec::with_capacity(header.len());
            if options.include_index {
                record.push(row.to_string());
            }
            record.extend(
                self.columns
                    .iter()
                    .map(|column| column.values[row].to_string()),
            );
            csv.write_record(&record)?;
        }
        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> DataFrame {
        DataFrame::from_columns(vec![
            Column::new("text", vec!["adsa", "加藤産業㈱阪神支店ﾘﾍﾞｰﾄ3月"]),
            Column::new(
                "translation",
                vec![
                    "adsa",
                    "Kato Industries (株) Hanshin Branch Rehearsal March",
                ],
            ),
        ])
        .unwrap()
    }

    fn to_string(frame: &DataFrame, options: &CsvOptions) -> String {
        let mut buffer = Vec::new();
        frame.write_csv(&mut buffer, options).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn write_without_index() {
        let output = to_string(&sample_frame(), &CsvOptions::default());
        assert_eq!(
            output,
            "text,translation\n\
             adsa,adsa\n\
             加藤産業㈱阪神支店ﾘﾍﾞｰﾄ3月,Kato Industries (株) Hanshin Branch Rehearsal March\n"
        );
    }

    #[test]
    fn write_with_index() {
        let options = CsvOptions {
            include_index: true,
            ..Default::default()
        };
        let output = to_string(&sample_frame(), &options);
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some(",text,translation"));
        assert_eq!(lines.next(), Some("0,adsa,adsa"));
        assert!(lines.next().unwrap().starts_with("1,"));
    }

    #[test]
    fn fields_with_delimiters_are_quoted_and_read_back() -> anyhow::Result<()> {
        let frame = DataFrame::from_columns(vec![
            Column::new("text", vec!["a, b", "say \"hi\""]),
            Column::new("note", vec!["", "x"]),
        ])?;
        let output = to_string(&frame, &CsvOptions::default());
        let read_back = DataFrame::read_csv_from(output.as_bytes(), &CsvOptions::default())?;
        assert_eq!(read_back, frame);
        Ok(())
    }

    #[test]
    fn empty_fields_as_null_on_request() -> anyhow::Result<()> {
        let options = CsvOptions {
            empty_as_null: true,
            ..Default::default()
        };
        let frame = DataFrame::read_csv_from("text,note\nadsa,\n".as_bytes(), &options)?;
        assert!(frame.column("note")?.values()[0].is_null());
        assert!(!frame.column("text")?.values()[0].is_null());

        let frame =
            DataFrame::read_csv_from("text,note\nadsa,\n".as_bytes(), &CsvOptions::default())?;
        assert_eq!(frame.column("note")?.values(), &[Value::Text(String::new())]);
        Ok(())
    }

    #[test]
    fn non_text_values_are_written_with_display() {
        let frame = DataFrame::from_columns(vec![Column::new(
            "mixed",
            vec![Value::Integer(9), Value::Float(1.5), Value::Boolean(true)],
        )])
        .unwrap();
        let output = to_string(&frame, &CsvOptions::default());
        assert_eq!(output, "mixed\n9\n1.5\ntrue\n");
    }

    #[test]
    fn duplicate_headers_are_rejected() {
        let error = DataFrame::read_csv_from("a,a\n1,2\n".as_bytes(), &CsvOptions::default()).unwrap_err();
        assert!(matches!(error, TranslatorError::ValueError(_)));
    }
}
