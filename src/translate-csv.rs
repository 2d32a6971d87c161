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

extern crate tch;

use rust_mt::frame::{Column, CsvOptions, DataFrame};
use rust_mt::translation::{
    PairModelConfig, PairModelTranslator, SingleModelConfig, SingleModelTranslator, Translate,
    DEFAULT_OUTPUT_PATH,
};
use rust_mt::TranslatorError;
use std::path::PathBuf;
use tch::Device;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: translate-csv <single|pair|bulk> input.csv column [output.csv]";
const TRANSLATION_COLUMN: &str = "translation";

pub fn main() -> Result<(), TranslatorError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<_> = std::env::args().collect();
    if !(4..=5).contains(&args.len()) {
        return Err(TranslatorError::ValueError(USAGE.to_string()));
    }
    let mode = args[1].as_str();
    let input_file = &args[2];
    let column_name = args[3].as_str();
    let output_file = PathBuf::from(args.get(4).map_or(DEFAULT_OUTPUT_PATH, String::as_str));

    let mut data = DataFrame::read_csv(input_file)?;
    info!(input_file = %input_file, rows = data.height(), mode, "translating CSV");
    let device = Device::cuda_if_available();

    match mode {
        "single" => {
            let config = SingleModelConfig {
                output_path: output_file,
                ..Default::default()
            };
            let translator = SingleModelTranslator::from_pretrained(config, device)?;
            let translations = translator.column_translate(&data, column_name)?;
            data.push_column(Column::new(TRANSLATION_COLUMN, translations))?;
            translator.save_csv(&data)?;
        }
        "pair" | "bulk" => {
            let translator = PairModelTranslator::from_pretrained(PairModelConfig::default(), device)?;
            let translations = if mode == "bulk" {
                translator.bulk_translate(&data, column_name)?
            } else {
                translator.column_translate(&data, column_name)?
            };
            data.push_column(Column::new(TRANSLATION_COLUMN, translations))?;
            data.to_csv(&output_file, &CsvOptions::default())?;
        }
        _ => return Err(TranslatorError::ValueError(USAGE.to_string())),
    }

    Ok(())
}
