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
use crate::frame::{CsvOptions, DataFrame};
use crate::runtime::{GenerateOptions, ModelRuntime, TokenizeOptions};
use crate::translation::{Language, SingleModelConfig, Translate};
use std::path::Path;
use tracing::debug;

/// # Multilingual translator with fixed source and target languages
///
/// Inputs are tagged with the source language and the decoder is forced to start with the
/// target language token, which is resolved once at construction.
pub struct SingleModelTranslator<R> {
    config: SingleModelConfig,
    runtime: R,
    forced_bos_token_id: i64,
}

impl<R: ModelRuntime> SingleModelTranslator<R> {
    /// Build a new `SingleModelTranslator`
    ///
    /// # Arguments
    ///
    /// * `config` - `SingleModelConfig` holding the model identifier, languages and CSV settings
    /// * `runtime` - `ModelRuntime` already loaded for `config.model_name`
    ///
    /// # Returns
    ///
    /// * `Result<SingleModelTranslator<R>, TranslatorError>` - fails if the runtime has no token
    /// for the target language
    pub fn new(config: SingleModelConfig, runtime: R) -> Result<Self, TranslatorError> {
        let forced_bos_token_id = runtime.language_token_id(config.target_language)?;
        Ok(SingleModelTranslator {
            config,
            runtime,
            forced_bos_token_id,
        })
    }

    pub fn model_name(&self) -> &str {
        &self.config.model_name
    }

    pub fn source_language(&self) -> Language {
        self.config.source_language
    }

    pub fn target_language(&self) -> Language {
        self.config.target_language
    }

    pub fn config(&self) -> &SingleModelConfig {
        &self.config
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Saves a `DataFrame` to the configured output path (default `trial.csv`), overwriting any
    /// existing file. The row index is written only if `include_index` is set in the configuration.
    pub fn save_csv(&self, dataframe: &DataFrame) -> Result<(), TranslatorError> {
        self.save_csv_with_index(dataframe, self.config.include_index)
    }

    /// Saves a `DataFrame` to the configured output path with an explicit index setting
    pub fn save_csv_with_index(
        &self,
        dataframe: &DataFrame,
        index: bool,
    ) -> Result<(), TranslatorError> {
        let path: &Path = self.config.output_path.as_ref();
        debug!(path = %path.display(), rows = dataframe.height(), index, "saving CSV");
        let options = CsvOptions {
            include_index: index,
            ..Default::default()
        };
        dataframe.to_csv(path, &options)
    }
}

impl<R: ModelRuntime> Translate for SingleModelTranslator<R> {
    fn translate(&self, text: &str) -> Result<String, TranslatorError> {
        let tokenize_options = TokenizeOptions {
            source_language: Some(self.config.source_language),
            padding: false,
        };
        let encoded = self.runtime.tokenize(&[text], &tokenize_options)?;

        let generate_options = GenerateOptions {
            forced_bos_token_id: Some(self.forced_bos_token_id),
        };
        let generated = self.runtime.generate(&encoded, &generate_options)?;

        match generated.first() {
            Some(token_ids) => self.runtime.decode(token_ids, true),
            None => Err(TranslatorError::RuntimeError(
                "generation returned no sequence for a single input".to_string(),
            )),
        }
    }
}

#[cfg(feature = "pretrained")]
impl SingleModelTranslator<crate::runtime::PretrainedRuntime> {
    /// Loads the configured mBART-50 checkpoint and builds a translator around it
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn main() -> anyhow::Result<()> {
    /// use rust_mt::translation::{SingleModelTranslator, Translate};
    /// use tch::Device;
    ///
    /// let translator =
    ///     SingleModelTranslator::from_pretrained(Default::default(), Device::cuda_if_available())?;
    /// let output = translator.translate("加藤産業㈱阪神支店ﾘﾍﾞｰﾄ3月")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_pretrained(
        config: SingleModelConfig,
        device: tch::Device,
    ) -> Result<Self, TranslatorError> {
        let runtime = crate::runtime::PretrainedRuntime::new(
            crate::runtime::ModelKind::MBart50,
            &config.model_name,
            &config.generation,
            device,
        )?;
        SingleModelTranslator::new(config, runtime)
    }
}
