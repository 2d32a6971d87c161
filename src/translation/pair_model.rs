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
use crate::frame::DataFrame;
use crate::runtime::{GenerateOptions, ModelRuntime, TokenizeOptions};
use crate::translation::{PairModelConfig, Translate};
use tracing::debug;

/// # Bilingual translator, the language pair is fixed by the model checkpoint
pub struct PairModelTranslator<R> {
    config: PairModelConfig,
    runtime: R,
}

impl<R: ModelRuntime> PairModelTranslator<R> {
    /// Build a new `PairModelTranslator`
    ///
    /// # Arguments
    ///
    /// * `config` - `PairModelConfig` holding the model identifier
    /// * `runtime` - `ModelRuntime` already loaded for `config.model_name`
    pub fn new(config: PairModelConfig, runtime: R) -> PairModelTranslator<R> {
        PairModelTranslator { config, runtime }
    }

    pub fn model_name(&self) -> &str {
        &self.config.model_name
    }

    pub fn config(&self) -> &PairModelConfig {
        &self.config
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Translates a whole column with a single model invocation.
    ///
    /// All rows are tokenized together with padding, generated in one batch and decoded back in
    /// input order.
    ///
    /// # Arguments
    ///
    /// * `dataframe` - `DataFrame` holding the texts
    /// * `column_name` - name of the column to translate
    ///
    /// # Returns
    ///
    /// * `Result<Vec<String>, TranslatorError>` - translations aligned with the input rows.
    /// Fails with a `KeyError` if the column is missing, a `ValueError` if any cell is not text.
    pub fn bulk_translate(
        &self,
        dataframe: &DataFrame,
        column_name: &str,
    ) -> Result<Vec<String>, TranslatorError> {
        let texts = dataframe.column(column_name)?.text_values()?;
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        debug!(column_name, batch_size = texts.len(), "bulk translation");

        let generated = self.generate(&texts)?;
        if generated.len() != texts.len() {
            return Err(TranslatorError::RuntimeError(format!(
                "generation returned {} sequences for a batch of {} inputs",
                generated.len(),
                texts.len()
            )));
        }
        generated
            .iter()
            .map(|token_ids| self.runtime.decode(token_ids, true))
            .collect()
    }

    fn generate(&self, texts: &[&str]) -> Result<Vec<Vec<i64>>, TranslatorError> {
        let tokenize_options = TokenizeOptions {
            source_language: None,
            padding: true,
        };
        let encoded = self.runtime.tokenize(texts, &tokenize_options)?;
        self.runtime.generate(&encoded, &GenerateOptions::default())
    }
}

impl<R: ModelRuntime> Translate for PairModelTranslator<R> {
    fn translate(&self, text: &str) -> Result<String, TranslatorError> {
        let generated = self.generate(&[text])?;
        match generated.first() {
            Some(token_ids) => self.runtime.decode(token_ids, true),
            None => Err(TranslatorError::RuntimeError(
                "generation returned no sequence for a single input".to_string(),
            )),
        }
    }
}

#[cfg(feature = "pretrained")]
impl PairModelTranslator<crate::runtime::PretrainedRuntime> {
    /// Loads the configured Marian checkpoint and builds a translator around it
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn main() -> anyhow::Result<()> {
    /// use rust_mt::translation::{PairModelTranslator, Translate};
    /// use tch::Device;
    ///
    /// let translator =
    ///     PairModelTranslator::from_pretrained(Default::default(), Device::cuda_if_available())?;
    /// let output = translator.translate("adsa")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_pretrained(
        config: PairModelConfig,
        device: tch::Device,
    ) -> Result<Self, TranslatorError> {
        let runtime = crate::runtime::PretrainedRuntime::new(
            crate::runtime::ModelKind::Marian,
            &config.model_name,
            &config.generation,
            device,
        )?;
        Ok(PairModelTranslator::new(config, runtime))
    }
}
