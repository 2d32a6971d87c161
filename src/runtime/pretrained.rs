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
use crate::runtime::{
    EncodedBatch, GenerateOptions, GenerationSettings, ModelResources, ModelRuntime,
    TokenizeOptions,
};
use crate::translation::Language;
use rust_bert::marian::MarianGenerator;
use rust_bert::mbart::MBartGenerator;
use rust_bert::pipelines::generation_utils::{
    GenerateConfig, GenerateOptions as GeneratorOptions, LanguageGenerator,
};
use rust_tokenizers::tokenizer::{MBart50Tokenizer, MarianTokenizer, Tokenizer, TruncationStrategy};
use rust_tokenizers::TokenizedInput;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tch::{Device, Tensor};
use tracing::{debug, info};

/// # Architecture of a pretrained translation model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelKind {
    /// Bilingual Marian (Opus-MT) model, language pair fixed by the checkpoint
    Marian,
    /// Multilingual mBART-50 many-to-many model, languages selected by tags
    MBart50,
}

/// # Abstraction that holds the tokenizer of one of the supported models
enum PretrainedTokenizer {
    Marian(MarianTokenizer),
    MBart50(MBart50Tokenizer),
}

impl PretrainedTokenizer {
    fn encode_list(&self, texts: &[&str], max_len: usize) -> Vec<TokenizedInput> {
        match *self {
            Self::Marian(ref tokenizer) => {
                tokenizer.encode_list(texts, max_len, &TruncationStrategy::LongestFirst, 0)
            }
            Self::MBart50(ref tokenizer) => {
                tokenizer.encode_list(texts, max_len, &TruncationStrategy::LongestFirst, 0)
            }
        }
    }

    fn decode(&self, token_ids: &[i64], skip_special_tokens: bool) -> String {
        match *self {
            Self::Marian(ref tokenizer) => tokenizer.decode(token_ids, skip_special_tokens, true),
            Self::MBart50(ref tokenizer) => tokenizer.decode(token_ids, skip_special_tokens, true),
        }
    }

    fn convert_tokens_to_ids(&self, tokens: &[String]) -> Vec<i64> {
        match *self {
            Self::Marian(ref tokenizer) => tokenizer.convert_tokens_to_ids(tokens),
            Self::MBart50(ref tokenizer) => tokenizer.convert_tokens_to_ids(tokens),
        }
    }
}

#[allow(clippy::large_enum_variant)]
/// # Abstraction that holds the generator of one of the supported models
enum PretrainedGenerator {
    Marian(MarianGenerator),
    MBart50(MBartGenerator),
}

impl PretrainedGenerator {
    fn new(
        kind: ModelKind,
        resources: ModelResources,
        settings: &GenerationSettings,
        device: Device,
    ) -> Result<PretrainedGenerator, TranslatorError> {
        let generate_config = GenerateConfig {
            model_resource: resources.model,
            config_resource: resources.config,
            vocab_resource: resources.vocab,
            merges_resource: resources.sentence_piece,
            min_length: settings.min_length,
            max_length: settings.max_length,
            do_sample: false,
            early_stopping: settings.early_stopping,
            num_beams: settings.num_beams,
            no_repeat_ngram_size: settings.no_repeat_ngram_size,
            num_return_sequences: 1,
            device,
            ..Default::default()
        };
        Ok(match kind {
            ModelKind::Marian => PretrainedGenerator::Marian(MarianGenerator::new(generate_config)?),
            ModelKind::MBart50 => PretrainedGenerator::MBart50(MBartGenerator::new(generate_config)?),
        })
    }

    fn generate(
        &self,
        input_ids: Tensor,
        attention_mask: Tensor,
        forced_bos_token_id: Option<i64>,
    ) -> Vec<Vec<i64>> {
        let generate_options = GeneratorOptions {
            forced_bos_token_id,
            ..Default::default()
        };
        let output = match *self {
            Self::Marian(ref model) => {
                model.generate_from_ids_and_past(input_ids, Some(attention_mask), None)
            }
            Self::MBart50(ref model) => model.generate_from_ids_and_past(
                input_ids,
                Some(attention_mask),
                Some(generate_options),
            ),
        };
        output.into_iter().map(|output| output.indices).collect()
    }
}

/// # Model runtime backed by pretrained rust-bert generators
pub struct PretrainedRuntime {
    kind: ModelKind,
    tokenizer: PretrainedTokenizer,
    generator: PretrainedGenerator,
    pad_token_id: i64,
    max_input_length: usize,
    device: Device,
}

impl PretrainedRuntime {
    /// Loads a pretrained model from a local directory or the Hugging Face hub
    ///
    /// # Arguments
    ///
    /// * `kind` - `ModelKind` of the checkpoint
    /// * `model_name` - local directory or hub repository name
    /// * `settings` - `GenerationSettings` for beam search
    /// * `device` - `Device` to place the model on (CPU/GPU)
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn main() -> anyhow::Result<()> {
    /// use rust_mt::runtime::{ModelKind, PretrainedRuntime};
    /// use tch::Device;
    ///
    /// let runtime = PretrainedRuntime::new(
    ///     ModelKind::MBart50,
    ///     "facebook/mbart-large-50-many-to-many-mmt",
    ///     &Default::default(),
    ///     Device::cuda_if_available(),
    /// )?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        kind: ModelKind,
        model_name: &str,
        settings: &GenerationSettings,
        device: Device,
    ) -> Result<PretrainedRuntime, TranslatorError> {
        info!(model_name, ?kind, "resolving pretrained model resources");
        let resources = ModelResources::resolve(kind, model_name);
        PretrainedRuntime::from_resources(kind, resources, settings, device)
    }

    /// Loads a pretrained model from explicit resources
    pub fn from_resources(
        kind: ModelKind,
        resources: ModelResources,
        settings: &GenerationSettings,
        device: Device,
    ) -> Result<PretrainedRuntime, TranslatorError> {
        let vocab_path = resources.vocab.get_local_path()?;
        let tokenizer = match kind {
            ModelKind::Marian => {
                let spm_path = match resources.sentence_piece {
                    Some(ref resource) => resource.get_local_path()?,
                    None => {
                        return Err(TranslatorError::InvalidConfigurationError(
                            "Marian models require a SentencePiece model resource".to_string(),
                        ));
                    }
                };
                PretrainedTokenizer::Marian(MarianTokenizer::from_files(
                    path_to_str(&vocab_path)?,
                    path_to_str(&spm_path)?,
                    false,
                )?)
            }
            ModelKind::MBart50 => PretrainedTokenizer::MBart50(MBart50Tokenizer::from_file(
                path_to_str(&vocab_path)?,
                false,
            )?),
        };
        let pad_token_id = tokenizer.convert_tokens_to_ids(&["<pad>".to_string()])[0];

        info!(?kind, ?device, "loading pretrained generator");
        let generator = PretrainedGenerator::new(kind, resources, settings, device)?;

        Ok(PretrainedRuntime {
            kind,
            tokenizer,
            generator,
            pad_token_id,
            max_input_length: settings.max_length.unwrap_or(512).max(1) as usize,
            device,
        })
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    fn language_marker(language: Language) -> String {
        format!(">>{}<<", language.iso_639_1_code())
    }
}

fn check_generate_options(
    kind: ModelKind,
    options: &GenerateOptions,
) -> Result<(), TranslatorError> {
    match (kind, options.forced_bos_token_id) {
        (ModelKind::Marian, Some(token_id)) => Err(TranslatorError::InvalidConfigurationError(
            format!(
                "Marian models have a fixed language pair, cannot force token {} as first output",
                token_id
            ),
        )),
        _ => Ok(()),
    }
}

fn path_to_str(path: &Path) -> Result<&str, TranslatorError> {
    path.to_str().ok_or_else(|| {
        TranslatorError::ValueError(format!("{} is not a valid UTF-8 path", path.display()))
    })
}

impl ModelRuntime for PretrainedRuntime {
    fn tokenize(
        &self,
        texts: &[&str],
        options: &TokenizeOptions,
    ) -> Result<EncodedBatch, TranslatorError> {
        let tokenized = match (self.kind, options.source_language) {
            (ModelKind::MBart50, Some(language)) => {
                let marker = PretrainedRuntime::language_marker(language);
                let texts = texts
                    .iter()
                    .map(|text| format!("{} {}", marker, text))
                    .collect::<Vec<String>>();
                self.tokenizer.encode_list(
                    &texts.iter().map(String::as_str).collect::<Vec<&str>>(),
                    self.max_input_length,
                )
            }
            (ModelKind::Marian, Some(language)) => {
                return Err(TranslatorError::InvalidConfigurationError(format!(
                    "Marian models have a fixed language pair, cannot tag inputs as {}",
                    language
                )));
            }
            (_, None) => self.tokenizer.encode_list(texts, self.max_input_length),
        };

        EncodedBatch::new(
            tokenized.into_iter().map(|input| input.token_ids).collect(),
            self.pad_token_id,
            options.padding,
        )
    }

    fn generate(
        &self,
        batch: &EncodedBatch,
        options: &GenerateOptions,
    ) -> Result<Vec<Vec<i64>>, TranslatorError> {
        check_generate_options(self.kind, options)?;
        if batch.is_empty() {
            return Ok(Vec::new());
        }
        debug!(
            batch_size = batch.len(),
            sequence_length = batch.sequence_length(),
            "generating"
        );
        let to_tensor = |rows: &[Vec<i64>]| {
            Tensor::stack(
                &rows
                    .iter()
                    .map(|row| Tensor::of_slice(row))
                    .collect::<Vec<Tensor>>(),
                0,
            )
            .to(self.device)
        };
        let input_ids = to_tensor(batch.input_ids());
        let attention_mask = to_tensor(batch.attention_mask());

        Ok(self
            .generator
            .generate(input_ids, attention_mask, options.forced_bos_token_id))
    }

    fn decode(
        &self,
        token_ids: &[i64],
        skip_special_tokens: bool,
    ) -> Result<String, TranslatorError> {
        // SentencePiece detokenization leaves the word-boundary space of the first token.
        Ok(self
            .tokenizer
            .decode(token_ids, skip_special_tokens)
            .trim_start()
            .to_string())
    }

    fn language_token_id(&self, language: Language) -> Result<i64, TranslatorError> {
        match self.kind {
            ModelKind::MBart50 => Ok(self
                .tokenizer
                .convert_tokens_to_ids(&[PretrainedRuntime::language_marker(language)])[0]),
            ModelKind::Marian => Err(TranslatorError::InvalidConfigurationError(format!(
                "Marian models have a fixed language pair, no token for {}",
                language
            ))),
        }
    }
}
