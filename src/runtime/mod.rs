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

//! # Model runtime
//!
//! The translators never run a model themselves: tokenization, generation and decoding are
//! delegated to a `ModelRuntime` passed at construction. This keeps the translators free of
//! any global model state and allows several configurations (or test doubles) to coexist.
//!
//! With the `pretrained` feature, `PretrainedRuntime` provides an implementation backed by
//! the Marian and mBART-50 generators of `rust-bert`, loading weights and vocabularies from a
//! local directory or from the Hugging Face hub.

mod encoding;
#[cfg(feature = "pretrained")]
mod pretrained;
#[cfg(feature = "pretrained")]
mod resources;

pub use encoding::EncodedBatch;
#[cfg(feature = "pretrained")]
pub use pretrained::{ModelKind, PretrainedRuntime};
#[cfg(feature = "pretrained")]
pub use resources::ModelResources;

use crate::common::error::TranslatorError;
use crate::translation::Language;
use serde::{Deserialize, Serialize};

/// # Options for the tokenization step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizeOptions {
    /// Source language tag the tokenizer should mark the inputs with (multilingual models)
    pub source_language: Option<Language>,
    /// Pad the sequences of the batch to the longest one
    pub padding: bool,
}

/// # Per-call options for the generation step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Token the decoder is forced to emit first (e.g. the target language tag)
    pub forced_bos_token_id: Option<i64>,
}

/// # Generation settings applied when the runtime is loaded
/// Sampling is never enabled: for a given model and input the output is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Number of beams for beam search (default: 4)
    pub num_beams: i64,
    /// Maximum sequence length (default: 512)
    pub max_length: Option<i64>,
    /// Minimum sequence length (default: 0)
    pub min_length: i64,
    /// Stop the beam search as soon as `num_beams` hypotheses are complete (default: true)
    pub early_stopping: bool,
    /// Size of n-grams that cannot be repeated, 0 to disable (default: 0)
    pub no_repeat_ngram_size: i64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        GenerationSettings {
            num_beams: 4,
            max_length: Some(512),
            min_length: 0,
            early_stopping: true,
            no_repeat_ngram_size: 0,
        }
    }
}

/// # Tokenizer and sequence-to-sequence generator of a pretrained model
pub trait ModelRuntime {
    /// Tokenizes a batch of texts.
    ///
    /// # Arguments
    ///
    /// * `texts` - inputs, in batch order
    /// * `options` - `TokenizeOptions` (source language tag, padding)
    fn tokenize(
        &self,
        texts: &[&str],
        options: &TokenizeOptions,
    ) -> Result<EncodedBatch, TranslatorError>;

    /// Generates one output token sequence per row of the batch, in row order.
    fn generate(
        &self,
        batch: &EncodedBatch,
        options: &GenerateOptions,
    ) -> Result<Vec<Vec<i64>>, TranslatorError>;

    /// Converts token ids back to text.
    fn decode(&self, token_ids: &[i64], skip_special_tokens: bool)
        -> Result<String, TranslatorError>;

    /// Vocabulary id of the token marking `language`.
    fn language_token_id(&self, language: Language) -> Result<i64, TranslatorError>;
}

impl<R: ModelRuntime + ?Sized> ModelRuntime for &R {
    fn tokenize(
        &self,
        texts: &[&str],
        options: &TokenizeOptions,
    ) -> Result<EncodedBatch, TranslatorError> {
        (**self).tokenize(texts, options)
    }

    fn generate(
        &self,
        batch: &EncodedBatch,
        options: &GenerateOptions,
    ) -> Result<Vec<Vec<i64>>, TranslatorError> {
        (**self).generate(batch, options)
    }

    fn decode(
        &self,
        token_ids: &[i64],
        skip_special_tokens: bool,
    ) -> Result<String, TranslatorError> {
        (**self).decode(token_ids, skip_special_tokens)
    }

    fn language_token_id(&self, language: Language) -> Result<i64, TranslatorError> {
        (**self).language_token_id(language)
    }
}

impl<R: ModelRuntime + ?Sized> ModelRuntime for Box<R> {
    fn tokenize(
        &self,
        texts: &[&str],
        options: &TokenizeOptions,
    ) -> Result<EncodedBatch, TranslatorError> {
        (**self).tokenize(texts, options)
    }

    fn generate(
        &self,
        batch: &EncodedBatch,
        options: &GenerateOptions,
    ) -> Result<Vec<Vec<i64>>, TranslatorError> {
        (**self).generate(batch, options)
    }

    fn decode(
        &self,
        token_ids: &[i64],
        skip_special_tokens: bool,
    ) -> Result<String, TranslatorError> {
        (**self).decode(token_ids, skip_special_tokens)
    }

    fn language_token_id(&self, language: Language) -> Result<i64, TranslatorError> {
        (**self).language_token_id(language)
    }
}
