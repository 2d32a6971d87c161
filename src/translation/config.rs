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

use crate::common::Config;
use crate::runtime::GenerationSettings;
use crate::translation::Language;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default multilingual checkpoint
pub const MBART50_MANY_TO_MANY: &str = "facebook/mbart-large-50-many-to-many-mmt";
/// Default bilingual checkpoint
pub const OPUS_MT_JA_EN: &str = "Helsinki-NLP/opus-mt-ja-en";
/// Default CSV export location
pub const DEFAULT_OUTPUT_PATH: &str = "trial.csv";

/// # Configuration for the multilingual single-model translator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleModelConfig {
    /// Model identifier: hub repository name or local directory (default: mBART-50 many-to-many)
    pub model_name: String,
    /// Language tag of the inputs (default: `ja_XX`)
    pub source_language: Language,
    /// Language tag forced as first generated token (default: `en_XX`)
    pub target_language: Language,
    /// Destination of `save_csv` (default: `trial.csv`)
    pub output_path: PathBuf,
    /// Write the row index as first CSV column (default: false)
    pub include_index: bool,
    /// Beam search settings used when loading a pretrained runtime
    pub generation: GenerationSettings,
}

impl Default for SingleModelConfig {
    fn default() -> Self {
        SingleModelConfig {
            model_name: MBART50_MANY_TO_MANY.to_string(),
            source_language: Language::Japanese,
            target_language: Language::English,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            include_index: false,
            generation: GenerationSettings::default(),
        }
    }
}

impl Config for SingleModelConfig {}

/// # Configuration for the bilingual pair-model translator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairModelConfig {
    /// Model identifier: hub repository name or local directory (default: Opus-MT Japanese to English)
    pub model_name: String,
    /// Beam search settings used when loading a pretrained runtime
    pub generation: GenerationSettings,
}

impl Default for PairModelConfig {
    fn default() -> Self {
        PairModelConfig {
            model_name: OPUS_MT_JA_EN.to_string(),
            generation: GenerationSettings::default(),
        }
    }
}

impl Config for PairModelConfig {}
