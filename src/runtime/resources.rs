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

use crate::runtime::ModelKind;
use rust_bert::resources::{LocalResource, RemoteResource, ResourceProvider};
use std::path::Path;

const HUB_URL: &str = "https://huggingface.co";

/// # Files needed to load a pretrained translation model
/// A model identifier is either a local directory holding the files, or the name of a
/// Hugging Face hub repository (e.g. `Helsinki-NLP/opus-mt-ja-en`). Remote files are
/// downloaded on first use and cached under `RUSTBERT_CACHE` (or the user cache directory).
pub struct ModelResources {
    /// Model weights (`rust_model.ot`)
    pub model: Box<dyn ResourceProvider + Send>,
    /// Model configuration (`config.json`)
    pub config: Box<dyn ResourceProvider + Send>,
    /// Vocabulary (`vocab.json` for Marian, `sentencepiece.bpe.model` for mBART-50)
    pub vocab: Box<dyn ResourceProvider + Send>,
    /// Source SentencePiece model (Marian only, `source.spm`)
    pub sentence_piece: Option<Box<dyn ResourceProvider + Send>>,
}

impl ModelResources {
    /// Resolves the resources of a model identifier
    ///
    /// # Arguments
    ///
    /// * `kind` - `ModelKind` determining the expected vocabulary files
    /// * `model_name` - local directory or Hugging Face hub repository name
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rust_mt::runtime::{ModelKind, ModelResources};
    ///
    /// let resources = ModelResources::resolve(ModelKind::Marian, "Helsinki-NLP/opus-mt-ja-en");
    /// ```
    pub fn resolve(kind: ModelKind, model_name: &str) -> ModelResources {
        let local = Path::new(model_name).is_dir();
        let resource = |file_name: &str, label: &str| -> Box<dyn ResourceProvider + Send> {
            if local {
                Box::new(LocalResource {
                    local_path: Path::new(model_name).join(file_name),
                })
            } else {
                Box::new(RemoteResource::from_pretrained((
                    format!("{}/{}", model_name.replace('/', "--"), label).as_str(),
                    format!("{}/{}/resolve/main/{}", HUB_URL, model_name, file_name).as_str(),
                )))
            }
        };

        match kind {
            ModelKind::Marian => ModelResources {
                model: resource("rust_model.ot", "model"),
                config: resource("config.json", "config"),
                vocab: resource("vocab.json", "vocab"),
                sentence_piece: Some(resource("source.spm", "spiece")),
            },
            ModelKind::MBart50 => ModelResources {
                model: resource("rust_model.ot", "model"),
                config: resource("config.json", "config"),
                vocab: resource("sentencepiece.bpe.model", "vocab"),
                sentence_piece: None,
            },
        }
    }
}
