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

//! # Translators
//!
//! Two interchangeable translators built on a `ModelRuntime`:
//! - `SingleModelTranslator`: multilingual encoder-decoder (mBART-50 by default) with source and
//! target language tags fixed at construction. Offers `translate`, `column_translate` and `save_csv`.
//! - `PairModelTranslator`: bilingual model (Opus-MT Japanese to English by default) whose language
//! pair is fixed by the checkpoint. Offers `translate`, `column_translate` and `bulk_translate`.
//!
//! `column_translate` issues one model call per row; `bulk_translate` encodes the whole column
//! as one padded batch and performs a single call, returning the outputs in input order.
//!
//! ```no_run
//! # #[cfg(feature = "pretrained")]
//! # fn main() -> anyhow::Result<()> {
//! use rust_mt::frame::{Column, DataFrame};
//! use rust_mt::translation::{PairModelTranslator, Translate};
//! use tch::Device;
//!
//! let translator =
//!     PairModelTranslator::from_pretrained(Default::default(), Device::cuda_if_available())?;
//! let data = DataFrame::from_columns(vec![Column::new("text", vec!["adsa", "おはようございます"])])?;
//!
//! let row_by_row = translator.column_translate(&data, "text")?;
//! let batched = translator.bulk_translate(&data, "text")?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "pretrained"))]
//! # fn main() {}
//! ```

mod config;
mod language;
mod pair_model;
mod single_model;
mod translate;

pub use config::{
    PairModelConfig, SingleModelConfig, DEFAULT_OUTPUT_PATH, MBART50_MANY_TO_MANY, OPUS_MT_JA_EN,
};
pub use language::Language;
pub use pair_model::PairModelTranslator;
pub use single_model::SingleModelTranslator;
pub use translate::Translate;
