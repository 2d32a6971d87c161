//! # Machine translation wrappers for tabular data
//!
//! Translation of single texts and of whole table columns with pretrained sequence-to-sequence
//! models. Two translators are provided:
//! - `SingleModelTranslator`: multilingual mBART-50 model, the source and target languages are
//! given by language tags (Japanese to English by default). Translated tables can be exported
//! to CSV with `save_csv`.
//! - `PairModelTranslator`: bilingual Opus-MT model (Japanese to English by default). Besides
//! row-by-row translation, a whole column can be translated in a single batched call with
//! `bulk_translate`.
//!
//! Both translators get their tokenizer and generator from a `ModelRuntime` passed at
//! construction. The `pretrained` feature enables `PretrainedRuntime`, which loads the models
//! with `rust-bert` (requires libtorch, see the `tch` crate for installation instructions).
//!
//! ```no_run
//! # #[cfg(feature = "pretrained")]
//! # fn main() -> anyhow::Result<()> {
//! use rust_mt::frame::{Column, DataFrame};
//! use rust_mt::translation::{SingleModelTranslator, Translate};
//! use tch::Device;
//!
//! let translator =
//!     SingleModelTranslator::from_pretrained(Default::default(), Device::cuda_if_available())?;
//!
//! let mut data = DataFrame::from_columns(vec![Column::new(
//!     "text",
//!     vec!["加藤産業㈱阪神支店ﾘﾍﾞｰﾄ3月", "adsa"],
//! )])?;
//! let translations = translator.column_translate(&data, "text")?;
//! data.push_column(Column::new("translation", translations))?;
//! translator.save_csv(&data)?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "pretrained"))]
//! # fn main() {}
//! ```
//!
//! Tests exercising the real checkpoints download several GB of weights and are ignored unless
//! the `all-tests` feature is enabled.

pub mod common;
pub mod frame;
pub mod runtime;
pub mod translation;

pub use common::error::TranslatorError;
pub use common::Config;
