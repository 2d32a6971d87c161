#![allow(dead_code)]

use rust_mt::runtime::{EncodedBatch, GenerateOptions, ModelRuntime, TokenizeOptions};
use rust_mt::translation::{Language, Translate};
use rust_mt::TranslatorError;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Routes the library events to the test output, filtered by `RUST_LOG`
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub const PAD_TOKEN_ID: i64 = 0;
pub const EOS_TOKEN_ID: i64 = 1;
const LANGUAGE_TOKEN_OFFSET: i64 = 1000;
const WORD_TOKEN_OFFSET: i64 = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeCall {
    Tokenize {
        texts: Vec<String>,
        options: TokenizeOptions,
    },
    Generate {
        batch: EncodedBatch,
        options: GenerateOptions,
    },
    Decode {
        token_ids: Vec<i64>,
    },
}

/// Deterministic word-level runtime: a translation capitalizes every word of the input.
/// Every call is recorded so that tests can check how the translators drive the runtime.
#[derive(Default)]
pub struct FakeRuntime {
    vocabulary: Mutex<Vec<String>>,
    calls: Mutex<Vec<RuntimeCall>>,
    language_tokens: bool,
    drop_last_output: bool,
}

impl FakeRuntime {
    /// Runtime of a multilingual model, with language tokens
    pub fn multilingual() -> FakeRuntime {
        FakeRuntime {
            language_tokens: true,
            ..Default::default()
        }
    }

    /// Runtime of a bilingual model, without language tokens
    pub fn bilingual() -> FakeRuntime {
        FakeRuntime::default()
    }

    /// Generation returns one sequence less than the batch size
    pub fn dropping_last_output(mut self) -> FakeRuntime {
        self.drop_last_output = true;
        self
    }

    pub fn calls(&self) -> Vec<RuntimeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn tokenize_calls(&self) -> Vec<(Vec<String>, TokenizeOptions)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RuntimeCall::Tokenize { texts, options } => Some((texts, options)),
                _ => None,
            })
            .collect()
    }

    pub fn generate_calls(&self) -> Vec<(EncodedBatch, GenerateOptions)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RuntimeCall::Generate { batch, options } => Some((batch, options)),
                _ => None,
            })
            .collect()
    }

    pub fn language_token(language: Language) -> i64 {
        let position = Language::all()
            .position(|candidate| candidate == language)
            .unwrap();
        LANGUAGE_TOKEN_OFFSET + position as i64
    }

    fn word_id(&self, word: &str) -> i64 {
        let mut vocabulary = self.vocabulary.lock().unwrap();
        let position = match vocabulary.iter().position(|entry| entry == word) {
            Some(position) => position,
            None => {
                vocabulary.push(word.to_string());
                vocabulary.len() - 1
            }
        };
        WORD_TOKEN_OFFSET + position as i64
    }

    fn record(&self, call: RuntimeCall) {
        self.calls.lock().unwrap().push(call);
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl ModelRuntime for FakeRuntime {
    fn tokenize(
        &self,
        texts: &[&str],
        options: &TokenizeOptions,
    ) -> Result<EncodedBatch, TranslatorError> {
        self.record(RuntimeCall::Tokenize {
            texts: texts.iter().map(|text| text.to_string()).collect(),
            options: *options,
        });
        let sequences = texts
            .iter()
            .map(|text| -> Result<Vec<i64>, TranslatorError> {
                let mut ids = Vec::new();
                if let Some(language) = options.source_language {
                    ids.push(self.language_token_id(language)?);
                }
                ids.extend(text.split_whitespace().map(|word| self.word_id(word)));
                ids.push(EOS_TOKEN_ID);
                Ok(ids)
            })
            .collect::<Result<Vec<_>, _>>()?;
        EncodedBatch::new(sequences, PAD_TOKEN_ID, options.padding)
    }

    fn generate(
        &self,
        batch: &EncodedBatch,
        options: &GenerateOptions,
    ) -> Result<Vec<Vec<i64>>, TranslatorError> {
        self.record(RuntimeCall::Generate {
            batch: batch.clone(),
            options: *options,
        });
        let mut outputs = (0..batch.len())
            .map(|row| {
                let mut output = vec![options.forced_bos_token_id.unwrap_or(EOS_TOKEN_ID)];
                output.extend(
                    batch
                        .unpadded(row)
                        .unwrap_or_default()
                        .iter()
                        .filter(|&&id| id >= WORD_TOKEN_OFFSET),
                );
                output.push(EOS_TOKEN_ID);
                output
            })
            .collect::<Vec<Vec<i64>>>();
        if self.drop_last_output {
            outputs.pop();
        }
        Ok(outputs)
    }

    fn decode(
        &self,
        token_ids: &[i64],
        skip_special_tokens: bool,
    ) -> Result<String, TranslatorError> {
        self.record(RuntimeCall::Decode {
            token_ids: token_ids.to_vec(),
        });
        let vocabulary = self.vocabulary.lock().unwrap();
        let words = token_ids
            .iter()
            .filter_map(|&id| {
                if id >= WORD_TOKEN_OFFSET {
                    Some(capitalize(&vocabulary[(id - WORD_TOKEN_OFFSET) as usize]))
                } else if skip_special_tokens {
                    None
                } else {
                    Some(format!("<{}>", id))
                }
            })
            .collect::<Vec<String>>();
        Ok(words.join(" "))
    }

    fn language_token_id(&self, language: Language) -> Result<i64, TranslatorError> {
        if self.language_tokens {
            Ok(FakeRuntime::language_token(language))
        } else {
            Err(TranslatorError::InvalidConfigurationError(format!(
                "no token for {}",
                language
            )))
        }
    }
}

/// `Translate` double returning a canned answer and recording its inputs
pub struct RecordingTranslator {
    pub inputs: Mutex<Vec<String>>,
    pub fail_on: Option<String>,
}

impl RecordingTranslator {
    pub fn new() -> RecordingTranslator {
        RecordingTranslator {
            inputs: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    pub fn failing_on(text: &str) -> RecordingTranslator {
        RecordingTranslator {
            inputs: Mutex::new(Vec::new()),
            fail_on: Some(text.to_string()),
        }
    }

    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }
}

impl Translate for RecordingTranslator {
    fn translate(&self, text: &str) -> Result<String, TranslatorError> {
        self.inputs.lock().unwrap().push(text.to_string());
        if self.fail_on.as_deref() == Some(text) {
            return Err(TranslatorError::RuntimeError(format!("cannot translate {}", text)));
        }
        Ok(format!("translated: {}", text))
    }
}
