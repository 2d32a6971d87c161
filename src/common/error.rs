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

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error("Endpoint not available error: {0}")]
    FileDownloadError(String),

    #[error("IO error: {0}")]
    IOError(String),

    #[error("Tch tensor error: {0}")]
    TchError(String),

    #[error("Tokenizer error: {0}")]
    TokenizerError(String),

    #[error("Invalid configuration error: {0}")]
    InvalidConfigurationError(String),

    #[error("Value error: {0}")]
    ValueError(String),

    #[error("Key error: {0}")]
    KeyError(String),

    #[error("CSV error: {0}")]
    CsvError(String),

    #[error("Model runtime error: {0}")]
    RuntimeError(String),
}

impl From<std::io::Error> for TranslatorError {
    fn from(error: std::io::Error) -> Self {
        TranslatorError::IOError(error.to_string())
    }
}

impl From<csv::Error> for TranslatorError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_error) => TranslatorError::IOError(io_error.to_string()),
            _ => TranslatorError::CsvError(error.to_string()),
        }
    }
}

impl From<serde_json::Error> for TranslatorError {
    fn from(error: serde_json::Error) -> Self {
        TranslatorError::InvalidConfigurationError(error.to_string())
    }
}

#[cfg(feature = "pretrained")]
impl From<rust_bert::RustBertError> for TranslatorError {
    fn from(error: rust_bert::RustBertError) -> Self {
        use rust_bert::RustBertError;
        match error {
            RustBertError::FileDownloadError(message) => {
                TranslatorError::FileDownloadError(message)
            }
            RustBertError::IOError(message) => TranslatorError::IOError(message),
            RustBertError::TchError(message) => TranslatorError::TchError(message),
            RustBertError::TokenizerError(message) => TranslatorError::TokenizerError(message),
            RustBertError::InvalidConfigurationError(message) => {
                TranslatorError::InvalidConfigurationError(message)
            }
            RustBertError::ValueError(message) => TranslatorError::ValueError(message),
            #[allow(unreachable_patterns)]
            other => TranslatorError::RuntimeError(other.to_string()),
        }
    }
}

#[cfg(feature = "pretrained")]
impl From<rust_tokenizers::error::TokenizerError> for TranslatorError {
    fn from(error: rust_tokenizers::error::TokenizerError) -> Self {
        TranslatorError::TokenizerError(error.to_string())
    }
}

#[cfg(feature = "pretrained")]
impl From<tch::TchError> for TranslatorError {
    fn from(error: tch::TchError) -> Self {
        TranslatorError::TchError(error.to_string())
    }
}
