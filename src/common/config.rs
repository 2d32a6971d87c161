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
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// # Utility to deserialize JSON configuration files
pub trait Config
where
    for<'de> Self: Deserialize<'de>,
{
    /// Loads a `Config` object from a JSON file. The format is expected to be aligned with the
    /// field names of the implementing struct; missing fields fall back to their serde defaults.
    ///
    /// # Arguments
    ///
    /// * `path` - `Path` to the configuration JSON file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rust_mt::translation::SingleModelConfig;
    /// use rust_mt::Config;
    /// use std::path::Path;
    ///
    /// let config_path = Path::new("path/to/translator.json");
    /// let config = SingleModelConfig::from_file(config_path)?;
    /// # Ok::<(), rust_mt::TranslatorError>(())
    /// ```
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TranslatorError> {
        let f = File::open(path)?;
        let br = BufReader::new(f);
        let config: Self = serde_json::from_reader(br)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Debug, Deserialize)]
    struct DummyConfig {
        name: String,
        #[serde(default)]
        size: i64,
    }

    impl Config for DummyConfig {}

    #[test]
    fn load_from_file() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{"name": "dummy"}}"#)?;

        let config = DummyConfig::from_file(file.path())?;
        assert_eq!(config.name, "dummy");
        assert_eq!(config.size, 0);
        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = DummyConfig::from_file("this/file/does/not/exist.json").unwrap_err();
        assert!(matches!(error, TranslatorError::IOError(_)));
    }
}
