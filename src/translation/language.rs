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
use lazy_static::lazy_static;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

/// Language supported by the mBART-50 many-to-many model
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Language {
    Arabic,
    Czech,
    German,
    English,
    Spanish,
    Estonian,
    Finnish,
    French,
    Gujarati,
    Hindi,
    Italian,
    Japanese,
    Kazakh,
    Korean,
    Lithuanian,
    Latvian,
    Burmese,
    Nepali,
    Dutch,
    Romanian,
    Russian,
    Sinhala,
    Turkish,
    Vietnamese,
    ChineseMandarin,
    Afrikaans,
    Azerbaijani,
    Bengali,
    Farsi,
    Hebrew,
    Croatian,
    Indonesian,
    Georgian,
    CentralKhmer,
    Macedonian,
    Malayalam,
    Mongolian,
    Marathi,
    Polish,
    Pashto,
    Portuguese,
    Swedish,
    Swahili,
    Tamil,
    Telugu,
    Thai,
    Tagalog,
    Ukrainian,
    Urdu,
    Xhosa,
    Galician,
    Slovenian,
}

/// (language, mBART-50 tag, ISO 639-1 code)
static LANGUAGE_CODES: [(Language, &str, &str); 52] = [
    (Language::Arabic, "ar_AR", "ar"),
    (Language::Czech, "cs_CZ", "cs"),
    (Language::German, "de_DE", "de"),
    (Language::English, "en_XX", "en"),
    (Language::Spanish, "es_XX", "es"),
    (Language::Estonian, "et_EE", "et"),
    (Language::Finnish, "fi_FI", "fi"),
    (Language::French, "fr_XX", "fr"),
    (Language::Gujarati, "gu_IN", "gu"),
    (Language::Hindi, "hi_IN", "hi"),
    (Language::Italian, "it_IT", "it"),
    (Language::Japanese, "ja_XX", "ja"),
    (Language::Kazakh, "kk_KZ", "kk"),
    (Language::Korean, "ko_KR", "ko"),
    (Language::Lithuanian, "lt_LT", "lt"),
    (Language::Latvian, "lv_LV", "lv"),
    (Language::Burmese, "my_MM", "my"),
    (Language::Nepali, "ne_NP", "ne"),
    (Language::Dutch, "nl_XX", "nl"),
    (Language::Romanian, "ro_RO", "ro"),
    (Language::Russian, "ru_RU", "ru"),
    (Language::Sinhala, "si_LK", "si"),
    (Language::Turkish, "tr_TR", "tr"),
    (Language::Vietnamese, "vi_VN", "vi"),
    (Language::ChineseMandarin, "zh_CN", "zh"),
    (Language::Afrikaans, "af_ZA", "af"),
    (Language::Azerbaijani, "az_AZ", "az"),
    (Language::Bengali, "bn_IN", "bn"),
    (Language::Farsi, "fa_IR", "fa"),
    (Language::Hebrew, "he_IL", "he"),
    (Language::Croatian, "hr_HR", "hr"),
    (Language::Indonesian, "id_ID", "id"),
    (Language::Georgian, "ka_GE", "ka"),
    (Language::CentralKhmer, "km_KH", "km"),
    (Language::Macedonian, "mk_MK", "mk"),
    (Language::Malayalam, "ml_IN", "ml"),
    (Language::Mongolian, "mn_MN", "mn"),
    (Language::Marathi, "mr_IN", "mr"),
    (Language::Polish, "pl_PL", "pl"),
    (Language::Pashto, "ps_AF", "ps"),
    (Language::Portuguese, "pt_XX", "pt"),
    (Language::Swedish, "sv_SE", "sv"),
    (Language::Swahili, "sw_KE", "sw"),
    (Language::Tamil, "ta_IN", "ta"),
    (Language::Telugu, "te_IN", "te"),
    (Language::Thai, "th_TH", "th"),
    (Language::Tagalog, "tl_XX", "tl"),
    (Language::Ukrainian, "uk_UA", "uk"),
    (Language::Urdu, "ur_PK", "ur"),
    (Language::Xhosa, "xh_ZA", "xh"),
    (Language::Galician, "gl_ES", "gl"),
    (Language::Slovenian, "sl_SI", "sl"),
];

lazy_static! {
    /// Both the mBART-50 tags and the ISO 639-1 codes, mapped to their language
    static ref LANGUAGE_LOOKUP: HashMap<&'static str, Language> = {
        let mut lookup = HashMap::with_capacity(2 * LANGUAGE_CODES.len());
        for (language, mbart50_code, iso_code) in LANGUAGE_CODES.iter() {
            lookup.insert(*mbart50_code, *language);
            lookup.insert(*iso_code, *language);
        }
        lookup
    };
}

impl Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", {
            let input_string = format!("{:?}", self);
            let mut output: Vec<&str> = Vec::new();
            let mut start: usize = 0;

            for (c_pos, c) in input_string.char_indices() {
                if c.is_uppercase() {
                    if start < c_pos {
                        output.push(&input_string[start..c_pos]);
                    }
                    start = c_pos;
                }
            }
            if start < input_string.len() {
                output.push(&input_string[start..]);
            }
            output.join(" ")
        })
    }
}

impl Language {
    fn codes(&self) -> (&'static str, &'static str) {
        LANGUAGE_CODES
            .iter()
            .find(|(language, _, _)| language == self)
            .map(|(_, mbart50_code, iso_code)| (*mbart50_code, *iso_code))
            .unwrap_or(("", ""))
    }

    /// Language tag understood by mBART-50 tokenizers, e.g. `ja_XX`
    pub fn mbart50_code(&self) -> &'static str {
        self.codes().0
    }

    pub fn iso_639_1_code(&self) -> &'static str {
        self.codes().1
    }

    /// All languages, in mBART-50 vocabulary order
    pub fn all() -> impl Iterator<Item = Language> {
        LANGUAGE_CODES.iter().map(|(language, _, _)| *language)
    }
}

impl FromStr for Language {
    type Err = TranslatorError;

    /// Parses either an mBART-50 tag (`ja_XX`) or an ISO 639-1 code (`ja`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LANGUAGE_LOOKUP.get(s).copied().ok_or_else(|| {
            TranslatorError::InvalidConfigurationError(format!(
                "{} is not a supported language code",
                s
            ))
        })
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.mbart50_code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Language::from_str(&code).map_err(de::Error::custom)
    }
}
