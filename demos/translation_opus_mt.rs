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

extern crate anyhow;

use rust_mt::frame::{Column, DataFrame};
use rust_mt::translation::{PairModelConfig, PairModelTranslator, Translate};
use tch::Device;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let translator =
        PairModelTranslator::from_pretrained(PairModelConfig::default(), Device::cuda_if_available())?;

    let input_context_1 = "今日はいい天気ですね。";
    let input_context_2 = "加藤産業㈱阪神支店ﾘﾍﾞｰﾄ3月";
    println!("{}", translator.translate(input_context_1)?);

    let data = DataFrame::from_columns(vec![Column::new(
        "text",
        vec![input_context_1, input_context_2],
    )])?;
    let output = translator.bulk_translate(&data, "text")?;

    for sentence in output {
        println!("{}", sentence);
    }
    Ok(())
}
