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

/// # Batch of tokenized sequences ready for generation
/// Rows are right-padded with the pad token to the length of the longest sequence. The
/// attention mask is 1 for real tokens and 0 for padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBatch {
    input_ids: Vec<Vec<i64>>,
    attention_mask: Vec<Vec<i64>>,
}

impl EncodedBatch {
    /// Builds a batch from token id sequences
    ///
    /// # Arguments
    ///
    /// * `sequences` - token ids for each input, in input order
    /// * `pad_token_id` - id used to fill shorter sequences
    /// * `padding` - if false, all sequences must already have the same length
    ///
    /// # Returns
    ///
    /// * `Result<EncodedBatch, TranslatorError>` - `ValueError` if padding is disabled and lengths differ
    pub fn new(
        sequences: Vec<Vec<i64>>,
        pad_token_id: i64,
        padding: bool,
    ) -> Result<EncodedBatch, TranslatorError> {
        let max_len = sequences.iter().map(Vec::len).max().unwrap_or(0);
        if !padding && sequences.iter().any(|sequence| sequence.len() != max_len) {
            return Err(TranslatorError::ValueError(
                "Unable to create a batch from sequences of different lengths, \
                 activate padding to encode them together"
                    .to_string(),
            ));
        }

        let mut input_ids = Vec::with_capacity(sequences.len());
        let mut attention_mask = Vec::with_capacity(sequences.len());
        for mut sequence in sequences {
            let length = sequence.len();
            let mut mask = vec![1; length];
            mask.extend(vec![0; max_len - length]);
            sequence.extend(vec![pad_token_id; max_len - length]);
            input_ids.push(sequence);
            attention_mask.push(mask);
        }

        Ok(EncodedBatch {
            input_ids,
            attention_mask,
        })
    }

    pub fn input_ids(&self) -> &[Vec<i64>] {
        &self.input_ids
    }

    pub fn attention_mask(&self) -> &[Vec<i64>] {
        &self.attention_mask
    }

    /// Number of sequences in the batch
    pub fn len(&self) -> usize {
        self.input_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input_ids.is_empty()
    }

    /// Padded length shared by all rows
    pub fn sequence_length(&self) -> usize {
        self.input_ids.first().map_or(0, Vec::len)
    }

    /// Token ids of a row without its padding
    pub fn unpadded(&self, row: usize) -> Option<&[i64]> {
        let ids = self.input_ids.get(row)?;
        let length = self.attention_mask[row].iter().filter(|&&m| m == 1).count();
        Some(&ids[..length])
    }
}
