/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */
//! Parsing and preparation of `emoji-datasource` JSON files.
//!
//! Preparation drops records without an Apple sprite (they could not be
//! rendered anyway) and shifts `People & Body` behind `Smileys & Emotion`
//! so the merged picker group stays sorted.

use std::io::Read;

use crate::emojis::emoji::Emoji;
use crate::index::errors::DatasetError;

/// The dataset the crate ships with.
pub const EMBEDDED_DATASET: &str = include_str!("../../data/emoji.json");

/// The sort order shift applied to `People & Body` records. The dataset
/// numbers `Smileys & Emotion` and `People & Body` independently; the UI
/// merges both into one group, so the latter is pushed behind the former.
const PEOPLE_SORT_ORDER_SHIFT: u32 = 1000;

/// Parses a dataset from a reader and prepares it for indexing.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Emoji>, DatasetError> {
    let records: Vec<Emoji> = serde_json::from_reader(reader)?;
    Ok(prepare(records))
}

/// Parses the embedded dataset.
/// The asset is validated at build time, so a parse failure here is a
/// packaging bug and not a runtime condition.
pub(crate) fn embedded() -> Vec<Emoji> {
    let records: Vec<Emoji> =
        serde_json::from_str(EMBEDDED_DATASET).expect("embedded emoji dataset is valid JSON");
    prepare(records)
}

fn prepare(records: Vec<Emoji>) -> Vec<Emoji> {
    let total = records.len();
    let mut records: Vec<Emoji> = records
        .into_iter()
        .filter(|emoji| emoji.has_img_apple)
        .collect();
    if records.len() < total {
        debug!(
            "dropped {} dataset records without an Apple sprite",
            total - records.len()
        );
    }
    for emoji in &mut records {
        if emoji.category == "People & Body" {
            emoji.sort_order += PEOPLE_SORT_ORDER_SHIFT;
        }
    }
    records
}
