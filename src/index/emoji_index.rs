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
//! The read-only lookup tables over a prepared dataset and the point
//! queries the messaging UI needs: by short name, by rendered character
//! and by display category.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bimap::BiHashMap;
use itertools::Itertools;

use crate::emojis::category::Category;
use crate::emojis::emoji::{unified_to_emoji, Emoji, SkinVariation};
use crate::emojis::skin_tone::SkinTone;
use crate::index::dataset;
use crate::index::errors::DatasetError;

/// Immutable lookup tables over one dataset, built in a single pass.
///
/// Records are stored once; all tables index into that storage. Besides the
/// primary short name, every alias, every skin tone variation and every
/// non-qualified spelling resolves to its record.
#[derive(Debug)]
pub struct EmojiIndex {
    records: Vec<Emoji>,
    by_short_name: HashMap<String, usize>,
    by_character: HashMap<String, usize>,
    image_by_character: HashMap<String, String>,
    /// fully-qualified ↔ non-qualified sequence spellings
    sequence_forms: BiHashMap<String, String>,
    by_category: HashMap<Category, Vec<usize>>,
}

/// A short name resolved against the index, carrying the base record and
/// (if one was requested and exists) the skin tone variation.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedEmoji<'a> {
    record: &'a Emoji,
    variation: Option<&'a SkinVariation>,
}

impl EmojiIndex {
    /// Builds the index from already-parsed dataset records.
    pub fn new(records: Vec<Emoji>) -> Self {
        let mut index = EmojiIndex {
            records,
            by_short_name: HashMap::new(),
            by_character: HashMap::new(),
            image_by_character: HashMap::new(),
            sequence_forms: BiHashMap::new(),
            by_category: HashMap::new(),
        };
        index.build();
        index
    }

    /// The index for the dataset the crate ships with.
    pub fn embedded() -> Self {
        Self::new(dataset::embedded())
    }

    /// Reads and indexes a dataset in the `emoji-datasource` JSON format.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        Ok(Self::new(dataset::from_reader(reader)?))
    }

    /// Reads and indexes a dataset file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn build(&mut self) {
        for (position, emoji) in self.records.iter().enumerate() {
            self.by_short_name
                .insert(emoji.short_name.clone(), position);
            for alias in &emoji.short_names {
                self.by_short_name.insert(alias.clone(), position);
            }

            let character = emoji.character();
            self.image_by_character
                .insert(character.clone(), emoji.image.clone());
            self.by_character.insert(character, position);

            if let Some(non_qualified) = &emoji.non_qualified {
                let spelling = unified_to_emoji(non_qualified);
                self.image_by_character
                    .insert(spelling.clone(), emoji.image.clone());
                self.by_character.insert(spelling, position);
                self.sequence_forms
                    .insert(emoji.unified.clone(), non_qualified.clone());
            }

            if let Some(variations) = &emoji.skin_variations {
                for variation in variations.values() {
                    let character = unified_to_emoji(&variation.unified);
                    self.image_by_character
                        .insert(character.clone(), variation.image.clone());
                    self.by_character.insert(character, position);
                }
            }

            let category = Category::from_dataset(&emoji.category);
            self.by_category.entry(category).or_default().push(position);
        }

        let records = &self.records;
        for positions in self.by_category.values_mut() {
            positions.sort_by_key(|position| records[*position].sort_order);
        }

        info!(
            "indexed {} emojis ({} short names, {} characters)",
            self.records.len(),
            self.by_short_name.len(),
            self.by_character.len()
        );
    }

    /// The base record for a short name or one of its aliases.
    /// # Examples
    /// ```
    /// use emoji_index::default_index;
    ///
    /// let index = default_index();
    /// assert_eq!(index.get("thumbsup"), index.get("+1"));
    /// assert!(index.get("no_such_emoji").is_none());
    /// ```
    pub fn get(&self, short_name: &str) -> Option<&Emoji> {
        self.by_short_name
            .get(short_name)
            .map(|position| &self.records[*position])
    }

    /// Resolves a short name with an optional skin tone. A requested tone
    /// without a matching variation resolves to the base record.
    pub fn resolve(&self, short_name: &str, tone: Option<SkinTone>) -> Option<ResolvedEmoji> {
        let record = self.get(short_name)?;
        let variation = tone.and_then(|tone| record.variation(tone));
        Some(ResolvedEmoji { record, variation })
    }

    /// The rendered character for a short name with an optional skin tone.
    pub fn emoji(&self, short_name: &str, tone: Option<SkinTone>) -> Option<String> {
        self.resolve(short_name, tone)
            .map(|resolved| resolved.character())
    }

    /// Whether the given name is a known short name (including aliases).
    pub fn is_short_name(&self, name: &str) -> bool {
        self.by_short_name.contains_key(name)
    }

    /// The record behind a rendered character. Skin tone variations and
    /// non-qualified spellings resolve to their base record.
    pub fn record_for_character(&self, character: &str) -> Option<&Emoji> {
        self.by_character
            .get(character)
            .map(|position| &self.records[*position])
    }

    /// The sprite file name behind a rendered character.
    pub fn image_for_character(&self, character: &str) -> Option<&str> {
        self.image_by_character
            .get(character)
            .map(String::as_str)
    }

    /// The fully-qualified spelling for a non-qualified sequence.
    pub fn qualified_form(&self, sequence: &str) -> Option<&str> {
        self.sequence_forms
            .get_by_right(sequence)
            .map(String::as_str)
    }

    /// The non-qualified spelling for a fully-qualified sequence, where the
    /// dataset records one.
    pub fn non_qualified_form(&self, sequence: &str) -> Option<&str> {
        self.sequence_forms
            .get_by_left(sequence)
            .map(String::as_str)
    }

    /// All records of a display category, sorted by the adjusted dataset
    /// order.
    pub fn by_category(&self, category: Category) -> Vec<&Emoji> {
        match self.by_category.get(&category) {
            Some(positions) => positions
                .iter()
                .map(|position| &self.records[*position])
                .collect(),
            None => Vec::new(),
        }
    }

    /// All records, in dataset order.
    pub fn records(&self) -> impl Iterator<Item = &Emoji> {
        self.records.iter()
    }

    /// Every sprite file name the index knows: one per record plus one per
    /// skin tone variation. This is the preloader's work list.
    pub fn sprite_images(&self) -> Vec<&str> {
        self.records
            .iter()
            .flat_map(|emoji| {
                let variations = emoji
                    .skin_variations
                    .iter()
                    .flat_map(|variations| variations.values())
                    .map(|variation| variation.image.as_str());
                std::iter::once(emoji.image.as_str()).chain(variations)
            })
            .sorted()
            .dedup()
            .collect()
    }

    /// The number of indexed records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ResolvedEmoji<'_> {
    /// The base record.
    pub fn record(&self) -> &Emoji {
        self.record
    }

    /// The variation, if a tone was requested and the record has one.
    pub fn variation(&self) -> Option<&SkinVariation> {
        self.variation
    }

    /// The effective codepoint sequence (the variation's, if any).
    pub fn unified(&self) -> &str {
        match self.variation {
            Some(variation) => &variation.unified,
            None => &self.record.unified,
        }
    }

    /// The effective sprite file name.
    pub fn image(&self) -> &str {
        match self.variation {
            Some(variation) => &variation.image,
            None => &self.record.image,
        }
    }

    /// The effective sprite sheet coordinates.
    pub fn sheet(&self) -> (u32, u32) {
        match self.variation {
            Some(variation) => (variation.sheet_x, variation.sheet_y),
            None => (self.record.sheet_x, self.record.sheet_y),
        }
    }

    /// The rendered character.
    pub fn character(&self) -> String {
        unified_to_emoji(self.unified())
    }

    /// An owned record with the variation's fields merged over the base.
    pub fn merged(&self) -> Emoji {
        match self.variation {
            Some(variation) => self.record.with_variation(variation),
            None => self.record.clone(),
        }
    }
}
