/*
 * Copyright 2019 Constantin A. <emoji.builder@c1710.de>
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
//! Lookup, search and rendering-support tables over the `emoji-datasource`
//! dataset: short name to character conversion, skin tone resolution,
//! fuzzy search, emoji counting for adaptive sizing and sprite preloading.
//!
//! All tables are built once from the dataset and are immutable afterwards.
//! The crate ships with an embedded dataset; [index::emoji_index::EmojiIndex::from_file]
//! and [index::emoji_index::EmojiIndex::from_reader] accept replacement datasets
//! in the same JSON format.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// The data structs for single emojis, skin tones and display categories
pub mod emojis;
/// The lookup tables built from the dataset and all point queries on them
pub mod index;
/// Sprite image path resolution and the bounded-concurrency preloader
pub mod images;
/// Fuzzy search over emoji names and short names
pub mod search;
/// Emoji counting and the size classes used for adaptive message rendering
pub mod sizing;

use std::path::PathBuf;

use crate::emojis::emoji::Emoji;
use crate::emojis::skin_tone::SkinTone;
use crate::index::emoji_index::EmojiIndex;
use crate::sizing::SizeClass;

pub use crate::emojis::emoji::unified_to_emoji;

lazy_static! {
    static ref DEFAULT_INDEX: EmojiIndex = EmojiIndex::embedded();
}

/// The process-wide index built from the embedded dataset.
/// Built on first use and kept for the process lifetime.
pub fn default_index() -> &'static EmojiIndex {
    &DEFAULT_INDEX
}

/// Converts a short name (with an optional skin tone) to the emoji character.
/// Unknown short names convert to the empty string.
/// # Examples
/// ```
/// use emoji_index::convert_short_name;
///
/// assert_eq!(convert_short_name("thinking_face", None), "🤔");
/// assert_eq!(convert_short_name("not_an_emoji", None), "");
/// ```
pub fn convert_short_name(short_name: &str, tone: Option<SkinTone>) -> String {
    default_index()
        .emoji(short_name, tone)
        .unwrap_or_default()
}

/// Resolves a short name (with an optional skin tone) to a full record,
/// with the variation's fields merged over the base record.
pub fn convert_short_name_to_record(short_name: &str, tone: Option<SkinTone>) -> Option<Emoji> {
    default_index()
        .resolve(short_name, tone)
        .map(|resolved| resolved.merged())
}

/// Whether the given name is a known short name (including aliases).
pub fn is_short_name(name: &str) -> bool {
    default_index().is_short_name(name)
}

/// The sprite path for a short name under the default image root.
pub fn image_path(short_name: &str, tone: Option<SkinTone>) -> Option<PathBuf> {
    let locator = images::ImageLocator::default();
    default_index()
        .resolve(short_name, tone)
        .map(|resolved| locator.path_for(resolved.image()))
}

/// The sprite path for a rendered emoji character under the default image root.
pub fn emoji_to_image(character: &str) -> Option<PathBuf> {
    let locator = images::ImageLocator::default();
    default_index()
        .image_for_character(character)
        .map(|image| locator.path_for(image))
}

/// The record behind a rendered emoji character (skin tone variations
/// resolve to their base record).
pub fn emoji_to_record(character: &str) -> Option<&'static Emoji> {
    default_index().record_for_character(character)
}

/// Fuzzy-searches emoji by name and short name.
/// `limit == 0` returns all matches.
pub fn search(query: &str, limit: usize) -> Vec<&'static Emoji> {
    search::search(default_index(), query, limit)
}

/// Counts the emoji grapheme clusters in a string.
pub fn emoji_count(text: &str) -> usize {
    sizing::emoji_count(default_index(), text)
}

/// The size class for a message consisting only of emoji.
/// # Examples
/// ```
/// use emoji_index::size_class;
/// use emoji_index::sizing::SizeClass;
///
/// assert_eq!(size_class("🤔"), SizeClass::Max);
/// assert_eq!(size_class("🤔 hello"), SizeClass::None);
/// ```
pub fn size_class(text: &str) -> SizeClass {
    sizing::size_class(default_index(), text)
}

#[cfg(test)]
mod tests;
