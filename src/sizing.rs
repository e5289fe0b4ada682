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
//! Emoji counting and the size classes used to render short all-emoji
//! messages larger than regular text.
//!
//! A grapheme cluster counts as an emoji iff the index knows its character
//! (base form, skin tone variation or non-qualified spelling). That is the
//! honest predicate for sizing: anything else would scale clusters the
//! client cannot display as emoji sprites anyway.

use unicode_segmentation::UnicodeSegmentation;

use crate::index::emoji_index::EmojiIndex;

/// How large an all-emoji message renders. Fewer emoji render larger.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SizeClass {
    /// Regular text size (mixed content, empty, or more than five emoji)
    None,
    /// Five emoji
    Small,
    /// Four emoji
    Medium,
    /// Three emoji
    Large,
    /// Two emoji
    ExtraLarge,
    /// A single emoji
    Max,
}

impl SizeClass {
    /// The CSS-ish class name the UI attaches, empty for [SizeClass::None].
    pub fn class_name(&self) -> &'static str {
        match self {
            SizeClass::None => "",
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
            SizeClass::ExtraLarge => "extra-large",
            SizeClass::Max => "max",
        }
    }
}

/// Counts the emoji grapheme clusters in a string.
/// # Examples
/// ```
/// use emoji_index::default_index;
/// use emoji_index::sizing::emoji_count;
///
/// assert_eq!(emoji_count(default_index(), "hello 🍕 world 🍔"), 2);
/// assert_eq!(emoji_count(default_index(), "no emoji here"), 0);
/// ```
pub fn emoji_count(index: &EmojiIndex, text: &str) -> usize {
    text.graphemes(true)
        .filter(|grapheme| index.record_for_character(grapheme).is_some())
        .count()
}

/// The size class for a string: 1 to 5 emoji and nothing but whitespace
/// around them map to [SizeClass::Max] down to [SizeClass::Small]; any
/// other content is [SizeClass::None].
pub fn size_class(index: &EmojiIndex, text: &str) -> SizeClass {
    let mut count = 0;
    for grapheme in text.graphemes(true) {
        if index.record_for_character(grapheme).is_some() {
            count += 1;
        } else if !grapheme.trim().is_empty() {
            // Non-emoji text keeps the regular size
            return SizeClass::None;
        }
    }
    match count {
        1 => SizeClass::Max,
        2 => SizeClass::ExtraLarge,
        3 => SizeClass::Large,
        4 => SizeClass::Medium,
        5 => SizeClass::Small,
        _ => SizeClass::None,
    }
}
