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
//! The main data structs for single emojis, matching the `emoji-datasource`
//! JSON record layout (snake_case field names are the dataset's own).

use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use itertools::Itertools;
use regex::Regex;
use serde::Deserialize;

use crate::emojis::skin_tone::SkinTone;

/// One record of the dataset: a single emoji or emoji sequence together
/// with its short names, sprite location and (optional) skin tone variations.
#[derive(Debug, Eq, Clone, Deserialize)]
pub struct Emoji {
    /// The Unicode® name, e.g. `THUMBS UP SIGN`
    pub name: String,
    /// The fully-qualified codepoint sequence as dash-delimited uppercase hex,
    /// e.g. `1F3F3-FE0F-200D-1F308`
    pub unified: String,
    /// The spelling without `FE0F`, where one exists
    #[serde(default)]
    pub non_qualified: Option<String>,
    /// The sprite file name, e.g. `1f44d.png`
    pub image: String,
    pub sheet_x: u32,
    pub sheet_y: u32,
    /// The primary short name, e.g. `+1`
    pub short_name: String,
    /// All short names, including the primary one
    #[serde(default)]
    pub short_names: Vec<String>,
    /// An ASCII rendition like `;)`, if the emoji has one
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub texts: Option<Vec<String>>,
    /// The dataset category, e.g. `Smileys & Emotion`
    pub category: String,
    /// The dataset's global ordering; adjusted at index build time so that
    /// the merged Smileys/People group stays sorted
    pub sort_order: u32,
    /// The emoji version this was added in, e.g. `12.0`
    #[serde(default)]
    pub added_in: String,
    pub has_img_apple: bool,
    #[serde(default)]
    pub has_img_google: bool,
    #[serde(default)]
    pub has_img_twitter: bool,
    #[serde(default)]
    pub has_img_facebook: bool,
    /// Skin tone variations, keyed by tone (`1F3FB`) or tone pair
    /// (`1F3FB-1F3FC`) for two-person emojis
    #[serde(default)]
    pub skin_variations: Option<HashMap<String, SkinVariation>>,
}

/// A skin tone variation of an [Emoji]. It carries its own codepoint
/// sequence and sprite location; everything else is inherited from the base.
#[derive(Debug, Eq, PartialEq, Clone, Deserialize)]
pub struct SkinVariation {
    pub unified: String,
    #[serde(default)]
    pub non_qualified: Option<String>,
    pub image: String,
    pub sheet_x: u32,
    pub sheet_y: u32,
    #[serde(default)]
    pub added_in: String,
    pub has_img_apple: bool,
    #[serde(default)]
    pub has_img_google: bool,
    #[serde(default)]
    pub has_img_twitter: bool,
    #[serde(default)]
    pub has_img_facebook: bool,
}

impl Emoji {
    /// The rendered emoji character (what ends up in a message).
    /// # Examples
    /// ```
    /// use emoji_index::default_index;
    ///
    /// let thinking = default_index().get("thinking_face").unwrap();
    /// assert_eq!(thinking.character(), "🤔");
    /// ```
    pub fn character(&self) -> String {
        unified_to_emoji(&self.unified)
    }

    /// The codepoint sequence decoded from [Emoji::unified].
    pub fn sequence(&self) -> Vec<u32> {
        parse_unified(&self.unified)
    }

    /// Looks up the variation for a single skin tone.
    /// Two-person emojis key their variations by tone pairs; a single
    /// requested tone `T` falls back to the `T-T` entry there.
    pub fn variation(&self, tone: SkinTone) -> Option<&SkinVariation> {
        let variations = self.skin_variations.as_ref()?;
        variations
            .get(tone.key())
            .or_else(|| variations.get(&tone.pair_key(tone)))
    }

    /// A copy of this record with the variation's fields (sequence, sprite
    /// location) merged over the base. Without a matching variation the
    /// base record is returned unchanged.
    pub fn with_tone(&self, tone: SkinTone) -> Emoji {
        match self.variation(tone) {
            Some(variation) => self.with_variation(variation),
            None => self.clone(),
        }
    }

    /// A copy of this record with the given variation's fields merged over
    /// the base.
    pub fn with_variation(&self, variation: &SkinVariation) -> Emoji {
        Emoji {
            unified: variation.unified.clone(),
            non_qualified: variation.non_qualified.clone(),
            image: variation.image.clone(),
            sheet_x: variation.sheet_x,
            sheet_y: variation.sheet_y,
            has_img_apple: variation.has_img_apple,
            has_img_google: variation.has_img_google,
            has_img_twitter: variation.has_img_twitter,
            has_img_facebook: variation.has_img_facebook,
            ..self.clone()
        }
    }
}

/// Decodes a dash-delimited uppercase hex sequence (the dataset's `unified`
/// syntax) into the emoji character it spells.
/// Codepoints that are not valid scalar values are skipped.
/// # Examples
/// ```
/// use emoji_index::unified_to_emoji;
///
/// assert_eq!(unified_to_emoji("1F914"), "🤔");
/// assert_eq!(unified_to_emoji("1F3F3-FE0F-200D-1F308"), "🏳️‍🌈");
/// ```
pub fn unified_to_emoji(unified: &str) -> String {
    parse_unified(unified)
        .iter()
        .filter_map(|codepoint| std::char::from_u32(*codepoint))
        .collect()
}

/// Parses the dash-delimited hex syntax into a codepoint sequence.
pub fn parse_unified(unified: &str) -> Vec<u32> {
    lazy_static! {
        static ref HEX_SEQUENCE: Regex = Regex::new(r"[a-fA-F0-9]{1,8}").unwrap();
    }
    HEX_SEQUENCE
        .find_iter(unified)
        .map(|sequence| u32::from_str_radix(sequence.as_str(), 16).unwrap_or(0))
        .filter(|codepoint| *codepoint > 0)
        .collect()
}

impl Hash for Emoji {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unified.hash(state)
    }
}

impl PartialEq<Emoji> for Emoji {
    /// Compares two records by their codepoint sequence
    fn eq(&self, other: &Emoji) -> bool {
        self.unified == other.unified
    }
}

impl AsRef<str> for Emoji {
    fn as_ref(&self) -> &str {
        &self.unified
    }
}

impl Display for Emoji {
    /// Shows the short name if there is one, otherwise the sequence in
    /// square brackets (e.g. `[1F3F3-FE0F-200D-1F308]`).
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if !self.short_name.is_empty() {
            write!(f, ":{}:", self.short_name)
        } else {
            write!(
                f,
                "[{}]",
                self.sequence()
                    .iter()
                    .map(|codepoint| format!("{:X}", codepoint))
                    .join("-")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_codepoint() {
        assert_eq!(parse_unified("1F914"), vec![0x1f914]);
    }

    #[test]
    fn parses_zwj_sequence() {
        assert_eq!(
            parse_unified("1F3F3-FE0F-200D-1F308"),
            vec![0x1f3f3, 0xfe0f, 0x200d, 0x1f308]
        );
    }

    #[test]
    fn lowercase_hex_is_accepted() {
        assert_eq!(parse_unified("1f602"), vec![0x1f602]);
    }

    #[test]
    fn renders_flags() {
        // Regional indicators D + E
        assert_eq!(unified_to_emoji("1F1E9-1F1EA"), "🇩🇪");
    }

    #[test]
    fn empty_sequence_renders_empty() {
        assert_eq!(unified_to_emoji(""), "");
    }
}
