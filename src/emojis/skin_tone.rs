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

use std::str::FromStr;

/// The five Fitzpatrick skin tone modifiers (`U+1F3FB`..`U+1F3FF`).
///
/// The dataset keys skin variations by the modifier's hex spelling, so the
/// variants map 1:1 to those keys. UI code usually addresses tones by a
/// 1-based index (slot 0 being "no tone").
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SkinTone {
    /// Type 1-2, `1F3FB`
    Light,
    /// Type 3, `1F3FC`
    MediumLight,
    /// Type 4, `1F3FD`
    Medium,
    /// Type 5, `1F3FE`
    MediumDark,
    /// Type 6, `1F3FF`
    Dark,
}

impl SkinTone {
    /// All tones in modifier order.
    pub const ALL: [SkinTone; 5] = [
        SkinTone::Light,
        SkinTone::MediumLight,
        SkinTone::Medium,
        SkinTone::MediumDark,
        SkinTone::Dark,
    ];

    /// The dataset key for this tone.
    /// # Examples
    /// ```
    /// use emoji_index::emojis::skin_tone::SkinTone;
    ///
    /// assert_eq!(SkinTone::Light.key(), "1F3FB");
    /// ```
    pub fn key(&self) -> &'static str {
        match self {
            SkinTone::Light => "1F3FB",
            SkinTone::MediumLight => "1F3FC",
            SkinTone::Medium => "1F3FD",
            SkinTone::MediumDark => "1F3FE",
            SkinTone::Dark => "1F3FF",
        }
    }

    /// The modifier codepoint itself.
    pub fn modifier(&self) -> u32 {
        match self {
            SkinTone::Light => 0x1f3fb,
            SkinTone::MediumLight => 0x1f3fc,
            SkinTone::Medium => 0x1f3fd,
            SkinTone::MediumDark => 0x1f3fe,
            SkinTone::Dark => 0x1f3ff,
        }
    }

    /// Looks a tone up by its 1-based UI index.
    /// # Examples
    /// ```
    /// use emoji_index::emojis::skin_tone::SkinTone;
    ///
    /// assert_eq!(SkinTone::from_index(1), Some(SkinTone::Light));
    /// assert_eq!(SkinTone::from_index(5), Some(SkinTone::Dark));
    /// assert_eq!(SkinTone::from_index(0), None);
    /// assert_eq!(SkinTone::from_index(6), None);
    /// ```
    pub fn from_index(index: u8) -> Option<SkinTone> {
        match index {
            1..=5 => Some(Self::ALL[index as usize - 1]),
            _ => None,
        }
    }

    /// The dataset key for a two-person variation, e.g. `1F3FB-1F3FF`.
    pub fn pair_key(&self, other: SkinTone) -> String {
        format!("{}-{}", self.key(), other.key())
    }
}

impl FromStr for SkinTone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "1F3FB" => Ok(SkinTone::Light),
            "1F3FC" => Ok(SkinTone::MediumLight),
            "1F3FD" => Ok(SkinTone::Medium),
            "1F3FE" => Ok(SkinTone::MediumDark),
            "1F3FF" => Ok(SkinTone::Dark),
            other => Err(other.to_string()),
        }
    }
}

impl ToString for SkinTone {
    fn to_string(&self) -> String {
        self.key().to_string()
    }
}
