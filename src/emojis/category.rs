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

use std::fmt;
use std::fmt::{Display, Formatter};

/// The display categories the picker UI groups emojis into.
///
/// The dataset keeps `Smileys & Emotion` and `People & Body` apart, but the
/// UI shows them as one group, so both map to [Category::Emoji] here.
/// Dataset categories without a mapping land in [Category::Misc].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    Emoji,
    Animal,
    Food,
    Travel,
    Activity,
    Object,
    Symbol,
    Flag,
    Misc,
}

impl Category {
    /// All categories in picker display order.
    pub const ALL: [Category; 9] = [
        Category::Emoji,
        Category::Animal,
        Category::Food,
        Category::Travel,
        Category::Activity,
        Category::Object,
        Category::Symbol,
        Category::Flag,
        Category::Misc,
    ];

    /// Maps a dataset category string to its display group.
    /// # Examples
    /// ```
    /// use emoji_index::emojis::category::Category;
    ///
    /// assert_eq!(Category::from_dataset("Smileys & Emotion"), Category::Emoji);
    /// assert_eq!(Category::from_dataset("People & Body"), Category::Emoji);
    /// assert_eq!(Category::from_dataset("Component"), Category::Misc);
    /// ```
    pub fn from_dataset(category: &str) -> Category {
        match category {
            "Smileys & Emotion" => Category::Emoji,
            "People & Body" => Category::Emoji,
            "Animals & Nature" => Category::Animal,
            "Food & Drink" => Category::Food,
            "Travel & Places" => Category::Travel,
            "Activities" => Category::Activity,
            "Objects" => Category::Object,
            "Symbols" => Category::Symbol,
            "Flags" => Category::Flag,
            _ => Category::Misc,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            Category::Emoji => "emoji",
            Category::Animal => "animal",
            Category::Food => "food",
            Category::Travel => "travel",
            Category::Activity => "activity",
            Category::Object => "object",
            Category::Symbol => "symbol",
            Category::Flag => "flag",
            Category::Misc => "misc",
        };
        write!(f, "{}", name)
    }
}
