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

use crate::sizing::SizeClass;
use crate::{emoji_count, size_class};

#[test]
fn counts_emoji_in_mixed_text() {
    assert_eq!(emoji_count("hello 🍕 world 🍔"), 2);
    assert_eq!(emoji_count("no emoji here"), 0);
    assert_eq!(emoji_count(""), 0);
}

#[test]
fn counts_variations_and_sequences_as_one() {
    // A toned thumbs up is one grapheme cluster, not two
    assert_eq!(emoji_count("👍🏽"), 1);
    // So is a ZWJ sequence
    assert_eq!(emoji_count("🏳️‍🌈"), 1);
}

#[test]
fn size_classes_shrink_with_the_count() {
    assert_eq!(size_class("🤔"), SizeClass::Max);
    assert_eq!(size_class("🤔🍕"), SizeClass::ExtraLarge);
    assert_eq!(size_class("🤔🍕🔥"), SizeClass::Large);
    assert_eq!(size_class("🤔🍕🔥🚀"), SizeClass::Medium);
    assert_eq!(size_class("🤔🍕🔥🚀🎉"), SizeClass::Small);
    assert_eq!(size_class("🤔🍕🔥🚀🎉😀"), SizeClass::None);
}

#[test]
fn whitespace_between_emoji_is_ignored() {
    assert_eq!(size_class("🤔 🍕"), SizeClass::ExtraLarge);
    assert_eq!(size_class("  🤔  "), SizeClass::Max);
}

#[test]
fn any_other_text_keeps_the_regular_size() {
    assert_eq!(size_class("🤔 hmm"), SizeClass::None);
    assert_eq!(size_class("hello"), SizeClass::None);
    assert_eq!(size_class(""), SizeClass::None);
}

#[test]
fn class_names_match_the_ui_contract() {
    assert_eq!(SizeClass::Max.class_name(), "max");
    assert_eq!(SizeClass::ExtraLarge.class_name(), "extra-large");
    assert_eq!(SizeClass::None.class_name(), "");
}
