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
//! Fuzzy search over emoji short names and Unicode® names.
//!
//! Names are tokenized on the delimiters short names use (`-`, `_`,
//! whitespace); each query token is scored with Jaro-Winkler against the
//! candidate's tokens and the per-token best scores are averaged. Ties are
//! broken by the dataset sort order, so "obvious" emojis surface first.

use itertools::Itertools;
use regex::Regex;
use strsim::jaro_winkler;

use crate::emojis::emoji::Emoji;
use crate::index::emoji_index::EmojiIndex;

/// Queries are cut off here; longer input is never a short name fragment.
const MAX_QUERY_LENGTH: usize = 32;

/// Minimum averaged Jaro-Winkler similarity for a record to match
const SIMILARITY_THRESHOLD: f64 = 0.8;

fn tokens(name: &str) -> Vec<String> {
    lazy_static! {
        static ref DELIMITERS: Regex = Regex::new(r"[-_\s]+").unwrap();
    }
    DELIMITERS
        .split(name)
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn score(query_tokens: &[String], candidate_tokens: &[String]) -> f64 {
    if query_tokens.is_empty() || candidate_tokens.is_empty() {
        return 0.0;
    }
    let total: f64 = query_tokens
        .iter()
        .map(|query_token| {
            candidate_tokens
                .iter()
                .map(|candidate_token| jaro_winkler(query_token, candidate_token))
                .fold(0.0, f64::max)
        })
        .sum();
    total / query_tokens.len() as f64
}

/// Searches the index for emojis whose short name or name matches the
/// query, best matches first. `limit == 0` returns all matches.
/// # Examples
/// ```
/// use emoji_index::default_index;
/// use emoji_index::search::search;
///
/// let results = search(default_index(), "grin", 5);
/// assert_eq!(results[0].short_name, "grinning");
///
/// assert!(search(default_index(), "qqqq", 0).is_empty());
/// ```
pub fn search<'a>(index: &'a EmojiIndex, query: &str, limit: usize) -> Vec<&'a Emoji> {
    let query: String = query.chars().take(MAX_QUERY_LENGTH).collect();
    let query_tokens = tokens(&query);
    if query_tokens.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<(f64, &Emoji)> = index
        .records()
        .filter_map(|emoji| {
            let short_name_tokens = tokens(&emoji.short_name);
            let name_tokens = tokens(&emoji.name);
            let best = f64::max(
                score(&query_tokens, &short_name_tokens),
                score(&query_tokens, &name_tokens),
            );
            if best >= SIMILARITY_THRESHOLD {
                Some((best, emoji))
            } else {
                None
            }
        })
        .collect();

    // Highest similarity first; the dataset order settles ties
    matches.sort_by(|(score_a, emoji_a), (score_b, emoji_b)| {
        score_b
            .partial_cmp(score_a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| emoji_a.sort_order.cmp(&emoji_b.sort_order))
    });

    let matches = matches.into_iter().map(|(_, emoji)| emoji);
    if limit > 0 {
        matches.take(limit).collect_vec()
    } else {
        matches.collect_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_on_short_name_delimiters() {
        assert_eq!(tokens("flag-de"), vec!["flag", "de"]);
        assert_eq!(tokens("slightly_smiling_face"), vec!["slightly", "smiling", "face"]);
        assert_eq!(tokens("THUMBS UP SIGN"), vec!["thumbs", "up", "sign"]);
    }

    #[test]
    fn empty_tokens_are_dropped() {
        assert_eq!(tokens("- _ "), Vec::<String>::new());
    }

    #[test]
    fn identical_tokens_score_one() {
        let query = tokens("pizza");
        let candidate = tokens("pizza");
        assert!((score(&query, &candidate) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unrelated_tokens_score_low() {
        let query = tokens("zzz");
        let candidate = tokens("pizza slice");
        assert!(score(&query, &candidate) < SIMILARITY_THRESHOLD);
    }
}
