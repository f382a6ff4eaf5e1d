// src/services/matcher.rs

//! Query normalization and record matching.
//!
//! A query is matched against precomputed [`SearchKeys`] with plain
//! substring tests. Queries that mix Chinese characters with Latin letters
//! (e.g. `李ming`) are split so each part is tested against the field it
//! can appear in: the Chinese run against the name, the Latin run against
//! pinyin or initials.

use crate::models::{Dataset, MatchMode, Record, SearchKeys};

/// Mid-dot used as a separator in transliterated names.
const MID_DOT: char = '·';

/// Whether `c` is in the CJK Unified Ideographs block used for names.
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Strict query cleaning.
///
/// Trims, lowercases, drops whitespace and `·`, then keeps only ASCII
/// letters, ASCII digits and CJK characters.
pub fn normalize_query(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .chars()
        .filter(|&c| !c.is_whitespace() && c != MID_DOT)
        .filter(|&c| c.is_ascii_lowercase() || c.is_ascii_digit() || is_cjk(c))
        .collect()
}

/// Split `input` into its CJK run and everything else, both in input order.
pub fn split_mixed(input: &str) -> (String, String) {
    input.chars().partition(|&c| is_cjk(c))
}

/// A query after mode-specific normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PreparedQuery {
    Strict {
        clean: String,
        chinese: String,
        latin: String,
    },
    Loose {
        chinese: String,
        rest: String,
    },
}

/// Pure filter over a dataset for one [`MatchMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    mode: MatchMode,
}

impl Matcher {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Normalize a raw query. `None` means nothing can match.
    fn prepare(&self, raw: &str) -> Option<PreparedQuery> {
        match self.mode {
            MatchMode::Strict => {
                let clean = normalize_query(raw);
                if clean.is_empty() {
                    return None;
                }
                let (chinese, latin) = split_mixed(&clean);
                Some(PreparedQuery::Strict {
                    clean,
                    chinese,
                    latin,
                })
            }
            MatchMode::Loose => {
                let (chinese, rest) = split_mixed(raw);
                Some(PreparedQuery::Loose {
                    chinese,
                    rest: rest.trim().to_lowercase(),
                })
            }
        }
    }

    fn matches(query: &PreparedQuery, keys: &SearchKeys) -> bool {
        match query {
            PreparedQuery::Strict {
                clean,
                chinese,
                latin,
            } => {
                let direct = [&keys.name, &keys.id, &keys.pinyin, &keys.initials]
                    .iter()
                    .any(|value| value.contains(clean.as_str()));

                direct || Self::mixed_match(chinese, latin, keys)
            }
            PreparedQuery::Loose { chinese, rest } => {
                let chinese_ok = chinese.is_empty()
                    || keys.name.contains(chinese.as_str())
                    || keys.school.contains(chinese.as_str());
                let rest_ok = rest.is_empty()
                    || keys.pinyin.contains(rest.as_str())
                    || keys.initials.contains(rest.as_str());

                chinese_ok && rest_ok
            }
        }
    }

    /// Chinese run in the name AND Latin run in pinyin or initials.
    /// An empty run imposes no condition.
    fn mixed_match(chinese: &str, latin: &str, keys: &SearchKeys) -> bool {
        let chinese_ok = chinese.is_empty() || keys.name.contains(chinese);
        let latin_ok =
            latin.is_empty() || keys.pinyin.contains(latin) || keys.initials.contains(latin);

        chinese_ok && latin_ok
    }

    /// Return every record matching `raw`, in load order.
    pub fn filter<'a>(&self, raw: &str, dataset: &'a Dataset) -> Vec<&'a Record> {
        let Some(query) = self.prepare(raw) else {
            return Vec::new();
        };

        dataset
            .entries()
            .filter(|(_, keys)| Self::matches(&query, keys))
            .map(|(record, _)| record)
            .collect()
    }
}
