//! Literal, case-insensitive query matching.
//!
//! A [`QueryMatcher`] is compiled once per query and shared by filtering,
//! highlighting and the typing rule of the navigation state machine. The
//! query is always a literal: characters such as `.` `*` `(` or `\` carry no
//! pattern meaning.

use std::ops::Range;

use horizon_autocomplete_core::logging::targets;
use regex::{Regex, RegexBuilder};

use crate::error::Result;

#[derive(Debug, Clone)]
enum MatcherKind {
    /// The empty query. Contained in every label, highlights nothing.
    Empty,
    /// Escaped literal compiled with Unicode simple case folding.
    Regex(Regex),
    /// Char-by-char lowercase comparison, used when compilation fails.
    Fallback(String),
}

/// A compiled case-insensitive substring matcher.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    query: String,
    kind: MatcherKind,
}

impl QueryMatcher {
    /// Compile a matcher, falling back to a plain scan if the query is too
    /// large to compile.
    pub fn new(query: &str) -> Self {
        match Self::try_new(query) {
            Ok(matcher) => matcher,
            Err(err) => {
                tracing::warn!(
                    target: targets::MATCHING,
                    error = %err,
                    query_len = query.len(),
                    "query matcher fell back to literal scan"
                );
                Self {
                    query: query.to_owned(),
                    kind: MatcherKind::Fallback(query.to_lowercase()),
                }
            }
        }
    }

    /// Compile a matcher, reporting a compilation failure.
    pub fn try_new(query: &str) -> Result<Self> {
        let kind = if query.is_empty() {
            MatcherKind::Empty
        } else {
            let regex = RegexBuilder::new(&regex::escape(query))
                .case_insensitive(true)
                .build()?;
            MatcherKind::Regex(regex)
        };
        Ok(Self {
            query: query.to_owned(),
            kind,
        })
    }

    /// The raw query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the query is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self.kind, MatcherKind::Empty)
    }

    /// Whether `label` contains the query, ignoring case.
    pub fn is_match(&self, label: &str) -> bool {
        match &self.kind {
            MatcherKind::Empty => true,
            MatcherKind::Regex(regex) => regex.is_match(label),
            MatcherKind::Fallback(lowered) => {
                label.char_indices().any(|(i, _)| fold_match_len(&label[i..], lowered).is_some())
            }
        }
    }

    /// Byte ranges of all non-overlapping occurrences, left to right.
    ///
    /// Ranges always fall on char boundaries and are never empty.
    pub fn find_ranges(&self, label: &str) -> Vec<Range<usize>> {
        match &self.kind {
            MatcherKind::Empty => Vec::new(),
            MatcherKind::Regex(regex) => regex
                .find_iter(label)
                .filter(|m| !m.is_empty())
                .map(|m| m.range())
                .collect(),
            MatcherKind::Fallback(lowered) => {
                let mut ranges = Vec::new();
                let mut cursor = 0;
                for (i, _) in label.char_indices() {
                    if i < cursor {
                        continue;
                    }
                    if let Some(len) = fold_match_len(&label[i..], lowered) {
                        ranges.push(i..i + len);
                        cursor = i + len;
                    }
                }
                ranges
            }
        }
    }
}

/// Byte length of the prefix of `haystack` that equals `needle` once
/// lowercased, if any.
fn fold_match_len(haystack: &str, needle: &str) -> Option<usize> {
    let mut needle_chars = needle.chars().peekable();
    let mut consumed = 0;
    for c in haystack.chars() {
        if needle_chars.peek().is_none() {
            break;
        }
        for lower in c.to_lowercase() {
            if needle_chars.next() != Some(lower) {
                return None;
            }
        }
        consumed += c.len_utf8();
    }
    if needle_chars.peek().is_none() && consumed > 0 {
        Some(consumed)
    } else {
        None
    }
}
