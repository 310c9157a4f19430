//! Match highlighting for option labels.

use crate::matcher::QueryMatcher;

/// A contiguous slice of a label, either matching the query or plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            is_match: false,
        }
    }

    fn matched(text: &'a str) -> Self {
        Self {
            text,
            is_match: true,
        }
    }
}

/// Split `label` into alternating plain/match segments for `query`.
///
/// Concatenating the segment texts always reproduces `label`.
pub fn highlight<'a>(label: &'a str, query: &str) -> Vec<Segment<'a>> {
    highlight_with(label, &QueryMatcher::new(query))
}

/// [`highlight`] with a precompiled matcher, for highlighting many rows.
pub fn highlight_with<'a>(label: &'a str, matcher: &QueryMatcher) -> Vec<Segment<'a>> {
    let ranges = matcher.find_ranges(label);
    if ranges.is_empty() {
        return vec![Segment::plain(label)];
    }

    let mut segments = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut cursor = 0;
    for range in ranges {
        if range.start > cursor {
            segments.push(Segment::plain(&label[cursor..range.start]));
        }
        segments.push(Segment::matched(&label[range.clone()]));
        cursor = range.end;
    }
    if cursor < label.len() {
        segments.push(Segment::plain(&label[cursor..]));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(text: &str, is_match: bool) -> Segment<'_> {
        Segment { text, is_match }
    }

    #[test]
    fn test_trailing_match() {
        assert_eq!(
            highlight("square meter", "meter"),
            vec![seg("square ", false), seg("meter", true)]
        );
    }

    #[test]
    fn test_empty_query_single_segment() {
        assert_eq!(highlight("cubic foot", ""), vec![seg("cubic foot", false)]);
    }

    #[test]
    fn test_no_match_single_segment() {
        assert_eq!(highlight("inch", "kg"), vec![seg("inch", false)]);
    }

    #[test]
    fn test_multiple_matches_preserve_case() {
        assert_eq!(
            highlight("Foot per foot", "FOOT"),
            vec![seg("Foot", true), seg(" per ", false), seg("foot", true)]
        );
    }

    #[test]
    fn test_adjacent_matches_have_no_empty_gap() {
        assert_eq!(highlight("abab", "ab"), vec![seg("ab", true), seg("ab", true)]);
    }

    #[test]
    fn test_pattern_characters_literal() {
        assert_eq!(
            highlight("price (usd)", "(usd)"),
            vec![seg("price ", false), seg("(usd)", true)]
        );
        assert_eq!(highlight("a.c", "."), vec![seg("a", false), seg(".", true), seg("c", false)]);
        assert_eq!(highlight("abc", ".*"), vec![seg("abc", false)]);
    }
}
