//! Candidate filtering.

use crate::matcher::QueryMatcher;
use crate::option::{Candidate, SelectOption, Value};

/// Produce the ordered candidate list for `options`.
///
/// With `only_matching` unset, or without a query, every option is returned.
/// Otherwise only options whose label contains the query's string form,
/// ignoring case, are kept. Original ordering and indices are preserved.
pub fn filter_candidates<'a>(
    options: &'a [SelectOption],
    query: Option<&Value>,
    only_matching: bool,
) -> Vec<Candidate<'a>> {
    match query {
        Some(query) if only_matching => {
            let matcher = QueryMatcher::new(&query.to_string());
            filter_with(options, &matcher)
        }
        _ => all_candidates(options),
    }
}

/// Keep the options whose label the matcher accepts.
pub fn filter_with<'a>(options: &'a [SelectOption], matcher: &QueryMatcher) -> Vec<Candidate<'a>> {
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| matcher.is_match(&option.label))
        .map(|(index, option)| Candidate { index, option })
        .collect()
}

/// Re-filter an existing candidate list, keeping original indices.
pub fn refine<'a>(candidates: &[Candidate<'a>], matcher: &QueryMatcher) -> Vec<Candidate<'a>> {
    candidates
        .iter()
        .copied()
        .filter(|candidate| matcher.is_match(candidate.label()))
        .collect()
}

fn all_candidates(options: &[SelectOption]) -> Vec<Candidate<'_>> {
    options
        .iter()
        .enumerate()
        .map(|(index, option)| Candidate { index, option })
        .collect()
}
