use std::collections::HashSet;

use crate::catalog::{ListEntry, Problem};

/// Leading character that switches the list from title search to tag search.
pub const TAG_SENTINEL: char = '#';

/// Split a tag query into lower-cased search tokens.
///
/// One leading sentinel is removed from the query; commas, semicolons and
/// whitespace runs all separate tokens. A token written as `#tag` is the
/// same as `tag`, mirroring how problem tags are normalized.
pub fn keyword_tokens(query: &str) -> HashSet<String> {
    let text = query.strip_prefix(TAG_SENTINEL).unwrap_or(query).trim();
    text.replace([',', ';'], " ")
        .split_whitespace()
        .map(normalize_tag)
        .filter(|token| !token.is_empty())
        .collect()
}

fn normalize_tag(tag: &str) -> String {
    tag.trim_start_matches(TAG_SENTINEL).to_lowercase()
}

/// Catalog indices of problems carrying every tag in `query`, in catalog order.
///
/// A query with no tokens left (`""`, `"#"`, `"#, ;"`) resets to the whole catalog.
pub fn filter_by_keywords(problems: &[Problem], query: &str) -> Vec<usize> {
    let tokens = keyword_tokens(query);
    if tokens.is_empty() {
        return (0..problems.len()).collect();
    }

    problems
        .iter()
        .enumerate()
        .filter(|(_, problem)| {
            let tags: HashSet<String> =
                problem.keywords.iter().map(|k| normalize_tag(k)).collect();
            tokens.iter().all(|token| tags.contains(token))
        })
        .map(|(i, _)| i)
        .collect()
}

/// Same as [`filter_by_keywords`] but yields the problems themselves.
pub fn filter_problems<'a>(problems: &'a [Problem], query: &str) -> Vec<&'a Problem> {
    filter_by_keywords(problems, query)
        .into_iter()
        .map(|i| &problems[i])
        .collect()
}

/// The list's own plain filter: case-insensitive substring match on the
/// entry's filter text, in catalog order. Empty text matches everything.
pub fn filter_by_text<T: ListEntry>(entries: &[T], text: &str) -> Vec<usize> {
    let needle = text.to_lowercase();
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.filter_text().to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}
