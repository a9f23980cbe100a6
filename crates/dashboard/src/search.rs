//! Catalog filtering and match highlighting.

use class_notes_doc_model::{Catalog, SearchItem};

pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Items whose title, subtitle or kind contain the query, ignoring case.
///
/// Items with a title starting with the query come first; order within each
/// group follows the catalog.
pub fn filter_items<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a SearchItem> {
    filter_indices(catalog, query).into_iter().filter_map(|index| catalog.get(index)).collect()
}

/// Same as [`filter_items`], as positions in the catalog.
pub fn filter_indices(catalog: &Catalog, query: &str) -> Vec<usize> {
    let query = normalize_query(query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<usize> = catalog
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| item.haystack().contains(&query))
        .map(|(index, _)| index)
        .collect();

    // sort_by_key is stable
    matches.sort_by_key(|index| {
        let title_prefix = catalog
            .get(*index)
            .is_some_and(|item| item.title.to_lowercase().starts_with(&query));
        !title_prefix
    });

    matches
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight<'a> {
    Plain(&'a str),
    Match(&'a str),
}

/// Splits `text` around every case-insensitive occurrence of `query`.
pub fn highlight_segments<'a>(text: &'a str, query: &str) -> Vec<Highlight<'a>> {
    let needle: Vec<char> = query.to_lowercase().chars().collect();
    if needle.is_empty() {
        return if text.is_empty() { Vec::new() } else { vec![Highlight::Plain(text)] };
    }

    let boundaries: Vec<usize> =
        text.char_indices().map(|(offset, _)| offset).chain(std::iter::once(text.len())).collect();

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while cursor < boundaries.len() - 1 {
        let start = boundaries[cursor];
        match match_len(&text[start..], &needle) {
            Some(len) => {
                if plain_start < start {
                    segments.push(Highlight::Plain(&text[plain_start..start]));
                }
                let end = start + len;
                segments.push(Highlight::Match(&text[start..end]));
                plain_start = end;
                cursor = boundaries.partition_point(|offset| *offset < end);
            }
            None => cursor += 1,
        }
    }

    if plain_start < text.len() {
        segments.push(Highlight::Plain(&text[plain_start..]));
    }

    segments
}

/// Byte length of the prefix of `haystack` that lowercases to `needle`.
fn match_len(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0;

    for (offset, ch) in haystack.char_indices() {
        for lower in ch.to_lowercase() {
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }

        if matched == needle.len() {
            return Some(offset + ch.len_utf8());
        }
    }

    None
}
