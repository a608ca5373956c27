use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

/// How a caller interprets a resolved page set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Resolved pages are the ones to retain (extraction).
    Keep,
    /// Resolved pages are the ones to remove (deletion).
    Exclude,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No valid pages specified: '{spec}'")]
    NoValidPages { spec: String },

    #[error("Cannot remove all {total_pages} pages")]
    CannotRemoveAllPages { total_pages: u32 },
}

/// Deduplicated zero-based page indices, iterated in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPageSet {
    indices: BTreeSet<u32>,
    mode: SelectionMode,
}

impl ResolvedPageSet {
    fn all(total_pages: u32, mode: SelectionMode) -> Self {
        ResolvedPageSet {
            indices: (0..total_pages).collect(),
            mode,
        }
    }

    pub fn single(index: u32) -> Self {
        ResolvedPageSet {
            indices: BTreeSet::from([index]),
            mode: SelectionMode::Keep,
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: u32) -> bool {
        self.indices.contains(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.indices.iter().copied()
    }

    /// Ascending zero-based indices
    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }

    /// Ascending 1-based page numbers, for display
    pub fn page_numbers(&self) -> Vec<u32> {
        self.iter().map(|i| i + 1).collect()
    }

    /// Indices in `[0, total_pages)` that are not in this set, as a `Keep` set.
    pub fn complement(&self, total_pages: u32) -> ResolvedPageSet {
        ResolvedPageSet {
            indices: (0..total_pages).filter(|i| !self.contains(*i)).collect(),
            mode: SelectionMode::Keep,
        }
    }
}

/// A single token that survived parsing and bounds checks, as 1-based pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Page(u32),
    Range(u32, u32),
}

impl Token {
    /// Parse and validate one trimmed token. `Err` carries the reason it was dropped.
    fn parse(s: &str, total_pages: u32) -> Result<Self, &'static str> {
        // Split at the first '-' only, so "1-2-3" has an unparseable end
        if let Some((start, end)) = s.split_once('-') {
            let start = parse_number(start)?;
            let end = parse_number(end)?;

            if start < 1 || end < 1 {
                return Err("page numbers must be >= 1");
            }
            if end > total_pages {
                return Err("range end exceeds total pages");
            }
            if start > end {
                return Err("range start is after range end");
            }

            Ok(Token::Range(start, end))
        } else {
            let page = parse_number(s)?;
            if page < 1 {
                return Err("page numbers must be >= 1");
            }
            if page > total_pages {
                return Err("page exceeds total pages");
            }

            Ok(Token::Page(page))
        }
    }

    fn zero_based(self) -> std::ops::RangeInclusive<u32> {
        match self {
            Token::Page(p) => p - 1..=p - 1,
            Token::Range(start, end) => start - 1..=end - 1,
        }
    }
}

fn parse_number(s: &str) -> Result<u32, &'static str> {
    let s = s.trim();
    // `u32::from_str` accepts a leading '+', which is not a page number
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err("not a base-10 integer");
    }
    // Overflowing digit runs are far beyond any page count
    s.parse::<u32>().map_err(|_| "page number out of range")
}

/// Resolve a page specification like "1,3-5,7" against `total_pages`.
///
/// Tokens that fail to parse, are out of bounds, or are reversed ranges are
/// dropped whole. Only an empty result is an error.
pub fn resolve(
    spec: &str,
    total_pages: u32,
    mode: SelectionMode,
) -> Result<ResolvedPageSet, ResolveError> {
    let mut indices = BTreeSet::new();

    for token in spec.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match Token::parse(token, total_pages) {
            Ok(parsed) => indices.extend(parsed.zero_based()),
            Err(reason) => debug!(token, reason, "ignoring page token"),
        }
    }

    if indices.is_empty() {
        return Err(ResolveError::NoValidPages {
            spec: spec.to_string(),
        });
    }

    Ok(ResolvedPageSet { indices, mode })
}

/// Pages to extract. An empty specification selects every page.
pub fn resolve_for_extraction(
    spec: &str,
    total_pages: u32,
) -> Result<ResolvedPageSet, ResolveError> {
    if spec.trim().is_empty() {
        return Ok(ResolvedPageSet::all(total_pages, SelectionMode::Keep));
    }
    resolve(spec, total_pages, SelectionMode::Keep)
}

/// Pages that remain after deleting the ones named by `spec`.
pub fn resolve_for_deletion(
    spec: &str,
    total_pages: u32,
) -> Result<ResolvedPageSet, ResolveError> {
    let removed = resolve(spec, total_pages, SelectionMode::Exclude)?;
    remaining_after(&removed, total_pages)
}

/// The complement of `removed`, which must leave at least one page.
pub fn remaining_after(
    removed: &ResolvedPageSet,
    total_pages: u32,
) -> Result<ResolvedPageSet, ResolveError> {
    let kept = removed.complement(total_pages);

    if kept.is_empty() {
        return Err(ResolveError::CannotRemoveAllPages { total_pages });
    }

    Ok(kept)
}
