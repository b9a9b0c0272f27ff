//! Country filter and its memo

use crate::types::UserRow;

fn country_matches(row: &UserRow, needle: &str) -> bool {
    row.country().to_lowercase().contains(needle)
}

/// Positions in `list` of the rows whose country contains `filter_text`,
/// case-insensitively.
///
/// A blank filter (empty after trimming) selects every row.
pub fn matching_indices(list: &[UserRow], filter_text: &str) -> Vec<usize> {
    if filter_text.trim().is_empty() {
        return (0..list.len()).collect();
    }
    let needle = filter_text.to_lowercase();
    list.iter()
        .enumerate()
        .filter(|(_, row)| country_matches(row, &needle))
        .map(|(i, _)| i)
        .collect()
}

/// The ordered sub-sequence of `list` matching `filter_text`.
///
/// Returns `list` unchanged for a blank filter. Never mutates its input.
pub fn apply_filter(list: &[UserRow], filter_text: &str) -> Vec<UserRow> {
    if filter_text.trim().is_empty() {
        return list.to_vec();
    }
    let needle = filter_text.to_lowercase();
    list.iter()
        .filter(|row| country_matches(row, &needle))
        .cloned()
        .collect()
}

/// Cached filter result, keyed by (list revision, filter text).
///
/// [`FilterMemo::refresh`] only recomputes when either half of the key
/// changed since the last call.
#[derive(Debug, Clone, Default)]
pub struct FilterMemo {
    key: Option<(u64, String)>,
    indices: Vec<usize>,
    recomputations: u64,
}

impl FilterMemo {
    /// Bring the cache up to date. Returns `true` when it recomputed.
    pub fn refresh(&mut self, list: &[UserRow], revision: u64, filter_text: &str) -> bool {
        let fresh = matches!(
            &self.key,
            Some((rev, text)) if *rev == revision && text == filter_text
        );
        if fresh {
            return false;
        }

        self.indices = matching_indices(list, filter_text);
        self.key = Some((revision, filter_text.to_string()));
        self.recomputations += 1;
        true
    }

    /// Positions of the visible rows in the list the memo was refreshed with
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// How many times the filter actually ran
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
