//! List state and its transitions
//!
//! [`ViewState`] owns everything the user list shows: the working list, the
//! pristine copy captured at fetch time, the filter text, the three sort
//! direction flags and the row-colouring flag. It changes only through
//! [`ViewState::reduce`], which consumes the previous state and returns the
//! next one.
//!
//! The filtered view is derived, never stored on its own: a [`FilterMemo`]
//! keyed by (working-list revision, filter text) is refreshed at the end of
//! every transition and only recomputes when one of the two changed.

mod delete;
mod filter;
mod sort;

use crate::error::StateError;
use crate::types::{RowId, UserRecord, UserRow};

pub use delete::{delete_at, delete_by_id};
pub use filter::{apply_filter, matching_indices, FilterMemo};
pub use sort::{locale_compare, sort_by, SortDirections, SortField};

/// Whether the startup fetch has completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    /// Fetch finished with this many records (zero after a failed fetch)
    Loaded(usize),
}

/// A state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch finished; replaces both the working list and the original
    Loaded(Vec<UserRecord>),
    /// Replace the filter text
    SetFilter(String),
    PushFilterChar(char),
    PopFilterChar,
    ClearFilter,
    /// Flip the field's direction flag, then sort with its previous value
    Sort(SortField),
    /// Remove the row with this identity from the working list
    Delete(RowId),
    /// Remove the row shown at this position of the filtered view
    DeleteVisible(usize),
    /// Back to the fetched list, empty filter and cleared sort flags
    Restore,
    ToggleColoring,
}

/// The user list state
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    working: Vec<UserRow>,
    original: Vec<UserRow>,
    filter_text: String,
    sort: SortDirections,
    row_coloring: bool,
    load_status: LoadStatus,
    /// Bumped on every change to `working`
    revision: u64,
    next_id: u64,
    memo: FilterMemo,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty state with the colouring flag preset
    pub fn with_row_coloring(enabled: bool) -> Self {
        Self {
            row_coloring: enabled,
            ..Self::default()
        }
    }

    /// Apply one transition
    #[must_use]
    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::Loaded(records) => self.load(records),
            Action::SetFilter(text) => self.filter_text = text,
            Action::PushFilterChar(c) => self.filter_text.push(c),
            Action::PopFilterChar => {
                self.filter_text.pop();
            }
            Action::ClearFilter => self.filter_text.clear(),
            Action::Sort(field) => self.sort_working(field),
            Action::Delete(id) => self.delete_id(id),
            Action::DeleteVisible(index) => self.delete_visible(index),
            Action::Restore => self.restore(),
            Action::ToggleColoring => self.row_coloring = !self.row_coloring,
        }
        self.refresh_view();
        self
    }

    /// In-place form of [`reduce`](Self::reduce)
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(self);
        *self = state.reduce(action);
    }

    fn load(&mut self, records: Vec<UserRecord>) {
        let rows: Vec<UserRow> = records
            .into_iter()
            .map(|record| {
                let id = RowId(self.next_id);
                self.next_id += 1;
                UserRow { id, record }
            })
            .collect();

        self.load_status = LoadStatus::Loaded(rows.len());
        self.working = rows.clone();
        self.original = rows;
        self.bump();
    }

    fn sort_working(&mut self, field: SortField) {
        let ascending = self.sort.toggle(field);
        log::debug!("Sorting by {field:?}, ascending={ascending}");
        self.working = sort_by(&self.working, field, ascending);
        self.bump();
    }

    fn delete_id(&mut self, id: RowId) {
        match delete_by_id(&self.working, id) {
            Some(rest) => {
                self.working = rest;
                self.bump();
            }
            None => log::warn!("Delete ignored: no row {id} in the working list"),
        }
    }

    fn delete_visible(&mut self, index: usize) {
        match self.visible_row(index).map(|row| row.id) {
            Some(id) => self.delete_id(id),
            None => {
                let e = StateError::IndexOutOfRange {
                    index,
                    len: self.visible_len(),
                };
                log::warn!("Delete ignored: {e}");
            }
        }
    }

    fn restore(&mut self) {
        self.working = self.original.clone();
        self.filter_text.clear();
        self.sort.reset();
        self.bump();
    }

    fn bump(&mut self) {
        self.revision += 1;
    }

    fn refresh_view(&mut self) {
        self.memo
            .refresh(&self.working, self.revision, &self.filter_text);
    }

    // ===== 读取 =====

    pub fn working(&self) -> &[UserRow] {
        &self.working
    }

    pub fn original(&self) -> &[UserRow] {
        &self.original
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn sort_directions(&self) -> SortDirections {
        self.sort
    }

    pub fn row_coloring(&self) -> bool {
        self.row_coloring
    }

    pub fn load_status(&self) -> LoadStatus {
        self.load_status
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Rows of the filtered view, in display order
    pub fn visible(&self) -> impl Iterator<Item = &UserRow> + '_ {
        self.memo
            .indices()
            .iter()
            .filter_map(|&i| self.working.get(i))
    }

    pub fn visible_len(&self) -> usize {
        self.memo.indices().len()
    }

    /// The row shown at `index` of the filtered view
    pub fn visible_row(&self, index: usize) -> Option<&UserRow> {
        self.memo
            .indices()
            .get(index)
            .and_then(|&i| self.working.get(i))
    }

    /// Number of times the filtered view has been computed
    pub fn filter_recomputations(&self) -> u64 {
        self.memo.recomputations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{first_names, loaded, users, visible_first_names};

    fn three() -> ViewState {
        loaded(users(&[
            ("Ann", "Lee", "Spain"),
            ("Bo", "Kim", "France"),
            ("Cy", "Diaz", "Spain"),
        ]))
    }

    #[test]
    fn new_state_is_loading_and_empty() {
        let state = ViewState::new();
        assert_eq!(state.load_status(), LoadStatus::Loading);
        assert!(state.working().is_empty());
        assert_eq!(state.visible_len(), 0);
        assert!(!state.row_coloring());
    }

    #[test]
    fn loaded_fills_working_and_original_with_fresh_ids() {
        let state = three();
        assert_eq!(state.load_status(), LoadStatus::Loaded(3));
        assert_eq!(state.working(), state.original());
        let ids: Vec<RowId> = state.working().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RowId(0), RowId(1), RowId(2)]);
        assert_eq!(visible_first_names(&state), vec!["Ann", "Bo", "Cy"]);
    }

    #[test]
    fn empty_fetch_gives_empty_table() {
        let state = loaded(Vec::new());
        assert_eq!(state.load_status(), LoadStatus::Loaded(0));
        assert_eq!(state.visible_len(), 0);
    }

    #[test]
    fn filter_view_matches_regardless_of_case() {
        let state = three().reduce(Action::SetFilter("spain".into()));
        assert_eq!(visible_first_names(&state), vec!["Ann", "Cy"]);
        let state = state.reduce(Action::SetFilter("SPAIN".into()));
        assert_eq!(visible_first_names(&state), vec!["Ann", "Cy"]);
        // the working list itself is untouched
        assert_eq!(first_names(&state), vec!["Ann", "Bo", "Cy"]);
    }

    #[test]
    fn filter_char_editing() {
        let mut state = three();
        for c in "fra".chars() {
            state.dispatch(Action::PushFilterChar(c));
        }
        assert_eq!(state.filter_text(), "fra");
        assert_eq!(visible_first_names(&state), vec!["Bo"]);
        state.dispatch(Action::PopFilterChar);
        assert_eq!(state.filter_text(), "fr");
        state.dispatch(Action::ClearFilter);
        assert_eq!(state.visible_len(), 3);
    }

    #[test]
    fn country_sort_uses_flag_value_before_toggle() {
        let state = loaded(users(&[
            ("Ann", "", "France"),
            ("Bo", "", "Spain"),
            ("Cy", "", "Brazil"),
        ]));
        assert!(!state.sort_directions().country);

        // first click: flag was false, so descending
        let state = state.reduce(Action::Sort(SortField::Country));
        let countries: Vec<&str> = state.working().iter().map(UserRow::country).collect();
        assert_eq!(countries, vec!["Spain", "France", "Brazil"]);
        assert!(state.sort_directions().country);

        // second click: flag was true, so ascending
        let state = state.reduce(Action::Sort(SortField::Country));
        let countries: Vec<&str> = state.working().iter().map(UserRow::country).collect();
        assert_eq!(countries, vec!["Brazil", "France", "Spain"]);
        assert!(!state.sort_directions().country);
    }

    #[test]
    fn sorting_one_field_leaves_other_flags() {
        let state = three()
            .reduce(Action::Sort(SortField::FirstName))
            .reduce(Action::Sort(SortField::LastName))
            .reduce(Action::Sort(SortField::LastName));
        let dirs = state.sort_directions();
        assert!(dirs.first_name);
        assert!(!dirs.last_name);
        assert!(!dirs.country);
    }

    #[test]
    fn sort_reorders_working_list_not_original() {
        let state = three().reduce(Action::Sort(SortField::FirstName));
        assert_eq!(first_names(&state), vec!["Cy", "Bo", "Ann"]);
        let original: Vec<&str> = state.original().iter().map(UserRow::first_name).collect();
        assert_eq!(original, vec!["Ann", "Bo", "Cy"]);
    }

    #[test]
    fn delete_visible_twice() {
        let state = loaded(users(&[("Ann", "", ""), ("Bo", "", ""), ("Cy", "", "")]));
        let state = state.reduce(Action::DeleteVisible(1));
        assert_eq!(first_names(&state), vec!["Ann", "Cy"]);
        let state = state.reduce(Action::DeleteVisible(1));
        assert_eq!(first_names(&state), vec!["Ann"]);
        assert_eq!(state.original().len(), 3);
    }

    #[test]
    fn delete_visible_translates_filtered_index() {
        // view under "spain" is [Ann, Cy]; row 1 of the view is Cy, not Bo
        let state = three()
            .reduce(Action::SetFilter("spain".into()))
            .reduce(Action::DeleteVisible(1));
        assert_eq!(first_names(&state), vec!["Ann", "Bo"]);
        assert_eq!(visible_first_names(&state), vec!["Ann"]);
    }

    #[test]
    fn delete_by_id_after_sort() {
        let state = three().reduce(Action::Sort(SortField::FirstName));
        let bo = state.working().iter().find(|r| r.first_name() == "Bo").unwrap().id;
        let state = state.reduce(Action::Delete(bo));
        assert_eq!(first_names(&state), vec!["Cy", "Ann"]);
    }

    #[test]
    fn out_of_range_delete_is_a_no_op() {
        let state = three();
        let revision = state.revision();
        let state = state.reduce(Action::DeleteVisible(3));
        assert_eq!(first_names(&state), vec!["Ann", "Bo", "Cy"]);
        assert_eq!(state.revision(), revision);

        let state = state.reduce(Action::Delete(RowId(42)));
        assert_eq!(state.working().len(), 3);
    }

    #[test]
    fn restore_resets_list_filter_and_flags_but_not_coloring() {
        let state = three()
            .reduce(Action::ToggleColoring)
            .reduce(Action::Sort(SortField::Country))
            .reduce(Action::Sort(SortField::FirstName))
            .reduce(Action::DeleteVisible(0))
            .reduce(Action::SetFilter("fr".into()))
            .reduce(Action::Restore);

        assert_eq!(state.working(), state.original());
        assert_eq!(first_names(&state), vec!["Ann", "Bo", "Cy"]);
        assert_eq!(state.filter_text(), "");
        assert_eq!(state.sort_directions(), SortDirections::default());
        assert!(state.row_coloring());
        assert_eq!(state.visible_len(), 3);
    }

    #[test]
    fn restore_copy_is_independent_of_original() {
        let state = three()
            .reduce(Action::Restore)
            .reduce(Action::DeleteVisible(0));
        assert_eq!(state.working().len(), 2);
        assert_eq!(state.original().len(), 3);
    }

    #[test]
    fn working_never_longer_than_original() {
        let mut state = three();
        let actions = [
            Action::Sort(SortField::LastName),
            Action::DeleteVisible(2),
            Action::Restore,
            Action::DeleteVisible(0),
            Action::DeleteVisible(0),
            Action::DeleteVisible(0),
            Action::DeleteVisible(0),
        ];
        for action in actions {
            state.dispatch(action);
            assert!(state.working().len() <= state.original().len());
        }
        assert!(state.working().is_empty());
    }

    #[test]
    fn coloring_toggle_does_not_touch_data() {
        let state = three();
        let revision = state.revision();
        let state = state.reduce(Action::ToggleColoring);
        assert!(state.row_coloring());
        assert_eq!(state.revision(), revision);
        let state = state.reduce(Action::ToggleColoring);
        assert!(!state.row_coloring());
    }

    #[test]
    fn with_row_coloring_presets_flag() {
        assert!(ViewState::with_row_coloring(true).row_coloring());
    }

    #[test]
    fn view_recomputes_only_when_list_or_filter_changes() {
        let state = three();
        let base = state.filter_recomputations();

        let state = state.reduce(Action::ToggleColoring);
        assert_eq!(state.filter_recomputations(), base);

        let state = state.reduce(Action::SetFilter("spain".into()));
        assert_eq!(state.filter_recomputations(), base + 1);

        let state = state.reduce(Action::SetFilter("spain".into()));
        assert_eq!(state.filter_recomputations(), base + 1);

        let state = state.reduce(Action::Sort(SortField::Country));
        assert_eq!(state.filter_recomputations(), base + 2);
    }
}
