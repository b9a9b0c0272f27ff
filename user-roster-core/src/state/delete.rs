//! Row removal

use crate::error::StateError;
use crate::types::{RowId, UserRow};

/// `list` without the element at `index`, order of the rest preserved.
pub fn delete_at(list: &[UserRow], index: usize) -> Result<Vec<UserRow>, StateError> {
    if index >= list.len() {
        return Err(StateError::IndexOutOfRange {
            index,
            len: list.len(),
        });
    }
    let mut out = list.to_vec();
    out.remove(index);
    Ok(out)
}

/// `list` without the row identified by `id`; `None` when no row has it.
pub fn delete_by_id(list: &[UserRow], id: RowId) -> Option<Vec<UserRow>> {
    let index = list.iter().position(|row| row.id == id)?;
    delete_at(list, index).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserRecord;

    fn rows(names: &[&str]) -> Vec<UserRow> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| UserRow {
                id: RowId(i as u64 + 10),
                record: UserRecord::new(*name, "", ""),
            })
            .collect()
    }

    fn names(list: &[UserRow]) -> Vec<&str> {
        list.iter().map(UserRow::first_name).collect()
    }

    #[test]
    fn delete_twice_at_same_position() {
        let list = rows(&["Ann", "Bo", "Cy"]);
        let once = delete_at(&list, 1).unwrap();
        assert_eq!(names(&once), vec!["Ann", "Cy"]);
        let twice = delete_at(&once, 1).unwrap();
        assert_eq!(names(&twice), vec!["Ann"]);
    }

    #[test]
    fn delete_shrinks_by_one_for_every_valid_index() {
        let list = rows(&["Ann", "Bo", "Cy", "Di"]);
        for i in 0..list.len() {
            let out = delete_at(&list, i).unwrap();
            assert_eq!(out.len(), list.len() - 1);
            let mut expected = list.clone();
            expected.remove(i);
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn delete_out_of_range_is_an_error() {
        let list = rows(&["Ann"]);
        assert_eq!(
            delete_at(&list, 1),
            Err(StateError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert!(delete_at(&[], 0).is_err());
    }

    #[test]
    fn delete_by_id_targets_identity() {
        let list = rows(&["Ann", "Bo", "Cy"]);
        let out = delete_by_id(&list, RowId(12)).unwrap();
        assert_eq!(names(&out), vec!["Ann", "Bo"]);
        assert!(delete_by_id(&list, RowId(99)).is_none());
    }
}
