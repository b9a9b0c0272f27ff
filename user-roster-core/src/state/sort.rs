//! Sorting by name, last name or country

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::UserRow;

/// Sortable column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortField {
    FirstName,
    LastName,
    Country,
}

impl SortField {
    pub fn all() -> [SortField; 3] {
        [SortField::FirstName, SortField::LastName, SortField::Country]
    }

    /// The string this field sorts on
    pub fn key(self, row: &UserRow) -> &str {
        match self {
            SortField::FirstName => row.first_name(),
            SortField::LastName => row.last_name(),
            SortField::Country => row.country(),
        }
    }
}

/// One direction flag per sortable field.
///
/// A flag holds the direction the *next* sort of that field uses:
/// `true` ascending, `false` descending. All start `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirections {
    pub first_name: bool,
    pub last_name: bool,
    pub country: bool,
}

impl SortDirections {
    pub fn get(&self, field: SortField) -> bool {
        match field {
            SortField::FirstName => self.first_name,
            SortField::LastName => self.last_name,
            SortField::Country => self.country,
        }
    }

    /// Flip the flag of `field` and return the value it held before the flip.
    pub fn toggle(&mut self, field: SortField) -> bool {
        let slot = match field {
            SortField::FirstName => &mut self.first_name,
            SortField::LastName => &mut self.last_name,
            SortField::Country => &mut self.country,
        };
        let before = *slot;
        *slot = !before;
        before
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Map common Latin accented letters onto their base letter.
fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => 'e',
        'ğ' => 'g',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'ı' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' | 'ţ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

fn lowercase(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Locale-style string comparison.
///
/// Compares with case and accents folded first, then with accents, then by
/// case. Case-only ties put lowercase first.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    lowercase(a)
        .map(fold_diacritic)
        .cmp(lowercase(b).map(fold_diacritic))
        .then_with(|| lowercase(a).cmp(lowercase(b)))
        .then_with(|| b.cmp(a))
}

/// A sorted copy of `list` on `field`. Stable; the input is left untouched.
pub fn sort_by(list: &[UserRow], field: SortField, ascending: bool) -> Vec<UserRow> {
    let mut sorted = list.to_vec();
    sorted.sort_by(|a, b| {
        let ord = locale_compare(field.key(a), field.key(b));
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
    sorted
}
