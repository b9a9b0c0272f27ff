//! User record type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// A user as returned by the random-user API.
///
/// The shape is passed through untouched. Every nested object and field
/// defaults to empty when the payload omits it, so a partial record renders
/// as blank cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub name: Name,
    pub location: Location,
    pub picture: Picture,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Name {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Picture {
    pub thumbnail: String,
}

impl UserRecord {
    /// Convenience constructor, mostly for fixtures
    pub fn new(
        first: impl Into<String>,
        last: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: Name {
                first: first.into(),
                last: last.into(),
            },
            location: Location {
                country: country.into(),
            },
            picture: Picture::default(),
        }
    }

    /// "First Last", trimmed when either half is missing
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
            .trim()
            .to_string()
    }
}

/// Synthetic row identity, assigned when a fetch result is loaded.
///
/// Positions shift under sorting and filtering; a `RowId` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A loaded user together with its row identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: RowId,
    pub record: UserRecord,
}

impl UserRow {
    pub fn first_name(&self) -> &str {
        &self.record.name.first
    }

    pub fn last_name(&self) -> &str {
        &self.record.name.last
    }

    pub fn country(&self) -> &str {
        &self.record.location.country
    }

    pub fn thumbnail(&self) -> &str {
        &self.record.picture.thumbnail
    }
}
