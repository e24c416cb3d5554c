//! Genre labels used to file books.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six genres a book can be filed under.
///
/// Variants are listed in the order the home page shows them. Labels parse
/// case-insensitively, so `"sci-fi"` and `"SCI-FI"` both give [`Category::SciFi`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Fiction")]
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    #[serde(rename = "Mystery")]
    Mystery,
    #[serde(rename = "Classic")]
    Classic,
    #[serde(rename = "Fantasy")]
    Fantasy,
}

impl Category {
    /// All genres in display order.
    pub const ALL: [Self; 6] = [
        Self::Fiction,
        Self::NonFiction,
        Self::SciFi,
        Self::Mystery,
        Self::Classic,
        Self::Fantasy,
    ];

    /// Display label, also used in `/books/:category` routes.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::NonFiction => "Non-Fiction",
            Self::SciFi => "Sci-Fi",
            Self::Mystery => "Mystery",
            Self::Classic => "Classic",
            Self::Fantasy => "Fantasy",
        }
    }

    /// Case-insensitive comparison against a label, taken exactly as given.
    #[must_use]
    pub fn matches_label(self, label: &str) -> bool {
        self.label().eq_ignore_ascii_case(label)
    }

    /// The genre after this one in display order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The genre before this one in display order, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a label names none of the six genres.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category `{}`", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.matches_label(label))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
