//! Book record model.
//!
//! A [`Book`] is one catalog entry. Identifiers are assigned by the record
//! store when a record is created through the form; the seed catalog ships
//! with fixed identifiers.

use super::category::Category;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder image service used for cover art.
const COVER_ENDPOINT: &str = "https://placehold.co/400x600";

/// Background colour of covers for books added through the form.
pub const NEW_COVER_COLOUR: &str = "047857";

/// Text colour of covers for books added through the form.
pub const NEW_COVER_TEXT: &str = "white";

/// Highest rating a book can carry.
pub const MAX_RATING: f64 = 5.0;

/// Characters left unescaped in cover query strings, matching
/// `encodeURIComponent`.
const COVER_TEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Unique, immutable identifier of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = std::num::ParseIntError;

    /// Accepts integer text and integral decimal text such as `2.0`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.parse().map(Self).or_else(|err| match s.parse::<f64>() {
            Ok(n) if n.is_finite() && n.fract() == 0.0 && (0.0..=u64::MAX as f64).contains(&n) => Ok(Self(n as u64)),
            _ => Err(err),
        })
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub category: Category,
    /// Rating between 0.0 and 5.0.
    pub rating: f64,
    pub description: String,
    /// Placeholder image URL, see [`cover_url`].
    pub cover: String,
}

impl Book {
    /// Builds a record from a validated form payload and a fresh identifier.
    ///
    /// The cover is synthesized from the title with the "new book" colours.
    #[must_use]
    pub fn from_new(id: BookId, new: NewBook) -> Self {
        let cover = cover_url(&new.title, NEW_COVER_COLOUR, NEW_COVER_TEXT);
        Self {
            id,
            title: new.title,
            author: new.author,
            category: new.category,
            rating: new.rating,
            description: new.description,
            cover,
        }
    }

    /// Number of whole stars to draw for this rating.
    #[must_use]
    pub fn star_count(&self) -> usize {
        // Ratings are clamped to 0..=5 so the cast cannot truncate meaningfully.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let stars = self.rating.clamp(0.0, MAX_RATING).floor() as usize;
        stars
    }
}

/// A validated creation request that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub category: Category,
    pub rating: f64,
    pub description: String,
}

/// Builds a placeholder cover URL that renders `title` on a coloured card.
///
/// # Examples
///
/// ```
/// use bookstacks::domain::book::cover_url;
///
/// assert_eq!(
///     cover_url("Pride & Prejudice", "292524", "f0fdf4"),
///     "https://placehold.co/400x600/292524/f0fdf4?text=Pride%20%26%20Prejudice"
/// );
/// ```
#[must_use]
pub fn cover_url(title: &str, colour: &str, text_colour: &str) -> String {
    let text = utf8_percent_encode(title, COVER_TEXT);
    format!("{COVER_ENDPOINT}/{colour}/{text_colour}?text={text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_text_keeps_unreserved_marks() {
        let url = cover_url("Don't Panic!", "000000", "white");
        assert!(url.ends_with("?text=Don't%20Panic!"));
    }

    #[test]
    fn star_count_floors_and_clamps() {
        let mut book = Book::from_new(
            BookId(1),
            NewBook {
                title: "t".into(),
                author: "a".into(),
                category: Category::Fiction,
                rating: 4.9,
                description: "d".into(),
            },
        );
        assert_eq!(book.star_count(), 4);
        book.rating = 7.0;
        assert_eq!(book.star_count(), 5);
        book.rating = -1.0;
        assert_eq!(book.star_count(), 0);
    }

    #[test]
    fn book_id_parses_padded_text() {
        assert_eq!(" 42 ".parse::<BookId>().ok(), Some(BookId(42)));
        assert!("forty".parse::<BookId>().is_err());
    }

    #[test]
    fn book_id_accepts_integral_decimals_only() {
        assert_eq!("2.0".parse::<BookId>().ok(), Some(BookId(2)));
        assert_eq!("1e2".parse::<BookId>().ok(), Some(BookId(100)));
        assert!("2.5".parse::<BookId>().is_err());
        assert!("-3.0".parse::<BookId>().is_err());
        assert!("inf".parse::<BookId>().is_err());
        assert!("NaN".parse::<BookId>().is_err());
    }
}
