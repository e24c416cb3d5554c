//! Pure derived views over a catalog snapshot.
//!
//! Every function here reads a slice of books and returns references into it.
//! Nothing is cached; callers recompute from the current snapshot on each
//! render. Result order always follows snapshot order.

use super::book::{Book, BookId};
use super::category::Category;

/// Ratings must be strictly above this to appear among the highlights.
pub const HIGHLIGHT_THRESHOLD: f64 = 4.7;

/// Maximum number of highlighted books.
pub const HIGHLIGHT_LIMIT: usize = 4;

/// Outcome of looking a book up by identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a Book),
    /// No record carries the identifier. Callers show a fallback view.
    Missing,
}

impl<'a> Lookup<'a> {
    #[must_use]
    pub const fn book(self) -> Option<&'a Book> {
        match self {
            Self::Found(book) => Some(book),
            Self::Missing => None,
        }
    }
}

/// Selects the readers' favourites: rating above [`HIGHLIGHT_THRESHOLD`],
/// at most [`HIGHLIGHT_LIMIT`] of them.
///
/// # Examples
///
/// ```
/// use bookstacks::domain::{seed_books, selectors::highlights};
///
/// let books = seed_books();
/// let top = highlights(&books);
/// assert_eq!(top.len(), 4);
/// assert!(top.iter().all(|b| b.rating > 4.7));
/// ```
#[must_use]
pub fn highlights(books: &[Book]) -> Vec<&Book> {
    books
        .iter()
        .filter(|book| book.rating > HIGHLIGHT_THRESHOLD)
        .take(HIGHLIGHT_LIMIT)
        .collect()
}

/// Filters by optional category label and free-text query.
///
/// A record is kept when the category is unset or equals the record's label
/// case-insensitively, and the query is empty or is a case-insensitive
/// substring of the title or the author.
#[must_use]
pub fn filter_books<'a>(books: &'a [Book], category: Option<&str>, query: &str) -> Vec<&'a Book> {
    let _span = tracing::debug_span!(
        "filter_books",
        total_books = books.len(),
        category = ?category,
        query_len = query.len()
    )
    .entered();

    let needle = query.to_lowercase();

    let filtered: Vec<&Book> = books
        .iter()
        .filter(|book| category.map_or(true, |label| book.category.matches_label(label)))
        .filter(|book| {
            needle.is_empty()
                || book.title.to_lowercase().contains(&needle)
                || book.author.to_lowercase().contains(&needle)
        })
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "catalog filter applied");
    filtered
}

/// Finds the first record with the given identifier.
#[must_use]
pub fn find_book(books: &[Book], id: BookId) -> Lookup<'_> {
    books
        .iter()
        .find(|book| book.id == id)
        .map_or(Lookup::Missing, Lookup::Found)
}

/// Looks a book up by the raw `:id` segment of a detail route.
///
/// Text that is not a number cannot match any record and yields
/// [`Lookup::Missing`].
#[must_use]
pub fn find_by_route_id<'a>(books: &'a [Book], raw_id: &str) -> Lookup<'a> {
    raw_id
        .parse::<BookId>()
        .map_or(Lookup::Missing, |id| find_book(books, id))
}

/// Counts records per genre, in display order. Genres with no records are
/// included with a count of zero.
#[must_use]
pub fn category_counts(books: &[Book]) -> Vec<(Category, usize)> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let count = books.iter().filter(|b| b.category == category).count();
            (category, count)
        })
        .collect()
}
