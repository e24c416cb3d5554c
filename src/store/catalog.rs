//! The book catalog store: reducer, actions and identifier allocation.

use super::container::Store;
use super::reducer::{Reducer, Transition};
use crate::domain::{seed_books, Book, BookId, BookstacksError, NewBook, Result};

/// Mutation requests accepted by the catalog store.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    /// Initialization marker. The catalog is seeded at construction, so
    /// dispatching this afterwards is an identity transition.
    Init,
    /// Prepends a fully formed record to the catalog.
    AddBook(Book),
}

/// Reducer owning the catalog list. Newest records come first.
#[derive(Debug, Clone, Default)]
pub struct CatalogReducer {
    seed: Option<Vec<Book>>,
}

impl CatalogReducer {
    /// Reducer that starts from the built-in seed catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self { seed: None }
    }

    /// Reducer that starts from the given records instead of the seed.
    #[must_use]
    pub fn with_books(books: Vec<Book>) -> Self {
        Self { seed: Some(books) }
    }
}

impl Reducer for CatalogReducer {
    type State = Vec<Book>;
    type Action = CatalogAction;

    fn initial_state(&self) -> Vec<Book> {
        self.seed.clone().unwrap_or_else(seed_books)
    }

    fn reduce(&self, state: &Vec<Book>, action: &CatalogAction) -> Transition<Vec<Book>> {
        match action {
            CatalogAction::Init => Transition::Unchanged,
            CatalogAction::AddBook(book) => {
                if state.iter().any(|existing| existing.id == book.id) {
                    tracing::warn!(book_id = %book.id, "refusing record with duplicate id");
                    return Transition::Unchanged;
                }

                let mut next = Vec::with_capacity(state.len() + 1);
                next.push(book.clone());
                next.extend(state.iter().cloned());

                tracing::info!(book_id = %book.id, title = %book.title, total = next.len(), "book added");
                Transition::Changed(next)
            }
        }
    }
}

/// The store holding the catalog.
pub type CatalogStore = Store<CatalogReducer>;

/// Creates a catalog store seeded with the built-in records.
#[must_use]
pub fn catalog_store() -> CatalogStore {
    Store::new(CatalogReducer::new())
}

/// Hands out identifiers for new records.
///
/// Identifiers increase monotonically from one past the largest identifier
/// seen at construction and skip any value already present in the snapshot
/// they are checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Starts allocation after the largest identifier in `books`.
    #[must_use]
    pub fn after(books: &[Book]) -> Self {
        let max = books.iter().map(|book| book.id.0).max().unwrap_or(0);
        Self { next: max + 1 }
    }

    /// Returns an identifier not used by any record in `books`.
    pub fn allocate(&mut self, books: &[Book]) -> BookId {
        loop {
            let candidate = BookId(self.next);
            self.next += 1;
            if books.iter().all(|book| book.id != candidate) {
                return candidate;
            }
        }
    }
}

/// Assigns an identifier to `new`, builds the record and dispatches it.
///
/// # Errors
///
/// Returns [`BookstacksError::Store`] if the store refused the record, which
/// only happens when its identifier is already taken.
///
/// # Example
///
/// ```
/// use bookstacks::domain::{Category, NewBook};
/// use bookstacks::store::{add_book, catalog_store, IdAllocator};
///
/// let store = catalog_store();
/// let mut ids = IdAllocator::after(&store.snapshot());
/// let new = NewBook {
///     title: "Piranesi".into(),
///     author: "Susanna Clarke".into(),
///     category: Category::Fantasy,
///     rating: 4.6,
///     description: "A house of endless halls.".into(),
/// };
///
/// let id = add_book(&store, &mut ids, new).unwrap();
/// assert_eq!(store.snapshot()[0].id, id);
/// ```
pub fn add_book(store: &CatalogStore, ids: &mut IdAllocator, new: NewBook) -> Result<BookId> {
    let id = ids.allocate(&store.snapshot());
    let book = Book::from_new(id, new);

    if store.dispatch(CatalogAction::AddBook(book)) {
        Ok(id)
    } else {
        Err(BookstacksError::Store(format!("record id {id} is already in use")))
    }
}
