//! Navigation targets and their path syntax.
//!
//! | path               | route                                   |
//! |--------------------|-----------------------------------------|
//! | `/`                | [`Route::Home`]                         |
//! | `/books`           | [`Route::Browse`] without a category    |
//! | `/books/:category` | [`Route::Browse`] filtered by a label   |
//! | `/book/:id`        | [`Route::Detail`]                       |
//! | `/add`             | [`Route::Add`]                          |
//! | anything else      | [`Route::NotFound`] carrying the path   |
//!
//! Segments are percent-decoded, so `/books/Non%2DFiction` and
//! `/books/Non-Fiction` name the same shelf.

use percent_encoding::percent_decode_str;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A parsed navigation path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    /// The shelves, optionally restricted to one category label.
    ///
    /// The label is kept as written; an unknown label is a valid route that
    /// simply matches no books.
    Browse { category: Option<String> },
    /// One book. The raw `:id` segment is resolved against the catalog when
    /// the view is computed.
    Detail { id: String },
    Add,
    NotFound { path: String },
}

impl Route {
    /// Parses a navigation path. Never fails; unmatched paths become
    /// [`Route::NotFound`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bookstacks::app::Route;
    ///
    /// assert_eq!(Route::parse("/books/"), Route::Browse { category: None });
    /// assert_eq!(Route::parse("/book/2"), Route::Detail { id: "2".into() });
    /// assert!(matches!(Route::parse("/shelf"), Route::NotFound { .. }));
    /// ```
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let segments: Vec<String> = trimmed
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
            .collect();

        match segments.as_slice() {
            [] if trimmed.is_empty() || trimmed.starts_with('/') => Self::Home,
            [books] if books == "books" => Self::Browse { category: None },
            [books, category] if books == "books" => Self::Browse {
                category: Some(category.clone()),
            },
            [book, id] if book == "book" => Self::Detail { id: id.clone() },
            [add] if add == "add" => Self::Add,
            _ => Self::NotFound {
                path: trimmed.to_string(),
            },
        }
    }

    /// Canonical path of this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Browse { category: None } => "/books".to_string(),
            Self::Browse { category: Some(category) } => format!("/books/{category}"),
            Self::Detail { id } => format!("/book/{id}"),
            Self::Add => "/add".to_string(),
            Self::NotFound { path } => path.clone(),
        }
    }

    /// Where "back" leads from this route.
    ///
    /// Detail pages and category shelves return to the full shelves;
    /// everything else returns home.
    #[must_use]
    pub fn parent(&self) -> Self {
        match self {
            Self::Detail { .. } | Self::Browse { category: Some(_) } => Self::Browse { category: None },
            Self::Home | Self::Browse { category: None } | Self::Add | Self::NotFound { .. } => Self::Home,
        }
    }

    /// Category label when browsing a single shelf.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Browse { category } => category.as_deref(),
            _ => None,
        }
    }

    /// Short name used for the pane title and nav highlighting.
    #[must_use]
    pub const fn section(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Browse { .. } | Self::Detail { .. } => "Browse",
            Self::Add => "Add Book",
            Self::NotFound { .. } => "Lost",
        }
    }
}

impl FromStr for Route {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
