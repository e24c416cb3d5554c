//! The "Contribute a Book" form: field buffers, focus order and validation.

use crate::domain::{Category, NewBook};
use crate::domain::book::MAX_RATING;
use std::collections::BTreeMap;

/// Input fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Author,
    Category,
    Rating,
    Description,
}

impl FormField {
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Author,
        Self::Category,
        Self::Rating,
        Self::Description,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Book Title",
            Self::Author => "Author",
            Self::Category => "Category",
            Self::Rating => "Rating (0-5)",
            Self::Description => "Description",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Title => "e.g. The Midnight Library",
            Self::Author => "e.g. Matt Haig",
            Self::Category => "[ / ] to pick a genre",
            Self::Rating => "4.5",
            Self::Description => "What makes this book worth reading?",
        }
    }

    /// Message shown when the field fails validation.
    #[must_use]
    pub const fn error_message(self) -> &'static str {
        match self {
            Self::Title => "Every book needs a title!",
            Self::Author => "Who wrote this masterpiece?",
            Self::Category => "Please file this under a category.",
            Self::Rating => "Rating must be between 0 and 5.",
            Self::Description => "Tell us a little about it.",
        }
    }

    /// The field after this one, wrapping to the first.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The field before this one, wrapping to the last.
    #[must_use]
    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Per-field validation failures.
///
/// An empty value means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<FormField, &'static str>,
}

impl FormErrors {
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.fields.get(&field).copied()
    }

    #[must_use]
    pub fn contains(&self, field: FormField) -> bool {
        self.fields.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Failing fields in focus order.
    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.fields.keys().copied()
    }

    /// Removes the error for `field`. Returns `true` if one was present.
    pub fn clear(&mut self, field: FormField) -> bool {
        self.fields.remove(&field).is_some()
    }

    fn flag(&mut self, field: FormField) {
        self.fields.insert(field, field.error_message());
    }
}

/// Raw text of every form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub category: String,
    pub rating: String,
    pub description: String,
}

impl BookForm {
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::Category => &self.category,
            FormField::Rating => &self.rating,
            FormField::Description => &self.description,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Author => &mut self.author,
            FormField::Category => &mut self.category,
            FormField::Rating => &mut self.rating,
            FormField::Description => &mut self.description,
        }
    }

    /// Steps the category field through the six genres.
    ///
    /// An empty or unrecognized value starts from the first (or last) genre.
    pub fn cycle_category(&mut self, forward: bool) {
        let next = match (self.category.parse::<Category>().ok(), forward) {
            (Some(current), true) => current.next(),
            (Some(current), false) => current.previous(),
            (None, true) => Category::ALL[0],
            (None, false) => Category::ALL[Category::ALL.len() - 1],
        };
        self.category = next.label().to_string();
    }

    /// Checks every field and builds the creation payload.
    ///
    /// Text fields must contain something other than whitespace. The category
    /// must name one of the six genres. The rating must be a number in
    /// `0..=5`.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once so the view can mark all of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookstacks::app::form::{BookForm, FormField};
    ///
    /// let form = BookForm {
    ///     title: "Dune Messiah".into(),
    ///     author: "Frank Herbert".into(),
    ///     category: "Sci-Fi".into(),
    ///     rating: "6".into(),
    ///     description: "The sequel.".into(),
    /// };
    /// let errors = form.validate().unwrap_err();
    /// assert_eq!(errors.get(FormField::Rating), Some("Rating must be between 0 and 5."));
    /// assert_eq!(errors.len(), 1);
    /// ```
    pub fn validate(&self) -> Result<NewBook, FormErrors> {
        let mut errors = FormErrors::default();

        let title = self.title.trim();
        let author = self.author.trim();
        let description = self.description.trim();

        if title.is_empty() {
            errors.flag(FormField::Title);
        }
        if author.is_empty() {
            errors.flag(FormField::Author);
        }
        if description.is_empty() {
            errors.flag(FormField::Description);
        }

        let category = self.category.parse::<Category>().ok();
        if category.is_none() {
            errors.flag(FormField::Category);
        }

        let rating = self
            .rating
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite() && (0.0..=MAX_RATING).contains(r));
        if rating.is_none() {
            errors.flag(FormField::Rating);
        }

        match (category, rating) {
            (Some(category), Some(rating)) if errors.is_empty() => Ok(NewBook {
                title: title.to_string(),
                author: author.to_string(),
                category,
                rating,
                description: description.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_order_wraps_both_ways() {
        assert_eq!(FormField::Description.next(), FormField::Title);
        assert_eq!(FormField::Title.previous(), FormField::Description);
        assert_eq!(FormField::Author.next(), FormField::Category);
    }

    #[test]
    fn category_cycle_starts_from_first_genre() {
        let mut form = BookForm::default();
        form.cycle_category(true);
        assert_eq!(form.category, "Fiction");
        form.cycle_category(false);
        assert_eq!(form.category, "Fantasy");
    }

    #[test]
    fn empty_form_flags_every_field() {
        let errors = BookForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), FormField::ALL.len());
    }
}
