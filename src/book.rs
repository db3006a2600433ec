use serde::{Deserialize, Serialize};

/// A single title in the library catalog, keyed by ISBN.
///
/// Availability is a single flag: the book is available iff no open
/// borrow record references its ISBN. Only the lending system flips it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Book {
    /// Unique identifier for the book.
    isbn: String,
    /// Book title.
    title: String,
    /// Author name.
    author: String,
    /// Whether the book is currently available for checkout.
    is_available: bool,
}

impl Book {
    /// Create a new book, available for checkout.
    #[must_use]
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            is_available: true,
        }
    }

    /// The book's ISBN.
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// The book's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The book's author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Whether the book can currently be checked out.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.is_available
    }

    /// Flip the availability flag. Crate-internal: only checkout and
    /// return transitions may change availability.
    pub(crate) fn set_available(&mut self, available: bool) {
        self.is_available = available;
    }
}
