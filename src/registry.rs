use std::collections::HashMap;

use crate::{book::Book, error::LendingError, member::Member};

/// The library's single in-memory store: the catalog (ISBN to book) and
/// the membership roll (member ID to member).
///
/// The registry enforces key uniqueness and nothing else; business
/// rules live in the lending system. Lookups hand out references into
/// the shared store, so mutations made through the lending system are
/// visible immediately; nothing is copied.
#[derive(Debug, Default)]
pub struct Registry {
    /// Catalog keyed by ISBN.
    books: HashMap<String, Book>,
    /// ISBNs in the order they were added, for deterministic listings.
    shelf_order: Vec<String>,
    /// Membership roll keyed by member ID.
    members: HashMap<String, Member>,
}

impl Registry {
    /// Create an empty registry with no books and no members.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new book to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`LendingError::InvalidIdentifier`] if the ISBN is empty
    /// and [`LendingError::DuplicateBook`] if the ISBN is already in
    /// the catalog.
    pub fn add_book(&mut self, book: Book) -> Result<(), LendingError> {
        if book.isbn().is_empty() {
            return Err(LendingError::InvalidIdentifier("isbn"));
        }
        if self.books.contains_key(book.isbn()) {
            return Err(LendingError::DuplicateBook(book.isbn().to_string()));
        }
        self.shelf_order.push(book.isbn().to_string());
        self.books.insert(book.isbn().to_string(), book);
        Ok(())
    }

    /// Register a new member.
    ///
    /// # Errors
    ///
    /// Returns [`LendingError::InvalidIdentifier`] if the member ID is
    /// empty and [`LendingError::DuplicateMember`] if the ID is already
    /// registered.
    pub fn register_member(&mut self, member: Member) -> Result<(), LendingError> {
        if member.member_id().is_empty() {
            return Err(LendingError::InvalidIdentifier("member_id"));
        }
        if self.members.contains_key(member.member_id()) {
            return Err(LendingError::DuplicateMember(member.member_id().to_string()));
        }
        self.members.insert(member.member_id().to_string(), member);
        Ok(())
    }

    /// Look up a book by ISBN.
    ///
    /// # Errors
    ///
    /// Returns [`LendingError::BookNotFound`] for an unknown ISBN.
    pub fn book(&self, isbn: &str) -> Result<&Book, LendingError> {
        self.books.get(isbn).ok_or_else(|| LendingError::BookNotFound(isbn.to_string()))
    }

    /// Look up a member by ID.
    ///
    /// # Errors
    ///
    /// Returns [`LendingError::MemberNotFound`] for an unknown ID.
    pub fn member(&self, member_id: &str) -> Result<&Member, LendingError> {
        self.members
            .get(member_id)
            .ok_or_else(|| LendingError::MemberNotFound(member_id.to_string()))
    }

    /// Mutable member lookup for the lending system.
    pub(crate) fn member_mut(&mut self, member_id: &str) -> Result<&mut Member, LendingError> {
        self.members
            .get_mut(member_id)
            .ok_or_else(|| LendingError::MemberNotFound(member_id.to_string()))
    }

    /// Resolve a member and a book together for a checkout or return.
    /// The member is resolved first, so an unknown member wins over an
    /// unknown book when both keys are bad.
    pub(crate) fn loan_pair_mut(
        &mut self,
        member_id: &str,
        isbn: &str,
    ) -> Result<(&mut Member, &mut Book), LendingError> {
        let member = self
            .members
            .get_mut(member_id)
            .ok_or_else(|| LendingError::MemberNotFound(member_id.to_string()))?;
        let book =
            self.books.get_mut(isbn).ok_or_else(|| LendingError::BookNotFound(isbn.to_string()))?;
        Ok((member, book))
    }

    /// All books currently available for checkout, in the order they
    /// were added to the catalog.
    #[must_use]
    pub fn available_books(&self) -> Vec<&Book> {
        self.shelf_order
            .iter()
            .filter_map(|isbn| self.books.get(isbn))
            .filter(|book| book.is_available())
            .collect()
    }

    /// Number of books in the catalog.
    #[must_use]
    pub fn catalog_size(&self) -> usize {
        self.books.len()
    }

    /// Number of registered members.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

#[cfg(test)]
mod tests {
    use super::Registry;
    use crate::{book::Book, error::LendingError, member::Member};

    #[test]
    fn duplicate_isbn_is_rejected() {
        let mut registry = Registry::new();
        drop(registry.add_book(Book::new("111", "Clean Code", "Robert C. Martin")));
        let err = registry.add_book(Book::new("111", "Duplicate", "Someone"));
        assert_eq!(err, Err(LendingError::DuplicateBook("111".to_string())));
        assert_eq!(registry.catalog_size(), 1);
    }

    #[test]
    fn duplicate_member_id_is_rejected() {
        let mut registry = Registry::new();
        drop(registry.register_member(Member::new("M1", "Apurv")));
        let err = registry.register_member(Member::new("M1", "Someone Else"));
        assert_eq!(err, Err(LendingError::DuplicateMember("M1".to_string())));
        assert_eq!(registry.member_count(), 1);
    }

    #[test]
    fn empty_keys_are_rejected() {
        let mut registry = Registry::new();
        assert_eq!(
            registry.add_book(Book::new("", "No ISBN", "Nobody")),
            Err(LendingError::InvalidIdentifier("isbn"))
        );
        assert_eq!(
            registry.register_member(Member::new("", "No ID")),
            Err(LendingError::InvalidIdentifier("member_id"))
        );
    }

    #[test]
    fn lookups_report_unknown_keys() {
        let registry = Registry::new();
        assert_eq!(registry.book("999").err(), Some(LendingError::BookNotFound("999".to_string())));
        assert_eq!(
            registry.member("M999").err(),
            Some(LendingError::MemberNotFound("M999".to_string()))
        );
    }

    #[test]
    fn available_books_keeps_insertion_order() {
        let mut registry = Registry::new();
        drop(registry.add_book(Book::new("222", "Design Patterns", "GoF")));
        drop(registry.add_book(Book::new("111", "Clean Code", "Robert C. Martin")));
        drop(registry.add_book(Book::new("333", "Effective Java", "Joshua Bloch")));

        let isbns: Vec<&str> = registry.available_books().iter().map(|b| b.isbn()).collect();
        assert_eq!(isbns, vec!["222", "111", "333"]);
    }
}
