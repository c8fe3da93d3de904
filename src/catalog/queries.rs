use crate::error::CatalogError;
use crate::models::{Book, SearchField, Statistics};

use super::Catalog;

impl Catalog {
    /// Every book in insertion order.
    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    /// Books currently on the shelf, in insertion order.
    pub fn list_available(&self) -> Vec<&Book> {
        self.books.iter().filter(|book| book.available).collect()
    }

    /// Books currently lent out, in insertion order.
    pub fn list_borrowed(&self) -> Vec<&Book> {
        self.books.iter().filter(|book| !book.available).collect()
    }

    /// Linear scan for the book with `id`. Ids are unique, so the first match
    /// is the only one.
    pub fn find_by_id(&self, id: u32) -> Result<&Book, CatalogError> {
        self.books
            .iter()
            .find(|book| book.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Mutable twin of [`Catalog::find_by_id`] for the lending transitions.
    pub(crate) fn find_by_id_mut(&mut self, id: u32) -> Result<&mut Book, CatalogError> {
        self.books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Case-insensitive substring match on one field. An empty term matches
    /// every book.
    pub fn search(&self, field: SearchField, term: &str) -> Vec<&Book> {
        let needle = term.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.field(field).to_lowercase().contains(&needle))
            .collect()
    }

    /// Shelf counts in one pass. The rate is derived on demand from the counts
    /// so it can never drift from them.
    pub fn statistics(&self) -> Statistics {
        let available = self.books.iter().filter(|book| book.available).count();
        Statistics {
            total: self.books.len(),
            available,
            borrowed: self.books.len() - available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(books: &[&Book]) -> Vec<u32> {
        books.iter().map(|b| b.id).collect()
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = Catalog::with_sample_books();
        assert_eq!(ids(&catalog.search(SearchField::Title, "great")), vec![1]);
        assert_eq!(ids(&catalog.search(SearchField::Title, "GREAT")), vec![1]);
        assert_eq!(ids(&catalog.search(SearchField::Author, "jane")), vec![4]);
        assert_eq!(ids(&catalog.search(SearchField::Isbn, "0-452")), vec![2]);
    }

    #[test]
    fn empty_term_matches_everything_in_order() {
        let catalog = Catalog::with_sample_books();
        assert_eq!(
            ids(&catalog.search(SearchField::Author, "")),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn search_preserves_insertion_order() {
        let catalog = Catalog::with_sample_books();
        assert_eq!(ids(&catalog.search(SearchField::Title, "the")), vec![1, 5]);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let catalog = Catalog::with_sample_books();
        assert_eq!(catalog.find_by_id(42), Err(CatalogError::NotFound(42)));
        assert_eq!(catalog.find_by_id(2).map(|b| b.title.as_str()), Ok("1984"));
    }

    #[test]
    fn statistics_of_empty_catalog() {
        let stats = Catalog::new().statistics();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.availability_rate(), 0.0);
    }
}
