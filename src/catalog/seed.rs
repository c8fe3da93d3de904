use super::Catalog;

/// Books every fresh session starts with, as `(title, author, isbn)`.
const SAMPLE_BOOKS: &[(&str, &str, &str)] = &[
    ("The Great Gatsby", "F. Scott Fitzgerald", "978-0-7432-7356-5"),
    ("1984", "George Orwell", "978-0-452-28423-4"),
    ("To Kill a Mockingbird", "Harper Lee", "978-0-06-112008-4"),
    ("Pride and Prejudice", "Jane Austen", "978-0-14-143951-8"),
    ("The Catcher in the Rye", "J.D. Salinger", "978-0-316-76948-0"),
];

impl Catalog {
    /// A catalog preloaded with the sample books, ids 1 through 5.
    pub fn with_sample_books() -> Self {
        let mut catalog = Self::new();
        for (title, author, isbn) in SAMPLE_BOOKS {
            catalog.add_book(title, author, isbn);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_get_ids_one_to_five() {
        let catalog = Catalog::with_sample_books();
        let ids: Vec<u32> = catalog.list_all().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(catalog.list_all().iter().all(|b| b.available));
    }

    #[test]
    fn next_id_follows_the_samples() {
        let mut catalog = Catalog::with_sample_books();
        assert_eq!(catalog.add_book("Dune", "Frank Herbert", ""), 6);
    }
}
