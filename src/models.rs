//! Domain models handed between the catalog and the interactive session. They
//! stay plain data holders so the catalog owns every rule about how they
//! change.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single physical book on the shelf.
pub struct Book {
    /// Assigned by the catalog starting at 1. Never reused.
    pub id: u32,
    /// Free-form title, stored exactly as entered. Searchable.
    pub title: String,
    /// Free-form author name, also searchable.
    pub author: String,
    /// Kept as text because nothing checks its format; hyphenated and bare
    /// forms both show up in practice.
    pub isbn: String,
    /// `true` while the book is on the shelf.
    pub available: bool,
    /// Name of the current borrower, empty while available.
    pub borrower: String,
    /// Calendar date the loan started, empty while available.
    pub borrow_date: String,
}

impl Book {
    pub(crate) fn new(id: u32, title: &str, author: &str, isbn: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            available: true,
            borrower: String::new(),
            borrow_date: String::new(),
        }
    }

    /// Short availability label used in status columns.
    pub fn status_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Borrowed"
        }
    }

    /// Text of the requested field, used by case-insensitive search.
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.title,
            SearchField::Author => &self.author,
            SearchField::Isbn => &self.isbn,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

/// Which text field a search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Isbn,
}

impl SearchField {
    /// Map the numbered search sub-menu (1 title, 2 author, 3 isbn). Anything
    /// else has no field.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(SearchField::Title),
            2 => Some(SearchField::Author),
            3 => Some(SearchField::Isbn),
            _ => None,
        }
    }
}

/// Counts summarising the shelf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Every book in the catalog.
    pub total: usize,
    /// Books on the shelf right now.
    pub available: usize,
    /// Books lent out right now. Always `total - available`.
    pub borrowed: usize,
}

impl Statistics {
    /// Percentage of books on the shelf, 0 for an empty catalog.
    pub fn availability_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.available as f64 / self.total as f64 * 100.0
        }
    }

    /// The availability rate rounded to one decimal place.
    pub fn display_rate(&self) -> String {
        format!("{:.1}", self.availability_rate())
    }
}

/// What the catalog hands back after a successful return. The book record is
/// already cleared by then, so the receipt is the only place the borrower's
/// name survives for the confirmation screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnReceipt {
    /// Title of the returned book.
    pub title: String,
    /// Who had the book before it came back.
    pub borrower: String,
}
