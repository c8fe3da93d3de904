use tracing::info;

use crate::error::CatalogError;
use crate::models::{Book, ReturnReceipt};

use super::Catalog;

impl Catalog {
    /// Lend a book out. Fails without touching state when the id is unknown or
    /// the book is already lent.
    pub fn borrow(&mut self, id: u32, borrower: &str, date: &str) -> Result<&Book, CatalogError> {
        let book = self.find_by_id_mut(id)?;
        if !book.available {
            return Err(CatalogError::AlreadyBorrowed(id));
        }

        book.available = false;
        book.borrower = borrower.to_string();
        book.borrow_date = date.to_string();
        info!(id, borrower, date, "book borrowed");
        Ok(&*book)
    }

    /// Put a lent book back on the shelf and report who had it.
    pub fn return_book(&mut self, id: u32) -> Result<ReturnReceipt, CatalogError> {
        let book = self.find_by_id_mut(id)?;
        if book.available {
            return Err(CatalogError::NotBorrowed(id));
        }

        let borrower = std::mem::take(&mut book.borrower);
        book.borrow_date.clear();
        book.available = true;
        info!(id, borrower = borrower.as_str(), "book returned");
        Ok(ReturnReceipt {
            title: book.title.clone(),
            borrower,
        })
    }
}
