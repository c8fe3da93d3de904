use thiserror::Error;

/// Reasons a catalog lookup or loan transition can be refused. None of these
/// are fatal; the session reports them and goes back to the menu.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Book {0} not found!")]
    NotFound(u32),
    #[error("Book {0} is already borrowed!")]
    AlreadyBorrowed(u32),
    #[error("Book {0} is not borrowed!")]
    NotBorrowed(u32),
}

/// Problems reading a selection from the main menu.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("Invalid choice '{0}'! Please try again.")]
    InvalidMenuChoice(String),
}
