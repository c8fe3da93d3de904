//! Core library surface for the library lending tracker.
//!
//! The catalog is the whole domain: an ordered, in-memory list of books with
//! borrow and return transitions. Everything under `ui` is the interactive
//! menu that drives it.
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod ui;

/// The in-memory store and its error type.
pub use catalog::Catalog;
pub use error::{CatalogError, MenuError};

/// Data handed out by catalog queries.
pub use models::{Book, ReturnReceipt, SearchField, Statistics};

/// The interactive menu loop and its switches.
pub use ui::{Session, SessionOptions};
