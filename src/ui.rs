//! Line-oriented front end for the tracker. The session reads one answer per
//! line and writes plain text screens; crossterm handles clearing and colour,
//! and ratatui lays out the book tables.

mod forms;
mod helpers;
mod menu;
mod session;
mod tables;
mod terminal;

pub use menu::MenuChoice;
pub use session::{Session, SessionOptions};
