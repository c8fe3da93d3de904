use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::models::Statistics;

use super::forms::{
    parse_book_id, parse_borrower, parse_search_field, strip_line_ending, BookForm,
};
use super::helpers::{banner_lines, rule, today};
use super::menu::MenuChoice;
use super::tables::{book_table, BookColumns};
use super::terminal::{clear_screen, write_status, StatusKind, StatusMessage};

/// Presentation switches for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Clear the terminal before each screen.
    pub clear_screen: bool,
    /// Colour status lines with ANSI escapes.
    pub color: bool,
    /// Wait for Enter after each action before redrawing the menu.
    pub pause: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            clear_screen: true,
            color: true,
            pause: true,
        }
    }
}

impl SessionOptions {
    /// No escapes and no pauses; what scripted input wants.
    pub fn plain() -> Self {
        Self {
            clear_screen: false,
            color: false,
            pause: false,
        }
    }
}

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The interactive menu loop. It owns the catalog it was handed and talks to
/// the user through any line reader and writer.
pub struct Session<R, W> {
    catalog: Catalog,
    input: R,
    output: W,
    options: SessionOptions,
    today: fn() -> String,
    status: Option<StatusMessage>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Build a session around an already constructed catalog. Loans are
    /// stamped with today's local date unless [`Session::with_date_source`]
    /// swaps the clock.
    pub fn new(catalog: Catalog, input: R, output: W, options: SessionOptions) -> Self {
        Self {
            catalog,
            input,
            output,
            options,
            today,
            status: None,
        }
    }

    /// Replace the clock used to stamp loans.
    pub fn with_date_source(mut self, today: fn() -> String) -> Self {
        self.today = today;
        self
    }

    /// Hand back the catalog and the writer once the session is over.
    pub fn into_parts(self) -> (Catalog, W) {
        (self.catalog, self.output)
    }

    /// Drive the menu until the user picks exit or input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else {
                debug!("input closed, leaving menu loop");
                break;
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(err) => {
                    warn!(input = line.trim(), "invalid menu choice");
                    self.status = Some(StatusMessage::error(err.to_string()));
                    continue;
                }
            };

            debug!(?choice, "menu selection");
            if self.dispatch(choice)? == Flow::Exit {
                break;
            }
            if self.options.pause && self.pause()? == Flow::Exit {
                break;
            }
        }

        self.farewell()
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::ListAll => self.list_all().map(|_| Flow::Continue),
            MenuChoice::ListAvailable => self.list_available().map(|_| Flow::Continue),
            MenuChoice::Borrow => self.borrow(),
            MenuChoice::Return => self.return_book(),
            MenuChoice::Search => self.search(),
            MenuChoice::Add => self.add(),
            MenuChoice::Statistics => self.statistics().map(|_| Flow::Continue),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        self.start_screen()?;
        writeln!(self.output)?;
        self.write_lines(&banner_lines("LIBRARY MANAGEMENT SYSTEM"))?;
        writeln!(self.output)?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "  {choice}")?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "{}", rule())?;
        if let Some(status) = self.status.take() {
            self.status_line(status.kind, &status.text)?;
        }
        self.prompt("Enter your choice: ")
    }

    fn list_all(&mut self) -> Result<()> {
        self.screen("ALL BOOKS IN LIBRARY")?;
        if self.catalog.is_empty() {
            return self.status_line(StatusKind::Error, "No books in the library yet.");
        }
        let books: Vec<_> = self.catalog.list_all().iter().collect();
        let lines = book_table(&books, BookColumns::Status);
        self.write_lines(&lines)
    }

    fn list_available(&mut self) -> Result<()> {
        self.screen("AVAILABLE BOOKS")?;
        self.write_available()
    }

    fn write_available(&mut self) -> Result<()> {
        let books = self.catalog.list_available();
        if books.is_empty() {
            return self.status_line(StatusKind::Error, "No books available at the moment.");
        }
        let lines = book_table(&books, BookColumns::Isbn);
        self.write_lines(&lines)
    }

    fn borrow(&mut self) -> Result<Flow> {
        self.screen("BORROW A BOOK")?;
        if self.catalog.list_available().is_empty() {
            self.status_line(StatusKind::Error, "No books available at the moment.")?;
            return Ok(Flow::Continue);
        }
        self.write_available()?;
        writeln!(self.output)?;

        let id = match self.ask_book_id("Enter Book ID to borrow (0 to cancel): ")? {
            Some(Some(id)) => id,
            Some(None) => return Ok(Flow::Continue),
            None => return Ok(Flow::Exit),
        };

        // Refuse before asking for a name the loan would never use.
        let available = self.catalog.find_by_id(id).map(|book| book.available);
        match available {
            Err(err) => {
                self.status_line(StatusKind::Error, &err.to_string())?;
                return Ok(Flow::Continue);
            }
            Ok(false) => {
                let err = CatalogError::AlreadyBorrowed(id);
                self.status_line(StatusKind::Error, &err.to_string())?;
                return Ok(Flow::Continue);
            }
            Ok(true) => {}
        }

        let borrower = loop {
            self.prompt("Enter your name: ")?;
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Exit);
            };
            match parse_borrower(&line) {
                Ok(name) => break name,
                Err(err) => self.status_line(StatusKind::Error, &err.to_string())?,
            }
        };

        let date = (self.today)();
        let outcome = self
            .catalog
            .borrow(id, &borrower, &date)
            .map(|book| (book.title.clone(), book.borrow_date.clone()));
        match outcome {
            Ok((title, date)) => {
                writeln!(self.output)?;
                self.status_line(StatusKind::Info, "Book borrowed successfully!")?;
                writeln!(self.output, "Borrow Date: {date}")?;
                writeln!(self.output, "Book: {title}")?;
                writeln!(self.output, "Borrower: {borrower}")?;
            }
            Err(err) => self.status_line(StatusKind::Error, &err.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn return_book(&mut self) -> Result<Flow> {
        self.screen("RETURN A BOOK")?;
        let borrowed = self.catalog.list_borrowed();
        if borrowed.is_empty() {
            self.status_line(StatusKind::Error, "No books are currently borrowed.")?;
            return Ok(Flow::Continue);
        }
        let lines = book_table(&borrowed, BookColumns::Loan);
        self.write_lines(&lines)?;
        writeln!(self.output)?;

        let id = match self.ask_book_id("Enter Book ID to return (0 to cancel): ")? {
            Some(Some(id)) => id,
            Some(None) => return Ok(Flow::Continue),
            None => return Ok(Flow::Exit),
        };

        match self.catalog.return_book(id) {
            Ok(receipt) => {
                writeln!(self.output)?;
                self.status_line(StatusKind::Info, "Book returned successfully!")?;
                writeln!(self.output, "Book: {}", receipt.title)?;
                writeln!(self.output, "Returned by: {}", receipt.borrower)?;
            }
            Err(err) => self.status_line(StatusKind::Error, &err.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        self.screen("SEARCH BOOKS")?;
        writeln!(self.output, "Search by:")?;
        writeln!(self.output, "1. Title")?;
        writeln!(self.output, "2. Author")?;
        writeln!(self.output, "3. ISBN")?;
        self.prompt("Choice: ")?;
        let Some(field_line) = self.read_line()? else {
            return Ok(Flow::Exit);
        };
        self.prompt("Enter search term: ")?;
        let Some(term_line) = self.read_line()? else {
            return Ok(Flow::Exit);
        };

        let field = parse_search_field(&field_line);
        let term = strip_line_ending(&term_line);
        debug!(?field, term, "searching");
        let results = field
            .map(|field| self.catalog.search(field, term))
            .unwrap_or_default();

        writeln!(self.output)?;
        if results.is_empty() {
            self.status_line(StatusKind::Error, "No books found matching your search.")?;
            return Ok(Flow::Continue);
        }
        let lines = book_table(&results, BookColumns::Status);
        writeln!(self.output, "Search Results ({} found):", results.len())?;
        self.write_lines(&lines)?;
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> Result<Flow> {
        self.screen("ADD NEW BOOK")?;
        let mut answers = Vec::with_capacity(3);
        for label in ["Enter book title: ", "Enter author name: ", "Enter ISBN: "] {
            self.prompt(label)?;
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Exit);
            };
            answers.push(line);
        }

        let form = BookForm::from_lines(&answers[0], &answers[1], &answers[2]);
        let id = self.catalog.add_book(&form.title, &form.author, &form.isbn);

        writeln!(self.output)?;
        self.status_line(StatusKind::Info, "Book added successfully!")?;
        writeln!(self.output, "ID: {id}")?;
        writeln!(self.output, "Title: {}", form.title)?;
        writeln!(self.output, "Author: {}", form.author)?;
        writeln!(self.output, "ISBN: {}", form.isbn)?;
        Ok(Flow::Continue)
    }

    fn statistics(&mut self) -> Result<()> {
        self.screen("LIBRARY STATISTICS")?;
        let stats: Statistics = self.catalog.statistics();
        writeln!(self.output, "Total Books: {}", stats.total)?;
        writeln!(self.output, "Available Books: {}", stats.available)?;
        writeln!(self.output, "Borrowed Books: {}", stats.borrowed)?;
        if stats.total > 0 {
            writeln!(self.output, "Availability Rate: {}%", stats.display_rate())?;
        }
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        self.start_screen()?;
        writeln!(self.output)?;
        self.write_lines(&banner_lines("Thanks for using the Library Tracker!"))?;
        self.output.flush().context("failed to flush output")
    }

    /// `None` when input ran out, `Some(None)` when the user cancelled.
    fn ask_book_id(&mut self, prompt: &str) -> Result<Option<Option<u32>>> {
        self.prompt(prompt)?;
        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        match parse_book_id(&line) {
            Ok(id) => Ok(Some(id)),
            Err(err) => {
                self.status_line(StatusKind::Error, &err.to_string())?;
                Ok(Some(None))
            }
        }
    }

    fn pause(&mut self) -> Result<Flow> {
        writeln!(self.output)?;
        self.prompt("Press Enter to continue...")?;
        Ok(match self.read_line()? {
            Some(_) => Flow::Continue,
            None => Flow::Exit,
        })
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        Ok((read > 0).then_some(line))
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush().context("failed to flush prompt")
    }

    fn start_screen(&mut self) -> Result<()> {
        if self.options.clear_screen {
            clear_screen(&mut self.output)?;
        }
        Ok(())
    }

    fn screen(&mut self, title: &str) -> Result<()> {
        self.start_screen()?;
        writeln!(self.output)?;
        self.write_lines(&banner_lines(title))?;
        writeln!(self.output)?;
        Ok(())
    }

    fn status_line(&mut self, kind: StatusKind, text: &str) -> Result<()> {
        write_status(&mut self.output, kind, text, self.options.color)
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }
}
