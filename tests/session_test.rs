use std::io::Cursor;

use library_tracker::{Catalog, Session, SessionOptions};
use pretty_assertions::assert_eq;

fn spring_day() -> String {
    "14/3/2025".to_string()
}

fn run(catalog: Catalog, script: &str) -> (Catalog, String) {
    let mut session = Session::new(
        catalog,
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        SessionOptions::plain(),
    )
    .with_date_source(spring_day);
    session.run().expect("scripted session runs to completion");
    let (catalog, output) = session.into_parts();
    (catalog, String::from_utf8(output).expect("output is utf8"))
}

#[test]
fn borrow_and_return_through_the_menu() {
    let (catalog, out) = run(Catalog::with_sample_books(), "3\n1\nAlice\n4\n1\n8\n");

    assert!(out.contains("Borrow Date: 14/3/2025"));
    assert!(out.contains("Book: The Great Gatsby"));
    assert!(out.contains("Borrower: Alice"));
    assert!(out.contains("Returned by: Alice"));
    assert_eq!(catalog.list_available().len(), 5);
}

#[test]
fn return_screen_lists_loans() {
    let mut catalog = Catalog::with_sample_books();
    catalog.borrow(2, "Bob", "2/2/2025").expect("borrow");
    let (catalog, out) = run(catalog, "4\n0\n8\n");

    assert!(out.contains("Borrow Date"));
    assert!(out.lines().any(|line| line.starts_with("2 ") && line.contains("Bob")));
    assert_eq!(catalog.list_borrowed().len(), 1);
}

#[test]
fn add_then_list_shows_new_book() {
    let (catalog, out) = run(
        Catalog::new(),
        "1\n6\nDune\nFrank Herbert\n978-0441013593\n1\n8\n",
    );

    assert!(out.contains("No books in the library yet."));
    assert!(out.contains("Book added successfully!"));
    assert!(out.contains("ID: 1"));
    assert!(out
        .lines()
        .any(|line| line.starts_with("1 ") && line.contains("Dune") && line.ends_with("Available")));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn search_by_author_reports_count() {
    let (_, out) = run(Catalog::with_sample_books(), "5\n2\norwell\n8\n");
    assert!(out.contains("Search Results (1 found):"));
    assert!(out.contains("1984"));
}

#[test]
fn statistics_screen() {
    let mut catalog = Catalog::with_sample_books();
    catalog.borrow(1, "Alice", "1/1/2025").expect("borrow 1");
    catalog.borrow(2, "Bob", "1/1/2025").expect("borrow 2");
    let (_, out) = run(catalog, "7\n8\n");

    let stats: Vec<&str> = out
        .lines()
        .filter(|line| line.contains("Books:") || line.starts_with("Availability Rate"))
        .collect();
    assert_eq!(
        stats,
        vec![
            "Total Books: 5",
            "Available Books: 3",
            "Borrowed Books: 2",
            "Availability Rate: 60.0%",
        ]
    );
}

#[test]
fn unknown_id_is_reported() {
    let (catalog, out) = run(Catalog::with_sample_books(), "3\n77\n8\n");
    assert!(out.contains("Book 77 not found!"));
    assert_eq!(catalog.list_borrowed().len(), 0);
}

#[test]
fn added_fields_are_stored_as_typed() {
    let (catalog, _) = run(Catalog::new(), "6\n  Dune  \nFrank Herbert \n 978-0441013593\n8\n");

    let book = catalog.find_by_id(1).expect("book 1 was added");
    assert_eq!(book.title, "  Dune  ");
    assert_eq!(book.author, "Frank Herbert ");
    assert_eq!(book.isbn, " 978-0441013593");
}
