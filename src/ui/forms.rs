use anyhow::{anyhow, Context, Result};

use crate::models::SearchField;

/// Values collected by the "add book" prompts. Nothing is validated; an
/// empty title is as acceptable as any other, and text is kept exactly as
/// typed apart from the line ending.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct BookForm {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) isbn: String,
}

impl BookForm {
    pub(crate) fn from_lines(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: strip_line_ending(title).to_string(),
            author: strip_line_ending(author).to_string(),
            isbn: strip_line_ending(isbn).to_string(),
        }
    }
}

/// Drop the trailing `\n` or `\r\n` a line reader leaves behind.
pub(crate) fn strip_line_ending(raw: &str) -> &str {
    raw.trim_end_matches(&['\r', '\n'][..])
}

/// Parse a book id typed at a prompt. `0` means the user backed out.
pub(crate) fn parse_book_id(raw: &str) -> Result<Option<u32>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("A book id is required."));
    }
    let id = trimmed
        .parse::<u32>()
        .with_context(|| format!("'{trimmed}' is not a valid book id."))?;
    Ok((id != 0).then_some(id))
}

/// Borrower names are the one field with a presence check: a lent book must
/// always name who has it.
pub(crate) fn parse_borrower(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(anyhow!("Borrower name is required."));
    }
    Ok(name.to_string())
}

/// Map the search sub-menu answer onto a field. Unknown answers select no
/// field, which then matches no books.
pub(crate) fn parse_search_field(raw: &str) -> Option<SearchField> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(SearchField::from_choice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_cancels() {
        assert_eq!(parse_book_id("0\n").ok(), Some(None));
        assert_eq!(parse_book_id(" 12 ").ok(), Some(Some(12)));
    }

    #[test]
    fn bad_ids_explain_themselves() {
        let err = parse_book_id("abc").unwrap_err();
        assert_eq!(err.to_string(), "'abc' is not a valid book id.");
        assert!(parse_book_id("-3").is_err());
        assert!(parse_book_id("   ").is_err());
    }

    #[test]
    fn borrower_must_be_present() {
        assert!(parse_borrower("  \n").is_err());
        assert_eq!(parse_borrower(" Alice \n").ok().as_deref(), Some("Alice"));
    }

    #[test]
    fn search_field_outside_menu_is_none() {
        assert_eq!(parse_search_field("2"), Some(SearchField::Author));
        assert_eq!(parse_search_field("7"), None);
        assert_eq!(parse_search_field("title"), None);
    }

    #[test]
    fn book_form_keeps_text_as_typed() {
        let form = BookForm::from_lines("  Dune  \n", " Frank Herbert\r\n", "");
        assert_eq!(form.title, "  Dune  ");
        assert_eq!(form.author, " Frank Herbert");
        assert!(form.isbn.is_empty());
    }
}
