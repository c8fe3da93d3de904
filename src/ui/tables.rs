use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Row, Table, Widget};

use crate::models::Book;

const COLUMN_SPACING: u16 = 1;
/// Wide enough for any `u32` id.
const ID_WIDTH: u16 = 10;
/// Rows drawn per buffer. Well under `u16::MAX` and small enough to keep each
/// buffer cheap.
const ROWS_PER_BATCH: usize = 1024;

/// Column sets used by the different listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BookColumns {
    /// ID, title, author, availability.
    Status,
    /// ID, title, author, ISBN.
    Isbn,
    /// ID, title, borrower, borrow date.
    Loan,
}

impl BookColumns {
    fn headers(self) -> [(&'static str, u16); 4] {
        match self {
            BookColumns::Status => [
                ("ID", ID_WIDTH),
                ("Title", 28),
                ("Author", 23),
                ("Status", 9),
            ],
            BookColumns::Isbn => [
                ("ID", ID_WIDTH),
                ("Title", 28),
                ("Author", 23),
                ("ISBN", 17),
            ],
            BookColumns::Loan => [
                ("ID", ID_WIDTH),
                ("Title", 28),
                ("Borrower", 18),
                ("Borrow Date", 11),
            ],
        }
    }

    fn cells(self, book: &Book) -> [String; 4] {
        let id = book.id.to_string();
        match self {
            BookColumns::Status => [
                id,
                book.title.clone(),
                book.author.clone(),
                book.status_label().to_string(),
            ],
            BookColumns::Isbn => [id, book.title.clone(), book.author.clone(), book.isbn.clone()],
            BookColumns::Loan => [
                id,
                book.title.clone(),
                book.borrower.clone(),
                book.borrow_date.clone(),
            ],
        }
    }
}

/// Lay the books out with a ratatui `Table` and return the rendered text one
/// line per row, with a rule under the header. Over-long cells are clipped to
/// their column.
///
/// Rows are drawn in batches so the buffer height always fits in a `u16`,
/// whatever the size of the catalog.
pub(crate) fn book_table(books: &[&Book], columns: BookColumns) -> Vec<String> {
    let headers = columns.headers();
    let widths: Vec<Constraint> = headers.iter().map(|(_, w)| Constraint::Length(*w)).collect();
    let width = headers.iter().map(|(_, w)| *w).sum::<u16>()
        + headers.iter().skip(1).map(|_| COLUMN_SPACING).sum::<u16>();

    let header = Table::new(Vec::<Row>::new(), widths.clone())
        .header(Row::new(headers.iter().map(|(name, _)| *name)))
        .column_spacing(COLUMN_SPACING);
    let mut lines = render_lines(header, width, 1);
    lines.push("─".repeat(usize::from(width)));

    for batch in books.chunks(ROWS_PER_BATCH) {
        let height = u16::try_from(batch.len()).unwrap_or(u16::MAX);
        let table = Table::new(
            batch.iter().map(|book| Row::new(columns.cells(book))),
            widths.clone(),
        )
        .column_spacing(COLUMN_SPACING);
        lines.extend(render_lines(table, width, height));
    }
    lines
}

fn render_lines(table: Table<'_>, width: u16, height: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    table.render(area, &mut buffer);
    buffer_lines(&buffer, area)
}

fn buffer_lines(buffer: &Buffer, area: Rect) -> Vec<String> {
    (area.top()..area.bottom())
        .map(|y| {
            let mut line = String::with_capacity(usize::from(area.width));
            for x in area.left()..area.right() {
                line.push_str(buffer[(x, y)].symbol());
            }
            line.trim_end().to_string()
        })
        .collect()
}
