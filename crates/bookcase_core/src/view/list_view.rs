//! Rendered book list.
//!
//! # Responsibility
//! - Hold the ordered rows the user sees, including the "no books"
//!   placeholder.
//!
//! # Invariants
//! - Rows mirror the persisted list 1:1, in order, after every completed
//!   user action.
//! - `placeholder` is true only while no data row is present.

use crate::model::book::Book;

/// One rendered row: the three cells plus an implicit delete affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl From<&Book> for BookRow {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
        }
    }
}

/// Ordered list display with a placeholder for the empty state.
#[derive(Debug, Default)]
pub struct ListView {
    rows: Vec<BookRow>,
    placeholder: bool,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole display from the persisted list.
    ///
    /// An empty list renders as the single placeholder row.
    pub fn render_all(&mut self, books: &[Book]) {
        self.rows = books.iter().map(BookRow::from).collect();
        self.placeholder = self.rows.is_empty();
    }

    /// Appends one row, dropping the placeholder if it was showing.
    pub fn add_row(&mut self, book: &Book) {
        self.placeholder = false;
        self.rows.push(BookRow::from(book));
    }

    /// Removes the row at `index`, returning its cells.
    pub fn remove_row(&mut self, index: usize) -> Option<BookRow> {
        if index < self.rows.len() {
            Some(self.rows.remove(index))
        } else {
            None
        }
    }

    /// Shows the "no books" row. Idempotent; only valid while empty.
    pub fn show_placeholder(&mut self) {
        if self.rows.is_empty() {
            self.placeholder = true;
        }
    }

    pub fn rows(&self) -> &[BookRow] {
        &self.rows
    }

    pub fn has_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ListView;
    use crate::model::book::Book;

    #[test]
    fn render_all_of_empty_list_shows_placeholder() {
        let mut view = ListView::new();
        view.render_all(&[]);
        assert!(view.has_placeholder());
        assert!(view.is_empty());
    }

    #[test]
    fn add_row_drops_placeholder() {
        let mut view = ListView::new();
        view.render_all(&[]);
        view.add_row(&Book::new("t", "a", "i"));
        assert!(!view.has_placeholder());
        assert_eq!(view.rows().len(), 1);
    }

    #[test]
    fn show_placeholder_is_rejected_while_rows_exist() {
        let mut view = ListView::new();
        view.add_row(&Book::new("t", "a", "i"));
        view.show_placeholder();
        assert!(!view.has_placeholder());
    }

    #[test]
    fn remove_row_out_of_range_is_none() {
        let mut view = ListView::new();
        assert!(view.remove_row(0).is_none());
    }
}
