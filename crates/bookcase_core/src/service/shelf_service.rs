//! Bookshelf coordination service.
//!
//! # Responsibility
//! - Implement the load, submit, and delete flows over the injected store
//!   and confirmation prompt.
//! - Keep rendered rows and the persisted list in sync after each action.
//!
//! # Invariants
//! - Submit validates before any row is added or any write happens.
//! - Delete removes one row from the view but every matching ISBN from the
//!   persisted list.
//! - The placeholder row appears whenever the visible list becomes empty.

use crate::model::book::Book;
use crate::repo::book_repo::{BookRepository, RemoveOutcome, RepoError};
use crate::store::BlobStore;
use crate::view::confirm::ConfirmPrompt;
use crate::view::form::FormState;
use crate::view::list_view::ListView;
use crate::view::notice::{NoticeBoard, NoticeKind};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// User-facing banner texts.
pub const MSG_FILL_ALL_FIELDS: &str = "Please fill in all fields.";
pub const MSG_BOOK_ADDED: &str = "Book has successfully been added.";
pub const MSG_BOOK_DELETED: &str = "The selected book has been deleted.";
pub const MSG_CANNOT_DELETE: &str = "Book cannot be deleted.";
pub const MSG_CONFIRM_DELETE: &str = "Are you sure about deleting this book?";

pub type ShelfResult<T> = Result<T, ShelfError>;

/// Infrastructure failure inside a shelf flow.
#[derive(Debug)]
pub enum ShelfError {
    Repo(RepoError),
}

impl Display for ShelfError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ShelfError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ShelfError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// What a submit attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Row rendered, record persisted, form cleared.
    Added(Book),
    /// A required field was empty; nothing changed except the error banner.
    Rejected { empty_field: &'static str },
}

/// What a delete attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Row removed and `removed` persisted entries dropped by ISBN match.
    Deleted { removed: usize },
    /// The user declined the confirmation prompt; nothing changed.
    Cancelled,
    /// The row was removed from the view, but the persisted list was already
    /// empty, so an error banner was posted alongside the deletion banner.
    StoreWasEmpty,
    /// No row exists at the given index.
    NoSuchRow,
}

/// Coordinates one bookshelf: gateway, list view, notices, form, prompt.
pub struct ShelfService<S: BlobStore, C: ConfirmPrompt> {
    repo: BookRepository<S>,
    view: ListView,
    notices: NoticeBoard,
    form: FormState,
    confirm: C,
}

impl<S: BlobStore, C: ConfirmPrompt> ShelfService<S, C> {
    pub fn new(store: S, confirm: C) -> Self {
        Self {
            repo: BookRepository::new(store),
            view: ListView::new(),
            notices: NoticeBoard::new(),
            form: FormState::new(),
            confirm,
        }
    }

    /// Renders all persisted records, or the placeholder when there are none.
    ///
    /// # Errors
    /// - Propagates gateway failures (store I/O, corrupt blob) unchanged.
    pub fn load(&mut self) -> ShelfResult<()> {
        let books = self.repo.fetch_all()?;
        info!(
            "event=shelf_load module=core status=ok count={}",
            books.len()
        );
        self.view.render_all(&books);
        Ok(())
    }

    /// Handles form submission.
    ///
    /// # Contract
    /// - Any empty field posts one error banner and aborts with no row and
    ///   no write.
    /// - On success the row is rendered first, then the record is persisted,
    ///   a success banner is posted, and the form is cleared.
    pub fn submit(&mut self, now: Instant) -> ShelfResult<SubmitOutcome> {
        let book = match Book::validated(&self.form.title, &self.form.author, &self.form.isbn) {
            Ok(book) => book,
            Err(err) => {
                warn!(
                    "event=book_submit module=core status=rejected empty_field={}",
                    err.field
                );
                self.notices.post(MSG_FILL_ALL_FIELDS, NoticeKind::Error, now);
                return Ok(SubmitOutcome::Rejected {
                    empty_field: err.field,
                });
            }
        };

        self.view.add_row(&book);
        self.repo.append(&book)?;
        info!(
            "event=book_submit module=core status=ok isbn={}",
            book.isbn
        );
        self.notices.post(MSG_BOOK_ADDED, NoticeKind::Success, now);
        self.form.clear();
        Ok(SubmitOutcome::Added(book))
    }

    /// Handles activation of the delete affordance on the row at `index`.
    ///
    /// # Contract
    /// - The confirmation prompt runs before anything changes.
    /// - The view loses exactly the chosen row; the persisted list loses
    ///   every entry whose isbn matches that row's isbn cell.
    /// - When the visible list becomes empty the placeholder is shown.
    pub fn delete_row(&mut self, index: usize, now: Instant) -> ShelfResult<DeleteOutcome> {
        let Some(isbn) = self.view.rows().get(index).map(|row| row.isbn.clone()) else {
            return Ok(DeleteOutcome::NoSuchRow);
        };

        if !self.confirm.confirm(MSG_CONFIRM_DELETE) {
            info!(
                "event=book_delete module=core status=cancelled isbn={}",
                isbn
            );
            return Ok(DeleteOutcome::Cancelled);
        }

        self.view.remove_row(index);
        self.notices.post(MSG_BOOK_DELETED, NoticeKind::Success, now);

        let outcome = match self.repo.remove_by_isbn(&isbn)? {
            RemoveOutcome::Removed { count } => {
                info!(
                    "event=book_delete module=core status=ok isbn={} removed={}",
                    isbn, count
                );
                DeleteOutcome::Deleted { removed: count }
            }
            RemoveOutcome::AlreadyEmpty => {
                warn!(
                    "event=book_delete module=core status=error isbn={} reason=store_empty",
                    isbn
                );
                self.notices.post(MSG_CANNOT_DELETE, NoticeKind::Error, now);
                DeleteOutcome::StoreWasEmpty
            }
        };

        if self.view.is_empty() {
            self.view.show_placeholder();
        }
        Ok(outcome)
    }

    /// Removes every banner whose deadline has passed.
    pub fn expire_notices(&mut self, now: Instant) -> usize {
        self.notices.expire_due(now)
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Direct gateway access, for callers that need the persisted list.
    pub fn repo(&self) -> &BookRepository<S> {
        &self.repo
    }
}
