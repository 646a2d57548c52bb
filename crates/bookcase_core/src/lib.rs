//! Core logic for the bookcase shelf manager.
//! This crate keeps the rendered book list and the persisted book list in
//! sync across add and delete actions, behind injectable storage and
//! confirmation seams.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{Book, EmptyFieldError};
pub use repo::book_repo::{BookRepository, RemoveOutcome, RepoError, RepoResult, BOOKS_KEY};
pub use service::shelf_service::{
    DeleteOutcome, ShelfError, ShelfResult, ShelfService, SubmitOutcome, MSG_BOOK_ADDED,
    MSG_BOOK_DELETED, MSG_CANNOT_DELETE, MSG_CONFIRM_DELETE, MSG_FILL_ALL_FIELDS,
};
pub use store::{BlobStore, FileBlobStore, MemoryBlobStore, StoreError, StoreResult};
pub use view::confirm::{AlwaysConfirm, ConfirmPrompt};
pub use view::form::FormState;
pub use view::list_view::{BookRow, ListView};
pub use view::notice::{Notice, NoticeBoard, NoticeId, NoticeKind, NOTICE_TTL};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
