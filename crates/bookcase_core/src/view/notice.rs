//! Transient notice banners with per-notice expiry.
//!
//! # Responsibility
//! - Track success/error banners and remove each one exactly when its own
//!   deadline passes.
//!
//! # Invariants
//! - Every notice carries a stable [`NoticeId`]; expiry and dismissal are
//!   keyed to it, never to arrival order.
//! - Dismissing a notice that is already gone is a no-op.
//!
//! Time is injected by the caller, so tests drive expiry without sleeping.

use std::time::{Duration, Instant};

/// How long a banner stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Severity class of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Stable handle for one posted notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

/// One visible banner.
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
    pub kind: NoticeKind,
    deadline: Instant,
}

impl Notice {
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

/// Ordered set of currently visible banners.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts a banner that expires at `now + NOTICE_TTL`.
    ///
    /// Concurrent banners are independent; posting again before an earlier
    /// banner expires never shortens or extends the earlier one.
    pub fn post(&mut self, message: impl Into<String>, kind: NoticeKind, now: Instant) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            message: message.into(),
            kind,
            deadline: now + NOTICE_TTL,
        });
        id
    }

    /// Removes one specific banner early. Returns whether it was present.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        before != self.notices.len()
    }

    /// Removes every banner whose deadline has passed, returning the count.
    pub fn expire_due(&mut self, now: Instant) -> usize {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.deadline > now);
        before - self.notices.len()
    }

    pub fn active(&self) -> &[Notice] {
        &self.notices
    }
}
