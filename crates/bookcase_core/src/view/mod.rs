//! View-side state: list rows, form fields, notices, confirmation seam.
//!
//! # Responsibility
//! - Model what the user sees without binding to any rendering surface.
//!
//! # Invariants
//! - The placeholder row and data rows never coexist.
//! - Notices expire by per-notice deadline, not by arrival order.

pub mod confirm;
pub mod form;
pub mod list_view;
pub mod notice;
