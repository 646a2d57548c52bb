//! Delete-confirmation seam.
//!
//! The original flow blocks on a synchronous user prompt; modeling it as a
//! trait lets tests stub the answer.

/// Synchronous yes/no prompt shown before a destructive action.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> ConfirmPrompt for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Prompt that approves everything. Useful for non-interactive callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl ConfirmPrompt for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}
