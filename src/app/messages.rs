//! AppMessage enum for async communication within the application.

use crate::models::Expense;

/// Messages delivered from async boundary work (auth notifications,
/// backend loads and writes) back to the single-threaded app loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The authentication state changed: `Some(uid)` means signed in,
    /// `None` signed out. Exactly one of these is emitted per boundary
    /// notification, including the session-restore check at startup.
    AuthChanged { user: Option<String> },
    /// A sign-in attempt failed (cancelled or refused).
    SignInFailed { error: String },
    /// Expenses finished loading for the signed-in user.
    ExpensesLoaded { expenses: Vec<Expense> },
    /// Loading expenses failed.
    ExpensesLoadFailed { error: String },
    /// A fire-and-forget backend write failed.
    PersistFailed {
        operation: &'static str,
        error: String,
    },
}
