//! Domain model types shared by the store, the backend adapters and the UI.

pub mod auth;
pub mod expense;
pub mod filters;

pub use auth::AuthState;
pub use expense::{Expense, ExpenseDraft, ExpensePatch};
pub use filters::{FilterSettings, SortBy};
