//! The hosted auth/persistence backend, behind trait seams.
//!
//! The backend's wire protocol and consistency model are external
//! infrastructure; the app only depends on these two traits. The
//! production adapter ([`RestBackend`]) speaks JSON over HTTP, the
//! in-memory adapter ([`MemoryBackend`]) backs dev mode and tests.

pub mod mock;
pub mod rest;

pub use mock::MemoryBackend;
pub use rest::RestBackend;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Expense, ExpensePatch};

/// Errors surfaced at the backend boundary.
///
/// The core never sees these: reducers and selectors are total. Failures
/// are reported through the app message channel and logged.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The backend refused the request.
    #[error("backend rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// The backend returned a payload we could not decode.
    #[error("malformed backend payload: {0}")]
    Payload(#[from] serde_json::Error),
    /// A write violated the expense record schema.
    #[error("invalid expense record: {0}")]
    InvalidRecord(String),
    /// The user cancelled or the backend refused the sign-in.
    #[error("sign-in was cancelled or refused")]
    SignInRefused,
}

/// Authentication operations against the hosted backend.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// The uid of a previously persisted session, if one is still valid.
    /// Drives the initial signed-in/signed-out notification at startup.
    async fn current_user(&self) -> Result<Option<String>, BackendError>;

    /// Sign in and return the authenticated uid.
    async fn sign_in(&self) -> Result<String, BackendError>;

    /// Terminate the current session.
    async fn sign_out(&self) -> Result<(), BackendError>;
}

/// Durable expense storage, keyed `users/{uid}/expenses/{id}`.
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// All expenses stored for `uid`.
    async fn fetch_expenses(&self, uid: &str) -> Result<Vec<Expense>, BackendError>;

    /// Store a new expense under its id.
    async fn create_expense(&self, uid: &str, expense: &Expense) -> Result<(), BackendError>;

    /// Apply a partial update to a stored expense.
    async fn update_expense(
        &self,
        uid: &str,
        id: &str,
        updates: &ExpensePatch,
    ) -> Result<(), BackendError>;

    /// Delete a stored expense.
    async fn delete_expense(&self, uid: &str, id: &str) -> Result<(), BackendError>;
}

/// Schema check shared by both adapters: the wire schema requires a
/// non-empty description on every stored record.
pub(crate) fn validate_description(description: &str) -> Result<(), BackendError> {
    if description.is_empty() {
        return Err(BackendError::InvalidRecord(
            "description must be a non-empty string".to_string(),
        ));
    }
    Ok(())
}
