//! Expense record types.
//!
//! An [`Expense`] is one financial transaction. Amounts are stored in minor
//! currency units (cents) and timestamps in milliseconds since the Unix
//! epoch, so ordering and summing stay in integer arithmetic.

use serde::{Deserialize, Serialize};

/// A single expense record.
///
/// The `id` is assigned once by the action creator and never changes;
/// everything else can be patched through an edit action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Opaque unique identifier (uuid v4).
    pub id: String,
    /// Free-text label shown in the list.
    pub description: String,
    /// Free-text annotation.
    pub note: String,
    /// Amount in minor currency units.
    pub amount: i64,
    /// Creation timestamp, milliseconds since the Unix epoch.
    pub created_at: i64,
}

/// Field values for a new expense, before an id has been assigned.
///
/// Defaults mirror the record defaults: empty strings, zero amount,
/// epoch-zero timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub description: String,
    pub note: String,
    pub amount: i64,
    pub created_at: i64,
}

impl ExpenseDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Set the amount in minor units.
    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    /// Set the creation timestamp in epoch milliseconds.
    pub fn created_at(mut self, created_at: i64) -> Self {
        self.created_at = created_at;
        self
    }
}

/// A partial update to an expense. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl ExpensePatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Patch the note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Patch the amount.
    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Patch the creation timestamp.
    pub fn created_at(mut self, created_at: i64) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Return a copy of `expense` with the set fields overlaid.
    pub fn overlay(&self, expense: &Expense) -> Expense {
        Expense {
            id: expense.id.clone(),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| expense.description.clone()),
            note: self.note.clone().unwrap_or_else(|| expense.note.clone()),
            amount: self.amount.unwrap_or(expense.amount),
            created_at: self.created_at.unwrap_or(expense.created_at),
        }
    }
}
