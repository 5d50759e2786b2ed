//! Action enum and action creators.
//!
//! Every state transition in the app is described by one [`Action`]. The
//! enum is closed, so reducer match arms are checked exhaustively instead
//! of falling through a stringly-typed default branch.

use uuid::Uuid;

use crate::models::{Expense, ExpenseDraft, ExpensePatch};

/// A description of intent, dispatched through the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Append a fully-formed expense. The id is already assigned by the
    /// action creator; the reducer never generates one.
    AddExpense { expense: Expense },
    /// Remove the expense with this id. No-op when absent.
    RemoveExpense { id: String },
    /// Overlay the patch onto the expense with this id. No-op when absent.
    EditExpense { id: String, updates: ExpensePatch },
    /// Replace the whole collection, e.g. after loading from the backend.
    SetExpenses { expenses: Vec<Expense> },
    /// Replace the text filter.
    SetTextFilter { text: String },
    /// Sort the visible list by date, most recent first.
    SortByDate,
    /// Sort the visible list by amount, highest first.
    SortByAmount,
    /// Replace the start-date bound. `None` clears it.
    SetStartDate { start_date: Option<i64> },
    /// Replace the end-date bound. `None` clears it.
    SetEndDate { end_date: Option<i64> },
    /// A user signed in.
    Login { uid: String },
    /// The user signed out.
    Logout,
}

impl Action {
    /// Build an `AddExpense` from a draft, assigning a fresh uuid.
    pub fn add_expense(draft: ExpenseDraft) -> Self {
        Action::AddExpense {
            expense: Expense {
                id: Uuid::new_v4().to_string(),
                description: draft.description,
                note: draft.note,
                amount: draft.amount,
                created_at: draft.created_at,
            },
        }
    }

    /// Build a `RemoveExpense`.
    pub fn remove_expense(id: impl Into<String>) -> Self {
        Action::RemoveExpense { id: id.into() }
    }

    /// Build an `EditExpense`.
    pub fn edit_expense(id: impl Into<String>, updates: ExpensePatch) -> Self {
        Action::EditExpense {
            id: id.into(),
            updates,
        }
    }

    /// Build a `SetExpenses`.
    pub fn set_expenses(expenses: Vec<Expense>) -> Self {
        Action::SetExpenses { expenses }
    }

    /// Build a `SetTextFilter`.
    pub fn set_text_filter(text: impl Into<String>) -> Self {
        Action::SetTextFilter { text: text.into() }
    }

    /// Build a `SetStartDate`.
    pub fn set_start_date(start_date: Option<i64>) -> Self {
        Action::SetStartDate { start_date }
    }

    /// Build a `SetEndDate`.
    pub fn set_end_date(end_date: Option<i64>) -> Self {
        Action::SetEndDate { end_date }
    }

    /// Build a `Login`.
    pub fn login(uid: impl Into<String>) -> Self {
        Action::Login { uid: uid.into() }
    }

    /// Build a `Logout`.
    pub fn logout() -> Self {
        Action::Logout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_expense_assigns_unique_ids_and_keeps_fields() {
        let draft = ExpenseDraft::new()
            .description("rent")
            .amount(700)
            .created_at(-21000);
        let first = Action::add_expense(draft.clone());
        let second = Action::add_expense(draft);

        let (Action::AddExpense { expense: a }, Action::AddExpense { expense: b }) =
            (first, second)
        else {
            panic!("expected AddExpense actions");
        };
        assert_ne!(a.id, b.id);
        assert_eq!(a.description, "rent");
        assert_eq!(a.amount, 700);
        assert_eq!(a.created_at, -21000);
        assert_eq!(a.note, "");
    }

    #[test]
    fn test_add_expense_applies_defaults() {
        let Action::AddExpense { expense } = Action::add_expense(ExpenseDraft::new()) else {
            panic!("expected AddExpense");
        };
        assert_eq!(expense.description, "");
        assert_eq!(expense.note, "");
        assert_eq!(expense.amount, 0);
        assert_eq!(expense.created_at, 0);
        assert!(!expense.id.is_empty());
    }

    #[test]
    fn test_creator_shorthand() {
        assert_eq!(
            Action::set_text_filter("unch"),
            Action::SetTextFilter {
                text: "unch".to_string()
            }
        );
        assert_eq!(
            Action::set_start_date(Some(0)),
            Action::SetStartDate {
                start_date: Some(0)
            }
        );
        assert_eq!(
            Action::login("abc"),
            Action::Login {
                uid: "abc".to_string()
            }
        );
        assert_eq!(Action::logout(), Action::Logout);
    }
}
