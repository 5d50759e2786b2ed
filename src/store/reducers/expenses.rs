//! Expense collection reducer.

use crate::models::Expense;
use crate::store::Action;

/// Compute the next expense collection.
///
/// Pure: the input slice is never mutated and the result is always a new
/// vector, including on the pass-through arm.
pub fn reduce(state: &[Expense], action: &Action) -> Vec<Expense> {
    match action {
        Action::AddExpense { expense } => {
            let mut next = state.to_vec();
            next.push(expense.clone());
            next
        }
        Action::RemoveExpense { id } => state.iter().filter(|e| &e.id != id).cloned().collect(),
        Action::EditExpense { id, updates } => state
            .iter()
            .map(|e| if &e.id == id { updates.overlay(e) } else { e.clone() })
            .collect(),
        Action::SetExpenses { expenses } => expenses.clone(),
        _ => state.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpensePatch;

    fn expense(id: &str, description: &str, amount: i64) -> Expense {
        Expense {
            id: id.to_string(),
            description: description.to_string(),
            note: String::new(),
            amount,
            created_at: 0,
        }
    }

    #[test]
    fn test_add_appends_to_the_end() {
        let state = vec![expense("a", "rent", 700)];
        let next = reduce(
            &state,
            &Action::AddExpense {
                expense: expense("b", "lunch", 800),
            },
        );
        assert_eq!(next.len(), 2);
        assert_eq!(next[1].id, "b");
        // input untouched
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_remove_by_id() {
        let state = vec![expense("a", "rent", 700), expense("b", "lunch", 800)];
        let next = reduce(
            &state,
            &Action::RemoveExpense {
                id: "a".to_string(),
            },
        );
        assert_eq!(next, vec![expense("b", "lunch", 800)]);
    }

    #[test]
    fn test_remove_unknown_id_is_a_noop() {
        let state = vec![expense("a", "rent", 700)];
        let next = reduce(
            &state,
            &Action::RemoveExpense {
                id: "zzz".to_string(),
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn test_remove_twice_is_idempotent() {
        let state = vec![expense("a", "rent", 700), expense("b", "lunch", 800)];
        let action = Action::RemoveExpense {
            id: "a".to_string(),
        };
        let once = reduce(&state, &action);
        let twice = reduce(&once, &action);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_edit_overlays_matching_element_only() {
        let state = vec![expense("a", "rent", 700), expense("b", "lunch", 800)];
        let next = reduce(
            &state,
            &Action::EditExpense {
                id: "b".to_string(),
                updates: ExpensePatch::new().amount(1500),
            },
        );
        assert_eq!(next[0], state[0]);
        assert_eq!(next[1].amount, 1500);
        assert_eq!(next[1].description, "lunch");
    }

    #[test]
    fn test_edit_unknown_id_leaves_content_equal() {
        let state = vec![expense("a", "rent", 700)];
        let next = reduce(
            &state,
            &Action::EditExpense {
                id: "zzz".to_string(),
                updates: ExpensePatch::new().amount(1),
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn test_set_expenses_replaces_wholesale() {
        let state = vec![expense("a", "rent", 700)];
        let loaded = vec![expense("x", "gum", 100), expense("y", "coffee", 300)];
        let next = reduce(
            &state,
            &Action::SetExpenses {
                expenses: loaded.clone(),
            },
        );
        assert_eq!(next, loaded);
    }

    #[test]
    fn test_unrelated_action_passes_through() {
        let state = vec![expense("a", "rent", 700)];
        let next = reduce(&state, &Action::Logout);
        assert_eq!(next, state);
    }
}
