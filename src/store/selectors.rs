//! Derived, read-only views over stored state.

use crate::models::{Expense, FilterSettings, SortBy};

/// Filter and sort the expense collection for display.
///
/// An expense is retained when its `created_at` falls inside the optional
/// date bounds and its description contains the filter text
/// case-insensitively (empty text matches everything). The result is
/// sorted descending by the active key; ties break ascending by `id`, so
/// equal-key order is a strict total order and identical across calls.
pub fn visible_expenses(expenses: &[Expense], filters: &FilterSettings) -> Vec<Expense> {
    let needle = filters.text.to_lowercase();
    let mut visible: Vec<Expense> = expenses
        .iter()
        .filter(|expense| {
            let start_match = filters
                .start_date
                .is_none_or(|start| expense.created_at >= start);
            let end_match = filters.end_date.is_none_or(|end| expense.created_at <= end);
            let text_match = expense.description.to_lowercase().contains(&needle);
            start_match && end_match && text_match
        })
        .cloned()
        .collect();

    visible.sort_by(|a, b| {
        let key = match filters.sort_by {
            SortBy::Date => b.created_at.cmp(&a.created_at),
            SortBy::Amount => b.amount.cmp(&a.amount),
        };
        key.then_with(|| a.id.cmp(&b.id))
    });
    visible
}

/// Sum of the amounts in a (usually already filtered) collection.
pub fn expenses_total(expenses: &[Expense]) -> i64 {
    expenses.iter().map(|expense| expense.amount).sum()
}
