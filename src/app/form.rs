//! Overlay form state: the add/edit expense form and the date-range
//! filter editor.
//!
//! Forms hold raw text buffers; parsing to domain values happens once on
//! submit, and failures show up as an inline error instead of an action.

use chrono::{DateTime, NaiveDate};

use crate::models::{Expense, ExpenseDraft, ExpensePatch};

/// Whether the expense form creates a new record or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit { id: String },
}

/// Which expense-form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Description,
    Amount,
    Date,
    Note,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Description => FormField::Amount,
            FormField::Amount => FormField::Date,
            FormField::Date => FormField::Note,
            FormField::Note => FormField::Description,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Description => FormField::Note,
            FormField::Amount => FormField::Description,
            FormField::Date => FormField::Amount,
            FormField::Note => FormField::Date,
        }
    }
}

/// The add/edit expense form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseForm {
    pub mode: FormMode,
    pub field: FormField,
    pub description: String,
    /// Major units with optional decimals, e.g. `12.50`.
    pub amount: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub note: String,
    pub error: Option<String>,
}

impl ExpenseForm {
    /// Empty form for a new expense, dated `created_at` (epoch millis).
    pub fn for_add(created_at: i64) -> Self {
        Self {
            mode: FormMode::Add,
            field: FormField::default(),
            description: String::new(),
            amount: String::new(),
            date: format_date(created_at),
            note: String::new(),
            error: None,
        }
    }

    /// Form prefilled from an existing expense.
    pub fn for_edit(expense: &Expense) -> Self {
        Self {
            mode: FormMode::Edit {
                id: expense.id.clone(),
            },
            field: FormField::default(),
            description: expense.description.clone(),
            amount: format_amount_plain(expense.amount),
            date: format_date(expense.created_at),
            note: expense.note.clone(),
            error: None,
        }
    }

    fn buffer_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Description => &mut self.description,
            FormField::Amount => &mut self.amount,
            FormField::Date => &mut self.date,
            FormField::Note => &mut self.note,
        }
    }

    /// Append a typed character to the focused field.
    pub fn insert(&mut self, c: char) {
        self.buffer_mut().push(c);
        self.error = None;
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.buffer_mut().pop();
        self.error = None;
    }

    pub fn focus_next(&mut self) {
        self.field = self.field.next();
    }

    pub fn focus_prev(&mut self) {
        self.field = self.field.prev();
    }

    /// Validate the buffers into a draft. Description and amount are
    /// required, matching what the backend schema will accept.
    pub fn parse(&self) -> Result<ExpenseDraft, String> {
        if self.description.trim().is_empty() {
            return Err("description is required".to_string());
        }
        let amount = parse_amount(&self.amount)
            .ok_or_else(|| "enter an amount like 12.50".to_string())?;
        let created_at = parse_date(&self.date)
            .ok_or_else(|| "enter a date like 2024-03-01".to_string())?;
        Ok(ExpenseDraft::new()
            .description(self.description.trim())
            .note(self.note.clone())
            .amount(amount)
            .created_at(created_at))
    }

    /// The same validation, shaped as a full-record patch for an edit.
    pub fn parse_patch(&self) -> Result<ExpensePatch, String> {
        let draft = self.parse()?;
        Ok(ExpensePatch::new()
            .description(draft.description)
            .note(draft.note)
            .amount(draft.amount)
            .created_at(draft.created_at))
    }
}

/// Which date-range field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeField {
    #[default]
    Start,
    End,
}

/// The start/end date filter editor. Empty buffers mean "unset".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RangeForm {
    pub field: RangeField,
    pub start: String,
    pub end: String,
    pub error: Option<String>,
}

impl RangeForm {
    /// Editor prefilled from the current filter bounds.
    pub fn from_bounds(start: Option<i64>, end: Option<i64>) -> Self {
        Self {
            field: RangeField::default(),
            start: start.map(format_date).unwrap_or_default(),
            end: end.map(format_date).unwrap_or_default(),
            error: None,
        }
    }

    fn buffer_mut(&mut self) -> &mut String {
        match self.field {
            RangeField::Start => &mut self.start,
            RangeField::End => &mut self.end,
        }
    }

    pub fn insert(&mut self, c: char) {
        self.buffer_mut().push(c);
        self.error = None;
    }

    pub fn backspace(&mut self) {
        self.buffer_mut().pop();
        self.error = None;
    }

    pub fn focus_next(&mut self) {
        self.field = match self.field {
            RangeField::Start => RangeField::End,
            RangeField::End => RangeField::Start,
        };
    }

    /// Validate into `(start, end)` bounds.
    pub fn parse(&self) -> Result<(Option<i64>, Option<i64>), String> {
        let start = parse_optional_date(&self.start)?;
        let end = parse_optional_date(&self.end)?;
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err("start date is after end date".to_string());
            }
        }
        Ok((start, end))
    }
}

fn parse_optional_date(input: &str) -> Result<Option<i64>, String> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_date(input)
        .map(Some)
        .ok_or_else(|| "enter dates like 2024-03-01, or leave blank".to_string())
}

/// Parse a non-negative decimal amount into minor units.
/// Accepts `7`, `7.5`, `7.50`, `.50`; rejects more than two decimals.
pub fn parse_amount(input: &str) -> Option<i64> {
    let input = input.trim();
    if input.is_empty() || input.starts_with('-') || input.starts_with('+') {
        return None;
    }
    let (whole, frac) = match input.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (input, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if frac.len() > 2 {
        return None;
    }
    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let frac: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    whole.checked_mul(100)?.checked_add(frac)
}

/// Parse `YYYY-MM-DD` into epoch millis at midnight UTC.
pub fn parse_date(input: &str) -> Option<i64> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(midnight.and_utc().timestamp_millis())
}

/// Render epoch millis as `YYYY-MM-DD` (UTC).
pub fn format_date(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(datetime) => datetime.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

/// Render minor units as plain decimal text, e.g. `1250` -> `12.50`.
pub fn format_amount_plain(amount: i64) -> String {
    format!("{}.{:02}", amount / 100, (amount % 100).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("7"), Some(700));
        assert_eq!(parse_amount("7.5"), Some(750));
        assert_eq!(parse_amount("7.50"), Some(750));
        assert_eq!(parse_amount(".50"), Some(50));
        assert_eq!(parse_amount("0.05"), Some(5));
        assert_eq!(parse_amount(" 12.34 "), Some(1234));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("-1"), None);
        assert_eq!(parse_amount("1.234"), None);
        assert_eq!(parse_amount("12x"), None);
    }

    #[test]
    fn test_parse_and_format_date_round_trip() {
        let millis = parse_date("2024-03-01").unwrap();
        assert_eq!(format_date(millis), "2024-03-01");
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn test_epoch_date() {
        assert_eq!(parse_date("1970-01-01"), Some(0));
        assert_eq!(format_date(0), "1970-01-01");
    }

    #[test]
    fn test_expense_form_requires_description_and_amount() {
        let mut form = ExpenseForm::for_add(0);
        assert_eq!(form.parse().unwrap_err(), "description is required");

        form.description = "rent".to_string();
        assert!(form.parse().is_err());

        form.amount = "7.00".to_string();
        let draft = form.parse().unwrap();
        assert_eq!(draft.description, "rent");
        assert_eq!(draft.amount, 700);
        assert_eq!(draft.created_at, 0);
    }

    #[test]
    fn test_edit_form_prefills_and_patches() {
        let expense = Expense {
            id: "e1".to_string(),
            description: "lunch".to_string(),
            note: "team".to_string(),
            amount: 800,
            created_at: 0,
        };
        let form = ExpenseForm::for_edit(&expense);
        assert_eq!(form.mode, FormMode::Edit { id: "e1".to_string() });
        assert_eq!(form.amount, "8.00");
        assert_eq!(form.date, "1970-01-01");

        let patch = form.parse_patch().unwrap();
        assert_eq!(patch.amount, Some(800));
        assert_eq!(patch.description, Some("lunch".to_string()));
        assert_eq!(patch.note, Some("team".to_string()));
    }

    #[test]
    fn test_field_cycle_wraps() {
        let mut field = FormField::Description;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, FormField::Description);
        assert_eq!(FormField::Description.prev(), FormField::Note);
    }

    #[test]
    fn test_range_form_parses_bounds() {
        let mut form = RangeForm::default();
        assert_eq!(form.parse().unwrap(), (None, None));

        form.start = "1970-01-01".to_string();
        form.end = "1970-01-02".to_string();
        let (start, end) = form.parse().unwrap();
        assert_eq!(start, Some(0));
        assert_eq!(end, Some(86_400_000));
    }

    #[test]
    fn test_range_form_rejects_inverted_bounds() {
        let form = RangeForm {
            start: "1970-01-02".to_string(),
            end: "1970-01-01".to_string(),
            ..RangeForm::default()
        };
        assert!(form.parse().is_err());
    }
}
