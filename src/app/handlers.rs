//! Keyboard and message handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::router::{Page, Route};
use crate::store::Action;

use super::form::{ExpenseForm, FormMode, RangeForm};
use super::{App, AppMessage, Focus, Overlay};

impl App {
    /// Handle a message from an async task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::AuthChanged { user } => self.apply_auth_change(user),
            AppMessage::SignInFailed { error } => {
                self.signing_in = false;
                self.status = Some(format!("sign-in failed: {error}"));
                self.mark_dirty();
            }
            AppMessage::ExpensesLoaded { expenses } => {
                self.loading_expenses = false;
                self.dispatch(Action::set_expenses(expenses));
                self.clamp_selection();
            }
            AppMessage::ExpensesLoadFailed { error } => {
                self.loading_expenses = false;
                self.status = Some(format!("could not load expenses: {error}"));
                self.mark_dirty();
            }
            AppMessage::PersistFailed { operation, error } => {
                self.status = Some(format!("{operation} did not reach the server: {error}"));
                self.mark_dirty();
            }
        }
    }

    /// Handle a key event for the current page and overlay.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C quits from anywhere, overlays included.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if !matches!(self.overlay, Overlay::None) {
            self.handle_overlay_key(key);
            self.mark_dirty();
            return;
        }

        match self.page {
            Page::Login => self.handle_login_key(key),
            Page::Dashboard => self.handle_dashboard_key(key),
            Page::NotFound => self.handle_not_found_key(key),
        }
        self.mark_dirty();
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.start_sign_in(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_not_found_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('h') | KeyCode::Enter => self.navigate(Route::Dashboard),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::Filter => self.handle_filter_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        let text = self.store.state().filters.text.clone();
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.focus = Focus::List,
            KeyCode::Char(c) => {
                let mut text = text;
                text.push(c);
                self.dispatch(Action::set_text_filter(text));
                self.clamp_selection();
            }
            KeyCode::Backspace => {
                let mut text = text;
                text.pop();
                self.dispatch(Action::set_text_filter(text));
                self.clamp_selection();
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected += 1;
                self.clamp_selection();
            }
            KeyCode::Char('a') => {
                self.overlay = Overlay::Expense(ExpenseForm::for_add(Self::now_millis()));
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(expense) = self.selected_expense() {
                    self.overlay = Overlay::Expense(ExpenseForm::for_edit(&expense));
                }
            }
            KeyCode::Char('x') | KeyCode::Delete => self.remove_selected(),
            KeyCode::Char('/') => self.focus = Focus::Filter,
            KeyCode::Char('s') => {
                let action = match self.store.state().filters.sort_by {
                    crate::models::SortBy::Date => Action::SortByAmount,
                    crate::models::SortBy::Amount => Action::SortByDate,
                };
                self.dispatch(action);
            }
            KeyCode::Char('d') => {
                let filters = self.store.state().filters.clone();
                self.overlay = Overlay::Range(RangeForm::from_bounds(
                    filters.start_date,
                    filters.end_date,
                ));
            }
            KeyCode::Char('o') => self.start_sign_out(),
            _ => {}
        }
    }

    fn remove_selected(&mut self) {
        let Some(expense) = self.selected_expense() else {
            return;
        };
        self.dispatch(Action::remove_expense(expense.id.clone()));
        self.clamp_selection();
        if let Some(uid) = self.uid() {
            self.persist_delete(&uid, &expense.id);
        }
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.overlay = Overlay::None;
            return;
        }
        match &mut self.overlay {
            Overlay::Expense(form) => match key.code {
                KeyCode::Tab | KeyCode::Down => form.focus_next(),
                KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
                KeyCode::Char(c) => form.insert(c),
                KeyCode::Backspace => form.backspace(),
                KeyCode::Enter => self.submit_expense_form(),
                _ => {}
            },
            Overlay::Range(form) => match key.code {
                KeyCode::Tab | KeyCode::Down | KeyCode::BackTab | KeyCode::Up => form.focus_next(),
                KeyCode::Char(c) => form.insert(c),
                KeyCode::Backspace => form.backspace(),
                KeyCode::Enter => self.submit_range_form(),
                _ => {}
            },
            Overlay::None => {}
        }
    }

    fn submit_expense_form(&mut self) {
        let Overlay::Expense(form) = &mut self.overlay else {
            return;
        };
        match form.mode.clone() {
            FormMode::Add => match form.parse() {
                Ok(draft) => {
                    let action = self.dispatch(Action::add_expense(draft));
                    // The creator assigned the id; read it off the
                    // returned action so the mirror write matches.
                    if let Action::AddExpense { expense } = &action {
                        if let Some(uid) = self.uid() {
                            self.persist_create(&uid, expense);
                        }
                    }
                    self.overlay = Overlay::None;
                    self.clamp_selection();
                }
                Err(error) => {
                    if let Overlay::Expense(form) = &mut self.overlay {
                        form.error = Some(error);
                    }
                }
            },
            FormMode::Edit { id } => match form.parse_patch() {
                Ok(updates) => {
                    self.dispatch(Action::edit_expense(id.clone(), updates.clone()));
                    if let Some(uid) = self.uid() {
                        self.persist_update(&uid, &id, &updates);
                    }
                    self.overlay = Overlay::None;
                    self.clamp_selection();
                }
                Err(error) => {
                    if let Overlay::Expense(form) = &mut self.overlay {
                        form.error = Some(error);
                    }
                }
            },
        }
    }

    fn submit_range_form(&mut self) {
        let Overlay::Range(form) = &mut self.overlay else {
            return;
        };
        match form.parse() {
            Ok((start, end)) => {
                self.dispatch(Action::set_start_date(start));
                self.dispatch(Action::set_end_date(end));
                self.overlay = Overlay::None;
                self.clamp_selection();
            }
            Err(error) => form.error = Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyEvent};

    use crate::backend::MemoryBackend;
    use crate::models::SortBy;
    use crate::router::{Page, Route};
    use crate::startup::AppConfig;

    use super::super::{App, Focus, Overlay};

    fn dev_app() -> App {
        let backend = Arc::new(MemoryBackend::new("dev"));
        App::with_backend(AppConfig::default(), backend.clone(), backend)
    }

    fn signed_in_app() -> App {
        let mut app = dev_app();
        app.apply_auth_change(Some("dev".to_string()));
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[tokio::test]
    async fn starts_on_login_when_signed_out() {
        let app = dev_app();
        assert_eq!(app.page, Page::Login);
        assert_eq!(app.route, Route::Landing);
    }

    #[tokio::test]
    async fn auth_change_moves_to_dashboard() {
        let app = signed_in_app();
        assert_eq!(app.page, Page::Dashboard);
        assert_eq!(app.route, Route::Dashboard);
    }

    #[tokio::test]
    async fn sign_out_returns_to_login() {
        let mut app = signed_in_app();
        app.apply_auth_change(None);
        assert_eq!(app.page, Page::Login);
        assert!(!app.store.state().auth.is_authenticated());
    }

    #[tokio::test]
    async fn slash_focuses_filter_and_typing_dispatches() {
        let mut app = signed_in_app();
        app.handle_key(key(KeyCode::Char('/')));
        assert_eq!(app.focus, Focus::Filter);
        app.handle_key(key(KeyCode::Char('r')));
        app.handle_key(key(KeyCode::Char('e')));
        assert_eq!(app.store.state().filters.text, "re");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.store.state().filters.text, "r");
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.focus, Focus::List);
    }

    #[tokio::test]
    async fn s_toggles_sort_order() {
        let mut app = signed_in_app();
        assert_eq!(app.store.state().filters.sort_by, SortBy::Date);
        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.store.state().filters.sort_by, SortBy::Amount);
        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.store.state().filters.sort_by, SortBy::Date);
    }

    #[tokio::test]
    async fn a_opens_add_form_and_enter_submits() {
        let mut app = signed_in_app();
        app.handle_key(key(KeyCode::Char('a')));
        assert!(matches!(app.overlay, Overlay::Expense(_)));

        for c in "Rent".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        for c in "109.50".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert!(matches!(app.overlay, Overlay::None));
        let state = app.store.state();
        assert_eq!(state.expenses.len(), 1);
        assert_eq!(state.expenses[0].description, "Rent");
        assert_eq!(state.expenses[0].amount, 10_950);
    }

    #[tokio::test]
    async fn empty_description_keeps_form_open_with_error() {
        let mut app = signed_in_app();
        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Enter));
        match &app.overlay {
            Overlay::Expense(form) => assert!(form.error.is_some()),
            other => panic!("expected expense overlay, got {other:?}"),
        }
        assert!(app.store.state().expenses.is_empty());
    }

    #[tokio::test]
    async fn x_removes_selected_expense() {
        let mut app = signed_in_app();
        app.handle_key(key(KeyCode::Char('a')));
        for c in "Gum".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.store.state().expenses.len(), 1);

        app.handle_key(key(KeyCode::Char('x')));
        assert!(app.store.state().expenses.is_empty());
    }

    #[tokio::test]
    async fn range_overlay_sets_both_bounds() {
        let mut app = signed_in_app();
        app.handle_key(key(KeyCode::Char('d')));
        assert!(matches!(app.overlay, Overlay::Range(_)));
        for c in "2024-03-01".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        for c in "2024-03-31".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert!(matches!(app.overlay, Overlay::None));
        let filters = app.store.state().filters.clone();
        assert!(filters.start_date.is_some());
        assert!(filters.end_date.is_some());
        assert!(filters.start_date < filters.end_date);
    }
}
