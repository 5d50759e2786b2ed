//! Application state and logic for the TUI.
//!
//! The [`App`] owns the [`Store`] and everything around it: the current
//! route/page, overlay forms, the backend handles, and the message
//! channel async work reports back through. All state mutation funnels
//! through [`App::dispatch`]; async tasks never touch the store
//! directly.

mod form;
mod handlers;
mod messages;
mod navigation;

pub use form::{
    format_amount_plain, format_date, parse_amount, parse_date, ExpenseForm, FormField, FormMode,
    RangeField, RangeForm,
};
pub use messages::AppMessage;

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;

use crate::backend::{AuthGateway, ExpenseRepository, MemoryBackend, RestBackend};
use crate::models::Expense;
use crate::router::{Page, Route};
use crate::startup::AppConfig;
use crate::store::{selectors, Action, Store, Subscription};

/// Which dashboard element receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The expense list.
    #[default]
    List,
    /// The text-filter input in the filter bar.
    Filter,
}

/// Overlay shown above the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    /// Add/edit expense form.
    Expense(ExpenseForm),
    /// Start/end date filter editor.
    Range(RangeForm),
}

/// Main application state.
pub struct App {
    /// The state container; single writer, read by the UI each frame.
    pub store: Store,
    /// Current location.
    pub route: Route,
    /// The page the router guard resolved for the current route.
    pub page: Page,
    /// Dashboard focus.
    pub focus: Focus,
    /// Active overlay, if any.
    pub overlay: Overlay,
    /// Selected row in the visible expense list.
    pub selected: usize,
    /// Flag to track if the app should quit.
    pub should_quit: bool,
    /// True while a sign-in call is in flight (spinner).
    pub signing_in: bool,
    /// True while the expense collection is loading (spinner).
    pub loading_expenses: bool,
    /// One-line status/error message shown at the bottom.
    pub status: Option<String>,
    /// Tick counter for animations.
    pub tick_count: u64,
    /// Receiver for async messages; taken by the event loop.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender cloned into async tasks.
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Startup configuration.
    pub config: AppConfig,

    auth: Arc<dyn AuthGateway>,
    repository: Arc<dyn ExpenseRepository>,
    dirty: Rc<Cell<bool>>,
    // keeps the redraw listener alive for the app's lifetime
    _redraw: Subscription,
}

impl App {
    /// Create an app wired to the backend the config selects: the
    /// in-memory backend in dev mode, HTTP otherwise.
    pub fn new(config: AppConfig) -> Self {
        if config.dev_mode {
            let backend = Arc::new(MemoryBackend::new(config.dev_uid.clone()));
            Self::with_backend(config, backend.clone(), backend)
        } else {
            let backend = Arc::new(RestBackend::new(
                config.backend_url.clone(),
                config.api_key.clone(),
            ));
            Self::with_backend(config, backend.clone(), backend)
        }
    }

    /// Create an app against explicit backend handles (tests inject the
    /// in-memory backend here).
    pub fn with_backend(
        config: AppConfig,
        auth: Arc<dyn AuthGateway>,
        repository: Arc<dyn ExpenseRepository>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let mut store = Store::new();
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        let redraw = store.subscribe(move || flag.set(true));

        let route = Route::parse(&config.initial_path);
        let mut app = Self {
            store,
            route: route.clone(),
            page: Page::Login,
            focus: Focus::default(),
            overlay: Overlay::default(),
            selected: 0,
            should_quit: false,
            signing_in: false,
            loading_expenses: false,
            status: None,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            config,
            auth,
            repository,
            dirty,
            _redraw: redraw,
        };
        app.navigate(route);
        app
    }

    /// Dispatch an action through the store.
    pub fn dispatch(&mut self, action: Action) -> Action {
        self.store.dispatch(action)
    }

    /// The expense list as the dashboard shows it: filtered and sorted.
    pub fn visible_expenses(&self) -> Vec<Expense> {
        let state = self.store.state();
        selectors::visible_expenses(&state.expenses, &state.filters)
    }

    /// The currently selected visible expense, if any.
    pub fn selected_expense(&self) -> Option<Expense> {
        self.visible_expenses().get(self.selected).cloned()
    }

    /// Keep the selection inside the visible list.
    pub fn clamp_selection(&mut self) {
        let len = self.visible_expenses().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.dirty.set(true);
    }

    /// Whether the UI needs a redraw; clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        let dirty = self.dirty.get();
        self.dirty.set(false);
        dirty
    }

    /// Advance animations; marks dirty only while a spinner is visible.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.signing_in || self.loading_expenses {
            self.mark_dirty();
        }
    }

    /// Mark the app to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Register the one-time auth subscription: ask the backend for a
    /// persisted session and report it as the first auth notification.
    pub fn start_session_watch(&self) {
        let auth = Arc::clone(&self.auth);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let user = match auth.current_user().await {
                Ok(user) => user,
                Err(error) => {
                    tracing::warn!(%error, "session restore failed, starting signed out");
                    None
                }
            };
            let _ = tx.send(AppMessage::AuthChanged { user });
        });
    }

    /// Kick off a sign-in attempt. No-op while one is already in flight.
    pub fn start_sign_in(&mut self) {
        if self.signing_in {
            return;
        }
        self.signing_in = true;
        self.status = None;
        self.mark_dirty();

        let auth = Arc::clone(&self.auth);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match auth.sign_in().await {
                Ok(uid) => {
                    let _ = tx.send(AppMessage::AuthChanged { user: Some(uid) });
                }
                Err(error) => {
                    tracing::info!(%error, "sign-in failed");
                    let _ = tx.send(AppMessage::SignInFailed {
                        error: error.to_string(),
                    });
                }
            }
        });
    }

    /// Kick off a sign-out. The signed-out notification is emitted even
    /// if the backend call fails; the local session always ends.
    pub fn start_sign_out(&mut self) {
        let auth = Arc::clone(&self.auth);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            if let Err(error) = auth.sign_out().await {
                tracing::warn!(%error, "backend sign-out failed");
            }
            let _ = tx.send(AppMessage::AuthChanged { user: None });
        });
    }

    /// Fetch the signed-in user's expenses.
    pub fn start_load_expenses(&mut self, uid: &str) {
        self.loading_expenses = true;
        self.mark_dirty();

        let repository = Arc::clone(&self.repository);
        let uid = uid.to_string();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match repository.fetch_expenses(&uid).await {
                Ok(expenses) => {
                    let _ = tx.send(AppMessage::ExpensesLoaded { expenses });
                }
                Err(error) => {
                    tracing::warn!(%error, "loading expenses failed");
                    let _ = tx.send(AppMessage::ExpensesLoadFailed {
                        error: error.to_string(),
                    });
                }
            }
        });
    }

    /// Mirror a created expense to the backend, fire-and-forget.
    pub fn persist_create(&self, uid: &str, expense: &Expense) {
        let repository = Arc::clone(&self.repository);
        let uid = uid.to_string();
        let expense = expense.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            if let Err(error) = repository.create_expense(&uid, &expense).await {
                tracing::warn!(%error, id = %expense.id, "saving expense failed");
                let _ = tx.send(AppMessage::PersistFailed {
                    operation: "save",
                    error: error.to_string(),
                });
            }
        });
    }

    /// Mirror an edit to the backend, fire-and-forget.
    pub fn persist_update(&self, uid: &str, id: &str, updates: &crate::models::ExpensePatch) {
        let repository = Arc::clone(&self.repository);
        let uid = uid.to_string();
        let id = id.to_string();
        let updates = updates.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            if let Err(error) = repository.update_expense(&uid, &id, &updates).await {
                tracing::warn!(%error, %id, "updating expense failed");
                let _ = tx.send(AppMessage::PersistFailed {
                    operation: "update",
                    error: error.to_string(),
                });
            }
        });
    }

    /// Mirror a removal to the backend, fire-and-forget.
    pub fn persist_delete(&self, uid: &str, id: &str) {
        let repository = Arc::clone(&self.repository);
        let uid = uid.to_string();
        let id = id.to_string();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            if let Err(error) = repository.delete_expense(&uid, &id).await {
                tracing::warn!(%error, %id, "deleting expense failed");
                let _ = tx.send(AppMessage::PersistFailed {
                    operation: "delete",
                    error: error.to_string(),
                });
            }
        });
    }

    /// Current time in epoch millis, for new expense drafts.
    pub fn now_millis() -> i64 {
        Utc::now().timestamp_millis()
    }
}
