//! UI rendering for tally
//!
//! One render function per page, plus overlay dialogs drawn on top of
//! the dashboard. All functions read from [`App`] and never mutate it.

pub mod components;
mod dashboard;
pub mod helpers;
mod login;
mod not_found;
mod overlays;
pub mod theme;

use ratatui::Frame;

use crate::app::{App, Overlay};
use crate::router::Page;

pub use helpers::format_amount;

/// Draw the whole frame for the app's current page and overlay.
pub fn render(frame: &mut Frame, app: &App) {
    match app.page {
        Page::Login => login::render_login_screen(frame, app),
        Page::Dashboard => dashboard::render_dashboard(frame, app),
        Page::NotFound => not_found::render_not_found(frame, app),
    }
    match &app.overlay {
        Overlay::None => {}
        Overlay::Expense(form) => overlays::render_expense_form(frame, form),
        Overlay::Range(form) => overlays::render_range_form(frame, form),
    }
}
