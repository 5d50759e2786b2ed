//! Route changes and the auth notification handler.
//!
//! Navigation always runs through the router guard, so an
//! unauthenticated app can ask for the dashboard and land on the login
//! page without any caller checking auth itself. Auth notifications
//! dispatch exactly one action and then re-run the guard.

use crate::router::{self, Resolution, Route};
use crate::store::Action;

use super::{App, Focus, Overlay};

impl App {
    /// Move to `route`, following guard redirects until a page renders.
    ///
    /// Redirects settle in one hop for every route/auth combination, but
    /// the loop keeps this correct if that ever changes.
    pub fn navigate(&mut self, route: Route) {
        let mut route = route;
        loop {
            match router::resolve(&route, &self.store.state().auth) {
                Resolution::Render(page) => {
                    self.route = route;
                    self.page = page;
                    break;
                }
                Resolution::Redirect(next) => route = next,
            }
        }
        self.focus = Focus::List;
        self.overlay = Overlay::None;
        self.selected = 0;
        self.mark_dirty();
        tracing::debug!(path = %self.route.path(), page = ?self.page, "navigated");
    }

    /// Apply an auth notification: one dispatch, then navigate.
    ///
    /// Signing in from the landing page jumps to the dashboard; signing
    /// in anywhere else re-resolves the current route so a deep link
    /// survives the login round trip. Signing out always lands on the
    /// landing page.
    pub fn apply_auth_change(&mut self, user: Option<String>) {
        self.signing_in = false;
        match user {
            Some(uid) => {
                self.dispatch(Action::login(uid.clone()));
                if self.route == Route::Landing {
                    self.navigate(Route::Dashboard);
                } else {
                    self.navigate(self.route.clone());
                }
                self.start_load_expenses(&uid);
            }
            None => {
                self.dispatch(Action::logout());
                self.dispatch(Action::set_expenses(Vec::new()));
                self.loading_expenses = false;
                self.navigate(Route::Landing);
            }
        }
    }

    /// The signed-in uid, if any.
    pub fn uid(&self) -> Option<String> {
        self.store.state().auth.uid().map(str::to_string)
    }
}
