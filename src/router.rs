//! Client-side routes and the auth-gated guard.
//!
//! Paths map onto a closed [`Route`] enum; [`resolve`] decides, from the
//! current auth state alone, whether a route renders its page or
//! redirects. The caller must dispatch any pending auth action *before*
//! resolving, so the guard always reads settled state.

use crate::models::AuthState;

/// A client-side location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` - the public landing/login page.
    Landing,
    /// `/dashboard` - the private expense dashboard.
    Dashboard,
    /// Any other path.
    NotFound(String),
}

impl Route {
    /// Parse a path into a route. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Route {
        match path.trim_end_matches('/') {
            "" => Route::Landing,
            "/dashboard" => Route::Dashboard,
            other => Route::NotFound(other.to_string()),
        }
    }

    /// The canonical path for this route.
    pub fn path(&self) -> &str {
        match self {
            Route::Landing => "/",
            Route::Dashboard => "/dashboard",
            Route::NotFound(path) => path,
        }
    }
}

/// A renderable page, after the guard has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Public login page.
    Login,
    /// Private dashboard, wrapped with the shared header.
    Dashboard,
    /// Catch-all page, shown regardless of auth state.
    NotFound,
}

/// Outcome of guarding a route against the current auth state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Render this page at the requested route.
    Render(Page),
    /// Navigate to this route instead.
    Redirect(Route),
}

/// Guard `route` against `auth`.
///
/// Public-only: `/` redirects to `/dashboard` when already signed in.
/// Private-only: `/dashboard` redirects to `/` when signed out.
/// Unknown paths render the not-found page for everyone.
pub fn resolve(route: &Route, auth: &AuthState) -> Resolution {
    match route {
        Route::Landing if auth.is_authenticated() => Resolution::Redirect(Route::Dashboard),
        Route::Landing => Resolution::Render(Page::Login),
        Route::Dashboard if auth.is_authenticated() => Resolution::Render(Page::Dashboard),
        Route::Dashboard => Resolution::Redirect(Route::Landing),
        Route::NotFound(_) => Resolution::Render(Page::NotFound),
    }
}
