//! Authentication state.

/// Whether a user is signed in, and who.
///
/// Login is always a clean replacement: a `Login` action produces a fresh
/// `LoggedIn` regardless of the previous state, never a merge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// Canonical empty state.
    #[default]
    LoggedOut,
    /// Signed in as the user with this opaque backend identifier.
    LoggedIn { uid: String },
}

impl AuthState {
    /// True when a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::LoggedIn { .. })
    }

    /// The signed-in user's id, if any.
    pub fn uid(&self) -> Option<&str> {
        match self {
            AuthState::LoggedIn { uid } => Some(uid),
            AuthState::LoggedOut => None,
        }
    }
}
