//! Auth state reducer.

use crate::models::AuthState;
use crate::store::Action;

/// Compute the next auth state. Login is a clean replacement from any
/// state (idempotent re-login overwrites the uid); logout returns the
/// canonical empty state.
pub fn reduce(state: &AuthState, action: &Action) -> AuthState {
    match action {
        Action::Login { uid } => AuthState::LoggedIn { uid: uid.clone() },
        Action::Logout => AuthState::LoggedOut,
        _ => state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_from_logged_out() {
        let next = reduce(&AuthState::LoggedOut, &Action::login("abc"));
        assert_eq!(
            next,
            AuthState::LoggedIn {
                uid: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_relogin_overwrites_uid() {
        let state = AuthState::LoggedIn {
            uid: "abc".to_string(),
        };
        let next = reduce(&state, &Action::login("def"));
        assert_eq!(next.uid(), Some("def"));
    }

    #[test]
    fn test_login_then_logout_is_canonical_empty_from_any_state() {
        for start in [
            AuthState::LoggedOut,
            AuthState::LoggedIn {
                uid: "prior".to_string(),
            },
        ] {
            let next = reduce(&reduce(&start, &Action::login("u1")), &Action::logout());
            assert_eq!(next, AuthState::LoggedOut);
        }
    }

    #[test]
    fn test_unknown_action_passes_through() {
        let state = AuthState::LoggedIn {
            uid: "abc".to_string(),
        };
        assert_eq!(reduce(&state, &Action::set_text_filter("x")), state);
        assert_eq!(
            reduce(&AuthState::LoggedOut, &Action::SortByDate),
            AuthState::LoggedOut
        );
    }
}
