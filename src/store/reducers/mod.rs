//! Pure reducers, one per state slice.
//!
//! Each reducer is a total function over the action space: actions it does
//! not recognize pass the state through unchanged.

pub mod auth;
pub mod expenses;
pub mod filters;

use crate::store::{Action, RootState};

/// Run every slice reducer and assemble the next combined state.
pub fn reduce(state: &RootState, action: &Action) -> RootState {
    RootState {
        expenses: expenses::reduce(&state.expenses, action),
        filters: filters::reduce(&state.filters, action),
        auth: auth::reduce(&state.auth, action),
    }
}
