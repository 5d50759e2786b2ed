//! tally - a terminal expense tracker
//!
//! State lives in a single [`store::Store`] mutated only by dispatched
//! actions; the UI reads derived views through [`store::selectors`].
//! Routing runs through an auth guard in [`router`], and persistence
//! goes to a pluggable backend in [`backend`].

pub mod app;
pub mod backend;
pub mod models;
pub mod router;
pub mod startup;
pub mod store;
pub mod ui;
