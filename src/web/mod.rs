//! Web layer: routes and HTML rendering

pub mod pages;
pub mod routes;

pub use routes::{router, AppState};
