//! Donorhub server library.
//!
//! Exposed as a library so integration tests can build the router and
//! drive it in-process.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod insights_http;
pub mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
