//! SQLite storage implementation for Donorhub.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `donorhub-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. The `core` crate is database-agnostic and works with traits; the
//! server app wires these repositories into the core services.

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

// Repository implementations
pub mod campaigns;
pub mod donations;
pub mod donors;
pub mod segments;
pub mod workflows;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from donorhub-core for convenience
pub use donorhub_core::errors::{DatabaseError, Error, Result};
