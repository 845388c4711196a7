//! Core library surface for the Carnet de Cuisine TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as the integration tests can reuse the same pieces:
//! the read-only store facade, the pure text formatter, the route table, and
//! the interactive shell.

pub mod db;
pub mod format;
pub mod models;
pub mod routes;
pub mod ui;

/// Convenience re-exports for the persistence layer. `main.rs` uses these to
/// bring up the store; tests use the in-memory variant.
pub use db::{ensure_schema, open_in_memory, DataSource, Database, StoreError};

/// The three record kinds other layers manipulate.
pub use models::{HistoricalRecipe, Recipe, ShoppingList};

/// The navigation table shared by the shell and the tests.
pub use routes::Route;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
