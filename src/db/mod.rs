//! Persistence module split across logical submodules. The client is strictly
//! read-only: rows are created, edited, and deleted out-of-band.

mod connection;
mod store;

pub use connection::{db_path, ensure_schema, open_in_memory};
pub use store::{DataSource, Database, SelectQuery, SortOrder, StoreError};
