//! # itemhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `itemhub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `itemhub-app` (for port traits) and `itemhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod item_repo;
mod pool;

pub use error::StorageError;
pub use item_repo::SqliteItemRepository;
pub use pool::{Config, Database};
