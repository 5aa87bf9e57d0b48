//! # itemhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement:
//!   - `ItemRepository` — CRUD for items
//! - Define the **driving/inbound** use-case struct:
//!   - `ItemService` — list, get, create, replace, delete
//! - Turn repository "absence" results into typed domain errors
//!
//! ## Dependency rule
//! Depends on `itemhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
