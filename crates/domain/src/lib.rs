//! # itemhub-domain
//!
//! Pure domain model for the itemhub catalogue service.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`ItemId`](id::ItemId) and error conventions
//! - Define the **Item** (the single persisted record: name, price, category)
//! - Define the unsaved **`NewItem`** accepted on creation
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod item;
