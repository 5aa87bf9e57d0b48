//! # itemhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON REST API** over the item catalogue
//!   (`GET/POST /items`, `GET/PUT/DELETE /items/{id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP status codes
//! - Publish an **OpenAPI** description at `/api-docs/openapi.json`, plus an
//!   interactive page at `/swagger-ui` when the `swagger-ui` feature is on
//!
//! ## Dependency rule
//! Depends on `itemhub-app` (for port traits and services) and `itemhub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod docs;
pub mod error;
pub mod router;
pub mod state;
