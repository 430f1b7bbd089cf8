//! # Database module — MySQL connection pool management
//!
//! Provides the shared MySQL connection pool used by the HTTP handlers in
//! this crate. The whole module is gated behind the `server` feature so that
//! client (WASM) builds never pull in SQLx or Tokio networking code.
//!
//! ## Design
//!
//! The pool is a **lazy, process-wide singleton** backed by a
//! [`tokio::sync::OnceCell`]. The first call to [`get_pool`] loads
//! [`Settings`](crate::settings::Settings) (honoring `.env` via `dotenvy`),
//! builds the pool, and caches it for all subsequent callers. Pool creation
//! performs no I/O: connections are opened on first use, so a database that
//! is down surfaces on the first query rather than at startup.
//!
//! ## Re-exports
//!
//! - [`get_pool`] — returns `&'static MySqlPool`, initialising it on first use.
//! - [`open_pool`] — builds a standalone pool from explicit settings.
//! - [`PoolError`] — settings or pool construction failures.

mod pool;

pub use pool::{get_pool, open_pool, PoolError};
