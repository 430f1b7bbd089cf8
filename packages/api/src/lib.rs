//! # API crate — data model, endpoints, and client for the item browser
//!
//! Everything the frontend and the server share lives here. The crate
//! compiles two ways: by default it is the thin client side (models plus
//! HTTP wrappers, WASM-friendly), and with the `server` feature it grows
//! the MySQL pool and the axum routes.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`client`] | — | HTTP wrappers the frontends call (`fetch_items`, `test_connection`) |
//! | [`db`] | `server` | MySQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Wire types: `Item` rows and `ConnectionTestResult` reports |
//! | [`routes`] | `server` | The axum router with both API endpoints |
//! | [`settings`] | `server` | Database settings with defaults, `config.toml`, and env overrides |

pub mod client;
#[cfg(feature = "server")]
pub mod db;
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod settings;

pub use client::{fetch_items, test_connection, ClientError};
pub use models::{ConnectionTestResult, Item};

#[cfg(feature = "server")]
pub use db::{get_pool, open_pool, PoolError};
#[cfg(feature = "server")]
pub use routes::router;
