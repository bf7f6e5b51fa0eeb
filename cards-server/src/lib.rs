//! cards-server: HTTP backend for motivational cards
//!
//! Users, personal goals, a shared pool of motivational cards, per-user
//! favorites and daily yes/no answers, stored in PostgreSQL and served
//! as JSON over axum.

pub mod db;
pub mod http;
pub mod import;
pub mod models;

pub use db::{connect_and_migrate, DbError, MIGRATOR};
pub use http::{run_server, ServerConfig};
