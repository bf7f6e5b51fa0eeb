//! Command implementations for the cards CLI

pub mod seed;
pub mod serve;

pub use seed::run_seed;
pub use serve::run_serve;
