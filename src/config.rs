//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used by both players and
//! helpers to load configuration from disk and the environment.

mod load;
mod schema;

pub use schema::*;
