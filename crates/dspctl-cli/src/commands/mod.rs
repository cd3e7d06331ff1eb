//! CLI command implementations.

pub mod common;
pub mod endpoints;
pub mod keys;
pub mod payload;
