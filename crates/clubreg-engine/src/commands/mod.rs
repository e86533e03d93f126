//! Registry operations.
//!
//! Mutations go through `engine_command`; reads through `engine_query`.

pub mod engine_command;
pub mod engine_query;
