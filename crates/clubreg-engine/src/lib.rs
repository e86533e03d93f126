//! clubreg engine - orchestration layer
//!
//! `Registry` is the application-root object: it owns the in-memory `Store`
//! and the key-value backend, runs every mutation through the core `apply`
//! boundary and writes the changed collection back.

pub mod commands;
pub mod registry;

pub use registry::Registry;
