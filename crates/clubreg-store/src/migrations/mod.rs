//! Migration framework
//!
//! - Embedded SQL migrations applied in order
//! - Checksums recorded on apply and verified on every later run
//! - Idempotent application

mod checksums;
mod embedded;
mod runner;

pub use runner::apply_migrations;
