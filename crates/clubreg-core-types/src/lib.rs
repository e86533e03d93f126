//! Core types shared across clubreg facilities
//!
//! - **Correlation**: `RequestId`, one per CLI invocation
//! - **Schema constants**: canonical log field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
