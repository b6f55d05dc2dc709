//! Core types shared across the pet shelter crates
//!
//! Holds the canonical schema constants used by the logging macros and
//! by tests that assert on captured log events.

pub mod schema;
