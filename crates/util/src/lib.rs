//! jsondiff-util - Utility functions for jsondiff
//!
//! Structural equality for JSON values, and a seeded fuzzer that produces
//! random documents and random edits of them for property tests.

pub mod fuzzer;
pub mod json_equal;

// Re-exports for convenience
pub use fuzzer::Fuzzer;
pub use json_equal::deep_equal;
