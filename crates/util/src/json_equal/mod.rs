//! JSON equality utilities.
//!
//! Provides the deep structural comparison used to match values across two
//! versions of a document.

mod deep_equal;

pub use deep_equal::deep_equal;
