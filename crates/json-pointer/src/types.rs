//! Type definitions for JSON Pointer paths.

/// A single step of a path: an object key, or an array index rendered as a
/// decimal string.
pub type PathStep = String;

/// A JSON Pointer path. The empty path addresses the document root.
pub type Path = Vec<PathStep>;
