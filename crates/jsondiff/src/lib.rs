//! jsondiff: RFC 6902 JSON Patch generation.
//!
//! Given an old and a new JSON document, [`diff`] produces an ordered list of
//! `add`, `remove`, `replace` and `move` operations that turns the old one into
//! the new one when replayed in order. Arrays are reconciled by structural
//! equality, so reordered elements become `move`s rather than rewrites.
//!
//! The [`json_patch`] module carries the operation type, an applier and the
//! RFC 6902 JSON codec; [`json_patch_diff`] is the differ itself.
//!
//! ```
//! use jsondiff::{apply_ops, diff, to_json_patch};
//! use serde_json::json;
//!
//! let old = json!({"a": 1, "list": ["x", "y"]});
//! let new = json!({"a": 1, "b": 2, "list": ["y", "x"]});
//!
//! let ops = diff(&old, &new);
//! assert_eq!(
//!     to_json_patch(&ops),
//!     json!([
//!         {"op": "add", "path": "/b", "value": 2},
//!         {"op": "move", "from": "/list/1", "path": "/list/0"}
//!     ])
//! );
//! assert_eq!(apply_ops(old, &ops).unwrap().doc, new);
//! ```

pub mod json_patch;
pub mod json_patch_diff;

pub use json_patch::{
    apply_op, apply_ops, apply_patch, from_json, from_json_patch, to_json, to_json_patch,
    ApplyPatchOptions, Op, OpResult, Patch, PatchError, PatchResult,
};
pub use json_patch_diff::{diff, diff_at_path, diff_with_options, DiffOptions, Entry, TypeChange};
