//! JSON Patch implementation (RFC 6902).
//!
//! # Operations
//!
//! The operations a diff can produce: `add`, `remove`, `replace`, `move`.
//! Patches are plain `Vec<Op>`; [`apply`] replays them against a document and
//! [`codec::json`] converts them to and from their RFC 6902 JSON form.

pub mod apply;
pub mod codec;
pub mod types;

pub use apply::{apply_op, apply_ops, apply_patch};
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
pub use types::{ApplyPatchOptions, Op, OpResult, Patch, PatchError, PatchResult};
