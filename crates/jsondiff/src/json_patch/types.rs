//! Core types for the JSON Patch module.

use serde_json::Value;
use thiserror::Error;

pub use jsondiff_json_pointer::Path;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum PatchError {
    #[error("NOT_FOUND")]
    NotFound,
    #[error("INVALID_INDEX")]
    InvalidIndex,
    #[error("INVALID_TARGET")]
    InvalidTarget,
    #[error("INVALID_OP: {0}")]
    InvalidOp(String),
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A JSON Patch (RFC 6902) operation.
///
/// Paths are relative to the document root and must be read against the
/// document as left by every earlier operation of the same patch.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// Insert `value` at `path`. Array elements at and after the index shift
    /// right; an existing object member is overwritten.
    Add { path: Path, value: Value },
    /// Delete the value at `path`. Later array elements shift left.
    Remove { path: Path },
    /// Overwrite the value at `path` in place.
    Replace { path: Path, value: Value },
    /// Relocate the value at `from` to `path`.
    Move { from: Path, path: Path },
}

/// An ordered sequence of operations.
pub type Patch = Vec<Op>;

impl Op {
    /// Returns the `"op"` member name of the operation.
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Remove { .. } => "remove",
            Op::Replace { .. } => "replace",
            Op::Move { .. } => "move",
        }
    }

    /// Returns the target path of the operation.
    pub fn path(&self) -> &Path {
        match self {
            Op::Add { path, .. }
            | Op::Remove { path }
            | Op::Replace { path, .. }
            | Op::Move { path, .. } => path,
        }
    }

    /// Returns the source path of a `move`.
    pub fn from(&self) -> Option<&Path> {
        match self {
            Op::Move { from, .. } => Some(from),
            _ => None,
        }
    }

    /// Returns the value carried by an `add` or `replace`.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Op::Add { value, .. } | Op::Replace { value, .. } => Some(value),
            _ => None,
        }
    }
}

// ── Result types ──────────────────────────────────────────────────────────

/// Result of applying a single operation.
#[derive(Debug, Clone)]
pub struct OpResult {
    /// The document after applying the operation.
    pub doc: Value,
    /// The value at the path before the operation, if applicable.
    pub old: Option<Value>,
}

/// Result of applying a full patch.
#[derive(Debug, Clone)]
pub struct PatchResult {
    pub doc: Value,
    pub res: Vec<OpResult>,
}

/// Options for `apply_patch`.
#[derive(Debug, Clone, Default)]
pub struct ApplyPatchOptions {
    /// If true, apply in place without recording per-operation snapshots.
    /// If false, the document after each operation is kept in
    /// [`PatchResult::res`].
    pub mutate: bool,
}
