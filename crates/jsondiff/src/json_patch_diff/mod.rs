//! JSON Patch diff: generate a JSON Patch from two document values.
//!
//! The differ walks both documents together:
//!
//! - two arrays are handed to the array reconciler ([`array`]);
//! - two objects are diffed member by member, first over the keys of the new
//!   object (in its order), then over keys only the old object has;
//! - anything else is a leaf: equal leaves produce nothing, a member that
//!   appears produces `add`, one that disappears produces `remove`, and one
//!   that changes produces `replace` (see [`TypeChange`] for values that
//!   change kind).
//!
//! The output is a replayable transcript: every path is valid against the
//! document as left by the operations before it.

use jsondiff_json_pointer::{child, format_json_pointer, is_root};
use jsondiff_util::deep_equal;
use serde_json::{Map, Value};
use tracing::debug;

use crate::json_patch::types::Op;

pub mod array;
pub mod options;

pub use options::{DiffOptions, TypeChange};

// ── Entry ─────────────────────────────────────────────────────────────────

/// One side of a comparison: a value, or the absence of one.
///
/// `Missing` is "no such member". A JSON `null` is `Present(&Value::Null)`
/// and is diffed like any other value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry<'a> {
    Missing,
    Present(&'a Value),
}

impl<'a> From<Option<&'a Value>> for Entry<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Entry::Missing, Entry::Present)
    }
}

// ── Public API ────────────────────────────────────────────────────────────

/// Generate a JSON Patch (list of operations) that transforms `src` into `dst`.
///
/// ```
/// use jsondiff::{diff, to_json_patch};
/// use serde_json::json;
///
/// let ops = diff(&json!({"foo": ["bar", "fug"]}), &json!({"foo": ["fug", "bar"]}));
/// assert_eq!(
///     to_json_patch(&ops),
///     json!([{"op": "move", "from": "/foo/1", "path": "/foo/0"}])
/// );
/// ```
pub fn diff(src: &Value, dst: &Value) -> Vec<Op> {
    diff_with_options(src, dst, &DiffOptions::default())
}

/// Like [`diff`], with explicit options.
pub fn diff_with_options(src: &Value, dst: &Value, opts: &DiffOptions) -> Vec<Op> {
    diff_at_path(src, dst, &[], opts)
}

/// Diff two values that live at `prefix` inside a larger document. Every
/// emitted path starts with `prefix`.
pub fn diff_at_path(src: &Value, dst: &Value, prefix: &[String], opts: &DiffOptions) -> Vec<Op> {
    let mut ops = Vec::new();
    diff_values(&mut ops, prefix, src, dst, opts);
    debug!(
        path = %format_json_pointer(prefix),
        ops = ops.len(),
        "json patch diff complete"
    );
    ops
}

// ── Core recursive differ ─────────────────────────────────────────────────

pub(crate) fn diff_entry(
    ops: &mut Vec<Op>,
    path: &[String],
    src: Entry<'_>,
    dst: Entry<'_>,
    opts: &DiffOptions,
) {
    match (src, dst) {
        (Entry::Missing, Entry::Missing) => {}
        (Entry::Missing, Entry::Present(value)) => ops.push(Op::Add {
            path: path.to_vec(),
            value: value.clone(),
        }),
        (Entry::Present(_), Entry::Missing) => ops.push(Op::Remove {
            path: path.to_vec(),
        }),
        (Entry::Present(src), Entry::Present(dst)) => diff_values(ops, path, src, dst, opts),
    }
}

pub(crate) fn diff_values(
    ops: &mut Vec<Op>,
    path: &[String],
    src: &Value,
    dst: &Value,
    opts: &DiffOptions,
) {
    match (src, dst) {
        (Value::Array(s), Value::Array(d)) => array::diff_array(ops, path, s, d, opts),
        (Value::Object(s), Value::Object(d)) => diff_obj(ops, path, s, d, opts),
        _ if deep_equal(src, dst) => {}
        _ => diff_val(ops, path, dst, opts),
    }
}

fn diff_obj(
    ops: &mut Vec<Op>,
    path: &[String],
    src: &Map<String, Value>,
    dst: &Map<String, Value>,
    opts: &DiffOptions,
) {
    for (key, dst_val) in dst {
        let p = child(path, key);
        diff_entry(ops, &p, src.get(key).into(), Entry::Present(dst_val), opts);
    }
    for (key, src_val) in src {
        if !dst.contains_key(key) {
            let p = child(path, key);
            diff_entry(ops, &p, Entry::Present(src_val), Entry::Missing, opts);
        }
    }
}

/// A leaf changed. Same-kind containers never get here, so a container `dst`
/// always means the value changed kind.
fn diff_val(ops: &mut Vec<Op>, path: &[String], dst: &Value, opts: &DiffOptions) {
    let is_container = matches!(dst, Value::Array(_) | Value::Object(_));
    if opts.type_change == TypeChange::Granular && is_container && !is_root(path) {
        ops.push(Op::Remove { path: path.to_vec() });
        add_granular(ops, path, dst);
        return;
    }
    ops.push(Op::Replace {
        path: path.to_vec(),
        value: dst.clone(),
    });
}

fn add_granular(ops: &mut Vec<Op>, path: &[String], value: &Value) {
    match value {
        Value::Array(items) => {
            ops.push(Op::Add {
                path: path.to_vec(),
                value: Value::Array(Vec::new()),
            });
            for (i, item) in items.iter().enumerate() {
                add_granular(ops, &child(path, i), item);
            }
        }
        Value::Object(map) => {
            ops.push(Op::Add {
                path: path.to_vec(),
                value: Value::Object(Map::new()),
            });
            for (key, item) in map {
                add_granular(ops, &child(path, key), item);
            }
        }
        scalar => ops.push(Op::Add {
            path: path.to_vec(),
            value: scalar.clone(),
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
