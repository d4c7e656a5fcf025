#![allow(dead_code)]

use jsondiff::{apply_ops, diff_with_options, to_json_patch, DiffOptions, Op};
use jsondiff_util::deep_equal;
use serde_json::Value;

/// Replay `ops` against `doc`, panicking with the failing step on error.
pub fn replay(doc: &Value, ops: &[Op]) -> Value {
    match apply_ops(doc.clone(), ops) {
        Ok(result) => result.doc,
        Err(err) => panic!(
            "patch does not replay: {err}\n  doc:   {doc}\n  patch: {}",
            to_json_patch(ops)
        ),
    }
}

/// Diff `orig` against `update`, check the patch replays to `update`, and
/// return it in its JSON form.
pub fn diff_json(orig: &Value, update: &Value, opts: &DiffOptions) -> Value {
    let ops = diff_with_options(orig, update, opts);
    let replayed = replay(orig, &ops);
    assert!(
        deep_equal(&replayed, update),
        "replay mismatch\n  replayed: {replayed}\n  update: {update}\n  orig:   {orig}\n  patch:  {}",
        to_json_patch(&ops)
    );
    to_json_patch(&ops)
}

/// Assert the default diff of `orig` and `update` is exactly `expected`.
pub fn assert_patch(orig: Value, update: Value, expected: Value) {
    let actual = diff_json(&orig, &update, &DiffOptions::default());
    assert_eq!(actual, expected, "orig={orig} update={update}");
}
