//! JSON Patch apply logic.
//!
//! Replays `add`, `remove`, `replace` and `move` operations against a
//! document, in order, with RFC 6902 semantics.

use jsondiff_json_pointer::{get_mut, is_child, is_valid_index};
use serde_json::Value;

use super::types::{ApplyPatchOptions, Op, OpResult, PatchError, PatchResult};

// ── Path navigation ───────────────────────────────────────────────────────

/// Split `path` into the container holding the target and the last step.
fn parent_of<'a, 'p>(
    doc: &'a mut Value,
    path: &'p [String],
) -> Result<(&'a mut Value, &'p str), PatchError> {
    let (key, parent_path) = path.split_last().ok_or(PatchError::InvalidTarget)?;
    let parent = get_mut(doc, parent_path).ok_or(PatchError::NotFound)?;
    Ok((parent, key.as_str()))
}

fn parse_index(key: &str) -> Result<usize, PatchError> {
    if !is_valid_index(key) {
        return Err(PatchError::InvalidIndex);
    }
    key.parse().map_err(|_| PatchError::InvalidIndex)
}

// ── Individual operation applicators ─────────────────────────────────────

fn apply_add(doc: &mut Value, path: &[String], value: Value) -> Result<Option<Value>, PatchError> {
    if path.is_empty() {
        return Ok(Some(std::mem::replace(doc, value)));
    }
    let (parent, key) = parent_of(doc, path)?;
    match parent {
        Value::Object(map) => Ok(map.insert(key.to_string(), value)),
        Value::Array(arr) => {
            if key == "-" {
                arr.push(value);
                return Ok(None);
            }
            let idx = parse_index(key)?;
            if idx > arr.len() {
                return Err(PatchError::InvalidIndex);
            }
            arr.insert(idx, value);
            Ok(None)
        }
        _ => Err(PatchError::InvalidTarget),
    }
}

fn apply_remove(doc: &mut Value, path: &[String]) -> Result<Value, PatchError> {
    let (parent, key) = parent_of(doc, path)?;
    match parent {
        Value::Object(map) => map.shift_remove(key).ok_or(PatchError::NotFound),
        Value::Array(arr) => {
            let idx = parse_index(key)?;
            if idx >= arr.len() {
                return Err(PatchError::NotFound);
            }
            Ok(arr.remove(idx))
        }
        _ => Err(PatchError::InvalidTarget),
    }
}

fn apply_replace(doc: &mut Value, path: &[String], value: Value) -> Result<Option<Value>, PatchError> {
    if path.is_empty() {
        return Ok(Some(std::mem::replace(doc, value)));
    }
    let (parent, key) = parent_of(doc, path)?;
    let slot = match parent {
        Value::Object(map) => map.get_mut(key).ok_or(PatchError::NotFound)?,
        Value::Array(arr) => {
            let idx = parse_index(key)?;
            arr.get_mut(idx).ok_or(PatchError::NotFound)?
        }
        _ => return Err(PatchError::InvalidTarget),
    };
    Ok(Some(std::mem::replace(slot, value)))
}

fn apply_move(doc: &mut Value, from: &[String], path: &[String]) -> Result<Option<Value>, PatchError> {
    // a value cannot be moved into one of its own children
    if is_child(from, path) {
        return Err(PatchError::InvalidTarget);
    }
    let value = apply_remove(doc, from)?;
    apply_add(doc, path, value)
}

// ── Main apply function ───────────────────────────────────────────────────

/// Apply a single operation to the document (in-place mutation).
///
/// Returns the value displaced at the target path, if any.
pub fn apply_op(doc: &mut Value, op: &Op) -> Result<Option<Value>, PatchError> {
    match op {
        Op::Add { path, value } => apply_add(doc, path, value.clone()),
        Op::Remove { path } => apply_remove(doc, path).map(Some),
        Op::Replace { path, value } => apply_replace(doc, path, value.clone()),
        Op::Move { from, path } => apply_move(doc, from, path),
    }
}

/// Apply a sequence of operations, returning the final document and per-op results.
pub fn apply_ops(mut doc: Value, ops: &[Op]) -> Result<PatchResult, PatchError> {
    let mut results = Vec::with_capacity(ops.len());
    for op in ops {
        let old = apply_op(&mut doc, op)?;
        results.push(OpResult { doc: doc.clone(), old });
    }
    Ok(PatchResult { doc, res: results })
}

/// Apply a sequence of operations with options (mutate vs. snapshot).
///
/// When `mutate: true`, ops are applied without capturing per-op intermediate
/// snapshots. When `mutate: false`, the full `apply_ops` path is used.
pub fn apply_patch(doc: Value, ops: &[Op], options: &ApplyPatchOptions) -> Result<PatchResult, PatchError> {
    if !options.mutate {
        return apply_ops(doc, ops);
    }
    let mut working = doc;
    for op in ops {
        apply_op(&mut working, op)?;
    }
    Ok(PatchResult { doc: working, res: vec![] })
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use jsondiff_json_pointer::parse_json_pointer as path;
    use serde_json::json;

    #[test]
    fn add_to_object() {
        let mut doc = json!({"a": 1});
        apply_op(&mut doc, &Op::Add { path: path("/b"), value: json!(2) }).unwrap();
        assert_eq!(doc, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn add_overwrites_existing_member() {
        let mut doc = json!({"a": 1});
        let old = apply_op(&mut doc, &Op::Add { path: path("/a"), value: json!(2) }).unwrap();
        assert_eq!(doc, json!({"a": 2}));
        assert_eq!(old, Some(json!(1)));
    }

    #[test]
    fn add_to_array() {
        let mut doc = json!([1, 2, 3]);
        apply_op(&mut doc, &Op::Add { path: path("/1"), value: json!(99) }).unwrap();
        assert_eq!(doc, json!([1, 99, 2, 3]));
    }

    #[test]
    fn add_at_array_end() {
        let mut doc = json!([1, 2]);
        apply_op(&mut doc, &Op::Add { path: path("/2"), value: json!(3) }).unwrap();
        apply_op(&mut doc, &Op::Add { path: path("/-"), value: json!(4) }).unwrap();
        assert_eq!(doc, json!([1, 2, 3, 4]));
    }

    #[test]
    fn add_past_array_end_fails() {
        let mut doc = json!([1]);
        let r = apply_op(&mut doc, &Op::Add { path: path("/3"), value: json!(0) });
        assert_eq!(r, Err(PatchError::InvalidIndex));
    }

    #[test]
    fn add_root_replaces_document() {
        let mut doc = json!({"a": 1});
        apply_op(&mut doc, &Op::Add { path: vec![], value: json!([1]) }).unwrap();
        assert_eq!(doc, json!([1]));
    }

    #[test]
    fn remove_from_object_keeps_order() {
        let mut doc = json!({"a": 1, "b": 2, "c": 3});
        let old = apply_op(&mut doc, &Op::Remove { path: path("/a") }).unwrap();
        assert_eq!(old, Some(json!(1)));
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["b", "c"]);
    }

    #[test]
    fn remove_from_array_shifts_left() {
        let mut doc = json!(["a", "b", "c"]);
        apply_op(&mut doc, &Op::Remove { path: path("/0") }).unwrap();
        assert_eq!(doc, json!(["b", "c"]));
    }

    #[test]
    fn remove_missing_fails() {
        let mut doc = json!({"a": [1]});
        assert_eq!(
            apply_op(&mut doc, &Op::Remove { path: path("/b") }),
            Err(PatchError::NotFound)
        );
        assert_eq!(
            apply_op(&mut doc, &Op::Remove { path: path("/a/1") }),
            Err(PatchError::NotFound)
        );
        assert_eq!(
            apply_op(&mut doc, &Op::Remove { path: path("/x/y") }),
            Err(PatchError::NotFound)
        );
    }

    #[test]
    fn remove_root_is_invalid() {
        let mut doc = json!(1);
        assert_eq!(
            apply_op(&mut doc, &Op::Remove { path: vec![] }),
            Err(PatchError::InvalidTarget)
        );
    }

    #[test]
    fn replace_value() {
        let mut doc = json!({"a": 1, "b": [0, 1]});
        apply_op(&mut doc, &Op::Replace { path: path("/a"), value: json!(99) }).unwrap();
        apply_op(&mut doc, &Op::Replace { path: path("/b/1"), value: json!("x") }).unwrap();
        assert_eq!(doc, json!({"a": 99, "b": [0, "x"]}));
    }

    #[test]
    fn replace_missing_fails() {
        let mut doc = json!({"a": [1]});
        assert_eq!(
            apply_op(&mut doc, &Op::Replace { path: path("/z"), value: json!(1) }),
            Err(PatchError::NotFound)
        );
        assert_eq!(
            apply_op(&mut doc, &Op::Replace { path: path("/a/5"), value: json!(1) }),
            Err(PatchError::NotFound)
        );
    }

    #[test]
    fn scalar_parent_is_invalid_target() {
        let mut doc = json!({"a": 1});
        assert_eq!(
            apply_op(&mut doc, &Op::Add { path: path("/a/b"), value: json!(1) }),
            Err(PatchError::InvalidTarget)
        );
    }

    #[test]
    fn bad_array_index() {
        let mut doc = json!([1, 2]);
        assert_eq!(
            apply_op(&mut doc, &Op::Remove { path: path("/01") }),
            Err(PatchError::InvalidIndex)
        );
        assert_eq!(
            apply_op(&mut doc, &Op::Add { path: path("/x"), value: json!(0) }),
            Err(PatchError::InvalidIndex)
        );
    }

    #[test]
    fn move_in_object() {
        let mut doc = json!({"a": 1, "b": 2});
        apply_op(&mut doc, &Op::Move { from: path("/a"), path: path("/c") }).unwrap();
        assert_eq!(doc, json!({"b": 2, "c": 1}));
    }

    #[test]
    fn move_within_array() {
        let mut doc = json!(["bar", "fug"]);
        apply_op(&mut doc, &Op::Move { from: path("/1"), path: path("/0") }).unwrap();
        assert_eq!(doc, json!(["fug", "bar"]));

        let mut doc = json!(["a", "b", "c"]);
        apply_op(&mut doc, &Op::Move { from: path("/0"), path: path("/2") }).unwrap();
        assert_eq!(doc, json!(["b", "c", "a"]));
    }

    #[test]
    fn move_into_own_child_fails() {
        let mut doc = json!({"a": {"b": 1}});
        let r = apply_op(&mut doc, &Op::Move { from: path("/a"), path: path("/a/b/c") });
        assert_eq!(r, Err(PatchError::InvalidTarget));
    }

    #[test]
    fn apply_ops_sequence() {
        let doc = json!({"a": 1});
        let ops = vec![
            Op::Add { path: path("/b"), value: json!(2) },
            Op::Replace { path: path("/a"), value: json!(10) },
        ];
        let result = apply_ops(doc, &ops).unwrap();
        assert_eq!(result.doc, json!({"a": 10, "b": 2}));
        assert_eq!(result.res.len(), 2);
        assert_eq!(result.res[0].doc, json!({"a": 1, "b": 2}));
        assert_eq!(result.res[1].old, Some(json!(1)));
    }

    #[test]
    fn apply_patch_mutate_skips_snapshots() {
        let ops = vec![Op::Add { path: path("/b"), value: json!(2) }];
        let result = apply_patch(json!({}), &ops, &ApplyPatchOptions { mutate: true }).unwrap();
        assert_eq!(result.doc, json!({"b": 2}));
        assert!(result.res.is_empty());
    }

    #[test]
    fn apply_stops_at_first_error() {
        let ops = vec![
            Op::Remove { path: path("/a") },
            Op::Remove { path: path("/a") },
        ];
        assert_eq!(
            apply_ops(json!({"a": 1}), &ops).unwrap_err(),
            PatchError::NotFound
        );
    }
}
