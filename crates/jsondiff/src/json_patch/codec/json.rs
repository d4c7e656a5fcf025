//! JSON codec for JSON Patch operations.
//!
//! Converts operations to/from `serde_json::Value` in RFC 6902 format:
//! `"op"` and `"path"` on every operation, `"value"` on `add` and `replace`,
//! `"from"` on `move`.

use jsondiff_json_pointer::{
    format_json_pointer, parse_json_pointer, validate_json_pointer, validate_path,
};
use serde_json::{Map, Value};

use crate::json_patch::types::{Op, PatchError};

// ── Path helpers ──────────────────────────────────────────────────────────

fn encode_path(path: &[String]) -> Value {
    Value::String(format_json_pointer(path))
}

fn decode_path(obj: &Map<String, Value>, field: &str, op: &str) -> Result<Vec<String>, PatchError> {
    let raw = obj
        .get(field)
        .ok_or_else(|| PatchError::InvalidOp(format!("{op} requires '{field}'")))?;
    let pointer = raw
        .as_str()
        .ok_or_else(|| PatchError::InvalidOp(format!("'{field}' must be a string")))?;
    validate_json_pointer(pointer).map_err(|e| PatchError::InvalidOp(format!("'{field}': {e}")))?;
    let path = parse_json_pointer(pointer);
    validate_path(&path).map_err(|e| PatchError::InvalidOp(format!("'{field}': {e}")))?;
    Ok(path)
}

fn decode_value(obj: &Map<String, Value>, op: &str) -> Result<Value, PatchError> {
    obj.get("value")
        .cloned()
        .ok_or_else(|| PatchError::InvalidOp(format!("{op} requires 'value'")))
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an `Op` to a `serde_json::Value` in the JSON Patch format.
pub fn to_json(op: &Op) -> Value {
    let mut m = Map::new();
    m.insert("op".into(), Value::String(op.op_name().into()));
    if let Some(from) = op.from() {
        m.insert("from".into(), encode_path(from));
    }
    m.insert("path".into(), encode_path(op.path()));
    if let Some(value) = op.value() {
        m.insert("value".into(), value.clone());
    }
    Value::Object(m)
}

/// Serialize a whole patch to a JSON array.
pub fn to_json_patch(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize a single JSON Patch operation.
///
/// # Errors
///
/// [`PatchError::InvalidOp`] when the value is not an object, the `"op"` name
/// is unknown, or a required member is missing or has the wrong type.
pub fn from_json(v: &Value) -> Result<Op, PatchError> {
    let obj = v
        .as_object()
        .ok_or_else(|| PatchError::InvalidOp("operation must be an object".into()))?;
    let op_str = obj
        .get("op")
        .and_then(Value::as_str)
        .ok_or_else(|| PatchError::InvalidOp("missing 'op' field".into()))?;

    let path = decode_path(obj, "path", op_str)?;
    match op_str {
        "add" => Ok(Op::Add {
            path,
            value: decode_value(obj, op_str)?,
        }),
        "remove" => Ok(Op::Remove { path }),
        "replace" => Ok(Op::Replace {
            path,
            value: decode_value(obj, op_str)?,
        }),
        "move" => Ok(Op::Move {
            from: decode_path(obj, "from", op_str)?,
            path,
        }),
        other => Err(PatchError::InvalidOp(format!("unknown op: {other}"))),
    }
}

/// Deserialize a JSON array of operations.
pub fn from_json_patch(v: &Value) -> Result<Vec<Op>, PatchError> {
    v.as_array()
        .ok_or_else(|| PatchError::InvalidOp("patch must be an array".into()))?
        .iter()
        .map(from_json)
        .collect()
}
