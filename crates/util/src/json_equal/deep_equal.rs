use serde_json::{Number, Value};

/// Performs a deep structural equality check between two JSON values.
///
/// - Scalars compare by type and value; there is no coercion, so `"1"` is not
///   equal to `1` and `0` is not equal to `false` or `null`.
/// - Numbers compare by numeric value, so `1` equals `1.0`.
/// - Arrays compare element by element, by position.
/// - Objects compare by key set and member values; key order is ignored.
/// - An array never equals an object, and a container never equals a scalar.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use jsondiff_util::json_equal::deep_equal;
///
/// assert!(deep_equal(&json!({"a": 1, "b": [2]}), &json!({"b": [2], "a": 1})));
/// assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
/// assert!(!deep_equal(&json!("1"), &json!(1)));
/// assert!(deep_equal(&json!(1), &json!(1.0)));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a.iter().zip(arr_b).all(|(x, y)| deep_equal(x, y))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            obj_a.iter().all(|(key, val_a)| match obj_b.get(key) {
                Some(val_b) => deep_equal(val_a, val_b),
                None => false,
            })
        }

        _ => false,
    }
}

fn number_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
