use serde_json::Value;

use crate::util::is_valid_index;

/// Get a value from a JSON document by path.
///
/// Returns `None` when a step is missing, an array step is not a valid index,
/// or a step goes through a scalar. The `-` step never resolves.
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Array(arr) => arr.get(array_index(step)?)?,
            Value::Object(map) => map.get(step)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get a mutable reference to a value in a JSON document by path.
pub fn get_mut<'a>(val: &'a mut Value, path: &[String]) -> Option<&'a mut Value> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Array(arr) => arr.get_mut(array_index(step)?)?,
            Value::Object(map) => map.get_mut(step)?,
            _ => return None,
        };
    }
    Some(current)
}

fn array_index(step: &str) -> Option<usize> {
    if !is_valid_index(step) {
        return None;
    }
    step.parse().ok()
}
