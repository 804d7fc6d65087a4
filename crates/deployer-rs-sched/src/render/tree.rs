//! Typed accessors over the untyped document tree.
//!
//! Every getter returns `Ok(None)` when the key is absent and an
//! `InvalidField` error when it holds the wrong shape. Returned containers are
//! copies; callers write them back with `set_field`.

use crate::SchedError;
use serde_json::{Map, Value};

/// A mapping node of the document tree.
pub(super) type Object = Map<String, Value>;

/// Copy out the mapping stored under `key`.
pub(super) fn nested_map(
    obj: &Object,
    key: &str,
    path: &str,
) -> Result<Option<Object>, SchedError> {
    match obj.get(key) {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map.clone())),
        Some(other) => Err(wrong_shape(path, key, "mapping", other)),
    }
}

/// Copy out the sequence stored under `key`.
pub(super) fn nested_slice(
    obj: &Object,
    key: &str,
    path: &str,
) -> Result<Option<Vec<Value>>, SchedError> {
    match obj.get(key) {
        None => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items.clone())),
        Some(other) => Err(wrong_shape(path, key, "sequence", other)),
    }
}

pub(super) fn nested_string(
    obj: &Object,
    key: &str,
    path: &str,
) -> Result<Option<String>, SchedError> {
    match obj.get(key) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(other) => Err(wrong_shape(path, key, "string", other)),
    }
}

pub(super) fn nested_i64(obj: &Object, key: &str, path: &str) -> Result<Option<i64>, SchedError> {
    match obj.get(key) {
        None => Ok(None),
        Some(found @ Value::Number(number)) => match number.as_i64() {
            Some(value) => Ok(Some(value)),
            None => Err(wrong_shape(path, key, "integer", found)),
        },
        Some(other) => Err(wrong_shape(path, key, "integer", other)),
    }
}

/// Turn an absent value into a `MissingField` error.
pub(super) fn required<T>(found: Option<T>, path: &str, key: &str) -> Result<T, SchedError> {
    found.ok_or_else(|| SchedError::MissingField {
        path: join_path(path, key),
    })
}

/// Borrow a sequence element as a mapping.
pub(super) fn as_object_mut<'a>(
    value: &'a mut Value,
    path: &str,
) -> Result<&'a mut Object, SchedError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(SchedError::InvalidField {
            path: normalize(path),
            message: format!("expected mapping, found {}", kind(other)),
        }),
    }
}

/// Store `value` under `key`. Returns whether the stored value changed.
pub(super) fn set_field(obj: &mut Object, key: &str, value: impl Into<Value>) -> bool {
    let value = value.into();
    if obj.get(key) == Some(&value) {
        return false;
    }
    obj.insert(key.to_string(), value);
    true
}

/// Join nested paths for error messages.
pub(super) fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Reject `.inf`, `-.inf` and `.nan` anywhere in a decoded YAML document.
pub(super) fn ensure_finite(value: &serde_yaml::Value, path: &str) -> Result<(), SchedError> {
    match value {
        serde_yaml::Value::Number(number) => match number.as_f64() {
            Some(float) if !float.is_finite() => Err(SchedError::InvalidField {
                path: normalize(path),
                message: format!("non-finite number {number} is not supported"),
            }),
            _ => Ok(()),
        },
        serde_yaml::Value::Sequence(items) => {
            for (idx, item) in items.iter().enumerate() {
                ensure_finite(item, &format!("{path}[{idx}]"))?;
            }
            Ok(())
        }
        serde_yaml::Value::Mapping(map) => {
            for (key, item) in map {
                let key_path = match key {
                    serde_yaml::Value::String(key) => join_path(path, key),
                    other => {
                        ensure_finite(other, path)?;
                        join_path(path, &format!("{other:?}"))
                    }
                };
                ensure_finite(item, &key_path)?;
            }
            Ok(())
        }
        serde_yaml::Value::Tagged(tagged) => ensure_finite(&tagged.value, path),
        serde_yaml::Value::Null | serde_yaml::Value::Bool(_) | serde_yaml::Value::String(_) => {
            Ok(())
        }
    }
}

fn normalize(path: &str) -> String {
    if path.is_empty() {
        "root".to_string()
    } else {
        path.to_string()
    }
}

fn wrong_shape(path: &str, key: &str, expected: &str, found: &Value) -> SchedError {
    SchedError::InvalidField {
        path: join_path(path, key),
        message: format!("expected {expected}, found {}", kind(found)),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(number) if number.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
