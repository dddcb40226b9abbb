//! Checked field access over `serde_json` values.
//!
//! Every accessor either returns the value with the declared type or fails with a
//! typed error carrying the JSON path of the offending field:
//! a missing required field is `MalformedRecord`, a present field of the wrong
//! JSON type is `TypeMismatch`. Nothing is coerced.

use serde_json::{Map, Number, Value};

use crate::error::{EdgarError, Result};

/// Name of a value's JSON type, for error messages.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn join_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", parent, field)
    }
}

pub(crate) fn index_path(parent: &str, idx: usize) -> String {
    format!("{}[{}]", parent, idx)
}

pub(crate) fn type_mismatch(path: String, expected: &'static str, found: &Value) -> EdgarError {
    EdgarError::TypeMismatch {
        path,
        expected,
        found: json_type(found),
    }
}

/// Borrows `value` as a JSON object or reports a type mismatch at `path`.
pub(crate) fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        type_mismatch(
            if path.is_empty() { "$".to_string() } else { path.to_string() },
            "object",
            value,
        )
    })
}

/// A JSON object together with its path inside the document.
#[derive(Debug, Clone)]
pub(crate) struct Fields<'a> {
    object: &'a Map<String, Value>,
    path: String,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(value: &'a Value, path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        Ok(Self {
            object: as_object(value, &path)?,
            path,
        })
    }

    pub(crate) fn new_object(object: &'a Map<String, Value>, path: impl Into<String>) -> Self {
        Self {
            object,
            path: path.into(),
        }
    }

    pub(crate) fn path_of(&self, field: &str) -> String {
        join_path(&self.path, field)
    }

    /// The raw value of a required field.
    pub(crate) fn required(&self, field: &str) -> Result<&'a Value> {
        self.object
            .get(field)
            .ok_or_else(|| EdgarError::MalformedRecord {
                path: self.path_of(field),
            })
    }

    /// The raw value of an optional field; JSON `null` counts as absent.
    pub(crate) fn optional(&self, field: &str) -> Option<&'a Value> {
        self.object.get(field).filter(|v| !v.is_null())
    }

    pub(crate) fn string(&self, field: &str) -> Result<String> {
        let value = self.required(field)?;
        value
            .as_str()
            .map(String::from)
            .ok_or_else(|| type_mismatch(self.path_of(field), "string", value))
    }

    pub(crate) fn opt_string(&self, field: &str) -> Result<Option<String>> {
        self.optional(field)
            .map(|value| {
                value
                    .as_str()
                    .map(String::from)
                    .ok_or_else(|| type_mismatch(self.path_of(field), "string", value))
            })
            .transpose()
    }

    pub(crate) fn u64(&self, field: &str) -> Result<u64> {
        let value = self.required(field)?;
        value
            .as_u64()
            .ok_or_else(|| type_mismatch(self.path_of(field), "unsigned integer", value))
    }

    pub(crate) fn opt_i64(&self, field: &str) -> Result<Option<i64>> {
        self.optional(field)
            .map(|value| {
                value
                    .as_i64()
                    .ok_or_else(|| type_mismatch(self.path_of(field), "integer", value))
            })
            .transpose()
    }

    pub(crate) fn number(&self, field: &str) -> Result<Number> {
        let value = self.required(field)?;
        match value {
            Value::Number(n) => Ok(n.clone()),
            other => Err(type_mismatch(self.path_of(field), "number", other)),
        }
    }

    pub(crate) fn object(&self, field: &str) -> Result<&'a Map<String, Value>> {
        let value = self.required(field)?;
        value
            .as_object()
            .ok_or_else(|| type_mismatch(self.path_of(field), "object", value))
    }

    pub(crate) fn opt_array(&self, field: &str) -> Result<Option<&'a Vec<Value>>> {
        self.optional(field)
            .map(|value| {
                value
                    .as_array()
                    .ok_or_else(|| type_mismatch(self.path_of(field), "array", value))
            })
            .transpose()
    }

    pub(crate) fn array(&self, field: &str) -> Result<&'a Vec<Value>> {
        let value = self.required(field)?;
        value
            .as_array()
            .ok_or_else(|| type_mismatch(self.path_of(field), "array", value))
    }
}
