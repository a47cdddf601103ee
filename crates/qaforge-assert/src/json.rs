use std::fmt;

use serde_json::Value;

use crate::error::{AssertResult, AssertionError};

/// Shape of a JSON value, for type assertions over dynamic data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// The kind of the given value.
    pub fn of(value: &Value) -> JsonKind {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "bool",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Assert that a value is numeric.
pub fn assert_is_number(value: &Value, message: &str) -> AssertResult {
    if value.is_number() {
        Ok(())
    } else {
        Err(AssertionError::new(message))
    }
}

/// Assert that a value is not numeric.
pub fn assert_is_not_number(value: &Value, message: &str) -> AssertResult {
    if value.is_number() {
        Err(AssertionError::new(message))
    } else {
        Ok(())
    }
}

/// Assert that a value has the expected JSON shape.
pub fn assert_is_type_of(expected: JsonKind, value: &Value, message: &str) -> AssertResult {
    let actual = JsonKind::of(value);
    if actual == expected {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} Expected type: {expected}, but was: {actual}"
        )))
    }
}

/// Assert that an object value carries the given property.
pub fn assert_has_property(value: &Value, property: &str, message: &str) -> AssertResult {
    let present = value
        .as_object()
        .is_some_and(|object| object.contains_key(property));
    if present {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} Object does not have property: {property}"
        )))
    }
}

/// Assert that an object value carries the given property with the given
/// value.
pub fn assert_property_value(
    value: &Value,
    property: &str,
    expected: &Value,
    message: &str,
) -> AssertResult {
    let Some(actual) = value.as_object().and_then(|object| object.get(property)) else {
        return Err(AssertionError::new(format!(
            "{message} Failed to access property: {property}"
        )));
    };
    if actual == expected {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} Expected value: {expected}, but was: {actual}"
        )))
    }
}

/// Assert that an object value carries every one of the given keys.
pub fn assert_has_keys(value: &Value, keys: &[&str], message: &str) -> AssertResult {
    for key in keys {
        if !value.as_object().is_some_and(|object| object.contains_key(*key)) {
            return Err(AssertionError::new(format!(
                "{message} Object is missing key: {key}"
            )));
        }
    }
    Ok(())
}

/// Assert that one of an object's property values equals the given value.
pub fn assert_includes_value(value: &Value, needle: &Value, message: &str) -> AssertResult {
    let found = value
        .as_object()
        .is_some_and(|object| object.values().any(|candidate| candidate == needle));
    if found {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} Object does not include value: {needle}"
        )))
    }
}

/// Assert that a container value is empty. Objects, arrays, and strings are
/// checked; any other shape passes.
pub fn assert_object_is_empty(value: &Value, message: &str) -> AssertResult {
    match value {
        Value::Object(object) if !object.is_empty() => Err(AssertionError::new(format!(
            "{message} Expected empty map, but was not."
        ))),
        Value::Array(array) if !array.is_empty() => Err(AssertionError::new(format!(
            "{message} Expected empty collection, but was not."
        ))),
        Value::String(string) if !string.is_empty() => Err(AssertionError::new(format!(
            "{message} Expected empty string, but was not."
        ))),
        _ => Ok(()),
    }
}

/// Assert that a container value is not empty. Objects and arrays are
/// checked; any other shape passes.
pub fn assert_object_is_not_empty(value: &Value, message: &str) -> AssertResult {
    match value {
        Value::Object(object) if object.is_empty() => Err(AssertionError::new(format!(
            "{message} Expected non-empty map, but was empty."
        ))),
        Value::Array(array) if array.is_empty() => Err(AssertionError::new(format!(
            "{message} Expected non-empty collection, but was empty."
        ))),
        _ => Ok(()),
    }
}

/// Assert that a value is an array.
pub fn assert_is_array(value: &Value, message: &str) -> AssertResult {
    if value.is_array() {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} Value is not an array"
        )))
    }
}

/// Assert that a value is not an array.
pub fn assert_is_not_array(value: &Value, message: &str) -> AssertResult {
    if value.is_array() {
        Err(AssertionError::new(format!(
            "{message} Value is an array, but should not be"
        )))
    } else {
        Ok(())
    }
}

/// Assert that an array value has exactly the expected number of elements.
pub fn assert_array_length(value: &Value, expected: usize, message: &str) -> AssertResult {
    let Some(array) = value.as_array() else {
        return Err(AssertionError::new(format!(
            "{message} Value is not an array"
        )));
    };
    if array.len() != expected {
        return Err(AssertionError::new(format!(
            "{message} Expected array length: {expected}, but was: {}",
            array.len()
        )));
    }
    Ok(())
}
