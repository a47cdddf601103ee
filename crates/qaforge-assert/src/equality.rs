use std::fmt::Debug;

use serde::Serialize;

use crate::error::{AssertResult, AssertionError};

/// Assert that a condition holds.
pub fn assert_is_true(condition: bool, message: &str) -> AssertResult {
    if condition {
        Ok(())
    } else {
        Err(AssertionError::new(message))
    }
}

/// Assert that a condition does not hold.
pub fn assert_is_false(condition: bool, message: &str) -> AssertResult {
    if condition {
        Err(AssertionError::new(message))
    } else {
        Ok(())
    }
}

/// Assert that two values compare equal.
pub fn assert_equals<T: PartialEq + Debug>(expected: &T, actual: &T, message: &str) -> AssertResult {
    if expected == actual {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} Expected: {expected:?}, but was: {actual:?}"
        )))
    }
}

/// Assert that two values are structurally equal all the way down.
///
/// Both sides are serialized and their JSON trees compared recursively, so
/// nested maps, sequences, and mixed structures are checked member by
/// member rather than through a single surface comparison.
pub fn assert_deep_equals<T: Serialize>(expected: &T, actual: &T, message: &str) -> AssertResult {
    let expected = serde_json::to_value(expected)
        .map_err(|err| AssertionError::new(format!("{message} Failed to serialize value: {err}")))?;
    let actual = serde_json::to_value(actual)
        .map_err(|err| AssertionError::new(format!("{message} Failed to serialize value: {err}")))?;
    if expected == actual {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} Expected: {expected}, but was: {actual}"
        )))
    }
}

/// Assert that an optional value is present.
pub fn assert_is_some<T>(value: &Option<T>, message: &str) -> AssertResult {
    if value.is_some() {
        Ok(())
    } else {
        Err(AssertionError::new(message))
    }
}

/// Assert that an optional value is absent.
pub fn assert_is_none<T>(value: &Option<T>, message: &str) -> AssertResult {
    if value.is_none() {
        Ok(())
    } else {
        Err(AssertionError::new(message))
    }
}
