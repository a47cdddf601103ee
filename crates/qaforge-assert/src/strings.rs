use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use http::Uri;
use regex::Regex;

use crate::error::{AssertResult, AssertionError};

const EMAIL_PATTERN: &str =
    r"^[a-zA-Z0-9_+&*-]+(?:\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}$";

/// Assert that a string has exactly the expected number of characters.
pub fn assert_string_length(value: &str, expected: usize, message: &str) -> AssertResult {
    let actual = value.chars().count();
    if actual != expected {
        return Err(AssertionError::new(format!(
            "{message} Expected length: {expected}, but was: {actual}"
        )));
    }
    Ok(())
}

/// Assert that a string contains the given substring.
pub fn assert_string_contains(value: &str, substring: &str, message: &str) -> AssertResult {
    if value.contains(substring) {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} String does not contain: {substring}"
        )))
    }
}

/// Assert that a string starts with the given prefix.
pub fn assert_string_starts_with(value: &str, prefix: &str, message: &str) -> AssertResult {
    if value.starts_with(prefix) {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} String does not start with: {prefix}"
        )))
    }
}

/// Assert that a string ends with the given suffix.
pub fn assert_string_ends_with(value: &str, suffix: &str, message: &str) -> AssertResult {
    if value.ends_with(suffix) {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} String does not end with: {suffix}"
        )))
    }
}

/// Assert that the whole string matches the given pattern source.
pub fn assert_string_matches(value: &str, pattern: &str, message: &str) -> AssertResult {
    let matcher = compile_anchored(pattern, message)?;
    if matcher.is_match(value) {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} String does not match pattern: {pattern}"
        )))
    }
}

/// Assert that the whole string does not match the given pattern source.
pub fn assert_string_not_matches(value: &str, pattern: &str, message: &str) -> AssertResult {
    let matcher = compile_anchored(pattern, message)?;
    if matcher.is_match(value) {
        Err(AssertionError::new(format!(
            "{message} String matches pattern: {pattern}"
        )))
    } else {
        Ok(())
    }
}

/// Assert that a string matches a precompiled pattern.
///
/// Unlike [`assert_string_matches`], the pattern is used as given; anchor
/// it if the whole string must match.
pub fn assert_string_matches_pattern(value: &str, pattern: &Regex, message: &str) -> AssertResult {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} String does not match pattern: {}",
            pattern.as_str()
        )))
    }
}

/// Assert that a string is empty.
pub fn assert_string_is_empty(value: &str, message: &str) -> AssertResult {
    if value.is_empty() {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} Expected empty string, but was not."
        )))
    }
}

/// Assert that a string is not empty.
pub fn assert_string_is_not_empty(value: &str, message: &str) -> AssertResult {
    if value.is_empty() {
        Err(AssertionError::new(format!(
            "{message} Expected non-empty string, but was empty."
        )))
    } else {
        Ok(())
    }
}

/// Assert that a string is an absolute URL (scheme and authority present).
pub fn assert_valid_url(value: &str, message: &str) -> AssertResult {
    let valid = value
        .parse::<Uri>()
        .is_ok_and(|uri| uri.scheme().is_some() && uri.authority().is_some());
    if valid {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} String is not a valid URL"
        )))
    }
}

/// Assert that a string is a plausible email address.
pub fn assert_valid_email(value: &str, message: &str) -> AssertResult {
    let matcher = compile(EMAIL_PATTERN, message)?;
    if matcher.is_match(value) {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} Email address is not valid"
        )))
    }
}

/// Assert that a string parses as a date, time, or datetime under the
/// given chrono format string.
pub fn assert_date_format(value: &str, format: &str, message: &str) -> AssertResult {
    let parses = NaiveDate::parse_from_str(value, format).is_ok()
        || NaiveDateTime::parse_from_str(value, format).is_ok()
        || NaiveTime::parse_from_str(value, format).is_ok();
    if parses {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} Date does not match format: {format}"
        )))
    }
}

/// Assert that a string is a `year-month-day` calendar date.
pub fn assert_is_date(value: &str, message: &str) -> AssertResult {
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} Value is not a date"
        )))
    }
}

fn compile_anchored(pattern: &str, message: &str) -> Result<Regex, AssertionError> {
    compile(&format!("^(?:{pattern})$"), message)
}

fn compile(pattern: &str, message: &str) -> Result<Regex, AssertionError> {
    Regex::new(pattern)
        .map_err(|err| AssertionError::new(format!("{message} Invalid pattern: {err}")))
}
