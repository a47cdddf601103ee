use std::any::type_name;
use std::error::Error;
use std::fmt::{Debug, Display};

use crate::error::{AssertResult, AssertionError};

/// Assert that running the action produces an error.
pub fn assert_throws<T, E>(action: impl FnOnce() -> Result<T, E>, message: &str) -> AssertResult {
    match action() {
        Err(_) => Ok(()),
        Ok(_) => Err(AssertionError::new(format!(
            "{message} Expected an error, but none was returned."
        ))),
    }
}

/// Assert that running the action produces an error of the concrete type
/// `E`.
pub fn assert_throws_error<T, E>(
    action: impl FnOnce() -> Result<T, Box<dyn Error + 'static>>,
    message: &str,
) -> AssertResult
where
    E: Error + 'static,
{
    match action() {
        Ok(_) => Err(AssertionError::new(format!(
            "{message} Expected an error, but none was returned."
        ))),
        Err(err) if err.downcast_ref::<E>().is_some() => Ok(()),
        Err(err) => Err(AssertionError::new(format!(
            "{message} Expected error type: {}, but was: {err}",
            type_name::<E>()
        ))),
    }
}

/// Assert that running the action succeeds.
pub fn assert_does_not_throw<T, E: Display>(
    action: impl FnOnce() -> Result<T, E>,
    message: &str,
) -> AssertResult {
    match action() {
        Ok(_) => Ok(()),
        Err(err) => Err(AssertionError::new(format!(
            "{message} Expected no error, but caught: {err}"
        ))),
    }
}

/// Assert that the action returns the expected value.
pub fn assert_returns<T: PartialEq + Debug>(
    expected: &T,
    action: impl FnOnce() -> T,
    message: &str,
) -> AssertResult {
    let actual = action();
    if *expected == actual {
        Ok(())
    } else {
        Err(AssertionError::new(format!(
            "{message} Expected return: {expected:?}, but was: {actual:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    #[derive(Debug)]
    struct ParseFailure;

    impl fmt::Display for ParseFailure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("parse failure")
        }
    }

    impl Error for ParseFailure {}

    #[derive(Debug)]
    struct IoFailure;

    impl fmt::Display for IoFailure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("io failure")
        }
    }

    impl Error for IoFailure {}

    #[test]
    fn throws_detects_errors() {
        assert!(assert_throws(|| Err::<(), _>("boom"), "must fail").is_ok());
        let err = assert_throws(|| Ok::<_, String>(1), "must fail").unwrap_err();
        assert!(err.message().starts_with("must fail"));
    }

    #[test]
    fn throws_error_inspects_the_concrete_type() {
        let failing = || -> Result<(), Box<dyn Error>> { Err(Box::new(ParseFailure)) };
        assert!(assert_throws_error::<(), ParseFailure>(failing, "typed").is_ok());

        let wrong_type = || -> Result<(), Box<dyn Error>> { Err(Box::new(IoFailure)) };
        let err = assert_throws_error::<(), ParseFailure>(wrong_type, "typed").unwrap_err();
        assert!(err.message().contains("ParseFailure"));
        assert!(err.message().contains("io failure"));

        let succeeding = || -> Result<(), Box<dyn Error>> { Ok(()) };
        assert!(assert_throws_error::<(), ParseFailure>(succeeding, "typed").is_err());
    }

    #[test]
    fn no_throw_reports_the_caught_error() {
        assert!(assert_does_not_throw(|| Ok::<_, String>(1), "clean").is_ok());
        let err = assert_does_not_throw(|| Err::<(), _>("boom"), "clean").unwrap_err();
        assert!(err.message().contains("boom"));
    }

    #[test]
    fn returns_compares_the_result() {
        assert!(assert_returns(&4, || 2 + 2, "sum").is_ok());
        let err = assert_returns(&5, || 2 + 2, "sum").unwrap_err();
        assert!(err.message().contains("Expected return: 5"));
        assert!(err.message().contains("but was: 4"));
    }
}
