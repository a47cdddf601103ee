use thiserror::Error;

/// Raised by every assertion helper when its check fails.
///
/// `Display` wraps the message in ANSI red so failures stand out in
/// terminal output; [`AssertionError::message`] exposes the unstyled text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\u{1b}[31m{message}\u{1b}[0m")]
pub struct AssertionError {
    message: String,
}

impl AssertionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message without terminal styling.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Convenience alias for results returned by the assertion helpers.
pub type AssertResult = Result<(), AssertionError>;
