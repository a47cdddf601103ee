//! Shared generation defaults.

/// Alphabet for alphanumeric string generation.
pub const ALPHA_NUM: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-";

/// Domain suffix appended to generated email usernames when the caller
/// does not supply one.
pub const DEFAULT_DOMAIN: &str = "@example.com";

/// Default length for generated strings.
pub const DEFAULT_STRING_LENGTH: usize = 10;

/// Default length for the username part of generated email addresses.
pub const DEFAULT_EMAIL_USERNAME_LENGTH: usize = 10;

/// Inclusive year range for random date generation. Both bounds render as
/// four digits.
pub const YEAR_MIN: i32 = 1900;
/// See [`YEAR_MIN`].
pub const YEAR_MAX: i32 = 1999;

/// Upper bound on expand-and-revalidate rounds for phone templates.
pub const MAX_PATTERN_ATTEMPTS: u32 = 100;
