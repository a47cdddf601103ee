use thiserror::Error;

/// Errors emitted by the data generators.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// An argument violates the generator's contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A unique-sequence request cannot fit inside the given range.
    #[error("sequence length {length} exceeds range size {range_size}")]
    SequenceLengthExceedsRange { length: usize, range_size: usize },
    /// No phone template is registered for the given country code.
    #[error("unknown country code: {0}")]
    UnknownCountryCode(String),
    /// A phone template is not itself a valid regular expression.
    #[error("invalid phone pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    /// Pattern expansion kept producing strings the template rejects.
    #[error("pattern {pattern:?} not satisfied after {attempts} attempts")]
    PatternUnsatisfiable { pattern: String, attempts: u32 },
    /// A field schema violates internal invariants.
    #[error("invalid field schema: {0}")]
    InvalidSchema(String),
}

/// Convenience alias for results returned by the generators.
pub type Result<T> = std::result::Result<T, GenerationError>;
