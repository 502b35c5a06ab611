use thiserror::Error;

/// Main error type for asn1-tree operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Unsupported tag number for encoding: {0}")]
    UnsupportedTag(u32),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Tag number does not fit in 32 bits")]
    TagOverflow,

    #[error("Nesting too deep: limit is {0} levels")]
    NestingTooDeep(usize),
}

/// Result type alias for asn1-tree operations
pub type TreeResult<T> = Result<T, TreeError>;
