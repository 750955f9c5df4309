use thiserror::Error;

/// Errors that can occur while decoding a `key=value` query string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("malformed pair `{0}`: expected key=value")]
    MalformedPair(String),
    #[error("empty key in pair `{0}`")]
    EmptyKey(String),
    #[error("invalid percent escape in `{0}`")]
    InvalidEscape(String),
    #[error("percent-decoded bytes in `{0}` are not valid utf-8")]
    InvalidUtf8(String),
}

/// Errors that can occur while parsing a duration string like `2w3d`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("empty duration string")]
    Empty,
    #[error("unrecognized duration `{0}`: expected groups like 2w, 3d, 4h, 5m, 10s")]
    Unrecognized(String),
    #[error("duration `{0}` is out of range")]
    OutOfRange(String),
}

/// Errors that can occur while validating an ignore rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A rule with no query constrains nothing and must be rejected.
    #[error("ignore rule query must not be empty")]
    EmptyQuery,
    /// The rule's query string does not decode.
    #[error("invalid ignore rule query: {0}")]
    BadQuery(#[from] QueryError),
    /// The rule's expiration is not in the future.
    #[error("ignore rule has already expired")]
    Expired,
}
