use thiserror::Error;

/// The reason a match session operation failed.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The regular expression engine rejected the pattern.
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    /// More positions were requested than the last match captured.
    #[error("requested {requested} capture group(s) but only {available} available")]
    Arity { requested: usize, available: usize },
    /// A captured substring could not be converted to the requested type.
    #[error("cannot convert {value:?} to {expected}")]
    Conversion { value: String, expected: String },
    /// No case matched and no fallback was registered.
    #[error("no pattern matched {subject:?}")]
    NoMatch { subject: String },
}

impl MatchError {
    pub fn is_arity(&self) -> bool {
        matches!(self, MatchError::Arity { .. })
    }

    pub fn is_conversion(&self) -> bool {
        matches!(self, MatchError::Conversion { .. })
    }
}
