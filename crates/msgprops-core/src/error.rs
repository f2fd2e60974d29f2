use crate::message::MessageId;
use thiserror::Error;

/// Raised when an ICU message string cannot be split into tokens.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TokenizeError {
    /// An expression opened with `{` was still open at end of input.
    #[error("Unclosed expression starting at byte {offset}: '{source_text}'")]
    UnbalancedBraces { offset: usize, source_text: String },

    /// A `}` appeared in plain text without a matching `{`.
    #[error("Unexpected end-of-expression at byte {offset} in text block: '{source_text}'")]
    UnexpectedCloseBrace { offset: usize, source_text: String },
}

/// Raised by [`extract_wrapped_text`](crate::text::extract_wrapped_text) when
/// the input is not wrapped by the expected delimiters.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("must start with: '{expected}', found: '{found}'")]
    PrefixMismatch { expected: String, found: String },

    #[error("must end with: '{expected}', found: '{found}'")]
    SuffixMismatch { expected: String, found: String },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BundleError {
    /// Two messages in one bundle share the same id.
    #[error("Duplicate message id {0}")]
    DuplicateMessageId(MessageId),
}
