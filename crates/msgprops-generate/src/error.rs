use msgprops_core::{BundleError, MessageId, TokenizeError};
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Two messages share an id. When parsing, `line` points at the second one.
    #[error("{}", duplicate_fmt(.id, .line))]
    DuplicateMessageId { id: MessageId, line: Option<usize> },

    /// The message would not parse back to the same parts once written.
    #[error("Message {id} cannot be written without changing its meaning: '{icu}'")]
    UnrepresentableMessage { id: MessageId, icu: String },

    /// A locale tag that cannot be written on a single header line as-is.
    #[error("{}", invalid_locale_fmt(.field, .locale))]
    InvalidLocale { field: &'static str, locale: String },

    /// Every record that failed to parse, in file order.
    #[error("{}", malformed_fmt(.errors))]
    MalformedBundle { errors: Vec<RecordError> },

    #[error("Serialization error: {0}")]
    SerializeError(#[from] std::fmt::Error),
}

fn duplicate_fmt(id: &MessageId, line: &Option<usize>) -> String {
    match line {
        Some(line) => format!("Duplicate message id {} on line {}", id, line),
        None => format!("Duplicate message id {}", id),
    }
}

fn invalid_locale_fmt(field: &str, locale: &str) -> String {
    format!(
        "Invalid {} '{}': locale tags must not contain control characters or surrounding whitespace",
        field,
        locale.escape_debug()
    )
}

fn malformed_fmt(errors: &[RecordError]) -> String {
    let mut out = format!("Malformed message bundle ({} invalid records)", errors.len());
    for error in errors {
        out.push_str("\n  ");
        out.push_str(&error.to_string());
    }
    out
}

impl From<BundleError> for CodecError {
    fn from(error: BundleError) -> Self {
        match error {
            BundleError::DuplicateMessageId(id) => CodecError::DuplicateMessageId { id, line: None },
        }
    }
}

/// A record that could not be turned into a message.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: {cause}: '{text}'")]
pub struct RecordError {
    /// 1-based line on which the record starts.
    pub line: usize,
    /// The record as it appears in the file, continuation lines included.
    pub text: String,
    #[source]
    pub cause: RecordErrorCause,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordErrorCause {
    #[error("missing '=' between message id and value")]
    MissingSeparator,

    #[error("invalid message id '{key}'")]
    InvalidKey {
        key: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid escape at byte {offset}: {reason}")]
    InvalidEscape { offset: usize, reason: &'static str },

    #[error("invalid ICU message: {0}")]
    Tokenize(#[from] TokenizeError),
}
