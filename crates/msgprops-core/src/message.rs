use crate::error::TokenizeError;
use crate::lexer::{self, TokenKind};
use crate::text;
use derive_more::{Display, From, Into};

/// Stable numeric id of a message, computed upstream from the message content.
#[derive(Clone, Copy, Debug, Display, From, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(u64);

impl MessageId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComplexKind {
    Plural,
    Select,
}

/// One piece of a message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    Text(String),
    /// A simple substitution point; the name is stored without braces.
    Placeholder(String),
    /// A plural or select expression, kept verbatim including its braces.
    Complex { kind: ComplexKind, raw: String },
}

impl Part {
    pub fn text(value: impl Into<String>) -> Self {
        Part::Text(value.into())
    }

    pub fn placeholder(name: impl Into<String>) -> Self {
        Part::Placeholder(name.into())
    }

    pub fn plural(raw: impl Into<String>) -> Self {
        Part::Complex {
            kind: ComplexKind::Plural,
            raw: raw.into(),
        }
    }

    pub fn select(raw: impl Into<String>) -> Self {
        Part::Complex {
            kind: ComplexKind::Select,
            raw: raw.into(),
        }
    }

    fn write_icu(&self, out: &mut String) {
        match self {
            Part::Text(value) => out.push_str(value),
            Part::Placeholder(name) => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            },
            Part::Complex { raw, .. } => out.push_str(raw),
        }
    }
}

/// A translatable message: an id and its normalized parts.
///
/// Adjacent text parts are merged and empty text parts are dropped on
/// construction, so two messages with the same ICU rendering compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Message {
    id: MessageId,
    parts: Vec<Part>,
}

impl Message {
    pub fn new(id: MessageId, parts: impl IntoIterator<Item = Part>) -> Self {
        let mut normalized: Vec<Part> = Vec::new();
        for part in parts {
            match part {
                Part::Text(value) if value.is_empty() => {},
                Part::Text(value) => match normalized.last_mut() {
                    Some(Part::Text(previous)) => previous.push_str(&value),
                    _ => normalized.push(Part::Text(value)),
                },
                other => normalized.push(other),
            }
        }

        Self {
            id,
            parts: normalized,
        }
    }

    /// Builds a message by tokenizing an ICU formatted string.
    pub fn from_icu(id: MessageId, icu: &str) -> Result<Self, TokenizeError> {
        let mut parts = Vec::new();
        for token in lexer::tokenize(icu)? {
            let part = match token.kind {
                TokenKind::Text => Part::text(token.raw),
                TokenKind::Placeholder => match text::extract_wrapped_text(token.raw, "{", "}") {
                    Ok(name) => Part::placeholder(name),
                    // Placeholder tokens always carry their braces; anything else stays literal.
                    Err(_) => Part::text(token.raw),
                },
                TokenKind::Plural => Part::plural(token.raw),
                TokenKind::Select => Part::select(token.raw),
                TokenKind::Eof => break,
            };
            parts.push(part);
        }
        Ok(Self::new(id, parts))
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Renders the parts back to ICU message syntax.
    pub fn to_icu(&self) -> String {
        let mut out = String::new();
        for part in &self.parts {
            part.write_icu(&mut out);
        }
        out
    }
}
