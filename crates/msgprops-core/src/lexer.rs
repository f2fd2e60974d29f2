//! Lexer for the ICU message format.
//!
//! The lexer only separates plain text from top-level `{...}` groups. A
//! plural or select expression is returned as one token that spans all of
//! its nested branches; the branches are never tokenized on their own.

use crate::error::TokenizeError;
use crate::text;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Text,
    Placeholder,
    Select,
    Plural,
    Eof,
}

/// A slice of the tokenized message together with its classification.
///
/// `raw` borrows from the input, so concatenating the `raw` of every token
/// reproduces the input exactly. The trailing [`TokenKind::Eof`] token has
/// an empty `raw`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub raw: &'a str,
}

impl<'a> Token<'a> {
    pub const fn new(kind: TokenKind, raw: &'a str) -> Self {
        Self { kind, raw }
    }

    pub const fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }
}

/// Single-pass lexer over one formatted message.
pub struct MessageFormatLexer<'a> {
    formatted_message: &'a str,
    position: usize,
}

impl<'a> MessageFormatLexer<'a> {
    pub fn new(formatted_message: &'a str) -> Self {
        Self {
            formatted_message,
            position: 0,
        }
    }

    /// Consumes the lexer and returns every token, terminated by exactly one
    /// [`TokenKind::Eof`].
    pub fn tokenize(mut self) -> Result<Vec<Token<'a>>, TokenizeError> {
        let mut tokens = Vec::new();

        while self.position < self.formatted_message.len() {
            if self.current() == b'{' {
                // {name}
                // {...,select,...}
                // {...,plural,...}
                let expr = self.extract_expression()?;
                tokens.push(Token::new(classify(expr), expr));
            } else {
                tokens.push(Token::new(TokenKind::Text, self.extract_text()?));
            }
        }
        tokens.push(Token::eof());

        Ok(tokens)
    }

    fn current(&self) -> u8 {
        self.formatted_message.as_bytes()[self.position]
    }

    fn extract_text(&mut self) -> Result<&'a str, TokenizeError> {
        let start = self.position;
        while self.position < self.formatted_message.len() && self.current() != b'{' {
            if self.current() == b'}' {
                return Err(TokenizeError::UnexpectedCloseBrace {
                    offset: self.position,
                    source_text: self.formatted_message[start..].to_string(),
                });
            }
            self.position += 1;
        }
        Ok(&self.formatted_message[start..self.position])
    }

    fn extract_expression(&mut self) -> Result<&'a str, TokenizeError> {
        let start = self.position;
        let mut depth = 1usize;
        self.position += 1; // opening brace

        while self.position < self.formatted_message.len() && depth > 0 {
            match self.current() {
                b'{' => depth += 1,
                b'}' => depth -= 1,
                _ => {},
            }
            self.position += 1;
        }

        if depth != 0 {
            return Err(TokenizeError::UnbalancedBraces {
                offset: start,
                source_text: self.formatted_message[start..].to_string(),
            });
        }
        Ok(&self.formatted_message[start..self.position])
    }
}

/// Classifies a brace-balanced expression by the keyword between its first
/// two commas. Anything other than an exact `select` or `plural` is a
/// placeholder.
fn classify(expr: &str) -> TokenKind {
    match text::between(expr, ",", ",") {
        Some("select") => TokenKind::Select,
        Some("plural") => TokenKind::Plural,
        _ => TokenKind::Placeholder,
    }
}

/// Tokenizes `message`. See [`MessageFormatLexer::tokenize`].
pub fn tokenize(message: &str) -> Result<Vec<Token<'_>>, TokenizeError> {
    MessageFormatLexer::new(message).tokenize()
}
