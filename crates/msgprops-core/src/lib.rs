#![doc = include_str!("../README.md")]

pub mod bundle;
pub mod error;
pub mod lexer;
pub mod message;
pub mod text;

pub use bundle::{Bundle, MessageBundle};
pub use error::{BundleError, FormatError, TokenizeError};
pub use lexer::{Token, TokenKind, tokenize};
pub use message::{ComplexKind, Message, MessageId, Part};
