#![doc = include_str!("../README.md")]

pub mod error;
mod escape;
mod generator;
mod options;
mod parser;
mod plugin;

pub use error::{CodecError, RecordError, RecordErrorCause};
pub use generator::generate;
pub use options::CodecOptions;
pub use parser::parse;
pub use plugin::{MessagePlugin, PropertiesIcuPlugin};
