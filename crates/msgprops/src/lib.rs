#![doc = include_str!("../README.md")]

pub use msgprops_core::{
    Bundle, BundleError, ComplexKind, FormatError, Message, MessageBundle, MessageId, Part, Token,
    TokenKind, TokenizeError, text, tokenize,
};
pub use msgprops_generate::{
    CodecError, CodecOptions, MessagePlugin, PropertiesIcuPlugin, RecordError, RecordErrorCause,
    generate, parse,
};
pub use msgprops_manager_core::{MissObserver, TracingObserver, TrackingBundle};

#[cfg(feature = "toml")]
pub use msgprops_toml::{MsgpropsConfig, MsgpropsConfigError};

mod io;
pub use io::{LoadError, load_bundle, load_bundle_with, write_extracted};
