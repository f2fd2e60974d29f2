#![allow(dead_code)] // Functions used by different test binaries appear unused per-binary

//! Shared test utilities for msgprops-generate integration tests.

use msgprops_core::{Message, MessageBundle, MessageId};
use msgprops_generate::CodecOptions;

/// Create a message from its ICU source.
pub fn message(id: u64, icu: &str) -> Message {
    Message::from_icu(MessageId::new(id), icu).unwrap()
}

/// Create a bundle from `(id, icu)` pairs.
pub fn bundle(locale: &str, entries: &[(u64, &str)]) -> MessageBundle {
    MessageBundle::from_messages(
        locale,
        entries.iter().map(|(id, icu)| message(*id, icu)),
    )
    .unwrap()
}

/// English to Dutch, the pairing used throughout the tests.
pub fn en_nl() -> CodecOptions {
    CodecOptions::new("en", "nl")
}

/// Render every message of a bundle as `(id, icu)` for readable assertions.
pub fn entries(bundle: &MessageBundle) -> Vec<(u64, String)> {
    use msgprops_core::Bundle as _;

    bundle
        .messages()
        .map(|m| (m.id().get(), m.to_icu()))
        .collect()
}
