use crate::error::CodecError;
use crate::escape::{escape_comment, escape_value};
use crate::options::CodecOptions;
use msgprops_core::{Bundle, Message, MessageId};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Serializes every message of `bundle` into editable bundle text.
///
/// Entries are written by ascending id. Each message is checked to parse
/// back to the same parts before anything is written; a message that would
/// not (for instance a text part containing `}`) fails the whole call.
pub fn generate<B: Bundle + ?Sized>(
    bundle: &B,
    options: &CodecOptions,
) -> Result<String, CodecError> {
    let mut ordered: BTreeMap<MessageId, &Message> = BTreeMap::new();
    for message in bundle.messages() {
        if ordered.insert(message.id(), message).is_some() {
            return Err(CodecError::DuplicateMessageId {
                id: message.id(),
                line: None,
            });
        }
    }

    check_locale("source_locale", &options.source_locale)?;
    check_locale("target_locale", &options.target_locale)?;

    let mut out = String::new();
    write_header(&mut out, options)?;

    let comment_label = if options.source_locale.is_empty() {
        "source"
    } else {
        options.source_locale.as_str()
    };

    for message in ordered.values() {
        let icu = checked_icu(message)?;

        if !out.is_empty() {
            out.push('\n');
        }
        if options.source_comments {
            writeln!(out, "# {}: {}", comment_label, escape_comment(&icu))?;
        }
        writeln!(out, "{}={}", message.id(), escape_value(&icu))?;
    }

    tracing::debug!(
        messages = ordered.len(),
        source_locale = %options.source_locale,
        target_locale = %options.target_locale,
        "Generated message bundle text"
    );

    Ok(out)
}

fn write_header(out: &mut String, options: &CodecOptions) -> Result<(), CodecError> {
    if !options.target_locale.is_empty() {
        writeln!(out, "# locale: {}", options.target_locale)?;
    }
    if !options.source_locale.is_empty() {
        writeln!(out, "# source-locale: {}", options.source_locale)?;
    }
    Ok(())
}

/// Locale tags end up in header lines and comment labels, which are single
/// physical lines that the parser trims.
fn check_locale(field: &'static str, locale: &str) -> Result<(), CodecError> {
    if locale.chars().any(char::is_control) || locale.trim() != locale {
        return Err(CodecError::InvalidLocale {
            field,
            locale: locale.to_string(),
        });
    }
    Ok(())
}

/// Renders `message` and verifies that the rendering tokenizes back to it.
fn checked_icu(message: &Message) -> Result<String, CodecError> {
    let icu = message.to_icu();
    match Message::from_icu(message.id(), &icu) {
        Ok(reparsed) if reparsed == *message => Ok(icu),
        _ => Err(CodecError::UnrepresentableMessage {
            id: message.id(),
            icu,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msgprops_core::{MessageBundle, Part};
    use rstest::rstest;

    /// A bundle that yields whatever it was given, duplicates included.
    struct RawBundle(Vec<Message>);

    impl Bundle for RawBundle {
        fn lookup(&self, id: MessageId) -> Option<&Message> {
            self.0.iter().find(|m| m.id() == id)
        }

        fn locale(&self) -> &str {
            "en"
        }

        fn len(&self) -> usize {
            self.0.len()
        }

        fn messages(&self) -> Box<dyn Iterator<Item = &Message> + '_> {
            Box::new(self.0.iter())
        }
    }

    fn message(id: u64, parts: Vec<Part>) -> Message {
        Message::new(MessageId::new(id), parts)
    }

    #[test]
    fn test_duplicate_ids_from_bundle_are_detected() {
        let bundle = RawBundle(vec![
            message(1, vec![Part::text("one")]),
            message(2, vec![Part::text("two")]),
            message(1, vec![Part::text("uno")]),
        ]);

        assert_eq!(
            generate(&bundle, &CodecOptions::default()),
            Err(CodecError::DuplicateMessageId {
                id: MessageId::new(1),
                line: None,
            })
        );
    }

    #[test]
    fn test_text_with_brace_is_unrepresentable() {
        let bundle = MessageBundle::from_messages("en", [message(9, vec![Part::text("a } b")])]).unwrap();

        assert_eq!(
            generate(&bundle, &CodecOptions::default()),
            Err(CodecError::UnrepresentableMessage {
                id: MessageId::new(9),
                icu: "a } b".to_string(),
            })
        );
    }

    #[test]
    fn test_placeholder_that_reads_as_plural_is_unrepresentable() {
        let bundle =
            MessageBundle::from_messages("en", [message(3, vec![Part::placeholder("n,plural,x")])])
                .unwrap();

        assert!(matches!(
            generate(&bundle, &CodecOptions::default()),
            Err(CodecError::UnrepresentableMessage { .. })
        ));
    }

    #[test]
    fn test_complex_part_must_be_one_expression() {
        let bundle = MessageBundle::from_messages(
            "en",
            [message(4, vec![Part::plural("{a}{n,plural,other{x}}")])],
        )
        .unwrap();

        assert!(matches!(
            generate(&bundle, &CodecOptions::default()),
            Err(CodecError::UnrepresentableMessage { .. })
        ));
    }

    #[rstest]
    #[case::newline_in_target("en", "nl\n5=injected", "target_locale")]
    #[case::carriage_return_in_target("en", "nl\r", "target_locale")]
    #[case::newline_in_source("en\n7=x", "nl", "source_locale")]
    #[case::padded_target("en", " nl", "target_locale")]
    #[case::padded_source("en\t", "nl", "source_locale")]
    fn test_locale_that_breaks_header_is_rejected(
        #[case] source_locale: &str,
        #[case] target_locale: &str,
        #[case] field: &str,
    ) {
        let bundle = MessageBundle::from_messages("en", [message(1, vec![Part::text("Hello")])])
            .unwrap();

        let err = generate(&bundle, &CodecOptions::new(source_locale, target_locale)).unwrap_err();

        match err {
            CodecError::InvalidLocale {
                field: rejected,
                locale,
            } => {
                assert_eq!(rejected, field);
                assert!(locale == source_locale || locale == target_locale);
            },
            other => panic!("expected InvalidLocale, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_locale_message_shows_escaped_tag() {
        let bundle = MessageBundle::new("en");
        let err = generate(&bundle, &CodecOptions::new("en", "nl\nx")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid target_locale 'nl\\nx': locale tags must not contain control characters or surrounding whitespace"
        );
    }

    #[test]
    fn test_empty_bundle_without_locales_is_empty_text() {
        let bundle = MessageBundle::new("en");
        assert_eq!(generate(&bundle, &CodecOptions::default()).unwrap(), "");
    }
}
