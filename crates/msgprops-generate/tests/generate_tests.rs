mod common;

use common::{bundle, en_nl};
use msgprops_core::{Message, MessageBundle, MessageId, Part};
use msgprops_generate::{CodecError, CodecOptions, generate};

#[test]
fn test_generate_with_source_comments() {
    let source = bundle(
        "en",
        &[
            (20, "You have {count,plural,=0{no items}=1{one item}other{# items}}."),
            (1, "Hello {name}"),
            (3, " indented\nsecond line"),
        ],
    );

    let text = generate(&source, &en_nl()).unwrap();

    insta::assert_snapshot!(text, @r"
    # locale: nl
    # source-locale: en

    # en: Hello {name}
    1=Hello {name}

    # en:  indented\nsecond line
    3=\ indented\
    second line

    # en: You have {count,plural,=0{no items}=1{one item}other{# items}}.
    20=You have {count,plural,=0{no items}=1{one item}other{# items}}.
    ");
}

#[test]
fn test_generate_without_source_comments() {
    let source = bundle("en", &[(2, "Bye"), (1, "Hi {who}")]);
    let options = CodecOptions::builder()
        .source_locale("en")
        .target_locale("de")
        .source_comments(false)
        .build();

    let text = generate(&source, &options).unwrap();

    assert_eq!(
        text,
        "# locale: de\n# source-locale: en\n\n1=Hi {who}\n\n2=Bye\n"
    );
}

#[test]
fn test_generate_without_locales_has_no_header() {
    let source = bundle("en", &[(5, "Five")]);

    let text = generate(&source, &CodecOptions::default()).unwrap();

    assert_eq!(text, "# source: Five\n5=Five\n");
}

#[test]
fn test_generate_keeps_nested_select_verbatim() {
    let icu = "{gender,select,female{{n,plural,one{her item}other{her {n} items}}}other{their items}}";
    let source = bundle("en", &[(42, icu)]);

    let text = generate(&source, &CodecOptions::builder().source_comments(false).build()).unwrap();

    assert_eq!(text, format!("42={}\n", icu));
}

#[test]
fn test_generate_writes_non_ascii_literally() {
    let source = bundle("en", &[(1, "Grüße, {naam}! 🎉")]);

    let text = generate(&source, &CodecOptions::builder().source_comments(false).build()).unwrap();

    assert_eq!(text, "1=Grüße, {naam}! 🎉\n");
}

#[test]
fn test_generate_escapes_backslashes_and_carriage_returns() {
    let source = MessageBundle::from_messages(
        "en",
        [Message::new(
            MessageId::new(8),
            [Part::text("C:\\path\r\nnext")],
        )],
    )
    .unwrap();

    let text = generate(&source, &CodecOptions::builder().source_comments(false).build()).unwrap();

    assert_eq!(text, "8=C:\\\\path\\r\\\nnext\n");
}

#[test]
fn test_generate_empty_message() {
    let source = bundle("en", &[(1, "")]);

    let text = generate(&source, &CodecOptions::builder().source_comments(false).build()).unwrap();

    assert_eq!(text, "1=\n");
}

#[test]
fn test_generate_rejects_text_that_reads_as_expression() {
    let source = MessageBundle::from_messages(
        "en",
        [Message::new(
            MessageId::new(11),
            [Part::text("literal {brace}")],
        )],
    )
    .unwrap();

    let err = generate(&source, &en_nl()).unwrap_err();

    assert_eq!(
        err,
        CodecError::UnrepresentableMessage {
            id: MessageId::new(11),
            icu: "literal {brace}".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "Message 11 cannot be written without changing its meaning: 'literal {brace}'"
    );
}
